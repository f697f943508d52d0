// Layoutfix Converter
// Re-types text as if it had been entered under another keyboard layout

use std::borrow::Cow;
use std::sync::Arc;

use crate::detect::{LayoutVariant, PersianLayout};
use crate::language::Language;
use crate::registry::{LayoutRegistry, MapKey};

/// Fold Arabic look-alikes onto their Persian letters
fn normalize_persian(ch: char) -> char {
    match ch {
        '\u{064A}' => '\u{06CC}', // Arabic Yeh -> Farsi Yeh
        '\u{0643}' => '\u{06A9}', // Arabic Kaf -> Keheh
        _ => ch,
    }
}

/// Converts text between keyboard layouts.
///
/// Conversion fails open: unknown language codes, pairs without a table and
/// characters without an entry all come back unchanged. The output always has
/// as many characters as the input.
///
/// # Examples
/// ```
/// use layoutfix_core::Converter;
///
/// let converter = Converter::new();
/// assert_eq!(converter.convert("ghbdtn", "EN", "RU"), "привет");
/// assert_eq!(converter.convert("ghbdtn", "EN", "ZZ"), "ghbdtn");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    registry: Arc<LayoutRegistry>,
    persian_layout: PersianLayout,
}

impl Converter {
    /// Converter with its own registry and automatic Persian layout detection
    pub fn new() -> Self {
        Self::with_registry(Arc::new(LayoutRegistry::new()))
    }

    /// Converter sharing an existing registry
    pub fn with_registry(registry: Arc<LayoutRegistry>) -> Self {
        Self {
            registry,
            persian_layout: PersianLayout::Auto,
        }
    }

    /// Choose how the Persian layout variant is picked
    pub fn with_persian_layout(mut self, layout: PersianLayout) -> Self {
        self.persian_layout = layout;
        self
    }

    /// The Persian layout policy in use
    pub fn persian_layout(&self) -> PersianLayout {
        self.persian_layout
    }

    /// The registry backing this converter
    pub fn registry(&self) -> &Arc<LayoutRegistry> {
        &self.registry
    }

    /// Convert `text` typed under `from`'s layout into `to`'s layout.
    ///
    /// Language codes are case-insensitive. Returns the input borrowed when
    /// nothing could be converted.
    pub fn convert<'a>(&self, text: &'a str, from: &str, to: &str) -> Cow<'a, str> {
        if text.is_empty() {
            return Cow::Borrowed(text);
        }

        match (Language::from_code(from), Language::from_code(to)) {
            (Some(from), Some(to)) => self.convert_between(text, from, to),
            _ => {
                log::trace!("no layout for language pair {}->{}, leaving text as-is", from, to);
                Cow::Borrowed(text)
            }
        }
    }

    /// Like [`convert`](Self::convert), with already-parsed languages
    pub fn convert_between<'a>(&self, text: &'a str, from: Language, to: Language) -> Cow<'a, str> {
        if text.is_empty() {
            return Cow::Borrowed(text);
        }

        let key = self.resolve_key(text, from, to);
        let tables = self.registry.ensure_built();
        let Some(map) = tables.get(&key) else {
            log::trace!("no table {}, leaving text as-is", key);
            return Cow::Borrowed(text);
        };

        // Only the EN->FA direction folds Arabic look-alikes; doing it for
        // FA->EN would break the shifted Arabic Yeh / Kaf keys.
        let normalize = from == Language::En && to == Language::Fa;

        let converted: String = text
            .chars()
            .map(|raw| {
                let ch = if normalize { normalize_persian(raw) } else { raw };
                map.translate(ch)
            })
            .collect();

        Cow::Owned(converted)
    }

    /// Pick the table key for a conversion, detecting the Persian variant
    /// from the input when either side is Persian
    fn resolve_key(&self, text: &str, from: Language, to: Language) -> MapKey {
        let key = MapKey::new(from, to);
        if !key.touches_persian() {
            return key;
        }

        let variant = self.persian_layout.resolve(text);
        log::trace!("using {} Persian layout for {}->{}", variant, from, to);
        MapKey { variant: Some(variant), ..key }
    }

    /// Check whether any table exists for a pair of language codes.
    ///
    /// Probes the plain key and both Persian variant keys.
    pub fn has_mapping(&self, from: &str, to: &str) -> bool {
        match (Language::from_code(from), Language::from_code(to)) {
            (Some(from), Some(to)) => self.has_mapping_between(from, to),
            _ => false,
        }
    }

    /// Like [`has_mapping`](Self::has_mapping), with already-parsed languages
    pub fn has_mapping_between(&self, from: Language, to: Language) -> bool {
        let tables = self.registry.ensure_built();
        let plain = MapKey::new(from, to);

        [
            plain,
            MapKey {
                variant: Some(LayoutVariant::Standard),
                ..plain
            },
            MapKey {
                variant: Some(LayoutVariant::Legacy),
                ..plain
            },
        ]
        .iter()
        .any(|key| tables.contains(key))
    }

    /// Decide which direction to convert in.
    ///
    /// Returns the requested pair if it has a table, the swapped pair if only
    /// that one does, or `None` when neither direction is supported.
    pub fn resolve_direction(&self, from: &str, to: &str) -> Option<(Language, Language)> {
        let from = Language::from_code(from)?;
        let to = Language::from_code(to)?;

        if self.has_mapping_between(from, to) {
            Some((from, to))
        } else if self.has_mapping_between(to, from) {
            log::debug!("no {}->{} table, using {}->{}", from, to, to, from);
            Some((to, from))
        } else {
            None
        }
    }

    /// Languages the engine has tables for, in a fixed order
    pub fn supported_languages(&self) -> &'static [Language] {
        Language::all()
    }

    /// Drop the cached tables; they are rebuilt on the next conversion
    pub fn invalidate(&self) {
        self.registry.invalidate();
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charmap::CharMap;
    use crate::registry::LayoutTables;

    #[test]
    fn test_normalize_persian() {
        assert_eq!(normalize_persian('\u{064A}'), '\u{06CC}');
        assert_eq!(normalize_persian('\u{0643}'), '\u{06A9}');
        assert_eq!(normalize_persian('a'), 'a');
    }

    #[test]
    fn test_empty_text_is_borrowed() {
        let converter = Converter::new();
        assert!(matches!(converter.convert("", "EN", "FA"), Cow::Borrowed("")));
        // The fast path does not even build the tables
        assert!(!converter.registry().is_built());
    }

    #[test]
    fn test_unknown_pair_is_borrowed() {
        let converter = Converter::new();
        assert!(matches!(converter.convert("abc", "EN", "ZZ"), Cow::Borrowed("abc")));
        assert!(matches!(converter.convert("abc", "EN", "EN"), Cow::Borrowed("abc")));
        assert!(matches!(converter.convert("abc", "FA", "AR"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_known_pair_converts() {
        let converter = Converter::new();
        assert_eq!(converter.convert("sghl", "EN", "FA"), "سلام");
        assert_eq!(converter.convert("سلام", "FA", "EN"), "sghl");
    }

    #[test]
    fn test_normalization_only_for_en_to_fa() {
        let converter = Converter::new();
        // EN->FA folds Arabic Yeh to Farsi Yeh, which has no EN_FA entry
        assert_eq!(converter.convert("\u{064A}", "EN", "FA"), "\u{06CC}");
        assert_eq!(converter.convert("\u{0643}", "en", "fa"), "\u{06A9}");
        // FA->EN looks the raw Arabic Yeh up: it is shift+D
        assert_eq!(converter.convert("\u{064A}", "FA", "EN"), "D");
        assert_eq!(converter.convert("\u{0643}", "FA", "EN"), "Z");
    }

    #[test]
    fn test_persian_layout_override() {
        let auto = Converter::new();
        let legacy = Converter::new().with_persian_layout(PersianLayout::Legacy);

        assert_eq!(auto.convert("\\", "EN", "FA"), "\\");
        assert_eq!(legacy.convert("\\", "EN", "FA"), "\u{0698}");
        assert_eq!(legacy.persian_layout(), PersianLayout::Legacy);
    }

    #[test]
    fn test_has_mapping() {
        let converter = Converter::new();
        assert!(converter.has_mapping("EN", "FA"));
        assert!(converter.has_mapping("fa", "en"));
        assert!(converter.has_mapping("EN", "RU"));
        assert!(converter.has_mapping("he", "EN"));
        assert!(!converter.has_mapping("FA", "AR"));
        assert!(!converter.has_mapping("EN", "EN"));
        assert!(!converter.has_mapping("EN", "ZZ"));
    }

    #[test]
    fn test_resolve_direction_prefers_requested() {
        let converter = Converter::new();
        assert_eq!(
            converter.resolve_direction("ru", "en"),
            Some((Language::Ru, Language::En))
        );
        assert_eq!(converter.resolve_direction("AR", "FA"), None);
        assert_eq!(converter.resolve_direction("EN", "ZZ"), None);
    }

    #[test]
    fn test_resolve_direction_falls_back_to_reverse() {
        fn one_way() -> LayoutTables {
            let mut tables = LayoutTables::new();
            tables.insert(
                MapKey::new(Language::En, Language::Ru),
                CharMap::from_pairs(&[('q', 'й')]),
            );
            tables
        }

        let converter = Converter::with_registry(Arc::new(LayoutRegistry::with_builder(one_way)));
        assert_eq!(
            converter.resolve_direction("RU", "EN"),
            Some((Language::En, Language::Ru))
        );
        assert!(!converter.has_mapping("RU", "EN"));
    }

    #[test]
    fn test_supported_languages() {
        let codes: Vec<&str> = Converter::new()
            .supported_languages()
            .iter()
            .map(|lang| lang.code())
            .collect();
        assert_eq!(codes, vec!["EN", "FA", "AR", "TR", "HE", "RU"]);
    }

    #[test]
    fn test_invalidate_rebuilds_on_next_use() {
        let converter = Converter::new();
        let _ = converter.convert("a", "EN", "RU");
        converter.invalidate();
        assert!(!converter.registry().is_built());

        assert_eq!(converter.convert("a", "EN", "RU"), "ф");
        assert_eq!(converter.registry().build_count(), 2);
    }
}
