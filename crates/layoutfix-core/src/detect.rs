// Layoutfix Persian Layout Detection
// Guesses which of the two Persian keyboard layouts produced a piece of text

use std::ops::RangeInclusive;

use strum_macros::{Display, EnumString, IntoStaticStr};

/// Tanween, Fathah, Dammah, Kasrah, Shaddah and Sukun
const ARABIC_DIACRITICS: RangeInclusive<char> = '\u{064B}'..='\u{0652}';

/// Jeh, reached straight from backslash only on the legacy layout
const JEH: char = '\u{0698}';

/// One of the two competing Persian keyboard layouts.
///
/// Displays and parses as the suffix used in table keys (`STD`, `LEG`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum LayoutVariant {
    /// The national standard layout
    #[strum(serialize = "STD")]
    Standard,
    /// The older layout where backslash types Jeh
    #[strum(serialize = "LEG")]
    Legacy,
}

impl LayoutVariant {
    /// Suffix used in textual table keys
    pub fn suffix(self) -> &'static str {
        self.into()
    }

    /// Run [`detect_persian_layout`] and return the variant it picks
    pub fn detect(text: &str) -> LayoutVariant {
        if detect_persian_layout(text) {
            LayoutVariant::Standard
        } else {
            LayoutVariant::Legacy
        }
    }
}

/// Decide whether `text` was typed on the standard Persian layout.
///
/// Returns `true` for standard and `false` for legacy. First match wins:
///
/// 1. empty text is standard
/// 2. any Arabic diacritic (U+064B..=U+0652) means standard, since those are
///    only reachable through the standard layout's shift level
/// 3. a Jeh (U+0698) means legacy
/// 4. anything else is standard
///
/// This looks at output glyphs, not at the keyboard driver, so it is a
/// heuristic. Text typed on the legacy layout that happens not to contain a
/// Jeh is reported as standard.
pub fn detect_persian_layout(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    if text.chars().any(|c| ARABIC_DIACRITICS.contains(&c)) {
        return true;
    }
    if text.contains(JEH) {
        return false;
    }
    true
}

/// How the converter picks a Persian layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PersianLayout {
    /// Inspect the input text with [`detect_persian_layout`]
    #[default]
    #[strum(to_string = "auto")]
    Auto,
    /// Always use the standard tables
    #[strum(to_string = "standard", serialize = "std")]
    Standard,
    /// Always use the legacy tables
    #[strum(to_string = "legacy", serialize = "leg")]
    Legacy,
}

impl PersianLayout {
    /// Pick the variant to use for `text`
    pub fn resolve(self, text: &str) -> LayoutVariant {
        match self {
            PersianLayout::Auto => LayoutVariant::detect(text),
            PersianLayout::Standard => LayoutVariant::Standard,
            PersianLayout::Legacy => LayoutVariant::Legacy,
        }
    }
}

impl From<LayoutVariant> for PersianLayout {
    fn from(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Standard => PersianLayout::Standard,
            LayoutVariant::Legacy => PersianLayout::Legacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_standard() {
        assert!(detect_persian_layout(""));
    }

    #[test]
    fn test_diacritic_is_standard() {
        assert!(detect_persian_layout("\u{0650}"));
        assert!(detect_persian_layout("\u{064B}"));
        assert!(detect_persian_layout("\u{0652}"));
    }

    #[test]
    fn test_jeh_without_diacritic_is_legacy() {
        assert!(!detect_persian_layout("\u{0698}"));
        assert!(!detect_persian_layout("abc \u{0698} def"));
    }

    #[test]
    fn test_diacritic_beats_jeh() {
        assert!(detect_persian_layout("\u{0698}\u{064E}"));
        assert!(detect_persian_layout("\u{064E}\u{0698}"));
    }

    #[test]
    fn test_plain_text_is_standard() {
        assert!(detect_persian_layout("hello"));
        assert!(detect_persian_layout("\u{0633}\u{0644}\u{0627}\u{0645}"));
        // Just outside the diacritic range on both sides
        assert!(detect_persian_layout("\u{064A}\u{0653}"));
    }

    #[test]
    fn test_variant_detect() {
        assert_eq!(LayoutVariant::detect(""), LayoutVariant::Standard);
        assert_eq!(LayoutVariant::detect("\u{0698}"), LayoutVariant::Legacy);
    }

    #[test]
    fn test_suffix_round_trip() {
        assert_eq!(LayoutVariant::Standard.suffix(), "STD");
        assert_eq!(LayoutVariant::Legacy.to_string(), "LEG");
        assert_eq!("std".parse::<LayoutVariant>(), Ok(LayoutVariant::Standard));
        assert_eq!("Leg".parse::<LayoutVariant>(), Ok(LayoutVariant::Legacy));
        assert!("NEW".parse::<LayoutVariant>().is_err());
    }

    #[test]
    fn test_persian_layout_parsing() {
        assert_eq!("auto".parse::<PersianLayout>(), Ok(PersianLayout::Auto));
        assert_eq!("Standard".parse::<PersianLayout>(), Ok(PersianLayout::Standard));
        assert_eq!("STD".parse::<PersianLayout>(), Ok(PersianLayout::Standard));
        assert_eq!("legacy".parse::<PersianLayout>(), Ok(PersianLayout::Legacy));
        assert!("qwerty".parse::<PersianLayout>().is_err());
    }

    #[test]
    fn test_persian_layout_resolve() {
        assert_eq!(PersianLayout::Auto.resolve("\u{0698}"), LayoutVariant::Legacy);
        assert_eq!(PersianLayout::Standard.resolve("\u{0698}"), LayoutVariant::Standard);
        assert_eq!(PersianLayout::Legacy.resolve(""), LayoutVariant::Legacy);
        assert_eq!(PersianLayout::from(LayoutVariant::Legacy), PersianLayout::Legacy);
    }
}
