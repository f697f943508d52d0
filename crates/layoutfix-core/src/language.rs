// Layoutfix Languages
// Language codes understood by the layout tables

use strum::VariantArray;
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// A keyboard input language the engine has layout tables for.
///
/// Codes are two uppercase letters on output and parse case-insensitively,
/// so `"fa"`, `"Fa"` and `"FA"` all resolve to [`Language::Fa`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Language {
    En,
    Fa,
    Ar,
    Tr,
    He,
    Ru,
}

impl Language {
    /// Every supported language, in declaration order
    pub fn all() -> &'static [Language] {
        Self::VARIANTS
    }

    /// The uppercase two-letter code
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// English display name
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fa => "Persian",
            Language::Ar => "Arabic",
            Language::Tr => "Turkish",
            Language::He => "Hebrew",
            Language::Ru => "Russian",
        }
    }

    /// Parse a language code, case-insensitively
    pub fn from_code(code: &str) -> Option<Language> {
        code.parse().ok()
    }

    /// Resolve user input that may be either a display name or a code.
    ///
    /// Names are tried first ("persian" -> FA), then codes ("fa" -> FA).
    pub fn from_name_or_code(input: &str) -> Option<Language> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|lang| lang.name().eq_ignore_ascii_case(input))
            .or_else(|| Self::from_code(input))
    }
}

/// Display name for a code, or the code itself when it is not supported
pub fn display_name(code: &str) -> String {
    Language::from_code(code)
        .map(|lang| lang.name().to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_parsing_is_case_insensitive() {
        assert_eq!(Language::from_code("FA"), Some(Language::Fa));
        assert_eq!(Language::from_code("fa"), Some(Language::Fa));
        assert_eq!(Language::from_code("rU"), Some(Language::Ru));
        assert_eq!(Language::from_code("ZZ"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_display_matches_code() {
        for &lang in Language::all() {
            assert_eq!(lang.to_string(), lang.code());
            assert_eq!(lang.as_ref(), lang.code());
        }
    }

    #[test]
    fn test_all_matches_declaration_order() {
        let codes: Vec<&str> = Language::all().iter().map(|lang| lang.code()).collect();
        assert_eq!(codes, ["EN", "FA", "AR", "TR", "HE", "RU"]);
    }

    #[test]
    fn test_from_name_or_code() {
        assert_eq!(Language::from_name_or_code("Persian"), Some(Language::Fa));
        assert_eq!(Language::from_name_or_code("hebrew"), Some(Language::He));
        assert_eq!(Language::from_name_or_code("tr"), Some(Language::Tr));
        assert_eq!(Language::from_name_or_code("Klingon"), None);
    }

    #[test]
    fn test_display_name_falls_back_to_code() {
        assert_eq!(display_name("ru"), "Russian");
        assert_eq!(display_name("XX"), "XX");
    }
}
