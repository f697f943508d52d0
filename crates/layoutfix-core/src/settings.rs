// Layoutfix Settings Module
// User defaults for conversion direction and Persian layout handling

#![cfg(feature = "settings")]

use std::path::{Path, PathBuf};

use crate::detect::PersianLayout;
use crate::language::Language;

/// Settings for layoutfix
///
/// These settings are loaded from a TOML file
/// (default: ~/.config/layoutfix/settings.toml).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Language the text was typed under
    from: Language,

    /// Language the text was meant for
    to: Language,

    /// Convert the other way round when only that direction has a table
    try_reverse: bool,

    /// How the Persian layout variant is picked
    persian_layout: PersianLayout,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    conversion: Option<ConversionSettings>,

    #[serde(default)]
    layout: Option<LayoutSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConversionSettings {
    #[serde(default)]
    from: Option<String>,

    #[serde(default)]
    to: Option<String>,

    #[serde(default)]
    try_reverse: Option<bool>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct LayoutSettings {
    #[serde(default)]
    persian: Option<String>,
}

impl Settings {
    /// Create settings with the built-in defaults (EN -> FA, auto layout)
    pub fn new() -> Self {
        Self {
            from: Language::En,
            to: Language::Fa,
            try_reverse: true,
            persian_layout: PersianLayout::Auto,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(conversion) = toml_settings.conversion {
            if let Some(from) = conversion.from {
                settings.from = parse_language(&from)?;
            }
            if let Some(to) = conversion.to {
                settings.to = parse_language(&to)?;
            }
            if let Some(try_reverse) = conversion.try_reverse {
                settings.try_reverse = try_reverse;
            }
        }

        if let Some(layout) = toml_settings.layout {
            if let Some(persian) = layout.persian {
                settings.persian_layout = persian.parse().map_err(|_| {
                    SettingsError::InvalidValue(format!(
                        "Unknown Persian layout '{}' (expected auto, standard or legacy)",
                        persian
                    ))
                })?;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("layoutfix").join("settings.toml"))
    }

    /// Load from default location (~/.config/layoutfix/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        log::debug!("no settings file found, using defaults");
        Ok(Self::new())
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    /// Default source language
    pub fn from(&self) -> Language {
        self.from
    }

    /// Default target language
    pub fn to(&self) -> Language {
        self.to
    }

    /// Whether to fall back to the reverse direction
    pub fn try_reverse(&self) -> bool {
        self.try_reverse
    }

    /// Persian layout policy
    pub fn persian_layout(&self) -> PersianLayout {
        self.persian_layout
    }

    /// File the settings were loaded from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Override the source language
    pub fn set_from(&mut self, from: Language) {
        self.from = from;
    }

    /// Override the target language
    pub fn set_to(&mut self, to: Language) {
        self.to = to;
    }

    /// Enable or disable the reverse-direction fallback
    pub fn set_try_reverse(&mut self, try_reverse: bool) {
        self.try_reverse = try_reverse;
    }

    /// Override the Persian layout policy
    pub fn set_persian_layout(&mut self, layout: PersianLayout) {
        self.persian_layout = layout;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Accept either a code ("fa") or a display name ("Persian")
fn parse_language(value: &str) -> Result<Language, SettingsError> {
    Language::from_name_or_code(value)
        .ok_or_else(|| SettingsError::InvalidValue(format!("Unsupported language '{}'", value)))
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Layoutfix Settings
# Place this file at: ~/.config/layoutfix/settings.toml

[conversion]
# Layout the text was typed under, and the one it was meant for.
# Codes: EN, FA, AR, TR, HE, RU
from = "EN"
to = "FA"

# Convert the other way when only that direction has a table
try_reverse = true

[layout]
# Persian keyboard variant: "auto", "standard" or "legacy"
persian = "auto"
"#
}
