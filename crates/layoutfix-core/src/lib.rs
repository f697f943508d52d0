// Layoutfix Core Library
// Keyboard layout transliteration: re-types text typed under the wrong layout

pub mod charmap;
pub mod convert;
pub mod detect;
pub mod language;
pub mod registry;
pub mod tables;

#[cfg(feature = "settings")]
pub mod settings;

pub use charmap::CharMap;
pub use convert::Converter;
pub use detect::{detect_persian_layout, LayoutVariant, PersianLayout};
pub use language::{display_name, Language};
pub use registry::{LayoutRegistry, LayoutTables, MapKey, MapKeyParseError};
pub use tables::build_tables;

#[cfg(feature = "settings")]
pub use settings::{default_settings_content, Settings, SettingsError};
