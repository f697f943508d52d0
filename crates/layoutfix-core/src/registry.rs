// Layoutfix Layout Registry
// Build-once, invalidatable store for every layout table

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::charmap::CharMap;
use crate::detect::LayoutVariant;
use crate::language::Language;
use crate::tables;

/// Identifies one table: a direction plus, for Persian, a layout variant.
///
/// Formats as `EN_RU` or `EN_FA_STD` / `FA_EN_LEG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapKey {
    pub from: Language,
    pub to: Language,
    pub variant: Option<LayoutVariant>,
}

impl MapKey {
    /// Key for a pair without a layout variant
    pub fn new(from: Language, to: Language) -> Self {
        Self {
            from,
            to,
            variant: None,
        }
    }

    /// Key for a pair with a Persian layout variant
    pub fn variant(from: Language, to: Language, variant: LayoutVariant) -> Self {
        Self {
            from,
            to,
            variant: Some(variant),
        }
    }

    /// Check whether either side of the pair is Persian
    pub fn touches_persian(&self) -> bool {
        self.from == Language::Fa || self.to == Language::Fa
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.from, self.to)?;
        if let Some(variant) = self.variant {
            write!(f, "_{}", variant)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a textual table key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapKeyParseError {
    #[error("table key must look like FROM_TO or FROM_TO_VARIANT, got '{0}'")]
    Malformed(String),

    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("unknown layout variant: '{0}'")]
    UnknownVariant(String),
}

impl FromStr for MapKey {
    type Err = MapKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('_').collect();
        let (from, to, variant) = match parts.as_slice() {
            [from, to] => (*from, *to, None),
            [from, to, variant] => (*from, *to, Some(*variant)),
            _ => return Err(MapKeyParseError::Malformed(s.to_string())),
        };

        let language = |code: &str| {
            Language::from_code(code).ok_or_else(|| MapKeyParseError::UnknownLanguage(code.to_string()))
        };
        let from = language(from)?;
        let to = language(to)?;
        let variant = variant
            .map(|v| {
                v.parse::<LayoutVariant>()
                    .map_err(|_| MapKeyParseError::UnknownVariant(v.to_string()))
            })
            .transpose()?;

        Ok(Self { from, to, variant })
    }
}

/// The full set of tables, keyed by [`MapKey`], in construction order
#[derive(Debug, Clone, Default)]
pub struct LayoutTables {
    maps: IndexMap<MapKey, CharMap>,
}

impl LayoutTables {
    /// Create an empty table set
    pub fn new() -> Self {
        Self {
            maps: IndexMap::new(),
        }
    }

    /// Add or replace a table
    pub fn insert(&mut self, key: MapKey, map: CharMap) {
        self.maps.insert(key, map);
    }

    /// Look up a table
    pub fn get(&self, key: &MapKey) -> Option<&CharMap> {
        self.maps.get(key)
    }

    /// Check whether a table exists
    pub fn contains(&self, key: &MapKey) -> bool {
        self.maps.contains_key(key)
    }

    /// Iterate keys in construction order
    pub fn keys(&self) -> impl Iterator<Item = &MapKey> {
        self.maps.keys()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Check if there are no tables
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

/// Owns the layout tables and builds them on first use.
///
/// The build runs under the lock, so concurrent callers either get the cached
/// set or wait for the one build in progress; nobody sees a partial set.
/// Callers receive an `Arc` snapshot, so [`invalidate`](Self::invalidate)
/// only affects lookups that start afterwards.
pub struct LayoutRegistry {
    tables: Mutex<Option<Arc<LayoutTables>>>,
    builder: fn() -> LayoutTables,
    builds: AtomicUsize,
}

impl LayoutRegistry {
    /// Registry over the built-in layout tables
    pub fn new() -> Self {
        Self::with_builder(tables::build_tables)
    }

    /// Registry that builds its tables with `builder`
    pub fn with_builder(builder: fn() -> LayoutTables) -> Self {
        Self {
            tables: Mutex::new(None),
            builder,
            builds: AtomicUsize::new(0),
        }
    }

    /// Return the table set, building it if needed
    pub fn ensure_built(&self) -> Arc<LayoutTables> {
        let mut slot = self.tables.lock();
        if let Some(tables) = slot.as_ref() {
            return Arc::clone(tables);
        }

        let tables = Arc::new((self.builder)());
        let count = self.builds.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("built {} layout tables (build #{})", tables.len(), count);

        *slot = Some(Arc::clone(&tables));
        tables
    }

    /// Drop the cached tables; the next access rebuilds them
    pub fn invalidate(&self) {
        let mut slot = self.tables.lock();
        if slot.take().is_some() {
            log::debug!("layout tables invalidated");
        }
    }

    /// Check whether tables are currently cached
    pub fn is_built(&self) -> bool {
        self.tables.lock().is_some()
    }

    /// How many times the tables have been built
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRegistry")
            .field("built", &self.is_built())
            .field("builds", &self.build_count())
            .finish()
    }
}
