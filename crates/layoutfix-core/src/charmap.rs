// Layoutfix Character Map
// Single-character substitution table with deterministic reversal

use indexmap::IndexMap;

/// A char -> char substitution table.
///
/// Entries remember the order they were first inserted in. Overwriting an
/// existing key updates its value but keeps its original position, so a table
/// built from the same literal rows always iterates the same way. That order
/// decides which entry survives when the table is reversed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharMap {
    entries: IndexMap<char, char>,
}

impl CharMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Build a map from literal pairs, in order
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        let mut map = Self::new();
        for &(from, to) in pairs {
            map.insert(from, to);
        }
        map
    }

    /// Insert or overwrite a single entry, returning the previous value
    pub fn insert(&mut self, from: char, to: char) -> Option<char> {
        self.entries.insert(from, to)
    }

    /// Pair up one keyboard row positionally.
    ///
    /// Stops at the end of the shorter string; surplus characters on either
    /// side are left unmapped.
    pub fn map_row(&mut self, source: &str, target: &str) {
        for (from, to) in source.chars().zip(target.chars()) {
            self.entries.insert(from, to);
        }
    }

    /// Look up a character
    pub fn get(&self, ch: char) -> Option<char> {
        self.entries.get(&ch).copied()
    }

    /// Map a character, passing it through when it has no entry
    pub fn translate(&self, ch: char) -> char {
        self.get(ch).unwrap_or(ch)
    }

    /// Check whether a character has an entry
    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    /// Invert every pair.
    ///
    /// When several keys share a value, the key inserted first wins and the
    /// rest are dropped. Never fails.
    pub fn reversed(&self) -> CharMap {
        let mut reversed = IndexMap::with_capacity(self.entries.len());
        for (&from, &to) in &self.entries {
            reversed.entry(to).or_insert(from);
        }
        CharMap { entries: reversed }
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&from, &to)| (from, to))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_row_pairs_positionally() {
        let mut map = CharMap::new();
        map.map_row("abc", "xyz");

        assert_eq!(map.get('a'), Some('x'));
        assert_eq!(map.get('c'), Some('z'));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_map_row_stops_at_shorter_side() {
        let mut map = CharMap::new();
        map.map_row("abcd", "xy");
        assert_eq!(map.len(), 2);
        assert!(!map.contains('c'));

        let mut map = CharMap::new();
        map.map_row("ab", "xyz");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get('b'), Some('y'));
    }

    #[test]
    fn test_translate_passes_unmapped_through() {
        let map = CharMap::from_pairs(&[('a', 'b')]);
        assert_eq!(map.translate('a'), 'b');
        assert_eq!(map.translate('?'), '?');
    }

    #[test]
    fn test_reversed_first_inserted_wins() {
        let map = CharMap::from_pairs(&[('q', '\''), ('w', 'k'), ('Q', '\'')]);
        let reversed = map.reversed();

        assert_eq!(reversed.get('\''), Some('q'));
        assert_eq!(reversed.get('k'), Some('w'));
        assert_eq!(reversed.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_original_position() {
        // 'x' is inserted first, then overwritten to collide with 'y'.
        // It keeps its first slot, so it still wins the reversal.
        let mut map = CharMap::from_pairs(&[('x', '1'), ('y', '2')]);
        map.insert('x', '2');

        let keys: Vec<char> = map.iter().map(|(from, _)| from).collect();
        assert_eq!(keys, vec!['x', 'y']);
        assert_eq!(map.reversed().get('2'), Some('x'));
        assert_eq!(map.reversed().get('1'), None);
    }

    #[test]
    fn test_reversed_of_empty_is_empty() {
        assert!(CharMap::new().reversed().is_empty());
    }
}
