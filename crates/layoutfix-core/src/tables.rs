// Layoutfix Layout Tables
// Literal keyboard layout data and construction of the full table set

use crate::charmap::CharMap;
use crate::detect::LayoutVariant;
use crate::language::Language;
use crate::registry::{LayoutTables, MapKey};

/// Digit and punctuation keys every row-zipped layout passes through as-is
const DIGIT_ROW: &str = "1234567890-=";

/// English key -> standard Persian output, in keyboard order.
///
/// Order matters: it fixes which key wins when the table is reversed.
pub const PERSIAN_STANDARD: &[(char, char)] = &[
    // Digit row
    ('`', '\u{200D}'),
    ('1', '\u{06F1}'),
    ('2', '\u{06F2}'),
    ('3', '\u{06F3}'),
    ('4', '\u{06F4}'),
    ('5', '\u{06F5}'),
    ('6', '\u{06F6}'),
    ('7', '\u{06F7}'),
    ('8', '\u{06F8}'),
    ('9', '\u{06F9}'),
    ('0', '\u{06F0}'),
    ('-', '\u{002D}'),
    ('=', '\u{003D}'),

    // Digit row, shifted
    ('~', '\u{00F7}'),
    ('!', '\u{0021}'),
    ('@', '\u{066C}'),
    ('#', '\u{066B}'),
    ('$', '\u{FDFC}'),
    ('%', '\u{066A}'),
    ('^', '\u{00D7}'),
    ('&', '\u{060C}'),
    ('*', '\u{002A}'),
    ('(', '\u{0029}'),
    (')', '\u{0028}'),
    ('_', '\u{0640}'),
    ('+', '\u{002B}'),

    // Top row
    ('q', '\u{0636}'),
    ('w', '\u{0635}'),
    ('e', '\u{062B}'),
    ('r', '\u{0642}'),
    ('t', '\u{0641}'),
    ('y', '\u{063A}'),
    ('u', '\u{0639}'),
    ('i', '\u{0647}'),
    ('o', '\u{062E}'),
    ('p', '\u{062D}'),
    ('[', '\u{062C}'),
    (']', '\u{0686}'),

    // Top row, shifted
    ('Q', '\u{0652}'),
    ('W', '\u{064C}'),
    ('E', '\u{064D}'),
    ('R', '\u{064B}'),
    ('T', '\u{064F}'),
    ('Y', '\u{0650}'),
    ('U', '\u{064E}'),
    ('I', '\u{0651}'),
    ('O', '\u{005D}'),
    ('P', '\u{005B}'),
    ('{', '\u{007D}'),
    ('}', '\u{007B}'),

    // Home row
    ('a', '\u{0634}'),
    ('s', '\u{0633}'),
    ('d', '\u{06CC}'),
    ('f', '\u{0628}'),
    ('g', '\u{0644}'),
    ('h', '\u{0627}'),
    ('j', '\u{062A}'),
    ('k', '\u{0646}'),
    ('l', '\u{0645}'),
    (';', '\u{06A9}'),
    ('\'', '\u{06AF}'),

    // Home row, shifted
    ('A', '\u{0624}'),
    ('S', '\u{0626}'),
    ('D', '\u{064A}'),
    ('F', '\u{0625}'),
    ('G', '\u{0623}'),
    ('H', '\u{0622}'),
    ('J', '\u{0629}'),
    ('K', '\u{00BB}'),
    ('L', '\u{00AB}'),
    (':', '\u{003A}'),
    ('"', '\u{061B}'),

    // Bottom row
    ('z', '\u{0638}'),
    ('x', '\u{0637}'),
    ('c', '\u{0632}'),
    ('v', '\u{0631}'),
    ('b', '\u{0630}'),
    ('n', '\u{062F}'),
    ('m', '\u{067E}'),
    (',', '\u{0648}'),
    ('.', '\u{002E}'),
    ('/', '\u{002F}'),

    // Bottom row, shifted
    ('Z', '\u{0643}'),
    ('X', '\u{0653}'),
    ('C', '\u{0698}'),
    ('V', '\u{0670}'),
    ('B', '\u{200C}'),
    ('N', '\u{0654}'),
    ('M', '\u{0621}'),
    ('<', '\u{003E}'),
    ('>', '\u{003C}'),
    ('?', '\u{061F}'),

    // Backslash key
    ('\\', '\u{005C}'),
    ('|', '\u{007C}'),

    // Space
    (' ', '\u{0020}'),
];

/// Key whose output distinguishes the legacy Persian layout
const LEGACY_OVERRIDE: (char, char) = ('\\', '\u{0698}');

/// English -> standard Persian
pub fn persian_standard() -> CharMap {
    CharMap::from_pairs(PERSIAN_STANDARD)
}

/// English -> legacy Persian: the standard table with backslash typing Jeh
pub fn persian_legacy() -> CharMap {
    let mut map = persian_standard();
    map.insert(LEGACY_OVERRIDE.0, LEGACY_OVERRIDE.1);
    map
}

/// English -> Arabic (101 layout)
pub fn arabic() -> CharMap {
    let mut map = CharMap::new();
    map.map_row(DIGIT_ROW, "١٢٣٤٥٦٧٨٩٠-=");
    map.map_row("qwertyuiop[]\\", "ضصثقفغعهخحجد\\");
    map.map_row("asdfghjkl;'", "شسيبلاتنمكط");
    map.map_row("zxcvbnm,./", "ئءؤرىةوز,.");
    map.insert(' ', ' ');
    map.insert('`', 'ذ');
    map.insert('~', '\u{0651}');
    map
}

/// English -> Turkish
pub fn turkish() -> CharMap {
    let mut map = CharMap::new();
    map.map_row("abcdefghijklmnopqrstuvwxyz", "abcçdefgğhıijklmnoöprsştuüvyz");
    map.map_row("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "ABCÇDEFGĞHIİJKLMNOÖPRSŞTUÜVYZ");
    map.map_row(DIGIT_ROW, DIGIT_ROW);
    map.insert(' ', ' ');
    map
}

/// English -> Hebrew
///
/// Shifted letters produce the same Hebrew letters as unshifted ones, so the
/// reverse table keeps only the lowercase keys.
pub fn hebrew() -> CharMap {
    let mut map = CharMap::new();
    map.map_row("qwertyuiop", "'קראטוןםפ");
    map.map_row("asdfghjkl", "שדגכעיחל");
    map.map_row("zxcvbnm", "זסבנהצ");
    map.map_row("QWERTYUIOPASDFGHJKLZXCVBNM", "'קראטוןםפשדגכעיחלזסבנהצ");
    map.map_row(DIGIT_ROW, DIGIT_ROW);
    map.insert(' ', ' ');
    map
}

/// English -> Russian (ЙЦУКЕН)
pub fn russian() -> CharMap {
    let mut map = CharMap::new();
    map.map_row("qwertyuiop[]\\", "йцукенгшщзхъ");
    map.map_row("asdfghjkl;'", "фывапролджэ");
    map.map_row("zxcvbnm,./", "ячсмитьбю.");
    map.map_row("QWERTYUIOPASDFGHJKLZXCVBNM", "ЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮ");
    map.map_row(DIGIT_ROW, DIGIT_ROW);
    map.insert(' ', ' ');
    map
}

/// Build every table the engine knows, forward and reverse.
///
/// Keys are inserted in a fixed order: both Persian variants first, then
/// Arabic, Turkish, Hebrew and Russian, each followed by its reversal.
pub fn build_tables() -> LayoutTables {
    let mut tables = LayoutTables::new();

    for (variant, forward) in [
        (LayoutVariant::Standard, persian_standard()),
        (LayoutVariant::Legacy, persian_legacy()),
    ] {
        let reverse = forward.reversed();
        tables.insert(MapKey::variant(Language::En, Language::Fa, variant), forward);
        tables.insert(MapKey::variant(Language::Fa, Language::En, variant), reverse);
    }

    for (lang, forward) in [
        (Language::Ar, arabic()),
        (Language::Tr, turkish()),
        (Language::He, hebrew()),
        (Language::Ru, russian()),
    ] {
        let reverse = forward.reversed();
        tables.insert(MapKey::new(Language::En, lang), forward);
        tables.insert(MapKey::new(lang, Language::En), reverse);
    }

    tables
}
