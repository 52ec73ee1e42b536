use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::tables::bidi_mirroring_glyph::BIDI_MIRRORING_GLYPH;
use crate::validate::{self, Violation};

/// The number of entries in the compiled mirroring table.
pub const MIRRORED_CHARS_COUNT: usize = 332;

const _: () = assert!(BIDI_MIRRORING_GLYPH.len() == MIRRORED_CHARS_COUNT);
const _: () = assert!(validate::all_scalar_values(BIDI_MIRRORING_GLYPH));
const _: () = assert!(validate::is_strictly_ascending(BIDI_MIRRORING_GLYPH));
const _: () = assert!(validate::is_involutive(BIDI_MIRRORING_GLYPH));

const UNICODE: MirroredCharTable = MirroredCharTable::unicode();

/// Returns true if and only if the given codepoint has a mirrored
/// counterpart.
pub fn is_mirrored(cp: u32) -> bool {
    UNICODE.is_mirrored(cp)
}

/// Returns the codepoint whose glyph is the mirror image of the given
/// codepoint's glyph.
///
/// Codepoints without a mirrored counterpart, including values that are not
/// codepoints at all, yield `None`.
pub fn mirror_of(cp: u32) -> Option<u32> {
    UNICODE.mirror_of(cp)
}

/// Like `mirror_of`, but for `char` values.
pub fn mirror_char(c: char) -> Option<char> {
    mirror_of(u32::from(c)).and_then(std::char::from_u32)
}

/// Returns the mirrored counterpart of `c`, or `c` itself if it has none.
///
/// This is what a renderer typically applies to every character in a
/// right-to-left run.
pub fn mirror_or_self(c: char) -> char {
    mirror_char(c).unwrap_or(c)
}

/// A single mapping from a codepoint to its mirrored counterpart.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MirrorEntry {
    /// The codepoint being looked up.
    pub source: u32,
    /// The codepoint it mirrors to in a right-to-left context.
    pub mirror: u32,
}

impl MirrorEntry {
    /// The source codepoint as a `char`, if it is a scalar value.
    pub fn source_char(&self) -> Option<char> {
        std::char::from_u32(self.source)
    }

    /// The mirror codepoint as a `char`, if it is a scalar value.
    pub fn mirror_char(&self) -> Option<char> {
        std::char::from_u32(self.mirror)
    }
}

impl From<(u32, u32)> for MirrorEntry {
    fn from((source, mirror): (u32, u32)) -> MirrorEntry {
        MirrorEntry { source, mirror }
    }
}

impl fmt::Display for MirrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X} -> U+{:04X}", self.source, self.mirror)
    }
}

/// An immutable table of mirroring pairs, sorted by source codepoint.
///
/// Most callers want the free functions at the crate root, which search the
/// compiled Unicode table. This type is useful for iterating over the table
/// or for searching a table from some other source.
#[derive(Clone, Copy, Debug)]
pub struct MirroredCharTable {
    table: &'static [(u32, u32)],
}

impl MirroredCharTable {
    /// The table compiled from Unicode's `BidiMirroring.txt`.
    pub const fn unicode() -> MirroredCharTable {
        MirroredCharTable { table: BIDI_MIRRORING_GLYPH }
    }

    /// Wrap the given slice of `(source, mirror)` pairs.
    ///
    /// The slice must be sorted by source, with no duplicates. Lookups on a
    /// slice that isn't return unspecified (but safe) results. Use
    /// `validate` to check this along with the table's other invariants.
    pub const fn new(table: &'static [(u32, u32)]) -> MirroredCharTable {
        MirroredCharTable { table }
    }

    /// Returns true if and only if `cp` appears as a source in this table.
    pub fn is_mirrored(&self, cp: u32) -> bool {
        self.position(cp).is_some()
    }

    /// Returns the mirror of `cp`, or `None` if it isn't in this table.
    pub fn mirror_of(&self, cp: u32) -> Option<u32> {
        self.position(cp).map(|i| self.table[i].1)
    }

    /// The number of entries in this table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if and only if this table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The underlying `(source, mirror)` pairs.
    pub fn as_slice(&self) -> &'static [(u32, u32)] {
        self.table
    }

    /// Iterate over every entry in ascending order of source.
    pub fn iter(&self) -> Iter {
        Iter { it: self.table.iter() }
    }

    /// Check that this table is sorted, involutive, free of self mappings
    /// and made only of Unicode scalar values.
    pub fn validate(&self) -> Result<(), Violation> {
        validate::check(self.table, None)
    }

    fn position(&self, cp: u32) -> Option<usize> {
        self.table.binary_search_by_key(&cp, |&(source, _)| source).ok()
    }
}

impl Default for MirroredCharTable {
    fn default() -> MirroredCharTable {
        MirroredCharTable::unicode()
    }
}

impl IntoIterator for MirroredCharTable {
    type Item = MirrorEntry;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a MirroredCharTable {
    type Item = MirrorEntry;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// An iterator over the entries of a `MirroredCharTable`.
#[derive(Clone, Debug)]
pub struct Iter {
    it: slice::Iter<'static, (u32, u32)>,
}

impl Iterator for Iter {
    type Item = MirrorEntry;

    fn next(&mut self) -> Option<MirrorEntry> {
        self.it.next().map(|&pair| MirrorEntry::from(pair))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<MirrorEntry> {
        self.it.next_back().map(|&pair| MirrorEntry::from(pair))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{
        is_mirrored, mirror_char, mirror_of, mirror_or_self, MirrorEntry,
        MirroredCharTable, MIRRORED_CHARS_COUNT,
    };
    use crate::validate::Violation;

    #[test]
    fn count() {
        let table = MirroredCharTable::unicode();
        assert_eq!(table.len(), MIRRORED_CHARS_COUNT);
        assert_eq!(table.len(), 332);
        assert_eq!(table.iter().len(), 332);
        assert!(!table.is_empty());
    }

    #[test]
    fn parentheses() {
        assert_eq!(mirror_of(0x0028), Some(0x0029));
        assert_eq!(mirror_of(0x0029), Some(0x0028));
        assert_eq!(mirror_char('('), Some(')'));
        assert_eq!(mirror_char(')'), Some('('));
    }

    #[test]
    fn less_than_or_equal() {
        assert!(is_mirrored(0x2264));
        assert_eq!(mirror_of(0x2264), Some(0x2265));
        assert_eq!(mirror_char('≥'), Some('≤'));
    }

    #[test]
    fn not_mirrored() {
        assert!(!is_mirrored(0x0041));
        assert_eq!(mirror_of(0x0041), None);
        assert_eq!(mirror_of(0), None);
        assert_eq!(mirror_of(0x10FFFF), None);
        assert_eq!(mirror_of(0xD800), None);
        assert_eq!(mirror_of(u32::MAX), None);
        assert_eq!(mirror_char('A'), None);
    }

    #[test]
    fn boundaries() {
        let table = MirroredCharTable::unicode();
        let first = table.iter().next().unwrap();
        let last = table.iter().next_back().unwrap();
        assert_eq!(first, MirrorEntry { source: 0x0028, mirror: 0x0029 });
        assert_eq!(last, MirrorEntry { source: 0xFF63, mirror: 0xFF62 });
        assert!(!is_mirrored(first.source - 1));
        assert!(!is_mirrored(last.source + 1));
    }

    #[test]
    fn mirror_or_self_passes_through() {
        assert_eq!(mirror_or_self('['), ']');
        assert_eq!(mirror_or_self('«'), '»');
        assert_eq!(mirror_or_self('a'), 'a');
        assert_eq!(mirror_or_self('\u{05D0}'), '\u{05D0}');
    }

    #[test]
    fn round_trip() {
        for entry in MirroredCharTable::unicode() {
            assert_eq!(mirror_of(entry.source), Some(entry.mirror));
            assert_eq!(mirror_of(entry.mirror), Some(entry.source));
            let back = mirror_of(entry.source).and_then(mirror_of);
            assert_eq!(back, Some(entry.source), "round trip of {}", entry);
        }
    }

    #[test]
    fn sources_and_mirrors_are_the_same_set() {
        let table = MirroredCharTable::unicode();
        let sources: HashSet<u32> = table.iter().map(|e| e.source).collect();
        let mirrors: HashSet<u32> = table.iter().map(|e| e.mirror).collect();
        assert_eq!(sources.len(), MIRRORED_CHARS_COUNT);
        assert_eq!(sources, mirrors);
    }

    #[test]
    fn strictly_ascending() {
        let table = MirroredCharTable::unicode();
        let sources: Vec<u32> = table.iter().map(|e| e.source).collect();
        assert!(sources.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn entries_are_chars() {
        for entry in &MirroredCharTable::unicode() {
            assert!(entry.source_char().is_some());
            assert!(entry.mirror_char().is_some());
        }
    }

    #[test]
    fn custom_table() {
        static ANGLES: &[(u32, u32)] = &[(0x3C, 0x3E), (0x3E, 0x3C)];
        let table = MirroredCharTable::new(ANGLES);
        assert_eq!(table.validate(), Ok(()));
        assert_eq!(table.mirror_of(0x3C), Some(0x3E));
        assert_eq!(table.mirror_of(0x28), None);
        assert_eq!(table.as_slice(), ANGLES);

        static BROKEN: &[(u32, u32)] = &[(0x3C, 0x3E)];
        assert_eq!(
            MirroredCharTable::new(BROKEN).validate(),
            Err(Violation::NotInvolutive { source: 0x3C, mirror: 0x3E })
        );
    }

    #[test]
    fn empty_table() {
        let table = MirroredCharTable::new(&[]);
        assert!(table.is_empty());
        assert!(!table.is_mirrored(0x28));
        assert_eq!(table.iter().next(), None);
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn display() {
        let entry = MirrorEntry::from((0x2264, 0x2265));
        assert_eq!(entry.to_string(), "U+2264 -> U+2265");
    }

    #[test]
    fn concurrent_readers() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    MirroredCharTable::unicode()
                        .iter()
                        .filter(|e| mirror_of(e.mirror) == Some(e.source))
                        .count()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), MIRRORED_CHARS_COUNT);
        }
    }
}
