/*!
Integrity checks for mirroring tables.

A mirroring table is only usable if its `source` column is strictly increasing
(so that it can be binary searched) and if mirroring is an involution: for
every entry `(a, b)` there must also be an entry `(b, a)`. These properties
are established when the table is generated, so nothing here runs on the
lookup path. Instead, the compiled table is checked in `const` context (a bad
table fails to compile), by unit tests and by `bidi-mirror verify`.
*/

use std::collections::BTreeMap;
use std::error;
use std::fmt;

/// A single violation of a mirroring table invariant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    /// A value in the table is not a Unicode scalar value. That is, it is a
    /// surrogate codepoint or is greater than `U+10FFFF`.
    InvalidCodepoint {
        /// The offending value.
        codepoint: u32,
    },
    /// The `source` at `index` is not strictly greater than the one before
    /// it. When `previous == next`, the source is duplicated.
    Unsorted {
        /// The index of the entry that is out of order.
        index: usize,
        /// The source of the entry at `index - 1`.
        previous: u32,
        /// The source of the entry at `index`.
        next: u32,
    },
    /// An entry maps a codepoint to itself.
    SelfMirror {
        /// The codepoint that maps to itself.
        codepoint: u32,
    },
    /// The entry `(source, mirror)` has no matching `(mirror, source)` entry.
    NotInvolutive {
        /// The source of the entry without a reverse entry.
        source: u32,
        /// The mirror of the entry without a reverse entry.
        mirror: u32,
    },
    /// The table does not have the expected number of entries.
    CountMismatch {
        /// The number of entries the table should have.
        expected: usize,
        /// The number of entries the table has.
        actual: usize,
    },
}

impl error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::InvalidCodepoint { codepoint } => write!(
                f,
                "0x{:X} is not a Unicode scalar value",
                codepoint
            ),
            Violation::Unsorted { index, previous, next } if previous == next => {
                write!(f, "duplicate entry for U+{:04X} at index {}", next, index)
            }
            Violation::Unsorted { index, previous, next } => write!(
                f,
                "U+{:04X} at index {} does not come after U+{:04X}",
                next, index, previous
            ),
            Violation::SelfMirror { codepoint } => {
                write!(f, "U+{:04X} is mapped to itself", codepoint)
            }
            Violation::NotInvolutive { source, mirror } => write!(
                f,
                "U+{:04X} mirrors to U+{:04X}, but U+{:04X} does not \
                 mirror back to U+{:04X}",
                source, mirror, mirror, source
            ),
            Violation::CountMismatch { expected, actual } => write!(
                f,
                "expected {} entries, but the table has {}",
                expected, actual
            ),
        }
    }
}

/// Check every invariant of the given table and return the first violation
/// found, if any.
///
/// If `expected_count` is given, then the table must also have exactly that
/// many entries.
pub fn check(
    table: &[(u32, u32)],
    expected_count: Option<usize>,
) -> Result<(), Violation> {
    match check_all(table, expected_count).into_iter().next() {
        None => Ok(()),
        Some(violation) => Err(violation),
    }
}

/// Check every invariant of the given table and return all violations found.
///
/// Violations are reported in this order: invalid codepoints, ordering,
/// self mappings, involution and finally the entry count.
pub fn check_all(
    table: &[(u32, u32)],
    expected_count: Option<usize>,
) -> Vec<Violation> {
    let mut violations = vec![];
    for &(source, mirror) in table {
        for &cp in &[source, mirror] {
            if !is_scalar_value(cp) {
                violations.push(Violation::InvalidCodepoint { codepoint: cp });
            }
        }
    }
    for (index, pair) in table.windows(2).enumerate() {
        let (previous, next) = (pair[0].0, pair[1].0);
        if previous >= next {
            violations.push(Violation::Unsorted {
                index: index + 1,
                previous,
                next,
            });
        }
    }
    for &(source, mirror) in table {
        if source == mirror {
            violations.push(Violation::SelfMirror { codepoint: source });
        } else if find(table, mirror) != Some(source) {
            violations.push(Violation::NotInvolutive { source, mirror });
        }
    }
    if let Some(expected) = expected_count {
        if expected != table.len() {
            violations.push(Violation::CountMismatch {
                expected,
                actual: table.len(),
            });
        }
    }
    violations
}

/// Returns true if and only if every value in the table is a Unicode scalar
/// value.
pub const fn all_scalar_values(table: &[(u32, u32)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if !is_scalar_value(table[i].0) || !is_scalar_value(table[i].1) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if and only if the `source` column of the table is strictly
/// increasing.
pub const fn is_strictly_ascending(table: &[(u32, u32)]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i - 1].0 >= table[i].0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if and only if every entry `(a, b)` in the table has a
/// matching `(b, a)` entry and no entry maps a codepoint to itself.
///
/// The table must be strictly ascending, otherwise the result is unspecified.
pub const fn is_involutive(table: &[(u32, u32)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let (source, mirror) = table[i];
        if source == mirror {
            return false;
        }
        match const_find(table, mirror) {
            Some(back) if back == source => {}
            _ => return false,
        }
        i += 1;
    }
    true
}

const fn is_scalar_value(cp: u32) -> bool {
    cp <= 0x10FFFF && !(cp >= 0xD800 && cp <= 0xDFFF)
}

const fn const_find(table: &[(u32, u32)], cp: u32) -> Option<u32> {
    let (mut lo, mut hi) = (0, table.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let (source, mirror) = table[mid];
        if source == cp {
            return Some(mirror);
        } else if source < cp {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    None
}

fn find(table: &[(u32, u32)], cp: u32) -> Option<u32> {
    table
        .binary_search_by_key(&cp, |&(source, _)| source)
        .ok()
        .map(|i| table[i].1)
}

/// An entry whose mirror differs between a table and the UCD.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChangedEntry {
    /// The codepoint that is mapped differently.
    pub source: u32,
    /// The mirror according to the table.
    pub table_mirror: u32,
    /// The mirror according to the UCD.
    pub ucd_mirror: u32,
}

/// The differences between a mirroring table and the mappings parsed from a
/// UCD directory's `BidiMirroring.txt`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UcdDiff {
    /// Entries present in both, but with different mirrors.
    pub changed: Vec<ChangedEntry>,
    /// Entries in the table that the UCD does not have.
    pub missing: Vec<(u32, u32)>,
    /// Entries in the UCD that the table does not have.
    pub added: Vec<(u32, u32)>,
}

impl UcdDiff {
    /// Returns true if and only if the table agrees with every mapping the
    /// UCD has for the table's codepoints.
    ///
    /// Additions do not count against compatibility, since every new Unicode
    /// release tends to add mirrored characters.
    pub fn is_compatible(&self) -> bool {
        self.changed.is_empty() && self.missing.is_empty()
    }

    /// Returns true if and only if the table and the UCD are identical.
    pub fn is_empty(&self) -> bool {
        self.is_compatible() && self.added.is_empty()
    }
}

/// Compare a mirroring table with the mappings from a UCD directory.
pub fn compare_with_ucd(
    table: &[(u32, u32)],
    ucd: &BTreeMap<u32, u32>,
) -> UcdDiff {
    let mut diff = UcdDiff::default();
    for &(source, table_mirror) in table {
        match ucd.get(&source) {
            None => diff.missing.push((source, table_mirror)),
            Some(&ucd_mirror) if ucd_mirror != table_mirror => {
                diff.changed.push(ChangedEntry {
                    source,
                    table_mirror,
                    ucd_mirror,
                });
            }
            Some(_) => {}
        }
    }
    for (&source, &mirror) in ucd {
        if find(table, source).is_none() {
            diff.added.push((source, mirror));
        }
    }
    log::debug!(
        "compared {} table entries with {} UCD entries: \
         {} changed, {} missing, {} added",
        table.len(),
        ucd.len(),
        diff.changed.len(),
        diff.missing.len(),
        diff.added.len(),
    );
    diff
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{
        all_scalar_values, check, check_all, compare_with_ucd, is_involutive,
        is_strictly_ascending, ChangedEntry, Violation,
    };
    use crate::tables::bidi_mirroring_glyph::BIDI_MIRRORING_GLYPH;

    const BRACKETS: &[(u32, u32)] =
        &[(0x28, 0x29), (0x29, 0x28), (0x5B, 0x5D), (0x5D, 0x5B)];

    #[test]
    fn unicode_table_is_valid() {
        assert_eq!(check_all(BIDI_MIRRORING_GLYPH, Some(332)), vec![]);
        assert!(all_scalar_values(BIDI_MIRRORING_GLYPH));
        assert!(is_strictly_ascending(BIDI_MIRRORING_GLYPH));
        assert!(is_involutive(BIDI_MIRRORING_GLYPH));
    }

    #[test]
    fn empty_table_is_valid() {
        assert_eq!(check(&[], None), Ok(()));
        assert_eq!(
            check(&[], Some(1)),
            Err(Violation::CountMismatch { expected: 1, actual: 0 })
        );
    }

    #[test]
    fn unsorted() {
        let table = &[(0x5B, 0x5D), (0x28, 0x29), (0x29, 0x28), (0x5D, 0x5B)];
        assert!(!is_strictly_ascending(table));
        assert_eq!(
            check(table, None),
            Err(Violation::Unsorted { index: 1, previous: 0x5B, next: 0x28 })
        );
    }

    #[test]
    fn duplicate() {
        let table = &[(0x28, 0x29), (0x29, 0x28), (0x29, 0x28)];
        assert!(!is_strictly_ascending(table));
        let err = check(table, None).unwrap_err();
        assert_eq!(
            err,
            Violation::Unsorted { index: 2, previous: 0x29, next: 0x29 }
        );
        assert_eq!(err.to_string(), "duplicate entry for U+0029 at index 2");
    }

    #[test]
    fn not_involutive() {
        // U+2215 DIVISION SLASH mirrors to U+29F5, but that entry is gone.
        let table = &[(0x28, 0x29), (0x29, 0x28), (0x2215, 0x29F5)];
        assert!(is_strictly_ascending(table));
        assert!(!is_involutive(table));
        assert_eq!(
            check_all(table, None),
            vec![Violation::NotInvolutive { source: 0x2215, mirror: 0x29F5 }]
        );
    }

    #[test]
    fn one_sided_pair() {
        let table = &[(0x28, 0x29), (0x29, 0x5B)];
        assert_eq!(
            check_all(table, None),
            vec![
                Violation::NotInvolutive { source: 0x28, mirror: 0x29 },
                Violation::NotInvolutive { source: 0x29, mirror: 0x5B },
            ]
        );
    }

    #[test]
    fn self_mirror() {
        let table = &[(0x28, 0x28)];
        assert!(!is_involutive(table));
        assert_eq!(
            check(table, None),
            Err(Violation::SelfMirror { codepoint: 0x28 })
        );
    }

    #[test]
    fn invalid_codepoints() {
        let table = &[(0xD800, 0x110000), (0x110000, 0xD800)];
        assert!(!all_scalar_values(table));
        let violations = check_all(table, Some(2));
        assert_eq!(
            &violations[..2],
            &[
                Violation::InvalidCodepoint { codepoint: 0xD800 },
                Violation::InvalidCodepoint { codepoint: 0x110000 },
            ]
        );
    }

    #[test]
    fn count_mismatch() {
        assert_eq!(
            check(BRACKETS, Some(332)),
            Err(Violation::CountMismatch { expected: 332, actual: 4 })
        );
        assert_eq!(check(BRACKETS, Some(4)), Ok(()));
    }

    #[test]
    fn violation_messages() {
        let v = Violation::NotInvolutive { source: 0x2215, mirror: 0x29F5 };
        assert_eq!(
            v.to_string(),
            "U+2215 mirrors to U+29F5, but U+29F5 does not mirror back to \
             U+2215"
        );
        let v = Violation::Unsorted { index: 3, previous: 0x5D, next: 0x28 };
        assert_eq!(
            v.to_string(),
            "U+0028 at index 3 does not come after U+005D"
        );
    }

    #[test]
    fn compare_identical() {
        let ucd: BTreeMap<u32, u32> = BRACKETS.iter().cloned().collect();
        let diff = compare_with_ucd(BRACKETS, &ucd);
        assert!(diff.is_empty());
        assert!(diff.is_compatible());
    }

    #[test]
    fn compare_with_additions() {
        let mut ucd: BTreeMap<u32, u32> = BRACKETS.iter().cloned().collect();
        ucd.insert(0x7B, 0x7D);
        ucd.insert(0x7D, 0x7B);
        let diff = compare_with_ucd(BRACKETS, &ucd);
        assert!(diff.is_compatible());
        assert!(!diff.is_empty());
        assert_eq!(diff.added, vec![(0x7B, 0x7D), (0x7D, 0x7B)]);
    }

    #[test]
    fn compare_changed_and_missing() {
        let mut ucd = BTreeMap::new();
        ucd.insert(0x28, 0x29);
        ucd.insert(0x29, 0x28);
        ucd.insert(0x5B, 0x7D);
        let diff = compare_with_ucd(BRACKETS, &ucd);
        assert!(!diff.is_compatible());
        assert_eq!(
            diff.changed,
            vec![ChangedEntry {
                source: 0x5B,
                table_mirror: 0x5D,
                ucd_mirror: 0x7D,
            }]
        );
        assert_eq!(diff.missing, vec![(0x5D, 0x5B)]);
        assert!(diff.added.is_empty());
    }
}
