/*!
This crate provides the Unicode `Bidi_Mirroring_Glyph` mapping as a compiled-in
table, along with lookups over it.

When a character with the `Bidi_Mirrored=Yes` property appears in a
right-to-left run, a renderer typically draws it using the glyph of another
character whose shape is the mirror image of the original. For example, `(`
is drawn as `)` and `≤` is drawn as `≥`. This crate answers two questions:
does a codepoint have such a counterpart, and if so, which one?

```
use bidi_mirror::{is_mirrored, mirror_of};

assert_eq!(mirror_of(0x0028), Some(0x0029));
assert!(is_mirrored(0x2264));
assert_eq!(mirror_of(0x0041), None);
```

The table is a sorted slice of `(source, mirror)` pairs searched with a
binary search. It is `'static` constant data, so it can be queried from any
number of threads without synchronization.

The data was generated from `BidiMirroring.txt` in version 4.1.0 of the
Unicode character database. The [`validate`] module contains the integrity
checks that the data must satisfy, and the `bidi-mirror verify` command can
compare the table against a newer UCD directory.
*/

#![deny(missing_docs)]

pub use crate::table::{
    is_mirrored, mirror_char, mirror_of, mirror_or_self, Iter, MirrorEntry,
    MirroredCharTable, MIRRORED_CHARS_COUNT,
};

pub mod tables;
pub mod validate;

mod table;
