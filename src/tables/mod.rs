/*!
Tables generated by `ucd-generate` from the Unicode character database.

Each table is a sorted slice that is meant to be searched with a binary
search. Use the lookup functions at the crate root instead of searching these
directly.
*/

#[allow(missing_docs, clippy::redundant_static_lifetimes)]
pub mod bidi_mirroring_glyph;
