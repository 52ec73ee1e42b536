use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::common::{Codepoint, CodepointIter, UcdFile, UcdFileByCodepoint};
use crate::error::Error;

/// Represents a single row in the `BidiMirroring.txt` file.
///
/// The field names were taken from the header of BidiMirroring.txt.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BidiMirroring {
    /// The codepoint corresponding to this row.
    pub codepoint: Codepoint,
    /// The codepoint that typically has a glyph that is the mirror image of
    /// `codepoint`.
    pub bidi_mirroring_glyph: Codepoint,
    /// Whether the row's comment marks the mapping as `[BEST FIT]`. Such
    /// mappings are only approximate mirror images.
    pub best_fit: bool,
}

impl BidiMirroring {
    /// Return this row as a `(codepoint, bidi_mirroring_glyph)` pair of
    /// `u32` values.
    pub fn to_pair(&self) -> (u32, u32) {
        (self.codepoint.value(), self.bidi_mirroring_glyph.value())
    }
}

impl UcdFile for BidiMirroring {
    fn relative_file_path() -> &'static Path {
        Path::new("BidiMirroring.txt")
    }
}

impl UcdFileByCodepoint for BidiMirroring {
    fn codepoints(&self) -> CodepointIter {
        self.codepoint.into_iter()
    }
}

impl FromStr for BidiMirroring {
    type Err = Error;

    fn from_str(line: &str) -> Result<BidiMirroring, Error> {
        lazy_static! {
            static ref PARTS: Regex = Regex::new(
                r"(?x)
                ^
                \s*(?P<codepoint>[A-F0-9]+)\s*;
                \s*(?P<substitute_codepoint>[A-F0-9]+)
                \s*
                (?:\#(?P<comment>.*))?
                $
                "
            )
            .unwrap();
        }
        let caps = match PARTS.captures(line.trim()) {
            Some(caps) => caps,
            None => return err!("invalid BidiMirroring line"),
        };
        let best_fit = caps
            .name("comment")
            .map_or(false, |m| m.as_str().trim_start().starts_with("[BEST FIT]"));

        Ok(BidiMirroring {
            codepoint: caps["codepoint"].parse()?,
            bidi_mirroring_glyph: caps["substitute_codepoint"].parse()?,
            best_fit,
        })
    }
}

impl fmt::Display for BidiMirroring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}", self.codepoint, self.bidi_mirroring_glyph)?;
        if self.best_fit {
            write!(f, " # [BEST FIT]")?;
        }
        Ok(())
    }
}
