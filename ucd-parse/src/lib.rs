/*!
A library for parsing the Unicode character database, limited to the files
needed to check a `Bidi_Mirroring_Glyph` table.
*/

#![deny(missing_docs)]

pub use crate::common::{
    parse, parse_by_codepoint, ucd_file_version, Codepoint, CodepointIter,
    UcdFile, UcdFileByCodepoint, UcdLineParser,
};
pub use crate::error::{Error, ErrorKind};

pub use crate::bidi_mirroring_glyph::BidiMirroring;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::parse(format!($($tt)*)))
    }
}

mod common;
mod error;

mod bidi_mirroring_glyph;
