use std::ffi::OsStr;
use std::ops;

use ucd_parse::Codepoint;

use crate::error::Result;

/// Wraps clap matches and provides convenient accessors to various parameters.
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ops::Deref for ArgMatches<'a> {
    type Target = clap::ArgMatches<'a>;
    fn deref(&self) -> &clap::ArgMatches<'a> {
        &self.0
    }
}

impl<'a> ArgMatches<'a> {
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    pub fn ucd_dir(&self) -> Option<&OsStr> {
        self.value_of_os("ucd-dir")
    }

    pub fn chars(&self) -> bool {
        self.is_present("chars")
    }

    /// Parse every positional codepoint argument, in the order given.
    pub fn codepoints(&self) -> Result<Vec<u32>> {
        let values = match self.values_of("codepoint") {
            None => return Ok(vec![]),
            Some(values) => values,
        };
        values.map(parse_codepoint).collect()
    }
}

/// Parse a codepoint written as `0028`, `U+0028`, `0x28` or as a single
/// literal character.
///
/// A lone character is always taken literally, so `A` is `U+0041` and not
/// `U+000A`.
pub fn parse_codepoint(arg: &str) -> Result<u32> {
    let mut chars = arg.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(u32::from(c));
    }
    let hex = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| arg.strip_prefix(*prefix))
        .unwrap_or(arg);
    match hex.parse::<Codepoint>() {
        Ok(cp) => Ok(cp.value()),
        Err(err) => err!("invalid codepoint '{}': {}", arg, err),
    }
}
