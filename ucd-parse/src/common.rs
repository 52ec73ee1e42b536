use std::char;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

/// Parse a particular file in the UCD into a sequence of rows.
///
/// The given directory should be the directory to the UCD.
pub fn parse<P, D>(ucd_dir: P) -> Result<Vec<D>, Error>
where
    P: AsRef<Path>,
    D: UcdFile,
{
    let mut xs = vec![];
    for result in D::from_dir(ucd_dir)? {
        let x = result?;
        xs.push(x);
    }
    Ok(xs)
}

/// Parse a particular file in the UCD into a map from codepoint to the record.
///
/// The given directory should be the directory to the UCD.
///
/// If a codepoint is listed more than once, then an error is returned that
/// points at the second occurrence.
pub fn parse_by_codepoint<P, D>(
    ucd_dir: P,
) -> Result<BTreeMap<Codepoint, D>, Error>
where
    P: AsRef<Path>,
    D: UcdFileByCodepoint,
{
    let path = D::file_path(ucd_dir);
    let mut parser = UcdLineParser::<File, D>::from_path(&path)?;
    let mut map = BTreeMap::new();
    while let Some(result) = parser.next() {
        let x = result?;
        for cp in x.codepoints() {
            if map.contains_key(&cp) {
                let msg = format!("codepoint {} is listed more than once", cp);
                return Err(Error::parse(msg)
                    .located(Some(&path), Some(parser.line_number())));
            }
            map.insert(cp, x.clone());
        }
    }
    Ok(map)
}

/// Return the `(major, minor, patch)` version of a particular file in the
/// UCD.
///
/// The version is read from the file's first line, which looks like
/// `# BidiMirroring-15.0.0.txt`. If the first line doesn't have that form,
/// then `None` is returned.
pub fn ucd_file_version<P, D>(
    ucd_dir: P,
) -> Result<Option<(u64, u64, u64)>, Error>
where
    P: AsRef<Path>,
    D: UcdFile,
{
    lazy_static! {
        static ref VERSION: Regex = Regex::new(
            r"^#\s*[-\w]+-(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)\.txt"
        )
        .unwrap();
    }

    let path = D::file_path(ucd_dir);
    let file = File::open(&path).map_err(|e| Error::io(e, &path))?;
    let mut first = String::new();
    io::BufReader::new(file)
        .read_line(&mut first)
        .map_err(|e| Error::io(e, &path))?;
    let caps = match VERSION.captures(first.trim()) {
        None => return Ok(None),
        Some(caps) => caps,
    };
    let component = |name: &str| -> Result<u64, Error> {
        caps[name].parse().map_err(|e| {
            let msg = format!(
                "failed to parse {} version '{}': {}",
                name, &caps[name], e
            );
            Error::parse(msg).located(Some(&path), Some(1))
        })
    };
    Ok(Some((component("major")?, component("minor")?, component("patch")?)))
}

/// Describes a single UCD file.
pub trait UcdFile:
    Clone + fmt::Debug + Default + Eq + FromStr<Err = Error> + PartialEq
{
    /// The file path corresponding to this file, relative to the UCD
    /// directory.
    fn relative_file_path() -> &'static Path;

    /// The full file path corresponding to this file given the UCD directory
    /// path.
    fn file_path<P: AsRef<Path>>(ucd_dir: P) -> PathBuf {
        ucd_dir.as_ref().join(Self::relative_file_path())
    }

    /// Create an iterator over each record in this UCD file.
    ///
    /// The parameter should correspond to the directory containing the UCD.
    fn from_dir<P: AsRef<Path>>(
        ucd_dir: P,
    ) -> Result<UcdLineParser<File, Self>, Error> {
        UcdLineParser::from_path(Self::file_path(ucd_dir))
    }
}

/// Describes a single UCD file where every record in the file is associated
/// with one or more codepoints.
pub trait UcdFileByCodepoint: UcdFile {
    /// Returns the codepoints associated with this record.
    fn codepoints(&self) -> CodepointIter;
}

/// A line oriented parser for a particular UCD file.
///
/// Callers can build a line parser via the
/// [`UcdFile::from_dir`](trait.UcdFile.html) method.
///
/// The `R` type parameter refers to the underlying `io::Read` implementation
/// from which the UCD data is read.
///
/// The `D` type parameter refers to the type of the record parsed out of each
/// line.
#[derive(Debug)]
pub struct UcdLineParser<R, D> {
    path: Option<PathBuf>,
    rdr: io::BufReader<R>,
    line: String,
    line_number: u64,
    _data: PhantomData<D>,
}

impl<D> UcdLineParser<File, D> {
    /// Create a new parser from the given file path.
    pub(crate) fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<UcdLineParser<File, D>, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(e, path))?;
        Ok(UcdLineParser::new(Some(path.to_path_buf()), file))
    }
}

impl<R: io::Read, D> UcdLineParser<R, D> {
    /// Create a new parser that parses the reader given.
    ///
    /// The path, if given, is only used to report errors.
    ///
    /// Note that the reader is buffered internally, so the caller does not
    /// need to provide their own buffering.
    pub fn new(path: Option<PathBuf>, rdr: R) -> UcdLineParser<R, D> {
        UcdLineParser {
            path,
            rdr: io::BufReader::new(rdr),
            line: String::new(),
            line_number: 0,
            _data: PhantomData,
        }
    }

    /// The number of the last line read, starting at `1`.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }
}

impl<R: io::Read, D: FromStr<Err = Error>> Iterator for UcdLineParser<R, D> {
    type Item = Result<D, Error>;

    fn next(&mut self) -> Option<Result<D, Error>> {
        loop {
            self.line_number += 1;
            self.line.clear();
            let n = match self.rdr.read_line(&mut self.line) {
                Err(err) => {
                    return Some(Err(Error::from(err).located(
                        self.path.as_deref(),
                        Some(self.line_number),
                    )))
                }
                Ok(n) => n,
            };
            if n == 0 {
                return None;
            }
            let trimmed = self.line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                break;
            }
        }
        let line_number = self.line_number;
        Some(self.line.parse().map_err(|e: Error| {
            e.located(self.path.as_deref(), Some(line_number))
        }))
    }
}

/// A single Unicode codepoint.
///
/// This type's string representation is a hexadecimal number. It is
/// guaranteed to be in the range `[0, 10FFFF]`.
///
/// Note that unlike Rust's `char` type, this may be a surrogate codepoint.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Codepoint(u32);

impl Codepoint {
    /// Create a new codepoint from a `u32`.
    ///
    /// If the given number is not a valid codepoint, then this returns an
    /// error.
    pub fn from_u32(n: u32) -> Result<Codepoint, Error> {
        if n > 0x10FFFF {
            err!("{:x} is not a valid Unicode codepoint", n)
        } else {
            Ok(Codepoint(n))
        }
    }

    /// Return the underlying `u32` codepoint value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Attempt to convert this codepoint to a Unicode scalar value.
    ///
    /// If this is a surrogate codepoint, then this returns `None`.
    pub fn scalar(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl IntoIterator for Codepoint {
    type IntoIter = CodepointIter;
    type Item = Codepoint;

    fn into_iter(self) -> CodepointIter {
        CodepointIter { next: self.value(), end: self.value() + 1 }
    }
}

impl FromStr for Codepoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codepoint, Error> {
        // from_str_radix also accepts a leading sign.
        if s.starts_with('+') {
            return err!(
                "failed to parse '{}' as a hexadecimal codepoint: \
                 unexpected sign",
                s
            );
        }
        match u32::from_str_radix(s, 16) {
            Ok(n) => Codepoint::from_u32(n),
            Err(err) => err!(
                "failed to parse '{}' as a hexadecimal codepoint: {}",
                s,
                err
            ),
        }
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl PartialEq<u32> for Codepoint {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Codepoint> for u32 {
    fn eq(&self, other: &Codepoint) -> bool {
        *self == other.0
    }
}

/// An iterator over a range of Unicode codepoints.
#[derive(Debug)]
pub struct CodepointIter {
    next: u32,
    end: u32,
}

impl Iterator for CodepointIter {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Codepoint> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next += 1;
        Some(Codepoint(current))
    }
}
