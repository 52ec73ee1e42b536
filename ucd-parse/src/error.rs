use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Represents any kind of error that can occur while parsing the UCD.
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) line: Option<u64>,
    pub(crate) path: Option<PathBuf>,
}

/// The kind of error that occurred while parsing the UCD.
#[derive(Debug)]
pub enum ErrorKind {
    /// An I/O error, e.g., the UCD directory is missing the file being
    /// parsed.
    Io(io::Error),
    /// A malformed line, an invalid codepoint or a codepoint that is listed
    /// more than once.
    Parse(String),
}

impl Error {
    /// Create a new parse error from the given message.
    pub(crate) fn parse(msg: String) -> Error {
        Error { kind: ErrorKind::Parse(msg), line: None, path: None }
    }

    /// Create a new I/O error that occurred while reading the given file.
    pub(crate) fn io(err: io::Error, path: &Path) -> Error {
        Error {
            kind: ErrorKind::Io(err),
            line: None,
            path: Some(path.to_path_buf()),
        }
    }

    /// Attach a location to this error, without overwriting one that is
    /// already set.
    pub(crate) fn located(
        mut self,
        path: Option<&Path>,
        line: Option<u64>,
    ) -> Error {
        if self.path.is_none() {
            self.path = path.map(|p| p.to_path_buf());
        }
        if self.line.is_none() {
            self.line = line;
        }
        self
    }

    /// Return the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the line number at which this error occurred, if available.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Return the file path associated with this error, if one exists.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Unwrap this error into its underlying kind.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns true if and only if this is an I/O error.
    ///
    /// If this returns true, the underlying `ErrorKind` is guaranteed to be
    /// `ErrorKind::Io`.
    pub fn is_io_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(err),
            ErrorKind::Parse(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error { kind: ErrorKind::Io(err), line: None, path: None }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref path) = self.path {
            if let Some(line) = self.line {
                write!(f, "{}:{}: ", path.display(), line)?;
            } else {
                write!(f, "{}: ", path.display())?;
            }
        } else if let Some(line) = self.line {
            write!(f, "error on line {}: ", line)?;
        }
        match self.kind {
            ErrorKind::Io(ref err) => write!(f, "{}", err),
            ErrorKind::Parse(ref msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::Error;

    #[test]
    fn display_with_location() {
        let err = Error::parse("invalid BidiMirroring line".to_string())
            .located(Some(Path::new("BidiMirroring.txt")), Some(42));
        assert_eq!(
            err.to_string(),
            "BidiMirroring.txt:42: invalid BidiMirroring line"
        );
        assert!(!err.is_io_error());
    }

    #[test]
    fn location_is_not_overwritten() {
        let err = Error::parse("bad".to_string())
            .located(None, Some(3))
            .located(Some(Path::new("a.txt")), Some(9));
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.path(), Some(Path::new("a.txt")));
    }

    #[test]
    fn io_error() {
        let ioerr = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = Error::io(ioerr, Path::new("ucd/BidiMirroring.txt"));
        assert!(err.is_io_error());
        assert_eq!(err.to_string(), "ucd/BidiMirroring.txt: no such file");
    }
}
