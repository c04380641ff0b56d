use std::fmt;

/// Error that can occur when working with a parsed document.
///
/// Parsing itself is infallible: structurally broken markup degrades into a
/// tolerant tree instead of an error. Only operations that talk to the
/// outside world, such as serializing into an [`std::io::Write`] sink, can
/// fail.
#[derive(Debug)]
pub enum Error {
    /// IO error while writing serialized output.
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
        }
    }
}
