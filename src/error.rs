//! Error types.

use core::fmt;

/// Reason a parse was refused.
///
/// Parsing is total: a refused parse yields a URI with no component set,
/// and the reason is read back through [`Uri::error`](crate::Uri::error).
/// The discriminants are the values packed into the first range's offset
/// when no component is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UriError {
    /// The source exceeds 65 535 bytes.
    TooLong = 1,
    /// A whitespace byte appears before any `?`.
    IllegalChars = 2,
    /// The source is empty.
    EmptySource = 3,
}

impl UriError {
    pub(crate) const fn code(self) -> u16 {
        self as u16
    }

    pub(crate) const fn from_code(code: u16) -> Option<UriError> {
        match code {
            1 => Some(UriError::TooLong),
            2 => Some(UriError::IllegalChars),
            3 => Some(UriError::EmptySource),
            _ => None,
        }
    }

    /// A short description of the error.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            UriError::TooLong => "source longer than 65535 bytes",
            UriError::IllegalChars => "whitespace in source",
            UriError::EmptySource => "empty source",
        }
    }
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UriError {}
