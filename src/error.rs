use std::fmt;
use std::str::Utf8Error;

/// Errors surfaced by the gap buffer to its immediate caller.
///
/// Out-of-range cursor targets and backspace at the start of the text are
/// not errors: they are clamped or ignored by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GapBufferError {
    /// Storage for `requested` bytes could not be obtained, either because
    /// the allocator refused or because the size computation overflowed.
    Allocation { requested: usize },
    /// Inserted bytes were not valid UTF-8. Nothing was written.
    InvalidEncoding { valid_up_to: usize },
    /// A buffer was requested with an initial capacity of zero.
    ZeroCapacity,
}

impl fmt::Display for GapBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapBufferError::Allocation { requested } => {
                write!(f, "failed to allocate {requested} bytes for gap buffer")
            }
            GapBufferError::InvalidEncoding { valid_up_to } => {
                write!(f, "input is not valid UTF-8 (valid up to byte {valid_up_to})")
            }
            GapBufferError::ZeroCapacity => write!(f, "initial capacity must be at least 1"),
        }
    }
}

impl std::error::Error for GapBufferError {}

impl From<Utf8Error> for GapBufferError {
    fn from(err: Utf8Error) -> Self {
        GapBufferError::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}
