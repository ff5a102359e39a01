//! Error handling for the encryption core.

use core::fmt;

use algorithms::error::Error as PrimitiveError;

/// Error type for IND-CPA encryption operations.
///
/// Every variant is a caller contract violation or an environment failure;
/// the operations themselves cannot fail on well-formed inputs, and
/// decryption in particular never rejects.
#[derive(Debug)]
pub enum Error {
    /// Error bubbled up from the polynomial engine
    Primitive(PrimitiveError),

    /// A key, message, coin or ciphertext buffer had the wrong length
    InvalidLength {
        /// What was being validated
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The caller-supplied random number generator failed
    Random {
        /// Operation that needed randomness
        context: &'static str,
    },
}

/// Result type for encryption core operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "polynomial engine error: {}", e),
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::Random { context } => write!(f, "random generation failed in {}", context),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

/// Validate the length of a caller-supplied buffer before touching it.
#[inline]
pub(crate) fn check_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
