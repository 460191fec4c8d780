use std::fmt;

/// Errors returned by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value could not be interpreted as an integer.
    InvalidArgument {
        /// The rejected input, verbatim.
        input: String,
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_argument(input: &str, reason: &'static str) -> Self {
        Error::InvalidArgument {
            input: input.to_owned(),
            reason,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { input, reason } => {
                write!(f, "invalid argument {:?}: {}", input, reason)
            }
        }
    }
}

impl std::error::Error for Error {}
