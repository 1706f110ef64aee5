use std::fmt;
use thiserror::Error;

/// The error type for reqseal operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The signer was finalized without a request path.
    MissingPath,

    /// A header name to sign is not a valid HTTP header name.
    InvalidHeaderName,

    /// The signature string is not a detached compact envelope, or its
    /// protected header can't be decoded.
    MalformedSignature,

    /// The protected header names an algorithm other than the supported one.
    UnsupportedAlgorithm,

    /// The protected header carries no or an unknown protocol version.
    UnsupportedVersion,

    /// A header the verifier requires is absent from the signed header list.
    RequiredHeaderNotCovered,

    /// A signed header has no value supplied to the verifier.
    MissingHeaderValue,

    /// The cryptographic check failed.
    InvalidSignature,

    /// Key material can't be parsed or used with the algorithm.
    KeyFormat,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (I/O, serialization, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was raised while verifying a signature.
    ///
    /// Every rejection of a signature falls into this group; the inner
    /// [`ErrorKind`] tells the specific reason. Key and config errors don't.
    pub fn is_verification_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MalformedSignature
                | ErrorKind::UnsupportedAlgorithm
                | ErrorKind::UnsupportedVersion
                | ErrorKind::RequiredHeaderNotCovered
                | ErrorKind::MissingHeaderValue
                | ErrorKind::InvalidSignature
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a missing path error
    pub fn missing_path(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingPath, message)
    }

    /// Create an invalid header name error
    pub fn invalid_header_name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHeaderName, message)
    }

    /// Create a malformed signature error
    pub fn malformed_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedSignature, message)
    }

    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedAlgorithm, message)
    }

    /// Create an unsupported version error
    pub fn unsupported_version(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedVersion, message)
    }

    /// Create a required header not covered error
    pub fn required_header_not_covered(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequiredHeaderNotCovered, message)
    }

    /// Create a missing header value error
    pub fn missing_header_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingHeaderValue, message)
    }

    /// Create an invalid signature error
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSignature, message)
    }

    /// Create a key format error
    pub fn key_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyFormat, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingPath => write!(f, "request path not set"),
            ErrorKind::InvalidHeaderName => write!(f, "invalid header name"),
            ErrorKind::MalformedSignature => write!(f, "malformed signature"),
            ErrorKind::UnsupportedAlgorithm => write!(f, "unsupported algorithm"),
            ErrorKind::UnsupportedVersion => write!(f, "unsupported signature version"),
            ErrorKind::RequiredHeaderNotCovered => {
                write!(f, "required header not covered by signature")
            }
            ErrorKind::MissingHeaderValue => write!(f, "missing header value"),
            ErrorKind::InvalidSignature => write!(f, "invalid signature"),
            ErrorKind::KeyFormat => write!(f, "invalid key"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
