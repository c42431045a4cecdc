/// Error types for provider resolution and connection
use crate::endpoint::EndpointIdentifier;
use thiserror::Error;

/// Broad classification of an [`AcmeError`].
///
/// Callers use this to tell "fix your input" apart from "fix your deployment"
/// and from failures raised by the provider itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied something unusable (a malformed URI, a bad config file).
    CallerInput,
    /// The registry has no provider, or more than one, for the identifier.
    Resolution,
    /// The selected provider failed while connecting.
    Provider,
}

#[derive(Error, Debug)]
pub enum AcmeError {
    #[error("Malformed ACME server URI {input:?}: {reason}")]
    MalformedIdentifier { input: String, reason: String },

    #[error("No ACME provider found for {0}")]
    NoProviderFound(EndpointIdentifier),

    #[error(
        "There are {count} ACME providers accepting {identifier} ({}). Please check the provider registrations.",
        .providers.join(", ")
    )]
    AmbiguousProvider {
        identifier: EndpointIdentifier,
        count: usize,
        providers: Vec<String>,
    },

    #[error("Unknown ACME server: {0}")]
    UnknownServer(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AcmeError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AcmeError::MalformedIdentifier { .. } | AcmeError::Config(_) => {
                ErrorCategory::CallerInput
            }
            AcmeError::NoProviderFound(_) | AcmeError::AmbiguousProvider { .. } => {
                ErrorCategory::Resolution
            }
            AcmeError::UnknownServer(_) | AcmeError::HttpError(_) | AcmeError::Connection(_) => {
                ErrorCategory::Provider
            }
        }
    }

    /// Whether the caller has to change its input to make progress.
    pub fn is_caller_error(&self) -> bool {
        self.category() == ErrorCategory::CallerInput
    }

    /// Whether the provider registrations are missing or conflicting.
    pub fn is_resolution_error(&self) -> bool {
        self.category() == ErrorCategory::Resolution
    }
}

pub type Result<T> = std::result::Result<T, AcmeError>;
