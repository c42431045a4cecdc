//! Error types for the acme-dispatch CLI.

use acme_dispatch::{AcmeError, ErrorCategory};
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolution, configuration or provider failure
    #[error(transparent)]
    Acme(#[from] AcmeError),

    /// JSON output could not be produced
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// - 2: bad input (malformed URI, bad configuration)
    /// - 3: no provider or more than one provider
    /// - 4: the provider failed
    /// - 1: anything else
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Acme(e) => match e.category() {
                ErrorCategory::CallerInput => 2,
                ErrorCategory::Resolution => 3,
                ErrorCategory::Provider => 4,
            },
            CliError::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acme_dispatch::EndpointIdentifier;

    #[test]
    fn test_exit_codes() {
        let malformed: CliError = EndpointIdentifier::parse("not a uri::::").unwrap_err().into();
        assert_eq!(malformed.exit_code(), 2);

        let missing: CliError =
            AcmeError::NoProviderFound(EndpointIdentifier::parse("acme://x.invalid").unwrap()).into();
        assert_eq!(missing.exit_code(), 3);

        let provider: CliError = AcmeError::UnknownServer("acme://pebble/a/b".into()).into();
        assert_eq!(provider.exit_code(), 4);
    }

    #[test]
    fn test_transparent_display() {
        let err: CliError = AcmeError::Config("bad timeout".into()).into();
        assert_eq!(err.to_string(), "Configuration error: bad timeout");
    }
}
