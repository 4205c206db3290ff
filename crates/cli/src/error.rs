//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use splunk_ds_client::ClientError;

/// Structured exit codes for splunk-ds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - configuration problems, unreadable inventory, unexpected API errors.
    GeneralError = 1,

    /// Authentication failure - rejected credentials or no session key.
    ///
    /// Scripts should refresh credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Resource not found - unknown serverclass or application.
    NotFound = 4,

    /// Protocol or validation error - unexpected response shape, rejected parameters.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - insufficient capabilities on the deployment server.
    PermissionDenied = 6,

    /// Partial batch failure - at least one inventory application failed.
    ///
    /// The report on stdout names the failed applications.
    PartialFailure = 9,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::PartialBatchFailure { .. } => ExitCode::PartialFailure,
            ClientError::ProtocolError(_) | ClientError::InvalidUrl(_) => {
                ExitCode::ValidationError
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::ApiError { .. } | ClientError::HttpError(_) => match err.status() {
                Some(401) => ExitCode::AuthenticationFailed,
                Some(403) => ExitCode::PermissionDenied,
                Some(404) => ExitCode::NotFound,
                Some(400) => ExitCode::ValidationError,
                _ if err.is_connection_error() => ExitCode::ConnectionError,
                _ => ExitCode::GeneralError,
            },
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://ds:8089/services/deployment/server/serverclasses".to_string(),
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::PartialFailure.as_i32(), 9);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_client_error_mapping() {
        assert_eq!(
            ExitCode::from(&ClientError::AuthFailed("bad".to_string())),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&api_error(401)),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
        assert_eq!(
            ExitCode::from(&ClientError::ProtocolError("no entry".to_string())),
            ExitCode::ValidationError
        );
        assert_eq!(
            ExitCode::from(&ClientError::PartialBatchFailure {
                failed: 1,
                attempted: 3
            }),
            ExitCode::PartialFailure
        );
    }

    #[test]
    fn test_exit_code_found_through_context_chain() {
        let err: anyhow::Result<()> = Err(ClientError::AuthFailed("rejected".to_string()))
            .context("Failed to log in to https://ds:8089");
        assert_eq!(
            err.unwrap_err().exit_code(),
            ExitCode::AuthenticationFailed
        );
    }

    #[test]
    fn test_non_client_error_is_general() {
        let err = anyhow::anyhow!("Failed to build configuration");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
