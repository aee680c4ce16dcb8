use thiserror::Error;

use crate::resource::ResourceKind;

/// Everything that can go wrong on the way to or from the backend.
///
/// Transport and application failures are kept apart so logs stay precise,
/// but both collapse into one inline message through
/// [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response whose body was not a usable envelope.
    #[error("HTTP error: {status}")]
    Http {
        /// Status code returned by the backend.
        status: u16,
    },
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The body could not be decoded into the expected shape.
    #[error("parse error: {0}")]
    Decode(String),
    /// An admin call was attempted without a session token.
    #[error("not signed in")]
    MissingToken,
    /// The tab does not support the requested operation.
    #[error("{action} is not supported for {kind:?}")]
    NotAllowed {
        /// Tab the operation was attempted on.
        kind: ResourceKind,
        /// Operation name (`create`, `delete`, ...).
        action: &'static str,
    },
}

impl ApiError {
    /// Text shown inline next to the form or list that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected(_) => "Unknown error".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the failure happened below the application layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Http { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_shown_verbatim() {
        let err = ApiError::Rejected("Email already registered".to_string());
        assert_eq!(err.user_message(), "Email already registered");
        assert!(!err.is_transport());
    }

    #[test]
    fn blank_rejection_falls_back_to_generic_text() {
        assert_eq!(ApiError::Rejected("  ".to_string()).user_message(), "Unknown error");
    }

    #[test]
    fn transport_errors_render_their_cause() {
        let err = ApiError::Http {
            status: 502,
        };
        assert!(err.is_transport());
        assert_eq!(err.user_message(), "HTTP error: 502");
    }
}
