//! Error taxonomy for RPC calls.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Coarse classification of an [`RpcError`].
///
/// Callers branch on this rather than on individual variants: a bad password
/// and an unreachable daemon need different handling, two flavours of network
/// failure usually don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request value could not be serialized. Caller-side bug.
    Encoding,
    /// The HTTP exchange failed or the response could not be decoded.
    Transport,
    /// The server kept answering 401.
    Authentication,
    /// The server replied with a JSON-RPC error object.
    Rpc,
}

/// Errors that can occur while dispatching a JSON-RPC call.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Request params could not be serialized to JSON.
    #[error("error creating encoded request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Endpoint URI is not a usable http(s) URL.
    #[error("invalid endpoint '{uri}': {reason}")]
    InvalidEndpoint { uri: String, reason: String },

    /// Connect, TLS, timeout or body read failure.
    #[error("error sending request: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status whose body was not a JSON-RPC envelope.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(StatusCode),

    /// Body was not a well-formed JSON-RPC response.
    #[error("error decoding response: {0}")]
    Decode(String),

    /// 401 after any digest handshake.
    #[error("unauthorized - invalid username or password")]
    Unauthorized,

    /// Remote procedure failure. Displays the server message verbatim.
    #[error("{message}")]
    Remote {
        code: i64,
        message: String,
        data: Option<Value>,
    },
}

impl RpcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RpcError::Encode(_) => ErrorKind::Encoding,
            RpcError::InvalidEndpoint { .. }
            | RpcError::Http(_)
            | RpcError::HttpStatus(_)
            | RpcError::Decode(_) => ErrorKind::Transport,
            RpcError::Unauthorized => ErrorKind::Authentication,
            RpcError::Remote { .. } => ErrorKind::Rpc,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RpcError::Unauthorized)
    }

    /// The JSON-RPC error code, if the server produced one.
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            RpcError::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_message_verbatim() {
        let err = RpcError::Remote {
            code: -7,
            message: "Block not accepted".to_string(),
            data: None,
        };
        assert_eq!(err.to_string(), "Block not accepted");
        assert_eq!(err.kind(), ErrorKind::Rpc);
        assert_eq!(err.remote_code(), Some(-7));
    }

    #[test]
    fn test_unauthorized_message_is_stable() {
        let err = RpcError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized - invalid username or password");
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert!(err.is_unauthorized());
        assert_eq!(err.remote_code(), None);
    }

    #[test]
    fn test_kind_mapping() {
        let encode = serde_json::from_str::<Value>("{").unwrap_err();
        assert_eq!(RpcError::Encode(encode).kind(), ErrorKind::Encoding);
        assert_eq!(RpcError::Decode("eof".into()).kind(), ErrorKind::Transport);
        assert_eq!(
            RpcError::HttpStatus(StatusCode::BAD_GATEWAY).kind(),
            ErrorKind::Transport
        );
        let invalid = RpcError::InvalidEndpoint {
            uri: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(invalid.kind(), ErrorKind::Transport);
        assert!(invalid.to_string().contains("nope"));
    }
}
