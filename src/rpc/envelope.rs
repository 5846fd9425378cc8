//! JSON-RPC 2.0 request and response envelopes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::rpc::error::{RpcError, RpcResult};

pub const JSONRPC_VERSION: &str = "2.0";

/// Outbound call envelope. `params` is left out entirely when absent.
#[derive(Serialize)]
pub struct Request<'a, P: ?Sized> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'a P>,
}

impl<'a, P: ?Sized> Request<'a, P> {
    pub fn new(id: u64, method: &'a str, params: Option<&'a P>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Inbound response envelope.
///
/// `result` distinguishes "absent" (`None`) from a literal `null`
/// (`Some(Value::Null)`).
#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<ErrorObject>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Response {
    /// Resolve the envelope into its result payload.
    ///
    /// `Ok(None)` is the null-result case.
    pub fn into_result(self) -> RpcResult<Option<Value>> {
        if let Some(err) = self.error {
            return Err(RpcError::Remote {
                code: err.code,
                message: err.message,
                data: err.data,
            });
        }
        match self.result {
            None => Err(RpcError::Decode(
                "response carries neither result nor error".to_string(),
            )),
            Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(value)),
        }
    }
}

/// Parse a raw HTTP body as a response envelope.
pub fn decode_response(body: &[u8]) -> RpcResult<Option<Value>> {
    let response: Response =
        serde_json::from_slice(body).map_err(|e| RpcError::Decode(e.to_string()))?;
    response.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_params() {
        let req: Request<'_, ()> = Request::new(7, "get_info", None);
        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "id": 7, "method": "get_info"})
        );
    }

    #[test]
    fn test_request_carries_unsized_params() {
        let heights: &[u64] = &[1, 2];
        let req = Request::new(1, "on_get_block_hash", Some(heights));
        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(encoded["params"], json!([1, 2]));
    }

    #[test]
    fn test_null_result_is_success_without_payload() {
        let body = br#"{"id":"0","jsonrpc":"2.0","result":null}"#;
        assert!(decode_response(body).unwrap().is_none());
    }

    #[test]
    fn test_error_object_wins() {
        let body = br#"{"id":"0","jsonrpc":"2.0","result":null,
            "error":{"code":-7,"message":"Block not accepted"}}"#;
        let err = decode_response(body).unwrap_err();
        assert_eq!(err.to_string(), "Block not accepted");
        assert_eq!(err.remote_code(), Some(-7));
    }

    #[test]
    fn test_missing_result_and_error_is_decode_failure() {
        let body = br#"{"id":"0","jsonrpc":"2.0"}"#;
        assert!(matches!(decode_response(body), Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_error_null_is_ignored() {
        let body = br#"{"jsonrpc":"2.0","result":{"count":3},"error":null}"#;
        let value = decode_response(body).unwrap().unwrap();
        assert_eq!(value["count"], 3);
    }

    #[test]
    fn test_garbage_body_is_decode_failure() {
        assert!(matches!(
            decode_response(b"<html>502</html>"),
            Err(RpcError::Decode(_))
        ));
    }
}
