//! Standard error and acknowledgement bodies.

use serde::{Deserialize, Serialize};

/// The JSON body returned for all error responses.
///
/// ```json
/// { "code": "InvalidSignature", "message": "signature does not match custody address", "property": "signature" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Machine-readable error code. Some older endpoints omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable description of the problem.
    pub message: String,

    /// The request field the error refers to, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            property: None,
        }
    }

    /// Attach the offending request field.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }
}

/// Error codes the client inspects or the mock service emits.
pub mod codes {
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const NOT_FOUND: &str = "NotFound";
    pub const INVALID_PARAMETER: &str = "InvalidField";
    pub const INVALID_SIGNATURE: &str = "InvalidSignature";
    pub const DEADLINE_EXPIRED: &str = "DeadlineExpired";
    pub const SIGNER_NOT_APPROVED: &str = "SignerNotApproved";
    pub const SIGNER_STATE_CONFLICT: &str = "SignerStateConflict";
    pub const FORBIDDEN: &str = "Forbidden";
}

/// Plain `{ "success": true }` acknowledgement returned by write endpoints
/// that have nothing else to report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OperationResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_and_property_are_optional() {
        let e: ErrorResponse = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(e.code, None);
        assert_eq!(e.property, None);
        assert_eq!(e.message, "boom");
    }

    #[test]
    fn with_property_serialises_all_fields() {
        let e = ErrorResponse::new(codes::INVALID_SIGNATURE, "bad sig").with_property("signature");
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"InvalidSignature\""));
        assert!(json.contains("\"property\":\"signature\""));
    }

    #[test]
    fn operation_ok_omits_message() {
        let json = serde_json::to_string(&OperationResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
