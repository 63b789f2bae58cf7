// src/api/envelope.rs
// Fixed response shape: exactly one of data/error, keyed off is_success.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// Success envelope. `data` is omitted entirely when `None` (health check).
    pub fn success(official_email: &str, data: Option<Value>) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data,
            error: None,
        }
    }

    pub fn failure(official_email: &str, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: official_email.to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_error_field() {
        let body = serde_json::to_value(Envelope::success("a@b.c", Some(json!([1, 2])))).unwrap();
        assert_eq!(body["is_success"], json!(true));
        assert_eq!(body["official_email"], json!("a@b.c"));
        assert_eq!(body["data"], json!([1, 2]));
        assert!(body.get("error").is_none());
    }

    #[test]
    fn failure_omits_data_field() {
        let body = serde_json::to_value(Envelope::failure("a@b.c", "nope")).unwrap();
        assert_eq!(body["is_success"], json!(false));
        assert_eq!(body["error"], json!("nope"));
        assert!(body.get("data").is_none());
    }

    #[test]
    fn health_shape_has_no_data_or_error() {
        let body = serde_json::to_value(Envelope::success("a@b.c", None)).unwrap();
        assert!(body.get("data").is_none());
        assert!(body.get("error").is_none());
    }
}
