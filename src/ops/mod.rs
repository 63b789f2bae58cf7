// src/ops/mod.rs
// Request classification and operation dispatch.
//
// The request body is a discriminated union encoded as "exactly one
// recognized key present". classify() narrows it once; dispatch() applies the
// per-operation type check, then the size cap, then runs the operation.

use serde_json::{Number, Value};
use tracing::error;

use crate::api::error::{ApiError, ApiResult};
use crate::math;
use crate::state::AppState;
use crate::validate;

/// The five recognized operations. "AI" is upper-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKey {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl OperationKey {
    pub const ALLOWED: [&'static str; 5] = ["fibonacci", "prime", "lcm", "hcf", "AI"];

    pub fn from_wire(key: &str) -> Option<Self> {
        match key {
            "fibonacci" => Some(Self::Fibonacci),
            "prime" => Some(Self::Prime),
            "lcm" => Some(Self::Lcm),
            "hcf" => Some(Self::Hcf),
            "AI" => Some(Self::Ai),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Prime => "prime",
            Self::Lcm => "lcm",
            Self::Hcf => "hcf",
            Self::Ai => "AI",
        }
    }
}

/// Select the single recognized operation from the decoded body.
///
/// Unrecognized extra keys are ignored; a second *recognized* key is an
/// ambiguity error. The raw value comes back uncoerced.
pub fn classify(body: &Value) -> ApiResult<(OperationKey, &Value)> {
    let Some(map) = body.as_object() else {
        return Err(ApiError::bad_request("Request body must be a JSON object"));
    };

    let mut matched: Option<(OperationKey, &Value)> = None;
    for (key, value) in map {
        let Some(op) = OperationKey::from_wire(key) else {
            continue;
        };
        if matched.is_some() {
            return Err(ApiError::bad_request(
                "Request must contain exactly one operation key",
            ));
        }
        matched = Some((op, value));
    }

    matched.ok_or_else(|| {
        ApiError::bad_request(format!(
            "Request must contain exactly one of: {}",
            OperationKey::ALLOWED.join(", ")
        ))
    })
}

/// Run a classified operation. Type check before cap check, always.
pub async fn dispatch(state: &AppState, op: OperationKey, value: &Value) -> ApiResult<Value> {
    let limits = &state.config.limits;

    match op {
        OperationKey::Fibonacci => {
            if !validate::is_positive_integer(value) {
                return Err(ApiError::bad_request("fibonacci must be a positive integer"));
            }
            let n = value.as_i64().unwrap_or_default();
            if n > limits.fibonacci_max {
                return Err(ApiError::bad_request(format!(
                    "fibonacci value must not exceed {}",
                    limits.fibonacci_max
                )));
            }
            let series = math::fibonacci(n as usize)
                .into_iter()
                .map(|term| Value::Number(Number::from_string_unchecked(term.to_string())))
                .collect();
            Ok(Value::Array(series))
        }

        OperationKey::Prime => {
            let Some(items) = validate::as_integer_array(value) else {
                return Err(ApiError::bad_request("prime must be an array of integers"));
            };
            if items.len() > limits.prime_max_len {
                return Err(ApiError::bad_request(format!(
                    "prime array must not exceed {} elements",
                    limits.prime_max_len
                )));
            }
            Ok(serde_json::json!(math::filter_primes(&items)))
        }

        OperationKey::Lcm => {
            let Some(items) = validate::as_positive_integer_array(value) else {
                return Err(ApiError::bad_request("lcm must be an array of positive integers"));
            };
            if items.len() > limits.lcm_max_len {
                return Err(ApiError::bad_request(format!(
                    "lcm array must not exceed {} elements",
                    limits.lcm_max_len
                )));
            }
            let result = math::lcm(&items).ok_or_else(|| {
                ApiError::bad_request("lcm result exceeds supported integer range")
            })?;
            Ok(serde_json::json!(result))
        }

        OperationKey::Hcf => {
            let Some(items) = validate::as_positive_integer_array(value) else {
                return Err(ApiError::bad_request("hcf must be an array of positive integers"));
            };
            if items.len() > limits.hcf_max_len {
                return Err(ApiError::bad_request(format!(
                    "hcf array must not exceed {} elements",
                    limits.hcf_max_len
                )));
            }
            Ok(serde_json::json!(math::hcf(&items)))
        }

        OperationKey::Ai => {
            if !validate::is_non_empty_string(value) {
                return Err(ApiError::bad_request("AI must be a non-empty string question"));
            }
            let question = value.as_str().unwrap_or_default();
            let sanitized = validate::sanitize_string(question, limits.question_max_chars);
            if sanitized.is_empty() {
                return Err(ApiError::bad_request("AI question contains invalid content"));
            }

            // Single attempt, fault translated - provider internals never
            // reach the caller.
            match state.gemini.ask(&sanitized).await {
                Ok(raw) => Ok(Value::String(crate::llm::single_word(&raw))),
                Err(err) => {
                    error!("AI request failed: {}", err);
                    Err(ApiError::service_unavailable("AI service temporarily unavailable"))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_selects_single_operation() {
        let body = json!({"fibonacci": 5});
        let (op, value) = classify(&body).unwrap();
        assert_eq!(op, OperationKey::Fibonacci);
        assert_eq!(value, &json!(5));
    }

    #[test]
    fn classify_ignores_unrecognized_keys() {
        let body = json!({"prime": [2, 3], "note": "extra keys are fine"});
        let (op, _) = classify(&body).unwrap();
        assert_eq!(op, OperationKey::Prime);
    }

    #[test]
    fn classify_rejects_two_recognized_keys() {
        let body = json!({"fibonacci": 5, "prime": [2, 3]});
        let err = classify(&body).unwrap_err();
        assert_eq!(err.message, "Request must contain exactly one operation key");
    }

    #[test]
    fn classify_rejects_empty_object() {
        let err = classify(&json!({})).unwrap_err();
        assert!(err.message.contains("exactly one of"));
        assert!(err.message.contains("fibonacci, prime, lcm, hcf, AI"));
    }

    #[test]
    fn classify_rejects_non_objects() {
        assert!(classify(&json!([1, 2])).is_err());
        assert!(classify(&json!("fibonacci")).is_err());
        assert!(classify(&json!(null)).is_err());
    }

    #[test]
    fn operation_keys_are_case_sensitive() {
        assert_eq!(OperationKey::from_wire("AI"), Some(OperationKey::Ai));
        assert_eq!(OperationKey::from_wire("ai"), None);
        assert_eq!(OperationKey::from_wire("Fibonacci"), None);
        for key in OperationKey::ALLOWED {
            let op = OperationKey::from_wire(key).unwrap();
            assert_eq!(op.as_wire(), key);
        }
    }
}
