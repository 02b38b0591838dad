//! The uniform result envelope returned by every action.

use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field validation messages, keyed by the form field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Generic top-level message attached to every validation failure.
pub const INVALID_INPUT_ERROR: &str = "Invalid input. Please check the fields.";

/// The outcome of a single action invocation.
///
/// Exactly one of the failure fields is populated on failure; on success
/// `data` is present and both failure fields are absent. The constructors
/// below are the only way the rest of the crate builds envelopes, which
/// keeps those invariants in one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl<T> ActionResult<T> {
    /// A successful envelope carrying the operation's output.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            field_errors: None,
        }
    }

    /// A failed envelope carrying a single top-level message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            field_errors: None,
        }
    }

    /// A validation failure carrying per-field messages plus the generic
    /// top-level message.
    pub fn invalid(field_errors: FieldErrors) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(INVALID_INPUT_ERROR.to_string()),
            field_errors: Some(field_errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_has_data_and_no_errors() {
        let env = ActionResult::ok("payload");
        assert!(env.success);
        assert_eq!(env.data, Some("payload"));
        assert!(env.error.is_none());
        assert!(env.field_errors.is_none());
    }

    #[test]
    fn failed_envelope_has_error_only() {
        let env: ActionResult<()> = ActionResult::failed("backend unavailable");
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.error.as_deref(), Some("backend unavailable"));
        assert!(env.field_errors.is_none());
    }

    #[test]
    fn invalid_envelope_carries_field_errors_and_generic_message() {
        let mut errors = FieldErrors::new();
        errors.insert("topic".to_string(), vec!["too short".to_string()]);
        let env: ActionResult<()> = ActionResult::invalid(errors);
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.error.as_deref(), Some(INVALID_INPUT_ERROR));
        assert_eq!(
            env.field_errors.unwrap().get("topic").map(Vec::len),
            Some(1)
        );
    }

    #[test]
    fn serializes_with_camel_case_keys_and_omits_absent_fields() {
        let env = ActionResult::ok(42);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("error").is_none());
        assert!(json.get("fieldErrors").is_none());

        let mut errors = FieldErrors::new();
        errors.insert("studentAge".to_string(), vec!["too young".to_string()]);
        let env: ActionResult<i32> = ActionResult::invalid(errors);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["fieldErrors"]["studentAge"][0], "too young");
    }
}
