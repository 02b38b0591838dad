//! Declarative request schemas and form validation.
//!
//! Every action validates its raw form map against one of these schemas
//! before anything else happens. Form transport is flat strings, so numeric
//! fields are coerced here; a value that fails to parse is a field error,
//! never a crash. Validation is all-or-nothing: any failing field fails the
//! whole request and every failing field gets its declared message.

use std::collections::{BTreeMap, HashMap};

use super::envelope::FieldErrors;

/// Constraint applied to a single form field.
pub enum FieldRule {
    /// Required free text with a minimum length in characters.
    Text {
        min_len: usize,
        message: &'static str,
    },
    /// Optional free text. Empty and absent are equivalent.
    OptionalText,
    /// Required number within an inclusive range, coerced from its string form.
    Number {
        min: i64,
        max: i64,
        not_numeric: &'static str,
        too_small: &'static str,
        too_large: &'static str,
    },
    /// Required string that must start with a fixed prefix.
    Prefixed {
        prefix: &'static str,
        message: &'static str,
    },
}

/// A single named field and its constraint.
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

/// The named set of fields one operation accepts.
pub struct RequestSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

/// A coerced field value produced by validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

/// The validated, coerced form of a request. Only `RequestSchema::validate`
/// produces one, so holding a `ValidatedFields` is proof the request passed.
#[derive(Debug, Clone, Default)]
pub struct ValidatedFields(BTreeMap<String, FieldValue>);

impl ValidatedFields {
    pub fn text(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn number(&self, name: &str) -> i64 {
        match self.0.get(name) {
            Some(FieldValue::Number(n)) => *n,
            _ => 0,
        }
    }

    /// Optional text, with the empty string collapsed to `None`.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl RequestSchema {
    /// Validates a raw form map. Absent fields are treated as empty strings,
    /// matching form submission semantics.
    pub fn validate(&self, raw: &HashMap<String, String>) -> Result<ValidatedFields, FieldErrors> {
        let mut fields = BTreeMap::new();
        let mut errors = FieldErrors::new();

        let fail = |name: &str, message: &str, errors: &mut FieldErrors| {
            errors
                .entry(name.to_string())
                .or_default()
                .push(message.to_string());
        };

        for spec in self.fields {
            let value = raw.get(spec.name).map(String::as_str).unwrap_or("");
            match &spec.rule {
                FieldRule::Text { min_len, message } => {
                    if value.chars().count() < *min_len {
                        fail(spec.name, message, &mut errors);
                    } else {
                        fields.insert(spec.name.to_string(), FieldValue::Text(value.to_string()));
                    }
                }
                FieldRule::OptionalText => {
                    fields.insert(spec.name.to_string(), FieldValue::Text(value.to_string()));
                }
                FieldRule::Number {
                    min,
                    max,
                    not_numeric,
                    too_small,
                    too_large,
                } => match value.trim().parse::<i64>() {
                    Err(_) => fail(spec.name, not_numeric, &mut errors),
                    Ok(n) if n < *min => fail(spec.name, too_small, &mut errors),
                    Ok(n) if n > *max => fail(spec.name, too_large, &mut errors),
                    Ok(n) => {
                        fields.insert(spec.name.to_string(), FieldValue::Number(n));
                    }
                },
                FieldRule::Prefixed { prefix, message } => {
                    if value.starts_with(prefix) {
                        fields.insert(spec.name.to_string(), FieldValue::Text(value.to_string()));
                    } else {
                        fail(spec.name, message, &mut errors);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(fields.into())
        } else {
            Err(errors)
        }
    }
}

impl From<BTreeMap<String, FieldValue>> for ValidatedFields {
    fn from(fields: BTreeMap<String, FieldValue>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SCHEMA: RequestSchema = RequestSchema {
        name: "test",
        fields: &[
            FieldSpec {
                name: "title",
                rule: FieldRule::Text {
                    min_len: 3,
                    message: "Title must be at least 3 characters long.",
                },
            },
            FieldSpec {
                name: "age",
                rule: FieldRule::Number {
                    min: 5,
                    max: 100,
                    not_numeric: "Age must be a number.",
                    too_small: "Age must be at least 5.",
                    too_large: "Age must be at most 100.",
                },
            },
            FieldSpec {
                name: "note",
                rule: FieldRule::OptionalText,
            },
            FieldSpec {
                name: "uri",
                rule: FieldRule::Prefixed {
                    prefix: "data:image/",
                    message: "Please select a valid image file.",
                },
            },
        ],
    };

    fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn valid_form_coerces_every_field() {
        let raw = form(&[
            ("title", "Photosynthesis"),
            ("age", "10"),
            ("note", "loves plants"),
            ("uri", "data:image/png;base64,AAAA"),
        ]);
        let fields = SCHEMA.validate(&raw).unwrap();
        assert_eq!(fields.text("title"), "Photosynthesis");
        assert_eq!(fields.number("age"), 10);
        assert_eq!(fields.optional_text("note").as_deref(), Some("loves plants"));
        assert_eq!(fields.text("uri"), "data:image/png;base64,AAAA");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let raw = form(&[("title", "Pn"), ("age", "3"), ("uri", "notadata:uri")]);
        let errors = SCHEMA.validate(&raw).unwrap_err();
        assert_eq!(
            errors.get("title").unwrap(),
            &vec!["Title must be at least 3 characters long.".to_string()]
        );
        assert_eq!(
            errors.get("age").unwrap(),
            &vec!["Age must be at least 5.".to_string()]
        );
        assert_eq!(
            errors.get("uri").unwrap(),
            &vec!["Please select a valid image file.".to_string()]
        );
    }

    #[test]
    fn non_numeric_value_is_a_field_error() {
        let raw = form(&[
            ("title", "Photosynthesis"),
            ("age", "ten"),
            ("uri", "data:image/png;base64,AAAA"),
        ]);
        let errors = SCHEMA.validate(&raw).unwrap_err();
        assert_eq!(
            errors.get("age").unwrap(),
            &vec!["Age must be a number.".to_string()]
        );
        assert!(errors.get("title").is_none());
    }

    #[test]
    fn number_above_range_gets_the_declared_message() {
        let raw = form(&[
            ("title", "Photosynthesis"),
            ("age", "150"),
            ("uri", "data:image/png;base64,AAAA"),
        ]);
        let errors = SCHEMA.validate(&raw).unwrap_err();
        assert_eq!(
            errors.get("age").unwrap(),
            &vec!["Age must be at most 100.".to_string()]
        );
    }

    #[test]
    fn absent_fields_behave_like_empty_strings() {
        let errors = SCHEMA.validate(&HashMap::new()).unwrap_err();
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("age"));
        assert!(errors.contains_key("uri"));
        assert!(!errors.contains_key("note"));
    }

    #[test]
    fn empty_optional_text_collapses_to_none() {
        let raw = form(&[
            ("title", "Photosynthesis"),
            ("age", "10"),
            ("note", ""),
            ("uri", "data:image/png;base64,AAAA"),
        ]);
        let fields = SCHEMA.validate(&raw).unwrap();
        assert_eq!(fields.optional_text("note"), None);
    }
}
