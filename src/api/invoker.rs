//! Executes one prompt template against the generation backend and parses
//! the structured reply.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use super::backend::GenerationBackend;
use super::error::GenerationError;
use super::prompt::{render_template, PromptTemplate};
use super::schema::RequestSchema;

/// Renders `template` with the fields of `input`, sends it through the
/// backend, and parses the reply into `O`.
///
/// The input is re-validated against `schema` before anything is sent.
/// Callers validate first, but the invoker is the last line of defense
/// before the external call. A single failed call surfaces immediately;
/// there is no retry and no timeout.
pub async fn invoke<I, O>(
    backend: &dyn GenerationBackend,
    template: &PromptTemplate,
    schema: &RequestSchema,
    input: &I,
) -> Result<O, GenerationError>
where
    I: Serialize,
    O: DeserializeOwned,
{
    let vars = to_vars(input, template.name)?;
    schema.validate(&vars).map_err(|errors| {
        let details = errors
            .into_iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");
        GenerationError::Input(template.name.to_string(), details)
    })?;

    let rendered = render_template(template.text, &vars);
    let reply = backend.generate(&rendered).await?;
    parse_structured(&reply)
}

/// Flattens a serializable input into the string variable map the template
/// renderer consumes. Numbers keep their decimal form; absent optionals are
/// simply omitted so conditional sections drop out.
fn to_vars<I: Serialize>(
    input: &I,
    template_name: &str,
) -> Result<HashMap<String, String>, GenerationError> {
    let value = serde_json::to_value(input)
        .map_err(|e| GenerationError::Input(template_name.to_string(), e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(GenerationError::Input(
            template_name.to_string(),
            "input must serialize to an object".to_string(),
        ));
    };

    let mut vars = HashMap::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => {
                vars.insert(key, s);
            }
            Value::Number(n) => {
                vars.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                vars.insert(key, b.to_string());
            }
            _ => {
                return Err(GenerationError::Input(
                    template_name.to_string(),
                    format!("field '{}' is not a flat value", key),
                ));
            }
        }
    }
    Ok(vars)
}

/// Parses the model's reply as the expected JSON shape. Models sometimes
/// wrap the object in prose or a fenced block, so parsing starts at the
/// first `{` and ends at the last `}`.
fn parse_structured<O: DeserializeOwned>(reply: &str) -> Result<O, GenerationError> {
    let body = match (reply.find('{'), reply.rfind('}')) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => reply.trim(),
    };
    serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reply {
        answer: String,
    }

    #[test]
    fn parses_a_bare_json_object() {
        let reply: Reply = parse_structured("{\"answer\": \"42\"}").unwrap();
        assert_eq!(reply.answer, "42");
    }

    #[test]
    fn parses_a_fenced_json_object() {
        let raw = "```json\n{\"answer\": \"42\"}\n```";
        let reply: Reply = parse_structured(raw).unwrap();
        assert_eq!(reply.answer, "42");
    }

    #[test]
    fn rejects_a_reply_without_the_expected_shape() {
        let err = parse_structured::<Reply>("I cannot answer that.").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn flattens_numbers_and_skips_absent_optionals() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Input {
            topic: String,
            student_age: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            note: Option<String>,
        }
        let vars = to_vars(
            &Input {
                topic: "Gravity".to_string(),
                student_age: 12,
                note: None,
            },
            "test",
        )
        .unwrap();
        assert_eq!(vars.get("topic").map(String::as_str), Some("Gravity"));
        assert_eq!(vars.get("studentAge").map(String::as_str), Some("12"));
        assert!(!vars.contains_key("note"));
    }
}
