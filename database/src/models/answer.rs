use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Name carried by the sentinel entry substituted for a
/// recommendations payload that could not be parsed.
pub const FORMAT_ERROR_NAME: &str = "[FORMAT ERROR]";

/// One stored question with its recommendation list and keyword set.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnswerRecord {
    pub question: String,
    pub recommendations: Value,
    pub keywords: Vec<String>,
}

/// One record of a `/save` batch as posted by the answer pipeline.
/// Every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRecord {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: Value,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Normalize a posted `answer` into the stored recommendations array.
///
/// An array is accepted as-is; a string is parsed as JSON. Anything
/// else, any parse failure, or a parse that does not yield an array is
/// replaced with a single sentinel entry whose description carries the
/// raw input, so loading never rejects a record.
pub fn normalize_recommendations(answer: &Value) -> Value {
    match answer {
        Value::Array(_) => answer.clone(),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed @ Value::Array(_)) => parsed,
            _ => format_error_sentinel(raw.clone()),
        },
        other => format_error_sentinel(other.to_string()),
    }
}

fn format_error_sentinel(raw: String) -> Value {
    tracing::warn!("replacing malformed recommendations payload: {}", raw);
    serde_json::json!([{ "name": FORMAT_ERROR_NAME, "description": raw }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_answer_is_kept_as_is() {
        let answer = json!([{ "name": "a", "description": "b" }]);
        assert_eq!(normalize_recommendations(&answer), answer);
    }

    #[test]
    fn json_encoded_string_is_parsed() {
        let answer = json!("[{\"name\":\"a\"}]");
        assert_eq!(normalize_recommendations(&answer), json!([{ "name": "a" }]));
    }

    #[test]
    fn invalid_json_string_becomes_sentinel() {
        let answer = json!("not valid json");
        assert_eq!(
            normalize_recommendations(&answer),
            json!([{ "name": "[FORMAT ERROR]", "description": "not valid json" }])
        );
    }

    #[test]
    fn string_parsing_to_non_array_becomes_sentinel() {
        let answer = json!("{\"name\":\"a\"}");
        assert_eq!(
            normalize_recommendations(&answer),
            json!([{ "name": "[FORMAT ERROR]", "description": "{\"name\":\"a\"}" }])
        );
    }

    #[test]
    fn non_string_non_array_becomes_sentinel() {
        let answer = json!(42);
        assert_eq!(
            normalize_recommendations(&answer),
            json!([{ "name": "[FORMAT ERROR]", "description": "42" }])
        );
    }

    #[test]
    fn save_record_fields_default_when_absent() {
        let record: SaveRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.question, "");
        assert!(record.answer.is_null());
        assert!(record.keywords.is_empty());
    }
}
