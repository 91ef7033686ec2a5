//! Defensive JSON extraction from model responses
//!
//! The prompt asks for bare JSON with an exact key set, but models wrap
//! answers in markdown fences or return prose anyway. Extraction never
//! fails: an unparseable response degrades to a fallback record with the
//! raw text as its summary.

use std::collections::BTreeMap;

use serde_json::Value;

/// Result of extracting a JSON object from a raw model response.
///
/// `fields` holds exactly the expected keys, each mapped to its parsed value
/// or `Value::Null`. `parsed` is false when the response was not a JSON
/// object and the fallback record was used instead.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub fields: BTreeMap<String, Value>,
    pub parsed: bool,
}

impl Extraction {
    /// Look up an expected key. Absent and null are both `Value::Null`.
    pub fn field(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&Value::Null)
    }
}

/// Extract a JSON object with the given expected keys from `raw`.
///
/// Strips an optional opening fence line (``` or ```json) and an optional
/// trailing closing fence before parsing. Unexpected keys in the parsed
/// object are dropped; expected keys missing from it map to null. When the
/// remainder does not parse as a JSON object, the fallback record carries
/// the untouched raw text under `summary` and null for every other key.
pub fn extract_json(raw: &str, expected_keys: &[&str]) -> Extraction {
    let cleaned = strip_fences(raw);

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(object)) => {
            let fields = expected_keys
                .iter()
                .map(|&key| {
                    let value = object.get(key).cloned().unwrap_or(Value::Null);
                    (key.to_string(), value)
                })
                .collect();
            Extraction {
                fields,
                parsed: true,
            }
        }
        _ => {
            let mut fields: BTreeMap<String, Value> = expected_keys
                .iter()
                .map(|&key| (key.to_string(), Value::Null))
                .collect();
            fields.insert("summary".to_string(), Value::String(raw.to_string()));
            Extraction {
                fields,
                parsed: false,
            }
        }
    }
}

/// Remove markdown code-fence wrapping, if present.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if text.starts_with("```") {
        // Drop the whole opening line, which may carry a language tag.
        text = match text.find('\n') {
            Some(newline) => &text[newline + 1..],
            None => "",
        };
    }

    if let Some(stripped) = text.trim_end().strip_suffix("```") {
        text = stripped;
    }

    text.trim()
}
