use serde_json::Value;

use crate::error::ValidationError;
use crate::models::RawPost;

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Проверяет, что `value` — массив постов, и возвращает его типизированным.
///
/// Останавливается на первом несовпавшем элементе; лишние поля игнорируются.
pub fn validate_posts(value: Value) -> Result<Vec<RawPost>, ValidationError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ValidationError::NotAnArray {
                found: kind_of(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<RawPost>(item).map_err(|err| ValidationError::Element {
                index,
                reason: err.to_string(),
            })
        })
        .collect()
}
