//! Structured serialization of command data.
//!
//! JSON and YAML serialize the data as-is. CSV goes through JSON first and
//! flattens it: an array of objects becomes one row per object, a single
//! object becomes `key,value` rows. Lists of plain values inside a cell are
//! joined with `|`, the separator the campaign data itself uses for media.

use campaign_seeker::loader::MEDIA_SEPARATOR;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::output::OutputMode;

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("Not a structured output mode")]
    NotStructured,
}

impl From<csv::Error> for SerializeError {
    fn from(err: csv::Error) -> Self {
        SerializeError::Csv(err.to_string())
    }
}

/// Serializes data to the specified structured format.
///
/// Returns an error if the output mode is not a structured mode.
pub fn serialize_structured<T: Serialize + ?Sized>(
    data: &T,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputMode::Csv => serialize_csv(data),
        _ => Err(SerializeError::NotStructured),
    }
}

/// Serializes data to CSV format.
pub fn serialize_csv<T: Serialize + ?Sized>(data: &T) -> Result<String, SerializeError> {
    let json_value = serde_json::to_value(data)?;
    flatten_json_to_csv(&json_value)
}

fn flatten_json_to_csv(value: &Value) -> Result<String, SerializeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    match value {
        Value::Array(arr) if !arr.is_empty() => {
            if let Some(Value::Object(first)) = arr.first() {
                let headers: Vec<&str> = first.keys().map(String::as_str).collect();
                wtr.write_record(&headers)?;

                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| obj.get(*h).map(cell).unwrap_or_default())
                            .collect();
                        wtr.write_record(&row)?;
                    }
                }
            } else {
                wtr.write_record(["value"])?;
                for item in arr {
                    wtr.write_record([cell(item)])?;
                }
            }
        }
        // An empty list still gets a header so consumers see a valid file.
        Value::Array(_) => {
            wtr.write_record(["value"])?;
        }
        Value::Object(obj) => {
            wtr.write_record(["key", "value"])?;
            for (k, v) in obj {
                wtr.write_record([k.as_str(), &cell(v)])?;
            }
        }
        _ => {
            wtr.write_record(["value"])?;
            wtr.write_record([cell(value)])?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

/// Converts a JSON value to one CSV cell.
fn cell(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) if items.iter().all(is_scalar) => {
            let separator = MEDIA_SEPARATOR.to_string();
            items.iter().map(cell).collect::<Vec<_>>().join(&separator)
        }
        other => other.to_string(),
    }
}

fn is_scalar(v: &Value) -> bool {
    !matches!(v, Value::Array(_) | Value::Object(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Row {
        name: String,
        count: i32,
    }

    #[test]
    fn test_to_json() {
        let data = Row {
            name: "Bebidas".into(),
            count: 3,
        };
        let result = serialize_structured(&data, OutputMode::Json).unwrap();
        assert!(result.contains("\"name\": \"Bebidas\""));
        assert!(result.contains("\"count\": 3"));
    }

    #[test]
    fn test_to_yaml() {
        let data = Row {
            name: "Bebidas".into(),
            count: 3,
        };
        let result = serialize_structured(&data, OutputMode::Yaml).unwrap();
        assert!(result.contains("name: Bebidas"));
        assert!(result.contains("count: 3"));
    }

    #[test]
    fn test_serialize_structured_not_structured() {
        let data = json!({"key": "value"});
        let result = serialize_structured(&data, OutputMode::Text);
        assert!(matches!(result, Err(SerializeError::NotStructured)));
    }

    #[test]
    fn test_csv_array_of_objects() {
        let data = json!([
            {"id": 2, "media": ["Televisión", "Publicidad Exterior"]},
            {"id": 5, "media": ["Digital"]}
        ]);
        let result = serialize_csv(&data).unwrap();
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "id,media");
        assert_eq!(lines[1], "2,Televisión|Publicidad Exterior");
        assert_eq!(lines[2], "5,Digital");
    }

    #[test]
    fn test_csv_single_object() {
        let data = json!({"total": 20, "label": "Digital"});
        let result = serialize_csv(&data).unwrap();
        assert!(result.contains("key,value"));
        assert!(result.contains("total,20"));
        assert!(result.contains("label,Digital"));
    }

    #[test]
    fn test_csv_nested_objects_stay_json() {
        let data = json!({"by_agency": [{"label": "VML", "count": 2}]});
        let result = serialize_csv(&data).unwrap();
        assert!(result.contains("by_agency"));
        assert!(result.contains("VML"));
    }

    #[test]
    fn test_csv_empty_array_has_header() {
        let data: Vec<Row> = Vec::new();
        let result = serialize_csv(&data).unwrap();
        assert_eq!(result.trim(), "value");
    }
}
