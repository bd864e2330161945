use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind};

/// Turns `key=value` arguments into the JSON object sent as a request body.
///
/// Empty entries are skipped, the first `=` separates key from value, and a
/// repeated key keeps its last value. An entry without `=` or with an empty
/// key is rejected.
pub fn parse_payload<S: AsRef<str>>(entries: &[S]) -> Result<Map<String, Value>, Error> {
    let mut object = Map::new();
    for entry in entries {
        let entry = entry.as_ref();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                object.insert(key.to_string(), Value::String(value.to_string()));
            }
            _ => {
                return Err(Error {
                    kind: ErrorKind::PayloadParse(entry.to_string()),
                })
            }
        }
    }
    Ok(object)
}
