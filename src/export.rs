use crate::error::{LaunchLabError, LlResult};
use crate::shot::Shot;
use serde_json::{Map, Value};
use std::io::Write;

/// Writes shots as CSV. The header is the union of the keys present across
/// all shots, in the order they are first seen; absent values are blank.
pub fn write_csv<W: Write>(shots: &[Shot], out: W) -> LlResult<()> {
    let rows: Vec<Map<String, Value>> = shots
        .iter()
        .map(|s| -> LlResult<Map<String, Value>> {
            match serde_json::to_value(s)? {
                Value::Object(map) => Ok(map),
                other => Err(LaunchLabError::Validation(format!(
                    "shot serialized to {} instead of an object",
                    other
                ))),
            }
        })
        .collect::<LlResult<_>>()?;

    let header = union_of_keys(&rows);
    let mut writer = csv::Writer::from_writer(out);
    if header.is_empty() {
        writer.flush()?;
        return Ok(());
    }

    writer.write_record(&header)?;
    for row in &rows {
        let record: Vec<String> = header
            .iter()
            .map(|k| row.get(k).map(render).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn to_csv_string(shots: &[Shot]) -> LlResult<String> {
    let mut buf = Vec::new();
    write_csv(shots, &mut buf)?;
    String::from_utf8(buf).map_err(|e| LaunchLabError::Validation(e.to_string()))
}

fn union_of_keys(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for row in rows {
        for k in row.keys() {
            if !keys.iter().any(|seen| seen == k) {
                keys.push(k.clone());
            }
        }
    }
    keys
}

fn render(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
