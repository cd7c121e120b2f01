//! JSON pretty-printing, minification and TypeScript interface generation.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConvertError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonFormats {
    pub pretty: String,
    pub minified: String,
    pub typescript: String,
    pub depth: usize,
    pub keys: usize,
}

pub fn try_pretty_print_json(input: &str) -> Result<String, ConvertError> {
    let value: Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Two-space indented JSON, or `None` if the input does not parse.
pub fn pretty_print_json(input: &str) -> Option<String> {
    try_pretty_print_json(input).ok()
}

pub fn try_minify_json(input: &str) -> Result<String, ConvertError> {
    let value: Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string(&value)?)
}

pub fn minify_json(input: &str) -> Option<String> {
    try_minify_json(input).ok()
}

/// Convert a JSON key into a PascalCase type name.
pub fn to_type_name(key: &str) -> String {
    let mut name = String::new();
    let mut upper_next = true;

    for c in key.chars() {
        if c.is_alphanumeric() {
            if upper_next {
                name.extend(c.to_uppercase());
                upper_next = false;
            } else {
                name.push(c);
            }
        } else {
            upper_next = true;
        }
    }

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, 'T');
    }
    name
}

fn property_name(key: &str) -> String {
    let is_identifier = key
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        key.to_string()
    } else {
        serde_json::to_string(key).unwrap_or_else(|_| format!("\"{key}\""))
    }
}

/// TypeScript type for `value`, emitting named interfaces into `out` as needed.
fn type_of(value: &Value, name: &str, out: &mut Vec<String>) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => match items.first() {
            None => "unknown[]".to_string(),
            Some(first) => {
                let item_type = type_of(first, &format!("{name}Item"), out);
                format!("{item_type}[]")
            }
        },
        Value::Object(map) if map.is_empty() => "Record<string, unknown>".to_string(),
        Value::Object(map) => {
            emit_interface(name, map, out);
            name.to_string()
        }
    }
}

fn emit_interface(name: &str, map: &Map<String, Value>, out: &mut Vec<String>) {
    // Reserve the slot so parents are listed before their children.
    let slot = out.len();
    out.push(String::new());

    let mut body = format!("interface {name} {{\n");
    for (key, value) in map {
        let child_type = type_of(value, &to_type_name(key), out);
        body.push_str(&format!("  {}: {};\n", property_name(key), child_type));
    }
    body.push('}');

    out[slot] = body;
}

/// Derive TypeScript declarations describing the structure of a JSON value.
pub fn json_value_to_interface(value: &Value, root_name: &str) -> String {
    let mut out = Vec::new();
    let root_type = type_of(value, root_name, &mut out);

    if !matches!(value, Value::Object(map) if !map.is_empty()) {
        out.insert(0, format!("type {root_name} = {root_type};"));
    }

    out.join("\n\n")
}

pub fn json_to_interface(input: &str, root_name: &str) -> Option<String> {
    let value: Value = serde_json::from_str(input).ok()?;
    Some(json_value_to_interface(&value, root_name))
}

fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

fn key_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(key_count).sum(),
        Value::Object(map) => map.len() + map.values().map(key_count).sum::<usize>(),
        _ => 0,
    }
}

pub fn json_to_formats(input: &str) -> Option<JsonFormats> {
    let value: Value = serde_json::from_str(input).ok()?;

    Some(JsonFormats {
        pretty: serde_json::to_string_pretty(&value).ok()?,
        minified: serde_json::to_string(&value).ok()?,
        typescript: json_value_to_interface(&value, "Root"),
        depth: depth(&value),
        keys: key_count(&value),
    })
}
