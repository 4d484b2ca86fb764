//! Turning caller input into the ordered item list.
//!
//! Text input is a JSON object whose first property (in document order) holds the item array,
//! e.g. `{"items": [{"value": 3}, {"value": 1}]}`. The caller states which form it passes; the
//! core never guesses.

use crate::error::{Error, Result};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum InputData {
    /// JSON text wrapping the item list in a single-property object.
    Json(String),
    /// Items that are already decoded.
    Items(Vec<Value>),
}

impl InputData {
    pub fn into_items(self) -> Result<Vec<Value>> {
        match self {
            Self::Json(text) => decode_json_items(&text),
            Self::Items(items) => Ok(items),
        }
    }

    pub fn to_items(&self) -> Result<Vec<Value>> {
        match self {
            Self::Json(text) => decode_json_items(text),
            Self::Items(items) => Ok(items.clone()),
        }
    }
}

impl From<Vec<Value>> for InputData {
    fn from(items: Vec<Value>) -> Self {
        Self::Items(items)
    }
}

pub fn decode_json_items(text: &str) -> Result<Vec<Value>> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|err| Error::input_format(format!("malformed JSON: {err}")))?;
    let Value::Object(map) = doc else {
        return Err(Error::input_format(
            "expected a JSON object wrapping the item list",
        ));
    };
    let Some((key, first)) = map.into_iter().next() else {
        return Err(Error::input_format("JSON object has no properties"));
    };
    match first {
        Value::Array(items) => Ok(items),
        other => Err(Error::input_format(format!(
            "property `{key}` must be an array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
