// ./src/payload.rs

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON body served by `/api/hello`.
///
/// Only `message` is looked at. Its shape is not validated: whatever the
/// server put there is rendered as text, see [`ResponsePayload::display_text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

impl ResponsePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(Value::String(message.into())),
        }
    }

    /// Parses a response body. Any valid JSON is accepted except a bare
    /// `null`, which has no properties to read a message from. Other
    /// non-object bodies simply have no message.
    pub fn parse(body: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_null() {
            return Err(FetchError::parse(NULL_BODY));
        }
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                message: map.remove("message"),
            },
            _ => Self::default(),
        }
    }

    /// Text written into the display target.
    ///
    /// A missing or `null` message clears the target, matching a DOM
    /// `textContent` assignment of `undefined`. Everything else goes through
    /// JavaScript string conversion, so the page reads the same as when the
    /// value is assigned from script.
    pub fn display_text(&self) -> String {
        match &self.message {
            None | Some(Value::Null) => String::new(),
            Some(value) => js_string(value),
        }
    }
}

const NULL_BODY: &str = "Cannot read properties of null (reading 'message')";

/// JavaScript `String(value)` for a JSON value.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) => js_number(float),
            None => number.to_string(),
        },
        Value::String(text) => text.clone(),
        // Array.prototype.join: null holes become empty strings
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// `Number.prototype.toString` for finite values: plain decimals inside
/// [1e-6, 1e21), exponent form with an explicit sign outside it.
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
