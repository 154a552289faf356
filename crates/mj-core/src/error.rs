/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use thiserror::Error;

/// The main error type for mj-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Raw value shape does not match the declared property shape
  #[error("Conversion error on '{property}': expected {expected}, found {found}")]
  Conversion { property: String, expected: String, found: String },

  /// A property accessor could not be located or invoked
  #[error("Property access error on {type_name}: {property}")]
  PropertyAccess { type_name: String, property: String },

  /// A strict boolean flag was not a genuine boolean
  #[error("Strict type error on '{field}': expected boolean, found {found}")]
  StrictType { field: String, found: String },

  /// Error payload returned by the MailChimp API
  #[error("MailChimp API error {code}: {message}")]
  Api { code: i64, message: String },

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key")]
  ApiKey(String),

  /// Response body was not valid JSON
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),
}

impl Error {
  /// Build a conversion error from the offending raw value
  pub fn conversion(
    property: impl Into<String>,
    expected: impl Into<String>,
    found: &serde_json::Value,
  ) -> Self {
    Error::Conversion {
      property: property.into(),
      expected: expected.into(),
      found: kind_of(found).to_string(),
    }
  }

  pub fn property_access(type_name: impl Into<String>, property: impl Into<String>) -> Self {
    Error::PropertyAccess { type_name: type_name.into(), property: property.into() }
  }
}

/// Short name of a raw value's shape, used in error messages
pub fn kind_of(value: &serde_json::Value) -> &'static str {
  use serde_json::Value;

  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(n) if n.is_f64() => "float",
    Value::Number(_) => "integer",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "mapping",
  }
}

/// Result type alias for mj-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_conversion_error_display() {
    let err = Error::conversion("myInt", "integer", &json!("42"));
    assert_eq!(err.to_string(), "Conversion error on 'myInt': expected integer, found string");
  }

  #[test]
  fn test_strict_type_error_display() {
    let err = Error::StrictType { field: "listSubscribe".to_string(), found: "null".to_string() };
    assert_eq!(err.to_string(), "Strict type error on 'listSubscribe': expected boolean, found null");
  }

  #[test]
  fn test_kind_of() {
    assert_eq!(kind_of(&json!(null)), "null");
    assert_eq!(kind_of(&json!(1)), "integer");
    assert_eq!(kind_of(&json!(1.5)), "float");
    assert_eq!(kind_of(&json!([])), "array");
    assert_eq!(kind_of(&json!({})), "mapping");
  }
}
