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

//! The property mapper: raw mapping in, populated target out.

use crate::hints::ParserHints;
use crate::schema::{Parsable, Schema};
use mj_core::{Error, RawMap, RawValue, Result};
use tracing::{instrument, trace};

/// Populate `target` from `raw`.
///
/// Properties are visited in schema order. A hinted property reads from its
/// hint path, every other property from its naming-convention key. Absent
/// keys leave the property untouched. The first conversion failure aborts
/// the call; properties assigned before it keep their new values.
#[instrument(level = "trace", skip_all, fields(type_name = T::schema().type_name()))]
pub fn set_vars<T: Parsable>(raw: &RawMap, target: &mut T) -> Result<()> {
  let schema = T::schema();
  let hints = T::hints();
  check_hints(schema, hints)?;

  for property in schema.properties() {
    let value = match hints.get(property.name()) {
      Some(hint) => hint.resolve(raw)?,
      None => raw.get(property.raw_key()),
    };

    match value {
      Some(value) => {
        trace!(property = property.name(), shape = %property.shape(), "assigning");
        property.assign(target, value)?;
      }
      None => trace!(property = property.name(), key = property.raw_key(), "absent"),
    }
  }

  Ok(())
}

/// Build a fresh `T` from a raw value that must be a mapping
pub fn parse<T: Parsable>(raw: &RawValue) -> Result<T> {
  match raw {
    RawValue::Object(map) => {
      let mut target = T::default();
      set_vars(map, &mut target)?;
      Ok(target)
    }
    other => Err(Error::conversion(T::schema().type_name(), "mapping", other)),
  }
}

/// Build one `T` per element of a raw array, in order
pub fn parse_array<T: Parsable>(raw: &RawValue) -> Result<Vec<T>> {
  match raw {
    RawValue::Array(items) => items.iter().map(parse::<T>).collect(),
    other => Err(Error::conversion(format!("[{}]", T::schema().type_name()), "array", other)),
  }
}

// Hint tables are static, so the verdict is cached on the schema and the
// walk runs once per type.
fn check_hints<T>(schema: &Schema<T>, hints: &ParserHints) -> Result<()> {
  match schema.hint_problem(|| first_hint_problem(schema, hints)) {
    Some(problem) => Err(Error::property_access(schema.type_name(), problem)),
    None => Ok(()),
  }
}

fn first_hint_problem<T>(schema: &Schema<T>, hints: &ParserHints) -> Option<String> {
  for hint in hints.iter() {
    if schema.property(hint.property()).is_none() {
      return Some(format!("hint targets unknown property '{}'", hint.property()));
    }
    if !hint.is_well_formed() {
      return Some(format!("malformed hint path {:?} for '{}'", hint.path().join("/"), hint.property()));
    }
  }
  None
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::static_table;
  use mj_core::test_utils::raw_map;
  use serde_json::json;

  #[derive(Debug, Default)]
  struct Partial {
    first: i64,
    second: i64,
    third: i64,
  }

  impl Parsable for Partial {
    fn schema() -> &'static Schema<Self> {
      static_table!(
        Schema<Partial>,
        Schema::<Partial>::builder("Partial")
          .value("first", |p, v: i64| p.first = v)
          .value("second", |p, v: i64| p.second = v)
          .value("third", |p, v: i64| p.third = v)
          .build()
      )
    }
  }

  #[derive(Debug, Default)]
  struct BadHint {
    id: i64,
  }

  impl Parsable for BadHint {
    fn schema() -> &'static Schema<Self> {
      static_table!(Schema<BadHint>, Schema::<BadHint>::builder("BadHint").value("id", |b, v: i64| b.id = v).build())
    }

    fn hints() -> &'static ParserHints {
      static_table!(ParserHints, ParserHints::new().with("nothing", "merges/NOTHING"))
    }
  }

  #[test]
  fn test_first_error_aborts() {
    let raw = raw_map(json!({ "first": 1, "second": "two", "third": 3 }));
    let mut partial = Partial::default();

    let err = set_vars(&raw, &mut partial).unwrap_err();

    assert!(matches!(err, Error::Conversion { ref property, .. } if property == "second"));
    assert_eq!(partial.first, 1);
    assert_eq!(partial.second, 0);
    assert_eq!(partial.third, 0);
  }

  #[test]
  fn test_unknown_hinted_property() {
    let raw = raw_map(json!({ "id": 1 }));
    let mut bad = BadHint::default();

    let err = set_vars(&raw, &mut bad).unwrap_err();

    assert!(matches!(err, Error::PropertyAccess { ref type_name, .. } if type_name == "BadHint"));
    assert_eq!(bad.id, 0);

    let again = set_vars(&raw, &mut bad).unwrap_err();
    assert_eq!(again.to_string(), err.to_string());
  }

  #[test]
  fn test_hint_check_cached_per_type() {
    let _ = set_vars(&raw_map(json!({})), &mut BadHint::default());

    let cached = BadHint::schema().hint_problem(|| panic!("hint table validated twice"));
    assert_eq!(cached, Some("hint targets unknown property 'nothing'"));
  }

  #[test]
  fn test_parse_requires_mapping() {
    assert!(parse::<Partial>(&json!([1, 2])).is_err());
    let partial: Partial = parse(&json!({ "third": 3 })).unwrap();
    assert_eq!(partial.third, 3);
  }

  #[test]
  fn test_parse_array() {
    let parsed: Vec<Partial> = parse_array(&json!([{ "first": 1 }, { "first": 2 }])).unwrap();
    assert_eq!(parsed.iter().map(|p| p.first).collect::<Vec<_>>(), vec![1, 2]);
    assert!(parse_array::<Partial>(&json!({ "first": 1 })).is_err());
  }
}
