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

//! Parser hints redirect a property's source lookup to an explicit key path.
//!
//! A type opts in by returning a static [`ParserHints`] table from
//! [`Parsable::hints`](crate::Parsable::hints). Paths are `/` or `.`
//! delimited; each segment is tried verbatim first and then through the
//! naming convention, so `"mergeVars/EXTRAS"` reads `raw["merge_vars"]["EXTRAS"]`.

use crate::naming;
use mj_core::{Error, RawMap, RawValue, Result};
use std::collections::BTreeMap;

/// Explicit source path for one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserHint {
  property: String,
  path: Vec<String>,
}

impl ParserHint {
  pub fn new(property: impl Into<String>, path: &str) -> Self {
    let path = if path.is_empty() {
      Vec::new()
    } else {
      path.split(['/', '.']).map(str::to_owned).collect()
    };
    Self { property: property.into(), path }
  }

  pub fn property(&self) -> &str {
    &self.property
  }

  pub fn path(&self) -> &[String] {
    &self.path
  }

  /// An empty path or an empty segment can never resolve
  pub fn is_well_formed(&self) -> bool {
    !self.path.is_empty() && self.path.iter().all(|segment| !segment.is_empty())
  }

  /// Walk `raw` along the hint path.
  ///
  /// Returns `Ok(None)` when any key on the way is absent or `null`, and a
  /// conversion error when a node that must be descended into is a scalar
  /// or an array.
  pub fn resolve<'a>(&self, raw: &'a RawMap) -> Result<Option<&'a RawValue>> {
    let mut current = raw;
    let last = self.path.len().saturating_sub(1);

    for (depth, segment) in self.path.iter().enumerate() {
      let Some(value) = lookup(current, segment) else {
        return Ok(None);
      };
      if depth == last {
        return Ok(Some(value));
      }
      match value {
        RawValue::Object(map) => current = map,
        RawValue::Null => return Ok(None),
        other => {
          let walked = self.path[..=depth].join("/");
          return Err(Error::conversion(
            format!("{} (via {})", self.property, walked),
            "mapping",
            other,
          ));
        }
      }
    }

    Ok(None)
  }
}

fn lookup<'a>(map: &'a RawMap, segment: &str) -> Option<&'a RawValue> {
  map.get(segment).or_else(|| map.get(&naming::to_raw_key(segment)))
}

/// Per-type table of parser hints keyed by property name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserHints {
  hints: BTreeMap<String, ParserHint>,
}

static NO_HINTS: ParserHints = ParserHints::new();

impl ParserHints {
  pub const fn new() -> Self {
    Self { hints: BTreeMap::new() }
  }

  /// Shared empty table for types that declare no hints
  pub fn none() -> &'static ParserHints {
    &NO_HINTS
  }

  /// Register `path` as the source of `property`, replacing any earlier hint
  pub fn add(&mut self, property: &str, path: &str) {
    self.hints.insert(property.to_string(), ParserHint::new(property, path));
  }

  pub fn with(mut self, property: &str, path: &str) -> Self {
    self.add(property, path);
    self
  }

  pub fn get(&self, property: &str) -> Option<&ParserHint> {
    self.hints.get(property)
  }

  pub fn iter(&self) -> impl Iterator<Item = &ParserHint> {
    self.hints.values()
  }

  pub fn len(&self) -> usize {
    self.hints.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hints.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use mj_core::test_utils::raw_map;
  use serde_json::json;

  #[test]
  fn test_path_splitting() {
    assert_eq!(ParserHint::new("extraValues", "mergeVars/EXTRAS").path(), ["mergeVars", "EXTRAS"]);
    assert_eq!(ParserHint::new("firstName", "merges.FNAME").path(), ["merges", "FNAME"]);
    assert!(ParserHint::new("x", "").path().is_empty());
    assert!(!ParserHint::new("x", "").is_well_formed());
    assert!(!ParserHint::new("x", "a//b").is_well_formed());
  }

  #[test]
  fn test_resolve_through_naming_convention() {
    let raw = raw_map(json!({ "merge_vars": { "EXTRAS": [1, 2] } }));
    let hint = ParserHint::new("extraValues", "mergeVars/EXTRAS");
    assert_eq!(hint.resolve(&raw).unwrap(), Some(&json!([1, 2])));
  }

  #[test]
  fn test_verbatim_key_wins() {
    let raw = raw_map(json!({ "mergeVars": { "A": 1 }, "merge_vars": { "A": 2 } }));
    let hint = ParserHint::new("a", "mergeVars/A");
    assert_eq!(hint.resolve(&raw).unwrap(), Some(&json!(1)));
  }

  #[test]
  fn test_missing_segment_is_absent() {
    let raw = raw_map(json!({ "merge_vars": { "OTHER": 1 } }));
    assert_eq!(ParserHint::new("a", "mergeVars/EXTRAS").resolve(&raw).unwrap(), None);
    assert_eq!(ParserHint::new("a", "nothing/EXTRAS").resolve(&raw).unwrap(), None);
  }

  #[test]
  fn test_null_intermediate_is_absent() {
    let raw = raw_map(json!({ "merges": null }));
    assert_eq!(ParserHint::new("firstName", "merges/FNAME").resolve(&raw).unwrap(), None);
  }

  #[test]
  fn test_scalar_intermediate_is_conversion_error() {
    let raw = raw_map(json!({ "merge_vars": "flat" }));
    let err = ParserHint::new("extraValues", "mergeVars/EXTRAS").resolve(&raw).unwrap_err();
    assert!(matches!(err, Error::Conversion { ref expected, .. } if expected == "mapping"));
  }

  #[test]
  fn test_hint_table() {
    let hints = ParserHints::new().with("extraValues", "mergeVars/EXTRAS");
    assert_eq!(hints.len(), 1);
    assert!(hints.get("extraValues").is_some());
    assert!(hints.get("mergeVars").is_none());
    assert!(ParserHints::none().is_empty());
  }
}
