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

//! Conversion table from raw scalars to primitive property types.
//!
//! | raw \ target | i32          | i64          | f64 | bool | String |
//! |--------------|--------------|--------------|-----|------|--------|
//! | integer      | if in range  | if in range  | yes | -    | -      |
//! | float        | -            | -            | yes | -    | -      |
//! | boolean      | -            | -            | -   | yes  | -      |
//! | string       | -            | -            | -   | -    | yes    |
//!
//! Everything else is a conversion error.

use mj_core::{Error, RawValue, Result};
use std::fmt;

/// Declared kind of a primitive property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
  Int,
  Long,
  Double,
  Bool,
  String,
}

impl fmt::Display for PrimitiveKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PrimitiveKind::Int => write!(f, "int"),
      PrimitiveKind::Long => write!(f, "long"),
      PrimitiveKind::Double => write!(f, "double"),
      PrimitiveKind::Bool => write!(f, "boolean"),
      PrimitiveKind::String => write!(f, "string"),
    }
  }
}

/// A Rust type a raw scalar can be assigned to
pub trait Primitive: Sized + Send + Sync + 'static {
  const KIND: PrimitiveKind;

  /// `None` when the raw value is not in this type's row of the table
  fn from_raw(raw: &RawValue) -> Option<Self>;
}

impl Primitive for i32 {
  const KIND: PrimitiveKind = PrimitiveKind::Int;

  fn from_raw(raw: &RawValue) -> Option<Self> {
    raw.as_i64().and_then(|n| i32::try_from(n).ok())
  }
}

impl Primitive for i64 {
  const KIND: PrimitiveKind = PrimitiveKind::Long;

  fn from_raw(raw: &RawValue) -> Option<Self> {
    raw.as_i64()
  }
}

impl Primitive for f64 {
  const KIND: PrimitiveKind = PrimitiveKind::Double;

  fn from_raw(raw: &RawValue) -> Option<Self> {
    match raw {
      RawValue::Number(n) => n.as_f64(),
      _ => None,
    }
  }
}

impl Primitive for bool {
  const KIND: PrimitiveKind = PrimitiveKind::Bool;

  fn from_raw(raw: &RawValue) -> Option<Self> {
    raw.as_bool()
  }
}

impl Primitive for String {
  const KIND: PrimitiveKind = PrimitiveKind::String;

  fn from_raw(raw: &RawValue) -> Option<Self> {
    raw.as_str().map(str::to_owned)
  }
}

/// Convert a raw scalar for `property`, failing with a conversion error
pub fn convert<V: Primitive>(property: &str, raw: &RawValue) -> Result<V> {
  V::from_raw(raw).ok_or_else(|| Error::conversion(property, V::KIND.to_string(), raw))
}
