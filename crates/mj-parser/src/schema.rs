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

//! Declarative property metadata.
//!
//! Each target type registers its settable properties once, as a
//! [`Schema`] of named setters with a declared [`Shape`]. The mapper walks
//! the schema instead of introspecting the type at runtime.

use crate::convert::{convert, Primitive, PrimitiveKind};
use crate::hints::ParserHints;
use crate::{mapper, naming};
use mj_core::{Error, RawMap, RawValue, Result};
use std::fmt;
use std::sync::OnceLock;

/// A type the property mapper can populate
pub trait Parsable: Default + Send + Sync + 'static {
  /// Property table, built once per type
  fn schema() -> &'static Schema<Self>;

  /// Source path overrides; empty unless the type opts in
  fn hints() -> &'static ParserHints {
    ParserHints::none()
  }
}

/// Cache a table in a function-local `OnceLock`.
///
/// ```ignore
/// fn schema() -> &'static Schema<Self> {
///   static_table!(Schema<Campaign>, Schema::<Campaign>::builder("Campaign").value("id", |c, v: String| c.id = v).build())
/// }
/// ```
#[macro_export]
macro_rules! static_table {
  ($ty:ty, $init:expr) => {{
    static TABLE: ::std::sync::OnceLock<$ty> = ::std::sync::OnceLock::new();
    TABLE.get_or_init(|| $init)
  }};
}

/// Declared value shape of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
  /// Non-nullable primitive; a raw `null` leaves it untouched
  Primitive(PrimitiveKind),
  /// `Option` wrapped primitive; a raw `null` assigns `None`
  Nullable(PrimitiveKind),
  /// Nested target type
  Object(&'static str),
  /// Ordered list of nested targets
  ObjectArray(&'static str),
  /// Ordered list of primitives
  PrimitiveArray(PrimitiveKind),
  /// Untyped sub-mapping, kept as-is
  OpenMap,
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Shape::Primitive(kind) => write!(f, "{}", kind),
      Shape::Nullable(kind) => write!(f, "{}?", kind),
      Shape::Object(name) => write!(f, "{}", name),
      Shape::ObjectArray(name) => write!(f, "[{}]", name),
      Shape::PrimitiveArray(kind) => write!(f, "[{}]", kind),
      Shape::OpenMap => write!(f, "map"),
    }
  }
}

type Assign<T> = Box<dyn Fn(&mut T, &RawValue) -> Result<()> + Send + Sync>;

/// A named, typed, settable slot on `T`
pub struct Property<T> {
  name: &'static str,
  raw_key: String,
  shape: Shape,
  assign: Assign<T>,
}

impl<T> Property<T> {
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Key the naming convention derives from the property name
  pub fn raw_key(&self) -> &str {
    &self.raw_key
  }

  pub fn shape(&self) -> Shape {
    self.shape
  }

  /// Convert `raw` per the declared shape and store it on `target`
  pub fn assign(&self, target: &mut T, raw: &RawValue) -> Result<()> {
    (self.assign)(target, raw)
  }
}

impl<T> fmt::Debug for Property<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Property")
      .field("name", &self.name)
      .field("raw_key", &self.raw_key)
      .field("shape", &self.shape)
      .finish()
  }
}

/// Ordered property table of one target type
pub struct Schema<T> {
  type_name: &'static str,
  properties: Vec<Property<T>>,
  hint_problem: OnceLock<Option<String>>,
}

impl<T: 'static> Schema<T> {
  pub fn builder(type_name: &'static str) -> SchemaBuilder<T> {
    SchemaBuilder { type_name, properties: Vec::new() }
  }
}

impl<T> Schema<T> {
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn properties(&self) -> &[Property<T>] {
    &self.properties
  }

  pub fn property(&self, name: &str) -> Option<&Property<T>> {
    self.properties.iter().find(|p| p.name == name)
  }

  /// Outcome of validating the type's hint table, computed on first use
  pub(crate) fn hint_problem(&self, check: impl FnOnce() -> Option<String>) -> Option<&str> {
    self.hint_problem.get_or_init(check).as_deref()
  }
}

impl<T> fmt::Debug for Schema<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Schema")
      .field("type_name", &self.type_name)
      .field("properties", &self.properties)
      .finish()
  }
}

pub struct SchemaBuilder<T> {
  type_name: &'static str,
  properties: Vec<Property<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
  fn push(mut self, name: &'static str, shape: Shape, assign: Assign<T>) -> Self {
    self.properties.push(Property { name, raw_key: naming::to_raw_key(name), shape, assign });
    self
  }

  /// Non-nullable primitive. A raw `null` is skipped.
  pub fn value<V, F>(self, name: &'static str, set: F) -> Self
  where
    V: Primitive,
    F: Fn(&mut T, V) + Send + Sync + 'static,
  {
    self.push(
      name,
      Shape::Primitive(V::KIND),
      Box::new(move |target: &mut T, raw: &RawValue| {
        if !raw.is_null() {
          set(target, convert(name, raw)?);
        }
        Ok(())
      }),
    )
  }

  /// Nullable primitive. A raw `null` assigns `None`.
  pub fn nullable<V, F>(self, name: &'static str, set: F) -> Self
  where
    V: Primitive,
    F: Fn(&mut T, Option<V>) + Send + Sync + 'static,
  {
    self.push(
      name,
      Shape::Nullable(V::KIND),
      Box::new(move |target: &mut T, raw: &RawValue| {
        let value = if raw.is_null() { None } else { Some(convert(name, raw)?) };
        set(target, value);
        Ok(())
      }),
    )
  }

  /// Nested object, populated by recursing into the raw sub-mapping
  pub fn object<U, F>(self, name: &'static str, set: F) -> Self
  where
    U: Parsable,
    F: Fn(&mut T, Option<U>) + Send + Sync + 'static,
  {
    self.push(
      name,
      Shape::Object(short_type_name::<U>()),
      Box::new(move |target: &mut T, raw: &RawValue| {
        let value = match raw {
          RawValue::Null => None,
          RawValue::Object(map) => Some(nested::<U>(map)?),
          other => return Err(Error::conversion(name, "mapping", other)),
        };
        set(target, value);
        Ok(())
      }),
    )
  }

  /// Array of nested objects, one fresh target per element in list order
  pub fn array<U, F>(self, name: &'static str, set: F) -> Self
  where
    U: Parsable,
    F: Fn(&mut T, Option<Vec<U>>) + Send + Sync + 'static,
  {
    self.push(
      name,
      Shape::ObjectArray(short_type_name::<U>()),
      Box::new(move |target: &mut T, raw: &RawValue| {
        let value = match raw {
          RawValue::Null => None,
          RawValue::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
              match item {
                RawValue::Object(map) => values.push(nested::<U>(map)?),
                other => {
                  return Err(Error::conversion(format!("{}[{}]", name, index), "mapping", other))
                }
              }
            }
            Some(values)
          }
          other => return Err(Error::conversion(name, "array", other)),
        };
        set(target, value);
        Ok(())
      }),
    )
  }

  /// Array of primitives, each element converted through the primitive table
  pub fn values<V, F>(self, name: &'static str, set: F) -> Self
  where
    V: Primitive,
    F: Fn(&mut T, Option<Vec<V>>) + Send + Sync + 'static,
  {
    self.push(
      name,
      Shape::PrimitiveArray(V::KIND),
      Box::new(move |target: &mut T, raw: &RawValue| {
        let value = match raw {
          RawValue::Null => None,
          RawValue::Array(items) => Some(
            items
              .iter()
              .enumerate()
              .map(|(index, item)| convert(&format!("{}[{}]", name, index), item))
              .collect::<Result<Vec<V>>>()?,
          ),
          other => return Err(Error::conversion(name, "array", other)),
        };
        set(target, value);
        Ok(())
      }),
    )
  }

  /// Open map; the raw sub-mapping is stored without conversion
  pub fn map<F>(self, name: &'static str, set: F) -> Self
  where
    F: Fn(&mut T, Option<RawMap>) + Send + Sync + 'static,
  {
    self.push(
      name,
      Shape::OpenMap,
      Box::new(move |target: &mut T, raw: &RawValue| {
        let value = match raw {
          RawValue::Null => None,
          RawValue::Object(map) => Some(map.clone()),
          other => return Err(Error::conversion(name, "mapping", other)),
        };
        set(target, value);
        Ok(())
      }),
    )
  }

  pub fn build(self) -> Schema<T> {
    Schema { type_name: self.type_name, properties: self.properties, hint_problem: OnceLock::new() }
  }
}

// Resolved without touching `U::schema()`, which may still be initialising
// for self-referential types.
fn short_type_name<U>() -> &'static str {
  let full = std::any::type_name::<U>();
  full.rsplit("::").next().unwrap_or(full)
}

fn nested<U: Parsable>(map: &RawMap) -> Result<U> {
  let mut value = U::default();
  mapper::set_vars(map, &mut value)?;
  Ok(value)
}
