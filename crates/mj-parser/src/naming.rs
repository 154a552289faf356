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

//! Translation between camel-case property names and underscore-separated
//! response keys (`mergeVars` <-> `merge_vars`).

/// Raw response key for a property name.
///
/// Every upper-case character becomes `_` followed by its lower-case form.
/// A leading upper-case character is lowered without a separator.
pub fn to_raw_key(property: &str) -> String {
  let mut key = String::with_capacity(property.len() + 4);
  for c in property.chars() {
    if c.is_uppercase() {
      if !key.is_empty() {
        key.push('_');
      }
      key.extend(c.to_lowercase());
    } else {
      key.push(c);
    }
  }
  key
}

/// Property name for a raw response key
pub fn to_property_name(key: &str) -> String {
  let mut name = String::with_capacity(key.len());
  for (i, part) in key.split('_').filter(|p| !p.is_empty()).enumerate() {
    let mut chars = part.chars();
    match chars.next() {
      Some(first) if i > 0 => {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
      }
      Some(_) => name.push_str(part),
      None => {}
    }
  }
  name
}
