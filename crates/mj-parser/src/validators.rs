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

//! Strict boolean flags.
//!
//! Some list calls answer with a bare boolean. Anything else, including
//! `null` or the string `"true"`, means the service replied with an
//! unexpected shape and is rejected.

use mj_core::{error::kind_of, Error, RawValue, Result};
use tracing::warn;

/// Accept only a genuine boolean; `None` stands for an absent field
pub fn require_bool(field: &str, value: Option<&RawValue>) -> Result<bool> {
  match value {
    Some(RawValue::Bool(flag)) => Ok(*flag),
    other => {
      let found = other.map_or("absent", kind_of);
      warn!(field, found, "non-boolean flag in response");
      Err(Error::StrictType { field: field.to_string(), found: found.to_string() })
    }
  }
}

/// Result flag of `listSubscribe`
pub fn parse_list_subscribe(value: &RawValue) -> Result<bool> {
  require_bool("listSubscribe", Some(value))
}

/// Result flag of `listUnsubscribe`
pub fn parse_list_unsubscribe(value: &RawValue) -> Result<bool> {
  require_bool("listUnsubscribe", Some(value))
}

/// Result flag of `listUpdateMember`
pub fn parse_list_update_member(value: &RawValue) -> Result<bool> {
  require_bool("listUpdateMember", Some(value))
}
