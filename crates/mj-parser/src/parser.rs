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

use crate::{mapper, validators, Parsable};
use mj_core::{RawMap, RawValue, Result};

/// Entry point used by the endpoint stubs to turn decoded responses into
/// typed values.
///
/// # Examples
///
/// ```ignore
/// use mj_parser::MailChimpParser;
/// use mj_models::MemberInfoResult;
///
/// let parser = MailChimpParser::new();
/// let info: MemberInfoResult = parser.parse(&response)?;
/// let subscribed = parser.parse_list_subscribe(&flag)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MailChimpParser;

impl MailChimpParser {
  pub fn new() -> Self {
    Self
  }

  /// Populate `target` in place from a raw mapping
  pub fn set_vars<T: Parsable>(&self, raw: &RawMap, target: &mut T) -> Result<()> {
    mapper::set_vars(raw, target)
  }

  pub fn parse<T: Parsable>(&self, raw: &RawValue) -> Result<T> {
    mapper::parse(raw)
  }

  pub fn parse_array<T: Parsable>(&self, raw: &RawValue) -> Result<Vec<T>> {
    mapper::parse_array(raw)
  }

  pub fn parse_list_subscribe(&self, value: &RawValue) -> Result<bool> {
    validators::parse_list_subscribe(value)
  }

  pub fn parse_list_unsubscribe(&self, value: &RawValue) -> Result<bool> {
    validators::parse_list_unsubscribe(value)
  }

  pub fn parse_list_update_member(&self, value: &RawValue) -> Result<bool> {
    validators::parse_list_update_member(value)
  }
}
