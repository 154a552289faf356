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

//! Common types and helpers shared by the MailChimp response models

use chrono::NaiveDateTime;
use mj_parser::{static_table, Parsable, Schema};
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the 1.3 API (`2011-04-27 06:38:00`)
pub const MAILCHIMP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a MailChimp timestamp, `None` when empty or malformed
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
  NaiveDateTime::parse_from_str(value, MAILCHIMP_TIME_FORMAT).ok()
}

/// Error payload the API returns in place of a regular response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
  pub error: Option<String>,
  pub code: Option<i64>,
}

impl Parsable for ApiErrorPayload {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<ApiErrorPayload>,
      Schema::<ApiErrorPayload>::builder("ApiErrorPayload")
        .nullable("error", |p, v: Option<String>| p.error = v)
        .nullable("code", |p, v: Option<i64>| p.code = v)
        .build()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Datelike, Timelike};

  #[test]
  fn test_parse_timestamp() {
    let ts = parse_timestamp("2011-04-27 06:38:00").unwrap();
    assert_eq!(ts.year(), 2011);
    assert_eq!(ts.month(), 4);
    assert_eq!(ts.hour(), 6);
    assert_eq!(ts.minute(), 38);
  }

  #[test]
  fn test_parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("27.04.11").is_none());
  }
}
