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

//! Results of `listBatchSubscribe` and `listBatchUnsubscribe`

use mj_parser::{static_table, Parsable, Schema};
use serde::{Deserialize, Serialize};

/// One rejected address of a batch call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchError {
  pub code: i64,
  pub message: String,
  pub email: Option<String>,
}

impl Parsable for BatchError {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<BatchError>,
      Schema::<BatchError>::builder("BatchError")
        .value("code", |e, v: i64| e.code = v)
        .value("message", |e, v: String| e.message = v)
        .nullable("email", |e, v: Option<String>| e.email = v)
        .build()
    )
  }
}

/// Counters and per-address errors of a batch call.
///
/// Subscribe calls fill `add_count`/`update_count`, unsubscribe calls fill
/// `success_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
  pub add_count: i64,
  pub update_count: i64,
  pub success_count: i64,
  pub error_count: i64,
  pub errors: Vec<BatchError>,
}

impl BatchResult {
  pub fn processed(&self) -> i64 {
    self.add_count + self.update_count + self.success_count
  }

  pub fn is_clean(&self) -> bool {
    self.error_count == 0 && self.errors.is_empty()
  }
}

impl Parsable for BatchResult {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<BatchResult>,
      Schema::<BatchResult>::builder("BatchResult")
        .value("addCount", |r, v: i64| r.add_count = v)
        .value("updateCount", |r, v: i64| r.update_count = v)
        .value("successCount", |r, v: i64| r.success_count = v)
        .value("errorCount", |r, v: i64| r.error_count = v)
        .array("errors", |r, v: Option<Vec<BatchError>>| r.errors = v.unwrap_or_default())
        .build()
    )
  }
}
