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

//! Whole-response helpers used by the endpoint stubs.
//!
//! Each helper first checks for the API's error payload, then hands the
//! decoded body to the property mapper or a strict flag validator.

use crate::batch::BatchResult;
use crate::campaigns::CampaignsPage;
use crate::common::ApiErrorPayload;
use crate::lists::ListsPage;
use crate::members::{ListMembersPage, MemberInfoResult};
use mj_core::{Error, RawValue, Result};
use mj_parser::{validators, Parsable};
use tracing::{debug, warn};

/// Decode a raw response body into the untyped tree
pub fn decode(body: &str) -> Result<RawValue> {
  Ok(serde_json::from_str(body)?)
}

/// Fail with `Error::Api` when `raw` is a MailChimp error payload.
///
/// An error payload is a mapping carrying both an `error` message and a
/// numeric `code`.
pub fn check_api_error(raw: &RawValue) -> Result<()> {
  let RawValue::Object(map) = raw else {
    return Ok(());
  };
  if !(map.contains_key("error") && map.contains_key("code")) {
    return Ok(());
  }

  let payload: ApiErrorPayload = mj_parser::parse(raw)?;
  match (payload.code, payload.error) {
    (Some(code), Some(message)) => {
      warn!(code, %message, "MailChimp API returned an error");
      Err(Error::Api { code, message })
    }
    _ => Ok(()),
  }
}

fn typed<T: Parsable>(raw: &RawValue) -> Result<T> {
  check_api_error(raw)?;
  let parsed = mj_parser::parse(raw)?;
  debug!(target_type = T::schema().type_name(), "parsed response");
  Ok(parsed)
}

/// `lists`
pub fn lists(raw: &RawValue) -> Result<ListsPage> {
  typed(raw)
}

/// `listMemberInfo`
pub fn list_member_info(raw: &RawValue) -> Result<MemberInfoResult> {
  typed(raw)
}

/// `listMembers`
pub fn list_members(raw: &RawValue) -> Result<ListMembersPage> {
  typed(raw)
}

/// `listBatchSubscribe` and `listBatchUnsubscribe`
pub fn list_batch(raw: &RawValue) -> Result<BatchResult> {
  typed(raw)
}

/// `campaigns`
pub fn campaigns(raw: &RawValue) -> Result<CampaignsPage> {
  typed(raw)
}

/// `listSubscribe`
pub fn list_subscribe(raw: &RawValue) -> Result<bool> {
  check_api_error(raw)?;
  validators::parse_list_subscribe(raw)
}

/// `listUnsubscribe`
pub fn list_unsubscribe(raw: &RawValue) -> Result<bool> {
  check_api_error(raw)?;
  validators::parse_list_unsubscribe(raw)
}

/// `listUpdateMember`
pub fn list_update_member(raw: &RawValue) -> Result<bool> {
  check_api_error(raw)?;
  validators::parse_list_update_member(raw)
}
