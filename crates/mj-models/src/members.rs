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

//! List member models (`listMemberInfo`, `listMembers`)

use crate::common::parse_timestamp;
use chrono::NaiveDateTime;
use mj_core::RawMap;
use mj_parser::{static_table, Parsable, ParserHints, Schema};
use serde::{Deserialize, Serialize};

/// Subscription status of a list member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
  Subscribed,
  Unsubscribed,
  Cleaned,
  Pending,
}

impl MemberStatus {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "subscribed" => Some(MemberStatus::Subscribed),
      "unsubscribed" => Some(MemberStatus::Unsubscribed),
      "cleaned" => Some(MemberStatus::Cleaned),
      "pending" => Some(MemberStatus::Pending),
      _ => None,
    }
  }
}

impl std::fmt::Display for MemberStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MemberStatus::Subscribed => write!(f, "subscribed"),
      MemberStatus::Unsubscribed => write!(f, "unsubscribed"),
      MemberStatus::Cleaned => write!(f, "cleaned"),
      MemberStatus::Pending => write!(f, "pending"),
    }
  }
}

/// Detailed member record from `listMemberInfo`.
///
/// `first_name` and `last_name` are lifted out of the `merges` map through
/// parser hints; the full merge map stays available untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberInfo {
  pub id: Option<String>,
  pub email: String,
  pub email_type: Option<String>,
  pub merges: Option<RawMap>,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub status: Option<String>,
  pub ip_signup: Option<String>,
  pub ip_opt: Option<String>,
  pub timestamp: Option<String>,
  pub info_changed: Option<String>,
  pub member_rating: Option<i32>,
  pub web_id: Option<i64>,
  pub error: Option<String>,
}

impl MemberInfo {
  pub fn member_status(&self) -> Option<MemberStatus> {
    self.status.as_deref().and_then(MemberStatus::from_str)
  }

  pub fn subscribed_at(&self) -> Option<NaiveDateTime> {
    self.timestamp.as_deref().and_then(parse_timestamp)
  }

  /// Untyped merge field by tag, e.g. `"FNAME"`
  pub fn merge_field(&self, tag: &str) -> Option<&serde_json::Value> {
    self.merges.as_ref().and_then(|m| m.get(tag))
  }

  pub fn is_error(&self) -> bool {
    self.error.is_some()
  }
}

impl Parsable for MemberInfo {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<MemberInfo>,
      Schema::<MemberInfo>::builder("MemberInfo")
        .nullable("id", |m, v: Option<String>| m.id = v)
        .value("email", |m, v: String| m.email = v)
        .nullable("emailType", |m, v: Option<String>| m.email_type = v)
        .map("merges", |m, v| m.merges = v)
        .nullable("firstName", |m, v: Option<String>| m.first_name = v)
        .nullable("lastName", |m, v: Option<String>| m.last_name = v)
        .nullable("status", |m, v: Option<String>| m.status = v)
        .nullable("ipSignup", |m, v: Option<String>| m.ip_signup = v)
        .nullable("ipOpt", |m, v: Option<String>| m.ip_opt = v)
        .nullable("timestamp", |m, v: Option<String>| m.timestamp = v)
        .nullable("infoChanged", |m, v: Option<String>| m.info_changed = v)
        .nullable("memberRating", |m, v: Option<i32>| m.member_rating = v)
        .nullable("webId", |m, v: Option<i64>| m.web_id = v)
        .nullable("error", |m, v: Option<String>| m.error = v)
        .build()
    )
  }

  fn hints() -> &'static ParserHints {
    static_table!(
      ParserHints,
      ParserHints::new().with("firstName", "merges/FNAME").with("lastName", "merges/LNAME")
    )
  }
}

/// Envelope of `listMemberInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberInfoResult {
  pub success: i64,
  pub errors: i64,
  pub data: Vec<MemberInfo>,
}

impl MemberInfoResult {
  /// Members that were found, skipping per-address errors
  pub fn found(&self) -> impl Iterator<Item = &MemberInfo> {
    self.data.iter().filter(|m| !m.is_error())
  }
}

impl Parsable for MemberInfoResult {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<MemberInfoResult>,
      Schema::<MemberInfoResult>::builder("MemberInfoResult")
        .value("success", |r, v: i64| r.success = v)
        .value("errors", |r, v: i64| r.errors = v)
        .array("data", |r, v: Option<Vec<MemberInfo>>| r.data = v.unwrap_or_default())
        .build()
    )
  }
}

/// Short member entry from `listMembers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMember {
  pub email: String,
  pub timestamp: Option<String>,
}

impl Parsable for ListMember {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<ListMember>,
      Schema::<ListMember>::builder("ListMember")
        .value("email", |m, v: String| m.email = v)
        .nullable("timestamp", |m, v: Option<String>| m.timestamp = v)
        .build()
    )
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMembersPage {
  pub total: i64,
  pub data: Vec<ListMember>,
}

impl Parsable for ListMembersPage {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<ListMembersPage>,
      Schema::<ListMembersPage>::builder("ListMembersPage")
        .value("total", |p, v: i64| p.total = v)
        .array("data", |p, v: Option<Vec<ListMember>>| p.data = v.unwrap_or_default())
        .build()
    )
  }
}
