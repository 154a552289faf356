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

//! Mailing list models (`lists`)

use crate::common::parse_timestamp;
use chrono::NaiveDateTime;
use mj_parser::{static_table, Parsable, Schema};
use serde::{Deserialize, Serialize};

/// Aggregate statistics of a mailing list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListStats {
  pub member_count: i64,
  pub unsubscribe_count: i64,
  pub cleaned_count: i64,
  pub member_count_since_send: i64,
  pub unsubscribe_count_since_send: i64,
  pub cleaned_count_since_send: i64,
  pub campaign_count: i64,
  pub grouping_count: i64,
  pub group_count: i64,
  pub merge_var_count: i64,
  pub avg_sub_rate: Option<f64>,
  pub avg_unsub_rate: Option<f64>,
  pub target_sub_rate: Option<f64>,
  pub open_rate: Option<f64>,
  pub click_rate: Option<f64>,
}

impl Parsable for ListStats {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<ListStats>,
      Schema::<ListStats>::builder("ListStats")
        .value("memberCount", |s, v: i64| s.member_count = v)
        .value("unsubscribeCount", |s, v: i64| s.unsubscribe_count = v)
        .value("cleanedCount", |s, v: i64| s.cleaned_count = v)
        .value("memberCountSinceSend", |s, v: i64| s.member_count_since_send = v)
        .value("unsubscribeCountSinceSend", |s, v: i64| s.unsubscribe_count_since_send = v)
        .value("cleanedCountSinceSend", |s, v: i64| s.cleaned_count_since_send = v)
        .value("campaignCount", |s, v: i64| s.campaign_count = v)
        .value("groupingCount", |s, v: i64| s.grouping_count = v)
        .value("groupCount", |s, v: i64| s.group_count = v)
        .value("mergeVarCount", |s, v: i64| s.merge_var_count = v)
        .nullable("avgSubRate", |s, v: Option<f64>| s.avg_sub_rate = v)
        .nullable("avgUnsubRate", |s, v: Option<f64>| s.avg_unsub_rate = v)
        .nullable("targetSubRate", |s, v: Option<f64>| s.target_sub_rate = v)
        .nullable("openRate", |s, v: Option<f64>| s.open_rate = v)
        .nullable("clickRate", |s, v: Option<f64>| s.click_rate = v)
        .build()
    )
  }
}

/// A mailing list as returned by `lists`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailingList {
  pub id: String,
  pub web_id: i64,
  pub name: String,
  pub date_created: String,
  pub email_type_option: bool,
  pub use_awesomebar: bool,
  pub default_from_name: Option<String>,
  pub default_from_email: Option<String>,
  pub default_subject: Option<String>,
  pub default_language: Option<String>,
  pub list_rating: Option<f64>,
  pub subscribe_url_short: Option<String>,
  pub subscribe_url_long: Option<String>,
  pub beamer_address: Option<String>,
  pub visibility: Option<String>,
  pub stats: Option<ListStats>,
  pub modules: Option<Vec<String>>,
}

impl MailingList {
  pub fn created_at(&self) -> Option<NaiveDateTime> {
    parse_timestamp(&self.date_created)
  }

  pub fn member_count(&self) -> i64 {
    self.stats.as_ref().map_or(0, |s| s.member_count)
  }

  pub fn is_public(&self) -> bool {
    self.visibility.as_deref() == Some("pub")
  }
}

impl Parsable for MailingList {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<MailingList>,
      Schema::<MailingList>::builder("MailingList")
        .value("id", |l, v: String| l.id = v)
        .value("webId", |l, v: i64| l.web_id = v)
        .value("name", |l, v: String| l.name = v)
        .value("dateCreated", |l, v: String| l.date_created = v)
        .value("emailTypeOption", |l, v: bool| l.email_type_option = v)
        .value("useAwesomebar", |l, v: bool| l.use_awesomebar = v)
        .nullable("defaultFromName", |l, v: Option<String>| l.default_from_name = v)
        .nullable("defaultFromEmail", |l, v: Option<String>| l.default_from_email = v)
        .nullable("defaultSubject", |l, v: Option<String>| l.default_subject = v)
        .nullable("defaultLanguage", |l, v: Option<String>| l.default_language = v)
        .nullable("listRating", |l, v: Option<f64>| l.list_rating = v)
        .nullable("subscribeUrlShort", |l, v: Option<String>| l.subscribe_url_short = v)
        .nullable("subscribeUrlLong", |l, v: Option<String>| l.subscribe_url_long = v)
        .nullable("beamerAddress", |l, v: Option<String>| l.beamer_address = v)
        .nullable("visibility", |l, v: Option<String>| l.visibility = v)
        .object("stats", |l, v| l.stats = v)
        .values("modules", |l, v: Option<Vec<String>>| l.modules = v)
        .build()
    )
  }
}

/// Page of mailing lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListsPage {
  pub total: i64,
  pub data: Vec<MailingList>,
}

impl ListsPage {
  pub fn find_by_name(&self, name: &str) -> Option<&MailingList> {
    self.data.iter().find(|l| l.name == name)
  }
}

impl Parsable for ListsPage {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<ListsPage>,
      Schema::<ListsPage>::builder("ListsPage")
        .value("total", |p, v: i64| p.total = v)
        .array("data", |p, v: Option<Vec<MailingList>>| p.data = v.unwrap_or_default())
        .build()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_mailing_list_parsing() {
    let raw = json!({
      "id": "a1b2c3",
      "web_id": 1234,
      "name": "Newsletter",
      "date_created": "2011-04-27 06:38:00",
      "email_type_option": false,
      "use_awesomebar": true,
      "default_from_name": "MailJimp",
      "list_rating": 4,
      "visibility": "pub",
      "stats": { "member_count": 42, "avg_sub_rate": null, "open_rate": 12.5 },
      "modules": ["social"],
    });

    let list: MailingList = mj_parser::parse(&raw).unwrap();

    assert_eq!(list.id, "a1b2c3");
    assert_eq!(list.web_id, 1234);
    assert!(list.use_awesomebar);
    assert_eq!(list.list_rating, Some(4.0));
    assert_eq!(list.member_count(), 42);
    assert!(list.is_public());
    assert!(list.created_at().is_some());
    let stats = list.stats.as_ref().unwrap();
    assert_eq!(stats.avg_sub_rate, None);
    assert_eq!(stats.open_rate, Some(12.5));
    assert_eq!(list.modules, Some(vec!["social".to_string()]));
    assert_eq!(list.default_subject, None);
  }

  #[test]
  fn test_lists_page() {
    let raw = json!({ "total": 2, "data": [{ "id": "a", "name": "One" }, { "id": "b", "name": "Two" }] });

    let page: ListsPage = mj_parser::parse(&raw).unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.find_by_name("Two").map(|l| l.id.as_str()), Some("b"));
    assert!(page.find_by_name("Three").is_none());
  }
}
