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

use mj_core::test_utils::raw_map;
use mj_models::{responses, MailingList, MemberInfo, MemberStatus};
use mj_parser::MailChimpParser;
use serde_json::json;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

#[test]
fn test_list_member_info_end_to_end() {
  init_tracing();
  let decoded = json!({
    "success": 2,
    "errors": 0,
    "data": [
      {
        "id": "a0b1",
        "email": "eike@example.com",
        "email_type": "html",
        "merges": { "EMAIL": "eike@example.com", "FNAME": "Eike", "LNAME": "Hirsch", "GROUPINGS": [] },
        "status": "subscribed",
        "ip_signup": null,
        "timestamp": "2011-04-27 06:38:00",
        "member_rating": 4,
        "web_id": 123456,
      },
      {
        "id": "c2d3",
        "email": "jimp@example.com",
        "merges": { "EMAIL": "jimp@example.com", "FNAME": "Jim" },
        "status": "unsubscribed",
      },
    ],
  });

  let result = responses::list_member_info(&decoded).unwrap();

  assert_eq!(result.success, 2);
  assert_eq!(result.data.len(), 2);
  let first = &result.data[0];
  assert_eq!(first.first_name.as_deref(), Some("Eike"));
  assert_eq!(first.last_name.as_deref(), Some("Hirsch"));
  assert_eq!(first.merge_field("GROUPINGS"), Some(&json!([])));
  assert_eq!(first.ip_signup, None);
  let second = &result.data[1];
  assert_eq!(second.last_name, None);
  assert_eq!(second.member_status(), Some(MemberStatus::Unsubscribed));
}

#[test]
fn test_set_vars_updates_existing_instance() {
  let parser = MailChimpParser::new();
  let mut member = MemberInfo {
    email: "old@example.com".to_string(),
    status: Some("pending".to_string()),
    ..Default::default()
  };

  parser.set_vars(&raw_map(json!({ "status": "subscribed" })), &mut member).unwrap();

  assert_eq!(member.email, "old@example.com");
  assert_eq!(member.member_status(), Some(MemberStatus::Subscribed));
}

#[test]
fn test_parse_array_of_lists() {
  let parser = MailChimpParser::new();
  let lists: Vec<MailingList> =
    parser.parse_array(&json!([{ "id": "a", "name": "One" }, { "id": "b", "name": "Two" }])).unwrap();

  assert_eq!(lists.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(), vec!["One", "Two"]);
}

#[test]
fn test_api_error_wins_over_parsing() {
  let err = responses::campaigns(&json!({ "error": "Invalid MailChimp API Key", "code": 104 })).unwrap_err();
  assert_eq!(err.to_string(), "MailChimp API error 104: Invalid MailChimp API Key");
}
