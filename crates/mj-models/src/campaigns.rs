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

//! Campaign models (`campaigns`)

use crate::common::parse_timestamp;
use chrono::NaiveDateTime;
use mj_parser::{static_table, Parsable, Schema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
  pub id: String,
  pub web_id: i64,
  pub list_id: String,
  pub folder_id: Option<i64>,
  pub title: String,
  /// `regular`, `plaintext`, `absplit`, `rss`, `trans` or `auto`
  pub campaign_type: String,
  pub status: String,
  pub subject: Option<String>,
  pub from_name: Option<String>,
  pub from_email: Option<String>,
  pub emails_sent: i64,
  pub create_time: Option<String>,
  pub send_time: Option<String>,
  pub archive_url: Option<String>,
}

impl Campaign {
  pub fn is_sent(&self) -> bool {
    self.status == "sent"
  }

  pub fn created_at(&self) -> Option<NaiveDateTime> {
    self.create_time.as_deref().and_then(parse_timestamp)
  }

  pub fn sent_at(&self) -> Option<NaiveDateTime> {
    self.send_time.as_deref().and_then(parse_timestamp)
  }
}

impl Parsable for Campaign {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<Campaign>,
      Schema::<Campaign>::builder("Campaign")
        .value("id", |c, v: String| c.id = v)
        .value("webId", |c, v: i64| c.web_id = v)
        .value("listId", |c, v: String| c.list_id = v)
        .nullable("folderId", |c, v: Option<i64>| c.folder_id = v)
        .value("title", |c, v: String| c.title = v)
        .value("type", |c, v: String| c.campaign_type = v)
        .value("status", |c, v: String| c.status = v)
        .nullable("subject", |c, v: Option<String>| c.subject = v)
        .nullable("fromName", |c, v: Option<String>| c.from_name = v)
        .nullable("fromEmail", |c, v: Option<String>| c.from_email = v)
        .value("emailsSent", |c, v: i64| c.emails_sent = v)
        .nullable("createTime", |c, v: Option<String>| c.create_time = v)
        .nullable("sendTime", |c, v: Option<String>| c.send_time = v)
        .nullable("archiveUrl", |c, v: Option<String>| c.archive_url = v)
        .build()
    )
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignsPage {
  pub total: i64,
  pub data: Vec<Campaign>,
}

impl CampaignsPage {
  pub fn sent(&self) -> impl Iterator<Item = &Campaign> {
    self.data.iter().filter(|c| c.is_sent())
  }
}

impl Parsable for CampaignsPage {
  fn schema() -> &'static Schema<Self> {
    static_table!(
      Schema<CampaignsPage>,
      Schema::<CampaignsPage>::builder("CampaignsPage")
        .value("total", |p, v: i64| p.total = v)
        .array("data", |p, v: Option<Vec<Campaign>>| p.data = v.unwrap_or_default())
        .build()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_campaigns_page() {
    let raw = json!({
      "total": 2,
      "data": [
        {
          "id": "c1", "web_id": 11, "list_id": "a1b2c3", "folder_id": null, "title": "April",
          "type": "regular", "status": "sent", "emails_sent": 120,
          "create_time": "2011-04-20 10:00:00", "send_time": "2011-04-27 06:38:00",
        },
        { "id": "c2", "title": "May", "type": "plaintext", "status": "save", "send_time": null },
      ],
    });

    let page: CampaignsPage = mj_parser::parse(&raw).unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.data[0].campaign_type, "regular");
    assert_eq!(page.data[0].folder_id, None);
    assert!(page.data[0].sent_at().unwrap() > page.data[0].created_at().unwrap());
    assert_eq!(page.sent().count(), 1);
    assert!(page.data[1].sent_at().is_none());
  }
}
