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

//! Configuration management for the MailChimp client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the MailChimp client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// MailChimp API key, including the data center suffix (`xxxx-us2`)
  pub api_key: String,

  /// Data center the key belongs to
  pub data_center: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed requests
  pub max_retries: u32,

  /// Base URL for the MailChimp API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("MAILCHIMP_API_KEY")
      .map_err(|_| Error::ApiKey("MAILCHIMP_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("MC_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid MC_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("MC_MAX_RETRIES")
      .unwrap_or_else(|_| "3".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid MC_MAX_RETRIES".to_string()))?;

    let data_center = data_center_of(&api_key);
    let base_url = match env::var("MC_BASE_URL") {
      Ok(url) => url,
      Err(_) => base_url_for(&data_center),
    };
    Url::parse(&base_url).map_err(|e| Error::Config(format!("Invalid MC_BASE_URL: {}", e)))?;

    Ok(Config { api_key, data_center, timeout_secs, max_retries, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    let data_center = data_center_of(&api_key);
    Config {
      base_url: base_url_for(&data_center),
      api_key,
      data_center,
      timeout_secs: 30,
      max_retries: 3,
    }
  }
}

/// Data center encoded in the key suffix; keys without one live in `us1`
pub fn data_center_of(api_key: &str) -> String {
  match api_key.rsplit_once('-') {
    Some((_, dc)) if !dc.is_empty() => dc.to_string(),
    _ => crate::DEFAULT_DATA_CENTER.to_string(),
  }
}

fn base_url_for(data_center: &str) -> String {
  format!("https://{}.{}/{}/", data_center, crate::MAILCHIMP_API_HOST, crate::MAILCHIMP_API_VERSION)
}
