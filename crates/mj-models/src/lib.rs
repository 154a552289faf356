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

//! # mj-models
//!
//! Data models for MailChimp API responses.
//!
//! Every model implements [`mj_parser::Parsable`], so the property mapper
//! can build it straight from a decoded response.
//!
//! ## Features
//!
//! - **Type Safety**: list, member, batch and campaign responses are strongly typed
//! - **Parser Hints**: merge fields such as `FNAME` are lifted onto typed properties
//! - **Serde Integration**: models derive `Serialize`/`Deserialize` for caching
//! - **Date Handling**: MailChimp timestamps parse into `chrono` values
//!
//! ## Usage
//!
//! ```ignore
//! use mj_models::responses;
//!
//! let lists = responses::lists(&decoded)?;
//! let member_info = responses::list_member_info(&decoded)?;
//! ```

#![warn(clippy::all)]

pub mod batch;
pub mod campaigns;
pub mod common;
pub mod lists;
pub mod members;
pub mod responses;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use batch::*;
pub use campaigns::*;
pub use lists::*;
pub use members::*;
