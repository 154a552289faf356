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

//! # mj-parser
//!
//! Maps the loosely-typed responses of the MailChimp API onto
//! strongly-typed Rust values.
//!
//! ## Overview
//!
//! - **Property mapping**: each target type declares a [`Schema`] of named
//!   setters. Property names are camel case (`mergeVars`) and read the
//!   underscore key (`merge_vars`) of the raw mapping.
//! - **Parser hints**: a type may redirect a property to an explicit key
//!   path such as `"merges/FNAME"` via [`Parsable::hints`].
//! - **Strict flags**: [`MailChimpParser::parse_list_subscribe`] and friends
//!   accept nothing but a genuine boolean.
//!
//! ## Usage
//!
//! ```ignore
//! use mj_parser::{static_table, MailChimpParser, Parsable, Schema};
//!
//! #[derive(Default)]
//! struct Member { email: String, merges: Option<mj_core::RawMap> }
//!
//! impl Parsable for Member {
//!   fn schema() -> &'static Schema<Self> {
//!     static_table!(
//!       Schema<Member>,
//!       Schema::<Member>::builder("Member")
//!         .value("email", |m, v: String| m.email = v)
//!         .map("merges", |m, v| m.merges = v)
//!         .build()
//!     )
//!   }
//! }
//!
//! let member: Member = MailChimpParser::new().parse(&response)?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `mj_core::Result`. Absent keys are never errors;
//! shape mismatches are `Error::Conversion`, broken hint declarations are
//! `Error::PropertyAccess` and rejected flags are `Error::StrictType`.

#![warn(clippy::all)]

pub mod convert;
pub mod hints;
pub mod mapper;
pub mod naming;
pub mod parser;
pub mod schema;
pub mod validators;

pub use convert::{Primitive, PrimitiveKind};
pub use hints::{ParserHint, ParserHints};
pub use mapper::{parse, parse_array, set_vars};
pub use parser::MailChimpParser;
pub use schema::{Parsable, Property, Schema, SchemaBuilder, Shape};
pub use mj_core::{Error, RawMap, RawValue, Result};
