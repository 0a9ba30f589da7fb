// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # fixedwidth
//!
//! Encoding of structured records into fixed-width text lines, as used by legacy flat-file
//! interchange formats such as mainframe extracts and EDI-style feeds. Every record becomes
//! one line of a known width and every field occupies the character columns declared by its
//! position annotation.
//!
//! ## Features
//!
//! - **Declarative layouts** - `#[fixed = "start,end"]` annotations on record fields
//! - **Unicode aware** - widths, truncation and padding are counted in characters, never bytes
//! - **Static dispatch** - the encoding of every field type is chosen at compile time
//! - **Cached layouts** - annotations are parsed once per record type, thread-safe
//! - **Streaming** - any [`std::io::Write`] sink, one line per record of a sequence
//!
//! ## Quick Start
//!
//! ```rust
//! use fixedwidth::{fixed_record, marshal};
//!
//! fixed_record! {
//!     struct Person {
//!         #[fixed = "1,5"]
//!         name: String,
//!         #[fixed = "6,8"]
//!         age: i32,
//!     }
//! }
//!
//! let people = vec![
//!     Person { name: "Bob".into(), age: 42 },
//!     Person { name: "This is too long".into(), age: 7 },
//! ];
//!
//! assert_eq!(marshal(&people)?, b"Bob  42 \nThis 7  ");
//! # Ok::<(), fixedwidth::Error>(())
//! ```
//!
//! ## Encoding Rules
//!
//! - Positions are 1-based and inclusive; a field annotated `"6,8"` is three characters wide.
//! - Fields are appended in declaration order. Positions determine widths and the declared
//!   line length, never an absolute offset, so the declaration order must match the column
//!   order. Gaps and overlaps are not detected.
//! - Fields without an annotation, or with a malformed one, are not encoded at all.
//! - Text shorter than its field is padded with spaces, longer text is truncated at a
//!   character boundary.
//! - Numbers are padded with spaces but never truncated. A number wider than its field
//!   lengthens the line and shifts every following field.
//! - Floats are written with exactly two decimals. Absent optionals are written as spaces.
//! - Sequences at the top level become one line per element, separated by a line terminator
//!   with none after the last line.
//!
//! ## Architecture
//!
//! - [`layout`] - Position annotation parsing and the per-type [`layout::LayoutCache`]
//! - [`encode`] - The [`Encode`] trait and its implementations for built-in types
//! - [`writer`] - Field composition, line assembly and the streaming [`Encoder`]
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: layout resolution at
//! `debug`, completed encode calls at `trace`. No logger is installed by the library.

mod macros;

mod error;
mod record;

/// Convenient re-exports of the most commonly used types and traits.
///
/// ```rust
/// use fixedwidth::prelude::*;
///
/// fixed_record! {
///     struct Code {
///         #[fixed = "1,4"]
///         value: u16,
///     }
/// }
///
/// assert_eq!(marshal(&Code { value: 7 })?, b"7   ");
/// # Ok::<(), Error>(())
/// ```
pub mod prelude;

/// Value encodings and the [`Encode`] trait.
pub mod encode;

/// Position annotations and resolved record layouts.
pub mod layout;

/// Line composition and the streaming encoder.
pub mod writer;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub use encode::{ContentClass, Encode};
pub use error::{BoxError, Error};
pub use record::Record;
pub use writer::{encode_record, marshal, marshal_with, Encoder, EncoderConfig, LineTerminator};
