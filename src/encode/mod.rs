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

//! Conversion of field values into raw bytes.
//!
//! Every value that can appear in a fixed-width line implements [`Encode`]. The trait is
//! resolved statically per concrete type, so the choice of strategy is made once by the
//! compiler rather than on every call:
//!
//! | Type | Raw encoding | Content class |
//! |------|--------------|---------------|
//! | custom `impl Encode` | whatever the impl writes | chosen by the impl |
//! | `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>`, `&T` | the contained value, `None` is empty | of the contained value |
//! | records (see [`crate::fixed_record!`]) | the composed line of the nested record | textual |
//! | `String`, `str`, `Cow<str>`, `char` | the UTF-8 bytes | textual |
//! | `i8`..`i128`, `u8`..`u128`, `isize`, `usize` | base-10 digits | numeric |
//! | `f32`, `f64` | fixed point, two decimals | numeric |
//! | `bool`, `()`, `fn(..) -> R`, sequences and maps as fields | [`crate::Error::UnsupportedType`] | textual |
//!
//! The content class decides how the compositor fits the raw bytes into the field width:
//! textual content is truncated to the width, numeric content never is.
//!
//! # Custom Encodings
//!
//! Implementing [`Encode`] for a type is the way to give it its own representation. Report
//! failures with [`crate::Error::custom`]; they abort the encode call unchanged.
//!
//! ```rust
//! use fixedwidth::{Encode, ContentClass, Error, Result};
//!
//! struct Cents(i64);
//!
//! impl Encode for Cents {
//!     fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
//!         if self.0 < 0 {
//!             return Err(Error::custom("negative amounts are not representable"));
//!         }
//!         out.extend_from_slice(format!("{:09}", self.0).as_bytes());
//!         Ok(())
//!     }
//!
//!     fn content_class(&self) -> ContentClass {
//!         ContentClass::Numeric
//!     }
//! }
//!
//! let mut out = Vec::new();
//! Cents(1250).encode(&mut out)?;
//! assert_eq!(out, b"000001250");
//! assert!(Cents(-1).encode(&mut Vec::new()).is_err());
//! # Ok::<(), fixedwidth::Error>(())
//! ```

mod primitives;
mod unsupported;
mod wrappers;

use strum::{Display, EnumString};

use crate::Result;

/// How a field's raw bytes are fitted into its declared width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContentClass {
    /// Truncated to the width in characters, padded with spaces when shorter
    Text,
    /// Never truncated, padded with spaces when shorter
    Numeric,
}

/// A value that has a fixed-width representation.
///
/// The trait is object safe; `dyn Encode` is the dynamic-type wrapper and dispatches to the
/// encoding of whatever value it holds.
pub trait Encode {
    /// Appends the raw encoding of `self` to `out`.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedType`] for types without a fixed-width
    /// representation, or whatever a custom encoding reports.
    fn encode(&self, out: &mut Vec<u8>) -> Result<()>;

    /// Content class used when fitting the raw bytes into a field width.
    fn content_class(&self) -> ContentClass {
        ContentClass::Text
    }

    /// Elements to emit as separate lines when `self` is encoded at the top level.
    ///
    /// Sequences return their elements; every other value returns `None` and is encoded
    /// as a single line.
    fn as_lines(&self) -> Option<Vec<&dyn Encode>> {
        None
    }
}

/// Encodes `value` into a new buffer.
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    value.encode(&mut out)?;
    Ok(out)
}
