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

//! Structured records with annotated fields.
//!
//! A [`Record`] exposes its declared fields in declaration order: statically through
//! [`Record::FIELDS`] (names and raw `fixed` annotations) and per value through
//! [`Record::field`]. The [`crate::fixed_record!`] macro generates both from a struct
//! definition and is the usual way to declare a record.
//!
//! Implementing the trait by hand is equivalent, as long as `FIELDS` and `field` agree on
//! the order:
//!
//! ```rust
//! use fixedwidth::{layout::FieldDecl, marshal, Encode, Record, Result};
//!
//! struct Header {
//!     kind: &'static str,
//!     count: u32,
//! }
//!
//! impl Record for Header {
//!     const FIELDS: &'static [FieldDecl] = &[
//!         FieldDecl::new("kind", Some("1,3")),
//!         FieldDecl::new("count", Some("4,9")),
//!     ];
//!
//!     fn field(&self, index: usize) -> Option<&dyn Encode> {
//!         match index {
//!             0 => Some(&self.kind),
//!             1 => Some(&self.count),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Encode for Header {
//!     fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
//!         fixedwidth::encode_record(self, out)
//!     }
//! }
//!
//! let line = marshal(&Header { kind: "HDR", count: 12 })?;
//! assert_eq!(line, b"HDR12    ");
//! # Ok::<(), fixedwidth::Error>(())
//! ```

use crate::{encode::Encode, layout::FieldDecl, Result};

/// A structured value encoded as one fixed-width line.
///
/// Nested records are encoded through the same trait: a record used as a field value
/// contributes its own composed line as that field's raw bytes.
pub trait Record: Encode + 'static {
    /// Declared fields in declaration order.
    const FIELDS: &'static [FieldDecl];

    /// The value of the field declared at `index`.
    ///
    /// Returns `None` if `index` is out of range.
    fn field(&self, index: usize) -> Option<&dyn Encode>;

    /// Calls `visit` with every field value in declaration order.
    ///
    /// Stops at the first error returned by `visit`. The default walks [`Record::field`] for
    /// every declared index; [`crate::fixed_record!`] emits a direct pass over the fields.
    ///
    /// # Errors
    /// Returns whatever `visit` reports.
    fn visit_fields(&self, visit: &mut dyn FnMut(&dyn Encode) -> Result<()>) -> Result<()> {
        for index in 0..Self::FIELDS.len() {
            if let Some(value) = self.field(index) {
                visit(value)?;
            }
        }
        Ok(())
    }
}
