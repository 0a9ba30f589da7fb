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

//! Record layouts resolved from field position annotations.
//!
//! A [`Layout`] is the per-type description the encoder works from: one [`FieldLayout`] per
//! declared field, in declaration order, plus the total declared line length. Layouts are
//! built from a record's [`FieldDecl`] list and memoized per type in a [`LayoutCache`].
//!
//! # Sequential Layout
//!
//! Positions never act as seek targets. Fields are appended to the line in declaration order
//! and each interval only contributes a *width* (for truncation and padding) and an *end*
//! (for the total line length). Gaps and overlaps between intervals are not detected, and
//! declaration order has to match column order.
//!
//! # Examples
//!
//! ```rust
//! use fixedwidth::layout::{FieldDecl, Layout};
//!
//! let layout = Layout::from_fields(&[
//!     FieldDecl::new("name", Some("1,5")),
//!     FieldDecl::new("note", None),
//!     FieldDecl::new("age", Some("6,8")),
//! ]);
//!
//! assert_eq!(layout.total_length(), 8);
//! assert_eq!(layout.fields().len(), 3);
//! assert!(layout.fields()[1].position.is_none());
//! ```

mod cache;
mod position;

pub use cache::LayoutCache;
pub use position::{parse_position, Position, MAX_COLUMN};

/// A field as declared on a record type.
///
/// `tag` holds the raw text of the field's `fixed` annotation, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name
    pub name: &'static str,
    /// Raw `fixed` annotation, e.g. `"1,5"`
    pub tag: Option<&'static str>,
}

impl FieldDecl {
    /// Declares a field.
    pub const fn new(name: &'static str, tag: Option<&'static str>) -> Self {
        FieldDecl { name, tag }
    }
}

/// Resolved layout of one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field name
    pub name: &'static str,
    /// Parsed interval, `None` if the field is excluded from encoding
    pub position: Option<Position>,
}

/// The resolved layout of a record type.
///
/// Immutable once built. Slots are aligned with the record's declaration order, so
/// `fields()[i]` describes the value returned by [`crate::Record::field`] for `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<FieldLayout>,
    total_length: usize,
}

impl Layout {
    /// Builds a layout from declared fields.
    ///
    /// The total length is the largest `end` over all parsed intervals, or `0` if no field
    /// carries a usable annotation.
    pub fn from_fields(decls: &[FieldDecl]) -> Self {
        let fields: Vec<FieldLayout> = decls
            .iter()
            .map(|decl| FieldLayout {
                name: decl.name,
                position: decl.tag.and_then(parse_position),
            })
            .collect();

        let total_length = fields
            .iter()
            .filter_map(|field| field.position)
            .map(|position| position.end)
            .max()
            .unwrap_or(0);

        Layout {
            fields,
            total_length,
        }
    }

    /// Per-field layouts in declaration order.
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Declared line length in characters.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Number of fields that take part in encoding.
    pub fn encoded_fields(&self) -> usize {
        self.fields.iter().filter(|f| f.position.is_some()).count()
    }
}
