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

//! Composition of one record into one line.

use crate::{
    layout::LayoutCache,
    writer::compose::{fit, FILLER, MAX_CHAR_LEN},
    Record, Result,
};

/// Appends the fixed-width line of `record` to `out`.
///
/// Fields are written in declaration order with an append-only cursor: each field with a
/// usable position contributes its fitted bytes followed by its filler. Fields without a
/// usable position contribute nothing. The layout is taken from [`LayoutCache::global`].
///
/// This is the [`crate::Encode`] implementation of every record; nested records end up here
/// recursively.
///
/// # Errors
/// The first error reported by a field encoding aborts the record. `out` may then hold a
/// partial line and should be discarded.
pub fn encode_record<R: Record>(record: &R, out: &mut Vec<u8>) -> Result<()> {
    let layout = LayoutCache::global().resolve::<R>();
    // Only a hint, the line grows as fields are appended
    let _ = out.try_reserve(layout.total_length().saturating_mul(MAX_CHAR_LEN));

    let mut fields = layout.fields().iter();
    let mut raw = Vec::new();
    record.visit_fields(&mut |value| {
        let Some(position) = fields.next().and_then(|field| field.position) else {
            return Ok(());
        };

        raw.clear();
        value.encode(&mut raw)?;

        let chunk = fit(&raw, value.content_class(), position.width());
        out.extend_from_slice(chunk.bytes);
        out.resize(out.len() + chunk.filler, FILLER);
        Ok(())
    })
}
