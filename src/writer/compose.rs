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

//! Fitting raw field encodings into their declared widths.
//!
//! Widths are counted in Unicode characters. Textual content is cut after `width`
//! characters, never inside a multi-byte sequence; numeric content is never cut. Whatever
//! is left of the width after the kept bytes is reported as a filler count, which the line
//! writer realizes as trailing spaces.
//!
//! # Numeric Overflow
//!
//! A number with more characters than its field width is kept whole and receives no
//! filler. The line grows by the excess and every following field shifts right. Callers
//! that need a strict line length must size numeric fields for their largest value.
//!
//! # Invalid UTF-8
//!
//! Custom encodings may hand back bytes that are not valid UTF-8. Each byte that does not
//! start a well-formed sequence counts as one character.

use crate::encode::ContentClass;

/// Maximum number of bytes in one UTF-8 encoded character.
pub const MAX_CHAR_LEN: usize = 4;

/// Byte used to fill a field up to its width.
pub const FILLER: u8 = b' ';

/// The part of a field's raw encoding that goes into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Bytes to append, a prefix of the raw encoding
    pub bytes: &'a [u8],
    /// Number of filler characters to append after `bytes`
    pub filler: usize,
}

/// Fits `raw` into a field of `width` characters.
///
/// # Arguments
/// * `raw` - The field's raw encoding
/// * `class` - Content class of the field value
/// * `width` - Field width in characters, `None` if the interval has no defined width
///
/// ```rust
/// use fixedwidth::{writer::fit, ContentClass};
///
/// let chunk = fit("Grüße".as_bytes(), ContentClass::Text, Some(3));
/// assert_eq!(chunk.bytes, "Grü".as_bytes());
/// assert_eq!(chunk.filler, 0);
///
/// let chunk = fit(b"12345", ContentClass::Numeric, Some(3));
/// assert_eq!(chunk.bytes, b"12345");
/// assert_eq!(chunk.filler, 0);
/// ```
pub fn fit(raw: &[u8], class: ContentClass, width: Option<usize>) -> Chunk<'_> {
    let Some(width) = width else {
        return Chunk {
            bytes: raw,
            filler: 0,
        };
    };

    if class == ContentClass::Numeric {
        return Chunk {
            bytes: raw,
            filler: width.saturating_sub(char_count(raw)),
        };
    }

    let mut end = 0;
    let mut kept = 0;
    while kept < width && end < raw.len() {
        end += char_len(&raw[end..]);
        kept += 1;
    }

    Chunk {
        bytes: &raw[..end],
        filler: width - kept,
    }
}

/// Number of characters in `bytes`, counting invalid bytes individually.
pub fn char_count(bytes: &[u8]) -> usize {
    let mut offset = 0;
    let mut count = 0;
    while offset < bytes.len() {
        offset += char_len(&bytes[offset..]);
        count += 1;
    }
    count
}

/// Length in bytes of the character starting at `bytes[0]`.
///
/// Returns 1 for bytes that do not begin a well-formed UTF-8 sequence. `bytes` must not be
/// empty.
fn char_len(bytes: &[u8]) -> usize {
    let expected = match bytes[0] {
        0x00..=0x7F => return 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => MAX_CHAR_LEN,
        _ => return 1,
    };

    match bytes.get(..expected) {
        Some(sequence) if std::str::from_utf8(sequence).is_ok() => expected,
        _ => 1,
    }
}
