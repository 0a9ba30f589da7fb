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

//! Parsing of `fixed` position annotations.
//!
//! An annotation has the form `"<start>,<end>"`. Both positions are 1-based and inclusive and
//! are counted in Unicode characters, not bytes. Anything that does not follow that grammar
//! excludes the field from encoding; it is never reported as an error. Positions beyond
//! [`MAX_COLUMN`] are treated the same way.
//!
//! ```rust
//! use fixedwidth::layout::{parse_position, Position};
//!
//! assert_eq!(parse_position("1,5"), Some(Position::new(1, 5)));
//! assert_eq!(parse_position("1,5").and_then(|p| p.width()), Some(5));
//! assert_eq!(parse_position("1, 5"), None);
//! ```

/// Largest column a position annotation may refer to.
pub const MAX_COLUMN: usize = 1 << 20;

/// A 1-based, inclusive character interval taken from a field annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// First character column occupied by the field
    pub start: usize,
    /// Last character column occupied by the field
    pub end: usize,
}

impl Position {
    /// Creates a new interval.
    pub const fn new(start: usize, end: usize) -> Self {
        Position { start, end }
    }

    /// Number of characters the field occupies.
    ///
    /// Returns `None` if `end < start` or the width does not fit a `usize`; such a field has
    /// no defined width and its encoding is emitted as-is, without padding or truncation.
    pub const fn width(&self) -> Option<usize> {
        if self.end < self.start {
            None
        } else {
            (self.end - self.start).checked_add(1)
        }
    }
}

/// Parses a raw `fixed` annotation.
///
/// The annotation must consist of exactly two comma separated base-10 integers with no
/// surrounding whitespace. Empty, malformed or negative input yields `None`, as does a
/// position past [`MAX_COLUMN`].
///
/// # Arguments
/// * `tag` - The annotation text, e.g. `"6,8"`
pub fn parse_position(tag: &str) -> Option<Position> {
    let mut parts = tag.split(',');
    let start = parts.next()?.parse::<usize>().ok()?;
    let end = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() || start > MAX_COLUMN || end > MAX_COLUMN {
        return None;
    }

    Some(Position::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(parse_position("1,5"), Some(Position::new(1, 5)));
        assert_eq!(parse_position("10,10"), Some(Position::new(10, 10)));
        assert_eq!(parse_position("+3,+4"), Some(Position::new(3, 4)));
    }

    #[test]
    fn parse_malformed() {
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("5"), None);
        assert_eq!(parse_position("1,2,3"), None);
        assert_eq!(parse_position("a,b"), None);
        assert_eq!(parse_position("1,"), None);
        assert_eq!(parse_position(",1"), None);
        assert_eq!(parse_position(" 1,5"), None);
        assert_eq!(parse_position("1, 5"), None);
        assert_eq!(parse_position("-1,5"), None);
    }

    #[test]
    fn width() {
        assert_eq!(Position::new(1, 5).width(), Some(5));
        assert_eq!(Position::new(6, 6).width(), Some(1));
        assert_eq!(Position::new(5, 1).width(), None);
    }

    #[test]
    fn width_never_overflows() {
        assert_eq!(Position::new(0, usize::MAX).width(), None);
        assert_eq!(Position::new(1, usize::MAX).width(), Some(usize::MAX));
    }

    #[test]
    fn columns_past_limit_are_malformed() {
        let limit = MAX_COLUMN.to_string();
        assert_eq!(parse_position(&format!("1,{}", limit)), Some(Position::new(1, MAX_COLUMN)));
        assert_eq!(parse_position(&format!("1,{}", MAX_COLUMN + 1)), None);
        assert_eq!(parse_position("1,4611686018427387904"), None);
        assert_eq!(parse_position("0,18446744073709551615"), None);
        assert_eq!(parse_position("18446744073709551615,1"), None);
    }

    #[test]
    fn zero_start_is_accepted() {
        // Positions are not validated beyond the grammar.
        assert_eq!(parse_position("0,0").and_then(|p| p.width()), Some(1));
    }
}
