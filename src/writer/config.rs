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

//! Configuration for the stream encoder.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Separator written between consecutive lines.
///
/// No separator follows the last line of an encode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`, common for mainframe and EDI feeds
    CrLf,
}

impl LineTerminator {
    /// The bytes written for this terminator.
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            LineTerminator::Lf => b"\n",
            LineTerminator::CrLf => b"\r\n",
        }
    }
}

/// Configuration for an [`crate::Encoder`].
///
/// ```rust
/// use fixedwidth::{EncoderConfig, LineTerminator};
///
/// let config = EncoderConfig::default().with_line_terminator("crlf".parse()?);
/// assert_eq!(config.line_terminator, LineTerminator::CrLf);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Separator between consecutive lines (default: [`LineTerminator::Lf`]).
    pub line_terminator: LineTerminator,
}

impl EncoderConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator written between consecutive lines.
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }
}
