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

use thiserror::Error;

/// Boxed error type accepted from custom encoders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant is fatal to the encode call that produced it. Nothing is retried and no
/// partial line is handed back; lines that were already written to the sink by the same
/// call stay there.
///
/// # Error Categories
///
/// ## Dispatch Errors
/// - [`Error::UnsupportedType`] - A field value has no fixed-width representation
/// - [`Error::Custom`] - A custom [`crate::Encode`] implementation reported a failure
///
/// ## Sink Errors
/// - [`Error::Write`] - The output sink rejected a write
/// - [`Error::Flush`] - The output sink rejected the final flush
///
/// Malformed or missing position annotations are not errors: the affected field is
/// silently excluded from the line.
///
/// # Examples
///
/// ```rust
/// use fixedwidth::{marshal, Error};
///
/// let callback: fn() -> i32 = || 1;
/// match marshal(&callback) {
///     Err(Error::UnsupportedType { type_name }) => assert_eq!(type_name, "fn() -> i32"),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// No encoding strategy exists for a value's type.
    ///
    /// Raised for booleans, unit, callables and for sequences or maps that appear as a
    /// field value instead of at the top level. The name is the one reported by
    /// [`std::any::type_name`].
    #[error("fixedwidth: cannot marshal unknown type {type_name}")]
    UnsupportedType {
        /// Name of the offending type
        type_name: &'static str,
    },

    /// A custom encoding reported a failure.
    ///
    /// The inner error is the one handed to [`Error::custom`] and is propagated without
    /// modification.
    #[error("{0}")]
    Custom(#[source] BoxError),

    /// Writing an encoded line to the output sink failed.
    #[error("failed to write to sink: {0}")]
    Write(#[source] std::io::Error),

    /// Flushing the output sink failed.
    #[error("failed to flush sink: {0}")]
    Flush(#[source] std::io::Error),
}

impl Error {
    /// Wraps the failure of a custom encoding.
    ///
    /// ```rust
    /// use fixedwidth::Error;
    ///
    /// let err = Error::custom("amount out of range");
    /// assert_eq!(err.to_string(), "amount out of range");
    /// ```
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Custom(err.into())
    }

    /// Builds an [`Error::UnsupportedType`] for `T`.
    pub fn unsupported<T: ?Sized>() -> Self {
        Error::UnsupportedType {
            type_name: std::any::type_name::<T>(),
        }
    }
}
