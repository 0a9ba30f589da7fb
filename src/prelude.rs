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

//! # fixedwidth Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the fixedwidth library. Import this module to declare records and encode them.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all fixedwidth operations
pub use crate::Error;

/// The result type used throughout fixedwidth
pub use crate::Result;

// ================================================================================================
// Records and Encodings
// ================================================================================================

/// Declarative record definition
pub use crate::fixed_record;

/// Record and value encoding traits
pub use crate::{ContentClass, Encode, Record};

/// Field declarations for hand-written records
pub use crate::layout::FieldDecl;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Streaming encoder and its configuration
pub use crate::{Encoder, EncoderConfig, LineTerminator};

/// In-memory encoding
pub use crate::{encode_record, marshal, marshal_with};
