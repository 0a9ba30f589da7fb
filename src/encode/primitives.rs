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

//! Encodings of the built-in text, integer and floating-point types.

use std::borrow::Cow;

use crate::{
    encode::{ContentClass, Encode},
    Result,
};

/// Digits after the decimal point of encoded floats.
pub const FLOAT_PRECISION: usize = 2;

impl Encode for str {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.as_str().encode(out)
    }
}

impl Encode for Cow<'_, str> {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        (**self).encode(out)
    }
}

impl Encode for char {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        let mut buf = [0u8; 4];
        out.extend_from_slice(self.encode_utf8(&mut buf).as_bytes());
        Ok(())
    }
}

// Base-10, no leading zeros, sign only when negative
macro_rules! impl_encode_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
                    out.extend_from_slice(self.to_string().as_bytes());
                    Ok(())
                }

                fn content_class(&self) -> ContentClass {
                    ContentClass::Numeric
                }
            }
        )*
    };
}

impl_encode_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_encode_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
                    out.extend_from_slice(format!("{:.*}", FLOAT_PRECISION, self).as_bytes());
                    Ok(())
                }

                fn content_class(&self) -> ContentClass {
                    ContentClass::Numeric
                }
            }
        )*
    };
}

impl_encode_float!(f32, f64);
