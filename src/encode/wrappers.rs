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

//! Encodings of optional, pointer and sequence wrappers.
//!
//! Pointer-like wrappers unwrap to the value they hold. An absent [`Option`] encodes to zero
//! bytes, which the compositor turns into a field of spaces. Sequences only have a meaning at
//! the top level, where each element becomes one line; used as a field value they are
//! rejected.

use std::{rc::Rc, sync::Arc};

use crate::{
    encode::{ContentClass, Encode},
    Error, Result,
};

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Some(value) => value.encode(out),
            None => Ok(()),
        }
    }

    fn content_class(&self) -> ContentClass {
        match self {
            Some(value) => value.content_class(),
            None => ContentClass::Text,
        }
    }

    fn as_lines(&self) -> Option<Vec<&dyn Encode>> {
        self.as_ref().and_then(|value| value.as_lines())
    }
}

// Transparent pointer wrappers, including `dyn Encode` targets
macro_rules! impl_encode_deref {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: Encode + ?Sized> Encode for $wrapper {
                fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
                    (**self).encode(out)
                }

                fn content_class(&self) -> ContentClass {
                    (**self).content_class()
                }

                fn as_lines(&self) -> Option<Vec<&dyn Encode>> {
                    (**self).as_lines()
                }
            }
        )*
    };
}

impl_encode_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Encode> Encode for [T] {
    fn encode(&self, _out: &mut Vec<u8>) -> Result<()> {
        Err(Error::unsupported::<Self>())
    }

    fn as_lines(&self) -> Option<Vec<&dyn Encode>> {
        Some(self.iter().map(|item| item as &dyn Encode).collect())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, _out: &mut Vec<u8>) -> Result<()> {
        Err(Error::unsupported::<Self>())
    }

    fn as_lines(&self) -> Option<Vec<&dyn Encode>> {
        self.as_slice().as_lines()
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, _out: &mut Vec<u8>) -> Result<()> {
        Err(Error::unsupported::<Self>())
    }

    fn as_lines(&self) -> Option<Vec<&dyn Encode>> {
        self.as_slice().as_lines()
    }
}
