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

//! Types that may sit in a record but have no fixed-width representation.
//!
//! They implement [`Encode`] so that records holding them still compile; encoding one fails
//! at runtime with [`Error::UnsupportedType`] naming the type. A field without a usable
//! position annotation is never encoded, so such values are harmless in excluded fields.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::{encode::Encode, Error, Result};

macro_rules! impl_encode_unsupported {
    ($(impl<$($gen:ident),*> for $ty:ty;)*) => {
        $(
            impl<$($gen),*> Encode for $ty {
                fn encode(&self, _out: &mut Vec<u8>) -> Result<()> {
                    Err(Error::unsupported::<Self>())
                }
            }
        )*
    };
}

impl_encode_unsupported! {
    impl<> for bool;
    impl<> for ();
    impl<R> for fn() -> R;
    impl<A, R> for fn(A) -> R;
    impl<A, B, R> for fn(A, B) -> R;
    impl<A, B, C, R> for fn(A, B, C) -> R;
    impl<A, B, C, D, R> for fn(A, B, C, D) -> R;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T, S> for HashSet<T, S>;
    impl<T> for BTreeSet<T>;
}
