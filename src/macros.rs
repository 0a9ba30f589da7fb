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

/// Declares a struct as a fixed-width record.
///
/// The macro emits the struct unchanged (minus the `fixed` annotations) and implements
/// [`crate::Record`] and [`crate::Encode`] for it. Annotate a field with
/// `#[fixed = "<start>,<end>"]` to place it in the line; fields without the annotation, or
/// with a malformed one, are kept on the struct but never encoded.
///
/// Doc comments on fields must precede the `fixed` annotation. Other field attributes, such
/// as `#[allow(..)]` or `#[cfg(..)]`, and generic structs are not supported and are rejected
/// with a compile error:
///
/// ```compile_fail
/// fixedwidth::fixed_record! {
///     struct Flagged {
///         #[allow(dead_code)]
///         #[fixed = "1,5"]
///         name: String,
///     }
/// }
/// ```
///
/// ```rust
/// use fixedwidth::{fixed_record, marshal};
///
/// fixed_record! {
///     /// One row of the personnel extract.
///     #[derive(Debug, Clone)]
///     pub struct Person {
///         /// Given name
///         #[fixed = "1,5"]
///         pub name: String,
///         #[fixed = "6,8"]
///         pub age: u32,
///         /// Not part of the extract
///         pub notes: String,
///     }
/// }
///
/// let bob = Person { name: "Bob".into(), age: 42, notes: String::new() };
/// assert_eq!(marshal(&bob)?, b"Bob  42 ");
/// # Ok::<(), fixedwidth::Error>(())
/// ```
#[macro_export]
macro_rules! fixed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[fixed = $tag:literal])?
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            const FIELDS: &'static [$crate::layout::FieldDecl] = &[
                $(
                    $crate::layout::FieldDecl::new(
                        ::core::stringify!($field),
                        $crate::__fixed_tag!($($tag)?),
                    ),
                )*
            ];

            fn field(&self, index: usize) -> ::core::option::Option<&dyn $crate::Encode> {
                let fields: &[&dyn $crate::Encode] = &[$(&self.$field),*];
                fields.get(index).copied()
            }

            fn visit_fields(
                &self,
                visit: &mut dyn ::core::ops::FnMut(&dyn $crate::Encode) -> $crate::Result<()>,
            ) -> $crate::Result<()> {
                $(visit(&self.$field)?;)*
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::Encode for $name {
            fn encode(&self, out: &mut ::std::vec::Vec<u8>) -> $crate::Result<()> {
                $crate::encode_record(self, out)
            }
        }
    };
    ($($unsupported:tt)*) => {
        ::core::compile_error!(
            "fixed_record! expects a non-generic struct whose fields carry only doc comments \
             and an optional #[fixed = \"start,end\"] annotation"
        );
    };
}

/// Expands an optional `fixed` annotation into an `Option<&'static str>`.
#[doc(hidden)]
#[macro_export]
macro_rules! __fixed_tag {
    () => {
        ::core::option::Option::None
    };
    ($tag:literal) => {
        ::core::option::Option::Some($tag)
    };
}
