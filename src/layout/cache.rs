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

//! Memoization of resolved record layouts.
//!
//! Resolving a layout parses every field annotation of a record type, which is wasted work
//! when the same type is encoded line after line. The [`LayoutCache`] keeps one immutable
//! [`Layout`] per [`TypeId`] for as long as the cache lives.
//!
//! # Thread Safety
//!
//! The cache is backed by a [`DashMap`]. Lookups of resolved layouts only take a shard read
//! lock. A first resolution goes through the map's entry API, so concurrent callers racing
//! on the same type all observe the single stored layout and no duplicate entry becomes
//! visible.
//!
//! The encoder uses the process-wide instance returned by [`LayoutCache::global`]. Entries
//! are never evicted; the set of record types in a program is bounded.

use std::{
    any::{type_name, TypeId},
    sync::{Arc, OnceLock},
};

use dashmap::DashMap;

use crate::{layout::Layout, Record};

/// Thread-safe cache of [`Layout`]s keyed by record type.
///
/// ```rust
/// use fixedwidth::{fixed_record, layout::LayoutCache};
///
/// fixed_record! {
///     struct Person {
///         #[fixed = "1,5"]
///         name: String,
///     }
/// }
///
/// let cache = LayoutCache::new();
/// let first = cache.resolve::<Person>();
/// let second = cache.resolve::<Person>();
///
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LayoutCache {
    layouts: DashMap<TypeId, Arc<Layout>>,
}

impl LayoutCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        LayoutCache {
            layouts: DashMap::new(),
        }
    }

    /// The process-wide cache shared by all encoders.
    pub fn global() -> &'static LayoutCache {
        static GLOBAL: OnceLock<LayoutCache> = OnceLock::new();
        GLOBAL.get_or_init(LayoutCache::new)
    }

    /// Returns the layout of `R`, resolving and storing it on first use.
    pub fn resolve<R: Record>(&self) -> Arc<Layout> {
        let key = TypeId::of::<R>();
        if let Some(layout) = self.layouts.get(&key) {
            return layout.value().clone();
        }

        self.layouts
            .entry(key)
            .or_insert_with(|| {
                let layout = Layout::from_fields(R::FIELDS);
                log::debug!(
                    "resolved layout for {}: {} of {} fields encoded, {} columns",
                    type_name::<R>(),
                    layout.encoded_fields(),
                    layout.fields().len(),
                    layout.total_length()
                );
                Arc::new(layout)
            })
            .value()
            .clone()
    }

    /// Returns `true` if the layout of `R` has already been resolved.
    pub fn contains<R: Record>(&self) -> bool {
        self.layouts.contains_key(&TypeId::of::<R>())
    }

    /// Number of resolved layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Returns `true` if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::fixed_record;

    fixed_record! {
        #[allow(dead_code)]
        struct Account {
            #[fixed = "1,4"]
            id: u32,
            #[fixed = "5,24"]
            holder: String,
            flags: String,
        }
    }

    fixed_record! {
        #[allow(dead_code)]
        struct Empty {}
    }

    #[test]
    fn resolve_once() {
        let cache = LayoutCache::new();
        assert!(cache.is_empty());
        assert!(!cache.contains::<Account>());

        let first = cache.resolve::<Account>();
        assert!(cache.contains::<Account>());
        assert_eq!(first.total_length(), 24);
        assert_eq!(first.fields().len(), 3);

        let second = cache.resolve::<Account>();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn separate_types_separate_entries() {
        let cache = LayoutCache::new();
        cache.resolve::<Account>();
        let empty = cache.resolve::<Empty>();
        assert_eq!(empty.total_length(), 0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn concurrent_first_resolution() {
        let cache = Arc::new(LayoutCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.resolve::<Account>())
            })
            .collect();

        let layouts: Vec<Arc<Layout>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.len(), 1);
        for layout in &layouts {
            assert!(Arc::ptr_eq(layout, &layouts[0]));
        }
    }

    #[test]
    fn repeated_resolution_is_identical() {
        let a = LayoutCache::new().resolve::<Account>();
        let b = LayoutCache::new().resolve::<Account>();
        assert_eq!(*a, *b);
    }

    #[test]
    fn global_is_shared() {
        let a = LayoutCache::global() as *const LayoutCache;
        let b = LayoutCache::global() as *const LayoutCache;
        assert_eq!(a, b);
    }
}
