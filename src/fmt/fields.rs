//! Field names that must never show up in a rendered `fields[...]` block.
//!
//! Configured once at startup and read on every render. Reconfiguration publishes a whole
//! new set, so a render in flight sees either the old set or the new one, never a mix.

use crate::internal;
use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::Arc;

/// Cheap to clone; clones share the same set, so `replace` reaches every renderer holding one.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    excluded: Arc<ArcSwap<HashSet<String>>>,
}

impl Default for FieldFilter {
    fn default() -> Self {
        Self::empty()
    }
}

impl FieldFilter {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: Arc::new(ArcSwap::from_pointee(collect(names))),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.load().contains(name)
    }

    /// Renders take one snapshot and filter every field against it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<HashSet<String>> {
        self.excluded.load_full()
    }

    /// Atomically swaps in a new set.
    pub fn replace<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = collect(names);
        internal::debug(
            "FIELDS",
            &format!("Replacing field exclusion set ({} names)", set.len()),
        );
        self.excluded.store(Arc::new(set));
    }
}

fn collect<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
