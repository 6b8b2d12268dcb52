//! The ordered snapshot behind every [`Sequence`](crate::Sequence), plus the
//! re-enumerable iteration contract.
//!
//! An `Enumerable` holds a fully materialized, insertion-ordered mapping of
//! unique keys to values. It is only ever built from an already-drained
//! snapshot — draining live sources happens in the `source` module — so once
//! constructed, nothing outside this sequence can change what it enumerates.

use std::hash::Hash;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Enumerable
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct Enumerable<K, V> {
    entries: IndexMap<K, V>,
}

impl<K, V> Enumerable<K, V> {
    pub(crate) fn new(entries: IndexMap<K, V>) -> Self {
        Self { entries }
    }

    /// Begin a fresh pass from the first entry.
    ///
    /// Every call restarts from the start, no matter how many passes came
    /// before or how far they got. The stored data is not touched.
    pub(crate) fn begin(&self) -> Pass<'_, K, V> {
        Pass {
            entries: &self.entries,
            position: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> IndexMap<K, V> {
        self.entries
    }
}

impl<K: Hash + Eq, V> Enumerable<K, V> {
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Remove one entry in place, preserving the order of the rest.
    ///
    /// Passes begun after this call will not see the entry. Operators never
    /// remove entries while one of their own passes is live — removal always
    /// follows a completed evaluation pass.
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.shift_remove(key)
    }
}

// ---------------------------------------------------------------------------
// Pass — pull-based cursor over one enumeration
// ---------------------------------------------------------------------------

/// One enumeration pass over an [`Enumerable`]'s snapshot.
///
/// A pass owns its own position; dropping it and calling
/// [`Enumerable::begin`] again restarts from the first entry. The pull
/// primitives (`has_more` / `current` / `advance`) are the underlying
/// contract; `Iterator` is implemented on top of them.
pub(crate) struct Pass<'a, K, V> {
    entries: &'a IndexMap<K, V>,
    position: usize,
}

impl<'a, K, V> Pass<'a, K, V> {
    pub(crate) fn has_more(&self) -> bool {
        self.position < self.entries.len()
    }

    /// The entry under the cursor. `None` once the pass has moved past the
    /// last entry — callers check [`has_more`](Self::has_more) first.
    pub(crate) fn current(&self) -> Option<(&'a K, &'a V)> {
        self.entries.get_index(self.position)
    }

    pub(crate) fn advance(&mut self) {
        self.position += 1;
    }
}

impl<'a, K, V> Iterator for Pass<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }
        let item = self.current();
        self.advance();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}
