use std::hash::Hash;

use indexmap::IndexMap;

use crate::enumerable::{Enumerable, Pass};
use crate::error::SequinError;
use crate::predicate::{self, Bound};

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// A chainable query handle over a snapshot of key-value data.
///
/// A `Sequence` owns exactly one snapshot, captured in full when the
/// sequence is constructed. Intermediate operators ([`where_`](Self::where_))
/// mutate that snapshot in place and return the same handle; terminal
/// operators ([`first`](Self::first), [`single`](Self::single),
/// [`element_at`](Self::element_at) and their defaulted variants) perform a
/// read-only forward scan and return a value or fail.
///
/// Enumeration is re-enumerable: every call to [`iter`](Self::iter) starts a
/// fresh pass from the first entry, and two passes without an intervening
/// mutating call yield identical `(key, value)` pairs.
///
/// # Example
///
/// ```rust
/// let mut numbers = sequin::from(vec![1, 2, 3, 4]).unwrap();
///
/// numbers.where_(|v, _| v % 2 == 0);
///
/// assert_eq!(numbers.first().unwrap(), 2);
/// assert_eq!(numbers.len(), 2);
/// ```
#[derive(Debug)]
pub struct Sequence<K, V> {
    enumerable: Enumerable<K, V>,
}

impl<K, V> Sequence<K, V> {
    pub(crate) fn from_snapshot(entries: IndexMap<K, V>) -> Self {
        Self {
            enumerable: Enumerable::new(entries),
        }
    }

    pub(crate) fn into_entries(self) -> IndexMap<K, V> {
        self.enumerable.into_entries()
    }

    /// Begin a fresh enumeration of the snapshot, in insertion order.
    ///
    /// Each call restarts from the first entry regardless of how far any
    /// previous iteration got.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            pass: self.enumerable.begin(),
        }
    }

    /// Number of entries currently in the snapshot.
    pub fn len(&self) -> usize {
        self.enumerable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enumerable.is_empty()
    }
}

impl<V> Sequence<usize, V> {
    /// Build a sequence from plain values, keyed by position.
    ///
    /// The iterator is fully drained here — snapshot semantics. Mutating
    /// whatever backed the iterator afterwards does not change what this
    /// sequence enumerates.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::from_snapshot(values.into_iter().enumerate().collect())
    }
}

impl<K: Hash + Eq, V> Sequence<K, V> {
    /// Build a sequence by draining a keyed iterator into a snapshot.
    ///
    /// # Errors
    ///
    /// Fails with [`SequinError::InvalidSource`] if the iterator yields a
    /// key it already yielded — keys are unique within one snapshot.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SequinError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = IndexMap::new();
        for (position, (key, value)) in pairs.into_iter().enumerate() {
            if entries.insert(key, value).is_some() {
                return Err(SequinError::InvalidSource(format!(
                    "duplicate key at position {position}"
                )));
            }
        }
        Ok(Self::from_snapshot(entries))
    }

    // ── Intermediate operators ────────────────────────────────────────────

    /// Filter the sequence in place, keeping entries the predicate accepts.
    ///
    /// The predicate is evaluated exactly once per entry present when
    /// `where_` is called, in snapshot order; non-matching entries are then
    /// removed from the snapshot. Surviving entries keep their keys and
    /// their relative order. This mutates the existing snapshot and returns
    /// the same handle — chained calls run in the order written, each
    /// completing before the next begins.
    ///
    /// The predicate is mandatory. To keep everything, don't call `where_`.
    pub fn where_<P>(&mut self, predicate: P) -> &mut Self
    where
        K: Clone,
        P: Fn(&V, &K) -> bool,
    {
        // Full evaluation pass over the snapshot first, removal after, so
        // every entry present at call time is observed exactly once.
        let doomed: Vec<K> = self
            .enumerable
            .begin()
            .filter(|&(key, value)| !predicate(value, key))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &doomed {
            self.enumerable.remove(key);
        }

        self
    }

    // ── Terminal operators ────────────────────────────────────────────────

    /// First value in the sequence.
    ///
    /// # Errors
    ///
    /// Fails with [`SequinError::NoMatches`] when the sequence is empty.
    pub fn first(&self) -> Result<V, SequinError>
    where
        V: Clone,
    {
        let bound = predicate::bind(None::<fn(&V, &K) -> bool>, predicate::always);
        self.find_first(bound)
            .cloned()
            .ok_or(SequinError::NoMatches)
    }

    /// First value satisfying `predicate`, scanning in snapshot order and
    /// stopping at the first match.
    ///
    /// # Errors
    ///
    /// Fails with [`SequinError::NoMatches`] when no entry satisfies the
    /// predicate — including the empty-sequence case.
    pub fn first_where<P>(&self, predicate: P) -> Result<V, SequinError>
    where
        V: Clone,
        P: Fn(&V, &K) -> bool,
    {
        let bound = predicate::bind(Some(predicate), predicate::always);
        self.find_first(bound)
            .cloned()
            .ok_or(SequinError::NoMatches)
    }

    /// First value in the sequence, or `default` when the sequence is
    /// empty. Never fails.
    pub fn first_or_default(&self, default: V) -> V
    where
        V: Clone,
    {
        let bound = predicate::bind(None::<fn(&V, &K) -> bool>, predicate::always);
        self.find_first(bound).cloned().unwrap_or(default)
    }

    /// First value satisfying `predicate`, or `default` when nothing
    /// matches. Never fails.
    pub fn first_or_default_where<P>(&self, default: V, predicate: P) -> V
    where
        V: Clone,
        P: Fn(&V, &K) -> bool,
    {
        let bound = predicate::bind(Some(predicate), predicate::always);
        self.find_first(bound).cloned().unwrap_or(default)
    }

    /// The only value in the sequence.
    ///
    /// # Errors
    ///
    /// Fails with [`SequinError::NoMatches`] on an empty sequence and
    /// [`SequinError::ManyMatches`] when there is more than one entry.
    pub fn single(&self) -> Result<V, SequinError>
    where
        V: Clone,
    {
        let bound = predicate::bind(None::<fn(&V, &K) -> bool>, predicate::always);
        self.find_single(bound)?
            .cloned()
            .ok_or(SequinError::NoMatches)
    }

    /// The only value satisfying `predicate`.
    ///
    /// The scan stops as soon as a second match is seen.
    ///
    /// # Errors
    ///
    /// [`SequinError::NoMatches`] when nothing matches,
    /// [`SequinError::ManyMatches`] when more than one entry does.
    pub fn single_where<P>(&self, predicate: P) -> Result<V, SequinError>
    where
        V: Clone,
        P: Fn(&V, &K) -> bool,
    {
        let bound = predicate::bind(Some(predicate), predicate::always);
        self.find_single(bound)?
            .cloned()
            .ok_or(SequinError::NoMatches)
    }

    /// The only value in the sequence, or `default` when it is empty.
    ///
    /// # Errors
    ///
    /// Still fails with [`SequinError::ManyMatches`] when there is more
    /// than one entry — only the empty case is defaulted.
    pub fn single_or_default(&self, default: V) -> Result<V, SequinError>
    where
        V: Clone,
    {
        let bound = predicate::bind(None::<fn(&V, &K) -> bool>, predicate::always);
        Ok(self.find_single(bound)?.cloned().unwrap_or(default))
    }

    /// The only value satisfying `predicate`, or `default` when nothing
    /// matches.
    ///
    /// # Errors
    ///
    /// [`SequinError::ManyMatches`] when more than one entry matches.
    pub fn single_or_default_where<P>(&self, default: V, predicate: P) -> Result<V, SequinError>
    where
        V: Clone,
        P: Fn(&V, &K) -> bool,
    {
        let bound = predicate::bind(Some(predicate), predicate::always);
        Ok(self.find_single(bound)?.cloned().unwrap_or(default))
    }

    /// The value stored under `key`.
    ///
    /// # Errors
    ///
    /// Fails with [`SequinError::KeyNotFound`] when the snapshot has no
    /// such key.
    pub fn element_at(&self, key: &K) -> Result<V, SequinError>
    where
        V: Clone,
    {
        self.enumerable
            .get(key)
            .cloned()
            .ok_or(SequinError::KeyNotFound)
    }

    /// The value stored under `key`, or `default` when absent. Never fails.
    pub fn element_at_or_default(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.enumerable.get(key).cloned().unwrap_or(default)
    }

    // ── Scan internals ────────────────────────────────────────────────────

    /// Single forward pass, short-circuiting on the first match.
    fn find_first<F, D>(&self, predicate: Bound<F, D>) -> Option<&V>
    where
        F: Fn(&V, &K) -> bool,
        D: Fn(&V, &K) -> bool,
    {
        self.enumerable
            .begin()
            .find(|&(key, value)| predicate.test(value, key))
            .map(|(_, value)| value)
    }

    /// Single forward pass that fails as soon as a second match is seen.
    fn find_single<F, D>(&self, predicate: Bound<F, D>) -> Result<Option<&V>, SequinError>
    where
        F: Fn(&V, &K) -> bool,
        D: Fn(&V, &K) -> bool,
    {
        let mut found = None;
        for (key, value) in self.enumerable.begin() {
            if predicate.test(value, key) {
                if found.is_some() {
                    return Err(SequinError::ManyMatches);
                }
                found = Some(value);
            }
        }
        Ok(found)
    }
}

impl<'a, K, V> IntoIterator for &'a Sequence<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Iter
// ---------------------------------------------------------------------------

/// One enumeration pass over a [`Sequence`], yielding `(key, value)` pairs
/// in snapshot order. Obtain a fresh one from [`Sequence::iter`].
pub struct Iter<'a, K, V> {
    pass: Pass<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.pass.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pass.size_hint()
    }
}
