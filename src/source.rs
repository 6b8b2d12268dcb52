use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::SequinError;
use crate::sequence::Sequence;

/// A collection admissible as the backing data of a [`Sequence`].
///
/// Implement this to wrap anything that can be drained into an
/// insertion-ordered snapshot — vectors, slices, maps, database rows,
/// another sequence. Draining happens exactly once, at construction time:
/// the snapshot never retains a live reference to the original source, so
/// mutating the source afterwards has no effect on the sequence.
///
/// # Keys
///
/// Positional sources (vectors, arrays, slices) key their values by index,
/// `0..n`. Keyed sources supply their own keys; keys must be unique within
/// one snapshot.
///
/// # Example
///
/// ```rust
/// use sequin::{IndexMap, SequinError, Source};
///
/// struct Inventory(Vec<(String, u32)>);
///
/// impl Source for Inventory {
///     type Key = String;
///     type Value = u32;
///
///     fn drain(self) -> Result<IndexMap<String, u32>, SequinError> {
///         Ok(self.0.into_iter().collect())
///     }
/// }
///
/// let seq = sequin::from(Inventory(vec![
///     ("bolts".into(), 40),
///     ("nuts".into(), 25),
/// ])).unwrap();
///
/// assert_eq!(seq.element_at(&"nuts".to_string()).unwrap(), 25);
/// ```
pub trait Source {
    /// Key type of the snapshot. Keys are unique within one sequence.
    type Key: Hash + Eq;

    /// Value type of the snapshot.
    type Value;

    /// Drain the source into an insertion-ordered snapshot.
    ///
    /// Fail with [`SequinError::InvalidSource`] when the source cannot be
    /// admitted — for example, when a keyed source yields a duplicate key.
    fn drain(self) -> Result<IndexMap<Self::Key, Self::Value>, SequinError>;
}

impl<V> Source for Vec<V> {
    type Key = usize;
    type Value = V;

    fn drain(self) -> Result<IndexMap<usize, V>, SequinError> {
        Ok(self.into_iter().enumerate().collect())
    }
}

impl<V, const N: usize> Source for [V; N] {
    type Key = usize;
    type Value = V;

    fn drain(self) -> Result<IndexMap<usize, V>, SequinError> {
        Ok(self.into_iter().enumerate().collect())
    }
}

impl<'a, V: Clone> Source for &'a [V] {
    type Key = usize;
    type Value = V;

    fn drain(self) -> Result<IndexMap<usize, V>, SequinError> {
        Ok(self.iter().cloned().enumerate().collect())
    }
}

impl<K: Hash + Eq, V> Source for IndexMap<K, V> {
    type Key = K;
    type Value = V;

    fn drain(self) -> Result<IndexMap<K, V>, SequinError> {
        Ok(self)
    }
}

/// Re-wrapping a sequence takes over its snapshot as-is.
impl<K: Hash + Eq, V> Source for Sequence<K, V> {
    type Key = K;
    type Value = V;

    fn drain(self) -> Result<IndexMap<K, V>, SequinError> {
        Ok(self.into_entries())
    }
}
