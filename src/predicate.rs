//! Predicate normalization.
//!
//! Operators accept predicates as plain `(value, key) -> bool` closures.
//! Search operators that treat the predicate as optional resolve it through
//! [`bind`], which substitutes a default (usually [`always`]) when no input
//! was given. Every scan then tests entries against one canonical callable,
//! regardless of how the predicate was supplied.
//!
//! Inputs that cannot be expressed as a two-argument function are a compile
//! error here rather than a runtime one; predicate sources layered on top of
//! this crate (expression parsers and the like) report their own failures as
//! [`SequinError::InvalidPredicate`](crate::SequinError::InvalidPredicate).

/// A predicate input resolved against its default.
pub(crate) enum Bound<F, D> {
    /// The caller supplied a predicate.
    Supplied(F),
    /// No input was given; the operator's default applies.
    Fallback(D),
}

impl<F, D> Bound<F, D> {
    /// Test one entry against whichever predicate is bound.
    pub(crate) fn test<K, V>(&self, value: &V, key: &K) -> bool
    where
        F: Fn(&V, &K) -> bool,
        D: Fn(&V, &K) -> bool,
    {
        match self {
            Bound::Supplied(predicate) => predicate(value, key),
            Bound::Fallback(default) => default(value, key),
        }
    }
}

/// Resolve an optional predicate input, substituting `default` when absent.
pub(crate) fn bind<F, D>(input: Option<F>, default: D) -> Bound<F, D> {
    match input {
        Some(predicate) => Bound::Supplied(predicate),
        None => Bound::Fallback(default),
    }
}

/// The constant-true predicate — the default for search operators.
pub(crate) fn always<K, V>(_value: &V, _key: &K) -> bool {
    true
}
