//! # sequin
//!
//! Deferred query operators over in-memory sequences — snapshot-backed,
//! chainable, embeddable anywhere.
//!
//! sequin wraps a finite source collection into a [`Sequence`]: an
//! insertion-ordered snapshot of key-value pairs with chainable query
//! operators on top. It owns the snapshot and iteration contract, the
//! source-admission seam ([`Source`]), the error type, and the operators.
//! It does **not** own predicate DSLs, persistence, or output formatting —
//! those belong to the caller.
//!
//! No operator runs until it is invoked; intermediate operators complete
//! before returning, and terminal operators perform a single read-only
//! forward pass. Enumeration always restarts from the first entry, over a
//! snapshot captured in full at construction time.
//!
//! # Quick Start
//!
//! ```rust
//! let mut invoices = sequin::from(vec![120, 45, 310, 78]).unwrap();
//!
//! // Intermediate: mutates the snapshot in place, returns the same handle.
//! invoices.where_(|amount, _| *amount > 100);
//!
//! // Terminal: scans and returns a value, or fails.
//! assert_eq!(invoices.first().unwrap(), 120);
//!
//! // Terminal, non-failing: falls back to the default.
//! assert_eq!(invoices.first_or_default_where(0, |amount, _| *amount > 500), 0);
//!
//! // Re-enumerable: every iteration starts from the first entry. Keys are
//! // the original positions — filtering does not re-key survivors.
//! let kept: Vec<_> = invoices.iter().map(|(k, v)| (*k, *v)).collect();
//! assert_eq!(kept, vec![(0, 120), (2, 310)]);
//! ```
//!
//! # Keyed sequences
//!
//! Sources with their own keys keep them; lookups go through
//! [`Sequence::element_at`]:
//!
//! ```rust
//! use sequin::Sequence;
//!
//! let stock = Sequence::from_pairs([("bolts", 40), ("nuts", 25)]).unwrap();
//!
//! assert_eq!(stock.element_at(&"nuts").unwrap(), 25);
//! assert_eq!(stock.element_at_or_default(&"washers", 0), 0);
//! ```
//!
//! # Custom Sources
//!
//! Implement [`Source`] to wrap anything drainable into a snapshot:
//!
//! ```rust
//! use sequin::{IndexMap, SequinError, Source};
//!
//! struct Csv(&'static str);
//!
//! impl Source for Csv {
//!     type Key = usize;
//!     type Value = String;
//!
//!     fn drain(self) -> Result<IndexMap<usize, String>, SequinError> {
//!         Ok(self.0.split(',').map(str::to_string).enumerate().collect())
//!     }
//! }
//!
//! let fields = sequin::from(Csv("north,42,kg")).unwrap();
//! assert_eq!(fields.first().unwrap(), "north");
//! ```

#![forbid(unsafe_code)]

mod enumerable;
mod error;
mod predicate;
mod sequence;
mod source;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use error::SequinError;
pub use sequence::{Iter, Sequence};
pub use source::Source;

// The snapshot type named by `Source::drain`.
pub use indexmap::IndexMap;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Wrap a source collection into a new [`Sequence`].
///
/// The source is drained into an insertion-ordered snapshot here, once.
/// Later changes to whatever backed the source are not observed by the
/// returned sequence.
///
/// Positional sources (`Vec<V>`, arrays, slices) are keyed by index; keyed
/// sources ([`IndexMap`], another [`Sequence`], custom [`Source`] impls)
/// keep their own keys. For draining an arbitrary `(key, value)` iterator,
/// see [`Sequence::from_pairs`]; for a plain value iterator,
/// [`Sequence::from_values`].
///
/// # Errors
///
/// Fails with [`SequinError::InvalidSource`] when the source cannot be
/// admitted as a snapshot (for example, a keyed source yielding duplicate
/// keys).
///
/// # Example
///
/// ```rust
/// let readings = sequin::from([1.5f64, 2.25, 9.75]).unwrap();
///
/// assert_eq!(readings.len(), 3);
/// assert_eq!(readings.first_where(|r, _| *r > 2.0).unwrap(), 2.25);
/// ```
pub fn from<S: Source>(source: S) -> Result<Sequence<S::Key, S::Value>, SequinError> {
    Ok(Sequence::from_snapshot(source.drain()?))
}
