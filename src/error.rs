use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequinError {
    // Construction
    #[error("invalid source: {0}")]
    InvalidSource(String),

    // Predicate normalization
    #[error("invalid predicate: {0}")]
    InvalidPredicate(String),

    // Terminal scans
    #[error("Sequence contains no matching elements.")]
    NoMatches,

    #[error("Sequence contains more than one matching element.")]
    ManyMatches,

    #[error("Sequence does not contain the key.")]
    KeyNotFound,
}

impl SequinError {
    /// Whether this error depends on the data in the sequence rather than on
    /// how the caller shaped their input.
    ///
    /// `NoMatches`, `ManyMatches`, and `KeyNotFound` arise from a terminal
    /// scan over a particular snapshot. Everything else is a contract
    /// violation detectable before any enumeration begins.
    pub fn is_data_dependent(&self) -> bool {
        matches!(
            self,
            Self::NoMatches | Self::ManyMatches | Self::KeyNotFound
        )
    }
}
