use thiserror::Error;

/// Error produced when a search cannot run to a normal conclusion.
/// Not finding a path is not an error, see `SearchResult::success`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String), // Selector string did not name an algorithm

    #[error("Negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(u64),
}

/// Result when a search might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
