use thiserror::Error;

/// Expected, recoverable failures surfaced by tree operations. Lookup
/// misses are not errors; they are the `None` arm of the return type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("empty keys cannot be stored")]
    EmptyKey,
}
