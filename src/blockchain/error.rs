use thiserror::Error;

/// First reason a candidate chain failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("chain is empty")]
    Empty,

    #[error("chain does not start with the genesis block")]
    GenesisMismatch,

    #[error("block {index} does not link to its predecessor")]
    BrokenLink { index: usize },

    #[error("block {index} hash does not match its contents")]
    HashMismatch { index: usize },

    #[error("block {index} jumps difficulty from {previous} to {current}")]
    DifficultyJump {
        index: usize,
        previous: u32,
        current: u32,
    },
}

/// Why an incoming chain was not adopted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("incoming chain is not longer ({incoming} <= {current})")]
    NotLonger { incoming: usize, current: usize },

    #[error("incoming chain is invalid: {0}")]
    Invalid(#[from] ChainError),
}
