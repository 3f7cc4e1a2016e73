pub mod block;
pub mod error;
pub mod model;

pub use block::Block;
pub use error::{ChainError, ReplaceError};
pub use model::Blockchain;

/// Difficulty of the genesis block (number of leading hex zeros).
pub const INITIAL_DIFFICULTY: u32 = 3;

/// Target milliseconds between two blocks.
pub const MINE_RATE: i64 = 1000;

/// Fixed genesis fields.
pub const GENESIS_TIMESTAMP: i64 = 1;
pub const GENESIS_LAST_HASH: &str = "----";
pub const GENESIS_HASH: &str = "hash-one";
