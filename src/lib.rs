pub mod blockchain;
pub mod crypto_hash;

#[doc(hidden)]
pub use serde_json;

pub use blockchain::{Block, Blockchain, ChainError, ReplaceError};
