use std::sync::LazyLock;
use std::time::Instant;

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{GENESIS_HASH, GENESIS_LAST_HASH, GENESIS_TIMESTAMP, INITIAL_DIFFICULTY, MINE_RATE};
use crate::crypto_hash::crypto_hash;

static GENESIS: LazyLock<Block> = LazyLock::new(|| Block {
    timestamp: GENESIS_TIMESTAMP,
    last_hash: GENESIS_LAST_HASH.to_string(),
    hash: GENESIS_HASH.to_string(),
    data: Value::Array(Vec::new()),
    nonce: 0,
    difficulty: INITIAL_DIFFICULTY,
});

/// A single block in the chain carrying an opaque JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub timestamp: i64, // milliseconds since epoch (UTC)
    pub last_hash: String,
    pub hash: String,
    pub data: Value,
    pub nonce: u64, // Proof-of-Work nonce
    pub difficulty: u32,
}

impl Block {
    /// The fixed first block of every chain.
    pub fn genesis() -> Self {
        GENESIS.clone()
    }

    /// Content hash over every field except `hash` itself.
    pub fn hash_fields(
        timestamp: i64,
        last_hash: &str,
        data: &Value,
        nonce: u64,
        difficulty: u32,
    ) -> String {
        crypto_hash([
            &Value::from(timestamp),
            &Value::from(last_hash),
            data,
            &Value::from(nonce),
            &Value::from(difficulty),
        ])
    }

    /// Recompute the hash from this block's contents.
    pub fn compute_hash(&self) -> String {
        Self::hash_fields(
            self.timestamp,
            &self.last_hash,
            &self.data,
            self.nonce,
            self.difficulty,
        )
    }

    /// Whether `hash` starts with `difficulty` hex zeros.
    pub fn meets_difficulty(&self) -> bool {
        has_leading_zeros(&self.hash, self.difficulty)
    }

    /// Mine a block on top of `last_block` using the wall clock.
    pub fn mine_block(last_block: &Block, data: Value) -> Self {
        Self::mine_block_at(last_block, data, || Utc::now().timestamp_millis())
    }

    /// Perform Proof-of-Work on top of `last_block`.
    ///
    /// Every attempt reads `clock` and retargets the difficulty against that
    /// timestamp, so the target may move while the search is running.
    pub fn mine_block_at<F>(last_block: &Block, data: Value, mut clock: F) -> Self
    where
        F: FnMut() -> i64,
    {
        let started = Instant::now();
        let last_hash = last_block.hash.clone();
        let mut nonce: u64 = 0;

        loop {
            nonce = nonce.wrapping_add(1);
            let timestamp = clock();
            let difficulty = Self::adjust_difficulty(last_block, timestamp);
            let hash = Self::hash_fields(timestamp, &last_hash, &data, nonce, difficulty);

            if has_leading_zeros(&hash, difficulty) {
                debug!(
                    "mined block (nonce={}, difficulty={}, hash={}) in {:?}",
                    nonce,
                    difficulty,
                    hash,
                    started.elapsed()
                );
                return Self {
                    timestamp,
                    last_hash,
                    hash,
                    data,
                    nonce,
                    difficulty,
                };
            }
        }
    }

    /// Single-step retarget against the previous block's timestamp.
    pub fn adjust_difficulty(last_block: &Block, timestamp: i64) -> u32 {
        let difficulty = last_block.difficulty;
        if difficulty < 1 {
            return 1;
        }
        if timestamp.saturating_sub(last_block.timestamp) > MINE_RATE {
            difficulty - 1
        } else {
            difficulty + 1
        }
    }
}

fn has_leading_zeros(hash: &str, difficulty: u32) -> bool {
    let wanted = difficulty as usize;
    hash.len() >= wanted && hash.bytes().take(wanted).all(|b| b == b'0')
}
