use log::{error, info};
use serde_json::Value;

use super::{Block, ChainError, ReplaceError};

/// In-memory blockchain with Proof-of-Work and longest-valid-chain replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct Blockchain {
    chain: Vec<Block>,
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    /// Initialize a new blockchain holding only the genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
        }
    }

    /// Read-only view of the blocks, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        // `chain` is never empty: it starts at genesis and is only ever
        // swapped for another validated, non-empty chain.
        &self.chain[self.chain.len() - 1]
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Mine and append a new block with the provided `data`.
    pub fn add_block(&mut self, data: Value) -> &Block {
        let block = Block::mine_block(self.last_block(), data);
        info!(
            "appended block #{} (hash={}, nonce={}, difficulty={})",
            self.chain.len(),
            block.hash,
            block.nonce,
            block.difficulty
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Validate a whole candidate chain: genesis, linkage, hashes and
    /// difficulty steps. Returns the first problem found.
    pub fn validate_chain(chain: &[Block]) -> Result<(), ChainError> {
        let genesis = chain.first().ok_or(ChainError::Empty)?;
        if *genesis != Block::genesis() {
            return Err(ChainError::GenesisMismatch);
        }

        for (index, pair) in chain.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
            let (prev, current) = (&pair[0], &pair[1]);

            if current.last_hash != prev.hash {
                return Err(ChainError::BrokenLink { index });
            }

            if current.hash != current.compute_hash() {
                return Err(ChainError::HashMismatch { index });
            }

            if current.difficulty.abs_diff(prev.difficulty) > 1 {
                return Err(ChainError::DifficultyJump {
                    index,
                    previous: prev.difficulty,
                    current: current.difficulty,
                });
            }
        }

        Ok(())
    }

    /// `true` when [`Blockchain::validate_chain`] finds no problem.
    pub fn is_valid_chain(chain: &[Block]) -> bool {
        Self::validate_chain(chain).is_ok()
    }

    /// Adopt `new_chain` if it is strictly longer and valid. The current
    /// chain is left untouched on rejection.
    pub fn replace_chain(&mut self, new_chain: Vec<Block>) -> Result<(), ReplaceError> {
        if new_chain.len() <= self.chain.len() {
            let err = ReplaceError::NotLonger {
                incoming: new_chain.len(),
                current: self.chain.len(),
            };
            error!("{err}");
            return Err(err);
        }

        if let Err(reason) = Self::validate_chain(&new_chain) {
            let err = ReplaceError::from(reason);
            error!("{err}");
            return Err(err);
        }

        info!(
            "replacing chain of length {} with chain of length {}",
            self.chain.len(),
            new_chain.len()
        );
        self.chain = new_chain;
        Ok(())
    }
}
