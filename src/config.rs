use serde::{Deserialize, Serialize};

use crate::error::{FSError, Result};
use crate::virtual_file_sys::{BLOCK_SIZE, NUM_BLOCKS, SNAPSHOT_BLOCK};

/// Sizing of the simulated disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsConfig {
    pub num_blocks: usize,
    pub block_size: usize,
    pub snapshot_block: usize,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            num_blocks: NUM_BLOCKS,
            block_size: BLOCK_SIZE,
            snapshot_block: SNAPSHOT_BLOCK,
        }
    }
}

impl FsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_blocks == 0 {
            return Err(FSError::ConfigError("disk needs at least one block".to_owned()));
        }
        if self.block_size == 0 {
            return Err(FSError::ConfigError("block size must be non-zero".to_owned()));
        }
        if self.snapshot_block >= self.num_blocks {
            return Err(FSError::ConfigError(format!(
                "snapshot block {} outside disk of {} blocks",
                self.snapshot_block, self.num_blocks
            )));
        }
        Ok(())
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| FSError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
