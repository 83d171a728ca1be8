use tracing::debug;

use crate::config::FsConfig;
use crate::error::{FSError, Result};

/// Fixed array of fixed-capacity blocks held in memory.
///
/// A block holds whatever bytes were last written to it, up to `block_size`.
/// Unwritten blocks read back empty.
#[derive(Debug, Clone)]
pub struct Disk {
    block_size: usize,
    blocks: Vec<Vec<u8>>,
}

impl Disk {
    pub fn mount(config: &FsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            block_size: config.block_size,
            blocks: vec![Vec::new(); config.num_blocks],
        })
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn read_block(&self, block_num: usize) -> Result<&[u8]> {
        match self.blocks.get(block_num) {
            Some(block) => Ok(block),
            None => Err(FSError::BlockError(format!("Invalid block number {block_num}"))),
        }
    }

    pub fn write_block(&mut self, block_num: usize, data: &[u8]) -> Result<()> {
        if data.len() > self.block_size {
            return Err(FSError::BlockError(format!(
                "{} bytes do not fit in a {}-byte block",
                data.len(),
                self.block_size
            )));
        }
        let block = self
            .blocks
            .get_mut(block_num)
            .ok_or_else(|| FSError::BlockError(format!("Invalid block number {block_num}")))?;
        block.clear();
        block.extend_from_slice(data);
        debug!(block_num, bytes = data.len(), "block written");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn small_disk() -> Result<Disk> {
        Disk::mount(&FsConfig { num_blocks: 4, block_size: 8, snapshot_block: 0 })
    }

    #[test]
    fn read_back_written_block() -> Result<()> {
        let mut disk = small_disk()?;
        assert!(disk.read_block(2)?.is_empty());
        disk.write_block(2, b"abc")?;
        assert_eq!(disk.read_block(2)?, b"abc");
        disk.write_block(2, b"z")?;
        assert_eq!(disk.read_block(2)?, b"z");
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_and_oversized() -> Result<()> {
        let mut disk = small_disk()?;
        assert!(matches!(disk.read_block(4), Err(FSError::BlockError(_))));
        assert!(matches!(disk.write_block(9, b"a"), Err(FSError::BlockError(_))));
        assert!(matches!(disk.write_block(1, b"123456789"), Err(FSError::BlockError(_))));
        assert!(disk.read_block(1)?.is_empty());
        Ok(())
    }
}
