use serde::{Deserialize, Serialize};

use crate::error::{FSError, Result};
use crate::virtual_file_sys::inode::Entry;
use crate::virtual_file_sys::SNAPSHOT_MAGIC_NUM;

pub trait BlockBinary {
    fn to_bytes(&self) -> Result<Vec<u8>>;

    fn from_bytes(block_data: &[u8]) -> Result<Self> where Self: Sized;
}

/// Snapshot block - the whole namespace, stored in the snapshot slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotBlock {
    magic: u32,
    root: Entry,
}

impl SnapshotBlock {
    pub fn new(root: Entry) -> Self {
        Self {
            magic: SNAPSHOT_MAGIC_NUM,
            root,
        }
    }

    pub fn into_root(self) -> Entry {
        self.root
    }
}

impl BlockBinary for SnapshotBlock {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = bincode::serialize(self)?;
        Ok(bytes)
    }

    fn from_bytes(block_data: &[u8]) -> Result<Self> {
        let block: Self =
            bincode::deserialize(block_data).map_err(|_| FSError::CorruptSnapshotError)?;
        if block.magic != SNAPSHOT_MAGIC_NUM {
            return Err(FSError::CorruptSnapshotError);
        }
        Ok(block)
    }
}
