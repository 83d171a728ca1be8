pub mod block;
pub mod disk;
pub mod file_sys;
pub mod handle;
pub mod inode;
pub mod path;

pub const BLOCK_SIZE: usize = 64 * 1024;
pub const NUM_BLOCKS: usize = 100;
pub const SNAPSHOT_BLOCK: usize = 0;

pub const ROOT_NAME: &str = "root";
pub const SNAPSHOT_MAGIC_NUM: u32 = 0xFFFF_FFFF;

pub use file_sys::FileSys;
pub use handle::{FileHandle, SeekBase};
pub use inode::{Entry, EntryKind, TreeView};
