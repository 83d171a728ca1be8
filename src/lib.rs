//! An in-memory file system: a tree of directories and files persisted as a
//! snapshot into a fixed array of blocks, driven by a small command language.
//!
//! ```
//! use blockvfs::{dispatch, FileSys, FsConfig};
//!
//! let mut fs = FileSys::mount(FsConfig::default()).unwrap();
//! assert!(dispatch(&mut fs, "CREATE U root/hello.txt").is_ok());
//! assert!(dispatch(&mut fs, "WRITE root/hello.txt \"hi there\"").is_ok());
//! assert_eq!(dispatch(&mut fs, "READ root/hello.txt").message, "hi there");
//! ```

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod shell;
pub mod virtual_file_sys;

pub use command::{parse_from_string, Command};
pub use config::FsConfig;
pub use dispatcher::{dispatch, Outcome, Status};
pub use error::{ErrorKind, FSError, Result};
pub use virtual_file_sys::{Entry, EntryKind, FileHandle, FileSys, SeekBase, TreeView};
