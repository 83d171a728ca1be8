use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FSError {
    #[error("Serialize error: {0}")]
    SerializeError(#[from] Box<bincode::ErrorKind>),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    BlockError(String),

    #[error("Snapshot block is corrupt")]
    CorruptSnapshotError,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("500 Not a directory: {0}")]
    NotDirError(String),

    #[error("501 Is a directory: {0}")]
    NotAFileError(String),

    #[error("502 File exists: {0}")]
    FileExistsError(String),

    #[error("503 No such file or directory: {0}")]
    FileNotFoundError(String),

    #[error("504 Parent directory not found: {0}")]
    ParentNotFoundError(String),

    #[error("505 Cannot remove the root directory")]
    RemoveRootError,

    #[error("506 File is already open: {0}")]
    AlreadyOpenError(String),

    #[error("507 File is not open: {0}")]
    NotOpenError(String),

    #[error("508 Seek position {pos} outside 0..={len}")]
    OutOfBoundsError { pos: i64, len: usize },

    #[error("509 {0}")]
    CmdArgError(String),

    #[error("510 Unknown command: {0}")]
    UnknownCmdError(String),
}

/// Error categories reported to callers of the command interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    ParentNotFound,
    AlreadyExists,
    NotAFile,
    NotADirectory,
    CannotRemoveRoot,
    AlreadyOpen,
    NotOpen,
    OutOfBounds,
    ArgumentError,
    UnknownCommand,
    Storage,
}

impl FSError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FSError::SerializeError(_)
            | FSError::JsonError(_)
            | FSError::BlockError(_)
            | FSError::CorruptSnapshotError
            | FSError::ConfigError(_) => ErrorKind::Storage,
            FSError::NotDirError(_) => ErrorKind::NotADirectory,
            FSError::NotAFileError(_) => ErrorKind::NotAFile,
            FSError::FileExistsError(_) => ErrorKind::AlreadyExists,
            FSError::FileNotFoundError(_) => ErrorKind::NotFound,
            FSError::ParentNotFoundError(_) => ErrorKind::ParentNotFound,
            FSError::RemoveRootError => ErrorKind::CannotRemoveRoot,
            FSError::AlreadyOpenError(_) => ErrorKind::AlreadyOpen,
            FSError::NotOpenError(_) => ErrorKind::NotOpen,
            FSError::OutOfBoundsError { .. } => ErrorKind::OutOfBounds,
            FSError::CmdArgError(_) => ErrorKind::ArgumentError,
            FSError::UnknownCmdError(_) => ErrorKind::UnknownCommand,
        }
    }
}

pub type Result<T> = std::result::Result<T, FSError>;
