use serde::Serialize;
use tracing::warn;

use crate::command::{parse_from_string, Command};
use crate::error::{ErrorKind, Result};
use crate::virtual_file_sys::{EntryKind, FileSys, TreeView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Ok,
    Err,
}

/// Result of one command line, handed back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: Status,
    pub kind: Option<ErrorKind>,
    pub message: String,
    pub snapshot: TreeView,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Parses and runs one command line. Never fails: errors come back as an
/// `Outcome` with `Status::Err`.
pub fn dispatch(fs: &mut FileSys, line: &str) -> Outcome {
    let result = parse_from_string(line).and_then(|cmd| execute(fs, cmd));
    let (status, kind, message) = match result {
        Ok(message) => (Status::Ok, None, message),
        Err(e) => {
            warn!(command = line, error = %e, "command failed");
            (Status::Err, Some(e.kind()), e.to_string())
        }
    };
    Outcome {
        status,
        kind,
        message,
        snapshot: fs.tree_view(),
    }
}

pub fn execute(fs: &mut FileSys, cmd: Command) -> Result<String> {
    let response = match cmd {
        Command::Create { kind, path } => {
            let entry = fs.create(&path, kind)?;
            match kind {
                EntryKind::Directory => format!("Created directory: {}", entry.name()),
                EntryKind::File => format!("Created file: {}", entry.name()),
            }
        }
        Command::Delete { path } => {
            fs.remove(&path)?;
            format!("Deleted: {path}")
        }
        Command::Read { path } => String::from_utf8_lossy(fs.read(&path)?).into_owned(),
        Command::Write { path, data } => {
            fs.write(&path, data.as_bytes())?;
            format!("Written {} bytes to {path}", data.len())
        }
        Command::Open { path, mode } => {
            fs.open(&path, &mode)?;
            format!("Opened {path} ({mode})")
        }
        Command::Seek { path, base, offset } => {
            let cursor = fs.seek(&path, base, offset)?;
            format!("Cursor of {path} at {cursor}")
        }
        Command::Close { path } => match fs.close(&path) {
            true => format!("Closed {path}"),
            false => format!("{path} was not open"),
        },
        Command::List { path } => fs.list(&path)?.join(" "),
        Command::Tree => serde_json::to_string_pretty(&fs.tree_view())?,
    };
    Ok(response)
}
