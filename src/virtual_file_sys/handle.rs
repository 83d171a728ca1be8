use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FSError, Result};
use crate::virtual_file_sys::path;

/// Origin a seek offset is measured from. The command language spells these
/// `-1`, `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeekBase {
    Start,
    Current,
    End,
}

impl SeekBase {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(SeekBase::Start),
            0 => Some(SeekBase::Current),
            1 => Some(SeekBase::End),
            _ => None,
        }
    }
}

/// An open file. The target is held as the canonical component list of the
/// file, not a reference into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    target: Vec<String>,
    mode: String,
    cursor: usize,
}

impl FileHandle {
    pub fn get_target(&self) -> &[String] {
        &self.target
    }

    pub fn get_mode(&self) -> &str {
        &self.mode
    }

    pub fn get_cursor(&self) -> usize {
        self.cursor
    }
}

/// Open files keyed by the exact path string they were opened with.
#[derive(Debug, Default, Clone)]
pub struct HandleTable {
    handles: BTreeMap<String, FileHandle>,
}

impl HandleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FileHandle> {
        self.handles.get(key)
    }

    pub fn open(&mut self, key: &str, target: &[&str], mode: &str) -> Result<&FileHandle> {
        if self.handles.contains_key(key) {
            return Err(FSError::AlreadyOpenError(key.to_owned()));
        }
        let handle = FileHandle {
            target: target.iter().map(|s| s.to_string()).collect(),
            mode: mode.to_owned(),
            cursor: 0,
        };
        Ok(self.handles.entry(key.to_owned()).or_insert(handle))
    }

    /// Returns whether a handle was actually dropped.
    pub fn close(&mut self, key: &str) -> bool {
        self.handles.remove(key).is_some()
    }

    /// Moves the cursor of `key` within a file of `len` bytes.
    pub fn seek(&mut self, key: &str, base: SeekBase, offset: i64, len: usize) -> Result<usize> {
        let handle = self
            .handles
            .get_mut(key)
            .ok_or_else(|| FSError::NotOpenError(key.to_owned()))?;
        let origin = match base {
            SeekBase::Start => 0,
            SeekBase::Current => handle.cursor as i128,
            SeekBase::End => len as i128,
        };
        let candidate = origin + offset as i128;
        if candidate < 0 || candidate > len as i128 {
            let pos = i64::try_from(candidate)
                .unwrap_or(if candidate < 0 { i64::MIN } else { i64::MAX });
            return Err(FSError::OutOfBoundsError { pos, len });
        }
        handle.cursor = candidate as usize;
        Ok(handle.cursor)
    }

    /// Drops every handle whose target is `prefix` or lies beneath it.
    pub fn invalidate_within(&mut self, prefix: &[&str]) -> Vec<String> {
        let dropped: Vec<String> = self
            .handles
            .iter()
            .filter(|(_, h)| path::is_within(&h.target, prefix))
            .map(|(k, _)| k.clone())
            .collect();
        for key in &dropped {
            self.handles.remove(key);
            warn!(path = %key, "open handle invalidated by delete");
        }
        dropped
    }

    /// Keeps cursors of handles on `target` inside a file now `len` bytes long.
    pub fn clamp_cursors(&mut self, target: &[&str], len: usize) {
        for handle in self.handles.values_mut() {
            if handle.target.len() == target.len() && path::is_within(&handle.target, target) {
                handle.cursor = handle.cursor.min(len);
            }
        }
    }
}
