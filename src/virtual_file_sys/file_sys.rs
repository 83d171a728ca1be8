use tracing::{debug, info};

use crate::config::FsConfig;
use crate::error::{FSError, Result};
use super::block::*;
use super::disk::Disk;
use super::handle::{FileHandle, HandleTable, SeekBase};
use super::inode::*;
use super::path;

/// The whole file system: namespace, backing disk and open files.
///
/// Every successful namespace mutation is staged on a copy of the tree,
/// written to the snapshot block, and only then made current. A failed
/// operation leaves tree, disk and handles as they were.
pub struct FileSys {
    config: FsConfig,
    disk: Disk,
    root: Entry,
    handles: HandleTable,
}

impl FileSys {
    pub fn mount(config: FsConfig) -> Result<Self> {
        let disk = Disk::mount(&config)?;
        let mut file_sys = Self {
            config,
            disk,
            root: Entry::root(),
            handles: HandleTable::new(),
        };
        file_sys.commit(|_| Ok(()))?;
        info!(
            blocks = file_sys.disk.num_blocks(),
            block_size = file_sys.disk.block_size(),
            "file system mounted"
        );
        Ok(file_sys)
    }

    pub fn root(&self) -> &Entry {
        &self.root
    }

    pub fn disk(&self) -> &Disk {
        &self.disk
    }

    pub fn handles(&self) -> &HandleTable {
        &self.handles
    }

    pub fn tree_view(&self) -> TreeView {
        self.root.to_view()
    }

    pub fn resolve(&self, path: &str) -> Option<&Entry> {
        let found = path::resolve(&self.root, path);
        debug!(path, found = found.is_some(), "resolve");
        found
    }

    /// Creates the last component of `path` inside its parent directory.
    /// The parent must already exist.
    pub fn create(&mut self, path: &str, kind: EntryKind) -> Result<&Entry> {
        match path::split_parent(path) {
            Some((parent, name)) => self.create_at(&parent, name, kind),
            None => Err(FSError::FileExistsError(path::join(&[]))),
        }
    }

    pub fn create_in(&mut self, parent_path: &str, name: &str, kind: EntryKind) -> Result<&Entry> {
        if name.is_empty() || name.contains('/') {
            return Err(FSError::CmdArgError(format!("Invalid entry name {name:?}")));
        }
        let parent = path::components(parent_path);
        self.create_at(&parent, name, kind)
    }

    fn create_at(&mut self, parent: &[&str], name: &str, kind: EntryKind) -> Result<&Entry> {
        self.commit(|root| match path::resolve_components_mut(root, parent) {
            Some(Entry::Directory(dir)) => {
                dir.add_entry(Entry::new(name, kind))?;
                Ok(())
            }
            _ => Err(FSError::ParentNotFoundError(path::join(parent))),
        })?;
        let mut full = parent.to_vec();
        full.push(name);
        info!(path = %path::join(&full), ?kind, "created");
        self.entry_at(&full)
    }

    /// Removes an entry, and with a directory its whole subtree. Handles open
    /// on anything removed are dropped.
    pub fn remove(&mut self, path: &str) -> Result<()> {
        let parts = path::components(path);
        if path::resolve_components(&self.root, &parts).is_none() {
            return Err(FSError::FileNotFoundError(path.to_owned()));
        }
        let (name, parent) = match parts.split_last() {
            Some(split) => split,
            None => return Err(FSError::RemoveRootError),
        };
        self.commit(|root| match path::resolve_components_mut(root, parent) {
            Some(Entry::Directory(dir)) => dir
                .remove_entry(name)
                .map(drop)
                .ok_or_else(|| FSError::FileNotFoundError(path.to_owned())),
            _ => Err(FSError::FileNotFoundError(path.to_owned())),
        })?;
        let dropped = self.handles.invalidate_within(&parts);
        info!(path = %path::join(&parts), handles_dropped = dropped.len(), "removed");
        Ok(())
    }

    /// Replaces the content of a file.
    pub fn write(&mut self, path: &str, data: &[u8]) -> Result<()> {
        let parts = path::components(path);
        self.file_at(&parts, path)?;
        self.commit(|root| match path::resolve_components_mut(root, &parts) {
            Some(Entry::File(file)) => {
                file.set_content(data);
                Ok(())
            }
            Some(Entry::Directory(_)) => Err(FSError::NotAFileError(path.to_owned())),
            None => Err(FSError::FileNotFoundError(path.to_owned())),
        })?;
        self.handles.clamp_cursors(&parts, data.len());
        info!(path = %path::join(&parts), bytes = data.len(), "written");
        Ok(())
    }

    /// Whole-file read, independent of any open handle.
    pub fn read(&self, path: &str) -> Result<&[u8]> {
        let parts = path::components(path);
        Ok(self.file_at(&parts, path)?.get_content())
    }

    /// Child names of a directory, directories suffixed with `/`.
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        match self.resolve(path) {
            Some(Entry::Directory(dir)) => Ok(dir
                .get_entries()
                .iter()
                .map(|e| match e {
                    Entry::Directory(d) => format!("{}/", d.get_name()),
                    Entry::File(f) => f.get_name().to_owned(),
                })
                .collect()),
            Some(Entry::File(_)) => Err(FSError::NotDirError(path.to_owned())),
            None => Err(FSError::FileNotFoundError(path.to_owned())),
        }
    }

    pub fn open(&mut self, path: &str, mode: &str) -> Result<&FileHandle> {
        let parts = path::components(path);
        self.file_at(&parts, path)?;
        let handle = self.handles.open(path, &parts, mode)?;
        info!(path, mode, "opened");
        Ok(handle)
    }

    /// Drops the handle for `path`; returns whether one was open.
    pub fn close(&mut self, path: &str) -> bool {
        let closed = self.handles.close(path);
        if closed {
            info!(path, "closed");
        }
        closed
    }

    pub fn seek(&mut self, path: &str, base: SeekBase, offset: i64) -> Result<usize> {
        let handle = self
            .handles
            .get(path)
            .ok_or_else(|| FSError::NotOpenError(path.to_owned()))?;
        let len = match path::resolve_components(&self.root, handle.get_target()) {
            Some(Entry::File(file)) => file.get_size(),
            _ => return Err(FSError::NotOpenError(path.to_owned())),
        };
        let cursor = self.handles.seek(path, base, offset, len)?;
        debug!(path, ?base, offset, cursor, "seek");
        Ok(cursor)
    }

    /// Decodes the namespace currently stored in the snapshot block.
    pub fn load_snapshot(&self) -> Result<Entry> {
        let data = self.disk.read_block(self.config.snapshot_block)?;
        Ok(SnapshotBlock::from_bytes(data)?.into_root())
    }

    fn commit<T>(&mut self, op: impl FnOnce(&mut Entry) -> Result<T>) -> Result<T> {
        let mut staged = self.root.clone();
        let out = op(&mut staged)?;
        let block = SnapshotBlock::new(staged);
        let bytes = block.to_bytes()?;
        self.disk.write_block(self.config.snapshot_block, &bytes)?;
        debug!(bytes = bytes.len(), "snapshot persisted");
        self.root = block.into_root();
        Ok(out)
    }

    fn entry_at(&self, parts: &[&str]) -> Result<&Entry> {
        path::resolve_components(&self.root, parts)
            .ok_or_else(|| FSError::FileNotFoundError(path::join(parts)))
    }

    fn file_at(&self, parts: &[&str], path: &str) -> Result<&FileInode> {
        match path::resolve_components(&self.root, parts) {
            Some(Entry::File(file)) => Ok(file),
            Some(Entry::Directory(_)) => Err(FSError::NotAFileError(path.to_owned())),
            None => Err(FSError::FileNotFoundError(path.to_owned())),
        }
    }
}
