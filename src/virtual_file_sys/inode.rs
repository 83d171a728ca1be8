use serde::{Deserialize, Serialize};

use crate::error::{FSError, Result};
use crate::virtual_file_sys::ROOT_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Parses the command-language type tag: `D` for a directory, `U` for a
    /// user file.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "D" | "d" => Some(EntryKind::Directory),
            "U" | "u" => Some(EntryKind::File),
            _ => None,
        }
    }
}

/// A node of the namespace. Directories own their children outright; there
/// are no links back to the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Directory(DirInode),
    File(FileInode),
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        match kind {
            EntryKind::Directory => Entry::Directory(DirInode::new(name)),
            EntryKind::File => Entry::File(FileInode::new(name)),
        }
    }

    pub fn root() -> Self {
        Entry::Directory(DirInode::new(ROOT_NAME))
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Directory(dir) => &dir.name,
            Entry::File(file) => &file.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Directory(_) => EntryKind::Directory,
            Entry::File(_) => EntryKind::File,
        }
    }

    pub fn child(&self, name: &str) -> Option<&Entry> {
        match self {
            Entry::Directory(dir) => dir.find(name),
            Entry::File(_) => None,
        }
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Entry> {
        match self {
            Entry::Directory(dir) => dir.find_mut(name),
            Entry::File(_) => None,
        }
    }

    pub fn to_view(&self) -> TreeView {
        match self {
            Entry::Directory(dir) => TreeView {
                name: dir.name.clone(),
                kind: EntryKind::Directory,
                size: 0,
                children: dir.children.iter().map(Entry::to_view).collect(),
            },
            Entry::File(file) => TreeView {
                name: file.name.clone(),
                kind: EntryKind::File,
                size: file.size,
                children: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirInode {
    name: String,
    children: Vec<Entry>,
}

impl DirInode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order.
    pub fn get_entries(&self) -> &[Entry] {
        &self.children
    }

    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.children.iter().find(|e| e.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.children.iter_mut().find(|e| e.name() == name)
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<&Entry> {
        if self.find(entry.name()).is_some() {
            return Err(FSError::FileExistsError(entry.name().to_owned()));
        }
        self.children.push(entry);
        Ok(&self.children[self.children.len() - 1])
    }

    pub fn remove_entry(&mut self, name: &str) -> Option<Entry> {
        let index = self.children.iter().position(|e| e.name() == name)?;
        Some(self.children.remove(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInode {
    name: String,
    content: Vec<u8>,
    size: usize,
}

impl FileInode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Vec::new(),
            size: 0,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_content(&self) -> &[u8] {
        &self.content
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Replaces the whole content.
    pub fn set_content(&mut self, data: &[u8]) {
        self.content = data.to_vec();
        self.size = self.content.len();
    }
}

/// Read-only projection of the namespace for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeView {
    pub name: String,
    pub kind: EntryKind,
    pub size: usize,
    pub children: Vec<TreeView>,
}
