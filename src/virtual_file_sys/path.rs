//! Slash-delimited path resolution against the namespace tree.
//!
//! Empty segments are dropped, so `root//a/` and `root/a` are the same path.
//! A leading `root` segment anchors the path at the root directory and is
//! dropped as well; `root/Documents` and `Documents` name the same entry.
//! There is no `.` or `..` handling.

use crate::virtual_file_sys::inode::Entry;
use crate::virtual_file_sys::ROOT_NAME;

pub fn components(path: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if parts.first() == Some(&ROOT_NAME) {
        parts.remove(0);
    }
    parts
}

/// Splits into parent components and final name. `None` for the root itself.
pub fn split_parent(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut parts = components(path);
    let name = parts.pop()?;
    Some((parts, name))
}

/// Canonical spelling of a component list, always anchored at `root`.
pub fn join(parts: &[&str]) -> String {
    let mut path = String::from(ROOT_NAME);
    for part in parts {
        path.push('/');
        path.push_str(part);
    }
    path
}

pub fn resolve<'a>(root: &'a Entry, path: &str) -> Option<&'a Entry> {
    resolve_components(root, &components(path))
}

pub fn resolve_components<'a, S: AsRef<str>>(root: &'a Entry, parts: &[S]) -> Option<&'a Entry> {
    let mut current = root;
    for part in parts {
        current = current.child(part.as_ref())?;
    }
    Some(current)
}

pub fn resolve_components_mut<'a, S: AsRef<str>>(
    root: &'a mut Entry,
    parts: &[S],
) -> Option<&'a mut Entry> {
    let mut current = root;
    for part in parts {
        current = current.child_mut(part.as_ref())?;
    }
    Some(current)
}

/// True when `prefix` names `parts` itself or one of its ancestors.
pub fn is_within(parts: &[String], prefix: &[&str]) -> bool {
    parts.len() >= prefix.len() && parts.iter().zip(prefix).all(|(a, b)| a == b)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Result;
    use crate::virtual_file_sys::inode::EntryKind;

    fn sample_tree() -> Result<Entry> {
        let mut root = Entry::root();
        if let Entry::Directory(dir) = &mut root {
            dir.add_entry(Entry::new("Documents", EntryKind::Directory))?;
            dir.add_entry(Entry::new("notes.txt", EntryKind::File))?;
        }
        if let Some(Entry::Directory(docs)) = root.child_mut("Documents") {
            docs.add_entry(Entry::new("Test.txt", EntryKind::File))?;
        }
        Ok(root)
    }

    #[test]
    fn root_shortcuts() -> Result<()> {
        let root = sample_tree()?;
        for path in ["root", "", "/", "root/", "//"] {
            assert_eq!(resolve(&root, path).map(Entry::name), Some("root"), "{path:?}");
        }
        Ok(())
    }

    #[test]
    fn tolerates_redundant_slashes() -> Result<()> {
        let root = sample_tree()?;
        for path in ["root/Documents/Test.txt", "/root//Documents/Test.txt/", "Documents/Test.txt"] {
            assert_eq!(resolve(&root, path).map(Entry::name), Some("Test.txt"), "{path:?}");
        }
        Ok(())
    }

    #[test]
    fn missing_or_through_file_is_not_found() -> Result<()> {
        let root = sample_tree()?;
        assert!(resolve(&root, "root/documents").is_none());
        assert!(resolve(&root, "root/notes.txt/inner").is_none());
        assert!(resolve(&root, "root/Documents/..").is_none());
        Ok(())
    }

    #[test]
    fn split_and_join() {
        assert_eq!(split_parent("root/a/b"), Some((vec!["a"], "b")));
        assert_eq!(split_parent("root/a"), Some((vec![], "a")));
        assert_eq!(split_parent("root"), None);
        assert_eq!(join(&components("/root//a/b/")), "root/a/b");
        assert_eq!(join(&[]), "root");
    }

    #[test]
    fn within_prefix() {
        let target: Vec<String> = vec!["a".into(), "b".into()];
        assert!(is_within(&target, &["a"]));
        assert!(is_within(&target, &["a", "b"]));
        assert!(!is_within(&target, &["a", "c"]));
        assert!(!is_within(&target, &["a", "b", "c"]));
        assert!(is_within(&target, &[]));
    }
}
