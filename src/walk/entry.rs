//! Directory entry reading and classification

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Classification of a single directory entry.
///
/// Always resolved from a `symlink_metadata` call; readdir-level type hints
/// are unreliable across filesystems and are never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Fifo,
    Socket,
    /// Unknown type, or the metadata lookup failed (e.g. the entry was
    /// removed between enumeration and stat).
    Other,
}

/// One immediate child of a directory.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: OsString,
    pub kind: EntryKind,
    /// Logical size in bytes. Zero when metadata was unavailable.
    pub size: u64,
    /// Allocated 512-byte blocks.
    pub blocks: u64,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

fn classify(file_type: fs::FileType) -> EntryKind {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if file_type.is_fifo() {
            return EntryKind::Fifo;
        }
        if file_type.is_socket() {
            return EntryKind::Socket;
        }
    }
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::Other
    }
}

fn block_count(meta: &fs::Metadata) -> u64 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        meta.blocks()
    }
    #[cfg(not(unix))]
    {
        meta.len().div_ceil(512)
    }
}

/// Read the immediate children of `dir`.
///
/// `read_dir` never yields the `.`/`..` pseudo-entries. Each child's type
/// and size come from a per-entry `symlink_metadata` lookup; symlinks are
/// classified as links, not as their targets. A failed lookup classifies the
/// entry as `Other` rather than aborting the enumeration.
///
/// The collection is materialized because the caller must sort all siblings
/// before visiting any of them.
pub fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dirent in fs::read_dir(dir)?.flatten() {
        let name = dirent.file_name();
        match fs::symlink_metadata(dirent.path()) {
            Ok(meta) => entries.push(Entry {
                name,
                kind: classify(meta.file_type()),
                size: meta.len(),
                blocks: block_count(&meta),
            }),
            Err(_) => entries.push(Entry {
                name,
                kind: EntryKind::Other,
                size: 0,
                blocks: 0,
            }),
        }
    }
    Ok(entries)
}

/// Sort siblings into the output order: directories before non-directories,
/// then byte-wise lexicographic name comparison within each group.
///
/// This ordering is a contract, not a cosmetic choice - output must be
/// byte-identical across runs and platforms for the same input tree.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.is_dir()
            .cmp(&a.is_dir())
            .then_with(|| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry {
            name: name.into(),
            kind,
            size: 0,
            blocks: 0,
        }
    }

    #[test]
    fn test_sort_puts_directories_first() {
        let mut entries = vec![
            entry("zebra.txt", EntryKind::File),
            entry("apple", EntryKind::Directory),
            entry("mango.txt", EntryKind::File),
            entry("banana", EntryKind::Directory),
        ];
        sort_entries(&mut entries);
        let names: Vec<_> = entries
            .iter()
            .map(|e| e.name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["apple", "banana", "mango.txt", "zebra.txt"]);
    }

    #[test]
    fn test_sort_is_bytewise_not_case_insensitive() {
        // 'B' (0x42) sorts before 'a' (0x61)
        let mut entries = vec![
            entry("a.txt", EntryKind::File),
            entry("B.txt", EntryKind::File),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].name, "B.txt");
        assert_eq!(entries[1].name, "a.txt");
    }

    #[test]
    fn test_sort_links_group_with_files() {
        // Only directories move ahead; every other kind stays in name order
        let mut entries = vec![
            entry("b_link", EntryKind::Symlink),
            entry("a.txt", EntryKind::File),
            entry("c", EntryKind::Directory),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].name, "c");
        assert_eq!(entries[1].name, "a.txt");
        assert_eq!(entries[2].name, "b_link");
    }

    #[test]
    fn test_read_entries_classifies_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut entries = read_entries(dir.path()).unwrap();
        sort_entries(&mut entries);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[0].name, "sub");
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(entries[1].size, 5);
    }

    #[test]
    fn test_read_entries_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_entries(&dir.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_entries_classifies_symlinks_without_following() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        std::os::unix::fs::symlink("target", dir.path().join("link")).unwrap();

        let entries = read_entries(dir.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert_eq!(link.kind, EntryKind::Symlink);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_entries_broken_symlink_is_still_a_link() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink("nowhere", dir.path().join("dangling")).unwrap();

        let entries = read_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Symlink);
    }
}
