//! File set management for one index build.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::base::FileId;

/// The files scanned by one index build, in traversal order.
///
/// A file's [`FileId`] is its position in the set, so ids double as the
/// traversal order the reference table is sorted by.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: IndexSet<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or assign the id for a path.
    pub fn insert(&mut self, path: PathBuf) -> FileId {
        let (index, _) = self.paths.insert_full(path);
        FileId::new(index as u32)
    }

    /// Look up the id of a path that was already inserted.
    pub fn file_id(&self, path: &Path) -> Option<FileId> {
        self.paths.get_index_of(path).map(|i| FileId::new(i as u32))
    }

    pub fn path(&self, file: FileId) -> Option<&Path> {
        self.paths.get_index(file.index()).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over all files in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &Path)> + '_ {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (FileId::new(i as u32), p.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_set_id_assignment() {
        let mut files = FileSet::new();

        let id1 = files.insert(PathBuf::from("/p/a.ad"));
        let id2 = files.insert(PathBuf::from("/p/b.ad"));
        let id3 = files.insert(PathBuf::from("/p/a.ad"));

        assert_ne!(id1, id2);
        assert_eq!(id1, id3);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_file_set_path_lookup() {
        let mut files = FileSet::new();
        let id = files.insert(PathBuf::from("/p/main.ad"));

        assert_eq!(files.path(id), Some(Path::new("/p/main.ad")));
        assert_eq!(files.file_id(Path::new("/p/main.ad")), Some(id));
        assert_eq!(files.file_id(Path::new("/p/other.ad")), None);
        assert_eq!(files.path(FileId::new(7)), None);
    }

    #[test]
    fn test_file_set_iterates_in_insertion_order() {
        let mut files = FileSet::new();
        files.insert(PathBuf::from("z.ad"));
        files.insert(PathBuf::from("a.ad"));

        let order: Vec<_> = files.iter().map(|(_, p)| p.to_path_buf()).collect();
        assert_eq!(order, vec![PathBuf::from("z.ad"), PathBuf::from("a.ad")]);
    }
}
