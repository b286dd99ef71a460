//! Handles for source files seen by the reference index.

use std::fmt;

/// A handle for one source file discovered during an index build.
///
/// Index tables store `FileId`s instead of full paths so that a file
/// referenced on hundreds of lines is stored once. The path lives in the
/// [`FileSet`](crate::hir::FileSet) of the build that assigned the id;
/// ids from different builds are not comparable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(pub u32);

impl FileId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of the file in traversal order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}
