//! Reference index that can be rebuilt and queried from different threads.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::index::{IndexTables, Location};
use crate::project::Project;

/// A [`ReferenceIndex`](super::ReferenceIndex) for concurrent callers.
///
/// Rebuilds are serialized by one exclusive lock and scan into fresh tables
/// off to the side; the finished tables are then swapped in. Readers take an
/// `Arc` snapshot and never see a build in progress.
#[derive(Debug, Default)]
pub struct SharedReferenceIndex {
    rebuild: Mutex<()>,
    tables: RwLock<Option<Arc<IndexTables>>>,
}

impl SharedReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from `project` and publish the result.
    pub fn build_index(&self, project: &Project) -> Arc<IndexTables> {
        let _guard = self.rebuild.lock();
        self.rebuild_locked(project)
    }

    fn rebuild_locked(&self, project: &Project) -> Arc<IndexTables> {
        let tables = Arc::new(IndexTables::scan(project.source_files()));
        *self.tables.write() = Some(Arc::clone(&tables));
        tracing::debug!(
            project = %project.name,
            files = tables.file_count(),
            "shared reference index swapped"
        );
        tables
    }

    /// The most recently published tables, if any build has finished.
    pub fn snapshot(&self) -> Option<Arc<IndexTables>> {
        self.tables.read().clone()
    }

    fn ensure_built(&self, project: &Project) -> Arc<IndexTables> {
        if let Some(tables) = self.snapshot() {
            return tables;
        }

        let _guard = self.rebuild.lock();

        // Another caller may have finished a build while we waited.
        if let Some(tables) = self.snapshot() {
            return tables;
        }
        self.rebuild_locked(project)
    }

    pub fn find_references(&self, project: &Project, symbol: &str) -> Vec<String> {
        self.ensure_built(project)
            .references(symbol)
            .iter()
            .map(Location::to_string)
            .collect()
    }

    pub fn goto_definition(&self, project: &Project, symbol: &str) -> Option<Location> {
        self.ensure_built(project).definition(symbol)
    }
}
