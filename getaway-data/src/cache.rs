//! Process-lifetime cache of loaded datasets.

use std::collections::HashMap;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use getaway_core::PlaceRecord;
use log::debug;

use crate::{DatasetError, load_places};

/// Loaded datasets keyed by the path they were read from.
///
/// A table is read once and shared afterwards. Entries live until the cache
/// is dropped; changes to the file on disk are not observed.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use getaway_data::DatasetCache;
///
/// let mut cache = DatasetCache::new();
/// let path = Utf8Path::new("data/Top Indian Places to Visit.csv");
/// let first = cache.load(path).expect("load dataset");
/// let second = cache.load(path).expect("cached dataset");
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct DatasetCache {
    tables: HashMap<Utf8PathBuf, Arc<[PlaceRecord]>>,
}

impl DatasetCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for `path`, reading it on first use.
    ///
    /// Failed loads are not cached.
    ///
    /// # Errors
    /// Propagates [`DatasetError`] from [`load_places`].
    pub fn load(&mut self, path: &Utf8Path) -> Result<Arc<[PlaceRecord]>, DatasetError> {
        if let Some(table) = self.tables.get(path) {
            debug!("reusing cached dataset {path}");
            return Ok(Arc::clone(table));
        }
        let table: Arc<[PlaceRecord]> = load_places(path)?.into();
        self.tables.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }

    /// Report whether `path` has already been loaded.
    #[must_use]
    pub fn contains(&self, path: &Utf8Path) -> bool {
        self.tables.contains_key(path)
    }

    /// Number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Report whether nothing has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
