//! Catalog source boundary.
//!
//! Hosts resolve `CatalogRef`s to catalogs: the default card file, or the
//! photos of an external album. An empty catalog means the album exists but
//! has no cards; an unknown reference is an error.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::cards::CardCatalog;
use crate::error::{Error, Result};
use crate::session::{AlbumRef, CatalogRef};

/// Resolves catalog references.
pub trait CatalogSource {
    /// Load the catalog for a reference.
    fn load_catalog(&self, reference: &CatalogRef) -> Result<Arc<CardCatalog>>;
}

/// In-memory catalog source.
///
/// ## Example
///
/// ```
/// use riddle_cards::cards::{Card, CardCatalog};
/// use riddle_cards::service::{CatalogSource, MemoryCatalogSource};
/// use riddle_cards::session::{AlbumRef, CatalogRef};
///
/// let default = CardCatalog::from_cards(vec![Card::new("1", "кот")]).unwrap();
/// let source = MemoryCatalogSource::new(default)
///     .with_album(AlbumRef::new(-1, 2), CardCatalog::new());
///
/// assert_eq!(source.load_catalog(&CatalogRef::Default).unwrap().len(), 1);
/// assert!(source.load_catalog(&CatalogRef::Album(AlbumRef::new(-1, 2))).unwrap().is_empty());
/// assert!(source.load_catalog(&CatalogRef::Album(AlbumRef::new(-1, 3))).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalogSource {
    default: Arc<CardCatalog>,
    albums: FxHashMap<AlbumRef, Arc<CardCatalog>>,
}

impl MemoryCatalogSource {
    /// Create a source serving `default` for `CatalogRef::Default`.
    #[must_use]
    pub fn new(default: CardCatalog) -> Self {
        Self {
            default: Arc::new(default),
            albums: FxHashMap::default(),
        }
    }

    /// Register an album (builder pattern).
    #[must_use]
    pub fn with_album(mut self, album: AlbumRef, catalog: CardCatalog) -> Self {
        self.insert_album(album, catalog);
        self
    }

    /// Register or replace an album.
    pub fn insert_album(&mut self, album: AlbumRef, catalog: CardCatalog) {
        self.albums.insert(album, Arc::new(catalog));
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn load_catalog(&self, reference: &CatalogRef) -> Result<Arc<CardCatalog>> {
        match reference {
            CatalogRef::Default => Ok(Arc::clone(&self.default)),
            CatalogRef::Album(album) => self
                .albums
                .get(album)
                .cloned()
                .ok_or(Error::UnknownCatalog(*reference)),
        }
    }
}
