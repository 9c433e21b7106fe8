use crate::{Error, FiltersBackend, FiltersClient, Result};
use stac_axum_core::Queryables;
use std::{collections::HashMap, sync::Arc};

/// A synchronous, in-memory queryables client.
///
/// Holds per-collection queryables configured at construction time; the
/// service-wide document is the core STAC queryables. Looking up an unknown
/// collection is a [Error::CollectionNotFound].
///
/// Backends are configured before they are shared with an extension, so there
/// is no interior mutability.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stac_axum_core::Queryables;
/// use stac_axum_server::{FiltersClient, MemoryFiltersClient};
///
/// let mut client = MemoryFiltersClient::new();
/// let mut queryables = Queryables::new("Queryables for sentinel-2-l2a");
/// queryables.insert("eo:cloud_cover", json!({"type": "number"}));
/// client.insert("sentinel-2-l2a", queryables);
///
/// assert!(client.queryables(Some("sentinel-2-l2a")).is_ok());
/// assert!(client.queryables(Some("nope")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryFiltersClient {
    queryables: HashMap<String, Queryables>,
}

impl MemoryFiltersClient {
    /// Creates a new, empty client.
    pub fn new() -> MemoryFiltersClient {
        MemoryFiltersClient::default()
    }

    /// Sets the queryables for a collection, returning any previous document.
    pub fn insert(
        &mut self,
        collection_id: impl ToString,
        queryables: Queryables,
    ) -> Option<Queryables> {
        self.queryables
            .insert(collection_id.to_string(), queryables)
    }
}

impl FiltersClient for MemoryFiltersClient {
    fn queryables(&self, collection_id: Option<&str>) -> Result<Queryables> {
        match collection_id {
            None => Ok(Queryables::default()),
            Some(collection_id) => self
                .queryables
                .get(collection_id)
                .cloned()
                .ok_or_else(|| Error::CollectionNotFound(collection_id.to_string())),
        }
    }
}

impl FiltersBackend for MemoryFiltersClient {
    fn synchronous(self: Arc<Self>) -> Option<Arc<dyn FiltersClient>> {
        Some(self)
    }
}
