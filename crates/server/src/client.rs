use crate::Result;
use futures_core::future::BoxFuture;
use stac_axum_core::Queryables;
use std::sync::Arc;

/// A client that can look up queryables synchronously.
///
/// The default implementation returns the core STAC queryables for any
/// collection.
pub trait FiltersClient: Send + Sync {
    /// Returns the queryables document, optionally scoped to a collection.
    fn queryables(&self, collection_id: Option<&str>) -> Result<Queryables> {
        let _ = collection_id;
        Ok(Queryables::default())
    }
}

/// A client that can look up queryables asynchronously.
///
/// Returns boxed futures so the trait stays usable as a trait object; the
/// filter extension stores the chosen client behind `Arc<dyn _>`.
///
/// # Examples
///
/// ```
/// use futures_core::future::BoxFuture;
/// use stac_axum_core::Queryables;
/// use stac_axum_server::{AsyncFiltersClient, Result};
///
/// struct Client;
///
/// impl AsyncFiltersClient for Client {
///     fn queryables<'a>(
///         &'a self,
///         _: Option<&'a str>,
///     ) -> BoxFuture<'a, Result<Queryables>> {
///         Box::pin(async { Ok(Queryables::default()) })
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let queryables = Client.queryables(None).await.unwrap();
/// assert!(queryables.properties.contains_key("id"));
/// # });
/// ```
pub trait AsyncFiltersClient: Send + Sync {
    /// Returns the queryables document, optionally scoped to a collection.
    fn queryables<'a>(
        &'a self,
        collection_id: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Queryables>>;
}

/// A queryables backend, as injected into
/// [FilterExtension](crate::FilterExtension).
///
/// Polymorphism is capability based: a concrete backend overrides
/// [synchronous](FiltersBackend::synchronous),
/// [asynchronous](FiltersBackend::asynchronous), or both, and the extension
/// picks its route adapter accordingly — once, at registration. A backend
/// that overrides neither fails registration with
/// [Error::UnimplementedCapability](crate::Error::UnimplementedCapability).
pub trait FiltersBackend: Send + Sync + 'static {
    /// Returns the synchronous client, if this backend has one.
    fn synchronous(self: Arc<Self>) -> Option<Arc<dyn FiltersClient>> {
        None
    }

    /// Returns the asynchronous client, if this backend has one.
    fn asynchronous(self: Arc<Self>) -> Option<Arc<dyn AsyncFiltersClient>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::FiltersClient;

    struct Defaulted;

    impl FiltersClient for Defaulted {}

    #[test]
    fn default_queryables_ignore_collection() {
        let global = Defaulted.queryables(None).unwrap();
        let scoped = Defaulted.queryables(Some("c")).unwrap();
        assert_eq!(global, scoped);
        assert!(global.properties.contains_key("datetime"));
    }
}
