use crate::{
    Api, ApiExtension, AsyncFiltersClient, Error, FiltersBackend, FiltersClient, RequestModel,
    Result,
};
use axum::{Json, Router, extract::Path, routing::get};
use stac_axum_core::{FILTER_URIS, Filter, GetFilter, Queryables};
use std::sync::Arc;

/// The [filter extension](https://github.com/stac-api-extensions/filter).
///
/// Adds the queryables discovery endpoints, which list the attributes
/// available to filter expressions:
///
/// - `GET /queryables`
/// - `GET /collections/{collection_id}/queryables`
///
/// Both delegate to the injected [FiltersBackend]. Whether the backend's
/// client is synchronous or asynchronous is decided once, when the extension
/// is registered; a backend with neither capability fails registration with
/// [Error::UnimplementedCapability] before any route is added.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stac_axum_server::{Api, FilterExtension, MemoryFiltersClient};
///
/// let mut api = Api::new();
/// let extension = FilterExtension::new(Arc::new(MemoryFiltersClient::new()));
/// api.extend(&extension).unwrap();
/// ```
pub struct FilterExtension {
    client: Arc<dyn FiltersBackend>,
    conformance_classes: Vec<String>,
}

/// The route adapter chosen at registration time.
#[derive(Clone)]
enum QueryablesEndpoint {
    Synchronous(Arc<dyn FiltersClient>),
    Asynchronous(Arc<dyn AsyncFiltersClient>),
}

impl QueryablesEndpoint {
    async fn queryables(&self, collection_id: Option<&str>) -> Result<Queryables> {
        match self {
            QueryablesEndpoint::Synchronous(client) => client.queryables(collection_id),
            QueryablesEndpoint::Asynchronous(client) => client.queryables(collection_id).await,
        }
    }
}

impl FilterExtension {
    /// Creates a new filter extension over a queryables backend.
    pub fn new(client: Arc<dyn FiltersBackend>) -> FilterExtension {
        FilterExtension {
            client,
            conformance_classes: FILTER_URIS.iter().map(|uri| uri.to_string()).collect(),
        }
    }

    fn endpoint(&self) -> Result<QueryablesEndpoint> {
        if let Some(client) = self.client.clone().asynchronous() {
            Ok(QueryablesEndpoint::Asynchronous(client))
        } else if let Some(client) = self.client.clone().synchronous() {
            Ok(QueryablesEndpoint::Synchronous(client))
        } else {
            Err(Error::UnimplementedCapability("filters client"))
        }
    }
}

impl ApiExtension for FilterExtension {
    fn conformance_classes(&self) -> &[String] {
        &self.conformance_classes
    }

    fn get_request_model(&self) -> Option<RequestModel> {
        Some(RequestModel::of::<GetFilter>())
    }

    fn post_request_model(&self) -> Option<RequestModel> {
        Some(RequestModel::of::<Filter>())
    }

    fn register(&self, api: &mut Api) -> Result<()> {
        let endpoint = self.endpoint()?;
        tracing::debug!("registering queryables routes");
        let queryables = {
            let endpoint = endpoint.clone();
            move || {
                let endpoint = endpoint.clone();
                async move { endpoint.queryables(None).await.map(Json) }
            }
        };
        let collection_queryables = move |Path(collection_id): Path<String>| {
            let endpoint = endpoint.clone();
            async move { endpoint.queryables(Some(&collection_id)).await.map(Json) }
        };
        api.add_routes(
            Router::new()
                .route("/queryables", get(queryables))
                .route(
                    "/collections/{collection_id}/queryables",
                    get(collection_queryables),
                ),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FilterExtension;
    use crate::{Api, ApiExtension, Error, FiltersBackend, MemoryFiltersClient};
    use http::Method;
    use stac_axum_core::{FILTER_URIS, Filter, GetFilter};
    use std::sync::Arc;

    struct NoCapabilities;

    impl FiltersBackend for NoCapabilities {}

    #[test]
    fn conformance_classes() {
        let extension = FilterExtension::new(Arc::new(MemoryFiltersClient::new()));
        assert_eq!(extension.conformance_classes(), FILTER_URIS.map(String::from));
    }

    #[test]
    fn request_models() {
        let extension = FilterExtension::new(Arc::new(MemoryFiltersClient::new()));
        assert!(
            extension
                .request_model(&Method::GET)
                .unwrap()
                .is::<GetFilter>()
        );
        assert!(
            extension
                .request_model(&Method::POST)
                .unwrap()
                .is::<Filter>()
        );
    }

    #[test]
    fn no_capability_fails_registration() {
        let mut api = Api::new();
        let extension = FilterExtension::new(Arc::new(NoCapabilities));
        let result = api.extend(&extension);
        assert!(matches!(result, Err(Error::UnimplementedCapability(_))));
        assert!(
            !api.conformance()
                .conforms_to
                .iter()
                .any(|uri| uri == FILTER_URIS[0])
        );
    }
}
