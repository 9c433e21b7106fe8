use crate::{ApiExtension, Result};
use axum::{Json, Router, routing::get};
use stac_axum_core::Conformance;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// The application an extension registers against.
///
/// Owns the routing table and the conformance document. Extensions append
/// routes through [Api::add_routes] from their `register` implementations;
/// there is no global route registry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stac_axum_core::FILTER_URIS;
/// use stac_axum_server::{Api, FilterExtension, MemoryFiltersClient};
///
/// let mut api = Api::new();
/// api.extend(&FilterExtension::new(Arc::new(MemoryFiltersClient::new())))
///     .unwrap();
/// assert!(
///     api.conformance()
///         .conforms_to
///         .iter()
///         .any(|uri| uri == FILTER_URIS[0])
/// );
/// ```
#[derive(Debug, Default)]
pub struct Api {
    router: Router,
    conformance: Conformance,
}

impl Api {
    /// Creates a new, empty api.
    ///
    /// The conformance document starts with the STAC API core class; each
    /// registered extension adds its own.
    pub fn new() -> Api {
        Api::default()
    }

    /// Registers an extension.
    ///
    /// Calls the extension's `register`, then merges its conformance classes
    /// into this api's conformance document. On error nothing is merged and
    /// no route is kept — registration failures should halt application
    /// boot. Registering the same extension twice is a misconfiguration and
    /// is not guarded against.
    pub fn extend(&mut self, extension: &dyn ApiExtension) -> Result<()> {
        extension.register(self)?;
        self.conformance
            .extend(extension.conformance_classes().iter().cloned());
        Ok(())
    }

    /// Appends routes to this api's routing table.
    ///
    /// Intended for use by extensions from
    /// [register](ApiExtension::register). Route-path conflicts between
    /// extensions are a misconfiguration, not a runtime condition.
    pub fn add_routes(&mut self, router: Router) {
        self.router = std::mem::take(&mut self.router).merge(router);
    }

    /// Returns this api's conformance document.
    pub fn conformance(&self) -> &Conformance {
        &self.conformance
    }

    /// Finalizes this api into an axum router.
    ///
    /// Adds `GET /conformance` serving the assembled conformance document,
    /// plus request tracing and a permissive CORS layer.
    pub fn into_router(self) -> Router {
        let conformance = self.conformance;
        self.router
            .route(
                "/conformance",
                get(move || {
                    let conformance = conformance.clone();
                    async move { Json(conformance) }
                }),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }
}

#[cfg(test)]
mod tests {
    use super::Api;
    use stac_axum_core::CORE_URI;

    #[test]
    fn new_api_conforms_to_core() {
        let api = Api::new();
        assert_eq!(api.conformance().conforms_to, [CORE_URI]);
    }
}
