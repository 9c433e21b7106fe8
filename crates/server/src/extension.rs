use crate::{Api, Result};
use http::Method;
use std::any::{TypeId, type_name};

/// A reference to the request structure an extension binds to an HTTP verb.
///
/// The typed equivalent of handing out a request-model class: a cheap,
/// equality-comparable value capturing the bound type's identity.
///
/// # Examples
///
/// ```
/// use stac_axum_core::{Filter, GetFilter};
/// use stac_axum_server::RequestModel;
///
/// let model = RequestModel::of::<GetFilter>();
/// assert!(model.is::<GetFilter>());
/// assert!(!model.is::<Filter>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestModel {
    name: &'static str,
    type_id: TypeId,
}

impl RequestModel {
    /// Creates a request model reference for a type.
    pub fn of<T: 'static>() -> RequestModel {
        RequestModel {
            name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the full path of the referenced type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this model references `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// An optional API feature that contributes routes and conformance classes.
///
/// Extensions are constructed once at application startup and live for the
/// process lifetime. Their conformance classes are fixed at construction; the
/// host merges them into its conformance document when the extension is
/// [registered](Api::extend).
pub trait ApiExtension: Send + Sync {
    /// Returns the conformance classes this extension advertises.
    ///
    /// Order is not significant.
    fn conformance_classes(&self) -> &[String];

    /// Returns the request model bound to GET, if any.
    fn get_request_model(&self) -> Option<RequestModel> {
        None
    }

    /// Returns the request model bound to POST, if any.
    fn post_request_model(&self) -> Option<RequestModel> {
        None
    }

    /// Returns the request model bound to the given verb.
    ///
    /// Pure lookup over the GET and POST bindings; every other verb is
    /// unbound.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use http::Method;
    /// use stac_axum_core::GetFilter;
    /// use stac_axum_server::{ApiExtension, FilterExtension, MemoryFiltersClient};
    ///
    /// let extension = FilterExtension::new(Arc::new(MemoryFiltersClient::new()));
    /// let model = extension.request_model(&Method::GET).unwrap();
    /// assert!(model.is::<GetFilter>());
    /// assert!(extension.request_model(&Method::DELETE).is_none());
    /// ```
    fn request_model(&self, method: &Method) -> Option<RequestModel> {
        if *method == Method::GET {
            self.get_request_model()
        } else if *method == Method::POST {
            self.post_request_model()
        } else {
            None
        }
    }

    /// Registers this extension's routes with the host.
    ///
    /// Fails fast: any error here surfaces at application boot, never at
    /// request time, and leaves the host without any of this extension's
    /// routes.
    fn register(&self, api: &mut Api) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::{ApiExtension, RequestModel};
    use crate::{Api, Result};
    use http::Method;

    struct GetOnly;

    impl ApiExtension for GetOnly {
        fn conformance_classes(&self) -> &[String] {
            &[]
        }

        fn get_request_model(&self) -> Option<RequestModel> {
            Some(RequestModel::of::<String>())
        }

        fn register(&self, _: &mut Api) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn request_model_lookup() {
        let extension = GetOnly;
        let model = extension.request_model(&Method::GET).unwrap();
        assert_eq!(model, RequestModel::of::<String>());
        assert!(extension.request_model(&Method::POST).is_none());
        assert!(extension.request_model(&Method::PUT).is_none());
    }

    #[test]
    fn request_model_identity() {
        assert_eq!(RequestModel::of::<String>(), RequestModel::of::<String>());
        assert_ne!(RequestModel::of::<String>(), RequestModel::of::<u64>());
        assert!(RequestModel::of::<String>().name().contains("String"));
    }
}
