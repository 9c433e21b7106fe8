use serde::{Deserialize, Serialize};

/// The conformance class of the STAC API core.
pub const CORE_URI: &str = "https://api.stacspec.org/v1.0.0-beta.2/core";

/// The conformance classes advertised by the filter extension.
pub const FILTER_URIS: [&str; 3] = [
    "https://api.stacspec.org/v1.0.0-beta.2/item-search#filter",
    "https://api.stacspec.org/v1.0.0-beta.2/item-search#filter:simple-cql",
    "https://api.stacspec.org/v1.0.0-beta.2/item-search#filter:item-search-filter",
];

/// The conformance document of an API.
///
/// Lists the conformance class uris of every capability the server declares
/// it supports. The set is assembled once at startup from the host and its
/// registered extensions.
///
/// # Examples
///
/// ```
/// use stac_axum_core::{CORE_URI, Conformance};
///
/// let conformance = Conformance::default();
/// assert_eq!(conformance.conforms_to, [CORE_URI]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conformance {
    /// The conformance class uris.
    #[serde(rename = "conformsTo")]
    pub conforms_to: Vec<String>,
}

impl Conformance {
    /// Appends conformance classes to this document.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::{Conformance, FILTER_URIS};
    ///
    /// let mut conformance = Conformance::default();
    /// conformance.extend(FILTER_URIS.iter().map(|uri| uri.to_string()));
    /// assert_eq!(conformance.conforms_to.len(), 4);
    /// ```
    pub fn extend(&mut self, classes: impl IntoIterator<Item = String>) {
        self.conforms_to.extend(classes);
    }
}

impl Default for Conformance {
    fn default() -> Conformance {
        Conformance {
            conforms_to: vec![CORE_URI.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Conformance, FILTER_URIS};
    use serde_json::json;

    #[test]
    fn serialize() {
        let conformance = Conformance {
            conforms_to: vec![FILTER_URIS[0].to_string()],
        };
        assert_eq!(
            serde_json::to_value(conformance).unwrap(),
            json!({
                "conformsTo": ["https://api.stacspec.org/v1.0.0-beta.2/item-search#filter"],
            })
        );
    }
}
