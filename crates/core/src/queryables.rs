use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

const JSON_SCHEMA_URI: &str = "https://json-schema.org/draft/2019-09/schema";
const ITEM_SCHEMA_URI: &str =
    "https://schemas.stacspec.org/v1.0.0/item-spec/json-schema/item.json";

/// The queryables document served by the filter extension's discovery
/// endpoints.
///
/// A JSON Schema description of the attributes clients may use in filter
/// expressions, either for the whole service or for a single collection.
///
/// # Examples
///
/// ```
/// use stac_axum_core::Queryables;
///
/// let queryables = Queryables::default();
/// assert!(queryables.properties.contains_key("datetime"));
/// assert!(queryables.additional_properties);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Queryables {
    /// The JSON Schema dialect of this document.
    #[serde(rename = "$schema")]
    pub schema: String,

    /// The canonical location of this document.
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The schema type, always `"object"`.
    pub r#type: String,

    /// A human readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// A human readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The queryable attributes, keyed by name.
    pub properties: Map<String, Value>,

    /// Whether attributes beyond the enumerated ones may be queried.
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

impl Queryables {
    /// Creates a new, empty queryables document with the given title.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::Queryables;
    ///
    /// let queryables = Queryables::new("Queryables for sentinel-2-l2a");
    /// assert!(queryables.properties.is_empty());
    /// ```
    pub fn new(title: impl ToString) -> Queryables {
        Queryables {
            schema: JSON_SCHEMA_URI.to_string(),
            id: None,
            r#type: "object".to_string(),
            title: Some(title.to_string()),
            description: None,
            properties: Map::new(),
            additional_properties: true,
        }
    }

    /// Adds a queryable attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use stac_axum_core::Queryables;
    ///
    /// let mut queryables = Queryables::new("Queryables");
    /// queryables.insert("eo:cloud_cover", json!({"type": "number"}));
    /// ```
    pub fn insert(&mut self, name: impl ToString, schema: Value) -> Option<Value> {
        self.properties.insert(name.to_string(), schema)
    }
}

impl Default for Queryables {
    /// The core STAC queryables, available on any conforming service.
    fn default() -> Queryables {
        let mut queryables = Queryables::new("Queryables for a STAC API");
        let _ = queryables.insert(
            "id",
            json!({
                "description": "ID",
                "$ref": format!("{ITEM_SCHEMA_URI}#/definitions/core/allOf/2/properties/id"),
            }),
        );
        let _ = queryables.insert(
            "collection",
            json!({
                "description": "Collection",
                "$ref": format!("{ITEM_SCHEMA_URI}#/definitions/core/allOf/2/properties/collection"),
            }),
        );
        let _ = queryables.insert(
            "geometry",
            json!({
                "description": "Geometry",
                "$ref": format!("{ITEM_SCHEMA_URI}#/definitions/core/allOf/1/oneOf/0/properties/geometry"),
            }),
        );
        let _ = queryables.insert(
            "datetime",
            json!({
                "description": "Datetime",
                "$ref": "https://schemas.stacspec.org/v1.0.0/item-spec/json-schema/datetime.json#/properties/datetime",
            }),
        );
        queryables
    }
}
