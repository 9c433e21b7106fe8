//! Links describe relationships between STAC resources.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

/// The semantic role of a link.
///
/// The well-known relations get their own variants; anything else round-trips
/// through [Relation::Other].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Relation {
    /// The resource itself.
    SelfRel,

    /// The root of the catalog.
    Root,

    /// The containing resource.
    Parent,

    /// A child resource.
    Child,

    /// The collection an item belongs to.
    Collection,

    /// A single item.
    Item,

    /// The items endpoint of a collection.
    Items,

    /// An alternate representation.
    Alternate,

    /// The license of the resource.
    License,

    /// A resource this one was derived from.
    DerivedFrom,

    /// Any other relation.
    Other(String),
}

impl Relation {
    /// Returns this relation as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::Relation;
    ///
    /// assert_eq!(Relation::SelfRel.as_str(), "self");
    /// assert_eq!(Relation::DerivedFrom.as_str(), "derived_from");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Relation::SelfRel => "self",
            Relation::Root => "root",
            Relation::Parent => "parent",
            Relation::Child => "child",
            Relation::Collection => "collection",
            Relation::Item => "item",
            Relation::Items => "items",
            Relation::Alternate => "alternate",
            Relation::License => "license",
            Relation::DerivedFrom => "derived_from",
            Relation::Other(s) => s,
        }
    }

    /// Returns true if a link with this relation can always be re-derived
    /// from a resource's identifiers and the service's base url.
    ///
    /// Stored links with these relations are stale by definition, so
    /// [filter_links](crate::filter_links) drops them before merging with
    /// freshly built ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::Relation;
    ///
    /// assert!(Relation::SelfRel.is_inferred());
    /// assert!(!Relation::Items.is_inferred());
    /// assert!(!Relation::License.is_inferred());
    /// ```
    pub fn is_inferred(&self) -> bool {
        matches!(
            self,
            Relation::SelfRel
                | Relation::Item
                | Relation::Parent
                | Relation::Collection
                | Relation::Root
        )
    }
}

impl From<&str> for Relation {
    fn from(s: &str) -> Relation {
        match s {
            "self" => Relation::SelfRel,
            "root" => Relation::Root,
            "parent" => Relation::Parent,
            "child" => Relation::Child,
            "collection" => Relation::Collection,
            "item" => Relation::Item,
            "items" => Relation::Items,
            "alternate" => Relation::Alternate,
            "license" => Relation::License,
            "derived_from" => Relation::DerivedFrom,
            _ => Relation::Other(s.to_string()),
        }
    }
}

impl From<String> for Relation {
    fn from(s: String) -> Relation {
        s.as_str().into()
    }
}

impl From<Relation> for String {
    fn from(rel: Relation) -> String {
        match rel {
            Relation::Other(s) => s,
            _ => rel.as_str().to_string(),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The media type of a link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    /// `application/json`
    Json,

    /// `application/geo+json`
    Geojson,

    /// Any other media type.
    Other(String),
}

impl MediaType {
    /// Returns this media type as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::MediaType;
    ///
    /// assert_eq!(MediaType::Geojson.as_str(), "application/geo+json");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Geojson => "application/geo+json",
            MediaType::Other(s) => s,
        }
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> MediaType {
        match s {
            "application/json" => MediaType::Json,
            "application/geo+json" => MediaType::Geojson,
            _ => MediaType::Other(s.to_string()),
        }
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> MediaType {
        s.as_str().into()
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> String {
        match media_type {
            MediaType::Other(s) => s,
            _ => media_type.as_str().to_string(),
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed hyperlink in an API response.
///
/// Links are built fresh for every response and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use stac_axum_core::{Link, MediaType, Relation};
///
/// let link = Link::new("http://stac.test/collections/c", "self").json();
/// assert_eq!(link.rel, Relation::SelfRel);
/// assert_eq!(link.media_type, Some(MediaType::Json));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// The location of the linked resource, an absolute url.
    pub href: String,

    /// The semantic role of this link.
    pub rel: Relation,

    /// The media type of the linked resource.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,

    /// A human readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Any other members on the link object.
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Link {
    /// Creates a new link with the given href and relation.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::{Link, Relation};
    ///
    /// let link = Link::new("http://stac.test/", "root");
    /// assert_eq!(link.rel, Relation::Root);
    /// assert!(link.media_type.is_none());
    /// ```
    pub fn new(href: impl ToString, rel: impl Into<Relation>) -> Link {
        Link {
            href: href.to_string(),
            rel: rel.into(),
            media_type: None,
            title: None,
            additional_fields: Map::new(),
        }
    }

    /// Creates a `root` link with the JSON media type.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::Link;
    ///
    /// let link = Link::root("http://stac.test/");
    /// assert_eq!(link.rel.as_str(), "root");
    /// ```
    pub fn root(href: impl ToString) -> Link {
        Link::new(href, Relation::Root).json()
    }

    /// Sets this link's media type to JSON.
    pub fn json(mut self) -> Link {
        self.media_type = Some(MediaType::Json);
        self
    }

    /// Sets this link's media type to GeoJSON.
    pub fn geojson(mut self) -> Link {
        self.media_type = Some(MediaType::Geojson);
        self
    }

    /// Sets this link's title.
    pub fn title(mut self, title: impl ToString) -> Link {
        self.title = Some(title.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, MediaType, Relation};
    use serde_json::json;

    #[test]
    fn relation_round_trip() {
        for s in ["self", "root", "parent", "collection", "item", "items"] {
            let relation = Relation::from(s);
            assert_eq!(String::from(relation.clone()), s);
            assert!(!matches!(relation, Relation::Other(_)));
        }
        let relation = Relation::from("via");
        assert_eq!(relation, Relation::Other("via".to_string()));
        assert_eq!(String::from(relation), "via");
    }

    #[test]
    fn serialize() {
        let link = Link::new("http://stac.test/collections/c/items", "items").geojson();
        assert_eq!(
            serde_json::to_value(link).unwrap(),
            json!({
                "href": "http://stac.test/collections/c/items",
                "rel": "items",
                "type": "application/geo+json",
            })
        );
    }

    #[test]
    fn deserialize_preserves_unknown_members() {
        let link: Link = serde_json::from_value(json!({
            "href": "http://stac.test/license.html",
            "rel": "license",
            "type": "text/html",
            "title": "the license",
            "method": "GET",
        }))
        .unwrap();
        assert_eq!(link.rel, Relation::License);
        assert_eq!(link.media_type, Some(MediaType::Other("text/html".to_string())));
        assert_eq!(link.additional_fields["method"], "GET");
        let value = serde_json::to_value(link).unwrap();
        assert_eq!(value["method"], "GET");
    }

    #[test]
    fn title() {
        let link = Link::new("http://stac.test/", "root").title("a catalog");
        assert_eq!(link.title.unwrap(), "a catalog");
    }
}
