//! Builders for links that are derived, not stored.

use crate::{Link, Relation, Result};
use url::Url;

/// Builds the navigational links a server can always derive from a resource's
/// identifiers and its own base url.
///
/// The base url is authoritative for scheme, host, and port. Relative paths
/// are resolved against it with standard url-join semantics, so a base url
/// without a trailing slash drops its last path segment:
///
/// ```
/// use stac_axum_core::CollectionLinks;
///
/// let links = CollectionLinks::new("c", "http://stac.test/api");
/// assert_eq!(links.self_link().unwrap().href, "http://stac.test/collections/c");
/// ```
pub trait InferredLinks {
    /// Returns the base url of the service.
    fn base_url(&self) -> &str;

    /// Returns the catalog root link.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::{CollectionLinks, InferredLinks};
    ///
    /// let links = CollectionLinks::new("c", "http://stac.test/");
    /// assert_eq!(links.root().href, "http://stac.test/");
    /// ```
    fn root(&self) -> Link {
        Link::root(self.base_url())
    }

    /// Returns all inferred links for the resource, in a fixed order.
    fn create_links(&self) -> Result<Vec<Link>>;
}

/// Builds the inferred links of a collection.
#[derive(Debug, Clone)]
pub struct CollectionLinks {
    collection_id: String,
    base_url: String,
}

/// Builds the inferred links of an item.
#[derive(Debug, Clone)]
pub struct ItemLinks {
    collection_id: String,
    item_id: String,
    base_url: String,
}

impl CollectionLinks {
    /// Creates a new link builder for a collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::CollectionLinks;
    ///
    /// let links = CollectionLinks::new("sentinel-2-l2a", "http://stac.test/");
    /// ```
    pub fn new(collection_id: impl ToString, base_url: impl ToString) -> CollectionLinks {
        CollectionLinks {
            collection_id: collection_id.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Returns the collection's `self` link.
    pub fn self_link(&self) -> Result<Link> {
        let href = join(&self.base_url, &format!("collections/{}", self.collection_id))?;
        Ok(Link::new(href, Relation::SelfRel).json())
    }

    /// Returns the collection's `parent` link, the base url.
    pub fn parent(&self) -> Link {
        Link::new(&self.base_url, Relation::Parent).json()
    }

    /// Returns the collection's `items` link.
    pub fn items(&self) -> Result<Link> {
        let href = join(
            &self.base_url,
            &format!("collections/{}/items", self.collection_id),
        )?;
        Ok(Link::new(href, Relation::Items).geojson())
    }
}

impl InferredLinks for CollectionLinks {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `[self, parent, items, root]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::{CollectionLinks, InferredLinks, Relation};
    ///
    /// let links = CollectionLinks::new("c", "http://stac.test/").create_links().unwrap();
    /// let rels: Vec<_> = links.iter().map(|link| link.rel.clone()).collect();
    /// assert_eq!(
    ///     rels,
    ///     [Relation::SelfRel, Relation::Parent, Relation::Items, Relation::Root]
    /// );
    /// ```
    fn create_links(&self) -> Result<Vec<Link>> {
        Ok(vec![
            self.self_link()?,
            self.parent(),
            self.items()?,
            self.root(),
        ])
    }
}

impl ItemLinks {
    /// Creates a new link builder for an item in a collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::ItemLinks;
    ///
    /// let links = ItemLinks::new("sentinel-2-l2a", "an-item", "http://stac.test/");
    /// ```
    pub fn new(
        collection_id: impl ToString,
        item_id: impl ToString,
        base_url: impl ToString,
    ) -> ItemLinks {
        ItemLinks {
            collection_id: collection_id.to_string(),
            item_id: item_id.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Returns the item's `self` link.
    pub fn self_link(&self) -> Result<Link> {
        let href = join(
            &self.base_url,
            &format!("collections/{}/items/{}", self.collection_id, self.item_id),
        )?;
        Ok(Link::new(href, Relation::SelfRel).geojson())
    }

    /// Returns the item's `parent` link, its collection.
    pub fn parent(&self) -> Result<Link> {
        let href = join(&self.base_url, &format!("collections/{}", self.collection_id))?;
        Ok(Link::new(href, Relation::Parent).json())
    }

    /// Returns the item's `collection` link.
    ///
    /// Same target as [ItemLinks::parent], different relation.
    pub fn collection(&self) -> Result<Link> {
        let href = join(&self.base_url, &format!("collections/{}", self.collection_id))?;
        Ok(Link::new(href, Relation::Collection).json())
    }

    /// Returns an `alternate` link to the item's tiles endpoint.
    ///
    /// Not included in [create_links](InferredLinks::create_links): only hosts
    /// that actually serve tiles should advertise it, and they opt in by
    /// appending this link themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::{InferredLinks, ItemLinks};
    ///
    /// let links = ItemLinks::new("c", "i", "http://stac.test/");
    /// let mut all = links.create_links().unwrap();
    /// all.push(links.tiles().unwrap());
    /// assert_eq!(all.last().unwrap().href, "http://stac.test/collections/c/items/i/tiles");
    /// ```
    pub fn tiles(&self) -> Result<Link> {
        let href = join(
            &self.base_url,
            &format!(
                "collections/{}/items/{}/tiles",
                self.collection_id, self.item_id
            ),
        )?;
        Ok(Link::new(href, Relation::Alternate).json().title("tiles"))
    }
}

impl InferredLinks for ItemLinks {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `[self, parent, collection, root]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::{InferredLinks, ItemLinks, Relation};
    ///
    /// let links = ItemLinks::new("c", "i", "http://stac.test/").create_links().unwrap();
    /// let rels: Vec<_> = links.iter().map(|link| link.rel.clone()).collect();
    /// assert_eq!(
    ///     rels,
    ///     [Relation::SelfRel, Relation::Parent, Relation::Collection, Relation::Root]
    /// );
    /// ```
    fn create_links(&self) -> Result<Vec<Link>> {
        Ok(vec![
            self.self_link()?,
            self.parent()?,
            self.collection()?,
            self.root(),
        ])
    }
}

/// Removes every link whose relation is [inferred](Relation::is_inferred),
/// preserving the order of the rest.
///
/// Stored links carrying an inferred relation would go stale the moment a
/// service moves, so they are dropped before merging with freshly built links.
/// Applying this twice is the same as applying it once.
///
/// # Examples
///
/// ```
/// use stac_axum_core::{Link, filter_links};
///
/// let links = vec![
///     Link::new("http://stac.test/collections/c", "self"),
///     Link::new("http://stac.test/license.html", "license"),
/// ];
/// let links = filter_links(links);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].rel.as_str(), "license");
/// ```
pub fn filter_links(links: impl IntoIterator<Item = Link>) -> Vec<Link> {
    links
        .into_iter()
        .filter(|link| !link.rel.is_inferred())
        .collect()
}

fn join(base_url: &str, path: &str) -> Result<String> {
    let url = Url::parse(base_url)?.join(path)?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::{CollectionLinks, InferredLinks, ItemLinks, filter_links};
    use crate::{Link, MediaType, Relation};

    const BASE_URL: &str = "http://stac.test/";

    #[test]
    fn collection_links() {
        let links = CollectionLinks::new("c", BASE_URL).create_links().unwrap();
        assert_eq!(links.len(), 4);

        assert_eq!(links[0].rel, Relation::SelfRel);
        assert_eq!(links[0].href, "http://stac.test/collections/c");
        assert_eq!(links[0].media_type, Some(MediaType::Json));

        assert_eq!(links[1].rel, Relation::Parent);
        assert_eq!(links[1].href, BASE_URL);

        assert_eq!(links[2].rel, Relation::Items);
        assert_eq!(links[2].href, "http://stac.test/collections/c/items");
        assert_eq!(links[2].media_type, Some(MediaType::Geojson));

        assert_eq!(links[3].rel, Relation::Root);
        assert_eq!(links[3].href, BASE_URL);
    }

    #[test]
    fn item_links() {
        let links = ItemLinks::new("c", "i", BASE_URL).create_links().unwrap();
        assert_eq!(links.len(), 4);

        assert_eq!(links[0].rel, Relation::SelfRel);
        assert_eq!(links[0].href, "http://stac.test/collections/c/items/i");
        assert_eq!(links[0].media_type, Some(MediaType::Geojson));

        assert_eq!(links[1].rel, Relation::Parent);
        assert_eq!(links[1].href, "http://stac.test/collections/c");

        assert_eq!(links[2].rel, Relation::Collection);
        assert_eq!(links[2].href, links[1].href);

        assert_eq!(links[3].rel, Relation::Root);
        assert_eq!(links[3].href, BASE_URL);
    }

    #[test]
    fn join_resolves_relative() {
        // No trailing slash on the base: its last segment is dropped, as in
        // any RFC 3986 resolution.
        let links = CollectionLinks::new("c", "http://stac.test/api");
        assert_eq!(links.self_link().unwrap().href, "http://stac.test/collections/c");

        let links = CollectionLinks::new("c", "http://stac.test/api/");
        assert_eq!(
            links.self_link().unwrap().href,
            "http://stac.test/api/collections/c"
        );
    }

    #[test]
    fn parent_href_is_base_url_verbatim() {
        let links = CollectionLinks::new("c", "http://stac.test/api");
        assert_eq!(links.parent().href, "http://stac.test/api");
        assert_eq!(links.root().href, "http://stac.test/api");
    }

    #[test]
    fn malformed_base_url() {
        let links = CollectionLinks::new("c", "not a url");
        assert!(links.create_links().is_err());
    }

    #[test]
    fn tiles_is_opt_in() {
        let item_links = ItemLinks::new("c", "i", BASE_URL);
        let links = item_links.create_links().unwrap();
        assert!(links.iter().all(|link| link.rel != Relation::Alternate));

        let tiles = item_links.tiles().unwrap();
        assert_eq!(tiles.rel, Relation::Alternate);
        assert_eq!(tiles.href, "http://stac.test/collections/c/items/i/tiles");
        assert_eq!(tiles.title.as_deref(), Some("tiles"));
    }

    #[test]
    fn filter_links_drops_inferred() {
        let links = vec![
            Link::new("a", "self"),
            Link::new("b", "license"),
            Link::new("c", "root"),
            Link::new("d", "derived_from"),
            Link::new("e", "item"),
            Link::new("f", "parent"),
            Link::new("g", "collection"),
        ];
        let filtered = filter_links(links);
        let rels: Vec<_> = filtered.iter().map(|link| link.rel.as_str()).collect();
        assert_eq!(rels, ["license", "derived_from"]);
    }

    #[test]
    fn filter_links_is_idempotent() {
        let links = vec![
            Link::new("a", "self"),
            Link::new("b", "license"),
            Link::new("c", "via"),
        ];
        let once = filter_links(links);
        let twice = filter_links(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_links_keeps_items() {
        // "items" (plural) is not in the inferred set, unlike "item".
        let filtered = filter_links(vec![Link::new("a", "items")]);
        assert_eq!(filtered.len(), 1);
    }
}
