use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The language of a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterLang {
    /// [cql2-text](https://docs.ogc.org/DRAFTS/21-065.html#cql2-text)
    Cql2Text,

    /// [cql2-json](https://docs.ogc.org/DRAFTS/21-065.html#cql2-json)
    Cql2Json,
}

/// A CQL2 filter expression, as sent in a POST body.
///
/// Tagged by language, carried opaquely: evaluating the expression is the
/// search backend's job.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stac_axum_core::Filter;
///
/// let filter: Filter = serde_json::from_value(json!({
///     "filter-lang": "cql2-text",
///     "filter": "eo:cloud_cover < 10",
/// })).unwrap();
/// assert_eq!(filter, Filter::Cql2Text("eo:cloud_cover < 10".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filter-lang", content = "filter", rename_all = "kebab-case")]
pub enum Filter {
    /// A filter expression as a JSON object.
    Cql2Json(Map<String, Value>),

    /// A filter expression in its text encoding.
    Cql2Text(String),
}

/// Filter parameters in their GET (query string) form.
///
/// # Examples
///
/// ```
/// use stac_axum_core::{Filter, GetFilter};
///
/// let get_filter: GetFilter =
///     serde_urlencoded::from_str("filter=eo%3Acloud_cover+%3C+10").unwrap();
/// let filter = get_filter.into_filter().unwrap();
/// assert_eq!(filter, Some(Filter::Cql2Text("eo:cloud_cover < 10".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFilter {
    /// The filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// The language of the expression, `cql2-text` when absent.
    #[serde(rename = "filter-lang", skip_serializing_if = "Option::is_none")]
    pub filter_lang: Option<FilterLang>,

    /// The coordinate reference system used by geometry literals in the
    /// expression.
    #[serde(rename = "filter-crs", skip_serializing_if = "Option::is_none")]
    pub filter_crs: Option<String>,
}

impl GetFilter {
    /// Converts these GET parameters into a [Filter].
    ///
    /// The GET form carries the expression as a string regardless of
    /// language; a `cql2-json` expression is parsed here.
    ///
    /// # Examples
    ///
    /// ```
    /// use stac_axum_core::{FilterLang, GetFilter};
    ///
    /// let get_filter = GetFilter {
    ///     filter: Some("{\"op\":\"<\"}".to_string()),
    ///     filter_lang: Some(FilterLang::Cql2Json),
    ///     filter_crs: None,
    /// };
    /// assert!(get_filter.into_filter().unwrap().is_some());
    /// ```
    pub fn into_filter(self) -> Result<Option<Filter>> {
        let Some(filter) = self.filter else {
            return Ok(None);
        };
        let filter = match self.filter_lang.unwrap_or(FilterLang::Cql2Text) {
            FilterLang::Cql2Text => Filter::Cql2Text(filter),
            FilterLang::Cql2Json => Filter::Cql2Json(serde_json::from_str(&filter)?),
        };
        Ok(Some(filter))
    }
}
