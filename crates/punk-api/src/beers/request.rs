//! Query string builder for the `/beers` endpoint.

use super::filter::BeerFilter;
use super::parameter::QueryPair;
use crate::error::Result;

/// Base URL of the public Punk API v2.
pub const DEFAULT_BASE_URL: &str = "https://api.punkapi.com/v2";

/// Every filter key a [`BeerFilter`] can produce.
pub const QUERY_KEYS: [&str; 14] = [
    "abv_gt",
    "abv_lt",
    "ibu_gt",
    "ibu_lt",
    "ebc_gt",
    "ebc_lt",
    "beer_name",
    "yeast",
    "brewed_gt",
    "brewed_lt",
    "hops",
    "malt",
    "food",
    "ids",
];

/// Path of the beers endpoint, relative to the base URL.
const BEERS_PATH: &str = "/beers";

/// An ordered list of filters for one `/beers` request.
///
/// Pairs come out in insertion order, followed by `page` and `per_page` when
/// set. Duplicate filters are kept as separate pairs.
///
/// # Example
///
/// ```
/// use punk_api_rs::beers::{BeerFilter, BeersRequest, Condition};
///
/// let request = BeersRequest::new()
///     .with_filter(BeerFilter::hops("East Kent Goldings"))
///     .with_filter(BeerFilter::ids([1, 2, 3]))
///     .with_per_page(10);
///
/// assert_eq!(
///     request.to_query_string().unwrap(),
///     "hops=East_Kent_Goldings&ids=1%7C2%7C3&per_page=10"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeersRequest {
    filters: Vec<BeerFilter>,
    page: Option<u32>,
    per_page: Option<u32>,
}

impl BeersRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter.
    pub fn with_filter(mut self, filter: BeerFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Appends several filters, keeping their order.
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = BeerFilter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Requests a specific result page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Appends a filter in place.
    pub fn push(&mut self, filter: BeerFilter) {
        self.filters.push(filter);
    }

    /// Returns the filters in insertion order.
    pub fn filters(&self) -> &[BeerFilter] {
        &self.filters
    }

    /// Returns the number of filters, not counting pagination.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no filters and no pagination are set.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.page.is_none() && self.per_page.is_none()
    }

    /// Returns the unencoded key/value pairs.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|filter| {
                let pair = filter.to_pair();
                tracing::trace!(key = %pair.0, value = %pair.1, "translated filter");
                pair
            })
            .collect();

        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }

        pairs
    }

    /// Returns the pairs as serializable structs.
    pub fn query_pairs(&self) -> Vec<QueryPair> {
        self.pairs()
            .into_iter()
            .map(|(key, value)| QueryPair { key, value })
            .collect()
    }

    /// Form-encodes the pairs and joins them with `&`.
    ///
    /// Spaces have already become `_`; reserved characters such as `|` are
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encode` if form encoding fails.
    pub fn to_query_string(&self) -> Result<String> {
        let pairs = self.pairs();
        let query = serde_urlencoded::to_string(&pairs)?;
        tracing::debug!(params = pairs.len(), query = %query, "built beers query");
        Ok(query)
    }

    /// Returns the full request URL under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encode` if form encoding fails.
    pub fn url(&self, base_url: &str) -> Result<String> {
        let base = base_url.trim_end_matches('/');
        let query = self.to_query_string()?;
        if query.is_empty() {
            Ok(format!("{base}{BEERS_PATH}"))
        } else {
            Ok(format!("{base}{BEERS_PATH}?{query}"))
        }
    }
}

impl FromIterator<BeerFilter> for BeersRequest {
    fn from_iter<I: IntoIterator<Item = BeerFilter>>(iter: I) -> Self {
        Self::new().with_filters(iter)
    }
}

impl Extend<BeerFilter> for BeersRequest {
    fn extend<I: IntoIterator<Item = BeerFilter>>(&mut self, iter: I) {
        self.filters.extend(iter);
    }
}
