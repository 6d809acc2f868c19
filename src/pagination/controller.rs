use std::collections::BTreeMap;

use reqwest::Url;

use super::query::ListQuery;

/// Translates filter, page and clear controls into a [`ListQuery`].
///
/// Holds the documented default filters so `clear` can restore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    query: ListQuery,
    defaults: BTreeMap<String, String>,
}

impl PaginationController {
    pub fn new(limit: u32) -> Self {
        Self::with_defaults(limit, BTreeMap::new())
    }

    pub fn with_defaults(limit: u32, defaults: BTreeMap<String, String>) -> Self {
        let mut query = ListQuery::new(limit);
        query.replace_filters(defaults.clone());
        Self { query, defaults }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Sets or removes (empty value) a filter and goes back to page 1.
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) -> &ListQuery {
        self.query.insert_filter(name.into(), value.into());
        self.query.page = 1;
        &self.query
    }

    /// Moves to page `page`, keeping filters.
    pub fn set_page(&mut self, page: u32) -> &ListQuery {
        self.query.page = page.max(1);
        &self.query
    }

    /// Restores default filters and page 1.
    pub fn clear(&mut self) -> &ListQuery {
        self.query.replace_filters(self.defaults.clone());
        self.query.page = 1;
        &self.query
    }

    /// Writes the current query into `url`, replacing its query string.
    pub fn write_to_url(&self, url: &mut Url) {
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(self.query.to_pairs());
    }

    /// Restores state from a shared or bookmarked URL.
    ///
    /// `page` and `limit` are read when they parse as positive integers;
    /// every other key is a filter. Defaults apply for filters the URL
    /// does not mention.
    pub fn read_from_url(&mut self, url: &Url) {
        let mut filters = self.defaults.clone();
        let mut page: u32 = 1;

        for (key, value) in url.query_pairs() {
            match &*key {
                "page" => page = value.parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1),
                "limit" => {
                    if let Some(limit) = value.parse::<u32>().ok().filter(|l| *l > 0) {
                        self.query.limit = limit;
                    }
                }
                _ if value.trim().is_empty() => {
                    filters.remove(&*key);
                }
                _ => {
                    filters.insert(key.into_owned(), value.into_owned());
                }
            }
        }

        self.query.replace_filters(filters);
        self.query.page = page;
    }
}
