use std::collections::BTreeMap;

/// Canonical query parameters for a list fetch.
///
/// Serialized as `page`, `limit`, then filters in key order. Filters with an
/// empty value are not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            filters: BTreeMap::new(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_filter(name.into(), value.into());
        self
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    /// Sets a filter; an empty value removes it.
    pub(crate) fn insert_filter(&mut self, name: String, value: String) {
        if value.trim().is_empty() {
            self.filters.remove(&name);
        } else {
            self.filters.insert(name, value);
        }
    }

    pub(crate) fn replace_filters(&mut self, filters: BTreeMap<String, String>) {
        self.filters = filters;
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(10)
    }
}
