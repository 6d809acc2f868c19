use reqwest::Url;

use crate::resource::{Entity, Outcome, ResourceSlice, ResourceState};

use super::controller::PaginationController;
use super::pages::{page_window, PageLink};
use super::query::ListQuery;

/// A list view's data source: a slice plus the controller that feeds it.
///
/// Every control change issues exactly one `fetch_list` with the resulting
/// query.
pub struct FilteredList<E: Entity> {
    slice: ResourceSlice<E>,
    controller: PaginationController,
}

impl<E: Entity> FilteredList<E> {
    pub fn new(slice: ResourceSlice<E>, controller: PaginationController) -> Self {
        Self { slice, controller }
    }

    pub fn slice(&self) -> &ResourceSlice<E> {
        &self.slice
    }

    pub fn query(&self) -> &ListQuery {
        self.controller.query()
    }

    pub async fn refresh(&self) -> Outcome {
        self.slice.fetch_list(self.controller.query()).await
    }

    pub async fn set_filter(&mut self, name: &str, value: &str) -> Outcome {
        self.controller.set_filter(name, value);
        self.refresh().await
    }

    pub async fn set_page(&mut self, page: u32) -> Outcome {
        self.controller.set_page(page);
        self.refresh().await
    }

    pub async fn clear(&mut self) -> Outcome {
        self.controller.clear();
        self.slice.reset_filters();
        self.refresh().await
    }

    /// Page bar for the last fetched pagination.
    pub fn page_links(&self) -> Vec<PageLink> {
        let state: ResourceState<E> = self.slice.snapshot();
        page_window(state.pagination.page, state.pagination.total_pages)
    }

    pub fn write_to_url(&self, url: &mut Url) {
        self.controller.write_to_url(url);
    }

    /// Adopts the query in `url` and fetches it.
    pub async fn load_from_url(&mut self, url: &Url) -> Outcome {
        self.controller.read_from_url(url);
        self.refresh().await
    }
}
