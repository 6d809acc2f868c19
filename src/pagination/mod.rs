//! Pagination and filter state for list views.

mod controller;
mod filtered;
mod pages;
mod query;

pub use controller::PaginationController;
pub use filtered::FilteredList;
pub use pages::{page_window, PageLink};
pub use query::ListQuery;
