//! Client-side resource-state layer for the alumni association platform.
//!
//! Every feature of the platform (events, news, gallery, donations,
//! memberships, the alumni directory) follows the same shape: fetch a page,
//! fetch one, mutate one, track the request lifecycle and surface a single
//! error string. This crate implements that shape once as a generic
//! [`resource::ResourceSlice`] driven by pure reducers.

pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod mvi;
pub mod pagination;
pub mod presentation;
pub mod resource;
pub mod store;
