//! Explicit application store: one shared API client and every slice.
//!
//! Built once from [`Config`] and passed to whatever needs it; there is no
//! global instance.

use std::collections::BTreeMap;

use crate::api::{ApiClient, ApiError};
use crate::config::{Config, RacePolicy};
use crate::domain::{
    AlumniProfile, Donation, Event, GalleryAlbum, Membership, MembershipPlan, NewsArticle,
    ADMIN_DONATIONS, ADMIN_EVENTS, ADMIN_GALLERY, ADMIN_MEMBERSHIP_PLANS, ADMIN_NEWS, ALUMNI,
    DONATIONS, EVENTS, GALLERY, MEMBERSHIPS, MEMBERSHIP_PLANS, NEWS,
};
use crate::pagination::{FilteredList, PaginationController};
use crate::resource::{Entity, ResourceDescriptor, ResourceSlice};

pub struct AppStore {
    pub alumni: ResourceSlice<AlumniProfile>,
    pub events: ResourceSlice<Event>,
    pub admin_events: ResourceSlice<Event>,
    pub news: ResourceSlice<NewsArticle>,
    pub admin_news: ResourceSlice<NewsArticle>,
    pub gallery: ResourceSlice<GalleryAlbum>,
    pub admin_gallery: ResourceSlice<GalleryAlbum>,
    pub donations: ResourceSlice<Donation>,
    pub admin_donations: ResourceSlice<Donation>,
    pub membership_plans: ResourceSlice<MembershipPlan>,
    pub admin_membership_plans: ResourceSlice<MembershipPlan>,
    pub memberships: ResourceSlice<Membership>,
    api: ApiClient,
    page_size: u32,
}

impl AppStore {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api)?;
        let policy = config.lists.race_policy;

        tracing::info!(
            base_url = %api.base_url(),
            race_policy = ?policy,
            "application store initialized"
        );

        Ok(Self {
            alumni: slice(ALUMNI, &api, policy),
            events: slice(EVENTS, &api, policy),
            admin_events: slice(ADMIN_EVENTS, &api, policy),
            news: slice(NEWS, &api, policy),
            admin_news: slice(ADMIN_NEWS, &api, policy),
            gallery: slice(GALLERY, &api, policy),
            admin_gallery: slice(ADMIN_GALLERY, &api, policy),
            donations: slice(DONATIONS, &api, policy),
            admin_donations: slice(ADMIN_DONATIONS, &api, policy),
            membership_plans: slice(MEMBERSHIP_PLANS, &api, policy),
            admin_membership_plans: slice(ADMIN_MEMBERSHIP_PLANS, &api, policy),
            memberships: slice(MEMBERSHIPS, &api, policy),
            api,
            page_size: config.lists.page_size,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// List view over `slice` with the configured page size.
    pub fn list<E: Entity>(&self, slice: &ResourceSlice<E>) -> FilteredList<E> {
        self.list_with_defaults(slice, BTreeMap::new())
    }

    /// List view whose `clear` restores `defaults`.
    pub fn list_with_defaults<E: Entity>(
        &self,
        slice: &ResourceSlice<E>,
        defaults: BTreeMap<String, String>,
    ) -> FilteredList<E> {
        FilteredList::new(
            slice.clone(),
            PaginationController::with_defaults(self.page_size, defaults),
        )
    }
}

fn slice<E: Entity>(
    descriptor: ResourceDescriptor,
    api: &ApiClient,
    policy: RacePolicy,
) -> ResourceSlice<E> {
    ResourceSlice::new(descriptor, api.clone(), policy)
}
