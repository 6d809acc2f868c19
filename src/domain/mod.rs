//! Entities and endpoints of the alumni platform.
//!
//! Every document carries its Mongo id as `_id`. Fields the client does not
//! model are ignored on deserialization.

mod alumni;
mod donation;
mod event;
mod gallery;
mod membership;
mod news;

pub use alumni::{AlumniProfile, ALUMNI};
pub use donation::{Donation, DonationStatus, ADMIN_DONATIONS, DONATIONS};
pub use event::{Event, ADMIN_EVENTS, EVENTS, MARK_ATTENDANCE, REGISTER};
pub use gallery::{GalleryAlbum, GalleryImage, ADMIN_GALLERY, GALLERY};
pub use membership::{
    Membership, MembershipPlan, ADMIN_MEMBERSHIP_PLANS, MEMBERSHIPS, MEMBERSHIP_PLANS, PURCHASE,
};
pub use news::{NewsArticle, ADMIN_NEWS, NEWS};

/// Implements [`crate::resource::Entity`] for a type with an `id: String` field.
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::resource::Entity for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_entity!(
    AlumniProfile,
    Donation,
    Event,
    GalleryAlbum,
    Membership,
    MembershipPlan,
    NewsArticle,
);
