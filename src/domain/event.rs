use serde::{Deserialize, Serialize};

use crate::resource::ResourceDescriptor;

/// Published events, as seen by members.
pub const EVENTS: ResourceDescriptor = ResourceDescriptor::new("events", "/events");
/// Event management, including drafts and registrations.
pub const ADMIN_EVENTS: ResourceDescriptor = ResourceDescriptor::new("admin-events", "/admin/events");

/// Action registering the current member for an event.
pub const REGISTER: &str = "register";
/// Action recording attendance from a scanned QR code.
pub const MARK_ATTENDANCE: &str = "attendance";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 start time as sent by the server.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub registered_count: u32,
    /// Set when the current member is registered.
    #[serde(default)]
    pub is_registered: bool,
    /// Data URI of the attendance QR code issued at registration.
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Event {
    pub fn seats_left(&self) -> Option<u32> {
        self.capacity
            .map(|capacity| capacity.saturating_sub(self.registered_count))
    }

    pub fn is_full(&self) -> bool {
        self.seats_left() == Some(0)
    }
}
