use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A server-side document addressable by a string id.
pub trait Entity:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn id(&self) -> &str;
}

/// Name and endpoint base of one backend resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Short name used in logs (e.g., "events", "admin-events").
    pub name: &'static str,
    /// Path below the API base URL (e.g., "/admin/events").
    pub base_path: &'static str,
}

impl ResourceDescriptor {
    pub const fn new(name: &'static str, base_path: &'static str) -> Self {
        Self { name, base_path }
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), id)
    }

    pub fn action_path(&self, id: &str, action: &str) -> String {
        format!("{}/{}", self.item_path(id), action.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_joined_with_single_slashes() {
        let events = ResourceDescriptor::new("events", "/events/");
        assert_eq!(events.item_path("e1"), "/events/e1");
        assert_eq!(events.action_path("e1", "/register"), "/events/e1/register");
    }
}
