use serde::{Deserialize, Serialize};

use crate::resource::ResourceDescriptor;

pub const MEMBERSHIP_PLANS: ResourceDescriptor =
    ResourceDescriptor::new("membership-plans", "/membership/plans");
pub const ADMIN_MEMBERSHIP_PLANS: ResourceDescriptor =
    ResourceDescriptor::new("admin-membership-plans", "/admin/membership/plans");
/// Memberships held by the current member.
pub const MEMBERSHIPS: ResourceDescriptor = ResourceDescriptor::new("memberships", "/membership");

/// Action starting a paid purchase of a plan.
pub const PURCHASE: &str = "purchase";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Absent for lifetime plans.
    #[serde(default)]
    pub duration_months: Option<u32>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(rename = "_id")]
    pub id: String,
    /// Plan id.
    pub plan: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
}

impl MembershipPlan {
    pub fn is_lifetime(&self) -> bool {
        self.duration_months.is_none()
    }
}

fn default_active() -> bool {
    true
}
