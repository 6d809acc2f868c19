use serde::{Deserialize, Serialize};

use crate::resource::ResourceDescriptor;

/// The current member's donations.
pub const DONATIONS: ResourceDescriptor = ResourceDescriptor::new("donations", "/donations");
pub const ADMIN_DONATIONS: ResourceDescriptor =
    ResourceDescriptor::new("admin-donations", "/admin/donations");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub donor_name: Option<String>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub status: DonationStatus,
    /// Gateway payment reference once the payment is captured.
    #[serde(default)]
    pub payment_id: Option<String>,
}

fn default_currency() -> String {
    "INR".to_string()
}
