use serde::{Deserialize, Serialize};

use crate::resource::ResourceDescriptor;

/// Directory of registered alumni.
pub const ALUMNI: ResourceDescriptor = ResourceDescriptor::new("alumni", "/alumni");

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<u16>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub current_company: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}
