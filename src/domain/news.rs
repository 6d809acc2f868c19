use serde::{Deserialize, Serialize};

use crate::resource::ResourceDescriptor;

pub const NEWS: ResourceDescriptor = ResourceDescriptor::new("news", "/news");
pub const ADMIN_NEWS: ResourceDescriptor = ResourceDescriptor::new("admin-news", "/admin/news");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
