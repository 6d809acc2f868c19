use serde::{Deserialize, Serialize};

use crate::resource::ResourceDescriptor;

pub const GALLERY: ResourceDescriptor = ResourceDescriptor::new("gallery", "/gallery");
pub const ADMIN_GALLERY: ResourceDescriptor =
    ResourceDescriptor::new("admin-gallery", "/admin/gallery");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A photo album, optionally tied to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryAlbum {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub event: Option<String>,
}

impl GalleryAlbum {
    pub fn cover(&self) -> Option<&GalleryImage> {
        self.images.first()
    }
}
