use serde::{Deserialize, Serialize};

/// Open Graph metadata assembled from one document.
///
/// Scalar fields are empty strings when the document does not set them; the
/// protocol treats absence as "unset", not as an error. Group sequences are
/// empty (never absent) when no tag of that kind exists, and keep the
/// document order of their opening tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    // Basic metadata
    pub title: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub images: Vec<Image>,
    pub url: String,

    // Optional metadata
    pub audios: Vec<Audio>,
    pub videos: Vec<Video>,
    pub description: String,
    pub determiner: String,
    pub locale: String,
    /// `og:locale:alternate` values in document order, duplicates kept.
    pub locale_alternates: Vec<String>,
    pub site_name: String,
}

/// One `og:image` group: the opening tag's URL plus its `og:image:*` sub-properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub width: String,
    pub height: String,
    pub alt: String,
}

/// One `og:video` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub width: String,
    pub height: String,
}

/// One `og:audio` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}
