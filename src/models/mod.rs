mod open_graph;

pub use open_graph::{Audio, Image, OpenGraph, Video};

use serde::{Deserialize, Serialize};

// ============================================================================
// Collected Tags
// ============================================================================

/// A single `<meta property="og:..." content="...">` pair, in document order.
///
/// `property` is kept exactly as written; case folding happens during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgTag {
    pub property: String,
    pub content: String,
}

impl OgTag {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}

impl<P, C> From<(P, C)> for OgTag
where
    P: Into<String>,
    C: Into<String>,
{
    fn from((property, content): (P, C)) -> Self {
        OgTag::new(property, content)
    }
}
