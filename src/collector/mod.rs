use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::models::OgTag;

/// `<meta>` elements whose `property` starts with the literal `og:`. The
/// prefix match is case-sensitive.
static OG_META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property^="og:"]"#).expect("valid og meta selector"));

/// Collect every `og:` meta tag of `html` in document order.
///
/// A tag without a `content` attribute yields an empty content string. Values
/// are returned untrimmed.
pub fn collect_og_tags(html: &str) -> Vec<OgTag> {
    let document = Html::parse_document(html);
    collect_from_document(&document)
}

/// Same as [`collect_og_tags`] for an already-parsed document.
pub fn collect_from_document(document: &Html) -> Vec<OgTag> {
    let tags: Vec<OgTag> = document
        .select(&OG_META_SELECTOR)
        .filter_map(|el| {
            let element = el.value();
            let property = element.attr("property")?;
            let content = element.attr("content").unwrap_or_default();
            Some(OgTag::new(property, content))
        })
        .collect();

    tracing::debug!(tags = tags.len(), "collected og meta tags");
    tags
}

// ── Unit tests ─────────────────────────────────────────────────────────────
