//! Open Graph Protocol metadata extraction.
//!
//! [`parse`] runs the whole pipeline: the HTML is parsed, every
//! `<meta property="og:...">` tag is collected in document order, and the flat
//! tag sequence is folded into one [`OpenGraph`] record, with `og:image:*`,
//! `og:video:*` and `og:audio:*` sub-properties grouped under the nearest
//! preceding opening tag of their kind.
//!
//! ```
//! let html = r#"<html><head>
//!     <meta property="og:title" content="Open Graph protocol">
//!     <meta property="og:image" content="http://example.com/a.png">
//!     <meta property="og:image:width" content="300">
//! </head></html>"#;
//! let og = ogp::parse_str(html).unwrap();
//! assert_eq!(og.title, "Open Graph protocol");
//! assert_eq!(og.images[0].width, "300");
//! ```

pub mod assembler;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;

pub use assembler::{assemble, Assembler, AssemblerOptions};
pub use collector::collect_og_tags;
pub use error::{OgpError, OgpResult};
pub use models::{Audio, Image, OgTag, OpenGraph, Video};

/// Extract Open Graph metadata from raw document bytes.
///
/// Bytes are decoded as UTF-8, replacing invalid sequences. Fails with
/// [`OgpError::NotOpenGraphDocument`] when the document has no `og:` tags.
pub fn parse(document: &[u8]) -> OgpResult<OpenGraph> {
    parse_with(document, AssemblerOptions::default())
}

/// [`parse`] with explicit assembler options.
pub fn parse_with(document: &[u8], options: AssemblerOptions) -> OgpResult<OpenGraph> {
    let html = String::from_utf8_lossy(document);
    Assembler::new(options).assemble(collect_og_tags(&html))
}

/// Extract Open Graph metadata from an already-decoded HTML string.
pub fn parse_str(html: &str) -> OgpResult<OpenGraph> {
    assemble(collect_og_tags(html))
}
