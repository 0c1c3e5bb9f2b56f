//! Rebuilds the Open Graph object graph from the flat, document-ordered
//! sequence of `og:` meta tags.
//!
//! Property names are compared ASCII case-insensitively. The prefix test that
//! decides whether a tag still belongs to the current image/video/audio group
//! is case-sensitive on the lowercase literals `og:image:`, `og:video:` and
//! `og:audio:`, so `OG:IMAGE:WIDTH` is ignored while `og:image:WIDTH` is not.

use std::iter::Peekable;
use std::str::FromStr;

use strum::EnumString;

use crate::error::{OgpError, OgpResult};
use crate::models::{Audio, Image, OgTag, OpenGraph, Video};

// ── Property names ─────────────────────────────────────────────────────────

/// Top-level properties recognised by exact (case-insensitive) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum Property {
    #[strum(serialize = "og:title")]
    Title,
    #[strum(serialize = "og:type")]
    Type,
    #[strum(serialize = "og:url")]
    Url,
    #[strum(serialize = "og:description")]
    Description,
    #[strum(serialize = "og:determiner")]
    Determiner,
    /// Misspelling emitted by some publishers; accepted unless running strict.
    #[strum(serialize = "og:detarminer")]
    LegacyDeterminer,
    #[strum(serialize = "og:locale")]
    Locale,
    #[strum(serialize = "og:locale:alternate")]
    LocaleAlternate,
    #[strum(serialize = "og:site_name")]
    SiteName,
    #[strum(serialize = "og:image")]
    Image,
    #[strum(serialize = "og:video")]
    Video,
    #[strum(serialize = "og:audio")]
    Audio,
}

/// Field names that may follow a group prefix, e.g. the `width` in `og:image:width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
enum SubField {
    SecureUrl,
    Type,
    Width,
    Height,
    Alt,
}

// ── Groups ─────────────────────────────────────────────────────────────────

/// A repeated structured property: an opening tag carrying the URL, followed
/// by sub-property tags sharing `PREFIX`.
trait Group: Sized {
    const PREFIX: &'static str;

    fn open(url: String) -> Self;

    /// The record's sequence of groups of this kind.
    fn sequence(og: &mut OpenGraph) -> &mut Vec<Self>;

    /// Returns `false` when `field` does not exist on this kind.
    fn set(&mut self, field: SubField, content: String) -> bool;
}

impl Group for Image {
    const PREFIX: &'static str = "og:image:";

    fn open(url: String) -> Self {
        Image {
            url,
            ..Image::default()
        }
    }

    fn sequence(og: &mut OpenGraph) -> &mut Vec<Self> {
        &mut og.images
    }

    fn set(&mut self, field: SubField, content: String) -> bool {
        let slot = match field {
            SubField::SecureUrl => &mut self.secure_url,
            SubField::Type => &mut self.mime_type,
            SubField::Width => &mut self.width,
            SubField::Height => &mut self.height,
            SubField::Alt => &mut self.alt,
        };
        *slot = content;
        true
    }
}

impl Group for Video {
    const PREFIX: &'static str = "og:video:";

    fn open(url: String) -> Self {
        Video {
            url,
            ..Video::default()
        }
    }

    fn sequence(og: &mut OpenGraph) -> &mut Vec<Self> {
        &mut og.videos
    }

    fn set(&mut self, field: SubField, content: String) -> bool {
        let slot = match field {
            SubField::SecureUrl => &mut self.secure_url,
            SubField::Type => &mut self.mime_type,
            SubField::Width => &mut self.width,
            SubField::Height => &mut self.height,
            SubField::Alt => return false,
        };
        *slot = content;
        true
    }
}

impl Group for Audio {
    const PREFIX: &'static str = "og:audio:";

    fn open(url: String) -> Self {
        Audio {
            url,
            ..Audio::default()
        }
    }

    fn sequence(og: &mut OpenGraph) -> &mut Vec<Self> {
        &mut og.audios
    }

    fn set(&mut self, field: SubField, content: String) -> bool {
        let slot = match field {
            SubField::SecureUrl => &mut self.secure_url,
            SubField::Type => &mut self.mime_type,
            SubField::Width | SubField::Height | SubField::Alt => return false,
        };
        *slot = content;
        true
    }
}

fn open_group<G: Group>(og: &mut OpenGraph, url: String) {
    G::sequence(og).push(G::open(url));
}

/// Consumes `first` and every immediately following tag that still carries
/// `G::PREFIX`, applying each to the most recent group of kind `G`.
///
/// The first tag without the prefix is left in `tags` for the caller. With no
/// group of this kind opened yet the whole run is dropped.
fn absorb_group<G, I>(og: &mut OpenGraph, first: OgTag, tags: &mut Peekable<I>) -> usize
where
    G: Group,
    I: Iterator<Item = OgTag>,
{
    let mut current = G::sequence(og).last_mut();
    if current.is_none() {
        tracing::debug!(
            property = %first.property,
            "sub-property without a preceding opening tag, dropping run"
        );
    }

    let mut consumed = 0;
    let mut next = Some(first);
    while let Some(tag) = next {
        consumed += 1;
        if let Some(group) = current.as_mut() {
            let name = &tag.property[G::PREFIX.len()..];
            let applied = SubField::from_str(name)
                .map(|field| group.set(field, tag.content))
                .unwrap_or(false);
            if !applied {
                tracing::trace!(property = %tag.property, "ignoring unknown sub-property");
            }
        }
        next = tags.next_if(|t| t.property.starts_with(G::PREFIX));
    }
    consumed
}

// ── Assembler ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerOptions {
    /// Also read `og:detarminer` into `determiner`.
    pub legacy_determiner: bool,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            legacy_determiner: true,
        }
    }
}

/// Single-pass builder of [`OpenGraph`] records. Holds only options, so one
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    options: AssemblerOptions,
}

impl Assembler {
    pub fn new(options: AssemblerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> AssemblerOptions {
        self.options
    }

    /// Build a record from `og:` tags given in document order.
    ///
    /// Fails with [`OgpError::NotOpenGraphDocument`] only when `tags` is empty.
    /// Unknown property names are skipped; repeated scalars and repeated
    /// sub-properties within one group keep the last value.
    pub fn assemble<I>(&self, tags: I) -> OgpResult<OpenGraph>
    where
        I: IntoIterator,
        I::Item: Into<OgTag>,
    {
        let mut tags = tags.into_iter().map(Into::into).peekable();
        if tags.peek().is_none() {
            return Err(OgpError::NotOpenGraphDocument);
        }

        let mut og = OpenGraph::default();
        let mut seen = 0usize;
        while let Some(tag) = tags.next() {
            match Property::from_str(&tag.property) {
                Ok(property) => {
                    seen += 1;
                    self.assign(&mut og, property, tag.content);
                }
                Err(_) if tag.property.starts_with(Image::PREFIX) => {
                    seen += absorb_group::<Image, _>(&mut og, tag, &mut tags);
                }
                Err(_) if tag.property.starts_with(Video::PREFIX) => {
                    seen += absorb_group::<Video, _>(&mut og, tag, &mut tags);
                }
                Err(_) if tag.property.starts_with(Audio::PREFIX) => {
                    seen += absorb_group::<Audio, _>(&mut og, tag, &mut tags);
                }
                Err(_) => {
                    seen += 1;
                    tracing::trace!(property = %tag.property, "ignoring unknown property");
                }
            }
        }

        tracing::debug!(
            tags = seen,
            images = og.images.len(),
            videos = og.videos.len(),
            audios = og.audios.len(),
            "assembled Open Graph record"
        );
        Ok(og)
    }

    fn assign(&self, og: &mut OpenGraph, property: Property, content: String) {
        match property {
            Property::Title => og.title = content,
            Property::Type => og.og_type = content,
            Property::Url => og.url = content,
            Property::Description => og.description = content,
            Property::Determiner => og.determiner = content,
            Property::LegacyDeterminer => {
                if self.options.legacy_determiner {
                    og.determiner = content;
                }
            }
            Property::Locale => og.locale = content,
            Property::LocaleAlternate => og.locale_alternates.push(content),
            Property::SiteName => og.site_name = content,
            Property::Image => open_group::<Image>(og, content),
            Property::Video => open_group::<Video>(og, content),
            Property::Audio => open_group::<Audio>(og, content),
        }
    }
}

/// [`Assembler::assemble`] with default options.
pub fn assemble<I>(tags: I) -> OgpResult<OpenGraph>
where
    I: IntoIterator,
    I::Item: Into<OgTag>,
{
    Assembler::default().assemble(tags)
}

// ── Unit tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Vec<OgTag> {
        pairs.iter().map(|&(p, c)| OgTag::new(p, c)).collect()
    }

    #[test]
    fn empty_input_is_not_open_graph() {
        let err = assemble(Vec::<OgTag>::new()).unwrap_err();
        assert!(matches!(err, OgpError::NotOpenGraphDocument));
    }

    #[test]
    fn unknown_only_input_still_succeeds() {
        let og = assemble(tags(&[("og:nothing", "x")])).unwrap();
        assert_eq!(og, OpenGraph::default());
    }

    #[test]
    fn later_scalar_wins_across_case() {
        let og = assemble(tags(&[("OG:Title", "first"), ("og:title", "second")])).unwrap();
        assert_eq!(og.title, "second");
    }

    #[test]
    fn assigns_every_scalar() {
        let og = assemble(tags(&[
            ("og:title", "T"),
            ("og:type", "website"),
            ("og:url", "http://example.com"),
            ("og:description", "D"),
            ("og:determiner", "the"),
            ("og:locale", "en_GB"),
            ("og:site_name", "S"),
        ]))
        .unwrap();
        assert_eq!(og.title, "T");
        assert_eq!(og.og_type, "website");
        assert_eq!(og.url, "http://example.com");
        assert_eq!(og.description, "D");
        assert_eq!(og.determiner, "the");
        assert_eq!(og.locale, "en_GB");
        assert_eq!(og.site_name, "S");
    }

    #[test]
    fn sub_properties_attach_to_nearest_opener() {
        let og = assemble(tags(&[
            ("og:image", "a.png"),
            ("og:image:width", "100"),
            ("og:image", "b.png"),
            ("og:image:width", "200"),
        ]))
        .unwrap();
        assert_eq!(og.images.len(), 2);
        assert_eq!(og.images[0].url, "a.png");
        assert_eq!(og.images[0].width, "100");
        assert_eq!(og.images[1].url, "b.png");
        assert_eq!(og.images[1].width, "200");
    }

    #[test]
    fn locale_alternates_accumulate_in_order_with_duplicates() {
        let og = assemble(tags(&[
            ("og:locale:alternate", "en_US"),
            ("og:locale:alternate", "fr_FR"),
            ("og:locale:alternate", "en_US"),
        ]))
        .unwrap();
        assert_eq!(og.locale_alternates, vec!["en_US", "fr_FR", "en_US"]);
    }

    #[test]
    fn unknown_sub_property_does_not_end_group() {
        let og = assemble(tags(&[
            ("og:image", "a.png"),
            ("og:image:unknown_field", "x"),
            ("og:image:width", "50"),
        ]))
        .unwrap();
        assert_eq!(og.images.len(), 1);
        assert_eq!(og.images[0].url, "a.png");
        assert_eq!(og.images[0].width, "50");
    }

    #[test]
    fn tag_ending_a_group_is_still_processed() {
        let og = assemble(tags(&[
            ("og:image", "a.png"),
            ("og:image:height", "10"),
            ("og:title", "after"),
            ("og:image", "b.png"),
        ]))
        .unwrap();
        assert_eq!(og.title, "after");
        assert_eq!(og.images.len(), 2);
        assert_eq!(og.images[0].height, "10");
        assert_eq!(og.images[1].height, "");
    }

    #[test]
    fn group_at_end_of_input() {
        let og = assemble(tags(&[("og:image", "a.png"), ("og:image:alt", "A")])).unwrap();
        assert_eq!(og.images[0].alt, "A");
    }

    #[test]
    fn last_sub_property_wins_within_group() {
        let og = assemble(tags(&[
            ("og:image", "a.png"),
            ("og:image:type", "image/gif"),
            ("og:image:type", "image/png"),
        ]))
        .unwrap();
        assert_eq!(og.images[0].mime_type, "image/png");
    }

    #[test]
    fn all_image_fields() {
        let og = assemble(tags(&[
            ("og:image", "http://example.com/a.png"),
            ("og:image:secure_url", "https://example.com/a.png"),
            ("og:image:type", "image/png"),
            ("og:image:width", "400"),
            ("og:image:height", "300"),
            ("og:image:alt", "A shiny red apple"),
        ]))
        .unwrap();
        assert_eq!(
            og.images[0],
            Image {
                url: "http://example.com/a.png".into(),
                secure_url: "https://example.com/a.png".into(),
                mime_type: "image/png".into(),
                width: "400".into(),
                height: "300".into(),
                alt: "A shiny red apple".into(),
            }
        );
    }

    #[test]
    fn video_sub_properties_attach_to_videos() {
        let og = assemble(tags(&[
            ("og:image", "a.png"),
            ("og:image", "b.png"),
            ("og:video", "movie.swf"),
            ("og:video:secure_url", "https://example.com/movie.swf"),
            ("og:video:type", "application/x-shockwave-flash"),
            ("og:video:width", "400"),
            ("og:video:height", "300"),
        ]))
        .unwrap();
        assert_eq!(og.images.len(), 2);
        assert!(og.images.iter().all(|i| i.width.is_empty()));
        assert_eq!(
            og.videos,
            vec![Video {
                url: "movie.swf".into(),
                secure_url: "https://example.com/movie.swf".into(),
                mime_type: "application/x-shockwave-flash".into(),
                width: "400".into(),
                height: "300".into(),
            }]
        );
    }

    #[test]
    fn audio_sub_properties_attach_to_audios() {
        let og = assemble(tags(&[
            ("og:audio", "sound.mp3"),
            ("og:audio:secure_url", "https://example.com/sound.mp3"),
            ("og:audio:type", "audio/mpeg"),
            ("og:audio:width", "100"),
        ]))
        .unwrap();
        assert!(og.images.is_empty());
        assert_eq!(
            og.audios,
            vec![Audio {
                url: "sound.mp3".into(),
                secure_url: "https://example.com/sound.mp3".into(),
                mime_type: "audio/mpeg".into(),
            }]
        );
    }

    #[test]
    fn video_ignores_alt() {
        let og = assemble(tags(&[("og:video", "v.mp4"), ("og:video:alt", "nope")])).unwrap();
        assert_eq!(og.videos[0], Video::open("v.mp4".into()));
    }

    #[test]
    fn interleaved_kinds_keep_their_own_groups() {
        let og = assemble(tags(&[
            ("og:image", "a.png"),
            ("og:video", "v.mp4"),
            ("og:image:width", "10"),
            ("og:video:width", "20"),
        ]))
        .unwrap();
        assert_eq!(og.images[0].width, "10");
        assert_eq!(og.videos[0].width, "20");
    }

    #[test]
    fn orphan_sub_properties_are_dropped() {
        let og = assemble(tags(&[
            ("og:image:width", "10"),
            ("og:image:height", "20"),
            ("og:title", "T"),
            ("og:image", "a.png"),
        ]))
        .unwrap();
        assert_eq!(og.title, "T");
        assert_eq!(og.images, vec![Image::open("a.png".into())]);
    }

    #[test]
    fn opening_names_are_case_insensitive() {
        let og = assemble(tags(&[("OG:IMAGE", "a.png"), ("og:Video", "v.mp4")])).unwrap();
        assert_eq!(og.images.len(), 1);
        assert_eq!(og.videos.len(), 1);
    }

    #[test]
    fn sub_field_names_are_case_insensitive() {
        let og = assemble(tags(&[("og:image", "a.png"), ("og:image:WIDTH", "10")])).unwrap();
        assert_eq!(og.images[0].width, "10");
    }

    #[test]
    fn sub_property_prefix_is_case_sensitive() {
        let og = assemble(tags(&[
            ("og:image", "a.png"),
            ("OG:IMAGE:WIDTH", "10"),
            ("og:image:height", "20"),
        ]))
        .unwrap();
        assert_eq!(og.images[0].width, "");
        assert_eq!(og.images[0].height, "20");
    }

    #[test]
    fn empty_opening_content_still_opens_group() {
        let og = assemble(tags(&[("og:image", ""), ("og:image:width", "1")])).unwrap();
        assert_eq!(og.images.len(), 1);
        assert_eq!(og.images[0].url, "");
        assert_eq!(og.images[0].width, "1");
    }

    #[test]
    fn legacy_determiner_accepted_by_default() {
        let og = assemble(tags(&[("og:detarminer", "an")])).unwrap();
        assert_eq!(og.determiner, "an");
    }

    #[test]
    fn strict_determiner_ignores_misspelling() {
        let assembler = Assembler::new(AssemblerOptions {
            legacy_determiner: false,
        });
        let og = assembler
            .assemble(tags(&[("og:determiner", "the"), ("og:detarminer", "an")]))
            .unwrap();
        assert_eq!(og.determiner, "the");
    }

    #[test]
    fn accepts_tuple_pairs() {
        let og = assemble([("og:title", "T"), ("og:type", "article")]).unwrap();
        assert_eq!(og.title, "T");
        assert_eq!(og.og_type, "article");
    }
}
