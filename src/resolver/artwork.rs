use async_trait::async_trait;

use super::track::{Artwork, TrackRecord};

/// A text-searchable source of cover images. Behind a trait so the escalation
/// logic can run against a canned source.
#[async_trait]
pub trait ArtworkSource {
    /// The first matching reference image URL for the term, if any.
    async fn search(&self, term: &str) -> Result<Option<String>, itunes_search::Error>;
}

#[async_trait]
impl ArtworkSource for itunes_search::Client {
    async fn search(&self, term: &str) -> Result<Option<String>, itunes_search::Error> {
        self.search_artwork(term).await
    }
}

/// Fills a chosen track's missing cover set from the secondary search service.
pub struct ArtworkResolver<S> {
    pub(crate) source: S,
}

impl<S: ArtworkSource> ArtworkResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Two-attempt escalating lookup: the full "title artist album" term
    /// first, then "title artist" with the album dropped. The first hit fills
    /// all four variants; if both attempts come up empty the record is left
    /// exactly as it was. Search failures count as empty results, never as
    /// pipeline errors.
    pub async fn fill_missing(&self, track: &mut TrackRecord) {
        let broad = format!("{} {} {}", track.title, track.artist, track.album);
        if self.attempt(&broad, track).await {
            return;
        }
        let narrow = format!("{} {}", track.title, track.artist);
        self.attempt(&narrow, track).await;
    }

    async fn attempt(&self, term: &str, track: &mut TrackRecord) -> bool {
        match self.source.search(term).await {
            Ok(Some(reference)) => {
                track.artwork = Artwork(itunes_search::artwork_variants(&reference));
                true
            }
            Ok(None) => {
                tracing::debug!(%term, "no artwork results");
                false
            }
            Err(error) => {
                tracing::warn!(%term, %error, "artwork search failed");
                false
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_utilities::StubSource;
    use super::*;

    fn bare_track() -> TrackRecord {
        TrackRecord {
            artist: "Nils Frahm".into(),
            album: "Spaces".into(),
            title: "Says".into(),
            url: String::new(),
            artwork: Artwork::default(),
            now_playing: true,
            observed_at: None,
        }
    }

    #[tokio::test]
    async fn broad_term_hit_fills_every_variant() {
        let source = StubSource::new([(
            "Says Nils Frahm Spaces",
            Ok(Some("https://example.invalid/100x100bb.jpg")),
        )]);
        let resolver = ArtworkResolver::new(source);

        let mut track = bare_track();
        resolver.fill_missing(&mut track).await;

        assert!(track.artwork.is_complete());
        assert_eq!(track.artwork.0[0], "https://example.invalid/34x34bb.jpg");
        assert_eq!(track.artwork.0[3], "https://example.invalid/300x300bb.jpg");
        assert_eq!(resolver.source.queries(), ["Says Nils Frahm Spaces"]);
    }

    #[tokio::test]
    async fn escalates_to_the_narrower_term() {
        let source = StubSource::new([
            ("Says Nils Frahm Spaces", Ok(None)),
            ("Says Nils Frahm", Ok(Some("https://example.invalid/100x100bb.jpg"))),
        ]);
        let resolver = ArtworkResolver::new(source);

        let mut track = bare_track();
        resolver.fill_missing(&mut track).await;

        assert!(track.artwork.is_complete());
        assert_eq!(
            resolver.source.queries(),
            ["Says Nils Frahm Spaces", "Says Nils Frahm"]
        );
    }

    #[tokio::test]
    async fn a_failed_broad_attempt_still_escalates() {
        let source = StubSource::new([
            ("Says Nils Frahm Spaces", Err(())),
            ("Says Nils Frahm", Ok(Some("https://example.invalid/100x100bb.jpg"))),
        ]);
        let resolver = ArtworkResolver::new(source);

        let mut track = bare_track();
        resolver.fill_missing(&mut track).await;

        assert!(track.artwork.is_complete());
    }

    #[tokio::test]
    async fn two_empty_attempts_leave_the_record_untouched() {
        let resolver = ArtworkResolver::new(StubSource::new([]));

        let mut track = bare_track();
        resolver.fill_missing(&mut track).await;

        assert_eq!(track.artwork, Artwork::default());
        assert_eq!(resolver.source.queries().len(), 2);
    }

    #[tokio::test]
    async fn empty_fields_still_participate_in_terms() {
        let resolver = ArtworkResolver::new(StubSource::new([]));

        let mut track = bare_track();
        track.album = String::new();
        resolver.fill_missing(&mut track).await;

        assert_eq!(resolver.source.queries(), ["Says Nils Frahm ", "Says Nils Frahm"]);
    }
}
