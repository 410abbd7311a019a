use chrono::{DateTime, Utc};

/// Four cover image variants, ordered smallest to largest. An empty string
/// marks a variant the source could not provide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artwork(pub [String; 4]);

impl Artwork {
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|url| !url.is_empty())
    }
}

/// One played (or playing) track, normalized from a per-user fetch. A batch of
/// these lives for a single resolution cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub artist: String,
    pub album: String,
    pub title: String,
    pub url: String,
    pub artwork: Artwork,
    pub now_playing: bool,
    /// Stamped at ingestion, only to order records within one cycle. `None`
    /// (not now-playing) sorts before any stamped record.
    pub observed_at: Option<DateTime<Utc>>,
}

impl TrackRecord {
    pub fn identity(&self) -> TrackIdentity<'_> {
        TrackIdentity {
            title: &self.title,
            artist: &self.artist,
            album: &self.album,
        }
    }
}

/// The triple two tracks are compared by. Empty fields participate like any
/// other value, so missing-vs-missing counts as equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackIdentity<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub album: &'a str,
}
