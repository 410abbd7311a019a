use std::time::Duration;

use chrono::Utc;
use futures_util::future;

use super::track::{Artwork, TrackRecord};

/// Issues one recent-track request per tracked user, all concurrent, and
/// settles once every request has finished one way or the other. Users whose
/// request failed or timed out simply contribute nothing this cycle.
pub struct SourceFetcher {
    client: lastfm::Client,
    timeout: Duration,
}

impl SourceFetcher {
    pub fn new(client: lastfm::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub async fn collect(&self, users: &[String]) -> Vec<TrackRecord> {
        let pending = users.iter().map(|user| self.fetch_user(user));
        future::join_all(pending)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn fetch_user(&self, user: &str) -> Vec<TrackRecord> {
        let result = tokio::time::timeout(self.timeout, self.client.recent_tracks(user)).await;
        let raw = match result {
            Ok(Ok(raw)) => raw,
            Ok(Err(error)) => {
                tracing::warn!(%user, %error, "recent-tracks fetch failed; user contributes nothing this cycle");
                return Vec::new();
            }
            Err(_) => {
                tracing::warn!(%user, timeout = ?self.timeout, "recent-tracks fetch timed out; user contributes nothing this cycle");
                return Vec::new();
            }
        };
        raw.into_iter().map(ingest).collect()
    }
}

/// Normalize a raw service item into a [`TrackRecord`], stamping now-playing
/// entries with the ingestion time. Wire image arrays with fewer than four
/// entries leave the remaining slots empty; extras past four are dropped.
fn ingest(raw: lastfm::RecentTrack) -> TrackRecord {
    let now_playing = raw.is_now_playing();
    let mut artwork = Artwork::default();
    for (slot, image) in artwork.0.iter_mut().zip(raw.image) {
        *slot = image.url;
    }
    TrackRecord {
        artist: raw.artist.text,
        album: raw.album.text,
        title: raw.name,
        url: raw.url,
        artwork,
        now_playing,
        observed_at: now_playing.then(Utc::now),
    }
}
