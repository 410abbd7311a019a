//! The track-resolution pipeline: fetch every tracked user concurrently,
//! aggregate to the single freshest track, detect repeats against the
//! previous cycle, and fall back to the secondary image search when cover art
//! is missing.

pub mod track;

mod aggregate;
mod artwork;
mod detect;
mod fetch;

use std::time::Duration;

pub use artwork::{ArtworkResolver, ArtworkSource};
pub use detect::LastTrackSlot;
pub use fetch::SourceFetcher;

use crate::config::Config;
use crate::render::DisplayRecord;
use track::TrackRecord;

/// One of these is instantiated per tracked group and driven for the process
/// lifetime. Cycles never overlap: `resolve_once` takes `&mut self`, so the
/// retained last-track slot sees exactly one read-modify-write per cycle.
pub struct GroupStatusResolver<S: ArtworkSource = itunes_search::Client> {
    users: Vec<String>,
    fetcher: SourceFetcher,
    artwork: ArtworkResolver<S>,
    fallback_artwork: bool,
    last: LastTrackSlot,
}

impl GroupStatusResolver {
    pub fn from_config(config: &Config) -> Self {
        // TODO: share one reqwest client between the two service clients.
        Self::new(config, itunes_search::Client::new(reqwest::Client::new()))
    }
}

impl<S: ArtworkSource> GroupStatusResolver<S> {
    pub fn new(config: &Config, source: S) -> Self {
        Self {
            users: config.users.clone(),
            fetcher: SourceFetcher::new(
                lastfm::Client::new(config.api_key.clone()),
                Duration::from_secs(config.fetch_timeout_secs),
            ),
            artwork: ArtworkResolver::new(source),
            fallback_artwork: config.fallback_artwork,
            last: LastTrackSlot::default(),
        }
    }

    /// One full resolution cycle. `None` means no tracked user currently has
    /// data, in which case nothing is rendered and the retained state is left
    /// alone.
    pub async fn resolve_once(&mut self) -> Option<DisplayRecord> {
        let collected = self.fetcher.collect(&self.users).await;
        self.resolve_collected(collected).await
    }

    async fn resolve_collected(&mut self, collected: Vec<TrackRecord>) -> Option<DisplayRecord> {
        let mut chosen = aggregate::choose_newest(collected)?;
        let same_track = self.last.observe(&chosen);

        if same_track {
            tracing::debug!(title = %chosen.title, "same track as last cycle; rendering as-is");
        } else if chosen.artwork.is_complete() {
            tracing::debug!(title = %chosen.title, "cover set already complete");
        } else if !self.fallback_artwork {
            tracing::debug!(title = %chosen.title, "fallback artwork disabled");
        } else {
            self.artwork.fill_missing(&mut chosen).await;
        }

        Some(DisplayRecord::from(&chosen))
    }
}
