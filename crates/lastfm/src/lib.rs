//! Read-only client for the Last.fm web API, covering the single endpoint the
//! group-status pipeline needs: `user.getRecentTracks` with the now-playing
//! annotation.

pub mod error;
mod api_key;
mod recent;

pub use api_key::{ApiKey, InvalidApiKeyError};
pub use error::Error;
pub use recent::{RecentTrack, Text, TrackAttributes, TrackImage};

pub(crate) const API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

pub struct Client {
    key: ApiKey,
    pub net: reqwest::Client, // exposed so a caller can share one HTTP client
}

impl Client {
    pub fn new(key: ApiKey) -> Self {
        Self::with_http_client(
            key,
            reqwest::Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("cannot construct reqwest client"),
        )
    }

    pub fn with_http_client(key: ApiKey, net: reqwest::Client) -> Self {
        Self { key, net }
    }

    /// The user's most recent track, annotated when one is actively playing.
    ///
    /// Even with `limit=1` the service may return a now-playing entry alongside
    /// the previously finished one; every returned entry is yielded, newest
    /// first as the service orders them.
    pub async fn recent_tracks(&self, user: &str) -> Result<Vec<RecentTrack>, Error> {
        let response = self
            .net
            .get(API_URL)
            .query(&[
                ("method", "user.getrecenttracks"),
                ("user", user),
                ("limit", "1"),
                ("nowplaying", "true"),
                ("api_key", self.key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .text()
            .await?;
        recent::parse_response(&response)
    }
}

/// Requires network access and a valid key in `LASTFM_TEST_API_KEY`.
#[cfg(test)]
#[tokio::test]
#[ignore = "hits the live Last.fm API"]
async fn live_recent_tracks() {
    let key = std::env::var("LASTFM_TEST_API_KEY").expect("LASTFM_TEST_API_KEY not set");
    let client = Client::new(ApiKey::new(&key).expect("bad test key"));
    let tracks = client.recent_tracks("rj").await.expect("request failed");
    for track in tracks {
        assert!(!track.name.is_empty());
    }
}
