use serde::Deserialize;

use crate::error::{ApiError, Error};

/// The `{"#text": ..}` wrapper the API uses for artist and album names.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Text {
    #[serde(rename = "#text", default)]
    pub text: String,
}

/// One entry of a track's `image` array. The service sends four entries in
/// increasing resolution, labelled `small` through `extralarge`; an empty
/// `url` means the service has no cover at that size.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TrackImage {
    #[serde(rename = "#text", default)]
    pub url: String,
    #[serde(default)]
    pub size: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackAttributes {
    #[serde(default, deserialize_with = "deserialize_bool_string")]
    pub nowplaying: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentTrack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: Text,
    #[serde(default)]
    pub album: Text,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Vec<TrackImage>,
    #[serde(rename = "@attr", default)]
    pub attr: Option<TrackAttributes>,
}

impl RecentTrack {
    /// Whether the source flagged this entry as actively playing at request
    /// time, as opposed to merely played previously.
    pub fn is_now_playing(&self) -> bool {
        self.attr.as_ref().is_some_and(|attr| attr.nowplaying)
    }
}

fn deserialize_bool_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let str: &str = serde::Deserialize::deserialize(deserializer)?;
    match str {
        "false" | "0" => Ok(false),
        "true" | "1" => Ok(true),
        _ => Err(serde::de::Error::custom("unexpected value for bool string")),
    }
}

/// With `limit=1` the `track` field is usually a single object, but becomes an
/// array when a now-playing entry rides along with the last finished one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}
impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}
impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(val: OneOrMany<T>) -> Self {
        match val {
            OneOrMany::Many(vec) => vec,
            OneOrMany::One(single) => vec![single],
        }
    }
}

#[derive(Deserialize)]
struct RecentTracks {
    #[serde(default)]
    track: OneOrMany<RecentTrack>,
}

#[derive(Deserialize)]
struct Response {
    recenttracks: RecentTracks,
}

#[derive(Deserialize)]
struct ApiFailure {
    error: u8,
    #[allow(unused)]
    message: String,
}

pub(crate) fn parse_response(json: &str) -> Result<Vec<RecentTrack>, Error> {
    if let Ok(failure) = serde_json::from_str::<ApiFailure>(json) {
        return Err(Error::Api(ApiError::from(failure.error)));
    }
    let response: Response = serde_json::from_str(json)?;
    Ok(response.recenttracks.track.into())
}
