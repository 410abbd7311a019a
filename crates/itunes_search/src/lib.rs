//! Minimal client for the iTunes Search API, used as a fallback source of
//! cover art when the listening-history service has none.

use serde::Deserialize;

const SEARCH_URL: &str = "https://itunes.apple.com/search";

/// The size token embedded in every `artworkUrl100` reference.
const SOURCE_SIZE_TOKEN: &str = "100x100";

/// Target size tokens for the four derived variants, smallest first.
const VARIANT_SIZE_TOKENS: [&str; 4] = ["34x34", "64x64", "126x126", "300x300"];

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Results<T> {
    #[allow(unused)]
    result_count: i32,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// One entry of a `media=music` term search. Only the cover reference is of
/// interest here; everything else the endpoint returns is ignored.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SongResult {
    #[serde(default)]
    pub artwork_url_100: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

pub struct Client {
    net: reqwest::Client,
}

impl Client {
    pub fn new(net: reqwest::Client) -> Self {
        Self { net }
    }

    /// The first matching cover reference for the term, if the search matched
    /// anything at all.
    pub async fn search_artwork(&self, term: &str) -> Result<Option<String>, Error> {
        let response = self
            .net
            .get(SEARCH_URL)
            .query(&[("media", "music"), ("term", term), ("limit", "1")])
            .send()
            .await?
            .text()
            .await?;
        parse_artwork(&response)
    }
}

fn parse_artwork(json: &str) -> Result<Option<String>, Error> {
    let response: Results<SongResult> = serde_json::from_str(json)?;
    Ok(response
        .results
        .into_iter()
        .next()
        .and_then(|result| result.artwork_url_100)
        .filter(|url| !url.is_empty()))
}

/// Derive the four display variants from a `100x100` reference by swapping the
/// size token. This is string substitution only; the image CDN serves the
/// actual resize.
pub fn artwork_variants(reference: &str) -> [String; 4] {
    VARIANT_SIZE_TOKENS.map(|token| reference.replacen(SOURCE_SIZE_TOKEN, token, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_RESPONSE: &str = r#"{
        "resultCount": 2,
        "results": [
            {
                "wrapperType": "track",
                "trackName": "Says",
                "artistName": "Nils Frahm",
                "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ab/cd/source/100x100bb.jpg"
            },
            {
                "wrapperType": "track",
                "trackName": "Hammers",
                "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ef/gh/other/100x100bb.jpg"
            }
        ]
    }"#;

    #[test]
    fn takes_the_first_result_only() {
        let artwork = parse_artwork(SEARCH_RESPONSE).unwrap().unwrap();
        assert!(artwork.contains("/source/"));
    }

    #[test]
    fn empty_results_yield_none() {
        assert_eq!(parse_artwork(r#"{"resultCount": 0, "results": []}"#).unwrap(), None);
    }

    #[test]
    fn blank_reference_counts_as_missing() {
        let json = r#"{"resultCount": 1, "results": [{"artworkUrl100": ""}]}"#;
        assert_eq!(parse_artwork(json).unwrap(), None);
    }

    #[test]
    fn variants_substitute_each_size_token() {
        let [small, medium, large, extralarge] =
            artwork_variants("https://example.invalid/a/100x100bb.jpg");
        assert_eq!(small, "https://example.invalid/a/34x34bb.jpg");
        assert_eq!(medium, "https://example.invalid/a/64x64bb.jpg");
        assert_eq!(large, "https://example.invalid/a/126x126bb.jpg");
        assert_eq!(extralarge, "https://example.invalid/a/300x300bb.jpg");
    }

    #[test]
    fn variants_substitute_the_first_occurrence_only() {
        let [small, ..] = artwork_variants("https://example.invalid/100x100/100x100bb.jpg");
        assert_eq!(small, "https://example.invalid/34x34/100x100bb.jpg");
    }

    #[test]
    fn reference_without_token_is_left_unchanged() {
        let variants = artwork_variants("https://example.invalid/cover.jpg");
        assert!(variants.iter().all(|v| v == "https://example.invalid/cover.jpg"));
    }

    /// Requires network access.
    #[tokio::test]
    #[ignore = "hits the live iTunes Search API"]
    async fn live_search() {
        let client = Client::new(reqwest::Client::new());
        let artwork = client.search_artwork("Says Nils Frahm Spaces").await.unwrap();
        assert!(artwork.is_some_and(|url| url.contains(SOURCE_SIZE_TOKEN)));
    }
}
