use std::io::{self, Write};

use serde::Serialize;

use crate::resolver::track::TrackRecord;

/// The flattened projection handed to a renderer: one key per template field,
/// cover variants under named slots. Variants the resolution could not fill
/// stay empty strings; substituting a placeholder image is the renderer's
/// business, not the pipeline's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub artist: String,
    pub album: String,
    pub title: String,
    pub url: String,
    pub image: DisplayImages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayImages {
    pub small: String,
    pub medium: String,
    pub large: String,
    pub extralarge: String,
}

impl From<&TrackRecord> for DisplayRecord {
    fn from(track: &TrackRecord) -> Self {
        let [small, medium, large, extralarge] = track.artwork.0.clone();
        Self {
            artist: track.artist.clone(),
            album: track.album.clone(),
            title: track.title.clone(),
            url: track.url.clone(),
            image: DisplayImages { small, medium, large, extralarge },
        }
    }
}

/// Consumes the record a resolution cycle produced. Exactly one call per cycle
/// that chose a track; rendering failures stay inside the renderer.
pub trait Renderer {
    fn render(&mut self, record: &DisplayRecord);
}

/// Writes each resolved record as a single JSON object per line.
pub struct JsonLines<W: Write = io::Stdout> {
    out: W,
}

impl JsonLines {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for JsonLines<W> {
    fn render(&mut self, record: &DisplayRecord) {
        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(error) => {
                tracing::error!(%error, "failed to serialize resolved record");
                return;
            }
        };
        if let Err(error) = writeln!(self.out, "{line}") {
            tracing::error!(%error, "failed to write resolved record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::track::Artwork;

    fn record() -> TrackRecord {
        TrackRecord {
            artist: "Nils Frahm".into(),
            album: "Spaces".into(),
            title: "Says".into(),
            url: "https://www.last.fm/music/Nils+Frahm/_/Says".into(),
            artwork: Artwork([
                "https://example.invalid/34x34.jpg".into(),
                "https://example.invalid/64x64.jpg".into(),
                String::new(),
                String::new(),
            ]),
            now_playing: true,
            observed_at: None,
        }
    }

    #[test]
    fn projection_flattens_artwork_into_named_slots() {
        let display = DisplayRecord::from(&record());
        assert_eq!(display.image.small, "https://example.invalid/34x34.jpg");
        assert_eq!(display.image.medium, "https://example.invalid/64x64.jpg");
        assert_eq!(display.image.large, "");
        assert_eq!(display.image.extralarge, "");
    }

    #[test]
    fn json_lines_emits_one_object_per_render() {
        let mut renderer = JsonLines::new(Vec::new());
        let display = DisplayRecord::from(&record());
        renderer.render(&display);
        renderer.render(&display);

        let written = String::from_utf8(renderer.out).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["title"], "Says");
        assert_eq!(parsed["image"]["extralarge"], "");
    }
}
