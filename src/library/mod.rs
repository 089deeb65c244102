//! Bundled playlist loading.

mod scan;

use crate::error::{PlayerError, Result};
use dioxus::logger::tracing::info;
use uuid::Uuid;

mod manifest {
    include!(concat!(env!("OUT_DIR"), "/song_manifest.rs"));
}

/// A playable entry of the playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl Track {
    pub fn new(file: &str, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: scan::title_from_file(file),
            url: url.into(),
        }
    }
}

/// Builds the ordered playlist from `(file name, url)` pairs, skipping
/// anything that is not a song file. Input order is kept.
pub fn playlist_from_entries<I, U>(entries: I) -> Vec<Track>
where
    I: IntoIterator<Item = (&'static str, U)>,
    U: ToString,
{
    entries
        .into_iter()
        .filter(|(file, _)| scan::is_song_file(file))
        .map(|(file, url)| Track::new(file, url.to_string()))
        .collect()
}

/// Loads the songs bundled at build time.
pub fn load_bundled_playlist() -> Result<Vec<Track>> {
    if let Some(reason) = manifest::SCAN_ERROR {
        return Err(PlayerError::LibraryScan(reason.to_string()));
    }
    let tracks = playlist_from_entries(
        manifest::BUNDLED_SONGS
            .iter()
            .map(|(file, asset)| (*file, asset.to_string())),
    );
    info!(count = tracks.len(), "playlist loaded");
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn playlist_keeps_discovery_order() {
        let tracks = playlist_from_entries([
            ("b.mp3", "/assets/b.mp3"),
            ("a.wav", "/assets/a.wav"),
        ]);
        let titles: Vec<_> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
        assert_eq!(tracks[1].url, "/assets/a.wav");
    }

    #[test]
    fn playlist_ids_are_unique() {
        let tracks = playlist_from_entries([
            ("same.mp3", "/one"),
            ("same.mp3", "/two"),
            ("other.mp3", "/three"),
        ]);
        let ids: HashSet<_> = tracks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn non_song_entries_are_skipped() {
        let tracks = playlist_from_entries([(".gitkeep", "/x"), ("song.mp3", "/y")]);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "song");
    }
}
