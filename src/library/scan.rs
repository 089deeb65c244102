//! Song file discovery shared by the build script and the runtime loader.

use std::path::Path;

/// Extensions recognised as playable songs.
pub const SONG_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

/// Returns the lowercase extension of `name` when it is a supported song file.
fn song_extension(name: &str) -> Option<&'static str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    SONG_EXTENSIONS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(ext))
}

pub fn is_song_file(name: &str) -> bool {
    song_extension(name).is_some()
}

/// Display title for a bundled file: directory components and the song
/// extension are dropped, everything else is kept verbatim.
pub fn title_from_file(name: &str) -> String {
    let file = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match song_extension(file) {
        Some(ext) => file[..file.len() - ext.len() - 1].to_string(),
        None => file.to_string(),
    }
}

/// Lists song files directly inside `dir`, sorted by file name.
#[allow(dead_code)]
pub fn scan_song_dir(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_song_file(&name) {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}
