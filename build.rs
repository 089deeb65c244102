use std::fmt::Write as _;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/library/scan.rs"]
mod scan;

const SONGS_DIR: &str = "assets/songs";

fn main() {
    println!("cargo:rerun-if-changed={SONGS_DIR}");

    let out_dir = std::env::var("OUT_DIR").unwrap_or_default();
    let manifest = match scan::scan_song_dir(Path::new(SONGS_DIR)) {
        Ok(files) => render_manifest(&files, None),
        Err(err) => {
            println!("cargo:warning=could not read {SONGS_DIR}: {err}");
            render_manifest(&[], Some(&format!("{SONGS_DIR}: {err}")))
        }
    };

    let target = Path::new(&out_dir).join("song_manifest.rs");
    if let Err(err) = std::fs::write(&target, manifest) {
        panic!("failed to write {}: {err}", target.display());
    }
}

fn render_manifest(files: &[String], scan_error: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("pub const BUNDLED_SONGS: &[(&str, dioxus::prelude::Asset)] = &[\n");
    for file in files {
        let _ = writeln!(
            out,
            "    ({file:?}, dioxus::prelude::asset!({path:?})),",
            path = format!("/{SONGS_DIR}/{file}"),
        );
    }
    out.push_str("];\n");
    let _ = writeln!(out, "pub const SCAN_ERROR: Option<&str> = {scan_error:?};");
    out
}
