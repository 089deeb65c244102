use crate::components::{AudioController, Player, PlayerContext, PlaylistSidebar};
use crate::library::{load_bundled_playlist, Track};
use crate::player::{TransportState, VisualizerFrame};
use crate::settings::{load_settings, save_settings, PlayerSettings};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let playlist = use_signal(|| {
        load_bundled_playlist().unwrap_or_else(|err| {
            warn!(%err, "playlist unavailable");
            Vec::<Track>::new()
        })
    });
    let transport = use_signal(|| {
        let settings = load_settings().unwrap_or_else(|err| {
            warn!(%err, "using default settings");
            PlayerSettings::default()
        });
        TransportState::from_settings(&settings)
    });
    let frame = use_signal(VisualizerFrame::default);
    let playlist_open = use_signal(|| false);

    use_context_provider(|| PlayerContext::new(playlist, transport, frame, playlist_open));

    // Only the persisted fields feed the memo, so time updates never write.
    let settings = use_memo(move || PlayerSettings::from_transport(&transport.read()));
    use_effect(move || {
        if let Err(err) = save_settings(&settings.read()) {
            warn!(%err, "could not save settings");
        }
    });

    rsx! {
        div { class: "music-player-container",
            Player {}
            PlaylistSidebar {}
            // Audio controller - manages playback separately from UI
            AudioController {}
        }
    }
}
