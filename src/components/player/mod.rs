use crate::components::PlayerContext;
use crate::library::Track;
use crate::utils::{format_time, fraction_of};
use dioxus::prelude::*;
use std::rc::Rc;

mod controls;

use controls::{
    NextButton, PlayPauseButton, PlaylistToggle, PrevButton, RepeatButton, ShuffleButton,
    VolumeControls,
};

#[component]
pub fn Player() -> Element {
    let ctx = use_context::<PlayerContext>();
    let current_index = ctx.transport.read().current_index;
    let title = display_title(&ctx.playlist.read(), current_index);

    rsx! {
        div { class: "player-controls",
            div { class: "song-info",
                h3 { "{title}" }
            }
            Equalizer {}
            ProgressBar {}
            div { class: "main-controls",
                ShuffleButton {}
                PrevButton {}
                PlayPauseButton {}
                NextButton {}
                RepeatButton {}
            }
            VolumeControls {}
            PlaylistToggle {}
        }
    }
}

/// Title shown above the equalizer, or a placeholder when nothing is loaded.
fn display_title(playlist: &[Track], index: usize) -> String {
    playlist
        .get(index)
        .map(|track| track.title.clone())
        .unwrap_or_else(|| "No Song Loaded".to_string())
}

/// Spectrum bars, one per analyser bin, redrawn on every sampled frame.
#[component]
fn Equalizer() -> Element {
    let ctx = use_context::<PlayerContext>();
    let frame = (ctx.frame)();

    rsx! {
        div { class: "equalizer",
            for (index, bar) in frame.bars().enumerate() {
                div {
                    key: "{index}",
                    class: "equalizer-bar",
                    style: format!(
                        "height: {:.1}%; background-color: hsl({:.1}, 70%, 60%);",
                        bar.height_percent,
                        bar.hue,
                    ),
                }
            }
        }
    }
}

/// Elapsed time bar. Clicking seeks to the matching share of the track.
#[component]
fn ProgressBar() -> Element {
    let ctx = use_context::<PlayerContext>();
    let mut bar_element = use_signal(|| None::<Rc<MountedData>>);

    let (progress, elapsed, total) = {
        let transport = ctx.transport.read();
        (
            format!("width: {:.2}%", transport.progress_percent()),
            format_time(transport.current_time),
            format_time(transport.duration),
        )
    };

    let on_seek = move |evt: MouseEvent| {
        let ctx = ctx.clone();
        async move {
            let Some(bar) = bar_element.peek().clone() else {
                return;
            };
            let Ok(rect) = bar.get_client_rect().await else {
                return;
            };
            let offset = evt.client_coordinates().x - rect.origin.x;
            let fraction = fraction_of(offset, rect.width());
            ctx.dispatch(|controller| controller.seek(fraction));
        }
    };

    rsx! {
        div {
            class: "progress-bar",
            onmounted: move |evt: MountedEvent| bar_element.set(Some(evt.data())),
            onclick: on_seek,
            div { class: "progress", style: "{progress}" }
            span { class: "time-display", "{elapsed} / {total}" }
        }
    }
}
