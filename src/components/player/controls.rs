use crate::components::{Icon, PlayerContext};
use crate::player::RepeatMode;
use dioxus::prelude::*;

fn active_class(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}

/// Shuffle button - toggle shuffle mode
#[component]
pub(super) fn ShuffleButton() -> Element {
    let ctx = use_context::<PlayerContext>();
    let enabled = ctx.transport.read().shuffle;

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            class: active_class(enabled),
            onclick: move |_| {
                ctx.dispatch(|controller| controller.toggle_shuffle());
            },
            Icon { name: "shuffle".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let ctx = use_context::<PlayerContext>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            onclick: move |_| {
                ctx.dispatch(|controller| controller.previous());
            },
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn PlayPauseButton() -> Element {
    let ctx = use_context::<PlayerContext>();
    let playing = ctx.transport.read().is_playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "play-button",
            onclick: move |_| {
                ctx.dispatch(|controller| controller.play_pause());
            },
            if playing {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let ctx = use_context::<PlayerContext>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            onclick: move |_| {
                ctx.dispatch(|controller| controller.next());
            },
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}

/// Repeat button - cycles off, one, all
#[component]
pub(super) fn RepeatButton() -> Element {
    let ctx = use_context::<PlayerContext>();
    let mode = ctx.transport.read().repeat_mode;

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            class: active_class(mode != RepeatMode::Off),
            onclick: move |_| {
                ctx.dispatch(|controller| controller.cycle_repeat_mode());
            },
            Icon {
                name: match mode {
                    RepeatMode::One => "repeat-1".to_string(),
                    _ => "repeat".to_string(),
                },
                class: "icon".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn VolumeControls() -> Element {
    let ctx = use_context::<PlayerContext>();
    let (volume, muted) = {
        let transport = ctx.transport.read();
        (transport.volume, transport.is_muted)
    };

    let on_mute = {
        let ctx = ctx.clone();
        move |_| {
            ctx.dispatch(|controller| controller.toggle_mute());
        }
    };
    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            ctx.dispatch(|controller| controller.set_volume(val));
        }
    };

    rsx! {
        div { class: "volume-controls",
            button { r#type: "button", onclick: on_mute,
                Icon {
                    name: if muted { "volume-x".to_string() } else { "volume".to_string() },
                    class: "icon".to_string(),
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "1",
                step: "0.01",
                value: "{volume}",
                oninput: on_volume_change,
            }
        }
    }
}

#[component]
pub(super) fn PlaylistToggle() -> Element {
    let mut playlist_open = use_context::<PlayerContext>().playlist_open;

    rsx! {
        button {
            r#type: "button",
            class: "playlist-toggle-btn",
            onclick: move |_| playlist_open.toggle(),
            Icon { name: "queue".to_string(), class: "icon".to_string() }
        }
    }
}
