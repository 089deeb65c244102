use crate::components::PlayerContext;
use dioxus::prelude::*;

const PANEL_SELECTOR: &str = ".playlist-sidebar";
const TOGGLE_SELECTOR: &str = ".playlist-toggle-btn";

/// A press outside the open panel dismisses it. The toggle button handles
/// its own clicks, so presses on it are left alone.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn should_close_playlist(open: bool, inside_panel: bool, on_toggle: bool) -> bool {
    open && !inside_panel && !on_toggle
}

#[component]
pub fn PlaylistSidebar() -> Element {
    let ctx = use_context::<PlayerContext>();
    let open = (ctx.playlist_open)();
    let current_index = ctx.transport.read().current_index;
    let playlist = ctx.playlist.read();

    #[cfg(target_arch = "wasm32")]
    {
        let playlist_open = ctx.playlist_open;
        use_hook(move || close_on_outside_press(playlist_open));
    }

    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "playlist-sidebar",
            div { class: "playlist",
                for (index, track) in playlist.iter().enumerate() {
                    PlaylistItem {
                        key: "{track.id}",
                        index,
                        title: track.title.clone(),
                        active: index == current_index,
                    }
                }
            }
        }
    }
}

#[component]
fn PlaylistItem(index: usize, title: String, active: bool) -> Element {
    let ctx = use_context::<PlayerContext>();

    rsx! {
        div {
            class: if active { "playlist-item active" } else { "playlist-item" },
            onclick: move |_| {
                ctx.dispatch(|controller| controller.select_track(index));
            },
            span { "{title}" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn close_on_outside_press(mut playlist_open: Signal<bool>) {
    use dioxus::core::{Runtime, RuntimeGuard};
    use wasm_bindgen::prelude::*;
    use web_sys::{window, Element, Event, Node};

    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let runtime = Runtime::current();
    let panels = document.clone();
    let callback = Closure::wrap(Box::new(move |event: Event| {
        let _guard = RuntimeGuard::new(runtime.clone());
        let open = *playlist_open.peek();
        let target = event.target();
        let target_node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        let inside_panel = panels
            .query_selector(PANEL_SELECTOR)
            .ok()
            .flatten()
            .map(|panel| panel.contains(target_node))
            .unwrap_or(false);
        let on_toggle = target
            .as_ref()
            .and_then(|t| t.dyn_ref::<Element>())
            .and_then(|el| el.closest(TOGGLE_SELECTOR).ok().flatten())
            .is_some();
        if should_close_playlist(open, inside_panel, on_toggle) {
            playlist_open.set(false);
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = document
        .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref());
    callback.forget();
}
