use super::audio_graph::spawn_frame_sampler;
use super::media_element::get_or_create_audio_element;
use super::{platform, PlayerContext};
use crate::player::MediaEvent;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{window, AddEventListenerOptions};

/// Owns the page's `<audio>` element and keeps it in step with the transport.
#[component]
pub fn AudioController() -> Element {
    let ctx = use_context::<PlayerContext>();

    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            warn!("no document to host the audio element");
            return;
        };
        let runtime = Runtime::current();

        // Element events are assigned, not added, so a remount replaces them.
        let on_metadata = {
            let ctx = ctx.clone();
            let runtime = runtime.clone();
            let audio = audio.clone();
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                ctx.handle_media_event(MediaEvent::MetadataLoaded {
                    duration: audio.duration(),
                });
            }) as Box<dyn FnMut()>)
        };
        let on_time = {
            let ctx = ctx.clone();
            let runtime = runtime.clone();
            let audio = audio.clone();
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                ctx.handle_media_event(MediaEvent::TimeUpdate {
                    current_time: audio.current_time(),
                });
            }) as Box<dyn FnMut()>)
        };
        let on_ended = {
            let ctx = ctx.clone();
            let runtime = runtime.clone();
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                ctx.handle_media_event(MediaEvent::Ended);
            }) as Box<dyn FnMut()>)
        };
        audio.set_onloadedmetadata(Some(on_metadata.as_ref().unchecked_ref()));
        audio.set_ontimeupdate(Some(on_time.as_ref().unchecked_ref()));
        audio.set_onended(Some(on_ended.as_ref().unchecked_ref()));
        on_metadata.forget();
        on_time.forget();
        on_ended.forget();

        ctx.dispatch(|controller| {
            controller.apply_output_levels();
            controller.sync_source();
        });

        // Browsers only allow an AudioContext to start from a user gesture.
        if let Some(doc) = window().and_then(|w| w.document()) {
            let options = AddEventListenerOptions::new();
            options.set_once(true);
            for event in ["click", "touchstart"] {
                let engine = ctx.engine.clone();
                let gesture_cb =
                    Closure::wrap(Box::new(move || engine.init_graph()) as Box<dyn FnMut()>);
                let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    gesture_cb.as_ref().unchecked_ref(),
                    &options,
                );
                gesture_cb.forget();
            }
        }

        spawn_frame_sampler(ctx.engine.clone(), ctx.frame);
        platform::install(&ctx);
    });

    rsx! {}
}
