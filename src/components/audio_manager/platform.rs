//! Lock-screen controls, background playback and screen wake lock.

use super::media_element::describe_js_error;
use super::PlayerContext;
use crate::player::{Controller, MediaEvent};
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::debug;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;

pub fn install(ctx: &PlayerContext) {
    install_media_session(ctx);
    install_visibility_listener(ctx);
    request_wake_lock();
}

type SessionAction = fn(&mut Controller<'_, super::PageMedia>);

fn install_media_session(ctx: &PlayerContext) {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return;
    };
    let session = match Reflect::get(&navigator, &JsValue::from_str("mediaSession")) {
        Ok(session) if !session.is_undefined() && !session.is_null() => session,
        _ => {
            debug!("media session unsupported");
            return;
        }
    };
    let Some(set_handler) = Reflect::get(&session, &JsValue::from_str("setActionHandler"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };

    let actions: [(&str, SessionAction); 4] = [
        ("play", |controller| controller.play()),
        ("pause", |controller| controller.pause()),
        ("previoustrack", |controller| controller.previous()),
        ("nexttrack", |controller| controller.next()),
    ];
    let runtime = Runtime::current();
    for (name, action) in actions {
        let ctx = ctx.clone();
        let runtime = runtime.clone();
        let callback = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            ctx.dispatch(action);
        }) as Box<dyn FnMut()>);
        if let Err(err) = set_handler.call2(&session, &JsValue::from_str(name), callback.as_ref()) {
            debug!(action = name, reason = %describe_js_error(&err), "media session action rejected");
        }
        callback.forget();
    }
}

fn install_visibility_listener(ctx: &PlayerContext) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let ctx = ctx.clone();
    let runtime = Runtime::current();
    let watched = document.clone();
    let callback = Closure::wrap(Box::new(move || {
        if watched.hidden() {
            let _guard = RuntimeGuard::new(runtime.clone());
            ctx.handle_media_event(MediaEvent::PageHidden);
        }
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn request_wake_lock() {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return;
    };
    let request = Reflect::get(&navigator, &JsValue::from_str("wakeLock"))
        .ok()
        .filter(|lock| !lock.is_undefined())
        .and_then(|lock| {
            let request = Reflect::get(&lock, &JsValue::from_str("request")).ok()?;
            let request = request.dyn_into::<Function>().ok()?;
            request.call1(&lock, &JsValue::from_str("screen")).ok()
        });
    let Some(pending) = request.and_then(|value| value.dyn_into::<Promise>().ok()) else {
        debug!("wake lock unsupported");
        return;
    };
    spawn_local(async move {
        if let Err(err) = JsFuture::from(pending).await {
            debug!(reason = %describe_js_error(&err), "wake lock denied");
        }
    });
}
