use super::PlayerContext;
use crate::error::{PlayerError, Result};
use crate::player::{MediaElement, MediaEvent};
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, DomException, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "wavebox-audio";

/// Initialize the global audio element once.
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "auto").ok()?;
    audio.set_attribute("playsinline", "true").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Readable text for a value thrown or rejected by a browser API.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(exception) = err.dyn_ref::<DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// A play request interrupted by a newer load or a pause.
fn is_abort_error(err: &JsValue) -> bool {
    err.dyn_ref::<DomException>()
        .map(|exception| exception.name() == "AbortError")
        .unwrap_or(false)
}

pub struct WebAudioElement {
    audio: HtmlAudioElement,
    ctx: PlayerContext,
}

impl WebAudioElement {
    pub fn attach(ctx: &PlayerContext) -> Option<Self> {
        Some(Self {
            audio: get_or_create_audio_element()?,
            ctx: ctx.clone(),
        })
    }
}

impl MediaElement for WebAudioElement {
    fn source(&self) -> Option<String> {
        self.ctx.engine.last_src.borrow().clone()
    }

    fn set_source(&mut self, url: &str) {
        self.audio.set_src(url);
        *self.ctx.engine.last_src.borrow_mut() = Some(url.to_string());
    }

    fn play(&mut self) -> Result<()> {
        let promise = self
            .audio
            .play()
            .map_err(|err| PlayerError::PlaybackRejected(describe_js_error(&err)))?;
        let ctx = self.ctx.clone();
        let runtime = Runtime::current();
        spawn_local(async move {
            let Err(err) = JsFuture::from(promise).await else {
                return;
            };
            if is_abort_error(&err) {
                debug!("play request superseded");
                return;
            }
            let _guard = RuntimeGuard::new(runtime);
            ctx.handle_media_event(MediaEvent::PlayRejected {
                reason: describe_js_error(&err),
            });
        });
        Ok(())
    }

    fn pause(&mut self) {
        let _ = self.audio.pause();
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
    }

    fn resume_output(&mut self) {
        if let Some(graph) = self.ctx.engine.graph.borrow().get() {
            graph.resume_if_suspended();
        }
    }
}
