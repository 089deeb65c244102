use super::{AudioEngine, PlayerContext};
use crate::error::Result;
use crate::player::MediaElement;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Stand-in for the page's media element when there is no browser to host
/// one. Tracks the assigned source so the controller still avoids reloads.
pub struct DetachedMedia {
    engine: AudioEngine,
}

impl DetachedMedia {
    pub fn attach(ctx: &PlayerContext) -> Option<Self> {
        Some(Self {
            engine: ctx.engine.clone(),
        })
    }
}

impl MediaElement for DetachedMedia {
    fn source(&self) -> Option<String> {
        self.engine.last_src.borrow().clone()
    }

    fn set_source(&mut self, url: &str) {
        *self.engine.last_src.borrow_mut() = Some(url.to_string());
    }

    fn play(&mut self) -> Result<()> {
        debug!("no audio output on this platform");
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_current_time(&mut self, _seconds: f64) {}

    fn set_volume(&mut self, _volume: f64) {}

    fn set_muted(&mut self, _muted: bool) {}
}

#[component]
pub fn AudioController() -> Element {
    let ctx = use_context::<PlayerContext>();

    use_effect(move || {
        ctx.dispatch(|controller| {
            controller.apply_output_levels();
            controller.sync_source();
        });
    });

    rsx! {}
}
