//! Audio Manager - Binds the transport controller to the page's audio element.
//! Browser wiring only exists on wasm; other targets drive a detached element
//! so the state machine and UI keep working.

use crate::library::Track;
use crate::player::{Controller, MediaEvent, TransportState, VisualizerFrame};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::player::GraphSlot;

// Web Audio graph construction and the per-frame spectrum sampler.
#[cfg(target_arch = "wasm32")]
mod audio_graph;
// `<audio>` element lookup and its `MediaElement` implementation.
#[cfg(target_arch = "wasm32")]
mod media_element;
// Media Session, visibility and wake lock integration.
#[cfg(target_arch = "wasm32")]
mod platform;
// Web (wasm) audio controller component.
#[cfg(target_arch = "wasm32")]
mod controller_web;
// Native audio controller component.
#[cfg(not(target_arch = "wasm32"))]
mod controller_native;

#[cfg(not(target_arch = "wasm32"))]
pub use controller_native::AudioController;
#[cfg(target_arch = "wasm32")]
pub use controller_web::AudioController;

#[cfg(not(target_arch = "wasm32"))]
type PageMedia = controller_native::DetachedMedia;
#[cfg(target_arch = "wasm32")]
type PageMedia = media_element::WebAudioElement;

/// Page-lifetime audio resources shared by the controller and the sampler.
#[derive(Clone, Default)]
pub struct AudioEngine {
    /// Source last assigned to the element, compared before reloading.
    last_src: Rc<RefCell<Option<String>>>,
    #[cfg(target_arch = "wasm32")]
    graph: Rc<RefCell<GraphSlot<audio_graph::WebAudioGraph>>>,
}

/// Player state provided to every component through context.
#[derive(Clone)]
pub struct PlayerContext {
    pub playlist: Signal<Vec<Track>>,
    pub transport: Signal<TransportState>,
    pub frame: Signal<VisualizerFrame>,
    pub playlist_open: Signal<bool>,
    engine: AudioEngine,
}

impl PlayerContext {
    pub fn new(
        playlist: Signal<Vec<Track>>,
        transport: Signal<TransportState>,
        frame: Signal<VisualizerFrame>,
        playlist_open: Signal<bool>,
    ) -> Self {
        Self {
            playlist,
            transport,
            frame,
            playlist_open,
            engine: AudioEngine::default(),
        }
    }

    /// Runs one transition against the live transport state and the page's
    /// media element. Returns `None` when there is no element to drive.
    pub fn dispatch<R>(&self, f: impl FnOnce(&mut Controller<'_, PageMedia>) -> R) -> Option<R> {
        let mut media = PageMedia::attach(self)?;
        let playlist = self.playlist.peek();
        let mut transport = self.transport;
        let mut state = transport.write();
        let mut controller = Controller::new(&mut state, playlist.as_slice(), &mut media);
        Some(f(&mut controller))
    }

    pub fn handle_media_event(&self, event: MediaEvent) {
        self.dispatch(|controller| controller.handle_media_event(event));
    }
}
