use super::media_element::{describe_js_error, get_or_create_audio_element};
use super::AudioEngine;
use crate::error::{PlayerError, Result};
use crate::player::{VisualizerFrame, FFT_SIZE, FREQUENCY_BINS};
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, AnalyserNode, AudioContext, AudioContextState, HtmlAudioElement};

/// The media element routed through an analyser on its way to the speakers.
pub struct WebAudioGraph {
    context: AudioContext,
    analyser: AnalyserNode,
}

impl WebAudioGraph {
    pub fn connect(audio: &HtmlAudioElement) -> Result<Self> {
        let unavailable = |err: JsValue| PlayerError::GraphUnavailable(describe_js_error(&err));
        let context = AudioContext::new().map_err(unavailable)?;
        let analyser = context.create_analyser().map_err(unavailable)?;
        analyser.set_fft_size(FFT_SIZE);

        // An element can only feed one source node; a second attempt throws
        // and the existing routing keeps working.
        let spliced = context
            .create_media_element_source(audio)
            .and_then(|source| source.connect_with_audio_node(&analyser))
            .and_then(|_| analyser.connect_with_audio_node(&context.destination()));
        if let Err(err) = spliced {
            debug!(reason = %describe_js_error(&err), "audio already connected");
        }

        info!(bins = FREQUENCY_BINS, "audio graph ready");
        Ok(Self { context, analyser })
    }

    pub fn resume_if_suspended(&self) {
        if self.context.state() != AudioContextState::Suspended {
            return;
        }
        if let Err(err) = self.context.resume() {
            debug!(reason = %describe_js_error(&err), "audio context refused to resume");
        }
    }

    pub fn sample(&self) -> VisualizerFrame {
        let mut bins = [0u8; FREQUENCY_BINS];
        self.analyser.get_byte_frequency_data(&mut bins);
        VisualizerFrame::from_bins(&bins)
    }
}

impl AudioEngine {
    /// Builds the graph on the first user gesture; later calls only resume it.
    pub(super) fn init_graph(&self) {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        let mut slot = self.graph.borrow_mut();
        if let Some(graph) = slot.ensure_with(|| WebAudioGraph::connect(&audio)) {
            graph.resume_if_suspended();
        }
    }
}

/// Resolves on the next display refresh.
async fn next_animation_frame() {
    let Some(window) = window() else {
        gloo_timers::future::TimeoutFuture::new(16).await;
        return;
    };
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if window.request_animation_frame(&resolve).is_err() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Publishes the analyser output once per display refresh for the lifetime
/// of the page. Frames are skipped until the graph exists.
pub(super) fn spawn_frame_sampler(engine: AudioEngine, mut frame: Signal<VisualizerFrame>) {
    spawn(async move {
        loop {
            next_animation_frame().await;
            let sampled = engine.graph.borrow().get().map(WebAudioGraph::sample);
            if let Some(latest) = sampled {
                if *frame.peek() != latest {
                    frame.set(latest);
                }
            }
        }
    });
}
