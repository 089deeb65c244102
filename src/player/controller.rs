//! Transport controller: every user intent and media element event is a
//! transition over [`TransportState`] that may issue commands to a
//! [`MediaElement`].

use super::transport::{RepeatMode, TransportState};
use crate::error::Result;
use crate::library::Track;
use dioxus::logger::tracing::{debug, warn};

/// The native media element as seen by the controller.
pub trait MediaElement {
    /// URL most recently assigned as the element source.
    fn source(&self) -> Option<String>;
    fn set_source(&mut self, url: &str);
    /// Starts playback. An `Err` is a synchronous refusal; implementations
    /// report later rejections through [`MediaEvent::PlayRejected`].
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    fn set_current_time(&mut self, seconds: f64);
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    /// Wakes the audio output graph if the browser suspended it.
    fn resume_output(&mut self) {}
}

/// Events raised by the media element and the page around it.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    MetadataLoaded { duration: f64 },
    TimeUpdate { current_time: f64 },
    Ended,
    PlayRejected { reason: String },
    PageHidden,
}

pub struct Controller<'a, M: MediaElement> {
    state: &'a mut TransportState,
    playlist: &'a [Track],
    media: &'a mut M,
}

impl<'a, M: MediaElement> Controller<'a, M> {
    pub fn new(state: &'a mut TransportState, playlist: &'a [Track], media: &'a mut M) -> Self {
        Self {
            state,
            playlist,
            media,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &TransportState {
        self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.state.current_index)
    }

    pub fn play_pause(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.media.resume_output();
        if self.state.is_playing {
            self.media.pause();
            self.state.is_playing = false;
        } else {
            self.state.is_playing = true;
            self.start_playback();
        }
    }

    /// Starts playback only when currently paused.
    pub fn play(&mut self) {
        if !self.state.is_playing {
            self.play_pause();
        }
    }

    /// Pauses only when currently playing.
    pub fn pause(&mut self) {
        if self.state.is_playing {
            self.play_pause();
        }
    }

    pub fn next(&mut self) {
        self.advance();
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.state.previous_index(self.playlist.len()) {
            self.change_track(index);
        }
    }

    pub fn select_track(&mut self, index: usize) {
        if index >= self.playlist.len() {
            debug!(index, len = self.playlist.len(), "ignoring out of range track");
            return;
        }
        self.change_track(index);
    }

    /// Jumps to `fraction` (0..=1) of the current track.
    pub fn seek(&mut self, fraction: f64) {
        if self.current_track().is_none() {
            return;
        }
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let position = fraction * self.state.duration;
        self.media.set_current_time(position);
        self.state.current_time = position;
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.state.set_volume(volume);
        self.apply_output_levels();
    }

    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.media.set_muted(self.state.is_muted);
    }

    pub fn cycle_repeat_mode(&mut self) {
        self.state.cycle_repeat_mode();
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;
    }

    /// Pushes the mirrored volume and mute flag to the element.
    pub fn apply_output_levels(&mut self) {
        self.media.set_volume(self.state.volume);
        self.media.set_muted(self.state.is_muted);
    }

    /// Points the element at the current track. The source is only
    /// replaced when the URL differs from the one already loaded; returns
    /// whether a reload happened.
    pub fn sync_source(&mut self) -> bool {
        let Some(url) = self.current_track().map(|track| track.url.clone()) else {
            return false;
        };
        if self.media.source().as_deref() == Some(url.as_str()) {
            return false;
        }
        self.media.set_source(&url);
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        if self.state.is_playing {
            self.start_playback();
        }
        true
    }

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded { duration } => {
                self.state.duration = if duration.is_finite() && duration > 0.0 {
                    duration
                } else {
                    0.0
                };
            }
            MediaEvent::TimeUpdate { current_time } => {
                if current_time.is_finite() {
                    self.state.current_time = current_time.max(0.0);
                }
            }
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::PlayRejected { reason } => self.state.on_play_rejected(&reason),
            MediaEvent::PageHidden => {
                if self.state.is_playing {
                    self.start_playback();
                }
            }
        }
    }

    fn on_ended(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            self.state.is_playing = false;
            return;
        }
        if self.state.repeat_mode == RepeatMode::One {
            self.restart();
            return;
        }
        let wraps = self.state.repeat_mode == RepeatMode::All || self.state.shuffle;
        if wraps || self.state.current_index + 1 < len {
            self.state.is_playing = true;
            if !self.advance() {
                // landed on the source that just finished
                self.restart();
            }
        } else {
            self.state.is_playing = false;
        }
    }

    fn restart(&mut self) {
        self.media.set_current_time(0.0);
        self.state.current_time = 0.0;
        self.state.is_playing = true;
        self.start_playback();
    }

    /// Moves to the next index; true when the element got a new source.
    fn advance(&mut self) -> bool {
        let len = self.playlist.len();
        match self.state.next_index(len, &mut rand::thread_rng()) {
            Some(index) => self.change_track(index),
            None => false,
        }
    }

    fn change_track(&mut self, index: usize) -> bool {
        self.state.current_index = index;
        self.sync_source()
    }

    fn start_playback(&mut self) {
        if let Err(err) = self.media.play() {
            warn!(%err, "could not start playback");
            self.state.is_playing = false;
        }
    }
}
