use crate::settings::PlayerSettings;
use dioxus::logger::tracing::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Repeat mode for playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RepeatMode {
    #[default]
    Off,
    One,
    All,
}

impl RepeatMode {
    /// Next mode in the button cycle: Off, One, All, then back to Off.
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::One,
            RepeatMode::One => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }
}

/// Everything the transport controls show, mirrored from the media element.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportState {
    pub current_index: usize,
    pub is_playing: bool,
    /// Seconds into the current track.
    pub current_time: f64,
    /// Track length in seconds, 0 until metadata arrives.
    pub duration: f64,
    pub volume: f64,
    pub is_muted: bool,
    pub repeat_mode: RepeatMode,
    pub shuffle: bool,
}

impl Default for TransportState {
    fn default() -> Self {
        Self::from_settings(&PlayerSettings::default())
    }
}

impl TransportState {
    pub fn from_settings(settings: &PlayerSettings) -> Self {
        let mut state = Self {
            current_index: 0,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 0.0,
            is_muted: false,
            repeat_mode: settings.repeat_mode,
            shuffle: settings.shuffle,
        };
        state.set_volume(settings.volume);
        state
    }

    /// Index `next` should move to for a playlist of `len` tracks.
    ///
    /// With shuffle on a random index other than the current one is drawn;
    /// a single-track playlist is the only case allowed to repeat itself.
    pub fn next_index<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if !self.shuffle {
            return Some((self.current_index + 1) % len);
        }
        loop {
            let candidate = rng.gen_range(0..len);
            if candidate != self.current_index || len <= 1 {
                return Some(candidate);
            }
        }
    }

    pub fn previous_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some((self.current_index % len + len - 1) % len)
    }

    /// Clamps and stores the volume. A volume of zero reads as muted.
    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.volume = volume;
        self.is_muted = volume == 0.0;
    }

    pub fn cycle_repeat_mode(&mut self) {
        self.repeat_mode = self.repeat_mode.cycled();
    }

    /// Playback could not start; the user has to press play again.
    pub fn on_play_rejected(&mut self, reason: &str) {
        warn!(index = self.current_index, reason, "playback failed");
        self.is_playing = false;
    }

    /// Elapsed share of the track in percent, 0 while the duration is unknown.
    pub fn progress_percent(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(index: usize) -> TransportState {
        TransportState {
            current_index: index,
            ..TransportState::default()
        }
    }

    #[test]
    fn repeat_mode_cycles_off_one_all() {
        let mut state = TransportState::default();
        assert_eq!(state.repeat_mode, RepeatMode::Off);
        state.cycle_repeat_mode();
        assert_eq!(state.repeat_mode, RepeatMode::One);
        state.cycle_repeat_mode();
        assert_eq!(state.repeat_mode, RepeatMode::All);
        state.cycle_repeat_mode();
        assert_eq!(state.repeat_mode, RepeatMode::Off);
    }

    #[test]
    fn next_wraps_around_three_tracks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = at(0);
        let mut visited = Vec::new();
        for _ in 0..3 {
            state.current_index = state.next_index(3, &mut rng).unwrap();
            visited.push(state.current_index);
        }
        assert_eq!(visited, vec![1, 2, 0]);
    }

    #[test]
    fn previous_wraps_to_last() {
        assert_eq!(at(0).previous_index(3), Some(2));
        assert_eq!(at(2).previous_index(3), Some(1));
    }

    #[test]
    fn empty_playlist_has_no_neighbours() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(at(0).next_index(0, &mut rng), None);
        assert_eq!(at(0).previous_index(0), None);
    }

    #[test]
    fn shuffle_with_single_track_stays_put() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = TransportState {
            shuffle: true,
            ..at(0)
        };
        assert_eq!(state.next_index(1, &mut rng), Some(0));
    }

    #[test]
    fn default_volume_is_seventy_percent_and_unmuted() {
        let state = TransportState::default();
        assert!((state.volume - 0.7).abs() < 1e-9);
        assert!(!state.is_muted);
    }

    #[test]
    fn volume_is_clamped() {
        let mut state = TransportState::default();
        state.set_volume(1.5);
        assert!((state.volume - 1.0).abs() < 1e-9);
        state.set_volume(f64::NAN);
        assert_eq!(state.volume, 0.0);
        assert!(state.is_muted);
    }

    #[test]
    fn progress_is_zero_without_duration() {
        let state = TransportState {
            current_time: 12.0,
            ..TransportState::default()
        };
        assert_eq!(state.progress_percent(), 0.0);

        let state = TransportState {
            current_time: 30.0,
            duration: 120.0,
            ..TransportState::default()
        };
        assert!((state.progress_percent() - 25.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn next_stays_in_range(len in 1usize..64, start in 0usize..64, shuffle in any::<bool>(), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = TransportState { current_index: start % len, shuffle, ..TransportState::default() };
            let next = state.next_index(len, &mut rng).unwrap();
            prop_assert!(next < len);
            if shuffle && len > 1 {
                prop_assert_ne!(next, state.current_index);
            }
        }

        #[test]
        fn sequential_next_visits_every_track(len in 1usize..32, start in 0usize..32) {
            let mut rng = StdRng::seed_from_u64(0);
            let mut state = at(start % len);
            let mut seen = std::collections::HashSet::new();
            for _ in 0..len {
                state.current_index = state.next_index(len, &mut rng).unwrap();
                seen.insert(state.current_index);
            }
            prop_assert_eq!(seen.len(), len);
            prop_assert_eq!(state.current_index, start % len);
        }

        #[test]
        fn previous_then_next_is_identity(len in 2usize..64, start in 0usize..64) {
            let mut rng = StdRng::seed_from_u64(0);
            let mut state = at(start % len);
            state.current_index = state.previous_index(len).unwrap();
            state.current_index = state.next_index(len, &mut rng).unwrap();
            prop_assert_eq!(state.current_index, start % len);
        }

        #[test]
        fn zero_volume_means_muted(volume in 0.0f64..=1.0) {
            let mut state = TransportState::default();
            state.set_volume(volume);
            prop_assert_eq!(state.is_muted, volume == 0.0);
            state.set_volume(0.0);
            prop_assert!(state.is_muted);
        }

        #[test]
        fn three_repeat_cycles_are_identity(start in 0u8..3) {
            let mode = match start { 0 => RepeatMode::Off, 1 => RepeatMode::One, _ => RepeatMode::All };
            prop_assert_eq!(mode.cycled().cycled().cycled(), mode);
        }
    }
}
