//! User preferences restored at startup.

#[cfg(target_arch = "wasm32")]
use crate::error::PlayerError;
use crate::error::Result;
use crate::player::{RepeatMode, TransportState};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "wavebox.player_settings";

const DEFAULT_VOLUME: f64 = 0.7;

/// Preferences stored in the browser between visits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default)]
    pub repeat_mode: RepeatMode,
    #[serde(default)]
    pub shuffle: bool,
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            repeat_mode: RepeatMode::Off,
            shuffle: false,
        }
    }
}

impl PlayerSettings {
    pub fn from_transport(state: &TransportState) -> Self {
        Self {
            volume: state.volume,
            repeat_mode: state.repeat_mode,
            shuffle: state.shuffle,
        }
    }

    fn normalized(mut self) -> Self {
        self.volume = normalize_volume(self.volume);
        self
    }
}

/// Non-finite volume falls back to the default, anything else is clamped.
fn normalize_volume(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        DEFAULT_VOLUME
    }
}

#[cfg(target_arch = "wasm32")]
fn storage_error(err: StorageError) -> PlayerError {
    PlayerError::Storage(err.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> Result<PlayerSettings> {
    match LocalStorage::get::<PlayerSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings.normalized()),
        Err(StorageError::KeyNotFound(_)) => Ok(PlayerSettings::default()),
        Err(err) => Err(storage_error(err)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> Result<PlayerSettings> {
    Ok(PlayerSettings::default().normalized())
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &PlayerSettings) -> Result<()> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(storage_error)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings(_settings: &PlayerSettings) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: PlayerSettings = serde_json::from_str(r#"{"shuffle":true}"#).unwrap();
        assert!(settings.shuffle);
        assert_eq!(settings.repeat_mode, RepeatMode::Off);
        assert!((settings.volume - 0.7).abs() < 1e-9);
    }

    #[test]
    fn stored_volume_is_clamped_into_range() {
        let settings: PlayerSettings = serde_json::from_str(r#"{"volume":5.0}"#).unwrap();
        assert!((settings.normalized().volume - 1.0).abs() < 1e-9);
        assert!((normalize_volume(0.4) - 0.4).abs() < 1e-9);
        assert_eq!(normalize_volume(-3.0), 0.0);
        assert!((normalize_volume(f64::INFINITY) - 0.7).abs() < 1e-9);
        assert!((normalize_volume(f64::NAN) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn settings_mirror_transport() {
        let mut state = TransportState::default();
        state.set_volume(0.3);
        state.shuffle = true;
        state.cycle_repeat_mode();

        let settings = PlayerSettings::from_transport(&state);
        assert!((settings.volume - 0.3).abs() < 1e-9);
        assert!(settings.shuffle);
        assert_eq!(settings.repeat_mode, RepeatMode::One);

        let restored = TransportState::from_settings(&settings);
        assert_eq!(restored.repeat_mode, RepeatMode::One);
        assert!(restored.shuffle);
    }

    #[test]
    fn native_load_uses_defaults() {
        assert_eq!(load_settings().unwrap(), PlayerSettings::default());
        assert!(save_settings(&PlayerSettings::default()).is_ok());
    }
}
