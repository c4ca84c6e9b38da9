//! User settings
//!
//! Persisted in LocalStorage on the web. Only configuration is stored, never a
//! traced path.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{DialId, DialLayout, SimulationConfig};

/// Simulation and display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Starting increment of the first dial (degrees per tick)
    pub first_increment: f32,
    /// Starting increment of the second dial (degrees per tick)
    pub second_increment: f32,
    /// Stop once the figure closes instead of tracing over it forever
    pub halt_on_closure: bool,

    // === Display ===
    /// Dashed guides from each dial tip to the tracer point
    pub show_guides: bool,
    /// Stroke width (CSS pixels)
    pub line_width: f32,
    /// Radius of the dot marking the newest tracer point (CSS pixels)
    pub tracer_dot_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_increment: FIRST_DIAL_INCREMENT,
            second_increment: SECOND_DIAL_INCREMENT,
            halt_on_closure: true,

            show_guides: true,
            line_width: 1.0,
            tracer_dot_radius: 1.0,
        }
    }
}

impl Settings {
    /// Simulation parameters for the given dial layout
    pub fn simulation_config(&self, layout: DialLayout) -> SimulationConfig {
        SimulationConfig {
            layout,
            first_increment: self.first_increment,
            second_increment: self.second_increment,
            halt_on_closure: self.halt_on_closure,
        }
    }

    /// Remember a dial's current increment as its starting value
    pub fn remember_increment(&mut self, id: DialId, increment: f32) {
        match id {
            DialId::First => self.first_increment = increment,
            DialId::Second => self.second_increment = increment,
        }
    }

    /// Parse settings JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!("Ignoring stored settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "twin_dials_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                        log::warn!("Failed to write settings to LocalStorage");
                    } else {
                        log::debug!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let settings = Settings::default();
        assert_eq!(settings.first_increment, 4.0);
        assert_eq!(settings.second_increment, 3.0);
        assert!(settings.halt_on_closure);
    }

    #[test]
    fn test_json_roundtrip_and_partial() {
        let mut settings = Settings::default();
        settings.remember_increment(DialId::Second, -2.0);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json), settings);

        // Missing fields fall back to defaults
        let partial = Settings::from_json(r#"{"first_increment": 7.0}"#);
        assert_eq!(partial.first_increment, 7.0);
        assert_eq!(partial.second_increment, 3.0);
        assert!(partial.show_guides);
    }

    #[test]
    fn test_corrupt_json_uses_defaults() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }

    #[test]
    fn test_simulation_config() {
        let settings = Settings {
            halt_on_closure: false,
            ..Settings::default()
        };
        let config = settings.simulation_config(DialLayout::for_size(400.0));
        assert_eq!(config.first_increment, 4.0);
        assert!(!config.halt_on_closure);
        assert_eq!(config.layout.radius, 75.0);
    }
}
