//! Colour scale registry
//!
//! Loads named colour scales from colourscales.json (embedded at compile
//! time) and provides access by name. Scales are ordered colour lists;
//! trace styling looks colours up by series index, wrapping around when
//! the index exceeds the scale length.

use log::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Embedded colourscales.json content
const COLOUR_SCALES_JSON: &str = include_str!("../colourscales.json");

/// Global colour scale registry, initialized lazily on first access
pub static COLOUR_SCALE_REGISTRY: Lazy<ColourScaleRegistry> = Lazy::new(|| {
    ColourScaleRegistry::from_json(COLOUR_SCALES_JSON).unwrap_or_else(|e| {
        warn!("failed to load colourscales.json: {e}");
        ColourScaleRegistry::default()
    })
});

/// Default colour scale name used when the caller supplies none
pub const DEFAULT_COLOUR_SCALE: &str = "dflt";

/// Colour used when a scale is empty or a colour string is invalid
const FALLBACK_COLOUR: &str = "#808080";

/// A named, ordered list of hex colours
#[derive(Debug, Clone, Deserialize)]
pub struct ColourScale {
    pub name: String,
    pub colors: Vec<String>,
}

impl ColourScale {
    /// Get a colour by series index (wraps around past the end of the scale)
    pub fn colour(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return FALLBACK_COLOUR;
        }
        &self.colors[index % self.colors.len()]
    }

    /// Number of colours in this scale
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the scale is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Registry of all available colour scales
#[derive(Debug, Clone, Default)]
pub struct ColourScaleRegistry {
    /// All scales by name (lowercase keys for case-insensitive lookup)
    scales: HashMap<String, ColourScale>,
}

impl ColourScaleRegistry {
    /// Load colour scales from JSON string
    pub fn from_json(json: &str) -> Result<Self, String> {
        let definitions: Vec<ColourScale> = serde_json::from_str(json)
            .map_err(|e| format!("failed to parse colour scales JSON: {e}"))?;

        let mut registry = Self::default();
        for def in definitions {
            for colour in &def.colors {
                if !is_valid_hex_colour(colour) {
                    warn!("scale '{}' has invalid colour '{}'", def.name, colour);
                }
            }
            registry.scales.insert(def.name.to_lowercase(), def);
        }

        Ok(registry)
    }

    /// Get a scale by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&ColourScale> {
        self.scales.get(&name.to_lowercase())
    }

    /// Number of registered scales
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

/// Get the default colour scale
///
/// The default is the `"dflt"` scale from the embedded registry. The scale
/// is compiled into the binary, so the lookup cannot fail at runtime.
pub fn default_colour_scale() -> &'static ColourScale {
    COLOUR_SCALE_REGISTRY
        .get(DEFAULT_COLOUR_SCALE)
        .expect("default colour scale 'dflt' not found")
}

/// Check a hex colour string: `#RRGGBB`, optionally `#RRGGBBAA`
fn is_valid_hex_colour(colour: &str) -> bool {
    let hex = colour.trim_start_matches('#');
    (hex.len() == 6 || hex.len() == 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
