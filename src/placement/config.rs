//! Configuration for the placement resolver

use serde::Deserialize;

/// Tuning constants for placement computation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Minimum distance kept between the floating panel and the viewport's
    /// left and right edges
    pub viewport_margin: f64,

    /// How far the arrow indicator sticks out past the panel edge it is attached to
    pub arrow_inset: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            viewport_margin: 10.0,
            arrow_inset: 6.0,
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport margin
    pub fn with_viewport_margin(mut self, margin: f64) -> Self {
        self.viewport_margin = margin;
        self
    }

    /// Set the arrow inset
    pub fn with_arrow_inset(mut self, inset: f64) -> Self {
        self.arrow_inset = inset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.viewport_margin, 10.0);
        assert_eq!(config.arrow_inset, 6.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_viewport_margin(4.0)
            .with_arrow_inset(8.0);

        assert_eq!(config.viewport_margin, 4.0);
        assert_eq!(config.arrow_inset, 8.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PlacementConfig = toml::from_str("viewport_margin = 0.0").unwrap();
        assert_eq!(config.viewport_margin, 0.0);
        assert_eq!(config.arrow_inset, 6.0);
    }
}
