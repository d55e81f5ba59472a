use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::parallax::{LayerConfig, ParallaxLayer};
use crate::scene::GenerationConfig;
use crate::sky::{CelestialConfig, SkyPalette};
use crate::time::CycleConfig;

/// Full engine configuration.
///
/// Every numeric here is visual tuning, not algorithm: the defaults encode
/// the showcase look and a TOML file can override any of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub cycle: CycleConfig,
    pub palette: SkyPalette,
    pub celestial: CelestialConfig,
    pub layers: Vec<LayerConfig>,
    pub generation: GenerationConfig,
    /// Fixed generation seed; omit for a fresh scene per mount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cycle: CycleConfig::default(),
            palette: SkyPalette::default(),
            celestial: CelestialConfig::default(),
            layers: LayerConfig::showcase_layers(),
            generation: GenerationConfig::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Load and validate a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with
    pub fn validate(&self) -> EngineResult<()> {
        if !self.cycle.increment.is_finite() || self.cycle.increment <= 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "cycle.increment".to_string(),
            });
        }
        if self.cycle.increment >= 1.0 {
            return Err(EngineError::InvalidConfig {
                field: "cycle.increment".to_string(),
            });
        }
        if self.cycle.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig {
                field: "cycle.tick_interval_ms".to_string(),
            });
        }
        if !self.celestial.arc_amplitude.is_finite()
            || !self.celestial.baseline_percent.is_finite()
            || !self.celestial.compact_baseline_percent.is_finite()
        {
            return Err(EngineError::InvalidConfig {
                field: "celestial".to_string(),
            });
        }
        for layer in &self.layers {
            // Surfaces the same error a layer would raise at registration
            ParallaxLayer::new(*layer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallax::LayerRole;
    use glam::Vec2;

    #[test]
    fn test_default_validates() {
        SceneConfig::default().validate().expect("defaults are sane");
    }

    #[test]
    fn test_bad_increment_rejected() {
        let mut config = SceneConfig::default();
        config.cycle.increment = 0.0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));

        config.cycle.increment = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_layer_rejected() {
        let mut config = SceneConfig::default();
        config.layers.push(LayerConfig {
            role: LayerRole::CityLights,
            depth: Vec2::new(f32::INFINITY, 0.0),
        });
        assert!(matches!(
            config.validate(),
            Err(EngineError::NonFiniteDepth { .. })
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SceneConfig::default();
        let text = toml::to_string(&config).expect("serialize");
        let parsed: SceneConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.cycle.increment, config.cycle.increment);
        assert_eq!(parsed.layers.len(), config.layers.len());
        assert_eq!(parsed.generation.stars_distant, config.generation.stars_distant);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: SceneConfig = toml::from_str(
            r#"
            seed = 9

            [cycle]
            increment = 0.004
            "#,
        )
        .expect("parse");
        assert_eq!(parsed.seed, Some(9));
        assert_eq!(parsed.cycle.increment, 0.004);
        assert_eq!(parsed.cycle.tick_interval_ms, 100);
        assert_eq!(parsed.layers.len(), 7);
    }
}
