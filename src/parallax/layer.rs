use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Compose a parallax translation: `offset = pointer * depth`, componentwise.
///
/// Pure scalar multiply; layers differ only in their depth coefficient, so
/// nearer layers drift further for the same pointer motion.
pub fn offset_for(pointer: Vec2, depth: Vec2) -> Vec2 {
    pointer * depth
}

/// The compositional role a layer plays in the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    SkylineBack,
    SkylineMid,
    SkylineFront,
    CityLights,
    StarsDistant,
    StarsMid,
    StarsNear,
}

/// Depth assignment for one layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayerConfig {
    pub role: LayerRole,
    pub depth: Vec2,
}

impl LayerConfig {
    /// Layer stack of the showcase hero: skyline triplet, city lights and
    /// three star bands (star bands drift on x only).
    pub fn showcase_layers() -> Vec<LayerConfig> {
        vec![
            LayerConfig { role: LayerRole::SkylineBack, depth: Vec2::new(-10.0, -5.0) },
            LayerConfig { role: LayerRole::SkylineMid, depth: Vec2::new(-20.0, -10.0) },
            LayerConfig { role: LayerRole::SkylineFront, depth: Vec2::new(-30.0, -15.0) },
            LayerConfig { role: LayerRole::CityLights, depth: Vec2::new(-40.0, -25.0) },
            LayerConfig { role: LayerRole::StarsDistant, depth: Vec2::new(-5.0, 0.0) },
            LayerConfig { role: LayerRole::StarsMid, depth: Vec2::new(-15.0, 0.0) },
            LayerConfig { role: LayerRole::StarsNear, depth: Vec2::new(-35.0, 0.0) },
        ]
    }
}

/// Phase-driven CSS-style filter values for a skyline layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFilter {
    pub brightness: f32,
    pub contrast: f32,
    pub sepia: f32,
}

/// Keyframe curve over the four regime anchors, wrapping like the palette
struct FilterCurve {
    anchors: [LayerFilter; 4],
}

impl FilterCurve {
    const MID: FilterCurve = FilterCurve {
        anchors: [
            LayerFilter { brightness: 0.8, contrast: 1.0, sepia: 0.0 },
            LayerFilter { brightness: 0.95, contrast: 1.0, sepia: 0.1 },
            LayerFilter { brightness: 1.1, contrast: 1.05, sepia: 0.05 },
            LayerFilter { brightness: 0.95, contrast: 1.0, sepia: 0.1 },
        ],
    };

    const FRONT: FilterCurve = FilterCurve {
        anchors: [
            LayerFilter { brightness: 0.85, contrast: 1.1, sepia: 0.0 },
            LayerFilter { brightness: 1.0, contrast: 1.1, sepia: 0.15 },
            LayerFilter { brightness: 1.2, contrast: 1.05, sepia: 0.05 },
            LayerFilter { brightness: 1.0, contrast: 1.1, sepia: 0.15 },
        ],
    };

    fn sample(&self, phase: f32) -> LayerFilter {
        let phase = phase.rem_euclid(1.0);
        let scaled = phase * 4.0;
        let regime = (scaled as usize).min(3);
        let t = scaled - regime as f32;
        let from = self.anchors[regime];
        let to = self.anchors[(regime + 1) % 4];
        LayerFilter {
            brightness: from.brightness + (to.brightness - from.brightness) * t,
            contrast: from.contrast + (to.contrast - from.contrast) * t,
            sepia: from.sepia + (to.sepia - from.sepia) * t,
        }
    }
}

/// A registered parallax layer.
///
/// Holds the validated depth coefficient; the shared pointer offset is read
/// per tick and never stored here.
#[derive(Debug, Clone)]
pub struct ParallaxLayer {
    role: LayerRole,
    depth: Vec2,
}

impl ParallaxLayer {
    /// Validate and register a layer. Non-finite depth coefficients are
    /// configuration errors, not runtime surprises.
    pub fn new(config: LayerConfig) -> EngineResult<Self> {
        if !config.depth.is_finite() {
            return Err(EngineError::NonFiniteDepth {
                layer: format!("{:?}", config.role),
            });
        }
        Ok(Self {
            role: config.role,
            depth: config.depth,
        })
    }

    pub fn role(&self) -> LayerRole {
        self.role
    }

    pub fn depth(&self) -> Vec2 {
        self.depth
    }

    /// Translation for the current pointer offset
    pub fn offset(&self, pointer: Vec2) -> Vec2 {
        offset_for(pointer, self.depth)
    }

    /// Phase-driven filter for skyline layers; other roles carry none
    pub fn filter(&self, phase: f32) -> Option<LayerFilter> {
        match self.role {
            LayerRole::SkylineMid => Some(FilterCurve::MID.sample(phase)),
            LayerRole::SkylineFront => Some(FilterCurve::FRONT.sample(phase)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_scalar_multiply() {
        let offset = offset_for(Vec2::new(0.5, -0.3), Vec2::splat(-10.0));
        assert_eq!(offset, Vec2::new(-5.0, 3.0));
    }

    #[test]
    fn test_zero_pointer_yields_zero_offset() {
        for config in LayerConfig::showcase_layers() {
            let layer = ParallaxLayer::new(config).expect("finite preset");
            assert_eq!(layer.offset(Vec2::ZERO), Vec2::ZERO);
        }
    }

    #[test]
    fn test_depth_ordering() {
        let pointer = Vec2::new(1.0, 1.0);
        let back = ParallaxLayer::new(LayerConfig {
            role: LayerRole::SkylineBack,
            depth: Vec2::new(-10.0, -5.0),
        })
        .expect("finite");
        let front = ParallaxLayer::new(LayerConfig {
            role: LayerRole::SkylineFront,
            depth: Vec2::new(-30.0, -15.0),
        })
        .expect("finite");

        // Nearer layers drift further
        assert!(front.offset(pointer).length() > back.offset(pointer).length());
    }

    #[test]
    fn test_non_finite_depth_rejected() {
        let result = ParallaxLayer::new(LayerConfig {
            role: LayerRole::CityLights,
            depth: Vec2::new(f32::NAN, 0.0),
        });
        assert!(matches!(result, Err(EngineError::NonFiniteDepth { .. })));
    }

    #[test]
    fn test_filter_continuity() {
        let layer = ParallaxLayer::new(LayerConfig {
            role: LayerRole::SkylineMid,
            depth: Vec2::new(-20.0, -10.0),
        })
        .expect("finite");

        for boundary in [0.25f32, 0.5, 0.75] {
            let before = layer.filter(boundary - 1e-5).expect("skyline filter");
            let after = layer.filter(boundary + 1e-5).expect("skyline filter");
            assert!((before.brightness - after.brightness).abs() < 1e-3);
            assert!((before.sepia - after.sepia).abs() < 1e-3);
        }

        // Star bands carry no filter
        let stars = ParallaxLayer::new(LayerConfig {
            role: LayerRole::StarsNear,
            depth: Vec2::new(-35.0, 0.0),
        })
        .expect("finite");
        assert!(stars.filter(0.5).is_none());
    }
}
