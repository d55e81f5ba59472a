use glam::Vec4;
use serde::{Deserialize, Serialize};

/// Sky, ambient light and star parameters at one instant.
///
/// Derived purely from the cycle phase; recomputed every tick, never mutated
/// in place. Color channels are 0-1 floats with alpha in the w lane.
#[derive(Debug, Clone, Copy)]
pub struct ColorBundle {
    /// Upper stop of the sky gradient
    pub sky_from: Vec4,
    /// Lower stop of the sky gradient
    pub sky_to: Vec4,
    /// Diffuse light color washing over the stage
    pub ambient_light: Vec4,
    /// Brightness filter applied to the whole composition
    pub filter_brightness: f32,
    /// Star field visibility, 0-1
    pub star_visibility: f32,
}

/// Palette values pinned to one regime boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaletteAnchor {
    pub sky_from: Vec4,
    pub sky_to: Vec4,
    pub ambient_light: Vec4,
    pub filter_brightness: f32,
}

/// Day/night keyframe palette.
///
/// Anchors sit at phase 0, 0.25, 0.5 and 0.75; phase 1 wraps back onto the
/// midnight anchor. Sampling interpolates between adjacent anchors, so the
/// bundle is continuous at every regime boundary and closes over the cycle
/// by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyPalette {
    pub midnight: PaletteAnchor,
    pub dawn: PaletteAnchor,
    pub noon: PaletteAnchor,
    pub dusk: PaletteAnchor,
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self {
            midnight: PaletteAnchor {
                sky_from: Vec4::new(0.04, 0.04, 0.16, 1.0), // deep night blue
                sky_to: Vec4::new(0.0, 0.0, 0.0, 1.0),
                ambient_light: Vec4::new(0.39, 0.39, 0.78, 1.0), // moonlight
                filter_brightness: 0.6,
            },
            dawn: PaletteAnchor {
                sky_from: Vec4::new(1.0, 0.78, 0.39, 0.45), // warm gold
                sky_to: Vec4::new(0.12, 0.12, 0.27, 0.6),
                ambient_light: Vec4::new(1.0, 0.78, 0.39, 1.0),
                filter_brightness: 0.85,
            },
            noon: PaletteAnchor {
                sky_from: Vec4::new(0.53, 0.81, 0.98, 1.0), // sky blue
                sky_to: Vec4::new(0.12, 0.12, 0.27, 1.0),
                ambient_light: Vec4::new(1.0, 1.0, 0.78, 1.0), // full sun
                filter_brightness: 1.3,
            },
            dusk: PaletteAnchor {
                sky_from: Vec4::new(1.0, 0.78, 0.39, 0.45),
                sky_to: Vec4::new(0.12, 0.12, 0.27, 0.6),
                ambient_light: Vec4::new(1.0, 0.78, 0.39, 1.0),
                filter_brightness: 1.05,
            },
        }
    }
}

impl SkyPalette {
    /// Sample the palette at `phase`.
    ///
    /// Domain is [0,1]; 1.0 wraps onto 0.0 so the cycle closes. Calling with
    /// a phase outside the domain is a contract violation: debug builds
    /// panic, release builds wrap modulo 1 and keep going.
    pub fn colors_for(&self, phase: f32) -> ColorBundle {
        debug_assert!(
            (0.0..=1.0).contains(&phase),
            "phase {phase} outside [0,1]"
        );
        let phase = phase.rem_euclid(1.0);

        let scaled = phase * 4.0;
        let regime = (scaled as usize).min(3);
        let t = scaled - regime as f32;
        let (from, to) = match regime {
            0 => (&self.midnight, &self.dawn),
            1 => (&self.dawn, &self.noon),
            2 => (&self.noon, &self.dusk),
            _ => (&self.dusk, &self.midnight),
        };

        ColorBundle {
            sky_from: from.sky_from.lerp(to.sky_from, t),
            sky_to: from.sky_to.lerp(to.sky_to, t),
            ambient_light: from.ambient_light.lerp(to.ambient_light, t),
            filter_brightness: from.filter_brightness
                + (to.filter_brightness - from.filter_brightness) * t,
            star_visibility: star_visibility(phase),
        }
    }
}

/// Star visibility over the cycle: full at deep night, zero through the day
/// half, ramping linearly through dawn and dusk.
pub fn star_visibility(phase: f32) -> f32 {
    let phase = phase.rem_euclid(1.0);
    if phase < 0.25 {
        1.0 - phase * 4.0
    } else if phase < 0.75 {
        0.0
    } else {
        (phase - 0.75) * 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_vec4_near(a: Vec4, b: Vec4) {
        assert!(
            (a - b).abs().max_element() < TOLERANCE,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_continuity_at_regime_boundaries() {
        let palette = SkyPalette::default();
        for boundary in [0.25f32, 0.5, 0.75] {
            let before = palette.colors_for(boundary - 1e-5);
            let after = palette.colors_for(boundary + 1e-5);
            assert_vec4_near(before.sky_from, after.sky_from);
            assert_vec4_near(before.sky_to, after.sky_to);
            assert_vec4_near(before.ambient_light, after.ambient_light);
            assert!((before.filter_brightness - after.filter_brightness).abs() < 1e-3);
            assert!((before.star_visibility - after.star_visibility).abs() < 1e-3);
        }
    }

    #[test]
    fn test_cyclic_identity() {
        let palette = SkyPalette::default();
        let start = palette.colors_for(0.0);
        let end = palette.colors_for(1.0);
        assert_vec4_near(start.sky_from, end.sky_from);
        assert_vec4_near(start.ambient_light, end.ambient_light);
        assert!((start.filter_brightness - end.filter_brightness).abs() < 1e-6);
        assert!((start.star_visibility - end.star_visibility).abs() < 1e-6);
    }

    #[test]
    fn test_noon_is_full_day() {
        let bundle = SkyPalette::default().colors_for(0.5);
        assert_vec4_near(bundle.sky_from, Vec4::new(0.53, 0.81, 0.98, 1.0));
        assert_eq!(bundle.star_visibility, 0.0);
        assert!((bundle.filter_brightness - 1.3).abs() < TOLERANCE);
    }

    #[test]
    fn test_star_visibility_curve() {
        // Zero across the day half
        for phase in [0.25f32, 0.4, 0.5, 0.6, 0.74] {
            assert_eq!(star_visibility(phase), 0.0, "phase {phase}");
        }
        // Positive through deep night on both sides
        for phase in [0.0f32, 0.05, 0.1, 0.9, 0.95, 0.99] {
            assert!(star_visibility(phase) > 0.0, "phase {phase}");
        }
        assert!((star_visibility(0.0) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_midnight_is_dark() {
        let bundle = SkyPalette::default().colors_for(0.0);
        assert!(bundle.sky_from.x < 0.1);
        assert!(bundle.filter_brightness < 0.7);
        assert!((bundle.star_visibility - 1.0).abs() < TOLERANCE);
    }
}
