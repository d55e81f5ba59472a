use std::f32::consts::PI;

use glam::{Vec2, Vec3, Vec4};

use crate::sky::celestial::CelestialConfig;

/// Direction the shade gradient fades; darkness pools at the opposite
/// edge and thins toward the light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeDirection {
    Left,
    Right,
}

/// Fan of volumetric rays emanating from the light source
#[derive(Debug, Clone, Copy)]
pub struct RayFan {
    pub count: u32,
    pub rotation_step_deg: f32,
    /// Horizontal stretch applied to each ray
    pub scale_x: f32,
    pub opacity: f32,
    pub color: Vec4,
}

/// Shadow gradient cast opposite the light source
#[derive(Debug, Clone, Copy)]
pub struct DirectionalShade {
    pub direction: ShadeDirection,
    pub strength: f32,
    /// How far into the stage the shade reaches, container percent
    pub extent_percent: f32,
}

/// Primary scene lighting derived from the celestial position.
///
/// Bundles the radial key light, the ray fan and the directional shade the
/// render adapter paints over the skyline layers.
#[derive(Debug, Clone, Copy)]
pub struct SceneLight {
    /// Light source anchor, same arc as the celestial body
    pub position_percent: Vec2,
    /// Key light color
    pub color: Vec3,
    /// Key light intensity, peaking at the arc apex
    pub intensity: f32,
    pub rays: RayFan,
    pub shade: DirectionalShade,
}

const RAY_COUNT: u32 = 6;
const RAY_ROTATION_STEP_DEG: f32 = 60.0;

/// Solve the scene lighting at `phase`.
///
/// Same domain contract as the celestial solver: [0,1], asserted in debug
/// builds and clamped in release builds.
pub fn light_for(config: &CelestialConfig, phase: f32, baseline_percent: f32) -> SceneLight {
    debug_assert!(
        (0.0..=1.0).contains(&phase),
        "phase {phase} outside [0,1]"
    );
    let phase = phase.clamp(0.0, 1.0);

    let intensity = (phase * PI).sin().max(0.0);
    let position = Vec2::new(
        phase * 100.0,
        baseline_percent - intensity * config.arc_amplitude,
    );

    // Key light runs cool moonlight -> warm sunlight -> back
    let color = if phase < 0.25 {
        config.moon_inner.lerp(config.sun_inner, phase / 0.25)
    } else if phase < 0.75 {
        config.sun_inner
    } else {
        config.sun_inner.lerp(config.moon_inner, (phase - 0.75) / 0.25)
    };

    let ray_color = if phase < 0.25 {
        let t = phase / 0.25;
        Vec4::new(0.82, 0.82, 1.0, 0.15 + t * 0.1)
    } else if phase < 0.75 {
        Vec4::new(1.0, 1.0, 0.78, 0.25)
    } else {
        let t = (phase - 0.75) / 0.25;
        Vec4::new(1.0, 0.78, 0.39, 0.25 - t * 0.1)
    };

    // Shade pools at the edge opposite the light and fades toward it,
    // deepest when the source sits far across the stage
    let (direction, far_edge) = if position.x > 50.0 {
        (ShadeDirection::Right, 0.0)
    } else {
        (ShadeDirection::Left, 100.0)
    };
    let reach = (position.x - far_edge).abs() / 100.0;

    SceneLight {
        position_percent: position,
        color,
        intensity: intensity * 0.4,
        rays: RayFan {
            count: RAY_COUNT,
            rotation_step_deg: RAY_ROTATION_STEP_DEG,
            scale_x: intensity * 20.0,
            opacity: intensity * 0.8,
            color: ray_color,
        },
        shade: DirectionalShade {
            direction,
            strength: (0.5 + intensity * 0.3) * reach * 0.7,
            extent_percent: 60.0 * intensity,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_light_peaks_at_apex() {
        let config = CelestialConfig::default();

        let apex = light_for(&config, 0.5, 80.0);
        assert!((apex.intensity - 0.4).abs() < 1e-6);
        assert!((apex.color - config.sun_inner).abs().max_element() < 1e-6);

        let horizon = light_for(&config, 0.0, 80.0);
        assert!(horizon.intensity.abs() < 1e-6);
        assert!((horizon.color - config.moon_inner).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_ray_fan_geometry() {
        let config = CelestialConfig::default();
        let apex = light_for(&config, 0.5, 80.0);

        assert_eq!(apex.rays.count, 6);
        assert_eq!(apex.rays.rotation_step_deg, 60.0);
        assert!((apex.rays.scale_x - 20.0).abs() < 1e-5);
        assert!((apex.rays.opacity - 0.8).abs() < 1e-5);

        // Rays collapse at the horizon
        let horizon = light_for(&config, 1.0, 80.0);
        assert!(horizon.rays.scale_x.abs() < 1e-5);
    }

    #[test]
    fn test_shade_flips_at_center() {
        let config = CelestialConfig::default();

        let morning = light_for(&config, 0.2, 80.0);
        assert_eq!(morning.shade.direction, ShadeDirection::Left);

        let afternoon = light_for(&config, 0.8, 80.0);
        assert_eq!(afternoon.shade.direction, ShadeDirection::Right);

        // Shade reaches furthest at the apex and collapses at the horizon
        assert!((light_for(&config, 0.5, 80.0).shade.extent_percent - 60.0).abs() < 1e-5);
        assert!(light_for(&config, 0.0, 80.0).shade.extent_percent.abs() < 1e-5);
    }
}
