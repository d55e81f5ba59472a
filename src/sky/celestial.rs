use std::f32::consts::PI;

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Position, palette and glow of the luminous body at one instant
#[derive(Debug, Clone, Copy)]
pub struct CelestialState {
    /// Anchor in container percent; x sweeps left to right over one cycle
    pub position_percent: Vec2,
    /// sin(phase * PI), the arc intensity curve
    pub vertical_intensity: f32,
    /// Glow halo radius in px
    pub glow_radius: f32,
    /// Glow halo spread in px
    pub glow_spread: f32,
    /// Glow color with intensity-scaled alpha
    pub glow_color: Vec4,
    /// Body gradient center color
    pub body_color_inner: Vec3,
    /// Body gradient rim color
    pub body_color_outer: Vec3,
    /// Body opacity, 0.3 at the horizon endpoints up to 1.0 at the apex
    pub opacity: f32,
}

/// Arc geometry and sun/moon palettes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CelestialConfig {
    /// Horizon baseline in container percent
    pub baseline_percent: f32,
    /// Baseline on compact viewports, where the body rides higher
    pub compact_baseline_percent: f32,
    /// Vertical arc amplitude in container percent
    pub arc_amplitude: f32,
    pub sun_inner: Vec3,
    pub sun_outer: Vec3,
    pub moon_inner: Vec3,
    pub moon_outer: Vec3,
    /// Glow tint at full day
    pub sun_glow: Vec3,
    /// Glow tint at deep night
    pub moon_glow: Vec3,
}

impl Default for CelestialConfig {
    fn default() -> Self {
        Self {
            baseline_percent: 80.0,
            compact_baseline_percent: 60.0,
            arc_amplitude: 60.0,
            sun_inner: Vec3::new(1.0, 1.0, 0.78),
            sun_outer: Vec3::new(1.0, 0.78, 0.39),
            moon_inner: Vec3::new(0.82, 0.82, 1.0),
            moon_outer: Vec3::new(0.39, 0.39, 0.78),
            sun_glow: Vec3::new(1.0, 0.78, 0.39),
            moon_glow: Vec3::new(0.82, 0.82, 1.0),
        }
    }
}

impl CelestialConfig {
    /// Solve the body state at `phase` against `baseline_percent`.
    ///
    /// The intensity curve `sin(phase * PI)` is only valid over [0,1];
    /// callers must not leave that domain. Debug builds assert, release
    /// builds clamp into [0,1] and keep going.
    pub fn position_for(&self, phase: f32, baseline_percent: f32) -> CelestialState {
        debug_assert!(
            (0.0..=1.0).contains(&phase),
            "phase {phase} outside [0,1]"
        );
        let phase = phase.clamp(0.0, 1.0);

        let vertical_intensity = (phase * PI).sin();
        let intensity = vertical_intensity.max(0.0);

        // Moon blends into the sun through dawn, back out through dusk
        let (inner, outer, glow_rgb, glow_alpha) = if phase < 0.25 {
            let t = phase / 0.25;
            (
                self.moon_inner.lerp(self.sun_inner, t),
                self.moon_outer.lerp(self.sun_outer, t),
                self.moon_glow.lerp(self.sun_glow, t),
                intensity * (0.7 + 0.1 * t),
            )
        } else if phase < 0.75 {
            (
                self.sun_inner,
                self.sun_outer,
                self.sun_glow,
                intensity * 0.8,
            )
        } else {
            let t = (phase - 0.75) / 0.25;
            (
                self.sun_inner.lerp(self.moon_inner, t),
                self.sun_outer.lerp(self.moon_outer, t),
                self.sun_glow.lerp(self.moon_glow, t),
                intensity * (0.8 - 0.1 * t),
            )
        };

        CelestialState {
            position_percent: Vec2::new(
                phase * 100.0,
                baseline_percent - vertical_intensity * self.arc_amplitude,
            ),
            vertical_intensity,
            glow_radius: intensity * 50.0 + 10.0,
            glow_spread: intensity * 20.0 + 5.0,
            glow_color: Vec4::new(glow_rgb.x, glow_rgb.y, glow_rgb.z, glow_alpha),
            body_color_inner: inner,
            body_color_outer: outer,
            opacity: intensity * 0.7 + 0.3,
        }
    }
}
