//! Time-varying looks for generated entities.
//!
//! Every function here is a pure mapping from (entity attributes, entity
//! index, elapsed time or phase-derived factors) to a display value, so a
//! regenerated scene picks up the same motion with no extra wiring.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::scene::entity::{Beam, Particle, Star, StarBand, WindowCell};

/// Soft pulse about 0.8 with a per-index phase stagger
pub fn twinkle(index: usize, elapsed: f32, period: f32) -> f32 {
    (elapsed * TAU / period + index as f32 * 0.1).sin() * 0.2 + 0.8
}

/// Star opacity: band twinkle gated by the sky's star visibility
pub fn star_opacity(star: &Star, index: usize, elapsed: f32, star_visibility: f32) -> f32 {
    twinkle(index, elapsed, star.band.bob_period()) * star_visibility
}

/// Vertical bob of a star band: a closed 0 -> -amplitude -> 0 arc
pub fn band_bob(band: StarBand, elapsed: f32) -> f32 {
    let t = elapsed / band.bob_period();
    -band.bob_amplitude() * (PI * t).sin().powi(2)
}

/// Antenna beacon square wave; the period falls out of the entity index so
/// regeneration never changes the blink schedule
pub fn beacon_on(index: usize, elapsed: f32) -> bool {
    let period = 1.0 + (index % 10) as f32 * 0.1;
    (elapsed / period) as u64 % 2 == 0
}

/// Beam opacity envelope: nothing until the beam's delay has passed, then a
/// 2s triangle pulse toward its target opacity
pub fn beam_pulse(beam: &Beam, elapsed: f32) -> f32 {
    let t = elapsed - beam.delay;
    if t <= 0.0 {
        return 0.0;
    }
    let cycle = (t / 2.0).fract();
    let tri = if cycle < 0.5 {
        cycle * 2.0
    } else {
        2.0 - cycle * 2.0
    };
    beam.opacity * tri
}

/// Particle opacity pulse, delayed like the beam envelope
pub fn particle_pulse(particle: &Particle, elapsed: f32) -> f32 {
    let t = elapsed - particle.delay;
    if t <= 0.0 {
        return 0.0;
    }
    particle.base_opacity * (0.6 + 0.4 * (t * TAU / particle.pulse_period).sin())
}

/// Particle drift: cosine-eased travel around the closed waypoint loop
pub fn particle_drift(particle: &Particle, elapsed: f32) -> Vec2 {
    let t = ((elapsed + particle.delay) / particle.drift_period).fract() * 3.0;
    let leg = (t as usize).min(2);
    let local = t - leg as f32;
    let from = particle.drift[leg];
    let to = particle.drift[(leg + 1) % 3];
    let eased = 0.5 - 0.5 * (local * PI).cos();
    from.lerp(to, eased)
}

/// Window display level: lit windows dim through the day and flare at night
pub fn window_level(cell: &WindowCell, night_factor: f32) -> f32 {
    if cell.lit {
        cell.opacity * (0.3 + 0.7 * night_factor)
    } else {
        cell.opacity
    }
}

/// City light wash over the foreground, riding the same night factor
pub fn city_light_level(night_factor: f32) -> f32 {
    0.2 + 0.5 * night_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_twinkle_range() {
        for index in 0..20 {
            for step in 0..100 {
                let value = twinkle(index, step as f32 * 0.13, 6.0);
                assert!((0.6..=1.0).contains(&value), "{value}");
            }
        }
    }

    #[test]
    fn test_band_bob_arc() {
        for band in [StarBand::Distant, StarBand::Mid, StarBand::Near] {
            assert_eq!(band_bob(band, 0.0), 0.0);
            let half = band.bob_period() / 2.0;
            assert!((band_bob(band, half) + band.bob_amplitude()).abs() < 1e-4);
            let full = band.bob_period();
            assert!(band_bob(band, full).abs() < 1e-4);
        }
    }

    #[test]
    fn test_star_opacity_gated_by_visibility() {
        let star = Star {
            position: Vec2::new(10.0, 20.0),
            size: 2.0,
            band: StarBand::Near,
            tint: crate::scene::entity::StarTint::White,
        };
        assert_eq!(star_opacity(&star, 3, 1.5, 0.0), 0.0);
        assert!(star_opacity(&star, 3, 1.5, 1.0) > 0.0);
    }

    #[test]
    fn test_beacon_schedule_is_index_stable() {
        for index in 0..10 {
            let a = beacon_on(index, 0.45);
            let b = beacon_on(index, 0.45);
            assert_eq!(a, b);
        }
        // Beacon starts on and toggles after one period
        assert!(beacon_on(0, 0.0));
        assert!(!beacon_on(0, 1.5));
    }

    #[test]
    fn test_beam_pulse_waits_for_delay() {
        let beam = Beam {
            position: Vec2::new(40.0, 60.0),
            rotation_deg: 90.0,
            width_percent: 0.5,
            opacity: 0.2,
            delay: 1.0,
        };
        assert_eq!(beam_pulse(&beam, 0.5), 0.0);
        let mid = beam_pulse(&beam, 1.5);
        assert!(mid > 0.0 && mid <= 0.2);
    }

    #[test]
    fn test_particle_drift_stays_in_loop_bounds() {
        let particle = Particle {
            position: Vec2::new(50.0, 50.0),
            size: 3.0,
            base_opacity: 0.5,
            pulse_period: 6.0,
            delay: 0.0,
            blur: 0.0,
            drift: [
                Vec2::new(-15.0, 5.0),
                Vec2::new(10.0, -10.0),
                Vec2::new(5.0, 15.0),
            ],
            drift_period: 12.0,
        };
        for step in 0..240 {
            let offset = particle_drift(&particle, step as f32 * 0.1);
            assert!(offset.x.abs() <= 20.0 && offset.y.abs() <= 20.0);
        }
        // A full loop returns to the first waypoint
        let start = particle_drift(&particle, 0.0);
        let wrapped = particle_drift(&particle, 12.0);
        assert!((start - wrapped).length() < 1e-3);
    }

    #[test]
    fn test_window_levels() {
        let lit = WindowCell {
            column: 1,
            row: 2,
            lit: true,
            glow: 4.0,
            opacity: 0.8,
        };
        let dark = WindowCell {
            column: 0,
            row: 0,
            lit: false,
            glow: 0.0,
            opacity: 0.1,
        };
        // Lit windows flare toward their full opacity at night
        assert!(window_level(&lit, 1.0) > window_level(&lit, 0.0));
        assert_eq!(window_level(&dark, 1.0), dark.opacity);
        assert!((city_light_level(1.0) - 0.7).abs() < 1e-6);
    }
}
