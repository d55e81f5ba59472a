use glam::{Vec2, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::scene::entity::{
    Accent, Beam, Building, BuildingKind, EntityKind, Facade, Particle, SceneEntity, Star,
    StarBand, StarTint, WindowCell, WindowGrid, WindowPattern,
};

/// How many of each entity the default scene carries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub stars_distant: usize,
    pub stars_mid: usize,
    pub stars_near: usize,
    pub particles: usize,
    pub beams: usize,
    pub buildings: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            stars_distant: 100,
            stars_mid: 70,
            stars_near: 30,
            particles: 30,
            beams: 8,
            buildings: 20,
        }
    }
}

impl GenerationConfig {
    pub fn total(&self) -> usize {
        self.stars_distant
            + self.stars_mid
            + self.stars_near
            + self.particles
            + self.beams
            + self.buildings
    }
}

/// Procedural scene generator.
///
/// Geometry and category flags are drawn once per entity and frozen; the
/// rng is seedable so a fixed seed reproduces the exact scene. Regeneration
/// replaces a sequence wholesale, there is no incremental patching.
pub struct SceneGenerator {
    rng: StdRng,
    seed: u64,
}

impl SceneGenerator {
    pub fn new(seed: u64) -> Self {
        log::debug!("scene generator seeded with {seed}");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator for production mounts, seeded from the thread rng
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `count` entities of one kind as a fresh ordered sequence.
    /// Stars come from the near band; use [`SceneGenerator::stars`] for a
    /// specific band.
    pub fn generate(&mut self, count: usize, kind: EntityKind) -> Vec<SceneEntity> {
        match kind {
            EntityKind::Star => self.stars(count, StarBand::Near),
            EntityKind::Particle => (0..count)
                .map(|_| SceneEntity::Particle(self.particle()))
                .collect(),
            EntityKind::Beam => (0..count).map(|_| SceneEntity::Beam(self.beam())).collect(),
            EntityKind::Building => (0..count)
                .map(|_| SceneEntity::Building(self.building()))
                .collect(),
        }
    }

    /// Generate a band of stars
    pub fn stars(&mut self, count: usize, band: StarBand) -> Vec<SceneEntity> {
        (0..count)
            .map(|_| SceneEntity::Star(self.star(band)))
            .collect()
    }

    /// Assemble the full default scene in stable order: star bands back to
    /// front, then particles, beams and buildings.
    pub fn populate(&mut self, config: &GenerationConfig) -> Vec<SceneEntity> {
        let mut entities = Vec::with_capacity(config.total());
        entities.extend(self.stars(config.stars_distant, StarBand::Distant));
        entities.extend(self.stars(config.stars_mid, StarBand::Mid));
        entities.extend(self.stars(config.stars_near, StarBand::Near));
        entities.extend(self.generate(config.particles, EntityKind::Particle));
        entities.extend(self.generate(config.beams, EntityKind::Beam));
        entities.extend(self.generate(config.buildings, EntityKind::Building));
        log::info!("generated {} scene entities", entities.len());
        entities
    }

    fn percent_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..100.0),
            self.rng.gen_range(0.0..100.0),
        )
    }

    fn star(&mut self, band: StarBand) -> Star {
        let position = self.percent_position();
        let (size, tint) = match band {
            StarBand::Distant => {
                let tint = if self.rng.gen_ratio(1, 7) {
                    StarTint::IceBlue
                } else {
                    StarTint::White
                };
                (self.rng.gen_range(0.5..1.5), tint)
            }
            StarBand::Mid => {
                let tint = if self.rng.gen_ratio(1, 9) {
                    StarTint::IceBlue
                } else if self.rng.gen_ratio(1, 5) {
                    StarTint::WarmGold
                } else {
                    StarTint::White
                };
                (self.rng.gen_range(1.0..2.5), tint)
            }
            StarBand::Near => {
                let tint = if self.rng.gen_ratio(1, 5) {
                    StarTint::WarmGold
                } else {
                    StarTint::White
                };
                (self.rng.gen_range(1.5..4.7), tint)
            }
        };
        Star {
            position,
            size,
            band,
            tint,
        }
    }

    fn particle(&mut self) -> Particle {
        let blur = if self.rng.gen_bool(0.3) {
            self.rng.gen_range(2.0..7.0)
        } else {
            0.0
        };
        Particle {
            position: self.percent_position(),
            size: self.rng.gen_range(1.0..7.0),
            base_opacity: self.rng.gen_range(0.3..0.8),
            pulse_period: self.rng.gen_range(4.0..10.0),
            delay: self.rng.gen_range(0.0..5.0),
            blur,
            drift: [
                self.drift_waypoint(),
                self.drift_waypoint(),
                self.drift_waypoint(),
            ],
            drift_period: self.rng.gen_range(10.0..20.0),
        }
    }

    fn drift_waypoint(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-20.0..20.0),
            self.rng.gen_range(-20.0..20.0),
        )
    }

    fn beam(&mut self) -> Beam {
        Beam {
            position: self.percent_position(),
            rotation_deg: self.rng.gen_range(0.0..180.0),
            width_percent: self.rng.gen_range(0.2..1.2),
            opacity: self.rng.gen_range(0.05..0.2),
            delay: self.rng.gen_range(0.0..3.0),
        }
    }

    fn building(&mut self) -> Building {
        let kind = match self.rng.gen_range(0..3) {
            0 => BuildingKind::Regular,
            1 => BuildingKind::Tapered,
            _ => BuildingKind::Stepped,
        };
        let facade = match self.rng.gen_range(0..3) {
            0 => Facade::Glass,
            1 => Facade::Concrete,
            _ => Facade::Mixed,
        };
        let windows = self.window_grid();
        let setbacks = if kind == BuildingKind::Stepped {
            self.rng.gen_range(1..4)
        } else {
            0
        };
        let crown_light = if self.rng.gen_bool(0.5) {
            let color = if self.rng.gen_bool(0.3) {
                Vec4::new(0.87, 0.65, 0.31, 0.7) // brand gold
            } else {
                Vec4::new(1.0, 1.0, 1.0, 0.6)
            };
            Some(Accent {
                color,
                intensity: self.rng.gen_range(0.1..0.5),
            })
        } else {
            None
        };

        Building {
            position_x: self.rng.gen_range(0.0..100.0),
            width_percent: self.rng.gen_range(2.0..6.0),
            height_percent: self.rng.gen_range(20.0..50.0),
            depth_speed: self.rng.gen_range(0.01..0.04),
            kind,
            facade,
            windows,
            antenna: self.rng.gen_bool(0.3),
            setbacks,
            crown_light,
        }
    }

    fn window_grid(&mut self) -> WindowGrid {
        let columns: u8 = self.rng.gen_range(2..5);
        let rows: u8 = self.rng.gen_range(10..20);
        let pattern = match self.rng.gen_range(0..3) {
            0 => WindowPattern::Grid,
            1 => WindowPattern::Alternating,
            _ => WindowPattern::Scattered,
        };
        let light_ratio = self.rng.gen_range(0.1..0.4);

        let mut cells = Vec::new();
        for row in 0..rows {
            for column in 0..columns {
                let present = match pattern {
                    WindowPattern::Grid => true,
                    WindowPattern::Alternating => (row + column) % 2 == 0,
                    WindowPattern::Scattered => self.rng.gen_bool(0.7),
                };
                if !present {
                    continue;
                }
                let lit = self.rng.gen::<f32>() < light_ratio;
                cells.push(WindowCell {
                    column,
                    row,
                    lit,
                    glow: if lit { self.rng.gen_range(2.0..7.0) } else { 0.0 },
                    opacity: if lit {
                        self.rng.gen_range(0.5..1.0)
                    } else {
                        self.rng.gen_range(0.05..0.25)
                    },
                });
            }
        }

        WindowGrid {
            columns,
            rows,
            pattern,
            light_ratio,
            cells,
        }
    }
}
