use glam::{Vec2, Vec4};

/// Depth band a star belongs to.
///
/// The band fixes the size range at generation and the bob arc the whole
/// band rides at runtime; nearer bands are bigger and livelier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarBand {
    Distant,
    Mid,
    Near,
}

impl StarBand {
    /// Vertical bob amplitude in px
    pub fn bob_amplitude(&self) -> f32 {
        match self {
            StarBand::Distant => 5.0,
            StarBand::Mid => 10.0,
            StarBand::Near => 20.0,
        }
    }

    /// Bob period in seconds
    pub fn bob_period(&self) -> f32 {
        match self {
            StarBand::Distant => 8.0,
            StarBand::Mid => 6.0,
            StarBand::Near => 4.0,
        }
    }
}

/// Star tint classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTint {
    White,
    IceBlue,
    WarmGold,
}

#[derive(Debug, Clone)]
pub struct Star {
    /// Container percent, both axes in [0,100]
    pub position: Vec2,
    /// Diameter in px
    pub size: f32,
    pub band: StarBand,
    pub tint: StarTint,
}

/// Floating gold dust mote
#[derive(Debug, Clone)]
pub struct Particle {
    /// Container percent
    pub position: Vec2,
    /// Diameter in px
    pub size: f32,
    pub base_opacity: f32,
    /// Opacity pulse period in seconds
    pub pulse_period: f32,
    /// Seconds before the mote first appears
    pub delay: f32,
    /// Blur radius in px, 0 for a crisp mote
    pub blur: f32,
    /// Closed drift loop waypoints, px about the anchor
    pub drift: [Vec2; 3],
    /// Seconds for one full drift loop
    pub drift_period: f32,
}

/// City light beam rising from the skyline
#[derive(Debug, Clone)]
pub struct Beam {
    /// Container percent
    pub position: Vec2,
    pub rotation_deg: f32,
    pub width_percent: f32,
    /// Target opacity once faded in
    pub opacity: f32,
    /// Fade-in delay in seconds
    pub delay: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingKind {
    Regular,
    /// Tapered top, narrowing toward the roof
    Tapered,
    /// Stepped silhouette with setback tiers
    Stepped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facade {
    Glass,
    Concrete,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPattern {
    Grid,
    Alternating,
    Scattered,
}

/// One window in a facade grid, lighting frozen at generation
#[derive(Debug, Clone)]
pub struct WindowCell {
    pub column: u8,
    pub row: u8,
    pub lit: bool,
    /// Glow halo in px for lit windows
    pub glow: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct WindowGrid {
    pub columns: u8,
    pub rows: u8,
    pub pattern: WindowPattern,
    /// Fraction of windows lit, drawn in [0.1, 0.4]
    pub light_ratio: f32,
    pub cells: Vec<WindowCell>,
}

/// Decorative accent color and strength
#[derive(Debug, Clone)]
pub struct Accent {
    pub color: Vec4,
    pub intensity: f32,
}

/// Skyline building, bottom-anchored
#[derive(Debug, Clone)]
pub struct Building {
    /// Horizontal anchor in container percent
    pub position_x: f32,
    pub width_percent: f32,
    pub height_percent: f32,
    /// Parallax drift factor for the building's own sway
    pub depth_speed: f32,
    pub kind: BuildingKind,
    pub facade: Facade,
    pub windows: WindowGrid,
    pub antenna: bool,
    /// Setback tiers for stepped silhouettes, 0 otherwise
    pub setbacks: u8,
    pub crown_light: Option<Accent>,
}

/// A generated decorative element with generation-time-frozen geometry.
///
/// Time-varying looks (twinkle, blink, drift) are derived per tick by the
/// modulation functions and never stored back here.
#[derive(Debug, Clone)]
pub enum SceneEntity {
    Star(Star),
    Particle(Particle),
    Beam(Beam),
    Building(Building),
}

/// Entity category selector for generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Star,
    Particle,
    Beam,
    Building,
}

impl SceneEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            SceneEntity::Star(_) => EntityKind::Star,
            SceneEntity::Particle(_) => EntityKind::Particle,
            SceneEntity::Beam(_) => EntityKind::Beam,
            SceneEntity::Building(_) => EntityKind::Building,
        }
    }

    /// Anchor position in container percent, both axes in [0,100].
    /// Buildings are bottom-anchored.
    pub fn position_percent(&self) -> Vec2 {
        match self {
            SceneEntity::Star(star) => star.position,
            SceneEntity::Particle(particle) => particle.position,
            SceneEntity::Beam(beam) => beam.position,
            SceneEntity::Building(building) => Vec2::new(building.position_x, 100.0),
        }
    }
}
