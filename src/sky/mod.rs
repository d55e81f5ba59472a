pub mod celestial;
pub mod colors;
pub mod light;

pub use celestial::{CelestialConfig, CelestialState};
pub use colors::{star_visibility, ColorBundle, PaletteAnchor, SkyPalette};
pub use light::{light_for, DirectionalShade, RayFan, SceneLight, ShadeDirection};
