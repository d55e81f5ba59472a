pub mod entity;
pub mod generator;
pub mod modulation;

pub use entity::{
    Accent, Beam, Building, BuildingKind, EntityKind, Facade, Particle, SceneEntity, Star,
    StarBand, StarTint, WindowCell, WindowGrid, WindowPattern,
};
pub use generator::{GenerationConfig, SceneGenerator};
