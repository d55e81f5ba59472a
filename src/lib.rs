//! Ambient scene parameter engine for a luxury storefront stage.
//!
//! Computes everything the presentation layer paints per frame: a cyclic
//! day/night phase, four-regime sky and light palettes, the sun/moon arc,
//! pointer-driven parallax offsets per layer, and a procedurally generated
//! field of decorative entities (stars, gold dust, light beams, skyline
//! buildings). The engine owns no rendering; it hands a [`SceneState`]
//! bundle to whatever adapter draws the stage.

pub mod config;
pub mod engine;
pub mod error;
pub mod parallax;
pub mod scene;
pub mod sky;
pub mod time;

pub use config::SceneConfig;
pub use engine::{LayerState, SceneEngine, SceneState, Viewport};
pub use error::{EngineError, EngineResult};
pub use parallax::{offset_for, Bounds, LayerConfig, LayerFilter, LayerRole, PointerTracker};
pub use scene::{EntityKind, GenerationConfig, SceneEntity, SceneGenerator, StarBand};
pub use sky::{CelestialConfig, CelestialState, ColorBundle, SceneLight, SkyPalette};
pub use time::{CycleClock, CycleConfig, CycleSpeed};
