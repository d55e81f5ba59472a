pub mod layer;
pub mod pointer;

pub use layer::{offset_for, LayerConfig, LayerFilter, LayerRole, ParallaxLayer};
pub use pointer::{Bounds, PointerTracker};
