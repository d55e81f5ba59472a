use std::sync::Arc;

use glam::Vec2;
use log::{debug, info};

use crate::config::SceneConfig;
use crate::error::EngineResult;
use crate::parallax::{Bounds, LayerFilter, LayerRole, ParallaxLayer, PointerTracker};
use crate::scene::{SceneEntity, SceneGenerator};
use crate::sky::{light_for, CelestialState, ColorBundle, SceneLight};
use crate::time::{CycleClock, CycleSpeed};

/// Breakpoint-relevant viewport description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const COMPACT_WIDTH: f32 = 768.0;

    /// Compact viewports ride the celestial arc higher and get their own
    /// generation pass
    pub fn is_compact(&self) -> bool {
        self.width < Self::COMPACT_WIDTH
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Per-layer output for one frame
#[derive(Debug, Clone)]
pub struct LayerState {
    pub role: LayerRole,
    pub offset: Vec2,
    pub filter: Option<LayerFilter>,
}

/// Everything the render adapter needs for one frame.
///
/// The entity handle is reference-stable across ticks; it only changes when
/// the scene is regenerated.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub phase: f32,
    pub elapsed_seconds: f32,
    pub colors: ColorBundle,
    pub celestial: CelestialState,
    pub light: SceneLight,
    pub layers: Vec<LayerState>,
    pub entities: Arc<[SceneEntity]>,
}

/// Owns all ambient scene state and hands out per-frame parameter bundles.
///
/// Explicit lifecycle instead of ambient globals: construct on mount, call
/// [`SceneEngine::set_interactive`] once a client context exists, drop on
/// unmount. Until the engine is interactive, ticks do not advance the phase
/// and parallax stays zero, which keeps server-evaluated output static.
pub struct SceneEngine {
    config: SceneConfig,
    clock: CycleClock,
    pointer: PointerTracker,
    layers: Vec<ParallaxLayer>,
    generator: SceneGenerator,
    entities: Arc<[SceneEntity]>,
    viewport: Viewport,
    interactive: bool,
}

impl SceneEngine {
    /// Build an engine from a validated configuration, seeding generation
    /// from the config or from entropy.
    pub fn new(config: SceneConfig) -> EngineResult<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    /// Build an engine with an explicit generation seed
    pub fn with_seed(config: SceneConfig, seed: u64) -> EngineResult<Self> {
        config.validate()?;

        let layers = config
            .layers
            .iter()
            .map(|layer| ParallaxLayer::new(*layer))
            .collect::<EngineResult<Vec<_>>>()?;

        let mut generator = SceneGenerator::new(seed);
        let entities: Arc<[SceneEntity]> = generator.populate(&config.generation).into();
        info!(
            "scene engine ready: {} layers, {} entities, seed {seed}",
            layers.len(),
            entities.len()
        );

        Ok(Self {
            clock: CycleClock::new(config.cycle),
            pointer: PointerTracker::new(),
            layers,
            generator,
            entities,
            viewport: Viewport::default(),
            interactive: false,
            config,
        })
    }

    /// Flip the interactive-context flag. Everything time- or
    /// pointer-driven is inert until this is set.
    pub fn set_interactive(&mut self, interactive: bool) {
        if self.interactive != interactive {
            debug!("interactive context {}", if interactive { "up" } else { "down" });
        }
        self.interactive = interactive;
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Record the viewport. Crossing the compact breakpoint regenerates the
    /// layout-dependent entities wholesale.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let crossed = viewport.is_compact() != self.viewport.is_compact();
        self.viewport = viewport;
        if crossed {
            self.regenerate();
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pointer moved over the stage; ignored while non-interactive
    pub fn pointer_moved(&mut self, position: Vec2, bounds: Bounds) {
        if !self.interactive {
            return;
        }
        self.pointer.observe(position, bounds);
    }

    /// Pointer left the stage; layers fall back to rest
    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    /// Discard and rebuild the whole entity sequence
    pub fn regenerate(&mut self) {
        self.entities = self.generator.populate(&self.config.generation).into();
        info!("scene regenerated: {} entities", self.entities.len());
    }

    /// Return to the start of the cycle with no lingering state
    pub fn reset(&mut self) {
        self.clock.reset();
        self.pointer.clear();
    }

    pub fn set_speed(&mut self, speed: CycleSpeed) {
        self.clock.set_speed(speed);
    }

    pub fn phase(&self) -> f32 {
        self.clock.phase_f32()
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Advance one tick and sample the frame.
    ///
    /// Ordering inside a tick is strict: the phase moves first, then colors,
    /// celestial state and lighting are derived from the new phase, then
    /// layer offsets are read from the already-final pointer offset.
    pub fn tick(&mut self) -> SceneState {
        if self.interactive {
            self.clock.tick();
        }
        self.sample()
    }

    /// Sample the frame without advancing time
    pub fn state(&self) -> SceneState {
        self.sample()
    }

    fn sample(&self) -> SceneState {
        let phase = self.clock.phase_f32();
        let baseline = if self.viewport.is_compact() {
            self.config.celestial.compact_baseline_percent
        } else {
            self.config.celestial.baseline_percent
        };

        let colors = self.config.palette.colors_for(phase);
        let celestial = self.config.celestial.position_for(phase, baseline);
        let light = light_for(&self.config.celestial, phase, baseline);

        let pointer = if self.interactive {
            self.pointer.offset()
        } else {
            Vec2::ZERO
        };
        let layers = self
            .layers
            .iter()
            .map(|layer| LayerState {
                role: layer.role(),
                offset: layer.offset(pointer),
                filter: layer.filter(phase),
            })
            .collect();

        SceneState {
            phase,
            elapsed_seconds: self.clock.elapsed_seconds(),
            colors,
            celestial,
            light,
            layers,
            entities: Arc::clone(&self.entities),
        }
    }
}
