use serde::{Deserialize, Serialize};

/// Tick parameters for the day/night cycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Phase advance per tick
    pub increment: f64,
    /// Wall-clock interval between ticks in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            increment: 0.002,      // full cycle in ~50s at a 100ms tick
            tick_interval_ms: 100,
        }
    }
}

/// Cycle speed presets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleSpeed {
    Paused,
    Standard,
    /// Accelerated preview of the full cycle
    Showcase,
    Custom(f32),
}

impl CycleSpeed {
    /// Get the multiplier value
    pub fn multiplier(&self) -> f64 {
        match self {
            CycleSpeed::Paused => 0.0,
            CycleSpeed::Standard => 1.0,
            CycleSpeed::Showcase => 4.0,
            CycleSpeed::Custom(m) => *m as f64,
        }
    }
}

/// Cyclic time source for the scene.
///
/// Owns the one piece of mutable time state: a normalized phase in [0,1)
/// that advances by a fixed increment per tick and wraps modulo 1. Phase
/// accumulates in f64 so long tick runs land where the arithmetic says they
/// should. All consumers read the phase; none of them own it.
#[derive(Debug, Clone)]
pub struct CycleClock {
    config: CycleConfig,
    speed: CycleSpeed,
    /// Ticks observed since construction or reset, paused or not
    ticks: u64,
    /// Phase accumulated by ticking
    accum: f64,
    /// Phase origin set by seek
    origin: f64,
}

impl CycleClock {
    /// Create a clock at phase 0
    pub fn new(config: CycleConfig) -> Self {
        Self {
            config,
            speed: CycleSpeed::Standard,
            ticks: 0,
            accum: 0.0,
            origin: 0.0,
        }
    }

    /// Advance one tick and return the new phase
    pub fn tick(&mut self) -> f64 {
        self.ticks = self.ticks.wrapping_add(1);
        self.accum += self.config.increment * self.speed.multiplier();
        self.phase()
    }

    /// Advance `n` ticks and return the resulting phase
    pub fn tick_many(&mut self, n: u64) -> f64 {
        for _ in 0..n {
            self.tick();
        }
        self.phase()
    }

    /// Current phase in [0,1)
    pub fn phase(&self) -> f64 {
        (self.origin + self.accum).rem_euclid(1.0)
    }

    /// Current phase narrowed for the samplers
    pub fn phase_f32(&self) -> f32 {
        self.phase() as f32
    }

    /// Jump to a phase without touching elapsed time
    pub fn seek(&mut self, phase: f64) {
        self.origin = phase.rem_euclid(1.0);
        self.accum = 0.0;
    }

    /// Return to phase 0 with no lingering state from prior cycles
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.accum = 0.0;
        self.origin = 0.0;
    }

    pub fn set_speed(&mut self, speed: CycleSpeed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> CycleSpeed {
        self.speed
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Wall-clock seconds represented by the ticks observed so far.
    ///
    /// Keeps running while paused, so entity oscillators stay alive when the
    /// phase is frozen.
    pub fn elapsed_seconds(&self) -> f32 {
        self.ticks as f32 * self.config.tick_interval_ms as f32 / 1000.0
    }
}
