pub mod cycle;

pub use cycle::{CycleClock, CycleConfig, CycleSpeed};
