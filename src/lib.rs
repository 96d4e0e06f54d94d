//! Water Bubble - a water bottle widget with rising bubbles
//!
//! Core modules:
//! - `sim`: Deterministic bubble simulation (spawn, advance, container bounds)
//! - `simulator`: Periodic tick schedule and snapshot publishing
//! - `layout`: Bottle and water rectangles for a given view size
//! - `renderer`: Triangle lists for the water, the bottle and the bubbles
//! - `config`: Construction-time simulation parameters

pub mod config;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod sim;
pub mod simulator;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use layout::{BottleGeometry, BottleLayout, Padding};
pub use sim::{Bubble, ContainerGeometry, Rect};
pub use simulator::BubbleSimulator;

/// Simulation constants
pub mod consts {
    /// Largest bubble radius (px, exclusive)
    pub const MAX_RADIUS: u32 = 30;
    /// Smallest bubble radius (px, inclusive)
    pub const MIN_RADIUS: u32 = 5;
    /// Maximum number of live bubbles
    pub const MAX_COUNT: usize = 30;
    /// Interval between simulation ticks
    pub const TICK_INTERVAL_MS: u64 = 20;
    /// Upward speed bound (px/tick, exclusive). Lower bound is always 1.
    pub const MAX_SPEED_Y: f32 = 5.0;
    /// Probability that an eligible tick spawns a bubble
    pub const SPAWN_CHANCE: f32 = 0.05;

    /// Retry bound for rejection sampling of bubble speeds
    pub const MAX_SAMPLE_ATTEMPTS: u32 = 1024;

    /// Bubble fill alpha (0-255)
    pub const BUBBLE_ALPHA: u8 = 128;
}
