//! Deterministic bubble simulation
//!
//! All bubble behaviour lives here. This module is pure:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No threads, rendering, or platform dependencies

pub mod bubble;
pub mod geometry;
pub mod state;
pub mod tick;

pub use bubble::{Bubble, sample_speed_x, sample_speed_y};
pub use geometry::{ContainerGeometry, Rect};
pub use state::{BubbleField, SimState};
pub use tick::{TickReport, advance, spawn, tick};
