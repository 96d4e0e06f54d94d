//! Fixed-interval simulation tick
//!
//! One tick = at most one spawn, then one advance of every live bubble.

use rand::Rng;

use super::bubble::Bubble;
use super::geometry::ContainerGeometry;
use super::state::{BubbleField, SimState};
use crate::error::{Result, SimError};

/// What a single tick did
#[derive(Debug, Default)]
pub struct TickReport {
    /// Id of the bubble spawned this tick
    pub spawned: Option<u64>,
    /// Bubbles that reached the surface and were dropped
    pub removed: usize,
    /// Spawn attempt aborted by a sampling fault
    pub fault: Option<SimError>,
}

/// Advance the simulation by one tick.
///
/// Without geometry the tick only counts time; the field is left untouched.
pub fn tick<R: Rng>(state: &mut SimState<R>, geometry: Option<&ContainerGeometry>) -> TickReport {
    state.time_ticks += 1;

    let Some(geometry) = geometry else {
        return TickReport::default();
    };

    let mut report = TickReport::default();
    match spawn(state, geometry) {
        Ok(spawned) => report.spawned = spawned,
        Err(e) => {
            log::warn!("Bubble spawn aborted at tick {}: {}", state.time_ticks, e);
            report.fault = Some(e);
        }
    }
    report.removed = advance(&mut state.field, geometry);
    report
}

/// Maybe add one bubble at the water floor.
///
/// Returns the new bubble's id, or `None` when the field is full or the
/// spawn roll fails.
pub fn spawn<R: Rng>(state: &mut SimState<R>, geometry: &ContainerGeometry) -> Result<Option<u64>> {
    if state.field.len() >= state.config.max_count {
        return Ok(None);
    }
    // Compare in f64 so the threshold is exactly 1 - chance
    let roll = f64::from(state.rng.random::<f32>());
    if roll < 1.0 - f64::from(state.config.spawn_chance) {
        return Ok(None);
    }

    let id = state.peek_next_id();
    let bubble = Bubble::sample(&mut state.rng, id, &state.config, geometry)?;
    state.take_next_id();
    state.field.push(bubble);
    Ok(Some(id))
}

/// Move every bubble one step; drop those reaching the surface.
///
/// Returns how many were dropped.
pub fn advance(field: &mut BubbleField, geometry: &ContainerGeometry) -> usize {
    let before = field.len();
    field.advance_with(|bubble| {
        if bubble.reaches_surface(geometry) {
            None
        } else {
            Some(bubble.stepped(geometry))
        }
    });
    before - field.len()
}
