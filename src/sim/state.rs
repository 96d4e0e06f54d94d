//! Simulation state
//!
//! Everything a tick reads or writes, apart from the container geometry
//! (owned by the layout side and passed in per tick).

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bubble::Bubble;
use crate::config::SimConfig;
use crate::error::Result;

/// The live bubbles, in spawn order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleField {
    bubbles: Vec<Bubble>,
}

impl BubbleField {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    #[inline]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn get(&self, id: u64) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    pub(crate) fn push(&mut self, bubble: Bubble) {
        self.bubbles.push(bubble);
    }

    /// Replace the current generation with the one built from it
    pub(crate) fn advance_with<F>(&mut self, step: F)
    where
        F: FnMut(Bubble) -> Option<Bubble>,
    {
        let previous = std::mem::take(&mut self.bubbles);
        self.bubbles = previous.into_iter().filter_map(step).collect();
    }
}

impl FromIterator<Bubble> for BubbleField {
    fn from_iter<I: IntoIterator<Item = Bubble>>(iter: I) -> Self {
        Self {
            bubbles: iter.into_iter().collect(),
        }
    }
}

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct SimState<R = Pcg32> {
    pub config: SimConfig,
    pub field: BubbleField,
    pub rng: R,
    /// Ticks run so far, including inactive ones
    pub time_ticks: u64,
    next_id: u64,
}

impl SimState<Pcg32> {
    /// Create a state seeded for reproducible runs
    pub fn new(config: SimConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R> SimState<R> {
    /// Create a state around an arbitrary random source
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            field: BubbleField::new(),
            rng,
            time_ticks: 0,
            next_id: 0,
        })
    }

    /// Id the next spawned bubble will receive
    #[inline]
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    pub(crate) fn take_next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
