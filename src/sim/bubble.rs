//! Bubble entity and its spawn-time sampling

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::ContainerGeometry;
use crate::config::SimConfig;
use crate::consts::MAX_SAMPLE_ATTEMPTS;
use crate::error::{Result, SimError};

/// A single bubble
///
/// Only `pos` changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    /// Spawn-order identifier, unique per simulation
    pub id: u64,
    /// Center in device pixels
    pub pos: Vec2,
    /// Integer-valued radius in device pixels
    pub radius: f32,
    /// Horizontal drift per tick, never zero
    pub speed_x: f32,
    /// Upward rise per tick, at least 1
    pub speed_y: f32,
}

impl Bubble {
    /// Draw a new bubble at the container's spawn point.
    ///
    /// Consumes the RNG in a fixed order (radius, rise, drift) so a seeded
    /// run is reproducible.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        id: u64,
        config: &SimConfig,
        geometry: &ContainerGeometry,
    ) -> Result<Self> {
        let radius = rng.random_range(config.min_radius..config.max_radius) as f32;
        let speed_y = sample_speed_y(rng, config.max_speed_y)?;
        let speed_x = sample_speed_x(rng)?;

        Ok(Self {
            id,
            pos: geometry.spawn_point(radius),
            radius,
            speed_x,
            speed_y,
        })
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// True once the next rise would carry the bubble to the water surface
    #[inline]
    pub fn reaches_surface(&self, geometry: &ContainerGeometry) -> bool {
        self.pos.y - self.speed_y <= geometry.surface_limit(self.radius)
    }

    /// Position after one tick: drift clamped to the side walls, rise unclamped
    pub fn stepped(&self, geometry: &ContainerGeometry) -> Self {
        let target_x = self.pos.x + self.speed_x;
        let left = geometry.left_limit(self.radius);
        let right = geometry.right_limit(self.radius);

        let x = if target_x <= left {
            left
        } else if target_x >= right {
            right
        } else {
            target_x
        };

        Self {
            pos: Vec2::new(x, self.pos.y - self.speed_y),
            ..*self
        }
    }
}

/// Rise speed in `[1, max_speed_y)`
pub fn sample_speed_y<R: Rng + ?Sized>(rng: &mut R, max_speed_y: f32) -> Result<f32> {
    sample_until(
        rng,
        "speed_y",
        |rng| rng.random::<f32>() * max_speed_y,
        |v| (1.0..max_speed_y).contains(&v),
    )
}

/// Drift speed in `(-1, 1)`, excluding zero
pub fn sample_speed_x<R: Rng + ?Sized>(rng: &mut R) -> Result<f32> {
    let half = sample_until(
        rng,
        "speed_x",
        |rng| rng.random::<f32>() - 0.5,
        |v| v != 0.0 && v > -0.5,
    )?;
    Ok(half * 2.0)
}

/// Rejection sampling with a retry bound
fn sample_until<R, D, A>(
    rng: &mut R,
    quantity: &'static str,
    mut draw: D,
    accept: A,
) -> Result<f32>
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> f32,
    A: Fn(f32) -> bool,
{
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let value = draw(rng);
        if accept(value) {
            return Ok(value);
        }
    }
    Err(SimError::SamplingExhausted {
        quantity,
        attempts: MAX_SAMPLE_ATTEMPTS,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Yields `first` once, then `rest` forever
    pub(crate) struct ScriptedRng {
        pub first: Option<u32>,
        pub rest: u32,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.first.take().unwrap_or(self.rest)
        }

        fn next_u64(&mut self) -> u64 {
            let hi = self.next_u32() as u64;
            let lo = self.next_u32() as u64;
            (hi << 32) | lo
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    fn test_geometry() -> ContainerGeometry {
        ContainerGeometry::new(Rect::new(0.0, 0.0, 100.0, 200.0), 8.0)
    }

    #[test]
    fn test_sampled_bubbles_respect_bounds() {
        let config = SimConfig::default();
        let geometry = test_geometry();
        let mut rng = Pcg32::seed_from_u64(7);

        for id in 0..2000 {
            let bubble = Bubble::sample(&mut rng, id, &config, &geometry).unwrap();
            assert!(bubble.radius >= 5.0 && bubble.radius < 30.0);
            assert_eq!(bubble.radius.fract(), 0.0);
            assert!(bubble.speed_y >= 1.0 && bubble.speed_y < 5.0);
            assert!(bubble.speed_x != 0.0);
            assert!(bubble.speed_x > -1.0 && bubble.speed_x < 1.0);
        }
    }

    #[test]
    fn test_spawn_point_is_centered_on_floor() {
        let config = SimConfig::default();
        let geometry = test_geometry();
        let mut rng = Pcg32::seed_from_u64(11);

        let bubble = Bubble::sample(&mut rng, 0, &config, &geometry).unwrap();
        assert_eq!(bubble.x(), 50.0);
        assert_eq!(bubble.y(), 200.0 - bubble.radius - 4.0);
    }

    #[test]
    fn test_left_wall_clamp() {
        let geometry = test_geometry();
        let bubble = Bubble {
            id: 0,
            pos: Vec2::new(50.0, 100.0),
            radius: 10.0,
            speed_x: -40.0,
            speed_y: 2.0,
        };
        let next = bubble.stepped(&geometry);
        // Snapped to left + radius + border / 2, not 50 - 40
        assert_eq!(next.x(), 14.0);
        assert_eq!(next.y(), 98.0);
    }

    #[test]
    fn test_right_wall_clamp() {
        let geometry = test_geometry();
        let bubble = Bubble {
            id: 0,
            pos: Vec2::new(80.0, 100.0),
            radius: 10.0,
            speed_x: 0.9,
            speed_y: 1.0,
        };
        // 80.9, 81.8, ... until pinned at 100 - 10 - 4 = 86
        let mut current = bubble;
        for _ in 0..20 {
            current = current.stepped(&geometry);
        }
        assert_eq!(current.x(), 86.0);
        assert_eq!(current.y(), 80.0);
    }

    #[test]
    fn test_surface_check() {
        let geometry = test_geometry();
        let mut bubble = Bubble {
            id: 0,
            pos: Vec2::new(50.0, 13.0),
            radius: 10.0,
            speed_x: 0.5,
            speed_y: 2.0,
        };
        // 13 - 2 = 11 > 10
        assert!(!bubble.reaches_surface(&geometry));
        bubble.pos.y = 12.0;
        // 12 - 2 = 10 <= 10
        assert!(bubble.reaches_surface(&geometry));
    }

    #[test]
    fn test_degenerate_rng_exhausts_speed_y() {
        // Always 0.0: rise speed never reaches 1
        let mut rng = ScriptedRng {
            first: None,
            rest: 0,
        };
        let result = sample_speed_y(&mut rng, 5.0);
        assert!(matches!(
            result,
            Err(SimError::SamplingExhausted {
                quantity: "speed_y",
                attempts: MAX_SAMPLE_ATTEMPTS
            })
        ));
    }

    #[test]
    fn test_degenerate_rng_exhausts_speed_x() {
        // 0x8000_0000 maps to exactly 0.5, so the drift is always zero
        let mut rng = ScriptedRng {
            first: None,
            rest: 0x8000_0000,
        };
        let result = sample_speed_x(&mut rng);
        assert!(matches!(
            result,
            Err(SimError::SamplingExhausted {
                quantity: "speed_x",
                ..
            })
        ));
    }
}
