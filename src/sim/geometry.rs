//! Container bounds the bubbles live in
//!
//! Coordinates are device pixels with y growing downward, so "up" is
//! decreasing y and the water surface is `water.top`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self::new(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }
}

/// Water rectangle plus the bottle stroke width, as seen by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerGeometry {
    pub water: Rect,
    pub border_width: f32,
}

impl ContainerGeometry {
    pub const fn new(water: Rect, border_width: f32) -> Self {
        Self {
            water,
            border_width,
        }
    }

    /// Leftmost center x for a bubble of `radius` (edge touches the inner wall)
    #[inline]
    pub fn left_limit(&self, radius: f32) -> f32 {
        self.water.left + radius + self.border_width / 2.0
    }

    /// Rightmost center x for a bubble of `radius`
    #[inline]
    pub fn right_limit(&self, radius: f32) -> f32 {
        self.water.right - radius - self.border_width / 2.0
    }

    /// Center y at or above which a bubble of `radius` has reached the surface
    #[inline]
    pub fn surface_limit(&self, radius: f32) -> f32 {
        self.water.top + radius
    }

    /// Spawn point for a bubble of `radius`: centered, resting on the floor stroke
    #[inline]
    pub fn spawn_point(&self, radius: f32) -> Vec2 {
        Vec2::new(
            self.water.center_x(),
            self.water.bottom - radius - self.border_width / 2.0,
        )
    }
}
