//! Bottle layout
//!
//! Turns a view size into the bottle, water, and content rectangles, and
//! traces the bottle and water outlines for the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{ContainerGeometry, Rect};

/// Convert density-independent units to device pixels
#[inline]
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    dp * density
}

/// View padding in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Bottle dimensions in density-independent units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BottleLayout {
    pub width: f32,
    pub height: f32,
    /// Outline stroke width
    pub border: f32,
    /// Bottom corner radius
    pub corner_radius: f32,
    /// Flare radius at the bottle mouth
    pub cap_radius: f32,
    /// Water level measured from the bottle floor
    pub water_height: f32,
}

impl Default for BottleLayout {
    fn default() -> Self {
        Self {
            width: 130.0,
            height: 260.0,
            border: 8.0,
            corner_radius: 15.0,
            cap_radius: 5.0,
            water_height: 240.0,
        }
    }
}

impl BottleLayout {
    /// Lay the bottle out, centered, in a `width` x `height` px view
    pub fn measure(&self, width: f32, height: f32, padding: Padding, density: f32) -> BottleGeometry {
        let content = Rect::new(
            padding.left,
            padding.top,
            width - padding.right,
            height - padding.bottom,
        );

        let size = Vec2::new(
            dp_to_px(self.width, density),
            dp_to_px(self.height, density),
        );
        let bottle = Rect::from_center_size(content.center(), size);
        let water_height = dp_to_px(self.water_height, density);
        let water = Rect::new(
            bottle.left,
            bottle.bottom - water_height,
            bottle.right,
            bottle.bottom,
        );

        BottleGeometry {
            content,
            bottle,
            water,
            border_width: dp_to_px(self.border, density),
            corner_radius: dp_to_px(self.corner_radius, density),
            cap_radius: dp_to_px(self.cap_radius, density),
        }
    }
}

/// Bottle layout resolved to device pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BottleGeometry {
    /// View area inside the padding
    pub content: Rect,
    pub bottle: Rect,
    pub water: Rect,
    pub border_width: f32,
    pub corner_radius: f32,
    pub cap_radius: f32,
}

impl BottleGeometry {
    /// Bounds handed to the simulation
    pub fn container(&self) -> ContainerGeometry {
        ContainerGeometry::new(self.water, self.border_width)
    }

    /// Open bottle outline: left flare, left side, rounded floor, right side,
    /// right flare.
    pub fn outline(&self, curve_segments: u32) -> Vec<Vec2> {
        let Rect {
            left: l,
            top: t,
            right: r,
            ..
        } = self.bottle;
        let cap = self.cap_radius;

        let mut path = vec![Vec2::new(l - cap, t - cap)];
        quad_to(&mut path, Vec2::new(l, t - cap), Vec2::new(l, t), curve_segments);
        self.trace_floor(&mut path, t, curve_segments);
        quad_to(
            &mut path,
            Vec2::new(r, t - cap),
            Vec2::new(r + cap, t - cap),
            curve_segments,
        );
        path
    }

    /// Closed water outline, from the water line down around the floor
    pub fn water_outline(&self, curve_segments: u32) -> Vec<Vec2> {
        let mut path = vec![Vec2::new(self.water.left, self.water.top)];
        self.trace_floor(&mut path, self.water.top, curve_segments);
        path
    }

    /// Left side down from `top`, both rounded floor corners, right side back up to `top`
    fn trace_floor(&self, path: &mut Vec<Vec2>, top: f32, curve_segments: u32) {
        let Rect {
            left: l,
            right: r,
            bottom: b,
            ..
        } = self.bottle;
        let corner = self.corner_radius;

        path.push(Vec2::new(l, b - corner));
        quad_to(path, Vec2::new(l, b), Vec2::new(l + corner, b), curve_segments);
        path.push(Vec2::new(r - corner, b));
        quad_to(path, Vec2::new(r, b), Vec2::new(r, b - corner), curve_segments);
        path.push(Vec2::new(r, top));
    }
}

/// Flatten a quadratic Bézier from the path's last point into `segments` lines
fn quad_to(path: &mut Vec<Vec2>, control: Vec2, end: Vec2, segments: u32) {
    let Some(&start) = path.last() else {
        path.push(end);
        return;
    };
    let segments = segments.max(1);
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let mt = 1.0 - t;
        path.push(start * (mt * mt) + control * (2.0 * mt * t) + end * (t * t));
    }
}
