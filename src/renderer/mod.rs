//! Frame building
//!
//! Produces a triangle list in device pixels for one redraw. Reads a bubble
//! snapshot, never the live simulation.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::layout::BottleGeometry;
use crate::sim::Bubble;

/// Segments per flattened corner curve
pub const CURVE_SEGMENTS: u32 = 8;
/// Segments per bubble circle
pub const CIRCLE_SEGMENTS: u32 = 24;
/// Segments per round stroke join
const JOIN_SEGMENTS: u32 = 6;

/// Build the full widget: water, then bottle outline, then bubbles on top
pub fn build_frame(geometry: &BottleGeometry, bubbles: &[Bubble]) -> Vec<Vertex> {
    let water_outline = geometry.water_outline(CURVE_SEGMENTS);
    let mut vertices = shapes::gradient_fill(
        &water_outline,
        geometry.water.top,
        geometry.water.bottom,
        colors::WATER_TOP,
        colors::WATER_BOTTOM,
    );

    vertices.extend(shapes::stroke(
        &geometry.outline(CURVE_SEGMENTS),
        geometry.border_width,
        colors::BOTTLE,
        JOIN_SEGMENTS,
    ));

    vertices.extend(bubble_vertices(bubbles));
    vertices
}

/// Filled circles for a bubble snapshot
pub fn bubble_vertices(bubbles: &[Bubble]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(bubbles.len() * CIRCLE_SEGMENTS as usize * 3);
    for bubble in bubbles {
        vertices.extend(shapes::circle(
            bubble.pos,
            bubble.radius,
            colors::BUBBLE,
            CIRCLE_SEGMENTS,
        ));
    }
    vertices
}
