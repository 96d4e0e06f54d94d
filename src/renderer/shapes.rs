//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick open polyline with round joins and caps
pub fn stroke(points: &[Vec2], width: f32, color: [f32; 4], cap_segments: u32) -> Vec<Vertex> {
    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(points.len() * (6 + cap_segments as usize * 3));

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let dir = (p2 - p1).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    // Round joins and caps
    for point in points {
        vertices.extend(circle(*point, half, color, cap_segments));
    }

    vertices
}

/// Fill a convex polygon with a vertical gradient from `top_color` at `top`
/// to `bottom_color` at `bottom`
pub fn gradient_fill(
    outline: &[Vec2],
    top: f32,
    bottom: f32,
    top_color: [f32; 4],
    bottom_color: [f32; 4],
) -> Vec<Vertex> {
    if outline.len() < 3 {
        return Vec::new();
    }

    let span = bottom - top;
    let shade = |p: Vec2| -> [f32; 4] {
        let t = if span > 0.0 {
            ((p.y - top) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mut color = [0.0; 4];
        for (c, (a, b)) in color.iter_mut().zip(top_color.iter().zip(bottom_color.iter())) {
            *c = a + (b - a) * t;
        }
        color
    };

    let centroid = outline.iter().copied().sum::<Vec2>() / outline.len() as f32;
    let center_color = shade(centroid);
    let mut vertices = Vec::with_capacity(outline.len() * 3);

    for i in 0..outline.len() {
        let p1 = outline[i];
        let p2 = outline[(i + 1) % outline.len()];

        // Fan triangle from the centroid
        vertices.push(Vertex::new(centroid.x, centroid.y, center_color));
        vertices.push(Vertex::new(p1.x, p1.y, shade(p1)));
        vertices.push(Vertex::new(p2.x, p2.y, shade(p2)));
    }

    vertices
}
