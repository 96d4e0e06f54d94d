//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in device pixels with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Widget colors
pub mod colors {
    use crate::consts::BUBBLE_ALPHA;

    /// #ADFF2F
    pub const BOTTLE: [f32; 4] = [0.678, 1.0, 0.184, 1.0];
    /// #00F5FF
    pub const WATER_TOP: [f32; 4] = [0.0, 0.961, 1.0, 1.0];
    /// #00E5EE
    pub const WATER_BOTTOM: [f32; 4] = [0.0, 0.898, 0.933, 1.0];
    pub const BUBBLE: [f32; 4] = [1.0, 1.0, 1.0, BUBBLE_ALPHA as f32 / 255.0];
}
