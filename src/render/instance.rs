//! Instance types for cube rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One cube standing on the ground plane
///
/// Ground coordinates map to the renderer's X-Z plane; `height` is the cube's
/// vertical extent (a cube's height equals its edge length).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub center: [f32; 2],
    pub size: f32,
    pub height: f32,
    pub color: [f32; 4],
}

impl QuadInstance {
    pub fn cube(center: Vec2, size: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            size,
            height: size,
            color,
        }
    }

    /// Flat quad lying on the ground
    pub fn flat(center: Vec2, size: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            size,
            height: 0.0,
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.5, 0.8, 1.0, 1.0];
    pub const GROUND: [f32; 4] = [0.0, 0.6, 0.0, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const RED_ROBOT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BLUE_ROBOT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 8 * 4);
        let inst = QuadInstance::cube(Vec2::new(1.0, 2.0), 3.0, colors::OBSTACLE);
        let bytes: &[u8] = bytemuck::bytes_of(&inst);
        assert_eq!(bytes.len(), 32);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[..4], &[1.0, 2.0, 3.0, 3.0]);
    }
}
