// Fixed screen camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Maps screen pixels (origin top-left, y down) to clip space
#[derive(Debug, Clone)]
pub struct Camera {
    /// Logical screen width in pixels
    width: f32,
    /// Logical screen height in pixels
    height: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            view_proj: Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0),
        }
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Largest area of a `surface_width` x `surface_height` target that
    /// keeps the screen's aspect ratio, centred
    pub fn viewport(&self, surface_width: u32, surface_height: u32) -> Viewport {
        let surface = Vec2::new(surface_width as f32, surface_height as f32);
        let scale = (surface.x / self.width).min(surface.y / self.height);
        let size = Vec2::new(self.width, self.height) * scale;

        Viewport {
            origin: (surface - size) / 2.0,
            size,
        }
    }
}

/// Rectangle of the render target in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
