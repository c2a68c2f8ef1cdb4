use glam::{Mat3, Vec3};
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::paint::Color;

use super::common::{quad_index_buffer, ColorMaterial, PositionVertex, QUAD_INDICES};
use super::{RenderCtx, RenderTarget, ShaderProgram};

/// Unrotated corners: bottom-left, bottom-right, top-right, top-left.
pub const BASE_VERTICES: [Vec3; 4] = [
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
];

/// Rotates the base quad about Z by `angle_deg`, then applies the viewport
/// aspect scale so the quad stays square on screen.
pub fn rotated_vertices(angle_deg: f32, viewport: Viewport) -> [[f32; 3]; 4] {
    let rotation = Mat3::from_rotation_z(angle_deg.to_radians());
    let [sx, sy] = viewport.aspect_scale();
    let scale = Vec3::new(sx, sy, 1.0);

    BASE_VERTICES.map(|v| (rotation * v * scale).to_array())
}

/// A flat-colored square spinning about its center.
///
/// Every `render` rebuilds the rotation from the current angle, applies it to
/// the base quad, uploads the result as a new vertex buffer and destroys the
/// previous one. Nothing is patched in place or cached between frames.
pub struct Square {
    angle_deg: f32,
    speed_deg_per_sec: f32,

    material: ColorMaterial,
    ibo: wgpu::Buffer,
    vbo: wgpu::Buffer,
}

impl Square {
    pub fn new(ctx: &RenderCtx<'_>, program: &ShaderProgram, color: Color) -> Self {
        let material = ColorMaterial::new(ctx, program, color, "quadspin square");
        let ibo = quad_index_buffer(ctx, "quadspin square ibo");
        let vbo = create_vbo(ctx, 0.0);

        log::debug!("square created with material {:?}", program.name);

        Self {
            angle_deg: 0.0,
            speed_deg_per_sec: 0.0,
            material,
            ibo,
            vbo,
        }
    }

    /// Sets the spin rate used by [`advance`](Self::advance).
    pub fn with_speed(mut self, deg_per_sec: f32) -> Self {
        self.speed_deg_per_sec = deg_per_sec;
        self
    }

    pub fn angle(&self) -> f32 {
        self.angle_deg
    }

    /// Sets the rotation angle in degrees, wrapped to `[0, 360)`.
    pub fn set_angle(&mut self, angle_deg: f32) {
        self.angle_deg = angle_deg.rem_euclid(360.0);
    }

    /// Advances the rotation by `dt` seconds at the configured speed.
    pub fn advance(&mut self, dt: f32) {
        self.set_angle(self.angle_deg + self.speed_deg_per_sec * dt);
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let fresh = create_vbo(ctx, self.angle_deg);
        std::mem::replace(&mut self.vbo, fresh).destroy();

        let mut rpass = target.load_pass("quadspin square pass");
        rpass.set_pipeline(&self.material.pipeline);
        rpass.set_bind_group(0, &self.material.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.set_index_buffer(self.ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}

fn create_vbo(ctx: &RenderCtx<'_>, angle_deg: f32) -> wgpu::Buffer {
    let vertices = rotated_vertices(angle_deg, ctx.viewport).map(|position| PositionVertex { position });
    ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quadspin square vbo"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

impl Drop for Square {
    fn drop(&mut self) {
        self.vbo.destroy();
        self.ibo.destroy();
        log::debug!("square released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn zero_angle_on_square_viewport_is_base_quad() {
        let v = rotated_vertices(0.0, Viewport::new(600.0, 600.0));
        for (got, base) in v.iter().zip(BASE_VERTICES.iter()) {
            assert!(close(*got, base.to_array()));
        }
    }

    #[test]
    fn quarter_turn_moves_bottom_left_to_bottom_right() {
        let v = rotated_vertices(90.0, Viewport::new(600.0, 600.0));
        assert!(close(v[0], [0.5, -0.5, 0.0]), "{:?}", v[0]);
        assert!(close(v[1], [0.5, 0.5, 0.0]), "{:?}", v[1]);
    }

    #[test]
    fn full_turn_matches_zero() {
        let vp = Viewport::new(1920.0, 1080.0);
        let a = rotated_vertices(0.0, vp);
        let b = rotated_vertices(360.0, vp);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!(close(*x, *y));
        }
    }

    #[test]
    fn wide_viewport_compresses_x_only() {
        let v = rotated_vertices(0.0, Viewport::new(2000.0, 1000.0));
        let width = v[1][0] - v[0][0];
        let height = v[2][1] - v[1][1];
        assert!((width - 0.5).abs() < EPS);
        assert!((height - 1.0).abs() < EPS);
    }

    #[test]
    fn rotation_keeps_quad_centered() {
        let v = rotated_vertices(33.0, Viewport::new(1280.0, 720.0));
        let cx: f32 = v.iter().map(|p| p[0]).sum::<f32>() / 4.0;
        let cy: f32 = v.iter().map(|p| p[1]).sum::<f32>() / 4.0;
        assert!(cx.abs() < EPS && cy.abs() < EPS);
        assert!(v.iter().all(|p| p[2] == 0.0));
    }
}
