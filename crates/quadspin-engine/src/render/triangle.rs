use wgpu::util::DeviceExt;

use crate::paint::Color;

use super::common::{ColorMaterial, PositionVertex};
use super::{RenderCtx, RenderTarget, ShaderProgram};

/// Fixed triangle in NDC. No aspect correction is applied.
pub const TRIANGLE_VERTICES: [[f32; 3]; 3] = [
    [-0.6, -0.8, 0.0],
    [0.6, -0.8, 0.0],
    [0.0, 0.8, 0.0],
];

/// Static flat-colored triangle drawn without an index buffer.
pub struct Triangle {
    material: ColorMaterial,
    vbo: wgpu::Buffer,
}

impl Triangle {
    pub fn new(ctx: &RenderCtx<'_>, program: &ShaderProgram, color: Color) -> Self {
        let material = ColorMaterial::new(ctx, program, color, "quadspin triangle");

        let vertices = TRIANGLE_VERTICES.map(|position| PositionVertex { position });
        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadspin triangle vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("triangle created with material {:?}", program.name);

        Self { material, vbo }
    }

    pub fn render(&mut self, _ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let mut rpass = target.load_pass("quadspin triangle pass");
        rpass.set_pipeline(&self.material.pipeline);
        rpass.set_bind_group(0, &self.material.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.draw(0..TRIANGLE_VERTICES.len() as u32, 0..1);
    }
}

impl Drop for Triangle {
    fn drop(&mut self) {
        self.vbo.destroy();
        log::debug!("triangle released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_counter_clockwise() {
        let [a, b, c] = TRIANGLE_VERTICES;
        let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        assert!(cross > 0.0);
    }

    #[test]
    fn triangle_fits_in_ndc() {
        assert!(TRIANGLE_VERTICES.iter().flatten().all(|c| (-1.0..=1.0).contains(c)));
    }
}
