use anyhow::Result;
use glam::Vec2;
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::paint::Color;
use crate::text::{Font, TextBitmap};

use super::common::{
    premul_alpha_blend, quad_index_buffer, triangle_list, TexturedVertex, QUAD_INDICES,
};
use super::{RenderCtx, RenderTarget, ShaderProgram};

/// What to draw and where.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub text: String,
    /// Font size in pixels.
    pub px: f32,
    pub color: Color,
    /// Center of the label in NDC.
    pub position: Vec2,
}

impl TextStyle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            px: 36.0,
            color: Color::WHITE,
            position: Vec2::ZERO,
        }
    }
}

/// Quad centered on `position` whose NDC extent equals the bitmap size in
/// pixels. `v` is flipped so texture row 0 lands on the top edge.
///
/// Order: bottom-left, bottom-right, top-right, top-left.
fn text_quad(position: Vec2, bitmap_size: (u32, u32), viewport: Viewport) -> [TexturedVertex; 4] {
    let [w, h] = viewport.pixels_to_ndc(bitmap_size.0 as f32, bitmap_size.1 as f32);
    let (hw, hh) = (w / 2.0, h / 2.0);
    let (x, y) = (position.x, position.y);

    [
        TexturedVertex { position: [x - hw, y - hh, 0.0], texcoord: [0.0, 1.0] },
        TexturedVertex { position: [x + hw, y - hh, 0.0], texcoord: [1.0, 1.0] },
        TexturedVertex { position: [x + hw, y + hh, 0.0], texcoord: [1.0, 0.0] },
        TexturedVertex { position: [x - hw, y + hh, 0.0], texcoord: [0.0, 0.0] },
    ]
}

/// A text label rasterized once into its own texture.
///
/// The texture is exactly the size of the rasterized bitmap. The quad is
/// rebuilt only when the viewport changes.
pub struct Text {
    style: TextStyle,
    bitmap_size: (u32, u32),

    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    texture: wgpu::Texture,
    _sampler: wgpu::Sampler,

    ibo: wgpu::Buffer,
    vbo: wgpu::Buffer,
    vbo_viewport: Viewport,
}

impl Text {
    pub fn new(
        ctx: &RenderCtx<'_>,
        program: &ShaderProgram,
        font: &Font,
        style: TextStyle,
    ) -> Result<Self> {
        let bitmap = font.rasterize(&style.text, style.px, style.color);

        let max_dim = ctx.device.limits().max_texture_dimension_2d;
        anyhow::ensure!(
            bitmap.width <= max_dim && bitmap.height <= max_dim,
            "text {:?} rasterizes to {}x{}, above the {max_dim}px texture limit",
            style.text,
            bitmap.width,
            bitmap.height,
        );

        let texture = upload_bitmap(ctx, &bitmap);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("quadspin text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("quadspin text bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadspin text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("quadspin text pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quadspin text pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &program.vertex,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[TexturedVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &program.fragment,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: triangle_list(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let bitmap_size = (bitmap.width, bitmap.height);
        let vbo = create_vbo(ctx, style.position, bitmap_size);
        let ibo = quad_index_buffer(ctx, "quadspin text ibo");

        log::debug!(
            "text {:?} rasterized to {}x{} with material {:?}",
            style.text,
            bitmap.width,
            bitmap.height,
            program.name
        );

        Ok(Self {
            style,
            bitmap_size,
            pipeline,
            bind_group,
            texture,
            _sampler: sampler,
            ibo,
            vbo,
            vbo_viewport: ctx.viewport,
        })
    }

    /// Texture size in pixels (equal to the rasterized bitmap).
    pub fn texture_size(&self) -> (u32, u32) {
        self.bitmap_size
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.vbo_viewport != ctx.viewport {
            let fresh = create_vbo(ctx, self.style.position, self.bitmap_size);
            std::mem::replace(&mut self.vbo, fresh).destroy();
            self.vbo_viewport = ctx.viewport;
        }

        let mut rpass = target.load_pass("quadspin text pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.set_index_buffer(self.ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}

impl Drop for Text {
    fn drop(&mut self) {
        self.vbo.destroy();
        self.ibo.destroy();
        self.texture.destroy();
        log::debug!("text {:?} released", self.style.text);
    }
}

fn create_vbo(ctx: &RenderCtx<'_>, position: Vec2, bitmap_size: (u32, u32)) -> wgpu::Buffer {
    let vertices = text_quad(position, bitmap_size, ctx.viewport);
    ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quadspin text vbo"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

fn upload_bitmap(ctx: &RenderCtx<'_>, bitmap: &TextBitmap) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: bitmap.width,
        height: bitmap.height,
        depth_or_array_layers: 1,
    };

    let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("quadspin text texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    ctx.queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &bitmap.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * bitmap.width),
            rows_per_image: Some(bitmap.height),
        },
        size,
    );

    texture
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn quad_is_centered_on_position() {
        let q = text_quad(Vec2::new(0.25, -0.5), (100, 40), Viewport::new(800.0, 600.0));
        let cx = q.iter().map(|v| v.position[0]).sum::<f32>() / 4.0;
        let cy = q.iter().map(|v| v.position[1]).sum::<f32>() / 4.0;
        assert!((cx - 0.25).abs() < EPS);
        assert!((cy + 0.5).abs() < EPS);
    }

    #[test]
    fn quad_extent_matches_pixel_size() {
        let q = text_quad(Vec2::ZERO, (200, 60), Viewport::new(800.0, 600.0));
        let w = q[1].position[0] - q[0].position[0];
        let h = q[2].position[1] - q[1].position[1];
        assert!((w - 0.5).abs() < EPS); // 200 / 800 * 2
        assert!((h - 0.2).abs() < EPS); // 60 / 600 * 2
    }

    #[test]
    fn texcoords_are_flipped_vertically() {
        let q = text_quad(Vec2::ZERO, (10, 10), Viewport::new(100.0, 100.0));
        assert_eq!(q[0].texcoord, [0.0, 1.0]); // bottom-left samples the last row
        assert_eq!(q[3].texcoord, [0.0, 0.0]); // top-left samples the first row
        assert!(q[3].position[1] > q[0].position[1]);
    }

    #[test]
    fn default_style_matches_label_defaults() {
        let s = TextStyle::new("hi");
        assert_eq!(s.text, "hi");
        assert_eq!(s.px, 36.0);
        assert_eq!(s.color, Color::WHITE);
        assert_eq!(s.position, Vec2::ZERO);
    }
}
