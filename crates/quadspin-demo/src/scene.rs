use anyhow::{Context, Result};
use glam::Vec2;

use quadspin_engine::paint::Color;
use quadspin_engine::render::{
    RenderCtx, RenderTarget, ShaderProgram, Square, Text, TextStyle, Triangle,
};
use quadspin_engine::text::Font;

use crate::config::{DemoConfig, Shape};

/// Label center, below the shape.
const LABEL_POSITION: Vec2 = Vec2::new(0.0, -0.8);

enum ShapeNode {
    Square(Square),
    Triangle(Triangle),
}

/// Everything drawn each frame: one shape, then the label on top.
pub struct Scene {
    shape: ShapeNode,
    label: Text,
}

impl Scene {
    pub fn new(ctx: &RenderCtx<'_>, config: &DemoConfig) -> Result<Self> {
        let dir = config.shader_dir.as_path();
        let default = ShaderProgram::load(ctx.device, dir, "default")
            .context("failed to load the default material")?;
        let text = ShaderProgram::load(ctx.device, dir, "text")
            .context("failed to load the text material")?;

        let font = Font::load(config.font.as_deref()).context("failed to load a font for the label")?;

        let color = Color::from_srgb_u8(255, 140, 40, 255);
        let shape = match config.shape {
            Shape::Square => ShapeNode::Square(
                Square::new(ctx, &default, color).with_speed(config.spin_deg_per_sec),
            ),
            Shape::Triangle => ShapeNode::Triangle(Triangle::new(ctx, &default, color)),
        };

        let label = Text::new(
            ctx,
            &text,
            &font,
            TextStyle {
                position: LABEL_POSITION,
                ..TextStyle::new(config.label.as_str())
            },
        )?;

        let (w, h) = label.texture_size();
        log::info!("scene ready: {:?}, label {:?} ({w}x{h} px)", config.shape, config.label);

        Ok(Self { shape, label })
    }

    /// Advances animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let ShapeNode::Square(square) = &mut self.shape {
            square.advance(dt);
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        match &mut self.shape {
            ShapeNode::Square(square) => square.render(ctx, target),
            ShapeNode::Triangle(triangle) => triangle.render(ctx, target),
        }
        self.label.render(ctx, target);
    }
}
