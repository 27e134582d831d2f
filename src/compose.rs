//! The composer: five ordered drawing passes over one CPU pixmap.
//!
//! Every pass goes through one `vello_cpu` render context, gradient first;
//! the context replaces the pixmap contents on readback, so anything meant
//! to appear must be an op in the scene. Ops blend in call order, so later
//! passes win wherever they overlap.

use kurbo::Shape as _;

use crate::{
    core::{Canvas, FrameRgb8, Rgb8},
    error::{BackdropError, BackdropResult},
    fonts::{FontHandle, ResolvedFonts},
    layout::{self, LayoutSpec},
    text::{self, TextEngine},
    theme,
};

pub struct BackgroundComposer {
    canvas: Canvas,
    fonts: ResolvedFonts,
    layout: LayoutSpec,
}

impl BackgroundComposer {
    /// Validates the canvas up front; an unrenderable canvas is fatal before
    /// any drawing starts.
    pub fn new(canvas: Canvas, fonts: ResolvedFonts) -> BackdropResult<Self> {
        canvas.validate()?;
        Ok(Self {
            layout: LayoutSpec::for_canvas(canvas),
            canvas,
            fonts,
        })
    }

    /// Run all passes and return the finished frame. Deterministic: the same
    /// canvas, fonts, and layout always produce identical bytes.
    #[tracing::instrument(skip(self))]
    pub fn compose(&self) -> BackdropResult<FrameRgb8> {
        let width: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| BackdropError::canvas("canvas width exceeds u16"))?;
        let height: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| BackdropError::canvas("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        let mut ctx = vello_cpu::RenderContext::new(width, height);

        // Backdrop first: the render context replaces the pixmap wholesale,
        // so the gradient has to be part of the scene, not a pre-pass on the
        // pixel buffer.
        self.draw_gradient(&mut ctx);

        // Title and instruction line, both horizontally centered.
        let version = match self.fonts.face() {
            Some(face) => {
                let mut engine = TextEngine::new();

                let title = engine.layout_line(
                    theme::TITLE_TEXT,
                    face,
                    theme::TITLE_SIZE_PX,
                    theme::ACCENT_STEEL_BLUE,
                )?;
                let left = layout::centered_left(self.canvas.width, text::measured_width(&title));
                draw_text(&mut ctx, &title, left, self.layout.title_top, face);

                let instruction = engine.layout_line(
                    theme::INSTRUCTION_TEXT,
                    face,
                    theme::BODY_SIZE_PX,
                    theme::TEXT_GRAY,
                )?;
                let left = layout::centered_left(
                    self.canvas.width,
                    text::measured_width(&instruction),
                );
                draw_text(&mut ctx, &instruction, left, self.layout.instruction_top, face);

                // Laid out now, drawn last: the version label sits above the
                // silhouette in the pass order.
                let version = engine.layout_line(
                    theme::VERSION_LABEL,
                    face,
                    theme::BODY_SIZE_PX,
                    theme::VERSION_GRAY,
                )?;
                Some((version, face))
            }
            None => {
                tracing::warn!("no resolved font face; skipping text layers");
                None
            }
        };

        self.draw_arrow(&mut ctx);
        self.draw_silhouette(&mut ctx);

        if let Some((version, face)) = version {
            let left = layout::right_aligned_left(
                self.canvas.width,
                self.layout.version_right_inset,
                text::measured_width(&version),
            );
            draw_text(&mut ctx, &version, left, self.layout.version_top, face);
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(self.read_back(&pixmap))
    }

    fn draw_gradient(&self, ctx: &mut vello_cpu::RenderContext) {
        // One full-width rect per scanline; integer-aligned, so every pixel
        // is fully covered and carries the exact formula color.
        let width = f64::from(self.canvas.width);
        for y in 0..self.canvas.height {
            let row = theme::gradient_row(y, self.canvas.height);
            let top = f64::from(y);
            fill_rect(ctx, kurbo::Rect::new(0.0, top, width, top + 1.0), row);
        }
    }

    fn draw_arrow(&self, ctx: &mut vello_cpu::RenderContext) {
        let arrow = &self.layout.arrow;
        fill_rect(ctx, arrow.shaft_bounds(), theme::ARROW_GRAY);
        fill_path(ctx, &layout::triangle(arrow.head_points()), theme::ARROW_GRAY);
    }

    fn draw_silhouette(&self, ctx: &mut vello_cpu::RenderContext) {
        let cat = &self.layout.cat;
        fill_path(ctx, &layout::ellipse_in(cat.body).to_path(0.1), theme::SILHOUETTE_GRAY);
        fill_path(ctx, &layout::ellipse_in(cat.head).to_path(0.1), theme::SILHOUETTE_GRAY);
        for ear in cat.ears {
            fill_path(ctx, &layout::triangle(ear), theme::SILHOUETTE_GRAY);
        }
        for segment in &cat.tail {
            fill_path(
                ctx,
                &layout::ellipse_in(*segment).to_path(0.1),
                theme::SILHOUETTE_GRAY,
            );
        }
    }

    fn read_back(&self, pixmap: &vello_cpu::Pixmap) -> FrameRgb8 {
        // The gradient made every pixel opaque, so premultiplied RGBA8 and
        // straight RGB8 coincide; readback just drops the alpha byte.
        let mut data =
            Vec::with_capacity(self.canvas.width as usize * self.canvas.height as usize * 3);
        for px in pixmap.data_as_u8_slice().chunks_exact(4) {
            data.extend_from_slice(&px[..3]);
        }
        FrameRgb8 {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        }
    }
}

fn paint_color(color: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}

fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: kurbo::Rect, color: Rgb8) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(paint_color(color));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
}

fn fill_path(ctx: &mut vello_cpu::RenderContext, path: &kurbo::BezPath, color: Rgb8) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(paint_color(color));
    ctx.fill_path(&bezpath_to_cpu(path));
}

fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<Rgb8>,
    left: f64,
    top: f64,
    font: &FontHandle,
) {
    let font_data = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
        font.index,
    );

    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((left, top)));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(paint_color(brush));

            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font_data)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
