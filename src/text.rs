//! Text shaping and measurement on top of Parley.

use crate::{
    core::Rgb8,
    error::{BackdropError, BackdropResult},
    fonts::FontHandle,
};

/// Stateful helper for building Parley text layouts from resolved font bytes.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgb8>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single line of text with the given face and size.
    /// No line breaking is applied; every string drawn on the backdrop is one
    /// line by construction.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &FontHandle,
        size_px: f32,
        brush: Rgb8,
    ) -> BackdropResult<parley::Layout<Rgb8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BackdropError::text("text size_px must be finite and > 0"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.as_ref().clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BackdropError::text("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BackdropError::text("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgb8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(layout)
    }
}

/// Measured width of a laid-out block: the widest line advance.
pub fn measured_width(layout: &parley::Layout<Rgb8>) -> f64 {
    let mut w = 0.0f64;
    for line in layout.lines() {
        w = w.max(f64::from(line.metrics().advance));
    }
    w
}
