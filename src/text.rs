// Text rendering module
// Rasterizes label text into the software canvas via cosmic-text

use crate::raster::Canvas;
use crate::style::Color;
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};

/// Shapes and rasterizes the widget labels.
///
/// Owns the font system and glyph cache; both are expensive to build, so
/// one painter lives for the whole application and is reused every frame.
pub struct LabelPainter {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl LabelPainter {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Draw a single line of text with its top-left corner at `origin`.
    ///
    /// Empty text draws nothing. Glyph coverage is alpha-blended onto the
    /// canvas, modulated by the label color's own alpha.
    pub fn draw_label(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        color: Color,
        font_size: f32,
        origin: (f32, f32),
    ) {
        if text.is_empty() {
            return;
        }

        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        let max_width = canvas.width() as f32 - origin.0;
        buffer.set_size(&mut self.font_system, Some(max_width), None);
        buffer.set_text(
            &mut self.font_system,
            text,
            &Attrs::new().family(Family::SansSerif),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, true);

        let fg = cosmic_text::Color::rgba(color.r, color.g, color.b, color.a);
        let (ox, oy) = (origin.0 as i32, origin.1 as i32);
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            fg,
            |x, y, w, h, glyph_color| {
                if glyph_color.a() == 0 {
                    return;
                }
                let c = Color::rgba(
                    glyph_color.r(),
                    glyph_color.g(),
                    glyph_color.b(),
                    glyph_color.a(),
                );
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        canvas.blend_pixel(ox + x + dx, oy + y + dy, c);
                    }
                }
            },
        );
    }
}

impl Default for LabelPainter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_leaves_canvas_untouched() {
        let mut buf = vec![0u8; 64 * 32 * 4];
        let mut canvas = Canvas::new(&mut buf, 64, 32);
        let mut painter = LabelPainter::new();
        painter.draw_label(&mut canvas, "", Color::rgb(255, 255, 255), 14.0, (0.0, 0.0));
        assert!(buf.iter().all(|&b| b == 0));
    }
}
