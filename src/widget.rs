// Fold widget module
// Pointer tracking and frame composition for the fold/turn corner effect

use crate::geometry::{self, Bounds, FoldGeometry, Point};
use crate::raster::Canvas;
use crate::style::FoldStyle;
use crate::text::LabelPainter;

/// Pointer event phase; every phase overwrites the tracked fold point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Motion,
    Release,
}

/// The fold/turn corner widget.
///
/// Holds the immutable style, the current bounds, and the last known
/// pointer position. All mutation happens on the event-dispatch thread;
/// geometry is derived fresh on every draw, never cached across frames.
pub struct FoldTurnWidget {
    style: FoldStyle,
    bounds: Bounds,
    fold_point: Point,
    pointer_seen: bool,
    needs_redraw: bool,
}

impl FoldTurnWidget {
    pub fn new(style: FoldStyle) -> Self {
        Self {
            style,
            bounds: Bounds::new(0.0, 0.0),
            fold_point: Point::new(0.0, 0.0),
            pointer_seen: false,
            needs_redraw: false,
        }
    }

    pub fn style(&self) -> &FoldStyle {
        &self.style
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn fold_point(&self) -> Point {
        self.fold_point
    }

    /// Whether a frame should be drawn; cleared by [`mark_drawn`]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn mark_drawn(&mut self) {
        self.needs_redraw = false;
    }

    /// Update bounds from a surface configure.
    ///
    /// Until the first pointer event arrives, the fold point rests at the
    /// configured initial fold width/height from the bottom-right corner.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.bounds = Bounds::new(width as f32, height as f32);
        if !self.pointer_seen {
            self.fold_point = Point::new(
                self.bounds.width - self.style.fold_width,
                self.bounds.height - self.style.fold_height,
            );
        }
        self.needs_redraw = true;
    }

    /// Track a pointer event. Press, motion, and release are treated
    /// alike: the fold point is overwritten and a redraw requested.
    pub fn handle_pointer(&mut self, _phase: PointerPhase, x: f64, y: f64) {
        self.fold_point = Point::new(x as f32, y as f32);
        self.pointer_seen = true;
        self.needs_redraw = true;
    }

    /// Crease geometry for the current frame, `None` when the corner is
    /// flat or the surface has no size yet
    pub fn geometry(&self) -> Option<FoldGeometry> {
        geometry::solve(self.fold_point, self.bounds)
    }

    /// Compose a full frame into the canvas.
    ///
    /// Layer order: card background, labels, fold triangle, mirror region
    /// clipped to the extended quad, fold face re-clipped to the triangle.
    pub fn render(&self, canvas: &mut Canvas, painter: &mut LabelPainter) {
        if self.bounds.is_empty() {
            return;
        }

        canvas.fill(self.style.card_color);
        self.render_labels(canvas, painter);

        let Some(geo) = self.geometry() else {
            return;
        };

        let triangle = geo.fold_triangle();
        let quad = geo.mirror_quad(self.bounds);

        canvas.fill_convex(&triangle, self.style.fold_color);

        canvas.push_clip(&quad);
        canvas.fill(self.style.mirror_color);
        canvas.push_clip(&triangle);
        canvas.fill(self.style.fold_color);
        canvas.pop_clip();
        canvas.pop_clip();
    }

    /// Draw only the text labels, used both by the CPU frame and to build
    /// the GPU label-overlay texture. Missing text skips that label.
    pub fn render_labels(&self, canvas: &mut Canvas, painter: &mut LabelPainter) {
        let margin = self.style.text_margin_left;
        if let Some(ref title) = self.style.title_text {
            painter.draw_label(
                canvas,
                title,
                self.style.title_color,
                self.style.title_size,
                (margin, 0.0),
            );
        }
        if let Some(ref size_text) = self.style.size_text {
            painter.draw_label(
                canvas,
                size_text,
                self.style.size_color,
                self.style.size_size,
                (margin, self.style.size_margin_top),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn widget() -> FoldTurnWidget {
        let mut w = FoldTurnWidget::new(FoldStyle {
            fold_color: Color::rgb(255, 0, 0),
            mirror_color: Color::rgb(0, 0, 255),
            card_color: Color::rgb(0, 255, 0),
            ..FoldStyle::default()
        });
        w.set_bounds(100, 100);
        w
    }

    #[test]
    fn every_pointer_phase_overwrites_and_dirties() {
        let mut w = widget();
        for (phase, x) in [
            (PointerPhase::Press, 80.0),
            (PointerPhase::Motion, 82.0),
            (PointerPhase::Release, 84.0),
        ] {
            w.mark_drawn();
            w.handle_pointer(phase, x, 90.0);
            assert_eq!(w.fold_point(), Point::new(x as f32, 90.0));
            assert!(w.needs_redraw());
        }
    }

    #[test]
    fn initial_fold_point_comes_from_style() {
        let mut w = FoldTurnWidget::new(FoldStyle::default());
        w.set_bounds(300, 200);
        assert_eq!(w.fold_point(), Point::new(252.0, 152.0));
    }

    #[test]
    fn resize_keeps_a_user_set_fold_point() {
        let mut w = widget();
        w.handle_pointer(PointerPhase::Motion, 80.0, 80.0);
        w.set_bounds(200, 200);
        assert_eq!(w.fold_point(), Point::new(80.0, 80.0));
    }

    #[test]
    fn zero_bounds_render_is_a_noop() {
        let w = FoldTurnWidget::new(FoldStyle::default());
        let mut buf = vec![0u8; 16 * 16 * 4];
        let mut canvas = Canvas::new(&mut buf, 16, 16);
        w.render(&mut canvas, &mut LabelPainter::new());
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn layer_order_fold_over_mirror_over_card() {
        let mut w = widget();
        // fold_w = fold_h = 20 -> A = (80, 100), B = (100, 80)
        w.handle_pointer(PointerPhase::Motion, 80.0, 80.0);

        let mut buf = vec![0u8; 100 * 100 * 4];
        let mut canvas = Canvas::new(&mut buf, 100, 100);
        w.render(&mut canvas, &mut LabelPainter::new());

        let fold = Color::rgb(255, 0, 0).to_bgra();
        let mirror = Color::rgb(0, 0, 255).to_bgra();
        let card = Color::rgb(0, 255, 0).to_bgra();

        // Inside the fold triangle (above the A-B crease)
        assert_eq!(canvas.pixel(85, 82), fold);
        // Inside the quad but past the crease: the mirrored back face
        assert_eq!(canvas.pixel(95, 95), mirror);
        // Far from the corner: plain card
        assert_eq!(canvas.pixel(50, 50), card);
        assert_eq!(canvas.pixel(10, 90), card);
    }

    #[test]
    fn flat_corner_renders_card_only() {
        let mut w = widget();
        w.handle_pointer(PointerPhase::Motion, 100.0, 100.0);

        let mut buf = vec![0u8; 100 * 100 * 4];
        let mut canvas = Canvas::new(&mut buf, 100, 100);
        w.render(&mut canvas, &mut LabelPainter::new());

        let card = Color::rgb(0, 255, 0).to_bgra();
        assert_eq!(canvas.pixel(99, 99), card);
        assert_eq!(canvas.pixel(50, 50), card);
    }

    #[test]
    fn absent_labels_draw_nothing() {
        let w = FoldTurnWidget::new(FoldStyle::default());
        let mut buf = vec![0u8; 64 * 32 * 4];
        let mut canvas = Canvas::new(&mut buf, 64, 32);
        w.render_labels(&mut canvas, &mut LabelPainter::new());
        assert!(buf.iter().all(|&b| b == 0));
    }
}
