// Software rasterizer module
// Convex polygon fills with clip-mask support over a BGRA shm canvas

use crate::geometry::Point;
use crate::style::Color;

/// An immediate-mode drawing target over a borrowed Argb8888 buffer.
///
/// Fills honor a stack of convex clip polygons; the effective clip region
/// is the intersection of every polygon on the stack. The stack is rebuilt
/// each frame, so no clip state leaks between draws.
pub struct Canvas<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    clip_stack: Vec<Vec<Point>>,
}

impl<'a> Canvas<'a> {
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            clip_stack: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intersect the clip region with a convex polygon
    pub fn push_clip(&mut self, polygon: &[Point]) {
        self.clip_stack.push(polygon.to_vec());
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn clipped(&self, x: f32, y: f32) -> bool {
        self.clip_stack
            .iter()
            .any(|poly| !point_in_convex(poly, x, y))
    }

    /// Fill the whole clip region with a color, like a canvas drawColor
    pub fn fill(&mut self, color: Color) {
        let bgra = color.to_bgra();
        for y in 0..self.height {
            for x in 0..self.width {
                let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
                if self.clipped(cx, cy) {
                    continue;
                }
                self.put_pixel(x, y, bgra);
            }
        }
    }

    /// Fill a convex polygon, restricted to the current clip region
    pub fn fill_convex(&mut self, polygon: &[Point], color: Color) {
        if polygon.len() < 3 {
            return;
        }

        let bgra = color.to_bgra();
        let (x0, y0, x1, y1) = self.pixel_bbox(polygon);
        for y in y0..y1 {
            for x in x0..x1 {
                let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
                if !point_in_convex(polygon, cx, cy) || self.clipped(cx, cy) {
                    continue;
                }
                self.put_pixel(x, y, bgra);
            }
        }
    }

    /// Alpha-blend a single pixel, used by the text rasterizer
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        if color.a == 0 {
            return;
        }

        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return;
        }

        let src = color.to_bgra();
        let alpha = src[3] as u32;
        let inv = 255 - alpha;
        for c in 0..3 {
            let blended = (src[c] as u32 * alpha + self.data[idx + c] as u32 * inv) / 255;
            self.data[idx + c] = blended as u8;
        }
        let out_a = alpha + self.data[idx + 3] as u32 * inv / 255;
        self.data[idx + 3] = out_a.min(255) as u8;
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    fn put_pixel(&mut self, x: u32, y: u32, bgra: [u8; 4]) {
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 < self.data.len() {
            self.data[idx] = bgra[0];
            self.data[idx + 1] = bgra[1];
            self.data[idx + 2] = bgra[2];
            self.data[idx + 3] = bgra[3];
        }
    }

    /// Pixel bounding box of a polygon, clamped to the canvas
    fn pixel_bbox(&self, polygon: &[Point]) -> (u32, u32, u32, u32) {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for p in polygon {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (
            min_x.floor().max(0.0) as u32,
            min_y.floor().max(0.0) as u32,
            (max_x.ceil() as u32).min(self.width),
            (max_y.ceil() as u32).min(self.height),
        )
    }
}

/// Point-in-convex-polygon test, tolerant of either winding order
fn point_in_convex(polygon: &[Point], x: f32, y: f32) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut sign = 0.0f32;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        let cross = (b.x - a.x) * (y - a.y) - (b.y - a.y) * (x - a.x);
        if cross.abs() < f32::EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 20;
    const H: u32 = 20;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn buffer() -> Vec<u8> {
        vec![0u8; (W * H * 4) as usize]
    }

    #[test]
    fn fill_covers_everything() {
        let mut buf = buffer();
        let mut canvas = Canvas::new(&mut buf, W, H);
        canvas.fill(RED);
        assert_eq!(canvas.pixel(0, 0), RED.to_bgra());
        assert_eq!(canvas.pixel(W - 1, H - 1), RED.to_bgra());
    }

    #[test]
    fn triangle_fill_stays_inside() {
        let mut buf = buffer();
        let mut canvas = Canvas::new(&mut buf, W, H);
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(0.0, 20.0),
        ];
        canvas.fill_convex(&tri, RED);
        // Inside, near the right-angle corner
        assert_eq!(canvas.pixel(2, 2), RED.to_bgra());
        // Outside, beyond the hypotenuse
        assert_eq!(canvas.pixel(18, 18), [0, 0, 0, 0]);
    }

    #[test]
    fn clip_restricts_fill() {
        let mut buf = buffer();
        let mut canvas = Canvas::new(&mut buf, W, H);
        let left_half = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 20.0),
            Point::new(0.0, 20.0),
        ];
        canvas.push_clip(&left_half);
        canvas.fill(BLUE);
        canvas.pop_clip();
        assert_eq!(canvas.pixel(5, 5), BLUE.to_bgra());
        assert_eq!(canvas.pixel(15, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut buf = buffer();
        let mut canvas = Canvas::new(&mut buf, W, H);
        let left_half = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 20.0),
            Point::new(0.0, 20.0),
        ];
        let top_half = [
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        canvas.push_clip(&left_half);
        canvas.push_clip(&top_half);
        canvas.fill(RED);
        assert_eq!(canvas.pixel(5, 5), RED.to_bgra());
        assert_eq!(canvas.pixel(5, 15), [0, 0, 0, 0]);
        assert_eq!(canvas.pixel(15, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn degenerate_polygon_fills_nothing() {
        let mut buf = buffer();
        let mut canvas = Canvas::new(&mut buf, W, H);
        canvas.fill_convex(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)], RED);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn blend_respects_alpha() {
        let mut buf = buffer();
        let mut canvas = Canvas::new(&mut buf, W, H);
        canvas.fill(Color::rgb(0, 0, 0));
        canvas.blend_pixel(3, 3, Color::rgba(255, 255, 255, 255));
        assert_eq!(canvas.pixel(3, 3), [255, 255, 255, 255]);

        canvas.blend_pixel(4, 4, Color::rgba(255, 255, 255, 0));
        assert_eq!(canvas.pixel(4, 4), Color::rgb(0, 0, 0).to_bgra());
    }

    #[test]
    fn blend_out_of_bounds_is_ignored() {
        let mut buf = buffer();
        let mut canvas = Canvas::new(&mut buf, W, H);
        canvas.blend_pixel(-1, 5, RED);
        canvas.blend_pixel(5, H as i32, RED);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
