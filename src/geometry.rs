// Fold geometry module
// Computes the crease geometry for the paper-fold illusion

/// Minimum fold extent in device pixels below which the corner is
/// considered flat and no fold is drawn. Keeps the solver away from the
/// zero-denominator case at the exact bottom-right corner.
pub const MIN_FOLD_EXTENT: f32 = 1.0;

/// A point in surface-local device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Widget bounds in device pixels, updated on every surface configure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has been laid out at all
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Clamp a pointer position into the lower-right quadrant.
    ///
    /// The fold origin never moves above or left of the widget center, so
    /// both coordinates are held at no less than half the corresponding
    /// dimension (and no more than the dimension itself).
    pub fn clamp_fold_point(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.width / 2.0, self.width),
            point.y.clamp(self.height / 2.0, self.height),
        )
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.width, self.height)
    }
}

/// Derived crease geometry for one frame.
///
/// `focus_a` sits on the bottom edge, `focus_b` on the right edge. The
/// fold triangle is `fold_point -> focus_b -> focus_a`; adding the
/// bottom-right corner between B and A yields the mirror-region quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldGeometry {
    pub fold_point: Point,
    pub focus_a: Point,
    pub focus_b: Point,
}

impl FoldGeometry {
    /// Outer fold-triangle path: fold point -> B -> A, closed
    pub fn fold_triangle(&self) -> [Point; 3] {
        [self.fold_point, self.focus_b, self.focus_a]
    }

    /// Extended quad including the bottom-right corner, used as the clip
    /// mask for the mirrored region: fold point -> B -> corner -> A
    pub fn mirror_quad(&self, bounds: Bounds) -> [Point; 4] {
        [
            self.fold_point,
            self.focus_b,
            bounds.bottom_right(),
            self.focus_a,
        ]
    }
}

/// Solve the crease geometry for a pointer position.
///
/// The pointer is first clamped into the lower-right quadrant. With the
/// horizontal fold extent `w = W - px` and vertical extent `h = H - py`,
/// the perpendicular through the pointer meets the bottom edge at
/// `A = (W - c/2w, H)` and the right edge at `B = (W, H - c/2h)` where
/// `c = w^2 + h^2`. Both offsets are clamped to at most half the
/// corresponding dimension so the crease stays on the near half of each
/// edge.
///
/// Returns `None` for empty bounds or when either fold extent falls below
/// [`MIN_FOLD_EXTENT`] (the corner is flat, nothing to draw).
pub fn solve(point: Point, bounds: Bounds) -> Option<FoldGeometry> {
    if bounds.is_empty() {
        return None;
    }

    let fold_point = bounds.clamp_fold_point(point);
    let fold_w = bounds.width - fold_point.x;
    let fold_h = bounds.height - fold_point.y;

    if fold_w < MIN_FOLD_EXTENT || fold_h < MIN_FOLD_EXTENT {
        return None;
    }

    let c = fold_w * fold_w + fold_h * fold_h;
    let x = (c / (2.0 * fold_w)).min(bounds.width / 2.0);
    let y = (c / (2.0 * fold_h)).min(bounds.height / 2.0);

    Some(FoldGeometry {
        fold_point,
        focus_a: Point::new(bounds.width - x, bounds.height),
        focus_b: Point::new(bounds.width, bounds.height - y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(300.0, 200.0);

    #[test]
    fn worked_example() {
        let geo = solve(Point::new(250.0, 150.0), BOUNDS).unwrap();
        assert_eq!(geo.fold_point, Point::new(250.0, 150.0));
        // fold_w = fold_h = 50, c = 5000, x = y = 50
        assert_eq!(geo.focus_a, Point::new(250.0, 200.0));
        assert_eq!(geo.focus_b, Point::new(300.0, 150.0));
    }

    #[test]
    fn clamp_into_lower_right_quadrant() {
        let clamped = BOUNDS.clamp_fold_point(Point::new(10.0, 10.0));
        assert_eq!(clamped, Point::new(150.0, 100.0));

        let clamped = BOUNDS.clamp_fold_point(Point::new(1000.0, 1000.0));
        assert_eq!(clamped, Point::new(300.0, 200.0));
    }

    #[test]
    fn focal_points_stay_on_near_half_edges() {
        // Sweep the full quadrant; A must stay on the right half of the
        // bottom edge and B on the lower half of the right edge.
        for px in (150..300).step_by(7) {
            for py in (100..200).step_by(7) {
                let point = Point::new(px as f32, py as f32);
                if let Some(geo) = solve(point, BOUNDS) {
                    assert!(geo.focus_a.x >= 150.0 && geo.focus_a.x <= 300.0);
                    assert_eq!(geo.focus_a.y, 200.0);
                    assert!(geo.focus_b.y >= 100.0 && geo.focus_b.y <= 200.0);
                    assert_eq!(geo.focus_b.x, 300.0);
                }
            }
        }
    }

    #[test]
    fn exact_corner_is_flat() {
        // Zero fold extent would divide by zero; policy is "no fold"
        assert_eq!(solve(Point::new(300.0, 200.0), BOUNDS), None);
        assert_eq!(solve(Point::new(300.0, 150.0), BOUNDS), None);
        assert_eq!(solve(Point::new(250.0, 200.0), BOUNDS), None);
    }

    #[test]
    fn just_inside_the_extent_floor_still_folds() {
        let geo = solve(Point::new(299.0, 199.0), BOUNDS).unwrap();
        assert!(geo.focus_a.x.is_finite());
        assert!(geo.focus_b.y.is_finite());
    }

    #[test]
    fn solver_is_pure() {
        let point = Point::new(260.0, 170.0);
        assert_eq!(solve(point, BOUNDS), solve(point, BOUNDS));
    }

    #[test]
    fn resize_recomputes_consistently() {
        // Minimum pointer, then new bounds: foci follow the new W, H
        let geo = solve(Point::new(150.0, 100.0), BOUNDS).unwrap();
        assert_eq!(geo.focus_a.y, 200.0);
        assert_eq!(geo.focus_b.x, 300.0);

        let grown = Bounds::new(600.0, 400.0);
        let geo = solve(Point::new(150.0, 100.0), grown).unwrap();
        // Pointer gets re-clamped to the new center
        assert_eq!(geo.fold_point, Point::new(300.0, 200.0));
        assert_eq!(geo.focus_a.y, 400.0);
        assert_eq!(geo.focus_b.x, 600.0);
    }

    #[test]
    fn empty_bounds_yield_no_fold() {
        assert_eq!(solve(Point::new(10.0, 10.0), Bounds::new(0.0, 0.0)), None);
    }

    #[test]
    fn mirror_quad_includes_the_corner() {
        let geo = solve(Point::new(250.0, 150.0), BOUNDS).unwrap();
        let quad = geo.mirror_quad(BOUNDS);
        assert_eq!(quad[2], Point::new(300.0, 200.0));
        assert_eq!(geo.fold_triangle()[0], geo.fold_point);
    }
}
