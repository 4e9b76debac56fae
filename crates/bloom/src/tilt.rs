use crate::geometry::{Point, Size};

/// Largest tilt, reached when the pointer is a full content dimension away
/// from the button center.
pub const MAX_TILT_DEGREES: f64 = 45.0;

/// Distance from the virtual camera to the drawing plane (8 inches at 72 dpi).
pub const CAMERA_DISTANCE: f64 = 576.0;

/// Row-major 3x3 homogeneous transform. Points map as column vectors
/// `(x, y, 1)`; the last row carries the perspective terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3(pub [[f64; 3]; 3]);

/// Affine coefficients in the `(xx, yx, xy, yy, x0, y0)` order used by
/// 2D graphics libraries: `x' = xx*x + xy*y + x0`, `y' = yx*x + yy*y + y0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Matrix3 {
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    /// `self * other`: applies `other` first.
    pub fn multiply(&self, other: &Matrix3) -> Matrix3 {
        let (a, b) = (&self.0, &other.0);
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a[row][k] * b[k][col]).sum();
            }
        }
        Matrix3(out)
    }

    pub fn map_point(&self, point: Point) -> Point {
        let m = &self.0;
        let w = m[2][0] * point.x + m[2][1] * point.y + m[2][2];
        Point::new(
            (m[0][0] * point.x + m[0][1] * point.y + m[0][2]) / w,
            (m[1][0] * point.x + m[1][1] * point.y + m[1][2]) / w,
        )
    }

    /// Best affine approximation of this transform around `at`, for surfaces
    /// that cannot express perspective. Exact for matrices without
    /// perspective terms.
    pub fn affine_at(&self, at: Point) -> Affine {
        let m = &self.0;
        let w = m[2][0] * at.x + m[2][1] * at.y + m[2][2];
        let mapped = self.map_point(at);

        // d(N/w) = (A - mapped * g^T) / w
        let (gx, gy) = (m[2][0], m[2][1]);
        let xx = (m[0][0] - mapped.x * gx) / w;
        let xy = (m[0][1] - mapped.x * gy) / w;
        let yx = (m[1][0] - mapped.y * gx) / w;
        let yy = (m[1][1] - mapped.y * gy) / w;

        Affine {
            xx,
            yx,
            xy,
            yy,
            x0: mapped.x - (xx * at.x + xy * at.y),
            y0: mapped.y - (yx * at.x + yy * at.y),
        }
    }
}

/// Perspective tip of the button toward the pointer while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub pivot: Point,
}

impl Tilt {
    /// `None` when the content box is empty.
    pub fn from_pointer(pivot: Point, pointer: Point, content: Size) -> Option<Self> {
        let size = content.max_dimension();
        if size <= 0.0 {
            return None;
        }

        let (offset_x, offset_y) = (pivot.x - pointer.x, pivot.y - pointer.y);
        Some(Self {
            rotate_x: offset_y / size * MAX_TILT_DEGREES,
            rotate_y: -offset_x / size * MAX_TILT_DEGREES,
            pivot,
        })
    }

    /// Rotates the plane about X then Y, projects it through the camera and
    /// moves the result so the rotation pivots on the button center.
    pub fn matrix(&self) -> Matrix3 {
        let (sx, cx) = self.rotate_x.to_radians().sin_cos();
        let (sy, cy) = self.rotate_y.to_radians().sin_cos();

        // Rx * Ry applied to (x, y, 0); only the first two columns matter.
        let r = [[cy, 0.0], [sx * sy, cx], [-cx * sy, sx]];

        let projection = Matrix3([
            [r[0][0], r[0][1], 0.0],
            [r[1][0], r[1][1], 0.0],
            [r[2][0] / CAMERA_DISTANCE, r[2][1] / CAMERA_DISTANCE, 1.0],
        ]);

        Matrix3::translation(self.pivot.x, self.pivot.y)
            .multiply(&projection)
            .multiply(&Matrix3::translation(-self.pivot.x, -self.pivot.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_tilt_angles() {
        let pivot = Point::new(200.0, 400.0);
        let content = Size::new(400.0, 400.0);

        let tilt = Tilt::from_pointer(pivot, Point::new(200.0, 0.0), content).unwrap();
        assert_eq!(tilt.rotate_x, 45.0);
        assert_eq!(tilt.rotate_y, 0.0);

        let tilt = Tilt::from_pointer(pivot, Point::new(400.0, 400.0), content).unwrap();
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 22.5);
    }

    #[test]
    fn test_empty_content_has_no_tilt() {
        assert_eq!(
            Tilt::from_pointer(Point::default(), Point::new(5.0, 5.0), Size::default()),
            None
        );
    }

    #[test]
    fn test_pointer_on_pivot_is_identity() {
        let pivot = Point::new(120.0, 300.0);
        let tilt = Tilt::from_pointer(pivot, pivot, Size::new(240.0, 300.0)).unwrap();
        let matrix = tilt.matrix();
        for point in [Point::new(0.0, 0.0), Point::new(50.0, 80.0), pivot] {
            assert_close(matrix.map_point(point), point);
        }
    }

    #[test]
    fn test_pivot_stays_fixed() {
        let pivot = Point::new(120.0, 300.0);
        let tilt = Tilt::from_pointer(pivot, Point::new(10.0, 40.0), Size::new(240.0, 300.0))
            .unwrap();
        assert_close(tilt.matrix().map_point(pivot), pivot);
    }

    #[test]
    fn test_tilt_foreshortens_away_from_pivot() {
        let pivot = Point::new(0.0, 0.0);
        let tilt = Tilt {
            rotate_x: 30.0,
            rotate_y: 0.0,
            pivot,
        };
        let mapped = tilt.matrix().map_point(Point::new(0.0, -100.0));
        assert!(mapped.y.abs() < 100.0);
        assert!(mapped.x.abs() < EPSILON);
    }

    #[test]
    fn test_affine_at_matches_pure_affine() {
        let matrix = Matrix3([[2.0, 0.5, 3.0], [0.25, 1.5, -4.0], [0.0, 0.0, 1.0]]);
        let affine = matrix.affine_at(Point::new(17.0, -3.0));
        assert_eq!(
            affine,
            Affine {
                xx: 2.0,
                yx: 0.25,
                xy: 0.5,
                yy: 1.5,
                x0: 3.0,
                y0: -4.0
            }
        );
    }

    #[test]
    fn test_affine_at_agrees_at_the_anchor() {
        let pivot = Point::new(100.0, 200.0);
        let matrix = Tilt::from_pointer(pivot, Point::new(30.0, 20.0), Size::new(200.0, 200.0))
            .unwrap()
            .matrix();
        let affine = matrix.affine_at(pivot);
        let approx = Point::new(
            affine.xx * pivot.x + affine.xy * pivot.y + affine.x0,
            affine.yx * pivot.x + affine.yy * pivot.y + affine.y0,
        );
        assert_close(approx, matrix.map_point(pivot));
    }

    #[test]
    fn test_multiply_applies_right_operand_first() {
        let moved = Matrix3::translation(5.0, 0.0).multiply(&Matrix3([
            [2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 1.0],
        ]));
        assert_close(moved.map_point(Point::new(1.0, 1.0)), Point::new(7.0, 2.0));
    }
}
