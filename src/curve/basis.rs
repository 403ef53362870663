//! Cubic basis matrices and the shared segment evaluator
//!
//! Matrices are stored so that `G * M * T` yields a point, where `G` holds the
//! four control points as columns and `T = [t³, t², t, 1]`. Column `j` of each
//! constant is row `j` of the textbook basis.

use glam::{Mat4, Vec3, Vec4};

/// Cubic Bézier (Bernstein) basis
pub const BERNSTEIN: Mat4 = Mat4::from_cols_array(&[
    -1.0, 3.0, -3.0, 1.0, //
    3.0, -6.0, 3.0, 0.0, //
    -3.0, 3.0, 0.0, 0.0, //
    1.0, 0.0, 0.0, 0.0,
]);

/// Catmull-Rom basis (tension 0.5)
pub const CATMULL_ROM: Mat4 = Mat4::from_cols_array(&[
    -0.5, 1.5, -1.5, 0.5, //
    1.0, -2.5, 2.0, -0.5, //
    -0.5, 0.0, 0.5, 0.0, //
    0.0, 1.0, 0.0, 0.0,
]);

/// Parameter vector `[t³, t², t, 1]`
#[inline]
pub fn parameter_vector(t: f32) -> Vec4 {
    Vec4::new(t * t * t, t * t, t, 1.0)
}

/// Evaluate one cubic segment at `t`
///
/// The basis is applied to the geometry first, then the parameter vector.
pub fn evaluate_segment(basis: &Mat4, points: [Vec3; 4], t: f32) -> Vec3 {
    let geometry = Mat4::from_cols(
        points[0].extend(0.0),
        points[1].extend(0.0),
        points[2].extend(0.0),
        points[3].extend(0.0),
    );
    let blended = geometry * *basis;
    (blended * parameter_vector(t)).truncate()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [Vec3; 4] = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(3.0, 2.0, 1.0),
        Vec3::new(4.0, 0.0, 1.0),
    ];

    #[test]
    fn test_bernstein_endpoints() {
        assert_eq!(evaluate_segment(&BERNSTEIN, POINTS, 0.0), POINTS[0]);
        assert_eq!(evaluate_segment(&BERNSTEIN, POINTS, 1.0), POINTS[3]);
    }

    #[test]
    fn test_bernstein_midpoint() {
        // (P0 + 3 P1 + 3 P2 + P3) / 8
        let expected = (POINTS[0] + 3.0 * POINTS[1] + 3.0 * POINTS[2] + POINTS[3]) / 8.0;
        let mid = evaluate_segment(&BERNSTEIN, POINTS, 0.5);
        assert!((mid - expected).length() < 1e-5, "{mid} != {expected}");
    }

    #[test]
    fn test_catmull_rom_interpolates_inner_points() {
        assert_eq!(evaluate_segment(&CATMULL_ROM, POINTS, 0.0), POINTS[1]);
        let end = evaluate_segment(&CATMULL_ROM, POINTS, 1.0);
        assert!((end - POINTS[2]).length() < 1e-5);
    }

    #[test]
    fn test_basis_weights_sum_to_one() {
        for basis in [BERNSTEIN, CATMULL_ROM] {
            for step in 0..=10 {
                let weights = basis * parameter_vector(step as f32 / 10.0);
                let sum = weights.x + weights.y + weights.z + weights.w;
                assert!((sum - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_order_is_not_commutative() {
        // Applying the parameter vector through the transpose gives a different point.
        let t = parameter_vector(0.3);
        let correct = evaluate_segment(&CATMULL_ROM, POINTS, 0.3);
        let geometry = Mat4::from_cols(
            POINTS[0].extend(0.0),
            POINTS[1].extend(0.0),
            POINTS[2].extend(0.0),
            POINTS[3].extend(0.0),
        );
        let swapped = (geometry * CATMULL_ROM.transpose() * t).truncate();
        assert!((correct - swapped).length() > 1e-3);
    }
}
