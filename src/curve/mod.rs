//! Parametric curve generation
//!
//! Three interpolation strategies turn a control point set into a tessellated
//! path:
//! - **Bezier**: one global Bernstein blend over every control point
//! - **SegmentedBezier**: cubic segments over windows of 4 advancing by 3
//! - **CatmullRom**: cubic segments over every window of 4 (advancing by 1)
//!
//! The two matrix-form strategies share [`basis::evaluate_segment`].

pub mod basis;
mod generators;
mod sampler;

pub use generators::*;
pub use sampler::*;

use glam::{Mat4, Vec3};
use serde::Deserialize;

use basis::{evaluate_segment, BERNSTEIN, CATMULL_ROM};

/// Interpolation strategy used to tessellate a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveStrategy {
    /// Global Bézier of degree `n - 1`
    Bezier,
    /// Joined cubic Bézier segments sharing endpoints
    SegmentedBezier,
    /// Local cubic interpolant through every control point
    #[default]
    CatmullRom,
}

impl CurveStrategy {
    /// Fixed basis matrix for the matrix-form strategies
    pub fn basis(&self) -> Option<&'static Mat4> {
        match self {
            CurveStrategy::Bezier => None,
            CurveStrategy::SegmentedBezier => Some(&BERNSTEIN),
            CurveStrategy::CatmullRom => Some(&CATMULL_ROM),
        }
    }

    /// How far the 4-point window advances between segments
    fn window_step(&self) -> usize {
        match self {
            CurveStrategy::SegmentedBezier => 3,
            _ => 1,
        }
    }
}

/// Tessellate a control point set
///
/// For the segmented strategies `samples` is the number of points per
/// segment, taken at `t = j / samples` for `j` in `0..samples`. For
/// [`CurveStrategy::Bezier`] it is the number of steps over `[0, 1]`, giving
/// `samples + 1` points. Catmull-Rom expects the set to be padded already
/// (see [`pad_endpoints`]).
pub fn generate_curve(points: &[Vec3], strategy: CurveStrategy, samples: usize) -> Vec<Vec3> {
    match strategy.basis() {
        None => global_bezier(points, samples),
        Some(basis) => segmented(points, basis, strategy.window_step(), samples),
    }
}

/// Global Bézier: `Σ C(n,i)·(1−t)^(n−i)·t^i·Pᵢ` at `samples + 1` even steps
pub fn global_bezier(points: &[Vec3], samples: usize) -> Vec<Vec3> {
    if points.is_empty() {
        return Vec::new();
    }

    let degree = points.len() - 1;
    // C(n, n/2) leaves f32 range at about 130 points, so weights stay in f64
    let coefficients: Vec<f64> = (0..=degree).map(|i| binomial(degree, i)).collect();

    (0..=samples)
        .map(|step| {
            let t = if samples == 0 {
                0.0
            } else {
                step as f64 / samples as f64
            };
            points
                .iter()
                .zip(&coefficients)
                .enumerate()
                .fold(Vec3::ZERO, |acc, (i, (point, c))| {
                    let weight = c * (1.0 - t).powi((degree - i) as i32) * t.powi(i as i32);
                    acc + *point * weight as f32
                })
        })
        .collect()
}

/// Matrix-form cubic segments over 4-point windows advancing by `step`
fn segmented(points: &[Vec3], basis: &Mat4, step: usize, samples: usize) -> Vec<Vec3> {
    if points.len() < 4 || samples == 0 {
        return Vec::new();
    }

    let segment_count = (points.len() - 4) / step + 1;
    let mut curve = Vec::with_capacity(segment_count * samples);

    for window in points.windows(4).step_by(step) {
        let window = [window[0], window[1], window[2], window[3]];
        for j in 0..samples {
            let t = j as f32 / samples as f32;
            curve.push(evaluate_segment(basis, window, t));
        }
    }

    curve
}

/// Duplicate the first and last point so Catmull-Rom reaches both ends
pub fn pad_endpoints(points: &[Vec3]) -> Vec<Vec3> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut padded = Vec::with_capacity(points.len() + 2);
    padded.push(*first);
    padded.extend_from_slice(points);
    padded.push(*last);
    padded
}

/// Binomial coefficient `C(n, k)`
fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// A control point set together with its tessellated path
#[derive(Debug, Clone)]
pub struct Curve {
    strategy: CurveStrategy,
    samples: usize,
    control_points: Vec<Vec3>,
    points: Vec<Vec3>,
}

impl Curve {
    /// Build a curve; Catmull-Rom control sets are padded first
    pub fn new(strategy: CurveStrategy, control_points: Vec<Vec3>, samples: usize) -> Self {
        let control_points = match strategy {
            CurveStrategy::CatmullRom => pad_endpoints(&control_points),
            _ => control_points,
        };
        let mut curve = Self {
            strategy,
            samples,
            control_points,
            points: Vec::new(),
        };
        curve.regenerate();
        curve
    }

    pub fn strategy(&self) -> CurveStrategy {
        self.strategy
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Control points as stored (padded for Catmull-Rom)
    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    /// Tessellated path
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Basis matrix, `None` for the global Bézier
    pub fn basis(&self) -> Option<&'static Mat4> {
        self.strategy.basis()
    }

    /// Replace the control points and regenerate the path
    pub fn set_control_points(&mut self, control_points: Vec<Vec3>) {
        self.control_points = match self.strategy {
            CurveStrategy::CatmullRom => pad_endpoints(&control_points),
            _ => control_points,
        };
        self.regenerate();
    }

    /// Change the point density and regenerate the path
    pub fn set_samples(&mut self, samples: usize) {
        self.samples = samples;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.points = generate_curve(&self.control_points, self.strategy, self.samples);
        log::debug!(
            "Generated {:?} curve: {} control points -> {} points",
            self.strategy,
            self.control_points.len(),
            self.points.len()
        );
    }
}
