//! Control point generators for closed parametric shapes.
//!
//! Each generator samples its curve at `count` evenly spaced parameters in
//! `[0, 2π)` and appends a copy of the first point, so the returned set holds
//! `count + 1` points and always closes exactly.

use std::f32::consts::{SQRT_2, TAU};

use glam::Vec3;
use serde::Deserialize;

/// Closed shape used to seed a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlPointKind {
    /// Figure-eight (lemniscate of Bernoulli)
    #[default]
    Lemniscate,
    /// Classic heart curve
    Heart,
}

/// Build a closed control point set of the given kind with unit scale
pub fn build_control_points(kind: ControlPointKind, count: usize) -> Vec<Vec3> {
    build_scaled_control_points(kind, count, 1.0)
}

/// Build a closed control point set of the given kind
pub fn build_scaled_control_points(kind: ControlPointKind, count: usize, scale: f32) -> Vec<Vec3> {
    match kind {
        ControlPointKind::Lemniscate => lemniscate_points(count, scale),
        ControlPointKind::Heart => heart_points(count, scale),
    }
}

/// Lemniscate of Bernoulli with half-width `a * √2`
///
/// `x = a√2·cos t / (sin²t + 1)`, `y = a√2·cos t·sin t / (sin²t + 1)`
pub fn lemniscate_points(count: usize, a: f32) -> Vec<Vec3> {
    closed_samples(count, |t| {
        let (sin, cos) = t.sin_cos();
        let denominator = sin * sin + 1.0;
        Vec3::new(
            a * SQRT_2 * cos / denominator,
            a * SQRT_2 * cos * sin / denominator,
            0.0,
        )
    })
}

/// Heart curve normalized to roughly `[-1, 1]`, then scaled
///
/// `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`, both divided by 16.
pub fn heart_points(count: usize, scale: f32) -> Vec<Vec3> {
    closed_samples(count, |t| {
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        Vec3::new(x, y, 0.0) * (scale / 16.0)
    })
}

fn closed_samples(count: usize, curve: impl Fn(f32) -> Vec3) -> Vec<Vec3> {
    if count == 0 {
        return Vec::new();
    }

    let step = TAU / count as f32;
    let mut points: Vec<Vec3> = (0..count).map(|i| curve(i as f32 * step)).collect();
    points.push(points[0]);
    points
}
