//! Frame-rate driven sampling of a tessellated path
//!
//! The path is treated as a closed loop: the index wraps from the last point
//! back to the first.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

/// Default number of path steps per second
pub const DEFAULT_SAMPLE_RATE: f32 = 90.0;

/// Position and heading read from a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSample {
    pub position: Vec3,
    pub next: Vec3,
    /// Rotation about Z in radians aligning the object's forward axis with the path
    pub heading: f32,
}

/// Current path index plus the time accumulated since it last advanced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    pub index: usize,
    pub elapsed: f32,
    rate: f32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl AnimationClock {
    /// Clock stepping `rate` times per second
    ///
    /// A zero, negative or non-finite rate falls back to [`DEFAULT_SAMPLE_RATE`].
    pub fn new(rate: f32) -> Self {
        Self {
            index: 0,
            elapsed: 0.0,
            rate: valid_rate(rate),
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Seconds between index advances
    pub fn frame_time(&self) -> f32 {
        1.0 / self.rate
    }

    /// Advance by `dt` seconds and sample `path`
    ///
    /// The index moves by at most one step per call. Returns `None` for an
    /// empty path.
    pub fn tick(&mut self, path: &[Vec3], dt: f32) -> Option<AnimationSample> {
        if path.is_empty() {
            return None;
        }

        self.index %= path.len();
        self.elapsed += dt;
        if self.elapsed >= self.frame_time() {
            self.index = (self.index + 1) % path.len();
            self.elapsed = 0.0;
        }

        Some(sample_at(path, self.index))
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = 0.0;
    }
}

/// `rate` if it is a usable steps-per-second value, otherwise the default
pub fn valid_rate(rate: f32) -> f32 {
    if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        log::warn!("Invalid sample rate {rate}; using {DEFAULT_SAMPLE_RATE}");
        DEFAULT_SAMPLE_RATE
    }
}

/// Value-style wrapper over [`AnimationClock::tick`]
pub fn sample_animation_position(
    path: &[Vec3],
    clock: AnimationClock,
    dt: f32,
) -> Option<(AnimationSample, AnimationClock)> {
    let mut clock = clock;
    let sample = clock.tick(path, dt)?;
    Some((sample, clock))
}

/// Point at `index`, the following point, and the heading between them
pub fn sample_at(path: &[Vec3], index: usize) -> AnimationSample {
    let position = path[index];
    let next = path[(index + 1) % path.len()];
    AnimationSample {
        position,
        next,
        heading: heading(position, next),
    }
}

/// `atan2(Δy, Δx)` offset by −90°
pub fn heading(from: Vec3, to: Vec3) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x) - FRAC_PI_2
}
