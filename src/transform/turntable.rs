//! Time-driven model rotation.

use std::f64::consts::TAU;

use glam::DMat4;
use web_time::{Duration, Instant};

/// Spins a model as a pure function of elapsed time.
///
/// The angle is `elapsed / period * 2π`; the model rotates around Y at that
/// angle and around X at half of it. Nothing accumulates between frames,
/// so sampling the same instant twice yields the same matrix.
#[derive(Debug, Clone, Copy)]
pub struct Turntable {
    period: Duration,
    origin: Instant,
}

impl Turntable {
    /// Start a turntable now with the given period for one Y revolution.
    /// A zero period is raised to one millisecond.
    #[must_use]
    pub fn started(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            origin: Instant::now(),
        }
    }

    /// Time for one full revolution around Y.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Y rotation angle in radians after `elapsed`.
    #[must_use]
    pub fn angle(&self, elapsed: Duration) -> f64 {
        elapsed.as_secs_f64() / self.period.as_secs_f64() * TAU
    }

    /// Model matrix after `elapsed`.
    #[must_use]
    pub fn model_at(&self, elapsed: Duration) -> DMat4 {
        let angle = self.angle(elapsed);
        DMat4::from_rotation_y(angle) * DMat4::from_rotation_x(angle / 2.0)
    }

    /// Model matrix for the current instant.
    #[must_use]
    pub fn model_now(&self) -> DMat4 {
        self.model_at(self.origin.elapsed())
    }
}

impl Default for Turntable {
    fn default() -> Self {
        Self::started(Duration::from_secs(6))
    }
}
