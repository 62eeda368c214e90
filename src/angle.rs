use std::f64::consts::TAU;

use crate::arc::normalize_angle;

/// Running angle of one animated arc, kept in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAccumulator {
    angle: f64,
}

impl AngleAccumulator {
    pub fn new(initial: f64) -> AngleAccumulator {
        AngleAccumulator {
            angle: normalize_angle(initial),
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Adds `delta` and wraps, so long running animations never lose precision.
    pub fn advance(&mut self, delta: f64) -> f64 {
        self.angle = normalize_angle(self.angle + delta);
        self.angle
    }
}

/// Angular speed that completes one full turn every `period` seconds.
pub fn turn_speed(period: f64) -> f64 {
    TAU / period
}

/// Elapsed time and completed full turns of an animation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationCounter {
    elapsed: f64,
    turns: u64,
    partial: f64,
}

impl RotationCounter {
    pub fn new() -> RotationCounter {
        RotationCounter::default()
    }

    /// `delta_angle` is expected to be non-negative.
    pub fn advance(&mut self, delta_time: f64, delta_angle: f64) {
        self.elapsed += delta_time;

        let swept = self.partial + delta_angle.max(0.0);
        self.turns += (swept / TAU).floor() as u64;
        self.partial = swept.rem_euclid(TAU);
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }
}
