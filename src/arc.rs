use std::f64::consts::TAU;

use log::trace;
use thiserror::Error;

use crate::vector2::Vector2f;

const LOG_TARGET: &str = "arc_line";

pub const MIN_STEP: f64 = 0.001;
pub const MAX_STEP: f64 = 0.1;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ArcError {
    #[error("arc radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),
}

/// Arc swept counterclockwise from `start_angle` to `end_angle`, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec<C> {
    pub center: Vector2f,
    pub radius: f32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub thickness: f32,
    pub color: C,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<C> {
    pub from: Vector2f,
    pub to: Vector2f,
    pub thickness: f32,
    pub color: C,
}

impl<C: Copy> ArcSpec<C> {
    pub fn new(
        center: Vector2f,
        radius: f32,
        start_angle: f64,
        end_angle: f64,
        thickness: f32,
        color: C,
    ) -> ArcSpec<C> {
        ArcSpec {
            center,
            radius,
            start_angle,
            end_angle,
            thickness,
            color,
        }
    }

    /// A negative sweep runs clockwise and ends at `base`.
    pub fn sweeping(
        center: Vector2f,
        radius: f32,
        base: f64,
        sweep: f64,
        thickness: f32,
        color: C,
    ) -> ArcSpec<C> {
        let (start_angle, end_angle) = if sweep < 0.0 {
            (base + sweep, base)
        } else {
            (base, base + sweep)
        };
        ArcSpec::new(center, radius, start_angle, end_angle, thickness, color)
    }

    pub fn segments(&self) -> Result<ArcSegments<C>, ArcError> {
        let step = step_size(self.radius)?;
        let (start, end) = sweep_range(self.start_angle, self.end_angle);

        trace!(
            target: LOG_TARGET,
            "arc around {} r={}: {:.4}..{:.4} step {:.4}",
            self.center,
            self.radius,
            start,
            end,
            step
        );

        Ok(ArcSegments {
            center: self.center,
            radius: self.radius,
            thickness: self.thickness,
            color: self.color,
            step,
            t: start,
            end,
            previous: Vector2f::polar(self.center, self.radius, start),
        })
    }
}

pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // tiny negative angles round up to exactly TAU
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

pub fn step_size(radius: f32) -> Result<f64, ArcError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(ArcError::InvalidRadius(radius));
    }

    // chords keep roughly the same length whatever the radius
    let step = 1.0 / (3.0 * radius as f64 * TAU);
    Ok(step.clamp(MIN_STEP, MAX_STEP))
}

pub fn sweep_range(start_angle: f64, end_angle: f64) -> (f64, f64) {
    let start = normalize_angle(start_angle);
    let mut end = normalize_angle(end_angle);

    if end < start {
        end += TAU;
    }

    (start, end)
}

/// Polyline of an arc. There is no closing segment, so it may stop up to one
/// step short of the end angle.
#[derive(Debug, Clone)]
pub struct ArcSegments<C> {
    center: Vector2f,
    radius: f32,
    thickness: f32,
    color: C,
    step: f64,
    t: f64,
    end: f64,
    previous: Vector2f,
}

impl<C: Copy> Iterator for ArcSegments<C> {
    type Item = Segment<C>;

    fn next(&mut self) -> Option<Segment<C>> {
        let t = self.t + self.step;
        if !(t < self.end) {
            return None;
        }
        self.t = t;

        let current = Vector2f::polar(self.center, self.radius, t);
        let segment = Segment {
            from: self.previous,
            to: current,
            thickness: self.thickness,
            color: self.color,
        };
        self.previous = current;

        Some(segment)
    }
}

impl<C: Copy> std::iter::FusedIterator for ArcSegments<C> {}
