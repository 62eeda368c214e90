use std::f64::consts::TAU;

use raylib::prelude::Color;

use super::{Demo, BACKGROUND, LEFT, STROKE, TOP};
use crate::angle::{turn_speed, AngleAccumulator, RotationCounter};
use crate::arc::{ArcError, ArcSpec};
use crate::canvas::{draw_arc_line, Canvas};
use crate::vector2::Vector2f;

/// Seconds per full rotation.
const ROTATION_PERIOD: f64 = 1.0;
const PERCENTAGE_BASE: f64 = 10.0 * TAU / 100.0;

const RADIUS: f32 = 5.0;
const THICKNESS: f32 = 0.2;
const LABEL_SIZE: f32 = 1.8;
const LABEL_COLOR: Color = Color::BLACK;

const LEFT_CENTER: Vector2f = Vector2f { x: 20.0, y: 80.0 };
const PERCENTAGE_CENTER: Vector2f = Vector2f { x: 40.0, y: 80.0 };
const TOP_CENTER: Vector2f = Vector2f { x: 80.0, y: 80.0 };

/// Arcs that turn at a fixed speed regardless of the frame rate.
pub struct TimedDemo {
    counter_clockwise: AngleAccumulator,
    percentage: AngleAccumulator,
    clockwise: AngleAccumulator,
    rotations: RotationCounter,
}

impl TimedDemo {
    pub fn new() -> TimedDemo {
        TimedDemo {
            counter_clockwise: AngleAccumulator::new(TAU),
            percentage: AngleAccumulator::new(TAU),
            clockwise: AngleAccumulator::new(TAU),
            rotations: RotationCounter::new(),
        }
    }

    fn labels(&self) -> [String; 2] {
        [
            format!("Seconds: {:.2}", self.rotations.elapsed()),
            format!("Rotations: {}", self.rotations.turns()),
        ]
    }

    fn arcs(&self) -> [ArcSpec<Color>; 3] {
        [
            ArcSpec::sweeping(
                LEFT_CENTER,
                RADIUS,
                LEFT,
                self.counter_clockwise.angle(),
                THICKNESS,
                STROKE,
            ),
            ArcSpec::sweeping(
                PERCENTAGE_CENTER,
                RADIUS,
                PERCENTAGE_BASE,
                self.percentage.angle(),
                THICKNESS,
                STROKE,
            ),
            ArcSpec::sweeping(
                TOP_CENTER,
                RADIUS,
                TOP,
                -self.clockwise.angle(),
                THICKNESS,
                STROKE,
            ),
        ]
    }
}

impl Demo for TimedDemo {
    fn title(&self) -> &'static str {
        "Arc: timed rotation"
    }

    fn frame_rate(&self) -> u32 {
        25
    }

    fn update(&mut self, delta: f64) {
        let step = turn_speed(ROTATION_PERIOD) * delta;

        self.rotations.advance(delta, step);
        self.counter_clockwise.advance(step);
        self.percentage.advance(step);
        self.clockwise.advance(step);
    }

    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), ArcError> {
        canvas.clear(BACKGROUND);

        let [seconds, rotations] = self.labels();
        canvas.text(
            LEFT_CENTER + Vector2f::new(0.0, -20.0),
            LABEL_SIZE,
            &seconds,
            LABEL_COLOR,
        );
        canvas.text(
            LEFT_CENTER + Vector2f::new(0.0, -30.0),
            LABEL_SIZE,
            &rotations,
            LABEL_COLOR,
        );

        for arc in self.arcs() {
            draw_arc_line(canvas, &arc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::canvas::RecordingCanvas;

    #[test]
    fn test_one_turn_per_period() {
        let mut demo = TimedDemo::new();
        for _ in 0..5 {
            demo.update(0.25);
        }

        for accumulator in [demo.counter_clockwise, demo.percentage, demo.clockwise] {
            assert!((accumulator.angle() - FRAC_PI_2).abs() < 1e-9);
        }
        assert_eq!(demo.labels(), ["Seconds: 1.25", "Rotations: 1"]);
    }

    #[test]
    fn test_labels_below_first_arc() {
        let mut demo = TimedDemo::new();
        demo.update(0.5);

        let mut canvas = RecordingCanvas::default();
        demo.render(&mut canvas).unwrap();

        let texts: Vec<_> = canvas.texts.iter().map(|(_, text)| text.as_str()).collect();
        assert_eq!(texts, ["Seconds: 0.50", "Rotations: 0"]);
        assert_eq!(canvas.texts[0].0, Vector2f::new(20.0, 60.0));
        assert_eq!(canvas.texts[1].0, Vector2f::new(20.0, 50.0));

        // half a turn on each of the three arcs
        let per_arc = canvas.lines.len() / 3;
        assert!(per_arc > 0);
    }

    #[test]
    fn test_frame_rate_does_not_change_speed() {
        let mut slow = TimedDemo::new();
        let mut fast = TimedDemo::new();

        for _ in 0..10 {
            slow.update(0.04);
        }
        for _ in 0..40 {
            fast.update(0.01);
        }

        assert!((slow.clockwise.angle() - fast.clockwise.angle()).abs() < 1e-9);
    }
}
