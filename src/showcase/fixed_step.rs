use std::f64::consts::TAU;

use raylib::prelude::Color;

use super::{Demo, BACKGROUND, LEFT, STROKE, TOP};
use crate::angle::AngleAccumulator;
use crate::arc::{ArcError, ArcSpec};
use crate::canvas::{draw_arc_line, Canvas};
use crate::vector2::Vector2f;

const STEP: f64 = 0.1;
const RADIUS: f32 = 5.0;
const THICKNESS: f32 = 0.2;

const COUNTER_CLOCKWISE_CENTER: Vector2f = Vector2f { x: 20.0, y: 80.0 };
const CLOCKWISE_CENTER: Vector2f = Vector2f { x: 60.0, y: 80.0 };

/// Two arcs growing by the same angle every frame, one in each direction.
pub struct FixedStepDemo {
    counter_clockwise: AngleAccumulator,
    clockwise: AngleAccumulator,
}

impl FixedStepDemo {
    pub fn new() -> FixedStepDemo {
        FixedStepDemo {
            counter_clockwise: AngleAccumulator::new(TAU),
            clockwise: AngleAccumulator::new(TAU),
        }
    }

    fn arcs(&self) -> [ArcSpec<Color>; 2] {
        [
            ArcSpec::sweeping(
                COUNTER_CLOCKWISE_CENTER,
                RADIUS,
                LEFT,
                self.counter_clockwise.angle(),
                THICKNESS,
                STROKE,
            ),
            ArcSpec::sweeping(
                CLOCKWISE_CENTER,
                RADIUS,
                TOP,
                -self.clockwise.angle(),
                THICKNESS,
                STROKE,
            ),
        ]
    }
}

impl Demo for FixedStepDemo {
    fn title(&self) -> &'static str {
        "Arc: fixed step"
    }

    fn frame_rate(&self) -> u32 {
        25
    }

    // the step is per frame, independent of the frame time
    fn update(&mut self, _delta: f64) {
        self.counter_clockwise.advance(STEP);
        self.clockwise.advance(STEP);
    }

    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), ArcError> {
        canvas.clear(BACKGROUND);
        for arc in self.arcs() {
            draw_arc_line(canvas, &arc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    const TOLERANCE: f32 = 0.001;

    #[test]
    fn test_nothing_drawn_before_first_step() {
        let demo = FixedStepDemo::new();
        let mut canvas = RecordingCanvas::default();

        demo.render(&mut canvas).unwrap();

        assert!(canvas.lines.is_empty());
    }

    #[test]
    fn test_arcs_grow_in_opposite_directions() {
        let mut demo = FixedStepDemo::new();
        for _ in 0..5 {
            demo.update(0.04);
        }
        assert!((demo.counter_clockwise.angle() - 0.5).abs() < 1e-12);

        let mut canvas = RecordingCanvas::default();
        demo.render(&mut canvas).unwrap();

        let (left, right): (Vec<_>, Vec<_>) = canvas
            .lines
            .iter()
            .partition(|line| line.from.x < 40.0);
        assert!(!left.is_empty() && !right.is_empty());

        // counterclockwise from the left runs below the center
        for line in left {
            assert!(line.to.y <= COUNTER_CLOCKWISE_CENTER.y + TOLERANCE);
            assert!((line.to.distance(COUNTER_CLOCKWISE_CENTER) - RADIUS).abs() < TOLERANCE);
        }

        // clockwise towards the top runs right of the center
        for line in right {
            assert!(line.to.x >= CLOCKWISE_CENTER.x - TOLERANCE);
            assert!((line.to.distance(CLOCKWISE_CENTER) - RADIUS).abs() < TOLERANCE);
        }
    }
}
