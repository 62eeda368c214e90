use std::f64::consts::TAU;

use raylib::prelude::Color;

use super::{Demo, BACKGROUND, STROKE, TOP};
use crate::angle::AngleAccumulator;
use crate::arc::{ArcError, ArcSpec};
use crate::canvas::{draw_arc_line, Canvas};
use crate::vector2::Vector2f;

const STEP: f64 = 0.1;
const RADII: [f32; 3] = [5.0, 10.0, 20.0];
const THICKNESS: f32 = 0.5;

const COUNTER_CLOCKWISE_CENTER: Vector2f = Vector2f { x: 25.0, y: 50.0 };
const CLOCKWISE_CENTER: Vector2f = Vector2f { x: 75.0, y: 50.0 };
const CLOCKWISE_STROKE: Color = Color::new(0, 0, 128, 255);

/// Concentric arcs that show how the step size follows the radius.
pub struct RadiiDemo {
    counter_clockwise: AngleAccumulator,
    clockwise: AngleAccumulator,
}

impl RadiiDemo {
    pub fn new() -> RadiiDemo {
        RadiiDemo {
            counter_clockwise: AngleAccumulator::new(TAU),
            clockwise: AngleAccumulator::new(TAU),
        }
    }
}

impl Demo for RadiiDemo {
    fn title(&self) -> &'static str {
        "Arc: radii"
    }

    fn frame_rate(&self) -> u32 {
        50
    }

    fn update(&mut self, _delta: f64) {
        self.counter_clockwise.advance(STEP);
        self.clockwise.advance(STEP);
    }

    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), ArcError> {
        canvas.clear(BACKGROUND);

        for radius in RADII {
            let counter_clockwise = ArcSpec::sweeping(
                COUNTER_CLOCKWISE_CENTER,
                radius,
                TOP,
                self.counter_clockwise.angle(),
                THICKNESS,
                STROKE,
            );
            let clockwise = ArcSpec::sweeping(
                CLOCKWISE_CENTER,
                radius,
                TOP,
                -self.clockwise.angle(),
                THICKNESS,
                CLOCKWISE_STROKE,
            );

            draw_arc_line(canvas, &counter_clockwise)?;
            draw_arc_line(canvas, &clockwise)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    #[test]
    fn test_larger_radius_gets_more_segments() {
        let mut demo = RadiiDemo::new();
        for _ in 0..10 {
            demo.update(0.02);
        }

        let mut canvas = RecordingCanvas::default();
        demo.render(&mut canvas).unwrap();

        let counts: Vec<usize> = RADII
            .iter()
            .map(|&radius| {
                canvas
                    .lines
                    .iter()
                    .filter(|line| line.color.b == 0)
                    .filter(|line| {
                        (line.to.distance(COUNTER_CLOCKWISE_CENTER) - radius).abs() < 0.01
                    })
                    .count()
            })
            .collect();

        assert!(counts[0] > 0);
        assert!(counts[0] < counts[1] && counts[1] < counts[2]);
    }

    #[test]
    fn test_both_sides_match() {
        let mut demo = RadiiDemo::new();
        demo.update(0.02);

        let mut canvas = RecordingCanvas::default();
        demo.render(&mut canvas).unwrap();

        let blue = canvas.lines.iter().filter(|line| line.color.b == 128).count();
        let red = canvas.lines.len() - blue;
        assert_eq!(blue, red);
    }
}
