use log::info;
use raylib::prelude::Color;

use super::{Demo, BACKGROUND, LEFT, LOG_TARGET, STROKE};
use crate::arc::{ArcError, ArcSpec};
use crate::canvas::{draw_arc_line, Canvas};
use crate::vector2::Vector2f;

/// Regression check for a sweep of a single machine epsilon.
pub struct EpsilonDemo {
    arc: ArcSpec<Color>,
}

impl EpsilonDemo {
    pub fn new() -> EpsilonDemo {
        // distance from 1.0 to the next representable f64
        let epsilon = f64::EPSILON;
        info!(target: LOG_TARGET, "epsilon: {:e}", epsilon);

        EpsilonDemo {
            arc: ArcSpec::new(
                Vector2f::new(50.0, 50.0),
                5.0,
                LEFT,
                LEFT + epsilon,
                0.2,
                STROKE,
            ),
        }
    }
}

impl Demo for EpsilonDemo {
    fn title(&self) -> &'static str {
        "Arc: epsilon sweep"
    }

    fn frame_rate(&self) -> u32 {
        60
    }

    fn update(&mut self, _delta: f64) {}

    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), ArcError> {
        canvas.clear(BACKGROUND);
        draw_arc_line(canvas, &self.arc)?;
        Ok(())
    }
}
