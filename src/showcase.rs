use std::f64::consts::{FRAC_PI_2, PI};

use log::info;
use raylib::prelude::*;

use crate::arc::ArcError;
use crate::canvas::{Canvas, ScreenCanvas};
use crate::config::{Config, DemoKind};

mod epsilon;
mod fixed_step;
mod radii;
mod timed;

pub use epsilon::EpsilonDemo;
pub use fixed_step::FixedStepDemo;
pub use radii::RadiiDemo;
pub use timed::TimedDemo;

const LOG_TARGET: &str = "showcase";

// basic positions in radians
const TOP: f64 = FRAC_PI_2;
const LEFT: f64 = PI;

const BACKGROUND: Color = Color::WHITE;
const STROKE: Color = Color::new(128, 0, 0, 255);

pub trait Demo {
    fn title(&self) -> &'static str;
    fn frame_rate(&self) -> u32;
    /// Advances the animation by `delta` seconds.
    fn update(&mut self, delta: f64);
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), ArcError>;
}

pub fn build_demo(kind: DemoKind) -> Box<dyn Demo> {
    match kind {
        DemoKind::Epsilon => Box::new(EpsilonDemo::new()),
        DemoKind::FixedStep => Box::new(FixedStepDemo::new()),
        DemoKind::Timed => Box::new(TimedDemo::new()),
        DemoKind::Radii => Box::new(RadiiDemo::new()),
    }
}

pub struct Showcase {
    raylib_handle: RaylibHandle,
    raylib_thread: RaylibThread,
    demos: Vec<Box<dyn Demo>>,
    selected_demo: usize,
    frame_rate: Option<u32>,
}

impl Showcase {
    pub fn build(
        raylib_handle: RaylibHandle,
        raylib_thread: RaylibThread,
        config: &Config,
    ) -> Showcase {
        let demos = DemoKind::ALL.iter().map(|&kind| build_demo(kind)).collect();

        let mut showcase = Showcase {
            raylib_handle,
            raylib_thread,
            demos,
            selected_demo: config.demo.index(),
            frame_rate: config.fps,
        };
        showcase.apply_selection();
        showcase
    }

    pub fn process(&mut self) -> Result<bool, ArcError> {
        if self.raylib_handle.window_should_close() {
            return Ok(false);
        }

        self.handle_input();

        let delta = self.raylib_handle.get_frame_time() as f64;
        self.demos[self.selected_demo].update(delta);

        self.render()?;
        Ok(true)
    }

    fn handle_input(&mut self) {
        let count = self.demos.len();

        // select next/previous demo
        if self.raylib_handle.is_key_pressed(KeyboardKey::KEY_PAGE_UP) {
            self.select((self.selected_demo + 1) % count);
        }

        if self
            .raylib_handle
            .is_key_pressed(KeyboardKey::KEY_PAGE_DOWN)
        {
            self.select((self.selected_demo + count - 1) % count);
        }

        // select demos with number keys
        for i in 0..count {
            let key_by_number = match i {
                0 => KeyboardKey::KEY_ONE,
                1 => KeyboardKey::KEY_TWO,
                2 => KeyboardKey::KEY_THREE,
                3 => KeyboardKey::KEY_FOUR,
                _ => break,
            };

            if self.raylib_handle.is_key_pressed(key_by_number) {
                self.select(i);
            }
        }
    }

    fn select(&mut self, index: usize) {
        if index == self.selected_demo {
            return;
        }

        self.selected_demo = index;
        self.apply_selection();
    }

    fn apply_selection(&mut self) {
        let demo = &self.demos[self.selected_demo];
        let frame_rate = self.frame_rate.unwrap_or_else(|| demo.frame_rate());

        self.raylib_handle.set_target_fps(frame_rate);
        self.raylib_handle.set_window_title(&self.raylib_thread, demo.title());

        info!(
            target: LOG_TARGET,
            "showing {} at {} fps",
            demo.title(),
            frame_rate
        );
    }

    fn render(&mut self) -> Result<(), ArcError> {
        let width = self.raylib_handle.get_screen_width();
        let height = self.raylib_handle.get_screen_height();

        let mut d = self.raylib_handle.begin_drawing(&self.raylib_thread);
        let mut canvas = ScreenCanvas::new(&mut d, width, height);
        self.demos[self.selected_demo].render(&mut canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    #[test]
    fn test_every_demo_renders() {
        for kind in DemoKind::ALL {
            let mut demo = build_demo(kind);
            let mut canvas = RecordingCanvas::default();

            for _ in 0..3 {
                demo.update(0.04);
            }
            demo.render(&mut canvas).unwrap();

            assert_eq!(canvas.clears, 1);
            assert!(demo.frame_rate() > 0);
            assert!(!demo.title().is_empty());
        }
    }
}
