use raylib::prelude::{Color, RaylibDraw};

use crate::arc::{ArcError, ArcSpec};
use crate::vector2::Vector2f;

/// Drawing surface addressed in percent: x and y run from 0 to 100 with the
/// origin in the bottom-left corner and y pointing up.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Vector2f, to: Vector2f, thickness: f32, color: Color);
    fn text(&mut self, at: Vector2f, size: f32, text: &str, color: Color);
}

/// Draws the polyline of `spec` and returns the number of segments drawn.
pub fn draw_arc_line<K: Canvas + ?Sized>(
    canvas: &mut K,
    spec: &ArcSpec<Color>,
) -> Result<usize, ArcError> {
    let mut count = 0;
    for segment in spec.segments()? {
        canvas.line(segment.from, segment.to, segment.thickness, segment.color);
        count += 1;
    }
    Ok(count)
}

/// Maps percent coordinates onto a square centered in the window.
///
/// Both axes share one scale so circles stay round on non-square windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f32,
    // screen position of the percent origin
    origin: Vector2f,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Viewport {
        let (width, height) = (width.max(0) as f32, height.max(0) as f32);
        let side = width.min(height);

        Viewport {
            scale: side / 100.0,
            origin: Vector2f::new((width - side) / 2.0, height - (height - side) / 2.0),
        }
    }

    pub fn to_screen(&self, p: Vector2f) -> Vector2f {
        let scaled = p * self.scale;
        Vector2f::new(self.origin.x + scaled.x, self.origin.y - scaled.y)
    }

    pub fn to_pixels(&self, length: f32) -> f32 {
        length * self.scale
    }
}

pub struct ScreenCanvas<'a, D: RaylibDraw> {
    draw: &'a mut D,
    viewport: Viewport,
}

impl<'a, D: RaylibDraw> ScreenCanvas<'a, D> {
    pub fn new(draw: &'a mut D, width: i32, height: i32) -> ScreenCanvas<'a, D> {
        ScreenCanvas {
            draw,
            viewport: Viewport::new(width, height),
        }
    }
}

impl<'a, D: RaylibDraw> Canvas for ScreenCanvas<'a, D> {
    fn clear(&mut self, color: Color) {
        self.draw.clear_background(color);
    }

    fn line(&mut self, from: Vector2f, to: Vector2f, thickness: f32, color: Color) {
        self.draw.draw_line_ex(
            self.viewport.to_screen(from),
            self.viewport.to_screen(to),
            self.viewport.to_pixels(thickness),
            color,
        );
    }

    fn text(&mut self, at: Vector2f, size: f32, text: &str, color: Color) {
        let p = self.viewport.to_screen(at);
        // raylib's default font is unreadable below 10px
        let font_size = (self.viewport.to_pixels(size) as i32).max(10);
        self.draw.draw_text(text, p.x as i32, p.y as i32 - font_size, font_size, color);
    }
}

#[cfg(test)]
pub struct Line {
    pub from: Vector2f,
    pub to: Vector2f,
    pub thickness: f32,
    pub color: Color,
}

/// Canvas that remembers what was drawn on it.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingCanvas {
    pub clears: usize,
    pub lines: Vec<Line>,
    pub texts: Vec<(Vector2f, String)>,
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn clear(&mut self, _color: Color) {
        self.clears += 1;
    }

    fn line(&mut self, from: Vector2f, to: Vector2f, thickness: f32, color: Color) {
        self.lines.push(Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn text(&mut self, at: Vector2f, _size: f32, text: &str, _color: Color) {
        self.texts.push((at, text.to_owned()));
    }
}
