#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub fn new(x: f32, y: f32) -> Vector2f {
        Vector2f { x, y }
    }

    /// Point at `angle` radians on the circle around `center`.
    ///
    /// Angle 0 points along +x and angles grow counterclockwise when y points
    /// up. The trigonometry runs in `f64` so that large accumulated angles keep
    /// their precision.
    pub fn polar(center: Vector2f, radius: f32, angle: f64) -> Vector2f {
        let radius = radius as f64;
        Vector2f {
            x: (center.x as f64 + radius * angle.cos()) as f32,
            y: (center.y as f64 + radius * angle.sin()) as f32,
        }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Vector2f) -> f32 {
        (*self - other).length()
    }
}

impl std::ops::Add for Vector2f {
    type Output = Vector2f;

    fn add(self, other: Vector2f) -> Vector2f {
        Vector2f {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vector2f {
    type Output = Vector2f;

    fn sub(self, other: Vector2f) -> Vector2f {
        Vector2f {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vector2f {
    type Output = Vector2f;

    fn mul(self, scalar: f32) -> Vector2f {
        Vector2f {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl std::fmt::Display for Vector2f {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vector2f> for raylib::ffi::Vector2 {
    fn from(v: Vector2f) -> raylib::ffi::Vector2 {
        raylib::ffi::Vector2 { x: v.x, y: v.y }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_polar_quarter_turns() {
        let center = Vector2f::new(10.0, 20.0);

        let right = Vector2f::polar(center, 5.0, 0.0);
        let top = Vector2f::polar(center, 5.0, FRAC_PI_2);
        let left = Vector2f::polar(center, 5.0, PI);

        assert!(right.distance(Vector2f::new(15.0, 20.0)) < EPSILON);
        assert!(top.distance(Vector2f::new(10.0, 25.0)) < EPSILON);
        assert!(left.distance(Vector2f::new(5.0, 20.0)) < EPSILON);
    }

    #[test]
    fn test_polar_keeps_radius_for_large_angles() {
        let center = Vector2f::new(50.0, 50.0);
        let p = Vector2f::polar(center, 5.0, 1.0e6);
        assert!((p.distance(center) - 5.0).abs() < EPSILON * 10.0);
    }

    #[test]
    fn test_distance() {
        let p = Vector2f::new(4.0, 6.0) - Vector2f::new(1.0, 2.0);
        assert_eq!(p.length(), 5.0);
        assert_eq!((p * 2.0).distance(p + p), 0.0);
    }
}
