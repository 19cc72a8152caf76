//! Decorative cover tilt that follows the pointer while the book is closed.

/// Maximum rotation in degrees at the very edge of the cover.
pub const DEFAULT_MAX_TILT_DEGREES: f32 = 4.0;

/// Rotation offset in degrees around the horizontal (`x`) and vertical (`y`)
/// axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x: f32,
    pub y: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { x: 0.0, y: 0.0 };

    /// Tilt for a pointer at (`x`, `y`) inside a `width` by `height` box.
    pub fn from_pointer(x: f32, y: f32, width: f32, height: f32, max_degrees: f32) -> Self {
        if !(width > 0.0 && height > 0.0) || !x.is_finite() || !y.is_finite() {
            return Self::NEUTRAL;
        }
        let rel_x = (x / width - 0.5).clamp(-0.5, 0.5);
        let rel_y = (y / height - 0.5).clamp(-0.5, 0.5);
        // Scaled so the edge of the box reaches the full angle.
        let scale = max_degrees * 2.0;
        Self {
            x: rel_y * -scale,
            y: rel_x * scale,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    pub fn y_radians(&self) -> f32 {
        self.y.to_radians()
    }
}
