mod colour;
mod creature;
pub mod error;
mod mover;
pub mod spawner;
mod world;

pub use colour::{Colour, ColourScale};
pub use creature::{Creature, CreatureId, CreatureTag, Holder, Prefab, Transform};
pub use error::{Result, SimError};
pub use mover::{Mover, SharedMovementValues, TickOutcome};
pub use spawner::{SpawnConfig, Spawner, Split, SummonReport};
pub use world::{MovementConfig, TickSummary, World, WorldBuilder};

/// A 2D vector used for positions and headings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const UP: Vector2D = Vector2D { x: 0.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate counter-clockwise by `degrees`
    pub fn rotated(&self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Axis-aligned rectangle centred on the origin, given by its half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_bound: f32,
    pub y_bound: f32,
}

impl Bounds {
    /// Region creatures are spawned into
    pub const SPAWN: Bounds = Bounds {
        x_bound: 55.0,
        y_bound: 20.0,
    };

    /// Region a bird may leave before it is mirrored
    pub const MOVEMENT: Bounds = Bounds {
        x_bound: 60.0,
        y_bound: 24.0,
    };

    pub fn new(x_bound: f32, y_bound: f32) -> Self {
        Self { x_bound, y_bound }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v >= 0.0;
        if ok(self.x_bound) && ok(self.y_bound) {
            Ok(())
        } else {
            Err(SimError::InvalidBounds {
                x: self.x_bound,
                y: self.y_bound,
            })
        }
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Vector2D) -> bool {
        point.x >= -self.x_bound
            && point.x <= self.x_bound
            && point.y >= -self.y_bound
            && point.y <= self.y_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        let sum = v1 + v2;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = v2 - v1;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        let scaled = v1 * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);
    }

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_rotated_keeps_length() {
        for degrees in [0.0, 45.0, 90.0, 137.0, 359.0] {
            let rotated = Vector2D::UP.rotated(degrees);
            assert!((rotated.magnitude() - 1.0).abs() < 1e-5);
        }
        let left = Vector2D::UP.rotated(90.0);
        assert!((left.x + 1.0).abs() < 1e-5);
        assert!(left.y.abs() < 1e-5);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::SPAWN;
        assert!(bounds.contains(Vector2D::new(55.0, -20.0)));
        assert!(!bounds.contains(Vector2D::new(55.1, 0.0)));
        assert!(!bounds.contains(Vector2D::new(0.0, -20.5)));
    }

    #[test]
    fn test_bounds_validate() {
        assert!(Bounds::MOVEMENT.validate().is_ok());
        assert!(Bounds::new(f32::INFINITY, 1.0).validate().is_err());
        assert!(Bounds::new(1.0, -0.5).validate().is_err());
    }
}
