use crate::error::{Result, SimError};
use crate::{Bounds, Transform};

/// Process-wide movement values shared read-only by every mover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedMovementValues {
    pub base_speed: f32,
}

impl SharedMovementValues {
    pub fn new(base_speed: f32) -> Self {
        Self { base_speed }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_speed.is_finite() {
            Ok(())
        } else {
            Err(SimError::InvalidSpeed(self.base_speed))
        }
    }
}

/// What happened to a creature during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub mirrored_x: bool,
    pub mirrored_y: bool,
}

impl TickOutcome {
    /// True when the creature left the movement bounds on either axis
    pub fn wrapped(&self) -> bool {
        self.mirrored_x || self.mirrored_y
    }
}

/// Per-bird behaviour: climb along the local up axis, mirror when out of bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub bounds: Bounds,
}

impl Default for Mover {
    fn default() -> Self {
        Self::new(Bounds::MOVEMENT)
    }
}

impl Mover {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn tick(&self, transform: &mut Transform, values: &SharedMovementValues) -> TickOutcome {
        transform.translate_up(values.base_speed);
        self.react_on_out_of_bounds(transform)
    }

    /// Negate each coordinate that lies outside its bound. This mirrors the
    /// creature to the opposite side rather than offsetting it, and the two
    /// axes are checked independently.
    pub fn react_on_out_of_bounds(&self, transform: &mut Transform) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let position = &mut transform.position;

        if position.x < -self.bounds.x_bound || position.x > self.bounds.x_bound {
            position.x = -position.x;
            outcome.mirrored_x = true;
        }
        if position.y < -self.bounds.y_bound || position.y > self.bounds.y_bound {
            position.y = -position.y;
            outcome.mirrored_y = true;
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector2D;

    fn at(x: f32, y: f32, rotation: f32) -> Transform {
        Transform::new(Vector2D::new(x, y), rotation)
    }

    #[test]
    fn test_mirror_x_when_outside() {
        let mover = Mover::default();
        let mut transform = at(61.0, 0.0, 0.0);
        let outcome = mover.tick(&mut transform, &SharedMovementValues::new(0.0));

        assert_eq!(transform.position.x, -61.0);
        assert!(outcome.mirrored_x);
        assert!(!outcome.mirrored_y);
    }

    #[test]
    fn test_inside_bounds_untouched() {
        let mover = Mover::default();
        let mut transform = at(59.0, 0.0, 0.0);
        let outcome = mover.tick(&mut transform, &SharedMovementValues::new(0.0));

        assert_eq!(transform.position.x, 59.0);
        assert!(!outcome.wrapped());
    }

    #[test]
    fn test_edge_is_inside() {
        let mover = Mover::default();
        let mut transform = at(-60.0, 24.0, 0.0);
        let outcome = mover.tick(&mut transform, &SharedMovementValues::new(0.0));

        assert_eq!(transform.position, Vector2D::new(-60.0, 24.0));
        assert!(!outcome.wrapped());
    }

    #[test]
    fn test_both_axes_mirror_in_one_tick() {
        let mover = Mover::default();
        let mut transform = at(-70.0, 30.0, 0.0);
        let outcome = mover.tick(&mut transform, &SharedMovementValues::new(0.0));

        assert_eq!(transform.position, Vector2D::new(70.0, -30.0));
        assert!(outcome.mirrored_x && outcome.mirrored_y);
    }

    #[test]
    fn test_speed_step_then_mirror() {
        let mover = Mover::default();
        let mut transform = at(10.0, 23.5, 0.0);
        let outcome = mover.tick(&mut transform, &SharedMovementValues::new(1.0));

        assert_eq!(transform.position, Vector2D::new(10.0, -24.5));
        assert!(outcome.mirrored_y);
    }

    #[test]
    fn test_step_along_rotated_up() {
        let mover = Mover::default();
        let mut transform = at(0.0, 0.0, 180.0);
        mover.tick(&mut transform, &SharedMovementValues::new(0.5));

        assert!(transform.position.x.abs() < 1e-5);
        assert!((transform.position.y + 0.5).abs() < 1e-5);
    }
}
