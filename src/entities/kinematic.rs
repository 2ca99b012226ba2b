use glam::Vec2;

use crate::error::EntityError;

/// Position and velocity shared by every moving object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    /// Creates a body, rejecting non-finite position or velocity
    pub fn new(position: Vec2, velocity: Vec2) -> Result<Self, EntityError> {
        if !position.is_finite() {
            return Err(EntityError::NonFinite { field: "position" });
        }
        if !velocity.is_finite() {
            return Err(EntityError::NonFinite { field: "velocity" });
        }
        Ok(Self { position, velocity })
    }

    /// A body with zero velocity
    pub fn at_rest(position: Vec2) -> Result<Self, EntityError> {
        Self::new(position, Vec2::ZERO)
    }
}

pub(crate) fn validate_radius(radius: f32) -> Result<f32, EntityError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(EntityError::InvalidRadius(radius))
    }
}

/// Anything integrated once per tick.
pub trait Kinematic {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    fn position(&self) -> Vec2 {
        self.body().position
    }

    fn velocity(&self) -> Vec2 {
        self.body().velocity
    }

    /// Euler step with an implicit dt of one frame.
    fn integrate(&mut self) {
        let body = self.body_mut();
        body.position += body.velocity;
    }
}

/// Bounding circle used for collision and culling, whatever the drawn shape.
pub trait Circular {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}
