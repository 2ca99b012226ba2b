use glam::Vec2;

use super::kinematic::{Body, Circular, Kinematic, validate_radius};
use crate::error::EntityError;

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    pub radius: f32,
}

impl Asteroid {
    /// Creates an asteroid, rejecting non-finite values and negative radii
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Result<Self, EntityError> {
        Ok(Self {
            body: Body::new(position, velocity)?,
            radius: validate_radius(radius)?,
        })
    }
}

impl Kinematic for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Circular for Asteroid {
    fn center(&self) -> Vec2 {
        self.body.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
