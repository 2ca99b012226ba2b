use glam::Vec2;

use super::kinematic::{Body, Circular, Kinematic, validate_radius};
use crate::error::EntityError;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub body: Body,
    pub radius: f32,
}

impl Projectile {
    /// Creates a projectile, rejecting non-finite values and negative radii
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Result<Self, EntityError> {
        Ok(Self {
            body: Body::new(position, velocity)?,
            radius: validate_radius(radius)?,
        })
    }
}

impl Kinematic for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Circular for Projectile {
    fn center(&self) -> Vec2 {
        self.body.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_new() {
        let projectile = Projectile::new(Vec2::new(10.0, 10.0), Vec2::new(3.0, 0.0), 5.0).unwrap();
        assert_eq!(projectile.position(), Vec2::new(10.0, 10.0));
        assert_eq!(projectile.velocity(), Vec2::new(3.0, 0.0));
        assert_eq!(projectile.radius(), 5.0);
    }

    #[test]
    fn test_projectile_moves_by_velocity() {
        let mut projectile =
            Projectile::new(Vec2::new(10.0, 10.0), Vec2::new(0.0, -3.0), 5.0).unwrap();
        projectile.integrate();
        assert_eq!(projectile.position(), Vec2::new(10.0, 7.0));
        projectile.integrate();
        assert_eq!(projectile.position(), Vec2::new(10.0, 4.0));
    }

    #[test]
    fn test_projectile_rejects_bad_radius() {
        assert!(matches!(
            Projectile::new(Vec2::ZERO, Vec2::ZERO, f32::NAN),
            Err(EntityError::InvalidRadius(r)) if r.is_nan()
        ));
        assert_eq!(
            Projectile::new(Vec2::ZERO, Vec2::ZERO, -0.5).unwrap_err(),
            EntityError::InvalidRadius(-0.5)
        );
    }
}
