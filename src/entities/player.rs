use glam::Vec2;

use super::kinematic::{Body, Circular, Kinematic, validate_radius};
use super::projectile::Projectile;
use crate::config::{ProjectileConfig, ShipConfig};
use crate::error::EntityError;

/// Level-triggered steering flags read once per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub forward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Heading in radians. Never normalised; the trig wraps it.
    pub rotation: f32,
    pub radius: f32,
}

impl Player {
    /// Creates a ship at rest, facing right
    pub fn new(position: Vec2, radius: f32) -> Result<Self, EntityError> {
        Ok(Self {
            body: Body::at_rest(position)?,
            rotation: 0.0,
            radius: validate_radius(radius)?,
        })
    }

    /// Unit vector the nose points along.
    pub fn heading(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    /// Point `nose_offset` units ahead along the heading
    pub fn nose(&self, nose_offset: f32) -> Vec2 {
        self.body.position + self.heading() * nose_offset
    }

    /// Steering for the next frame. Thrust overwrites velocity outright;
    /// coasting decays it geometrically. Right turn wins over left when both
    /// are held.
    pub fn apply_controls(&mut self, controls: Controls, ship: &ShipConfig) {
        if controls.forward {
            self.body.velocity = self.heading() * ship.speed;
        } else {
            self.body.velocity *= ship.friction;
        }

        if controls.rotate_right {
            self.rotation += ship.rotational_speed;
        } else if controls.rotate_left {
            self.rotation -= ship.rotational_speed;
        }
    }

    /// Spawns a projectile at the nose, moving along the heading
    pub fn fire(
        &self,
        ship: &ShipConfig,
        projectile: &ProjectileConfig,
    ) -> Result<Projectile, EntityError> {
        if !self.rotation.is_finite() {
            return Err(EntityError::NonFinite { field: "rotation" });
        }
        Projectile::new(
            self.nose(ship.nose_offset),
            self.heading() * projectile.speed,
            projectile.radius,
        )
    }

    /// Triangle vertices in world space
    pub fn outline(&self) -> [Vec2; 3] {
        ship_outline(self.body.position, self.rotation)
    }
}

/// Nose and two rear corners of the drawn ship, in world coordinates.
pub fn ship_outline(position: Vec2, rotation: f32) -> [Vec2; 3] {
    let heading = Vec2::from_angle(rotation);
    [(30.0, 0.0), (-10.0, -10.0), (-10.0, 10.0)]
        .map(|(x, y)| position + heading.rotate(Vec2::new(x, y)))
}

impl Kinematic for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Circular for Player {
    fn center(&self) -> Vec2 {
        self.body.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
