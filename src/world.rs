use glam::Vec2;

use crate::collision::resolve_collisions;
use crate::config::{GameConfig, ProjectileConfig, ShipConfig};
use crate::entities::{Asteroid, Circular, Controls, Kinematic, Player, Projectile};
use crate::error::EntityError;

/// Visible play area in world units, origin top-left, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Rejects non-finite or non-positive sizes
    pub fn new(width: f32, height: f32) -> Result<Self, EntityError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(EntityError::InvalidViewport { width, height })
        }
    }

    /// Where the ship starts
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True once the bounding circle lies entirely past one of the four edges.
    /// A circle exactly touching an edge is still visible.
    pub fn is_outside<C: Circular + ?Sized>(&self, entity: &C) -> bool {
        let c = entity.center();
        let r = entity.radius();
        c.x + r < 0.0 || c.x - r > self.width || c.y + r < 0.0 || c.y - r > self.height
    }
}

/// What happened during one tick, for logging and the HUD.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub culled_projectiles: usize,
    pub culled_asteroids: usize,
    pub collisions: usize,
}

/// Everything the simulation mutates: the ship and both entity collections.
#[derive(Debug, Clone)]
pub struct World {
    viewport: Viewport,
    ship: ShipConfig,
    projectile: ProjectileConfig,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    tick_count: u64,
}

impl World {
    /// Player starts at rest in the middle of the viewport.
    pub fn new(viewport: Viewport, config: &GameConfig) -> Result<Self, EntityError> {
        Ok(Self {
            viewport,
            ship: config.ship.clone(),
            projectile: config.projectile.clone(),
            player: Player::new(viewport.center(), config.ship.radius)?,
            projectiles: Vec::new(),
            asteroids: Vec::new(),
            tick_count: 0,
        })
    }

    /// Bounds used for culling
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Ticks run since creation
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Spawns one projectile at the ship's nose.
    pub fn fire(&mut self) -> Result<(), EntityError> {
        let projectile = self.player.fire(&self.ship, &self.projectile)?;
        log::debug!("fired projectile from {:?}", projectile.center());
        self.projectiles.push(projectile);
        Ok(())
    }

    /// Adds an asteroid; it moves from the next tick on
    pub fn add_asteroid(&mut self, asteroid: Asteroid) {
        log::debug!(
            "asteroid spawned at {:?} r={:.1} v={:?}",
            asteroid.center(),
            asteroid.radius,
            asteroid.velocity()
        );
        self.asteroids.push(asteroid);
    }

    /// Advances the simulation by one frame.
    ///
    /// Order: player integrates then takes the steering for the next frame,
    /// projectiles integrate and cull, asteroids integrate and cull, then
    /// surviving asteroids are checked against surviving projectiles.
    pub fn tick(&mut self, controls: Controls) -> TickReport {
        self.tick_count += 1;

        self.player.integrate();
        self.player.apply_controls(controls, &self.ship);

        let viewport = self.viewport;

        for projectile in &mut self.projectiles {
            projectile.integrate();
        }
        let before = self.projectiles.len();
        self.projectiles.retain(|p| !viewport.is_outside(p));
        let culled_projectiles = before - self.projectiles.len();

        for asteroid in &mut self.asteroids {
            asteroid.integrate();
        }
        let before = self.asteroids.len();
        self.asteroids.retain(|a| !viewport.is_outside(a));
        let culled_asteroids = before - self.asteroids.len();

        let collisions = resolve_collisions(&mut self.asteroids, &mut self.projectiles);

        if culled_projectiles + culled_asteroids > 0 {
            log::trace!(
                "tick {}: culled {} projectiles, {} asteroids",
                self.tick_count,
                culled_projectiles,
                culled_asteroids
            );
        }

        TickReport {
            culled_projectiles,
            culled_asteroids,
            collisions,
        }
    }
}
