// Library exports for the binary and for testing
pub use collision::{circle_collision, resolve_collisions};
pub use config::GameConfig;
pub use entities::{Asteroid, Body, Circular, Controls, Kinematic, Player, Projectile};
pub use error::{ConfigError, EntityError};
pub use spawner::{Edge, SpawnTimer, Spawner, place_asteroid};
pub use world::{TickReport, Viewport, World};

pub mod app;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod spawner;
pub mod world;
