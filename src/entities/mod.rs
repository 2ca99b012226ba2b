mod asteroid;
mod kinematic;
mod player;
mod projectile;

// Re-export all public types
pub use asteroid::Asteroid;
pub use kinematic::{Body, Circular, Kinematic};
pub use player::{Controls, Player, ship_outline};
pub use projectile::Projectile;
