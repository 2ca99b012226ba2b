use crate::entities::{Asteroid, Circular, Projectile};

/// True when two bounding circles overlap or touch.
pub fn circle_collision<A, B>(a: &A, b: &B) -> bool
where
    A: Circular + ?Sized,
    B: Circular + ?Sized,
{
    a.center().distance(b.center()) <= a.radius() + b.radius()
}

/// Removes every asteroid/projectile pair that collides and returns how many
/// pairs were destroyed.
///
/// Asteroids are resolved in collection order. Each one is consumed by the
/// closest live projectile touching it (lower index on equal distance), and a
/// projectile that already destroyed an asteroid this tick is no longer live.
/// Survivors keep their relative order.
pub fn resolve_collisions(asteroids: &mut Vec<Asteroid>, projectiles: &mut Vec<Projectile>) -> usize {
    let mut projectile_hit = vec![false; projectiles.len()];
    let mut asteroid_hit = vec![false; asteroids.len()];
    let mut pairs = 0;

    for (a_idx, asteroid) in asteroids.iter().enumerate() {
        let closest = projectiles
            .iter()
            .enumerate()
            .filter(|(p_idx, projectile)| {
                !projectile_hit[*p_idx] && circle_collision(asteroid, *projectile)
            })
            .min_by(|(_, a), (_, b)| {
                let da = a.center().distance_squared(asteroid.center());
                let db = b.center().distance_squared(asteroid.center());
                da.total_cmp(&db)
            });

        if let Some((p_idx, projectile)) = closest {
            log::debug!(
                "asteroid r={:.1} at {:?} destroyed by projectile at {:?}",
                asteroid.radius,
                asteroid.center(),
                projectile.center()
            );
            projectile_hit[p_idx] = true;
            asteroid_hit[a_idx] = true;
            pairs += 1;
        }
    }

    if pairs > 0 {
        let mut hits = asteroid_hit.into_iter();
        asteroids.retain(|_| !hits.next().unwrap_or(false));
        let mut hits = projectile_hit.into_iter();
        projectiles.retain(|_| !hits.next().unwrap_or(false));
    }

    pairs
}
