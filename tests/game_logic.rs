/// Integration tests for game logic
///
/// These tests drive whole ticks through the public API: integration,
/// culling, collision resolution, steering and spawning together.
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use roids::{
    Asteroid, Circular, Controls, Edge, GameConfig, Kinematic, Projectile, Spawner, Viewport,
    World, circle_collision, config::SpawnerConfig, place_asteroid,
};
use std::time::Instant;

fn world(width: f32, height: f32) -> World {
    World::new(Viewport::new(width, height).unwrap(), &GameConfig::default()).unwrap()
}

fn thrust() -> Controls {
    Controls {
        forward: true,
        ..Controls::default()
    }
}

#[test]
fn test_asteroid_drifting_into_resting_projectile() {
    let mut world = world(800.0, 600.0);
    world.add_asteroid(Asteroid::new(Vec2::new(-10.0, 300.0), Vec2::new(1.0, 0.0), 10.0).unwrap());
    world
        .projectiles
        .push(Projectile::new(Vec2::new(5.0, 300.0), Vec2::ZERO, 5.0).unwrap());

    let report = world.tick(Controls::default());

    // Asteroid moved to (-9, 300): 14 units away, inside the 15-unit reach
    assert_eq!(report.collisions, 1);
    assert!(world.asteroids.is_empty());
    assert!(world.projectiles.is_empty());
}

#[test]
fn test_collision_registers_on_first_overlapping_tick() {
    let mut world = world(800.0, 600.0);
    world.add_asteroid(Asteroid::new(Vec2::new(-10.0, 300.0), Vec2::new(1.0, 0.0), 10.0).unwrap());
    world
        .projectiles
        .push(Projectile::new(Vec2::new(20.0, 300.0), Vec2::ZERO, 5.0).unwrap());

    // Gap closes one unit per tick: distance 29, 28, ... reaches 15 on tick 15
    for tick in 1..15 {
        world.tick(Controls::default());
        assert_eq!(world.asteroids.len(), 1, "destroyed early on tick {tick}");
        assert_eq!(world.projectiles.len(), 1);
        assert!(!circle_collision(&world.asteroids[0], &world.projectiles[0]));
    }

    let report = world.tick(Controls::default());
    assert_eq!(report.collisions, 1);
    assert!(world.asteroids.is_empty());
    assert!(world.projectiles.is_empty());
}

#[test]
fn test_culling_boundary() {
    let mut world = world(800.0, 600.0);
    world.add_asteroid(Asteroid::new(Vec2::new(-31.0, 300.0), Vec2::ZERO, 30.0).unwrap());
    world.add_asteroid(Asteroid::new(Vec2::new(-30.0, 300.0), Vec2::ZERO, 30.0).unwrap());

    let report = world.tick(Controls::default());

    assert_eq!(report.culled_asteroids, 1);
    assert_eq!(world.asteroids.len(), 1);
    assert_eq!(world.asteroids[0].position(), Vec2::new(-30.0, 300.0));
}

#[test]
fn test_thrust_from_rest() {
    let mut world = world(800.0, 600.0);
    let mut last_x = world.player.position().x;

    for tick in 1..=10 {
        world.tick(thrust());
        let x = world.player.position().x;
        if tick == 1 {
            // The first tick integrates the resting velocity, then thrust applies
            assert_eq!(x, last_x);
        } else {
            assert!(x > last_x, "x did not increase on tick {tick}");
        }
        last_x = x;
    }

    assert_eq!(world.player.velocity(), Vec2::new(3.0, 0.0));
    assert_eq!(world.player.position().x, 400.0 + 27.0);
}

#[test]
fn test_ship_coasts_to_near_stop_without_stopping() {
    let mut world = world(800.0, 600.0);
    world.tick(thrust());

    for _ in 0..500 {
        world.tick(Controls::default());
    }

    let speed = world.player.velocity().length();
    let expected = 3.0 * 0.97f32.powi(500);
    assert!(speed > 0.0);
    assert!((speed - expected).abs() <= expected * 1e-2);
}

#[test]
fn test_turn_then_fire_aims_projectile() {
    let mut world = world(800.0, 600.0);
    let turn_right = Controls {
        rotate_right: true,
        ..Controls::default()
    };

    // ~90 degrees clockwise on screen (y points down)
    for _ in 0..31 {
        world.tick(turn_right);
    }
    world.fire().unwrap();

    let projectile = &world.projectiles[0];
    assert!(projectile.velocity().y > 2.9);
    assert!(projectile.velocity().x.abs() < 0.2);
    assert!(projectile.position().y > world.player.position().y + 29.0);
}

#[test]
fn test_projectile_flies_off_screen_and_is_culled() {
    let mut world = world(200.0, 200.0);
    world.fire().unwrap();

    let mut ticks = 0;
    while !world.projectiles.is_empty() {
        world.tick(Controls::default());
        ticks += 1;
        assert!(ticks < 100, "projectile never left the viewport");
    }

    // Starts at x = 130, culled once x - 5 > 200
    assert_eq!(ticks, 26);
}

#[test]
fn test_shot_destroys_spawned_asteroid() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let mut world = World::new(viewport, &GameConfig::default()).unwrap();
    world.add_asteroid(place_asteroid(Edge::Right, 20.0, 300.0, viewport).unwrap());
    world.fire().unwrap();

    let mut destroyed = false;
    for _ in 0..200 {
        if world.tick(Controls::default()).collisions > 0 {
            destroyed = true;
            break;
        }
    }

    assert!(destroyed);
    assert!(world.asteroids.is_empty());
    assert!(world.projectiles.is_empty());
}

#[test]
fn test_spawner_left_edge_scenario() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let along = rng.random_range(0.0..viewport.height);

    let edge = Edge::from_index(0).unwrap();
    let asteroid = place_asteroid(edge, 30.0, along, viewport).unwrap();

    assert_eq!(asteroid.radius(), 30.0);
    assert_eq!(asteroid.position().x, -30.0);
    assert!((0.0..600.0).contains(&asteroid.position().y));
    assert_eq!(asteroid.velocity(), Vec2::new(1.0, 0.0));
}

#[test]
fn test_spawned_asteroids_cross_and_leave() {
    let viewport = Viewport::new(300.0, 200.0).unwrap();
    let mut world = World::new(viewport, &GameConfig::default()).unwrap();
    let mut spawner = Spawner::new(
        StdRng::seed_from_u64(5),
        &SpawnerConfig::default(),
        Instant::now(),
    );

    for _ in 0..10 {
        world.add_asteroid(spawner.spawn(viewport).unwrap());
    }
    assert_eq!(world.tick(Controls::default()).culled_asteroids, 0);

    // Widest crossing: 300 units plus two radii under 60 each
    for _ in 0..420 {
        world.tick(Controls::default());
    }
    assert!(world.asteroids.is_empty());
}

#[test]
fn test_independent_worlds_do_not_share_state() {
    let mut a = world(800.0, 600.0);
    let b = world(800.0, 600.0);

    a.fire().unwrap();
    a.tick(thrust());

    assert_eq!(a.projectiles.len(), 1);
    assert!(b.projectiles.is_empty());
    assert_eq!(b.player.velocity(), Vec2::ZERO);
    assert_eq!(b.tick_count(), 0);
}
