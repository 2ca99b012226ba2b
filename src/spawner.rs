use glam::Vec2;
use rand::Rng;
use std::ops::Range;
use std::time::{Duration, Instant};

use crate::config::SpawnerConfig;
use crate::entities::Asteroid;
use crate::error::EntityError;
use crate::world::Viewport;

/// Screen edge an asteroid enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Bottom,
    Right,
    Top,
}

impl Edge {
    /// Indexed by the uniform draw in [`Spawner::spawn`].
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Bottom, Edge::Right, Edge::Top];

    /// Maps 0..4 to left, bottom, right, top
    pub fn from_index(index: usize) -> Option<Edge> {
        Self::ALL.get(index).copied()
    }

    /// Unit, axis-aligned velocity pointing into the viewport.
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(1.0, 0.0),
            Edge::Bottom => Vec2::new(0.0, -1.0),
            Edge::Right => Vec2::new(-1.0, 0.0),
            Edge::Top => Vec2::new(0.0, 1.0),
        }
    }

    /// Length of this edge of the viewport.
    pub fn span(self, viewport: Viewport) -> f32 {
        match self {
            Edge::Left | Edge::Right => viewport.height,
            Edge::Top | Edge::Bottom => viewport.width,
        }
    }
}

/// Builds an asteroid just outside `edge`.
///
/// `along` is the coordinate along the edge, in `[0, edge.span(viewport))`.
/// The asteroid starts exactly `radius` past the edge, so its bounding circle
/// touches the viewport and survives the first cull.
pub fn place_asteroid(
    edge: Edge,
    radius: f32,
    along: f32,
    viewport: Viewport,
) -> Result<Asteroid, EntityError> {
    let position = match edge {
        Edge::Left => Vec2::new(-radius, along),
        Edge::Right => Vec2::new(viewport.width + radius, along),
        Edge::Top => Vec2::new(along, -radius),
        Edge::Bottom => Vec2::new(along, viewport.height + radius),
    };
    Asteroid::new(position, edge.inward(), radius)
}

/// Fixed wall-clock cadence, decoupled from the frame rate.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: Duration,
    next_due: Instant,
}

impl SpawnTimer {
    /// First firing comes one full interval after `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_due: start + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of firings that came due up to `now`. Firings missed during a
    /// slow frame are all delivered, never dropped.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next_due {
            due += 1;
            self.next_due += self.interval;
        }
        due
    }
}

/// Periodic asteroid source with an injectable random generator.
#[derive(Debug, Clone)]
pub struct Spawner<R> {
    rng: R,
    radius: Range<f32>,
    timer: SpawnTimer,
}

impl<R: Rng> Spawner<R> {
    /// Creates a spawner whose first firing is one interval after `start`
    pub fn new(rng: R, config: &SpawnerConfig, start: Instant) -> Self {
        Self {
            rng,
            radius: config.radius_min..config.radius_max,
            timer: SpawnTimer::new(Duration::from_millis(config.interval_ms), start),
        }
    }

    /// Number of asteroids due by `now`
    pub fn poll(&mut self, now: Instant) -> u32 {
        self.timer.poll(now)
    }

    pub fn interval(&self) -> Duration {
        self.timer.interval()
    }

    /// One firing: uniform edge, uniform radius, uniform spot along the edge.
    pub fn spawn(&mut self, viewport: Viewport) -> Result<Asteroid, EntityError> {
        let edge = Edge::ALL[self.rng.random_range(0..Edge::ALL.len())];
        self.spawn_on_edge(edge, viewport)
    }

    /// Spawns on a given edge with a random radius and offset
    pub fn spawn_on_edge(&mut self, edge: Edge, viewport: Viewport) -> Result<Asteroid, EntityError> {
        let radius = self.rng.random_range(self.radius.clone());
        let along = self.rng.random_range(0.0..edge.span(viewport));
        place_asteroid(edge, radius, along, viewport)
    }
}
