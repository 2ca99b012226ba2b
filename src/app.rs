use color_eyre::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::input::{InputAction, InputController};
use crate::renderer::{CanvasSurface, GameRenderer, HudView, RenderSurface, draw_world};
use crate::spawner::Spawner;
use crate::world::{Viewport, World};

/// The main application: owns the world and drives one tick per frame.
///
/// The simulation advances exactly one tick per rendered frame, so game speed
/// follows the frame rate. Asteroid spawning runs on wall-clock time.
pub struct App {
    running: bool,
    world: World,
    spawner: Spawner<StdRng>,
    input: InputController,
    surface: CanvasSurface,
    renderer: GameRenderer,
    /// Frames info
    frame_interval: Duration,
    last_frame_time: Instant,
    fps: u32,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(
        config: &GameConfig,
        viewport: Viewport,
        reports_release: bool,
        now: Instant,
    ) -> Result<Self> {
        let rng = match config.spawner.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            running: true,
            world: World::new(viewport, config)?,
            spawner: Spawner::new(rng, &config.spawner, now),
            input: InputController::new(reports_release, config.input.hold_frames),
            surface: CanvasSurface::new(),
            renderer: GameRenderer::new(viewport),
            frame_interval: Duration::from_millis(config.display.frame_interval_ms),
            last_frame_time: now,
            fps: 0,
        })
    }

    /// Read access to the simulation state
    pub fn world(&self) -> &World {
        &self.world
    }

    /// False once a quit action has been processed
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Display list built by the last step
    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        log::info!(
            "game loop started: viewport {}x{}, spawn every {:?}",
            self.world.viewport().width,
            self.world.viewport().height,
            self.spawner.interval()
        );

        while self.running {
            let frame_start = Instant::now();

            self.input.poll_events()?;
            let actions = self.input.take_actions();
            self.process_actions(&actions)?;
            if !self.running {
                break;
            }

            self.step(frame_start)?;

            let hud = self.hud();
            terminal.draw(|frame| self.renderer.render(frame, &self.surface, &hud))?;

            // Hold the frame rate steady
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_interval {
                std::thread::sleep(self.frame_interval - elapsed);
            }
        }

        log::info!("game loop stopped after {} ticks", self.world.tick_count());
        Ok(())
    }

    /// Process one-shot input actions
    pub fn process_actions(&mut self, actions: &[InputAction]) -> Result<()> {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Fire => {
                    self.world.fire()?;
                }
            }
        }
        Ok(())
    }

    /// One frame of simulation at wall-clock time `now`: deliver due spawns,
    /// tick the world, rebuild the display list.
    pub fn step(&mut self, now: Instant) -> Result<()> {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        if frame_time.as_micros() > 0 {
            self.fps = (1_000_000 / frame_time.as_micros()) as u32;
        }

        for _ in 0..self.spawner.poll(now) {
            let asteroid = self.spawner.spawn(self.world.viewport())?;
            self.world.add_asteroid(asteroid);
        }

        self.surface.clear();
        let report = self.world.tick(self.input.controls());
        self.input.end_frame();
        draw_world(&mut self.surface, &self.world);

        if report.collisions > 0 {
            log::debug!(
                "tick {}: {} asteroid(s) destroyed, {} left",
                self.world.tick_count(),
                report.collisions,
                self.world.asteroids.len()
            );
        }

        Ok(())
    }

    fn hud(&self) -> HudView {
        HudView {
            projectiles: self.world.projectiles.len(),
            asteroids: self.world.asteroids.len(),
            fps: self.fps,
            ticks: self.world.tick_count(),
        }
    }
}
