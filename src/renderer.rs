use glam::Vec2;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
    },
};

use crate::config::DisplayConfig;
use crate::entities::{Circular, Kinematic, ship_outline};
use crate::error::EntityError;
use crate::world::{Viewport, World};

/// Terminal rows taken by the stats line and the controls hint
pub const HUD_ROWS: u16 = 2;

/// Drawing primitives the game needs from its output device.
pub trait RenderSurface {
    fn clear(&mut self);
    fn draw_circle(&mut self, position: Vec2, radius: f32, fill: Option<Color>, stroke: Option<Color>);
    fn draw_ship(&mut self, position: Vec2, rotation: f32, stroke: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    Ship {
        position: Vec2,
        rotation: f32,
        stroke: Color,
    },
}

/// Display list replayed onto a ratatui canvas when the frame is drawn.
#[derive(Debug, Default)]
pub struct CanvasSurface {
    commands: Vec<DrawCommand>,
}

impl CanvasSurface {
    /// Creates an empty display list
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_circle(&mut self, position: Vec2, radius: f32, fill: Option<Color>, stroke: Option<Color>) {
        self.commands.push(DrawCommand::Circle {
            center: position,
            radius,
            fill,
            stroke,
        });
    }

    fn draw_ship(&mut self, position: Vec2, rotation: f32, stroke: Color) {
        self.commands.push(DrawCommand::Ship {
            position,
            rotation,
            stroke,
        });
    }
}

/// Issues one draw call per entity: the ship as a red hub plus a white
/// triangle, projectiles as filled white dots, asteroids as white outlines.
pub fn draw_world<S: RenderSurface + ?Sized>(surface: &mut S, world: &World) {
    let player = &world.player;
    surface.draw_circle(player.position(), player.radius(), Some(Color::Red), None);
    surface.draw_ship(player.position(), player.rotation, Color::White);

    for projectile in &world.projectiles {
        surface.draw_circle(projectile.center(), projectile.radius(), Some(Color::White), None);
    }

    for asteroid in &world.asteroids {
        surface.draw_circle(asteroid.center(), asteroid.radius(), None, Some(Color::White));
    }
}

/// World size covered by a terminal of `cols` x `rows` cells, unless the
/// config pins it.
pub fn viewport_for_terminal(
    cols: u16,
    rows: u16,
    display: &DisplayConfig,
) -> Result<Viewport, EntityError> {
    match display.viewport {
        Some(size) => Viewport::new(size.width, size.height),
        None => Viewport::new(
            f32::from(cols) * display.cell_width,
            f32::from(rows.saturating_sub(HUD_ROWS)) * display.cell_height,
        ),
    }
}

/// Stats shown above the playfield
#[derive(Debug, Clone, Copy, Default)]
pub struct HudView {
    pub projectiles: usize,
    pub asteroids: usize,
    pub fps: u32,
    pub ticks: u64,
}

/// Paints the display list and the HUD into a ratatui frame
pub struct GameRenderer {
    viewport: Viewport,
}

impl GameRenderer {
    /// Creates a renderer for a fixed world viewport
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Draws the HUD, the canvas and the controls hint into `frame`
    pub fn render(&self, frame: &mut Frame, surface: &CanvasSurface, hud: &HudView) {
        let area = frame.area();
        let stats_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.min(1),
        };
        let play_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(HUD_ROWS),
        };
        let controls_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: area.height.min(1),
        };

        self.render_playfield(frame, play_area, surface);
        frame.render_widget(Paragraph::new(stats_line(hud)), stats_area);

        let controls = Line::from(vec![Span::styled(
            "[W/Up: Thrust] [A/D/Arrows: Rotate] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn render_playfield(&self, frame: &mut Frame, area: Rect, surface: &CanvasSurface) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        // world units between adjacent braille dots, horizontally
        let dot = (width / (f64::from(area.width) * 2.0)).max(0.5);

        let canvas = Canvas::default()
            .background_color(Color::Black)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in surface.commands() {
                    paint_command(ctx, command, height, dot);
                }
            });

        frame.render_widget(canvas, area);
    }
}

/// Canvas y grows upward, world y grows downward.
fn to_canvas(point: Vec2, height: f64) -> (f64, f64) {
    (f64::from(point.x), height - f64::from(point.y))
}

fn paint_command(ctx: &mut Context, command: &DrawCommand, height: f64, dot: f64) {
    match *command {
        DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let (x, y) = to_canvas(center, height);
            let radius = f64::from(radius);

            if let Some(color) = fill {
                let mut r = radius;
                while r > 0.0 {
                    ctx.draw(&Circle { x, y, radius: r, color });
                    r -= dot;
                }
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color,
                });
            }
            if let Some(color) = stroke {
                ctx.draw(&Circle { x, y, radius, color });
            }
        }
        DrawCommand::Ship {
            position,
            rotation,
            stroke,
        } => {
            let corners = ship_outline(position, rotation).map(|p| to_canvas(p, height));
            for i in 0..corners.len() {
                let (x1, y1) = corners[i];
                let (x2, y2) = corners[(i + 1) % corners.len()];
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: stroke,
                });
            }
        }
    }
}

fn stats_line(hud: &HudView) -> Line<'static> {
    let value = |text: String, color: Color| {
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    Line::from(vec![
        label(" Asteroids: "),
        value(hud.asteroids.to_string(), Color::Yellow),
        label("  Shots: "),
        value(hud.projectiles.to_string(), Color::Cyan),
        label("  Tick: "),
        value(hud.ticks.to_string(), Color::White),
        label("  FPS: "),
        value(hud.fps.to_string(), Color::White),
    ])
}
