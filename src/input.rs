use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::Controls;

/// One-shot actions delivered on a key-down transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Fire,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeldKey {
    Forward,
    RotateLeft,
    RotateRight,
    Fire,
}

impl HeldKey {
    fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(HeldKey::Forward),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(HeldKey::RotateLeft),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(HeldKey::RotateRight),
            KeyCode::Char(' ') => Some(HeldKey::Fire),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            HeldKey::Forward => 0,
            HeldKey::RotateLeft => 1,
            HeldKey::RotateRight => 2,
            HeldKey::Fire => 3,
        }
    }
}

/// Translates terminal key events into steering flags and one-shot actions.
///
/// Terminals that report key releases (kitty keyboard protocol) clear a flag
/// on release. Everywhere else a key only produces press/auto-repeat events,
/// so a held flag lapses after `hold_frames` frames without one. Space is
/// tracked the same way there, so auto-repeat presses never fire again.
pub struct InputController {
    held: [bool; 4],
    frames_since_event: [u32; 4],
    reports_release: bool,
    hold_frames: u32,
    oneshot_actions: Vec<InputAction>,
}

impl InputController {
    /// Creates a new controller. `reports_release` is true when the terminal
    /// sends key release events.
    pub fn new(reports_release: bool, hold_frames: u32) -> Self {
        Self {
            held: [false; 4],
            frames_since_event: [0; 4],
            reports_release,
            hold_frames,
            oneshot_actions: Vec::new(),
        }
    }

    /// Drains every pending terminal event without blocking.
    /// Should be called once per frame before taking actions.
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event);
            }
        }
        Ok(())
    }

    /// Routes a single key event by kind.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event),
            KeyEventKind::Repeat => self.hold(key_event.code),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        // Without release events, auto-repeat arrives as Press
        if key_event.code == KeyCode::Char(' ')
            && (self.reports_release || !self.held[HeldKey::Fire.index()])
        {
            self.oneshot_actions.push(InputAction::Fire);
        }

        self.hold(key_event.code);
    }

    fn hold(&mut self, code: KeyCode) {
        if let Some(key) = HeldKey::from_code(code) {
            self.held[key.index()] = true;
            self.frames_since_event[key.index()] = 0;
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(key) = HeldKey::from_code(code) {
            self.held[key.index()] = false;
        }
    }

    /// Returns and clears the one-shot actions gathered since the last call
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.oneshot_actions)
    }

    /// Steering flags for the next tick.
    pub fn controls(&self) -> Controls {
        Controls {
            forward: self.held[HeldKey::Forward.index()],
            rotate_left: self.held[HeldKey::RotateLeft.index()],
            rotate_right: self.held[HeldKey::RotateRight.index()],
        }
    }

    /// Ages held keys; call once after each tick.
    pub fn end_frame(&mut self) {
        if self.reports_release {
            return;
        }
        for (held, age) in self.held.iter_mut().zip(self.frames_since_event.iter_mut()) {
            if *held {
                *age += 1;
                if *age >= self.hold_frames {
                    *held = false;
                }
            }
        }
    }
}
