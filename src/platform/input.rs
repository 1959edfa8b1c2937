//! Keyboard input adapter
//!
//! Raw key events come in whenever the host delivers them; the simulation
//! only ever sees one [`TickInput`] snapshot per tick. Hide and pickup fire
//! once per physical press and never again while the key stays down.

use std::collections::HashMap;

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    /// Hide/unhide
    Space,
    /// Pick up
    E,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "KeyW" => Some(Key::W),
            "KeyA" => Some(Key::A),
            "KeyS" => Some(Key::S),
            "KeyD" => Some(Key::D),
            "Space" => Some(Key::Space),
            "KeyE" => Some(Key::E),
            _ => None,
        }
    }
}

/// Held keys plus pending one-shot signals
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<Key, bool>,
    toggle_hide: bool,
    pickup: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }

    /// Key pressed (auto-repeat events are ignored for one-shots)
    pub fn key_down(&mut self, key: Key) {
        let was_held = self.is_held(key);
        self.held.insert(key, true);
        if was_held {
            return;
        }
        match key {
            Key::Space => self.toggle_hide = true,
            Key::E => self.pickup = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.insert(key, false);
    }

    /// Direction intent from held keys, each axis in {-1, 0, 1}
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(Key::W) || self.is_held(Key::ArrowUp) {
            dir.y -= 1.0;
        }
        if self.is_held(Key::S) || self.is_held(Key::ArrowDown) {
            dir.y += 1.0;
        }
        if self.is_held(Key::A) || self.is_held(Key::ArrowLeft) {
            dir.x -= 1.0;
        }
        if self.is_held(Key::D) || self.is_held(Key::ArrowRight) {
            dir.x += 1.0;
        }
        dir
    }

    /// Snapshot for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            direction: self.direction(),
            toggle_hide: self.toggle_hide,
            pickup: self.pickup,
        }
    }

    /// Clear one-shot inputs after a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.toggle_hide = false;
        self.pickup = false;
    }

    /// Forget everything (restart)
    pub fn reset(&mut self) {
        self.held.clear();
        self.clear_one_shots();
    }
}
