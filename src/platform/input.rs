//! Keyboard input
//!
//! The host forwards raw key events to `Keyboard`; the game polls it once per
//! frame through the `Input` trait.

use crate::sim::TickInput;

/// Game actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    StrafeLeft,
    StrafeRight,
    Fire,
}

impl Action {
    /// Map a DOM-style key name to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" | "A" | "ArrowLeft" => Some(Action::StrafeLeft),
            "d" | "D" | "ArrowRight" => Some(Action::StrafeRight),
            " " | "Space" => Some(Action::Fire),
            _ => None,
        }
    }
}

/// Source of player input
pub trait Input {
    /// Whether the action's key is currently down
    fn is_held(&self, action: Action) -> bool;

    /// Consume a fire press that happened since the last call
    fn take_fire_press(&mut self) -> bool;
}

/// Snapshot the input for one tick
pub fn poll(input: &mut dyn Input) -> TickInput {
    TickInput {
        left: input.is_held(Action::StrafeLeft),
        right: input.is_held(Action::StrafeRight),
        fire_held: input.is_held(Action::Fire),
        fire_pressed: input.take_fire_press(),
    }
}

/// Pressed-state table fed by key-down/key-up events
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    left: bool,
    right: bool,
    fire: bool,
    fire_pressed: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for keys the game does not use
    pub fn key_down(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::StrafeLeft => self.left = true,
            Action::StrafeRight => self.right = true,
            Action::Fire => {
                // Key repeat sends more key-downs; only the first one is a press
                if !self.fire {
                    self.fire_pressed = true;
                }
                self.fire = true;
            }
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::StrafeLeft => self.left = false,
            Action::StrafeRight => self.right = false,
            Action::Fire => self.fire = false,
        }
    }
}

impl Input for Keyboard {
    fn is_held(&self, action: Action) -> bool {
        match action {
            Action::StrafeLeft => self.left,
            Action::StrafeRight => self.right,
            Action::Fire => self.fire,
        }
    }

    fn take_fire_press(&mut self) -> bool {
        std::mem::take(&mut self.fire_pressed)
    }
}
