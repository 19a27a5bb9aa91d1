//! Keyboard input tracking.
//!
//! Input is modelled as two explicit sets: the keys currently held (sampled
//! once per frame for continuous motion) and key-down edges (consumed once
//! for toggles). Continuous effects key off membership of their specific
//! trigger key in the held set, so releasing an unrelated key never halts
//! them.

use std::collections::HashSet;

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

pub struct InputState {
    held: HashSet<KeyCode>,
    edges: Vec<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Folds a winit keyboard event into the held set and edge queue.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.press(code),
            ElementState::Released => self.release(code),
        }
    }

    /// Records a key-down. The edge fires only on the up-to-down
    /// transition, so OS key repeat does not re-trigger toggles.
    pub fn press(&mut self, code: KeyCode) {
        if self.held.insert(code) {
            self.edges.push(code);
        }
    }

    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Takes the key-down edges accumulated since the last call.
    pub fn drain_edges(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.edges)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_fires_once_per_physical_press() {
        let mut input = InputState::new();
        input.press(KeyCode::Digit1);
        input.press(KeyCode::Digit1); // key repeat while held
        assert_eq!(input.drain_edges(), vec![KeyCode::Digit1]);
        assert!(input.drain_edges().is_empty());

        input.release(KeyCode::Digit1);
        input.press(KeyCode::Digit1);
        assert_eq!(input.drain_edges(), vec![KeyCode::Digit1]);
    }

    #[test]
    fn held_membership_tracks_press_and_release() {
        let mut input = InputState::new();
        input.press(KeyCode::Digit8);
        input.press(KeyCode::ArrowUp);
        assert!(input.is_held(KeyCode::Digit8));

        // Releasing an unrelated key leaves the other held key alone.
        input.release(KeyCode::ArrowUp);
        assert!(input.is_held(KeyCode::Digit8));

        input.release(KeyCode::Digit8);
        assert!(!input.is_held(KeyCode::Digit8));
    }
}
