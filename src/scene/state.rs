//! The per-frame mutable scene state: toggles, oscillators, camera pose.
//!
//! All of it lives in one `SceneState` owned by the application and passed
//! by reference into the scene builder; nothing here is global.

use winit::keyboard::KeyCode;

use crate::input::InputState;

use super::oscillator::Oscillator;

/// Boolean switches flipped on key-down edges. Each selects between two
/// mutually exclusive structural or visual branches of the room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    /// Dims the ambient light from full white to 40%.
    pub ambient_dim: bool,
    /// Turns the three point lights on (warm gray) or off (black).
    pub directional_on: bool,
    /// Slides the office chair back and closes the laptop lid.
    pub office_mode: bool,
    /// Swings the refrigerator door open.
    pub fridge_open: bool,
    /// Slides the bar stools out from under the bar stand.
    pub bar_stool_out: bool,
    /// Swings dining chairs one and four out by 45 degrees.
    pub dining_chairs_swung: bool,
}

/// Accumulated camera orientation and position.
///
/// Angles are degrees wrapped into [0, 360) with euclidean modulo, so a
/// negative increment can never leave a negative stored angle. Offsets are
/// unbounded.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub z_offset: f32,
}

impl CameraPose {
    /// Degrees added per frame while an arrow key is held.
    pub const ANGLE_STEP: f32 = 3.0;
    /// Offset units added per frame while a movement key is held.
    pub const MOVE_STEP: f32 = 1.0;

    pub fn add_yaw(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }

    pub fn add_pitch(&mut self, degrees: f32) {
        self.pitch = (self.pitch + degrees).rem_euclid(360.0);
    }

    pub fn add_roll(&mut self, degrees: f32) {
        self.roll = (self.roll + degrees).rem_euclid(360.0);
    }
}

impl Default for CameraPose {
    /// The documented startup pose: looking into the room from the
    /// living-area side.
    fn default() -> Self {
        Self {
            yaw: 92.0,
            pitch: 0.0,
            roll: 0.0,
            x_offset: -2.0,
            y_offset: 5.0,
            z_offset: 10.0,
        }
    }
}

/// Everything the scene builder reads: toggles, the four animated
/// parameters, and the camera pose. Created once at startup and advanced in
/// place every frame.
pub struct SceneState {
    pub toggles: ToggleState,
    pub rug: Oscillator,
    pub books: Oscillator,
    pub chairs: Oscillator,
    pub sofa: Oscillator,
    pub camera: CameraPose,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            toggles: ToggleState::default(),
            rug: Oscillator::new(0.1, 0.1, 0.1, 10.0),
            books: Oscillator::new(0.1, 0.1, 0.1, 1.0),
            chairs: Oscillator::new(0.0, 5.0, 0.0, 60.0),
            sofa: Oscillator::new(0.0, 0.1, 0.1, 4.0),
            camera: CameraPose::default(),
        }
    }

    /// One tick of the interaction state machine: consumes the toggle
    /// edges, then samples the held set for oscillators and camera motion.
    pub fn apply_input(&mut self, input: &mut InputState) {
        for key in input.drain_edges() {
            match key {
                KeyCode::Digit1 => self.toggles.ambient_dim = !self.toggles.ambient_dim,
                KeyCode::Digit2 => self.toggles.directional_on = !self.toggles.directional_on,
                KeyCode::Digit3 => self.toggles.office_mode = !self.toggles.office_mode,
                KeyCode::Digit4 => self.toggles.fridge_open = !self.toggles.fridge_open,
                KeyCode::Digit5 => self.toggles.bar_stool_out = !self.toggles.bar_stool_out,
                KeyCode::Digit6 => {
                    self.toggles.dining_chairs_swung = !self.toggles.dining_chairs_swung
                }
                _ => {}
            }
        }

        if input.is_held(KeyCode::Digit7) {
            self.chairs.advance();
        }
        if input.is_held(KeyCode::Digit8) {
            self.rug.advance();
        }
        if input.is_held(KeyCode::Digit9) {
            self.books.advance();
        }
        if input.is_held(KeyCode::Digit0) {
            self.sofa.advance();
        }

        if input.is_held(KeyCode::ArrowUp) {
            self.camera.add_pitch(CameraPose::ANGLE_STEP);
        }
        if input.is_held(KeyCode::ArrowDown) {
            self.camera.add_pitch(-CameraPose::ANGLE_STEP);
        }
        if input.is_held(KeyCode::ArrowLeft) {
            self.camera.add_yaw(-CameraPose::ANGLE_STEP);
        }
        if input.is_held(KeyCode::ArrowRight) {
            self.camera.add_yaw(CameraPose::ANGLE_STEP);
        }

        if input.is_held(KeyCode::KeyW) {
            self.camera.z_offset -= CameraPose::MOVE_STEP;
        }
        if input.is_held(KeyCode::KeyS) {
            self.camera.z_offset += CameraPose::MOVE_STEP;
        }
        if input.is_held(KeyCode::KeyD) {
            self.camera.x_offset += CameraPose::MOVE_STEP;
        }
        if input.is_held(KeyCode::KeyA) {
            self.camera.x_offset -= CameraPose::MOVE_STEP;
        }
        if input.is_held(KeyCode::KeyT) {
            self.camera.y_offset += CameraPose::MOVE_STEP;
        }
        if input.is_held(KeyCode::KeyG) {
            self.camera.y_offset -= CameraPose::MOVE_STEP;
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(state: &mut SceneState, input: &mut InputState, key: KeyCode) {
        input.press(key);
        state.apply_input(input);
        input.release(key);
    }

    #[test]
    fn toggles_flip_once_per_edge_and_are_idempotent_in_pairs() {
        let mut state = SceneState::new();
        let mut input = InputState::new();

        tap(&mut state, &mut input, KeyCode::Digit1);
        assert!(state.toggles.ambient_dim);
        tap(&mut state, &mut input, KeyCode::Digit1);
        assert!(!state.toggles.ambient_dim);

        tap(&mut state, &mut input, KeyCode::Digit4);
        tap(&mut state, &mut input, KeyCode::Digit4);
        assert_eq!(state.toggles, ToggleState::default());
    }

    #[test]
    fn holding_a_toggle_key_does_not_retrigger() {
        let mut state = SceneState::new();
        let mut input = InputState::new();

        input.press(KeyCode::Digit3);
        for _ in 0..10 {
            state.apply_input(&mut input);
        }
        assert!(state.toggles.office_mode);
    }

    #[test]
    fn rug_advances_only_while_its_own_key_is_held() {
        let mut state = SceneState::new();
        let mut input = InputState::new();

        input.press(KeyCode::Digit8);
        for _ in 0..20 {
            state.apply_input(&mut input);
        }
        let expected = 0.1 + 0.1 * 20.0;
        assert!((state.rug.value() - expected).abs() < 1e-4);

        // Releasing an unrelated key does not halt the rug.
        input.press(KeyCode::KeyW);
        input.release(KeyCode::KeyW);
        state.apply_input(&mut input);
        assert!((state.rug.value() - (expected + 0.1)).abs() < 1e-4);

        // Releasing the rug key does.
        input.release(KeyCode::Digit8);
        let frozen = state.rug.value();
        state.apply_input(&mut input);
        assert!((state.rug.value() - frozen).abs() < 1e-6);
    }

    #[test]
    fn yaw_wraps_around_after_a_full_turn() {
        let mut state = SceneState::new();
        let mut input = InputState::new();
        let start = state.camera.yaw;

        input.press(KeyCode::ArrowRight);
        let frames = (360.0 / CameraPose::ANGLE_STEP) as usize;
        for _ in 0..frames {
            state.apply_input(&mut input);
        }
        assert!((state.camera.yaw - start).abs() < 1e-3);
    }

    #[test]
    fn negative_increments_never_leave_a_negative_angle() {
        let mut state = SceneState::new();
        let mut input = InputState::new();

        input.press(KeyCode::ArrowDown);
        for _ in 0..500 {
            state.apply_input(&mut input);
            assert!(state.camera.pitch >= 0.0);
            assert!(state.camera.pitch < 360.0);
        }
    }

    #[test]
    fn movement_keys_accumulate_offsets() {
        let mut state = SceneState::new();
        let mut input = InputState::new();
        let z0 = state.camera.z_offset;

        input.press(KeyCode::KeyW);
        for _ in 0..5 {
            state.apply_input(&mut input);
        }
        assert!((state.camera.z_offset - (z0 - 5.0)).abs() < 1e-6);
    }
}
