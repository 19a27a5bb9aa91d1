//! Turns the scene state into a flat list of cube draws.
//!
//! The builder owns the transform stack for the duration of one frame,
//! walks the fixed furniture hierarchy, and emits one `CubeInstance` per
//! leaf. The render engine consumes the list afterwards; nothing here
//! touches the GPU.

use cgmath::{Matrix, Matrix4, SquareMatrix};

use super::{furniture, state::SceneState, transform_stack::TransformStack};

/// Material selector for a cube draw. Each finish maps to one texture slot;
/// slot numbering is part of the texture supply contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finish {
    Hardwood,
    Marble,
    BlackWood,
    BeigeUpholstery,
    BlueLeather,
    WhiteLacquer,
    CremeLeather,
    TvScreen,
    NavyFabric,
    RugPattern,
    CodeScreen,
    FloorTile,
    LightWood,
    Silver,
}

impl Finish {
    pub const ALL: [Finish; 14] = [
        Finish::Hardwood,
        Finish::Marble,
        Finish::BlackWood,
        Finish::BeigeUpholstery,
        Finish::BlueLeather,
        Finish::WhiteLacquer,
        Finish::CremeLeather,
        Finish::TvScreen,
        Finish::NavyFabric,
        Finish::RugPattern,
        Finish::CodeScreen,
        Finish::FloorTile,
        Finish::LightWood,
        Finish::Silver,
    ];

    /// Fixed texture unit index for this finish.
    pub fn slot(self) -> usize {
        match self {
            Finish::Hardwood => 0,
            Finish::Marble => 1,
            Finish::BlackWood => 2,
            Finish::BeigeUpholstery => 3,
            Finish::BlueLeather => 4,
            Finish::WhiteLacquer => 5,
            Finish::CremeLeather => 6,
            Finish::TvScreen => 7,
            Finish::NavyFabric => 8,
            Finish::RugPattern => 9,
            Finish::CodeScreen => 10,
            Finish::FloorTile => 11,
            Finish::LightWood => 12,
            Finish::Silver => 13,
        }
    }
}

/// One cube draw: model transform, its normal-correction transform, a color
/// multiplier, and the material selector (`None` draws the flat color).
#[derive(Debug, Clone, Copy)]
pub struct CubeInstance {
    pub model: Matrix4<f32>,
    pub normal: Matrix4<f32>,
    pub color: [f32; 4],
    pub finish: Option<Finish>,
}

/// Per-frame accumulator of cube draws.
pub struct DrawList {
    pub instances: Vec<CubeInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
        }
    }

    /// Emits one textured cube at the stack's current transform. Only reads
    /// the stack, so sibling leaves in the same scope start from the same
    /// transform.
    pub fn draw_cube(&mut self, stack: &TransformStack, finish: Finish) {
        self.emit(stack, [1.0; 4], Some(finish));
    }

    /// Emits one flat-colored, untextured cube.
    pub fn draw_cube_flat(&mut self, stack: &TransformStack, color: [f32; 4]) {
        self.emit(stack, color, None);
    }

    fn emit(&mut self, stack: &TransformStack, color: [f32; 4], finish: Option<Finish>) {
        let model = stack.current();
        // Non-uniform scale invalidates transforming normals with the model
        // matrix itself; the inverse-transpose corrects for it.
        let normal = model
            .invert()
            .map(|inv| inv.transpose())
            .unwrap_or_else(Matrix4::identity);
        self.instances.push(CubeInstance {
            model,
            normal,
            color,
            finish,
        });
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the full furniture hierarchy for one frame.
///
/// The stack is created here and must come back balanced; the debug
/// assertion below is the frame-end half of the stack discipline contract.
pub fn compose_room(state: &SceneState) -> DrawList {
    let mut list = DrawList::new();
    let mut stack = TransformStack::new();

    stack.scoped(|s| {
        // Room root: the accumulated view angles orient the whole scene
        // under a fixed forward gaze.
        s.rotate_y(state.camera.yaw);
        s.rotate_x(state.camera.pitch);
        s.rotate_z(state.camera.roll);

        furniture::floor(s, &mut list);
        furniture::dining_chairs(s, &mut list, state);
        furniture::rug(s, &mut list, state.rug.value());
        furniture::dining_table(s, &mut list);
        furniture::tv_console(s, &mut list);
        furniture::sofa(s, &mut list, state.sofa.value());
        furniture::armchair(s, &mut list);
        furniture::side_table(s, &mut list);
        furniture::table_lamp(s, &mut list);
        furniture::floor_lamp(s, &mut list, state.toggles.directional_on);
        furniture::bookshelves(s, &mut list, state.books.value());
        furniture::desk(s, &mut list, state.toggles.office_mode);
        furniture::office_chair(s, &mut list, state.toggles.office_mode);
        furniture::kitchen(s, &mut list, &state.toggles);
    });

    debug_assert_eq!(
        stack.depth(),
        0,
        "unbalanced transform stack after room traversal"
    );
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn state_with_toggles(bits: u32) -> SceneState {
        let mut state = SceneState::new();
        state.toggles.ambient_dim = bits & 1 != 0;
        state.toggles.directional_on = bits & 2 != 0;
        state.toggles.office_mode = bits & 4 != 0;
        state.toggles.fridge_open = bits & 8 != 0;
        state.toggles.bar_stool_out = bits & 16 != 0;
        state.toggles.dining_chairs_swung = bits & 32 != 0;
        state
    }

    #[test]
    fn default_room_has_the_full_cube_inventory() {
        let list = compose_room(&SceneState::new());
        assert_eq!(list.len(), 160);
    }

    #[test]
    fn traversal_is_balanced_for_every_toggle_combination() {
        // compose_room debug-asserts stack balance internally; closing the
        // laptop is the only variant that changes the cube count.
        for bits in 0..64u32 {
            let state = state_with_toggles(bits);
            let list = compose_room(&state);
            let expected = if state.toggles.office_mode { 159 } else { 160 };
            assert_eq!(list.len(), expected, "toggle bits {:#08b}", bits);
        }
    }

    #[test]
    fn rug_instance_follows_the_oscillator_value() {
        let mut state = SceneState::new();
        // Null the root orientation so world positions are readable.
        state.camera.yaw = 0.0;
        state.camera.pitch = 0.0;
        state.camera.roll = 0.0;

        for _ in 0..7 {
            state.rug.advance();
        }

        let list = compose_room(&state);
        let rug = list
            .instances
            .iter()
            .find(|i| i.finish == Some(Finish::RugPattern))
            .expect("rug instance present");
        let center = rug.model * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let expected_x = -2.8 + state.rug.value() / 2.0;
        assert!((center.x - expected_x).abs() < 1e-4);
    }

    #[test]
    fn fridge_door_variants_are_distinct_branches() {
        let mut closed = SceneState::new();
        closed.camera.yaw = 0.0;
        let mut open = state_with_toggles(8);
        open.camera.yaw = 0.0;

        let closed_list = compose_room(&closed);
        let open_list = compose_room(&open);
        // Same cube count, different door transform.
        assert_eq!(closed_list.len(), open_list.len());
        assert!(closed_list
            .instances
            .iter()
            .zip(open_list.instances.iter())
            .any(|(a, b)| a.model != b.model));
    }

    #[test]
    fn flat_color_draws_appear_only_when_directional_lights_are_on() {
        let plain = compose_room(&SceneState::new());
        assert!(plain.instances.iter().all(|i| i.finish.is_some()));

        let lit = compose_room(&state_with_toggles(2));
        let glows: Vec<_> = lit
            .instances
            .iter()
            .filter(|i| i.finish.is_none())
            .collect();
        assert_eq!(glows.len(), 1);
        assert_eq!(glows[0].color, [1.0, 1.0, 102.0 / 255.0, 1.0]);
    }
}
