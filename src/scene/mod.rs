//! The renderer-independent core: transform composition, interaction and
//! animation state, and the furniture walk that produces the per-frame draw
//! list. Everything in here is testable without a GPU.

pub mod builder;
mod furniture;
pub mod oscillator;
pub mod state;
pub mod transform_stack;

pub use builder::{compose_room, CubeInstance, DrawList, Finish};
pub use oscillator::Oscillator;
pub use state::{CameraPose, SceneState, ToggleState};
pub use transform_stack::TransformStack;
