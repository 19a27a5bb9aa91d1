//! # Graphics Module
//!
//! Everything that touches the GPU: the render engine and pipeline, the
//! cube primitive's buffers, view/projection math, the light rig uniforms,
//! and texture resources.
//!
//! The scene core hands this layer a flat list of cube instances per frame;
//! nothing in `crate::scene` depends on anything here.

pub mod camera;
pub mod cube;
pub mod lighting;
pub mod render_engine;
pub mod texture;
pub mod vertex;

// Re-export commonly used types
pub use render_engine::{RenderEngine, RenderInitError};
