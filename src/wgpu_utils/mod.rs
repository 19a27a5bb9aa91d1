//! WGPU utility functions and helpers
//!
//! Small wrappers for the handful of wgpu binding patterns this crate uses.

pub mod binding_types;
pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
