// src/lib.rs
//! Parlour
//!
//! An interactively explorable 3D room, procedurally assembled from a
//! single cube primitive and rendered with wgpu and winit.
//!
//! Number keys toggle furniture variants and the lights, arrow keys turn
//! the room, and WASD/T/G walk the camera; see the key table in the README.

pub mod app;
pub mod gfx;
pub mod input;
pub mod scene;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::{ParlourApp, ViewerConfig};

/// Creates a viewer with default settings
pub fn default() -> ParlourApp {
    ParlourApp::new()
}
