//! Linework engine crate.
//!
//! This crate owns the editor model (scene, shape builders, pointer state
//! machine) and the platform + GPU runtime pieces used by the studio binary.

pub mod device;
pub mod editor;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
