//! Paint model for the editor.
//!
//! Scope:
//! - color representation (raw 8-bit RGB, exactly what enters the vertex stream)
//! - hex parsing/formatting for color-picker style inputs
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Rgb;
