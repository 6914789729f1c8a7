//! Coordinate types shared across the editor model and renderers.
//!
//! Canonical CPU space:
//! - Normalized device coordinates, `[-1, 1]` on both axes
//! - Origin at the canvas center
//! - +X right, +Y up
//!
//! The runtime converts physical cursor positions into this space before
//! anything in the editor model sees them.

mod vec2;

pub use vec2::Vec2;
