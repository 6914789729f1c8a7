//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types; pointer
//! positions are already in normalized device coordinates when they reach
//! the editor. The runtime translates platform events via
//! [`platform::WinitTranslator`].

pub mod platform;

mod types;

pub use types::{InputEvent, Key, KeyState, PointerEvent};
