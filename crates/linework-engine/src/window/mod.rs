//! Window + runtime loop.
//!
//! Owns the winit EventLoop and Window, and wires them to the GPU layer and
//! the stream renderer. Single-window: the editor is an in-memory,
//! single-session tool.

mod runtime;

pub use runtime::{App, AppControl, FrameOutput, Runtime, RuntimeConfig};
