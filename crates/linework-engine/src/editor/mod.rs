//! Editor state machine.
//!
//! Responsibilities:
//! - own the scene store and the active tool/color settings
//! - reduce pointer events into shape-builder calls and scene transitions
//! - run the resize-mode drag loop over committed objects
//!
//! All mutation happens synchronously inside the reducer; events are
//! processed strictly in arrival order, so no two mutations interleave.

mod state;
mod tool;

pub use state::{Editor, GRAB_DISTANCE};
pub use tool::Tool;
