//! Per-kind shape construction rules.
//!
//! Shared contract: each builder receives the current pointer position and
//! mutates the in-progress [`DrawObject`](crate::scene::DrawObject) in place.
//! Completion is reported through the object's vertex count reaching its
//! kind's expected total.
//!
//! Extending the editor:
//! - add a new shape module here
//! - add a variant to `scene::ShapeKind`
//! - dispatch it from `editor::Editor::handle_pointer`
//!
//! All builders follow the retract-and-replace preview discipline: trailing
//! vertices reflecting the current pointer position are withdrawn and
//! re-appended on every move, never left behind as history.

pub mod line;
pub mod polygon;
pub mod rectangle;
pub mod square;
