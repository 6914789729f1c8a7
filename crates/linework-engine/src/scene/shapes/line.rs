use crate::coords::Vec2;
use crate::paint::Rgb;
use crate::scene::{DrawObject, ShapeKind, Vertex};

/// Starts a new line: fixes the start vertex at the pointer-down position.
pub fn start(obj: &mut DrawObject, pos: Vec2, color: Rgb) {
    obj.reset(ShapeKind::Line);
    obj.append(Vertex::new(pos, color));
}

/// Tracks the free endpoint while the button is held.
///
/// The end vertex is a preview: once present it is retracted and re-appended
/// at the new pointer position on every move.
pub fn update(obj: &mut DrawObject, pos: Vec2, color: Rgb) {
    if obj.is_empty() {
        return;
    }

    if obj.len() == 2 {
        obj.remove_last();
    }
    obj.append(Vertex::new(pos, color));
}
