use crate::coords::Vec2;
use crate::paint::Rgb;
use crate::scene::{DrawObject, ShapeKind, Vertex};

use super::square::emit_edge;

/// Starts a new rectangle: fixes the anchor vertex at the pointer-down
/// position.
pub fn start(obj: &mut DrawObject, pos: Vec2, color: Rgb) {
    obj.reset(ShapeKind::Rectangle);
    obj.append(Vertex::new(pos, color));
}

/// Recomputes the whole rectangle loop from the fixed anchor.
///
/// Same retract/re-emit discipline as the square, but the corners come
/// straight from anchor `(x0, y0)` and pointer `(x, y)`, so width and height
/// are independent.
pub fn update(obj: &mut DrawObject, pos: Vec2, color: Rgb) {
    if obj.is_empty() {
        return;
    }

    obj.truncate(1);
    let anchor = obj.get(0).pos;
    emit_loop(obj, anchor, pos, color);
}

/// Regenerates a rectangle into `obj` from an explicit anchor (resize mode).
pub fn rebuild(obj: &mut DrawObject, anchor: Vec2, pos: Vec2, color: Rgb) {
    obj.reset(ShapeKind::Rectangle);
    obj.append(Vertex::new(anchor, color));
    emit_loop(obj, anchor, pos, color);
}

fn emit_loop(obj: &mut DrawObject, anchor: Vec2, pos: Vec2, color: Rgb) {
    let Vec2 { x: x0, y: y0 } = anchor;
    let Vec2 { x, y } = pos;

    let c1 = Vec2::new(x0, y);
    let c2 = Vec2::new(x, y);
    let c3 = Vec2::new(x, y0);

    obj.append(Vertex::new(c1, color));
    emit_edge(obj, c1, c2, color);
    emit_edge(obj, c2, c3, color);
    emit_edge(obj, c3, anchor, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_produces_the_four_expected_corners() {
        let mut obj = DrawObject::empty();
        start(&mut obj, Vec2::new(-0.2, -0.1), Rgb::WHITE);
        update(&mut obj, Vec2::new(0.4, 0.3), Rgb::WHITE);

        assert!(obj.is_complete());
        let corners: Vec<Vec2> = [0, 1, 3, 5].iter().map(|&i| obj.get(i).pos).collect();
        assert_eq!(
            corners,
            vec![
                Vec2::new(-0.2, -0.1),
                Vec2::new(-0.2, 0.3),
                Vec2::new(0.4, 0.3),
                Vec2::new(0.4, -0.1),
            ]
        );
    }

    #[test]
    fn loop_is_closed() {
        let mut obj = DrawObject::empty();
        start(&mut obj, Vec2::zero(), Rgb::WHITE);
        update(&mut obj, Vec2::new(0.5, 0.2), Rgb::WHITE);

        let vs = obj.vertices();
        assert_eq!(vs.len(), 8);
        // Segment pairs chain: end of each edge == start of the next.
        assert_eq!(vs[1].pos, vs[2].pos);
        assert_eq!(vs[3].pos, vs[4].pos);
        assert_eq!(vs[5].pos, vs[6].pos);
        assert_eq!(vs[7].pos, vs[0].pos);
    }

    #[test]
    fn width_and_height_stay_independent() {
        let mut obj = DrawObject::empty();
        start(&mut obj, Vec2::zero(), Rgb::WHITE);
        update(&mut obj, Vec2::new(0.6, 0.1), Rgb::WHITE);
        update(&mut obj, Vec2::new(0.6, 0.4), Rgb::WHITE);

        assert_eq!(obj.len(), 8);
        // Far corner tracks the pointer exactly, no max() snapping.
        assert!(obj.vertices().iter().any(|v| v.pos == Vec2::new(0.6, 0.4)));
        assert!(obj.vertices().iter().all(|v| v.pos != Vec2::new(0.6, 0.6)));
    }
}
