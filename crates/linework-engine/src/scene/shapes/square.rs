use crate::coords::Vec2;
use crate::paint::Rgb;
use crate::scene::{DrawObject, ShapeKind, Vertex};

/// Starts a new square: fixes the anchor vertex at the pointer-down position.
pub fn start(obj: &mut DrawObject, pos: Vec2, color: Rgb) {
    obj.reset(ShapeKind::Square);
    obj.append(Vertex::new(pos, color));
}

/// Recomputes the whole square loop from the fixed anchor.
///
/// Any previously emitted loop is retracted down to the anchor first, so
/// each move rebuilds all four edges from scratch. The side length is
/// `max(|dx|, |dy|)`, forcing equal width and height.
pub fn update(obj: &mut DrawObject, pos: Vec2, color: Rgb) {
    if obj.is_empty() {
        return;
    }

    obj.truncate(1);
    let anchor = obj.get(0).pos;
    emit_loop(obj, anchor, pos, color);
}

/// Regenerates a square into `obj` from an explicit anchor.
///
/// Resize mode reuses the draw-time generator with a different anchor
/// selection rule (the vertex farthest from the grab point).
pub fn rebuild(obj: &mut DrawObject, anchor: Vec2, pos: Vec2, color: Rgb) {
    obj.reset(ShapeKind::Square);
    obj.append(Vertex::new(anchor, color));
    emit_loop(obj, anchor, pos, color);
}

/// Emits the seven trailing vertices of the loop; the anchor must already be
/// the last vertex of `obj`.
///
/// The quadrant (and with it the corner emit order) is chosen by the sign of
/// the pointer offset from the anchor, so the square grows toward the cursor.
fn emit_loop(obj: &mut DrawObject, anchor: Vec2, pos: Vec2, color: Rgb) {
    let Vec2 { x: x0, y: y0 } = anchor;
    let Vec2 { x, y } = pos;
    let m = (x - x0).abs().max((y - y0).abs());

    let (c1, c2, c3) = if x0 > x {
        if y0 > y {
            (
                Vec2::new(x0 - m, y0),
                Vec2::new(x0 - m, y0 - m),
                Vec2::new(x0, y0 - m),
            )
        } else {
            (
                Vec2::new(x0, y0 + m),
                Vec2::new(x0 - m, y0 + m),
                Vec2::new(x0 - m, y0),
            )
        }
    } else if y0 > y {
        (
            Vec2::new(x0 + m, y0),
            Vec2::new(x0 + m, y0 - m),
            Vec2::new(x0, y0 - m),
        )
    } else {
        (
            Vec2::new(x0 + m, y0),
            Vec2::new(x0 + m, y0 + m),
            Vec2::new(x0, y0 + m),
        )
    };

    obj.append(Vertex::new(c1, color));
    emit_edge(obj, c1, c2, color);
    emit_edge(obj, c2, c3, color);
    emit_edge(obj, c3, anchor, color);
}

pub(super) fn emit_edge(obj: &mut DrawObject, a: Vec2, b: Vec2, color: Rgb) {
    obj.append(Vertex::new(a, color));
    obj.append(Vertex::new(b, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    /// Edge segments of a loop object: pairs `(vertices[2i], vertices[2i+1])`
    /// with the anchor opening the first edge.
    fn edges(obj: &DrawObject) -> Vec<(Vec2, Vec2)> {
        let vs = obj.vertices();
        (0..vs.len() / 2).map(|i| (vs[2 * i].pos, vs[2 * i + 1].pos)).collect()
    }

    fn assert_square_loop(obj: &DrawObject, side: f32) {
        assert_eq!(obj.len(), 8);
        let edges = edges(obj);
        assert_eq!(edges.len(), 4);

        // Closed: each edge starts where the previous ended, and the loop
        // returns to the anchor.
        for w in edges.windows(2) {
            assert!(w[0].1.distance(w[1].0) < EPS);
        }
        assert!(edges[3].1.distance(edges[0].0) < EPS);

        // Equal edge lengths and right angles.
        for (a, b) in &edges {
            assert!((a.distance(*b) - side).abs() < EPS);
        }
        for w in edges.windows(2) {
            let u = w[0].1 - w[0].0;
            let v = w[1].1 - w[1].0;
            assert!((u.x * v.x + u.y * v.y).abs() < EPS);
        }
    }

    #[test]
    fn drag_into_upper_right_quadrant() {
        let mut obj = DrawObject::empty();
        start(&mut obj, Vec2::zero(), Rgb::WHITE);
        update(&mut obj, Vec2::new(0.3, 0.5), Rgb::WHITE);

        assert!(obj.is_complete());
        assert_square_loop(&obj, 0.5);
        // Side length is max(|dx|, |dy|); the far corner lands at (0.5, 0.5).
        assert!(obj.vertices().iter().any(|v| v.pos.distance(Vec2::new(0.5, 0.5)) < EPS));
    }

    #[test]
    fn each_quadrant_yields_a_square() {
        for target in [
            Vec2::new(0.6, 0.3),
            Vec2::new(0.6, -0.1),
            Vec2::new(-0.4, 0.3),
            Vec2::new(-0.4, -0.1),
        ] {
            let mut obj = DrawObject::empty();
            start(&mut obj, Vec2::new(0.1, 0.1), Rgb::WHITE);
            update(&mut obj, target, Rgb::WHITE);
            assert_square_loop(&obj, 0.5);
        }
    }

    #[test]
    fn moves_rebuild_from_the_fixed_anchor() {
        let mut obj = DrawObject::empty();
        start(&mut obj, Vec2::zero(), Rgb::WHITE);
        update(&mut obj, Vec2::new(0.2, 0.2), Rgb::WHITE);
        update(&mut obj, Vec2::new(0.7, 0.1), Rgb::WHITE);

        assert_square_loop(&obj, 0.7);
        assert_eq!(obj.get(0).pos, Vec2::zero());
    }

    #[test]
    fn rebuild_uses_the_given_anchor() {
        let mut obj = DrawObject::empty();
        rebuild(&mut obj, Vec2::new(0.5, 0.5), Vec2::new(-0.1, 0.2), Rgb::WHITE);

        assert_square_loop(&obj, 0.6);
        assert_eq!(obj.get(0).pos, Vec2::new(0.5, 0.5));
    }
}
