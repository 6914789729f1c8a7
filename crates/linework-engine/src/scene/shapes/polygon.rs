use crate::coords::Vec2;
use crate::paint::Rgb;
use crate::scene::{DrawObject, ShapeKind, Vertex};

/// Outcome of placing a polygon vertex on pointer-down.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Placement {
    /// More vertices are still needed.
    Placed,
    /// The closing vertex was appended; the loop is complete.
    Closed,
}

/// Starts a new polygon, snapshotting the configured side count.
///
/// Later changes to the configured count never reshape this object; the
/// count sampled here drives completion.
pub fn start(obj: &mut DrawObject, pos: Vec2, sides: u32, color: Rgb) {
    obj.reset(ShapeKind::Polygon { sides: sides.max(3) });
    obj.append(Vertex::new(pos, color));
}

/// Places the next committed vertex of the loop (one per click).
///
/// The trailing preview vertex, which has been tracking the cursor, becomes
/// permanent as the end of its segment, and the placed vertex opens the next
/// one. When the count reaches one short of the total, the loop is closed
/// with a copy of the first vertex's position and no further vertices are
/// accepted.
pub fn place_vertex(obj: &mut DrawObject, pos: Vec2, color: Rgb) -> Placement {
    debug_assert!(!obj.is_empty(), "place_vertex requires a started polygon");

    let expected = obj.kind().expected_vertex_count();
    obj.append(Vertex::new(pos, color));

    if obj.len() == expected - 1 {
        let first = obj.get(0).pos;
        obj.append(Vertex::new(first, color));
        Placement::Closed
    } else {
        Placement::Placed
    }
}

/// Tracks the edge currently being placed so it follows the cursor.
///
/// With an odd vertex count the last segment is open and a preview endpoint
/// is appended; with an even count the trailing vertex *is* the preview and
/// is retracted and replaced. Objects at or past the last placeable segment
/// are left alone.
pub fn track_preview(obj: &mut DrawObject, pos: Vec2, color: Rgb) {
    if obj.is_empty() {
        return;
    }

    let expected = obj.kind().expected_vertex_count();
    if obj.len() > expected - 2 {
        return;
    }

    if obj.len() % 2 == 1 {
        obj.append(Vertex::new(pos, color));
    } else {
        obj.remove_last();
        obj.append(Vertex::new(pos, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    /// Click-move-click… helper driving the builder like the pointer FSM does.
    fn draw_triangle() -> DrawObject {
        let mut obj = DrawObject::empty();
        start(&mut obj, p(0.0, 0.5), 3, Rgb::WHITE);
        track_preview(&mut obj, p(-0.3, -0.2), Rgb::WHITE);
        track_preview(&mut obj, p(-0.5, -0.5), Rgb::WHITE);
        assert_eq!(place_vertex(&mut obj, p(-0.5, -0.5), Rgb::WHITE), Placement::Placed);
        track_preview(&mut obj, p(0.5, -0.5), Rgb::WHITE);
        assert_eq!(place_vertex(&mut obj, p(0.5, -0.5), Rgb::WHITE), Placement::Closed);
        obj
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn triangle_completes_with_six_vertices() {
        let obj = draw_triangle();
        assert!(obj.is_complete());
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn closing_vertex_equals_the_first() {
        let obj = draw_triangle();
        assert_eq!(obj.get(5).pos, obj.get(0).pos);
    }

    #[test]
    fn segments_chain_around_the_loop() {
        let obj = draw_triangle();
        let vs = obj.vertices();
        // Pairs: (v0,v1) (v2,v3) (v4,v5); each edge starts where the
        // previous ended.
        assert_eq!(vs[1].pos, vs[2].pos);
        assert_eq!(vs[3].pos, vs[4].pos);
    }

    // ── preview discipline ────────────────────────────────────────────────

    #[test]
    fn preview_is_appended_once_then_replaced() {
        let mut obj = DrawObject::empty();
        start(&mut obj, p(0.0, 0.0), 4, Rgb::WHITE);

        track_preview(&mut obj, p(0.1, 0.0), Rgb::WHITE);
        assert_eq!(obj.len(), 2);
        track_preview(&mut obj, p(0.2, 0.0), Rgb::WHITE);
        track_preview(&mut obj, p(0.3, 0.0), Rgb::WHITE);
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get(1).pos, p(0.3, 0.0));
    }

    #[test]
    fn preview_stops_past_the_last_placeable_segment() {
        let obj = draw_triangle();
        let mut obj2 = obj.clone();
        track_preview(&mut obj2, p(0.9, 0.9), Rgb::WHITE);
        assert_eq!(obj2, obj);
    }

    #[test]
    fn side_count_is_snapshotted_at_start() {
        let mut obj = DrawObject::empty();
        start(&mut obj, p(0.0, 0.0), 5, Rgb::WHITE);
        assert_eq!(obj.kind(), ShapeKind::Polygon { sides: 5 });
        assert_eq!(obj.kind().expected_vertex_count(), 10);
    }

    #[test]
    fn side_count_below_three_is_clamped() {
        let mut obj = DrawObject::empty();
        start(&mut obj, p(0.0, 0.0), 1, Rgb::WHITE);
        assert_eq!(obj.kind(), ShapeKind::Polygon { sides: 3 });
    }
}
