use crate::coords::Vec2;
use crate::paint::Rgb;

use super::Vertex;

/// Shape kind tag for a draw object.
///
/// Polygon snapshots its side count when construction starts; changing the
/// configured side count mid-polygon never reshapes an existing object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeKind {
    Line,
    Square,
    Rectangle,
    Polygon { sides: u32 },
}

impl ShapeKind {
    /// Vertex count of a completed object of this kind.
    ///
    /// Geometry is stored as line-segment pairs, so a four-edge loop is eight
    /// vertices and an n-gon is `2n`.
    #[inline]
    pub fn expected_vertex_count(self) -> usize {
        match self {
            ShapeKind::Line => 2,
            ShapeKind::Square | ShapeKind::Rectangle => 8,
            ShapeKind::Polygon { sides } => 2 * sides as usize,
        }
    }
}

/// An ordered, mutable sequence of vertices forming one drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawObject {
    kind: ShapeKind,
    vertices: Vec<Vertex>,
}

impl Default for DrawObject {
    fn default() -> Self {
        DrawObject::empty()
    }
}

impl DrawObject {
    #[inline]
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, vertices: Vec::new() }
    }

    /// An empty placeholder object, used for the idle in-progress slot.
    #[inline]
    pub fn empty() -> Self {
        Self::new(ShapeKind::Line)
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True once the object holds every vertex its kind requires.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.vertices.len() == self.kind.expected_vertex_count()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Bounds-checked access. Out-of-range indices are a programming error.
    #[inline]
    pub fn get(&self, i: usize) -> Vertex {
        self.vertices[i]
    }

    #[inline]
    pub fn append(&mut self, v: Vertex) {
        self.vertices.push(v);
    }

    /// Removes the trailing vertex. No-op on an empty object.
    ///
    /// Paired with [`append`](Self::append) this implements the
    /// retract-and-replace preview discipline used by every shape builder:
    /// trailing vertices are a guess from the current pointer position and
    /// are withdrawn, never kept as history, each time the pointer moves.
    #[inline]
    pub fn remove_last(&mut self) {
        self.vertices.pop();
    }

    /// Drops all but the first `keep` vertices.
    ///
    /// Square/rectangle builders keep only the anchor before re-emitting the
    /// whole loop.
    #[inline]
    pub fn truncate(&mut self, keep: usize) {
        self.vertices.truncate(keep);
    }

    /// Moves a single vertex. Out-of-range indices are a programming error.
    #[inline]
    pub fn set_position(&mut self, i: usize, pos: Vec2) {
        self.vertices[i].pos = pos;
    }

    /// Recolors every vertex; used when a committed object's swatch changes.
    pub fn set_color_all(&mut self, color: Rgb) {
        for v in &mut self.vertices {
            v.color = color;
        }
    }

    /// Rigidly moves every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            v.pos = v.pos + delta;
        }
    }

    /// Index of the vertex farthest from `pos`, or `None` when empty.
    ///
    /// Resize mode regenerates squares/rectangles from this vertex: the
    /// corner farthest from the grab point stays fixed while the rest of the
    /// loop follows the cursor.
    pub fn farthest_vertex(&self, pos: Vec2) -> Option<usize> {
        self.vertices
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.pos
                    .distance(pos)
                    .partial_cmp(&b.pos.distance(pos))
                    .unwrap_or(core::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }

    /// Empties the object and resets its kind to the placeholder.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.kind = ShapeKind::Line;
    }

    /// Empties the vertices and re-tags the object, keeping its allocation.
    pub fn reset(&mut self, kind: ShapeKind) {
        self.vertices.clear();
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgb;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec2::new(x, y), Rgb::WHITE)
    }

    // ── expected counts ───────────────────────────────────────────────────

    #[test]
    fn expected_vertex_counts_per_kind() {
        assert_eq!(ShapeKind::Line.expected_vertex_count(), 2);
        assert_eq!(ShapeKind::Square.expected_vertex_count(), 8);
        assert_eq!(ShapeKind::Rectangle.expected_vertex_count(), 8);
        assert_eq!(ShapeKind::Polygon { sides: 5 }.expected_vertex_count(), 10);
    }

    // ── retract/replace ───────────────────────────────────────────────────

    #[test]
    fn remove_last_then_append_is_length_neutral() {
        let mut obj = DrawObject::new(ShapeKind::Line);
        obj.append(v(0.0, 0.0));
        obj.append(v(0.5, 0.5));

        let len = obj.len();
        obj.remove_last();
        obj.append(v(0.6, 0.6));
        assert_eq!(obj.len(), len);
    }

    #[test]
    fn remove_last_on_empty_is_noop() {
        let mut obj = DrawObject::new(ShapeKind::Line);
        obj.remove_last();
        assert!(obj.is_empty());
    }

    // ── mutators ──────────────────────────────────────────────────────────

    #[test]
    fn set_color_all_recolors_every_vertex() {
        let mut obj = DrawObject::new(ShapeKind::Line);
        obj.append(v(0.0, 0.0));
        obj.append(v(1.0, 0.0));

        obj.set_color_all(Rgb::new(10, 20, 30));
        assert!(obj.vertices().iter().all(|v| v.color == Rgb::new(10, 20, 30)));
    }

    #[test]
    fn translate_moves_rigidly() {
        let mut obj = DrawObject::new(ShapeKind::Line);
        obj.append(v(0.0, 0.0));
        obj.append(v(0.5, 0.0));

        obj.translate(Vec2::new(0.1, -0.2));
        assert_eq!(obj.get(0).pos, Vec2::new(0.1, -0.2));
        assert_eq!(obj.get(1).pos, Vec2::new(0.6, -0.2));
    }

    #[test]
    fn clear_resets_kind() {
        let mut obj = DrawObject::new(ShapeKind::Square);
        obj.append(v(0.0, 0.0));
        obj.clear();
        assert!(obj.is_empty());
        assert_eq!(obj.kind(), ShapeKind::Line);
    }

    #[test]
    fn empty_object_is_not_complete() {
        assert!(!DrawObject::empty().is_complete());
    }
}
