use crate::coords::Vec2;
use crate::paint::Rgb;

use super::{DrawObject, ShapeKind};

/// Result of a nearest-vertex query.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NearestVertex {
    pub object_index: usize,
    pub vertex_index: usize,
    pub kind: ShapeKind,
    pub distance: f32,
}

/// The committed object list plus the single in-progress object.
///
/// `in_progress` is always present (possibly empty) and never part of
/// `committed`; a pointer-up commits a deep copy and clears it. The store
/// only shrinks through a full [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct SceneStore {
    committed: Vec<DrawObject>,
    in_progress: DrawObject,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn committed(&self) -> &[DrawObject] {
        &self.committed
    }

    #[inline]
    pub fn in_progress(&self) -> &DrawObject {
        &self.in_progress
    }

    #[inline]
    pub fn in_progress_mut(&mut self) -> &mut DrawObject {
        &mut self.in_progress
    }

    /// Total vertex count across committed objects and the in-progress one.
    pub fn total_vertex_count(&self) -> usize {
        self.committed.iter().map(|o| o.len()).sum::<usize>() + self.in_progress.len()
    }

    /// Appends a deep copy of the in-progress object, then clears it.
    ///
    /// The copy is independent: later mutation of the in-progress object
    /// never affects the committed copy.
    pub fn commit(&mut self) {
        self.committed.push(self.in_progress.clone());
        self.in_progress.clear();
    }

    /// Drops the in-progress object without committing it.
    pub fn discard(&mut self) {
        self.in_progress.clear();
    }

    /// Empties the whole scene. There is no partial clear.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.in_progress.clear();
    }

    /// Recolors every vertex of one committed object.
    pub fn recolor(&mut self, object_index: usize, color: Rgb) {
        if let Some(obj) = self.committed.get_mut(object_index) {
            obj.set_color_all(color);
        }
    }

    /// Rigidly moves one committed object by `delta`.
    pub fn translate(&mut self, object_index: usize, delta: Vec2) {
        if let Some(obj) = self.committed.get_mut(object_index) {
            obj.translate(delta);
        }
    }

    #[inline]
    pub fn committed_mut(&mut self, object_index: usize) -> Option<&mut DrawObject> {
        self.committed.get_mut(object_index)
    }

    /// Returns the globally closest committed vertex to `pos`, or `None` if
    /// the scene is empty or the closest vertex is farther than
    /// `max_distance`.
    ///
    /// Ties break toward the first hit in object-then-vertex iteration
    /// order, which keeps the query deterministic.
    pub fn find_nearest_vertex(&self, pos: Vec2, max_distance: f32) -> Option<NearestVertex> {
        let mut best: Option<NearestVertex> = None;

        for (oi, obj) in self.committed.iter().enumerate() {
            for (vi, v) in obj.vertices().iter().enumerate() {
                let d = v.pos.distance(pos);
                if best.map_or(true, |b| d < b.distance) {
                    best = Some(NearestVertex {
                        object_index: oi,
                        vertex_index: vi,
                        kind: obj.kind(),
                        distance: d,
                    });
                }
            }
        }

        best.filter(|b| b.distance <= max_distance)
    }
}
