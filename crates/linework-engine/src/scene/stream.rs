use super::SceneStore;

/// Draw range for one object inside the flattened stream.
///
/// `offset` and `count` are in vertices, matching what the renderer passes
/// to its per-object draw calls.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawRange {
    pub offset: u32,
    pub count: u32,
}

/// The whole scene flattened into parallel position/color arrays.
///
/// Color channels are carried as the raw `0`–`255` values; normalization to
/// `[0, 1]` happens in the renderer at upload time (`Rgb::to_linear`).
///
/// Rebuilt from scratch after every mutation. Scenes are small and
/// interactive; incremental updates are not worth the bookkeeping.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VertexStream {
    /// `(x, y)` pairs, two entries per vertex.
    pub positions: Vec<f32>,
    /// `(r, g, b)` triples, three entries per vertex.
    pub colors: Vec<f32>,
    /// One range per committed object, then one trailing range for the
    /// in-progress object (possibly zero-count).
    pub ranges: Vec<DrawRange>,
}

impl VertexStream {
    /// Flattens `store`: committed objects in order, in-progress last.
    pub fn build(store: &SceneStore) -> VertexStream {
        let total = store.total_vertex_count();
        let mut stream = VertexStream {
            positions: Vec::with_capacity(total * 2),
            colors: Vec::with_capacity(total * 3),
            ranges: Vec::with_capacity(store.committed().len() + 1),
        };

        let mut offset = 0u32;
        for obj in store.committed().iter().chain(std::iter::once(store.in_progress())) {
            for v in obj.vertices() {
                stream.positions.push(v.pos.x);
                stream.positions.push(v.pos.y);
                stream.colors.push(v.color.r as f32);
                stream.colors.push(v.color.g as f32);
                stream.colors.push(v.color.b as f32);
            }

            let count = obj.len() as u32;
            stream.ranges.push(DrawRange { offset, count });
            offset += count;
        }

        stream
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Rgb;
    use crate::scene::{ShapeKind, Vertex};

    fn push_line(store: &mut SceneStore, a: Vec2, b: Vec2, color: Rgb) {
        store.in_progress_mut().reset(ShapeKind::Line);
        store.in_progress_mut().append(Vertex::new(a, color));
        store.in_progress_mut().append(Vertex::new(b, color));
        store.commit();
    }

    #[test]
    fn empty_store_yields_single_empty_range() {
        let stream = VertexStream::build(&SceneStore::new());
        assert!(stream.positions.is_empty());
        assert!(stream.colors.is_empty());
        assert_eq!(stream.ranges, vec![DrawRange { offset: 0, count: 0 }]);
    }

    #[test]
    fn lengths_are_consistent() {
        let mut store = SceneStore::new();
        push_line(&mut store, Vec2::zero(), Vec2::new(0.5, 0.0), Rgb::WHITE);
        push_line(&mut store, Vec2::new(0.1, 0.1), Vec2::new(0.2, 0.2), Rgb::BLACK);
        store.in_progress_mut().reset(ShapeKind::Line);
        store.in_progress_mut().append(Vertex::new(Vec2::new(0.9, 0.9), Rgb::WHITE));

        let stream = VertexStream::build(&store);
        let total = store.total_vertex_count();

        assert_eq!(stream.positions.len(), 2 * total);
        assert_eq!(stream.colors.len(), 3 * total);
        assert_eq!(stream.ranges.iter().map(|r| r.count as usize).sum::<usize>(), total);
    }

    #[test]
    fn ranges_are_contiguous_with_trailing_in_progress() {
        let mut store = SceneStore::new();
        push_line(&mut store, Vec2::zero(), Vec2::new(0.5, 0.0), Rgb::WHITE);
        push_line(&mut store, Vec2::new(0.1, 0.1), Vec2::new(0.2, 0.2), Rgb::WHITE);

        let stream = VertexStream::build(&store);
        assert_eq!(
            stream.ranges,
            vec![
                DrawRange { offset: 0, count: 2 },
                DrawRange { offset: 2, count: 2 },
                DrawRange { offset: 4, count: 0 },
            ]
        );
    }

    #[test]
    fn colors_carry_raw_channel_values() {
        let mut store = SceneStore::new();
        push_line(&mut store, Vec2::zero(), Vec2::new(0.5, 0.0), Rgb::new(255, 0, 0));

        let stream = VertexStream::build(&store);
        assert_eq!(&stream.colors[0..3], &[255.0, 0.0, 0.0]);
    }
}
