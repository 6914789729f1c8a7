use crate::coords::Vec2;
use crate::input::PointerEvent;
use crate::paint::Rgb;
use crate::scene::shapes::polygon::Placement;
use crate::scene::shapes::{line, polygon, rectangle, square};
use crate::scene::{SceneStore, ShapeKind, VertexStream};

use super::Tool;

/// Maximum NDC distance at which a resize grab latches onto a vertex.
pub const GRAB_DISTANCE: f32 = 0.05;

/// Coincident-corner tolerance when grabbing polygon vertices.
const CORNER_EPS: f32 = 1e-4;

const DEFAULT_POLYGON_SIDES: u32 = 3;

/// Active resize drag over one committed object.
#[derive(Debug, Clone)]
enum ResizeGrab {
    /// Free-form vertex drag (lines and polygon corners). All listed
    /// vertices follow the pointer; polygon corners appear twice in the
    /// segment-pair layout and must move together to keep the loop closed.
    Vertices { object_index: usize, indices: Vec<usize> },

    /// Square/rectangle regeneration from a fixed anchor, reusing the
    /// draw-time loop generator.
    Loop { object_index: usize, kind: ShapeKind, anchor: Vec2, color: Rgb },
}

/// The whole editor: scene, tool settings, and the pointer state machine.
///
/// This is a plain reducer over [`PointerEvent`]s; it never touches platform
/// or GPU types, which keeps every interaction sequence unit-testable.
#[derive(Debug)]
pub struct Editor {
    scene: SceneStore,
    tool: Tool,
    color: Rgb,
    polygon_sides: u32,

    /// Primary button currently held (single-drag shapes draw only while
    /// this is set).
    pointer_held: bool,

    /// Polygon "should draw" flag: set when the first vertex is placed,
    /// cleared when the closing vertex lands or the shape is cancelled.
    polygon_armed: bool,

    resize: Option<ResizeGrab>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            scene: SceneStore::new(),
            tool: Tool::default(),
            color: Rgb::WHITE,
            polygon_sides: DEFAULT_POLYGON_SIDES,
            pointer_held: false,
            polygon_armed: false,
            resize: None,
        }
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn polygon_sides(&self) -> u32 {
        self.polygon_sides
    }

    /// Flattens the current scene for upload.
    pub fn stream(&self) -> VertexStream {
        VertexStream::build(&self.scene)
    }

    // ── settings ──────────────────────────────────────────────────────────

    /// Switches tools, dropping any in-progress shape.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.cancel();
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Parses a `#rrggbb` color. Malformed input keeps the last valid color
    /// and reports `false`; an undefined color never reaches a vertex.
    pub fn set_color_hex(&mut self, hex: &str) -> bool {
        match Rgb::from_hex(hex) {
            Some(c) => {
                self.color = c;
                true
            }
            None => {
                log::warn!("ignoring malformed color {hex:?}");
                false
            }
        }
    }

    /// Sets the side count for the *next* polygon; the in-progress one keeps
    /// the count sampled when it started. Clamped to at least 3.
    pub fn set_polygon_sides(&mut self, sides: u32) {
        self.polygon_sides = sides.max(3);
    }

    /// Discards the in-progress shape and any active grab.
    pub fn cancel(&mut self) {
        self.scene.discard();
        self.polygon_armed = false;
        self.resize = None;
    }

    /// Empties the whole scene.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.polygon_armed = false;
        self.resize = None;
    }

    // ── object list commands ──────────────────────────────────────────────

    /// Recolors one committed object.
    pub fn recolor(&mut self, object_index: usize, color: Rgb) {
        self.scene.recolor(object_index, color);
    }

    /// Rigidly moves a committed object so its first vertex lands on
    /// `target_x` (slider-style absolute repositioning).
    pub fn move_object_to_x(&mut self, object_index: usize, target_x: f32) {
        let Some(obj) = self.scene.committed().get(object_index) else { return };
        if obj.is_empty() {
            return;
        }
        let delta = Vec2::new(target_x - obj.get(0).pos.x, 0.0);
        self.scene.translate(object_index, delta);
    }

    // ── pointer reducer ───────────────────────────────────────────────────

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Moved(pos) => self.pointer_moved(pos),
            PointerEvent::Up(pos) => self.pointer_up(pos),
        }
    }

    fn pointer_down(&mut self, pos: Vec2) {
        self.pointer_held = true;

        match self.tool {
            Tool::Line => line::start(self.scene.in_progress_mut(), pos, self.color),
            Tool::Square => square::start(self.scene.in_progress_mut(), pos, self.color),
            Tool::Rectangle => rectangle::start(self.scene.in_progress_mut(), pos, self.color),

            Tool::Polygon => {
                if self.polygon_armed && !self.scene.in_progress().is_empty() {
                    let placed =
                        polygon::place_vertex(self.scene.in_progress_mut(), pos, self.color);
                    if placed == Placement::Closed {
                        self.polygon_armed = false;
                    }
                } else {
                    polygon::start(
                        self.scene.in_progress_mut(),
                        pos,
                        self.polygon_sides,
                        self.color,
                    );
                    self.polygon_armed = true;
                }
            }

            Tool::Resize => self.resize = self.grab_nearest(pos),
        }
    }

    fn pointer_moved(&mut self, pos: Vec2) {
        // Polygon preview follows the hovering cursor between clicks; no
        // button needs to be held.
        if self.tool == Tool::Polygon && self.polygon_armed {
            polygon::track_preview(self.scene.in_progress_mut(), pos, self.color);
            return;
        }

        if !self.pointer_held {
            return;
        }

        match self.tool {
            Tool::Line => line::update(self.scene.in_progress_mut(), pos, self.color),
            Tool::Square => square::update(self.scene.in_progress_mut(), pos, self.color),
            Tool::Rectangle => rectangle::update(self.scene.in_progress_mut(), pos, self.color),
            Tool::Polygon => {}
            Tool::Resize => self.drag_resize(pos),
        }
    }

    fn pointer_up(&mut self, _pos: Vec2) {
        self.pointer_held = false;

        match self.tool {
            Tool::Line | Tool::Square | Tool::Rectangle => {
                // A drag that never produced a full shape is dropped, never
                // committed half-built.
                if self.scene.in_progress().is_complete() {
                    self.scene.commit();
                } else {
                    self.scene.discard();
                }
            }

            Tool::Polygon => {
                // Release commits only a closed loop; a partial polygon
                // stays in progress so the click sequence can continue.
                if self.scene.in_progress().is_complete() {
                    self.scene.commit();
                }
            }

            Tool::Resize => {
                // Geometry was edited in place at the same object index;
                // releasing just ends the drag.
                self.resize = None;
            }
        }
    }

    // ── resize mode ───────────────────────────────────────────────────────

    fn grab_nearest(&self, pos: Vec2) -> Option<ResizeGrab> {
        let hit = self.scene.find_nearest_vertex(pos, GRAB_DISTANCE)?;
        let obj = &self.scene.committed()[hit.object_index];

        let grab = match hit.kind {
            ShapeKind::Line => ResizeGrab::Vertices {
                object_index: hit.object_index,
                indices: vec![hit.vertex_index],
            },

            ShapeKind::Polygon { .. } => {
                // Grab every vertex sharing the corner; segment pairs store
                // each interior corner twice.
                let corner = obj.get(hit.vertex_index).pos;
                let indices = obj
                    .vertices()
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.pos.distance(corner) <= CORNER_EPS)
                    .map(|(i, _)| i)
                    .collect();
                ResizeGrab::Vertices { object_index: hit.object_index, indices }
            }

            ShapeKind::Square | ShapeKind::Rectangle => {
                // The vertex farthest from the grab point stays fixed; the
                // loop is regenerated from it with the draw-time generator.
                let anchor_index = obj.farthest_vertex(pos)?;
                ResizeGrab::Loop {
                    object_index: hit.object_index,
                    kind: hit.kind,
                    anchor: obj.get(anchor_index).pos,
                    color: obj.get(0).color,
                }
            }
        };

        Some(grab)
    }

    fn drag_resize(&mut self, pos: Vec2) {
        let Some(grab) = self.resize.clone() else { return };

        match grab {
            ResizeGrab::Vertices { object_index, indices } => {
                let Some(obj) = self.scene.committed_mut(object_index) else { return };
                for i in indices {
                    obj.set_position(i, pos);
                }
            }

            ResizeGrab::Loop { object_index, kind, anchor, color } => {
                let Some(obj) = self.scene.committed_mut(object_index) else { return };
                match kind {
                    ShapeKind::Square => square::rebuild(obj, anchor, pos, color),
                    ShapeKind::Rectangle => rectangle::rebuild(obj, anchor, pos, color),
                    _ => {}
                }
            }
        }
    }
}
