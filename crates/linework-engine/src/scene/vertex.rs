use crate::coords::Vec2;
use crate::paint::Rgb;

/// A 2D point plus its color; the atomic drawable unit.
///
/// Owned exclusively by the `DrawObject` holding it, never shared across
/// objects. Position moves during resize; color changes per-object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Vec2,
    pub color: Rgb,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec2, color: Rgb) -> Self {
        Self { pos, color }
    }
}
