//! Scene (editor document) types.
//!
//! Responsibilities:
//! - store committed draw objects plus the single in-progress object
//! - keep shape-specific construction rules isolated per shape file under
//!   `scene::shapes`
//! - flatten the whole scene into a GPU-ready vertex stream
//!
//! Geometry is stored as line-segment vertex pairs: a closed loop of four
//! edges occupies eight vertices. During construction the in-progress object
//! may additionally carry one trailing preview vertex (polygon mode only).

mod object;
mod store;
mod stream;
mod vertex;

pub mod shapes;

pub use object::{DrawObject, ShapeKind};
pub use store::{NearestVertex, SceneStore};
pub use stream::{DrawRange, VertexStream};
pub use vertex::Vertex;
