//! GPU rendering subsystem.
//!
//! The renderer consumes the flattened scene [`VertexStream`] and issues
//! GPU commands via wgpu.
//!
//! Convention:
//! - CPU geometry is already in NDC (`[-1, 1]`, +Y up); the vertex shader
//!   passes positions straight through.
//! - Color channels arrive as raw `0`–`255` values and are normalized at
//!   upload time.
//!
//! [`VertexStream`]: crate::scene::VertexStream

mod ctx;
mod stream;

pub use ctx::{RenderCtx, RenderTarget};
pub use stream::StreamRenderer;
