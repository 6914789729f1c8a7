//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering

mod gpu;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
