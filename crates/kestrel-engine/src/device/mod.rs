//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - exposing all of the above to `core::Application` as a `Platform`

mod error;
mod frame;
mod gpu;
mod init;
mod platform;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use platform::{WgpuInstance, WgpuPlatform};
