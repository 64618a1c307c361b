use winit::dpi::PhysicalSize;

use crate::time::FrameTime;

/// Result of a single render update.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// Commands were submitted and the frame presented.
    Presented,
    /// Nothing was drawn this time; the next tick may succeed.
    Skipped,
    /// The device cannot continue; the loop should end.
    Fatal,
}

/// A presentable destination that knows its current pixel size.
pub trait RenderTarget {
    fn pixel_size(&self) -> PhysicalSize<u32>;
}

/// A logical device bound to a surface, able to draw the frame.
pub trait RenderDevice {
    /// First configuration of the surface.
    fn configure(&mut self, size: PhysicalSize<u32>);

    /// Submits an empty command buffer.
    fn warm_up(&mut self);

    /// Reconfigures the surface after the target changed size.
    fn resize(&mut self, size: PhysicalSize<u32>);

    /// Performs one render update.
    fn render(&mut self, frame: &FrameTime) -> FrameStatus;
}

/// Host services needed to bring up a rendering session.
///
/// Each step maps onto one failure mode of `Application::initialize`. The
/// steps run in declaration order and stop at the first failure.
pub trait Platform {
    type Target: RenderTarget;
    /// Graphics instance plus the surface created for the target.
    type Instance;
    type Adapter;
    type Device: RenderDevice;

    /// Looks up a render target by identifier.
    fn find_target(&mut self, id: &str) -> Option<Self::Target>;

    /// Creates the graphics instance and the surface for `target`.
    ///
    /// `Err` carries a human-readable reason the API is unavailable.
    fn create_instance(&mut self, target: &Self::Target) -> Result<Self::Instance, String>;

    fn request_adapter(
        &mut self,
        instance: &Self::Instance,
    ) -> impl Future<Output = Option<Self::Adapter>>;

    fn request_device(
        &mut self,
        instance: Self::Instance,
        adapter: Self::Adapter,
    ) -> impl Future<Output = Result<Self::Device, String>>;
}
