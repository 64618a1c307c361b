use crate::core::{FrameStatus, RenderDevice};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::time::FrameTime;

use super::{FrameTarget, PipelineMode, QuadRenderer, RenderCtx};

/// Render device that draws the quad onto a window surface.
pub struct QuadPresenter {
    gpu: Gpu<'static>,
    renderer: QuadRenderer,
}

impl QuadPresenter {
    pub fn new(gpu: Gpu<'static>, mode: PipelineMode) -> Self {
        let info = gpu.adapter_info();
        log::info!("presenting on \"{}\" ({:?}), {mode:?}", info.name, info.backend);
        Self {
            gpu,
            renderer: QuadRenderer::new(mode),
        }
    }

    pub fn gpu(&self) -> &Gpu<'static> {
        &self.gpu
    }

    pub fn renderer(&self) -> &QuadRenderer {
        &self.renderer
    }
}

impl RenderDevice for QuadPresenter {
    fn configure(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.configure(size);
    }

    fn warm_up(&mut self) {
        self.gpu.submit_empty();
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(size);
    }

    fn render(&mut self, frame: &FrameTime) -> FrameStatus {
        if !self.gpu.is_drawable() {
            return FrameStatus::Skipped;
        }

        let mut gpu_frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("frame {} not acquired: {err}", frame.frame_index);
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => FrameStatus::Fatal,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        FrameStatus::Skipped
                    }
                };
            }
        };

        log::trace!("frame {} dt={:?}", frame.frame_index, frame.delta);

        let ctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
        );

        // FrameTarget borrows the encoder; dropped before submit() takes the frame.
        {
            let mut target = FrameTarget::new(&mut gpu_frame.encoder, &gpu_frame.view);
            self.renderer.render(&ctx, &mut target);
        }

        self.gpu.submit(gpu_frame);
        FrameStatus::Presented
    }
}
