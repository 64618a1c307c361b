use std::collections::HashMap;
use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::{Gpu, GpuInit};
use crate::core::{Platform, RenderTarget};
use crate::render::{PipelineMode, QuadPresenter};

impl RenderTarget for Arc<Window> {
    fn pixel_size(&self) -> PhysicalSize<u32> {
        self.inner_size()
    }
}

/// Instance plus the surface created for a target window.
pub struct WgpuInstance {
    instance: wgpu::Instance,
    surface: wgpu::Surface<'static>,
}

/// wgpu + winit implementation of [`Platform`].
///
/// Windows are registered under an identifier by the runtime and looked up by
/// the application during initialization.
pub struct WgpuPlatform {
    init: GpuInit,
    pipeline_mode: PipelineMode,
    targets: HashMap<String, Arc<Window>>,
}

impl WgpuPlatform {
    pub fn new(init: GpuInit, pipeline_mode: PipelineMode) -> Self {
        Self {
            init,
            pipeline_mode,
            targets: HashMap::new(),
        }
    }

    /// Makes `window` discoverable under `id`, replacing any previous window.
    pub fn register_target(&mut self, id: impl Into<String>, window: Arc<Window>) {
        let id = id.into();
        log::debug!("registered render target [{id}]");
        self.targets.insert(id, window);
    }

    pub fn unregister_target(&mut self, id: &str) -> Option<Arc<Window>> {
        self.targets.remove(id)
    }
}

impl Platform for WgpuPlatform {
    type Target = Arc<Window>;
    type Instance = WgpuInstance;
    type Adapter = wgpu::Adapter;
    type Device = QuadPresenter;

    fn find_target(&mut self, id: &str) -> Option<Arc<Window>> {
        self.targets.get(id).cloned()
    }

    fn create_instance(&mut self, target: &Arc<Window>) -> Result<WgpuInstance, String> {
        if self.init.backends.is_empty() {
            return Err("no graphics backends enabled".to_string());
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: self.init.backends,
            ..Default::default()
        });

        // The surface holds its own handle to the window, so it is `'static`.
        let surface = instance
            .create_surface(target.clone())
            .map_err(|e| format!("failed to create wgpu surface: {e}"))?;

        Ok(WgpuInstance { instance, surface })
    }

    async fn request_adapter(&mut self, instance: &WgpuInstance) -> Option<wgpu::Adapter> {
        instance
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.init.power_preference,
                compatible_surface: Some(&instance.surface),
                force_fallback_adapter: false,
            })
            .await
            .inspect_err(|e| log::warn!("adapter request failed: {e}"))
            .ok()
    }

    async fn request_device(
        &mut self,
        instance: WgpuInstance,
        adapter: wgpu::Adapter,
    ) -> Result<QuadPresenter, String> {
        // Surface and adapter keep the instance's shared state alive.
        let WgpuInstance { instance: _, surface } = instance;

        let gpu = Gpu::connect(surface, adapter, &self.init)
            .await
            .map_err(|e| format!("{e:#}"))?;

        Ok(QuadPresenter::new(gpu, self.pipeline_mode))
    }
}
