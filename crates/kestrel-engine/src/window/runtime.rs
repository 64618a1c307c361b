use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{AppConfig, AppControl, AppError, Application, DEFAULT_TARGET_ID};
use crate::device::{GpuInit, WgpuPlatform};
use crate::render::PipelineMode;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Identifier the window is registered under.
    ///
    /// The application finds its render target by `app.target_id`; the two must
    /// agree for initialization to succeed.
    pub target_id: String,

    pub pipeline_mode: PipelineMode,
    pub app: AppConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "kestrel".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            target_id: DEFAULT_TARGET_ID.to_string(),
            pipeline_mode: PipelineMode::default(),
            app: AppConfig::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, initializes the application and runs the frame loop
    /// until the window closes.
    ///
    /// Initialization failures end the loop and are returned.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(e) => Err(e).context("application failed to start"),
            None => Ok(()),
        }
    }
}

struct RuntimeState {
    config: RuntimeConfig,
    platform: WgpuPlatform,
    app: Application<WgpuPlatform>,

    window: Option<Arc<Window>>,
    started: Instant,

    failure: Option<AppError>,
    exit_requested: bool,
}

impl RuntimeState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        let platform = WgpuPlatform::new(gpu_init, config.pipeline_mode);
        let app = Application::new(config.app.clone());
        Self {
            config,
            platform,
            app,
            window: None,
            started: Instant::now(),
            failure: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(Arc::new(window))
    }
}

impl ApplicationHandler for RuntimeState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.request_exit(event_loop);
                return;
            }
        };

        self.platform
            .register_target(self.config.target_id.clone(), window.clone());
        self.window = Some(window.clone());

        if let Err(e) = pollster::block_on(self.app.initialize(&mut self.platform)) {
            self.failure = Some(e);
            self.request_exit(event_loop);
            return;
        }

        // Frame timestamps are measured from the moment the loop starts.
        self.started = Instant::now();
        window.request_redraw();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // One pending redraw at a time; re-armed every loop iteration.
        if self.app.is_ready() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.platform.unregister_target(&self.config.target_id);
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.app.on_resize();
            }

            WindowEvent::RedrawRequested => {
                let now = self.started.elapsed();
                match self.app.tick(now) {
                    Ok(AppControl::Continue) => {}
                    Ok(AppControl::Exit) => self.request_exit(event_loop),
                    Err(e) => log::debug!("tick skipped: {e}"),
                }
            }

            _ => {}
        }
    }
}
