use std::time::Duration;

use super::error::AppError;
use super::platform::{FrameStatus, Platform, RenderDevice, RenderTarget};
use crate::time::{DEFAULT_FRAME_RATE, FrameGate, FrameTime, Tick};

/// Identifier of the render target looked up when none is configured.
pub const DEFAULT_TARGET_ID: &str = "app";

/// Control directive returned by frame ticks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Identifier of the render target to draw into.
    pub target_id: String,

    /// Target cadence of render updates, in frames per second.
    pub frame_rate: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_TARGET_ID.to_string(),
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

/// Render target plus the device drawing into it.
pub struct Session<P: Platform> {
    pub target: P::Target,
    pub device: P::Device,
}

/// Lifecycle of an [`Application`].
pub enum AppState<P: Platform> {
    Uninitialized,
    Initializing,
    Ready(Session<P>),
    Failed(AppError),
}

impl<P: Platform> AppState<P> {
    fn name(&self) -> &'static str {
        match self {
            AppState::Uninitialized => "uninitialized",
            AppState::Initializing => "initializing",
            AppState::Ready(_) => "ready",
            AppState::Failed(_) => "failed",
        }
    }
}

/// Owns the device lifecycle and the gated frame loop.
///
/// Device-dependent operations fail with [`AppError::DeviceUnavailable`] until
/// [`initialize`](Self::initialize) has completed.
pub struct Application<P: Platform> {
    config: AppConfig,
    state: AppState<P>,
    gate: FrameGate,
}

impl<P: Platform> Application<P> {
    pub fn new(config: AppConfig) -> Self {
        let gate = FrameGate::new(config.frame_rate);
        Self {
            config,
            state: AppState::Uninitialized,
            gate,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState<P> {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, AppState::Ready(_))
    }

    /// Returns the ready render device.
    pub fn device(&self) -> Result<&P::Device, AppError> {
        match &self.state {
            AppState::Ready(session) => Ok(&session.device),
            _ => Err(AppError::DeviceUnavailable),
        }
    }

    /// Brings up the render target, adapter and device, configures the surface
    /// and submits a warm-up command buffer.
    ///
    /// Any failure is final: the application moves to `AppState::Failed`.
    pub async fn initialize(&mut self, platform: &mut P) -> Result<(), AppError> {
        if !matches!(self.state, AppState::Uninitialized) {
            return Err(AppError::AlreadyInitialized);
        }

        self.state = AppState::Initializing;

        match self.bring_up(platform).await {
            Ok(session) => {
                log::info!("application ready (target [{}])", self.config.target_id);
                self.state = AppState::Ready(session);
                Ok(())
            }
            Err(e) => {
                log::error!("initialization failed: {e}");
                self.state = AppState::Failed(e.clone());
                Err(e)
            }
        }
    }

    async fn bring_up(&self, platform: &mut P) -> Result<Session<P>, AppError> {
        let id = self.config.target_id.as_str();

        let target = platform
            .find_target(id)
            .ok_or_else(|| AppError::SurfaceNotFound { id: id.to_string() })?;

        let instance = platform
            .create_instance(&target)
            .map_err(AppError::UnsupportedPlatform)?;

        let adapter = platform
            .request_adapter(&instance)
            .await
            .ok_or(AppError::NoAdapter)?;

        let mut device = platform
            .request_device(instance, adapter)
            .await
            .map_err(AppError::DeviceRequest)?;

        let size = target.pixel_size();
        log::debug!("configuring surface at {}x{}", size.width, size.height);
        device.configure(size);
        device.warm_up();

        Ok(Session { target, device })
    }

    /// Syncs the surface to the render target's current pixel size.
    ///
    /// Before initialization this only logs a warning.
    pub fn on_resize(&mut self) {
        match &mut self.state {
            AppState::Ready(session) => {
                let size = session.target.pixel_size();
                log::debug!("resizing surface to {}x{}", size.width, size.height);
                session.device.resize(size);
            }
            other => {
                log::warn!("resize ignored: render target not initialized ({})", other.name());
            }
        }
    }

    /// Offers a presentation opportunity at `now` to the frame gate and renders
    /// when it is accepted.
    pub fn tick(&mut self, now: Duration) -> Result<AppControl, AppError> {
        if !self.is_ready() {
            return Err(AppError::DeviceUnavailable);
        }

        match self.gate.tick(now) {
            Tick::Accepted(frame) => match self.render_update(&frame)? {
                FrameStatus::Fatal => Ok(AppControl::Exit),
                FrameStatus::Presented | FrameStatus::Skipped => Ok(AppControl::Continue),
            },
            Tick::Primed | Tick::Dropped => Ok(AppControl::Continue),
        }
    }

    /// Draws one frame.
    pub fn render_update(&mut self, frame: &FrameTime) -> Result<FrameStatus, AppError> {
        let AppState::Ready(session) = &mut self.state else {
            return Err(AppError::DeviceUnavailable);
        };

        let status = session.device.render(frame);
        if status == FrameStatus::Fatal {
            log::error!("render device failed at frame {}", frame.frame_index);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use winit::dpi::PhysicalSize;

    type Calls = Rc<RefCell<Vec<String>>>;

    struct MockTarget {
        size: Rc<RefCell<PhysicalSize<u32>>>,
    }

    impl RenderTarget for MockTarget {
        fn pixel_size(&self) -> PhysicalSize<u32> {
            *self.size.borrow()
        }
    }

    struct MockDevice {
        calls: Calls,
        next_status: Rc<RefCell<FrameStatus>>,
    }

    impl RenderDevice for MockDevice {
        fn configure(&mut self, size: PhysicalSize<u32>) {
            self.calls.borrow_mut().push(format!("configure {}x{}", size.width, size.height));
        }

        fn warm_up(&mut self) {
            self.calls.borrow_mut().push("warm_up".into());
        }

        fn resize(&mut self, size: PhysicalSize<u32>) {
            self.calls.borrow_mut().push(format!("resize {}x{}", size.width, size.height));
        }

        fn render(&mut self, frame: &FrameTime) -> FrameStatus {
            self.calls
                .borrow_mut()
                .push(format!("render {}", frame.delta.as_millis()));
            *self.next_status.borrow()
        }
    }

    struct MockPlatform {
        calls: Calls,
        size: Rc<RefCell<PhysicalSize<u32>>>,
        next_status: Rc<RefCell<FrameStatus>>,
        target_id: &'static str,
        supported: bool,
        has_adapter: bool,
        device_error: Option<&'static str>,
    }

    impl MockPlatform {
        fn new() -> Self {
            Self {
                calls: Rc::default(),
                size: Rc::new(RefCell::new(PhysicalSize::new(800, 600))),
                next_status: Rc::new(RefCell::new(FrameStatus::Presented)),
                target_id: DEFAULT_TARGET_ID,
                supported: true,
                has_adapter: true,
                device_error: None,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl Platform for MockPlatform {
        type Target = MockTarget;
        type Instance = ();
        type Adapter = ();
        type Device = MockDevice;

        fn find_target(&mut self, id: &str) -> Option<MockTarget> {
            self.calls.borrow_mut().push(format!("find_target {id}"));
            (id == self.target_id).then(|| MockTarget { size: self.size.clone() })
        }

        fn create_instance(&mut self, _target: &MockTarget) -> Result<(), String> {
            self.calls.borrow_mut().push("create_instance".into());
            if self.supported { Ok(()) } else { Err("no backend".into()) }
        }

        async fn request_adapter(&mut self, _instance: &()) -> Option<()> {
            self.calls.borrow_mut().push("request_adapter".into());
            self.has_adapter.then_some(())
        }

        async fn request_device(&mut self, _instance: (), _adapter: ()) -> Result<MockDevice, String> {
            self.calls.borrow_mut().push("request_device".into());
            match self.device_error {
                Some(e) => Err(e.to_string()),
                None => Ok(MockDevice {
                    calls: self.calls.clone(),
                    next_status: self.next_status.clone(),
                }),
            }
        }
    }

    fn app() -> Application<MockPlatform> {
        Application::new(AppConfig::default())
    }

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    fn ready(platform: &mut MockPlatform) -> Application<MockPlatform> {
        let mut app = app();
        pollster::block_on(app.initialize(platform)).unwrap();
        platform.calls.borrow_mut().clear();
        app
    }

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn initialize_runs_bring_up_in_order() {
        let mut platform = MockPlatform::new();
        let mut app = app();

        pollster::block_on(app.initialize(&mut platform)).unwrap();

        assert!(app.is_ready());
        assert_eq!(
            platform.calls(),
            vec![
                "find_target app",
                "create_instance",
                "request_adapter",
                "request_device",
                "configure 800x600",
                "warm_up",
            ]
        );
    }

    #[test]
    fn missing_target_fails_before_adapter_request() {
        let mut platform = MockPlatform { target_id: "other", ..MockPlatform::new() };
        let mut app = app();

        let err = pollster::block_on(app.initialize(&mut platform)).unwrap_err();

        assert_eq!(err, AppError::SurfaceNotFound { id: "app".into() });
        assert_eq!(platform.calls(), vec!["find_target app"]);
        assert!(matches!(app.state(), AppState::Failed(AppError::SurfaceNotFound { .. })));
    }

    #[test]
    fn unsupported_platform_skips_surface_configuration() {
        let mut platform = MockPlatform { supported: false, ..MockPlatform::new() };
        let mut app = app();

        let err = pollster::block_on(app.initialize(&mut platform)).unwrap_err();

        assert!(matches!(err, AppError::UnsupportedPlatform(_)));
        assert!(!platform.calls().iter().any(|c| c.starts_with("configure")));
        assert!(!platform.calls().iter().any(|c| c == "request_adapter"));
    }

    #[test]
    fn missing_adapter_is_reported() {
        let mut platform = MockPlatform { has_adapter: false, ..MockPlatform::new() };
        let mut app = app();

        let err = pollster::block_on(app.initialize(&mut platform)).unwrap_err();

        assert_eq!(err, AppError::NoAdapter);
        assert!(!platform.calls().iter().any(|c| c == "request_device"));
    }

    #[test]
    fn device_request_failure_is_reported() {
        let mut platform = MockPlatform { device_error: Some("lost"), ..MockPlatform::new() };
        let mut app = app();

        let err = pollster::block_on(app.initialize(&mut platform)).unwrap_err();

        assert_eq!(err, AppError::DeviceRequest("lost".into()));
        assert!(matches!(app.state(), AppState::Failed(_)));
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut platform = MockPlatform::new();
        let mut app = ready(&mut platform);

        let err = pollster::block_on(app.initialize(&mut platform)).unwrap_err();

        assert_eq!(err, AppError::AlreadyInitialized);
        assert!(platform.calls().is_empty());
        assert!(app.is_ready());
    }

    #[test]
    fn failed_application_stays_failed() {
        let mut platform = MockPlatform { has_adapter: false, ..MockPlatform::new() };
        let mut app = app();
        let _ = pollster::block_on(app.initialize(&mut platform));

        platform.has_adapter = true;
        let err = pollster::block_on(app.initialize(&mut platform)).unwrap_err();
        assert_eq!(err, AppError::AlreadyInitialized);
        assert!(matches!(app.state(), AppState::Failed(AppError::NoAdapter)));
    }

    // ── device access before init ─────────────────────────────────────────

    #[test]
    fn device_access_before_init_fails() {
        let mut app = app();
        assert_eq!(app.device().err(), Some(AppError::DeviceUnavailable));
        assert_eq!(app.tick(ms(0)), Err(AppError::DeviceUnavailable));

        let frame = FrameTime { delta: ms(20), now: ms(20), frame_index: 0 };
        assert_eq!(app.render_update(&frame), Err(AppError::DeviceUnavailable));
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_before_init_leaves_state_untouched() {
        let mut platform = MockPlatform::new();
        let mut app = app();

        app.on_resize();

        assert!(matches!(app.state(), AppState::Uninitialized));
        assert!(platform.calls().is_empty());

        // Still initializable afterwards.
        pollster::block_on(app.initialize(&mut platform)).unwrap();
    }

    #[test]
    fn resize_follows_target_size() {
        let mut platform = MockPlatform::new();
        let mut app = ready(&mut platform);

        *platform.size.borrow_mut() = PhysicalSize::new(1024, 768);
        app.on_resize();

        assert_eq!(platform.calls(), vec!["resize 1024x768"]);
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_renders_only_accepted_frames() {
        let mut platform = MockPlatform::new();
        let mut app = ready(&mut platform);

        for t in [0, 10, 20, 40] {
            assert_eq!(app.tick(ms(t)), Ok(AppControl::Continue));
        }

        assert_eq!(platform.calls(), vec!["render 20", "render 20"]);
    }

    #[test]
    fn fatal_frame_requests_exit() {
        let mut platform = MockPlatform::new();
        let mut app = ready(&mut platform);
        *platform.next_status.borrow_mut() = FrameStatus::Fatal;

        assert_eq!(app.tick(ms(0)), Ok(AppControl::Continue));
        assert_eq!(app.tick(ms(100)), Ok(AppControl::Exit));
    }

    #[test]
    fn skipped_frame_keeps_running() {
        let mut platform = MockPlatform::new();
        let mut app = ready(&mut platform);
        *platform.next_status.borrow_mut() = FrameStatus::Skipped;

        app.tick(ms(0)).unwrap();
        assert_eq!(app.tick(ms(100)), Ok(AppControl::Continue));
    }

    #[test]
    fn configured_frame_rate_drives_gate() {
        let mut platform = MockPlatform::new();
        let mut app = Application::new(AppConfig { frame_rate: 10, ..AppConfig::default() });
        pollster::block_on(app.initialize(&mut platform)).unwrap();
        platform.calls.borrow_mut().clear();

        for t in [0, 50, 99, 120, 200] {
            app.tick(ms(t)).unwrap();
        }

        assert_eq!(platform.calls(), vec!["render 120"]);
    }
}
