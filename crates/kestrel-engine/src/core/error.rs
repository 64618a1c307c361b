/// Errors reported by [`Application`](super::Application).
///
/// Initialization errors are fatal; the application stays in
/// `AppState::Failed` holding a copy of the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("render target with id [{id}] not found")]
    SurfaceNotFound { id: String },

    #[error("graphics API not supported on this platform: {0}")]
    UnsupportedPlatform(String),

    #[error("no appropriate GPU adapter found")]
    NoAdapter,

    #[error("failed to create GPU device: {0}")]
    DeviceRequest(String),

    #[error("GPU device is not ready")]
    DeviceUnavailable,

    #[error("application is already initialized")]
    AlreadyInitialized,
}
