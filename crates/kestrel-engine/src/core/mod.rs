//! Core engine-facing contracts.
//!
//! This module holds the application lifecycle (device bring-up, resize, gated
//! frame loop) and the seams it uses to reach the host: `Platform` for
//! bring-up, `RenderTarget` for sizing and `RenderDevice` for drawing.

mod app;
mod error;
mod platform;

pub use app::{AppConfig, AppControl, AppState, Application, DEFAULT_TARGET_ID, Session};
pub use error::AppError;
pub use platform::{FrameStatus, Platform, RenderDevice, RenderTarget};
