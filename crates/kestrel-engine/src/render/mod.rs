//! GPU rendering subsystem.
//!
//! Draws one static quad per frame. The renderer owns its GPU resources and,
//! depending on [`PipelineMode`], either rebuilds them every frame or keeps
//! them across frames.

mod ctx;
pub mod geometry;
mod presenter;
mod quad;

pub use ctx::RenderCtx;
pub use presenter::QuadPresenter;
pub use quad::{CLEAR_COLOR, FrameTarget, PipelineMode, QUAD_SHADER, QuadRenderer};
