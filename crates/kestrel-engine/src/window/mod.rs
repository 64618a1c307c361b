//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, registers the window as the render
//! target and drives the application's frame ticks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
