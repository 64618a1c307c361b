//! Kestrel engine crate.
//!
//! Brings up a wgpu device on a window surface and redraws a single quad at a
//! fixed cadence.

pub mod core;
pub mod coords;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
