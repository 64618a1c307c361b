//! Time subsystem.
//!
//! Provides the fixed-cadence frame gate without coupling to the runtime.
//! Intended usage:
//! - one `FrameGate` per render loop
//! - call `tick(now)` once per presentation opportunity; render only on
//!   `Tick::Accepted`

mod frame_gate;

pub use frame_gate::{DEFAULT_FRAME_RATE, FrameGate, FrameTime, Tick};
