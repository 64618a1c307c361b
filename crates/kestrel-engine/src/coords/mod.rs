//! Small value types used by the engine and its callers.

mod vector;

pub use vector::{Vecf, Vector2f};
