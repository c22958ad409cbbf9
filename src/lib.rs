pub mod error;
pub mod interop;
pub mod math;
pub mod vector;

pub use error::{Result, VectorError};
pub use math::Component;
pub use vector::{Composition, Rotation3, Vector, Vector2, Vector3};
