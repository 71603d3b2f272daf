//! Value model for path evaluation
//!
//! A single tagged union covers plain JSON data and opaque host objects that
//! resolve keys on demand.

mod conversions;
mod core;
mod dynamic;

pub use self::core::{Number, Scalar, Value};
pub use self::dynamic::{DynamicAccessor, DynamicHandle};
