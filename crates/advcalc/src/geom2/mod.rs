//! 2D geometry helpers.
//!
//! Purpose
//! - `Point`: plain value pair, convertible to `nalgebra::Vector2<f64>`.
//! - `distance`, `area`: stateless, total, no input validation. Non-finite
//!   inputs propagate through the result.
//!
//! Code cross-refs: `types::Point`, `metric::{distance, area, PI_APPROX}`

mod metric;
mod types;

pub use metric::{area, distance, PI_APPROX};
pub use types::Point;
