//! Arithmetic with a result history, plus small 2D geometry helpers.
//!
//! Layout
//! - `accum`: generic add/multiply processor that records every result.
//! - `geom2`: `Point`, Euclidean `distance`, circle `area`.
//! - `stats`: generic `sum`/`average` over slices.
//! - `demo`: the fixed sample session printed by the `cli` binary.
//!
//! API Policy
//! - Everything here is total: no operation returns an error. Overflow and
//!   NaN/inf follow the native semantics of the numeric type in use.

pub mod accum;
pub mod demo;
pub mod geom2;
pub mod stats;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use accum::{Accumulator, Scalar};
pub use geom2::{area, distance, Point, PI_APPROX};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::accum::{Accumulator, Scalar};
    pub use crate::demo::{format_result, DemoRun, BANNER};
    pub use crate::geom2::{area, distance, Point, PI_APPROX};
    pub use crate::stats::{average, sum};
}
