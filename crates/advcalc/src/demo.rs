//! Fixed sample session shown by the `cli` binary.
//!
//! Output, one entry per line, in order: `BANNER`, `Sum = …`,
//! `Product = …`, `Distance = …`. Values render through `Display`, so
//! `20.0_f64` prints as `20`.

use std::fmt::Display;

use crate::accum::Accumulator;
use crate::geom2::{distance, Point};

pub const BANNER: &str = "=== Advanced Calculator ===";

/// `"{label} = {value}"`.
pub fn format_result(label: &str, value: impl Display) -> String {
    format!("{label} = {value}")
}

/// Results of the sample session.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoRun {
    pub sum: f64,
    pub product: f64,
    pub distance: f64,
    /// Accumulator history after the session (`[sum, product]`).
    pub history: Vec<f64>,
}

impl DemoRun {
    /// Run the hardcoded inputs through a fresh `Accumulator<f64>` and `distance`.
    pub fn run() -> Self {
        let mut processor = Accumulator::<f64>::new();
        let sum = processor.add(10.5, 20.3);
        let product = processor.multiply(5.0, 4.0);
        let dist = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        Self {
            sum,
            product,
            distance: dist,
            history: processor.history(),
        }
    }

    /// Printable lines, banner first.
    pub fn lines(&self) -> Vec<String> {
        vec![
            BANNER.to_string(),
            format_result("Sum", self.sum),
            format_result("Product", self.product),
            format_result("Distance", self.distance),
        ]
    }
}
