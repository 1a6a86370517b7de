//! Generic numeric processor with an append-only result history.
//!
//! Model
//! - `Accumulator<T>` owns one `Vec<T>`. `add`/`multiply` push their result,
//!   `clear_history` truncates, everything else is read-only.
//! - Invariant: `len()` equals the number of add/multiply calls since
//!   construction or the last clear.
//!
//! Arithmetic is the native `+`/`*` of `T`; no overflow checks are added on
//! top (debug builds still trap integer overflow, release builds wrap).
//! Mutation takes `&mut self`, so sharing across threads needs an external
//! lock held by the caller.

use std::ops::{Add, Mul};

/// Numeric capability required by `Accumulator`: copyable, addable, multipliable.
///
/// Blanket-implemented; every primitive integer and float qualifies.
pub trait Scalar: Copy + Add<Output = Self> + Mul<Output = Self> {}

impl<T> Scalar for T where T: Copy + Add<Output = T> + Mul<Output = T> {}

/// Add/multiply processor that records every result in call order.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator<T: Scalar> {
    history: Vec<T>,
}

impl<T: Scalar> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Accumulator<T> {
    /// Empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// `a + b`, appended to the history.
    #[inline]
    pub fn add(&mut self, a: T, b: T) -> T {
        self.record(a + b)
    }

    /// `a * b`, appended to the history.
    #[inline]
    pub fn multiply(&mut self, a: T, b: T) -> T {
        self.record(a * b)
    }

    /// Empties the history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Snapshot of the history in insertion order.
    ///
    /// Returns an owned copy; later calls on `self` do not affect it.
    pub fn history(&self) -> Vec<T> {
        self.history.clone()
    }

    /// Most recent result, if any.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.history.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[inline]
    fn record(&mut self, result: T) -> T {
        self.history.push(result);
        result
    }
}
