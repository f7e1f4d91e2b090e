//! Instrumented work counter.

use std::fmt;

/// Number of units of work performed by a counter.
///
/// Each counter defines its own unit: one element for [`Linear`](crate::linear::Linear), one
/// recursive search step or outer step for [`BinarySearch`](crate::binary::BinarySearch), one
/// invocation for [`Merge`](crate::merge::Merge).
///
/// A `Touches` is owned by whoever runs the counter and passed in by `&mut`, so separate runs
/// never share state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Touches(u64);

impl Touches {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Record one unit of work
    #[inline]
    pub fn touch(&mut self) {
        self.0 += 1;
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Display for Touches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
