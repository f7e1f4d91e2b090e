#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Count duplicate elements in a slice, and measure how much work it takes.
//!
//! Three counters are provided:
//!
//! - [`Linear`]: visits every element once, works on any input.
//! - [`BinarySearch`]: for sorted input, binary-searches the end of each run of equal values.
//! - [`Merge`]: for sorted input, bisects the slice until a sub-range has equal endpoints.
//!
//! Every counter reports its work as [`Touches`], a proxy for the number of operations that is
//! independent of wall-clock noise.

pub mod prelude {
    //! Import of useful traits and types from the crate

    pub use crate::{
        Frequency,
        binary::BinarySearch,
        error::{Error, Result},
        linear::Linear,
        merge::Merge,
        order::Order,
        touch::Touches,
        trial::{Method, Suite, Trial, run_trial},
    };
}

pub mod binary;
pub mod error;
pub mod linear;
pub mod merge;
pub mod order;
pub mod touch;
pub mod trial;

pub use error::{Error, Result};
pub use touch::Touches;

/// A trait for counting the occurrences of each unique element
///
/// Implemented by the counter wrappers ([`Linear`](linear::Linear),
/// [`BinarySearch`](binary::BinarySearch) and [`Merge`](merge::Merge)), each of which borrows the
/// slice to be counted.
pub trait Frequency<R> {
    /// Count the occurrences of each unique element, recording the work done in `touches`
    ///
    /// Touches are added to whatever `touches` already holds, so reset it first if the count of a
    /// single run is wanted.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use dup_count::prelude::*;
    ///
    /// let data = [1, 1, 2, 3, 3, 3];
    /// let mut touches = Touches::new();
    /// let counts: HashMap<i32, usize> = Linear::new(&data).freq_touched(&mut touches);
    /// assert_eq!(counts[&3], 3);
    /// assert_eq!(touches.get(), 6);
    /// ```
    fn freq_touched(self, touches: &mut Touches) -> R;

    /// Count the occurrences of each unique element, discarding the touches
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use dup_count::prelude::*;
    ///
    /// let data = ["a", "b", "b", "d"];
    /// let counts: HashMap<&str, usize> = Merge::new(&data).freq();
    /// assert_eq!(counts["b"], 2);
    /// ```
    fn freq(self) -> R
    where
        Self: Sized,
    {
        self.freq_touched(&mut Touches::new())
    }
}
