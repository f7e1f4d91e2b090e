//! Count duplicates in a sorted slice by recursive bisection.
//!
//! A sorted sub-range whose first and last elements are equal holds a single value, so it can be
//! counted in one step. Otherwise the range is split in half and both halves are counted into the
//! same accumulator.
//!
//! The best case (all elements equal) takes a single step. The worst case (all elements distinct)
//! bisects down to every element, taking 2N - 1 steps. In between, the cost depends on where runs
//! fall relative to the bisection points: a run straddling a midpoint is split even though it is
//! homogeneous, so there is no tight bound in terms of N and M alone.

use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::{Error, Frequency, Result, Touches, order::Order};

/// A counter for sorted slices that bisects until a sub-range has equal endpoints.
///
/// Only equality is compared while counting, so the slice may be sorted in either direction.
/// [`Merge::new`] doesn't check anything: an empty slice yields empty frequencies, and an unsorted
/// slice yields wrong ones. Use [`Merge::checked`] to validate first.
#[derive(Clone, Copy, Debug)]
pub struct Merge<'a, E>(&'a [E]);

impl<'a, E> Merge<'a, E> {
    /// Wrap a slice that the caller guarantees to be sorted
    pub fn new(data: &'a [E]) -> Self {
        Self(data)
    }
}

impl<'a, E: PartialOrd> Merge<'a, E> {
    /// Wrap a slice after verifying it is non-empty and sorted
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for an empty slice, and [`Error::Unsorted`] if the slice is not
    /// monotone.
    pub fn checked(data: &'a [E]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::Empty);
        }
        Order::check(data)?;
        Ok(Self(data))
    }
}

fn merge_into<E, S>(
    data: &[E],
    low: usize,
    high: usize,
    freq: &mut HashMap<E, usize, S>,
    touches: &mut Touches,
) where
    E: Eq + Hash + Clone,
    S: BuildHasher,
{
    touches.touch();
    let (first, last) = (&data[low], &data[high]);
    if first == last {
        *freq.entry(first.clone()).or_insert(0) += high - low + 1;
    } else {
        let mid = low + (high - low) / 2;
        merge_into(data, low, mid, freq, touches);
        merge_into(data, mid + 1, high, freq, touches);
    }
}

impl<E, S> Frequency<HashMap<E, usize, S>> for Merge<'_, E>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn freq_touched(self, touches: &mut Touches) -> HashMap<E, usize, S> {
        let mut freq = HashMap::default();
        if let Some(high) = self.0.len().checked_sub(1) {
            merge_into(self.0, 0, high, &mut freq, touches);
        }
        freq
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_merge_freq() {
        let data = ["a", "b", "b", "b", "b", "b", "d", "h", "h", "h", "p"];
        let freq: HashMap<&str, usize> = Merge::new(&data).freq();

        assert_eq!(
            freq,
            HashMap::from([("a", 1), ("b", 5), ("d", 1), ("h", 3), ("p", 1)])
        );
    }

    #[test]
    fn test_merge_descending() {
        let data = [9, 9, 7, 4, 4, 4, 4, 1];
        let freq: HashMap<i32, usize> = Merge::new(&data).freq();

        assert_eq!(freq, HashMap::from([(9, 2), (7, 1), (4, 4), (1, 1)]));
    }

    #[test]
    fn test_merge_all_equal() {
        for len in [1, 2, 5, 1000] {
            let data = vec![5u32; len];
            let mut touches = Touches::new();
            let freq: HashMap<u32, usize> = Merge::new(&data).freq_touched(&mut touches);

            assert_eq!(freq, HashMap::from([(5, len)]));
            assert_eq!(touches.get(), 1);
        }
    }

    #[test]
    fn test_merge_all_distinct() {
        let mut touches = Touches::new();
        let freq: HashMap<i32, usize> = Merge::new(&[1, 2, 3, 4, 5]).freq_touched(&mut touches);

        assert_eq!(freq.len(), 5);
        assert!(freq.values().all(|&count| count == 1));
        assert_eq!(touches.get(), 9);
    }

    #[test]
    fn test_merge_straddling_run() {
        // same N and M, but in the second slice the run of 2s crosses the first midpoint
        let mut touches = Touches::new();
        let freq: HashMap<i32, usize> = Merge::new(&[2, 2, 2, 2, 3]).freq_touched(&mut touches);
        assert_eq!(freq, HashMap::from([(2, 4), (3, 1)]));
        assert_eq!(touches.get(), 5);

        touches.reset();
        let freq: HashMap<i32, usize> = Merge::new(&[1, 2, 2, 2, 2]).freq_touched(&mut touches);
        assert_eq!(freq, HashMap::from([(1, 1), (2, 4)]));
        assert_eq!(touches.get(), 7);
    }

    #[test]
    fn test_merge_empty() {
        let mut touches = Touches::new();
        let freq: HashMap<u8, usize> = Merge::<u8>::new(&[]).freq_touched(&mut touches);

        assert!(freq.is_empty());
        assert_eq!(touches.get(), 0);
    }

    #[test]
    fn test_merge_checked() {
        assert!(Merge::checked(&[3, 2, 2, 1]).is_ok());
        assert_eq!(Merge::<u8>::checked(&[]).unwrap_err(), Error::Empty);
        assert_eq!(
            Merge::checked(&['a', 'c', 'b']).unwrap_err(),
            Error::Unsorted { index: 2 }
        );
    }
}
