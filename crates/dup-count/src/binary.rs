//! Count duplicates in a sorted slice by binary-searching the end of each run.
//!
//! Starting from the first element, the last index of the current value is found with a binary
//! search over the rest of the slice, the run length is recorded, and counting resumes right after
//! the run. Each unique value costs one outer step plus O(log N) search steps, so the total work is
//! roughly O(M + M log N), which beats a linear scan when M is much smaller than N.

use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::{Frequency, Result, Touches, order::Order};

/// A counter for slices sorted in either direction, built on last-index binary search.
///
/// Sortedness is not checked by [`BinarySearch::new`]. Unsorted input gives wrong counts, but the
/// counter always terminates. Use [`BinarySearch::checked`] to validate first.
#[derive(Clone, Copy, Debug)]
pub struct BinarySearch<'a, E>(&'a [E]);

impl<'a, E> BinarySearch<'a, E> {
    /// Wrap a slice that the caller guarantees to be sorted
    pub fn new(data: &'a [E]) -> Self {
        Self(data)
    }
}

impl<'a, E: PartialOrd> BinarySearch<'a, E> {
    /// Wrap a slice after verifying it is sorted
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsorted`](crate::Error::Unsorted) if the slice is not monotone.
    pub fn checked(data: &'a [E]) -> Result<Self> {
        Order::check(data)?;
        Ok(Self(data))
    }
}

/// Find the last index of `target` within the closed range `[low, high]` of `data`.
///
/// `target` must occur in the range, and `data` must be sorted in `order`. One touch is recorded
/// per call. Returns `None` if the range runs empty, which only happens when those conditions are
/// broken.
pub fn last_index<E: PartialOrd>(
    data: &[E],
    target: &E,
    low: usize,
    high: usize,
    order: Order,
    touches: &mut Touches,
) -> Option<usize> {
    touches.touch();
    if low > high {
        return None;
    }

    let mid = low + (high - low) / 2;
    let value = data.get(mid)?;
    if value == target && data.get(mid + 1).is_none_or(|next| next != target) {
        Some(mid)
    } else if order.precedes(target, value) {
        last_index(data, target, low, mid.checked_sub(1)?, order, touches)
    } else {
        last_index(data, target, mid + 1, high, order, touches)
    }
}

impl<E, S> Frequency<HashMap<E, usize, S>> for BinarySearch<'_, E>
where
    E: PartialOrd + Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn freq_touched(self, touches: &mut Touches) -> HashMap<E, usize, S> {
        let data = self.0;
        let mut freq = HashMap::default();
        let Some(high) = data.len().checked_sub(1) else {
            return freq;
        };
        let order = Order::infer(data);

        let mut index = 0;
        while let Some(item) = data.get(index) {
            touches.touch();
            // a failed search means the input broke the precondition, count a run of one and move on
            let last = last_index(data, item, index, high, order, touches).unwrap_or(index);
            *freq.entry(item.clone()).or_insert(0) += last - index + 1;
            index = last + 1;
        }

        freq
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_last_index() {
        let data = [1, 2, 2, 2, 3, 5, 5];
        let mut touches = Touches::new();
        let high = data.len() - 1;

        assert_eq!(
            last_index(&data, &1, 0, high, Order::Ascending, &mut touches),
            Some(0)
        );
        assert_eq!(
            last_index(&data, &2, 1, high, Order::Ascending, &mut touches),
            Some(3)
        );
        assert_eq!(
            last_index(&data, &5, 5, high, Order::Ascending, &mut touches),
            Some(6)
        );
    }

    #[test]
    fn test_last_index_descending() {
        let data = ["p", "h", "h", "h", "d", "b"];
        let mut touches = Touches::new();

        assert_eq!(
            last_index(&data, &"h", 1, 5, Order::Descending, &mut touches),
            Some(3)
        );
    }

    #[test]
    fn test_last_index_missing_target() {
        let data = [1, 2, 4];
        let mut touches = Touches::new();

        assert_eq!(
            last_index(&data, &0, 0, 2, Order::Ascending, &mut touches),
            None
        );
        assert_eq!(
            last_index(&data, &3, 0, 2, Order::Ascending, &mut touches),
            None
        );
    }

    #[test]
    fn test_binary_freq() {
        let data = ['a', 'b', 'b', 'b', 'b', 'b', 'd', 'h', 'h', 'h', 'p'];
        let freq: HashMap<char, usize> = BinarySearch::new(&data).freq();

        assert_eq!(
            freq,
            HashMap::from([('a', 1), ('b', 5), ('d', 1), ('h', 3), ('p', 1)])
        );
    }

    #[test]
    fn test_binary_descending() {
        let data = [9, 9, 7, 4, 4, 4, 4, 1];
        let freq: HashMap<i32, usize> = BinarySearch::new(&data).freq();

        assert_eq!(freq, HashMap::from([(9, 2), (7, 1), (4, 4), (1, 1)]));
    }

    #[test]
    fn test_binary_empty_and_single() {
        let mut touches = Touches::new();
        let freq: HashMap<u8, usize> = BinarySearch::<u8>::new(&[]).freq_touched(&mut touches);
        assert!(freq.is_empty());
        assert_eq!(touches.get(), 0);

        let freq: HashMap<u8, usize> = BinarySearch::<u8>::new(&[3]).freq_touched(&mut touches);
        assert_eq!(freq, HashMap::from([(3, 1)]));
        assert_eq!(touches.get(), 2);
    }

    #[test]
    fn test_binary_touches() {
        // one outer step per value, and the searches take 2, 2, 2, 1, 1 steps
        let mut touches = Touches::new();
        let _: HashMap<i32, usize> = BinarySearch::new(&[1, 2, 3, 4, 5]).freq_touched(&mut touches);
        assert_eq!(touches.get(), 13);

        // one outer step, then the search walks right three times to reach the end
        touches.reset();
        let freq: HashMap<i32, usize> = BinarySearch::new(&[5; 5]).freq_touched(&mut touches);
        assert_eq!(freq, HashMap::from([(5, 5)]));
        assert_eq!(touches.get(), 4);
    }

    #[test]
    fn test_binary_unsorted_terminates() {
        let data = [3, 1, 3, 2, 1, 3];
        let freq: HashMap<i32, usize> = BinarySearch::new(&data).freq();

        // counts are unreliable, but every element is accounted for
        assert_eq!(freq.values().sum::<usize>(), data.len());
    }

    #[test]
    fn test_binary_checked() {
        assert!(BinarySearch::checked(&[1, 2, 2, 3]).is_ok());
        assert!(BinarySearch::<u8>::checked(&[]).is_ok());
        assert_eq!(
            BinarySearch::checked(&[1, 3, 2]).unwrap_err(),
            Error::Unsorted { index: 2 }
        );
    }
}
