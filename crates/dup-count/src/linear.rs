//! Count duplicates by visiting every element once.

use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::{Frequency, Touches};

/// A counter that tallies every element of a slice into a hash map.
///
/// ## When to use
///
/// - Your input is not sorted, or you don't know whether it is.
/// - Or, most values are distinct, so no run of equal values is long enough to skip over.
///
/// Exactly one touch is recorded per element, the result is O(N) in time and O(M) in space, where
/// M is the number of distinct values.
///
/// ## Tips
///
/// The returned frequencies is a general HashMap, so you can choose a high performance hasher to
/// improve performance by annotating the return hashmap type.
#[derive(Clone, Copy, Debug)]
pub struct Linear<'a, E>(&'a [E]);

impl<'a, E> Linear<'a, E> {
    pub fn new(data: &'a [E]) -> Self {
        Self(data)
    }
}

impl<E, S> Frequency<HashMap<E, usize, S>> for Linear<'_, E>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn freq_touched(self, touches: &mut Touches) -> HashMap<E, usize, S> {
        self.0.iter().fold(Default::default(), |mut freq, item| {
            touches.touch();
            *freq.entry(item.clone()).or_insert(0) += 1;
            freq
        })
    }
}
