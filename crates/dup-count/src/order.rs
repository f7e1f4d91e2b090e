//! Sort direction of a slice.

use crate::{Error, Result};

/// Direction in which a sorted slice is ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// Infer the direction from the endpoints of a slice, assuming it is sorted.
    ///
    /// A slice whose first element is less than its last is ascending, anything else (including
    /// empty, single element and all-equal slices) is treated as descending. For the last three
    /// cases the direction doesn't matter, as no element can precede another.
    pub fn infer<E: PartialOrd>(data: &[E]) -> Self {
        match (data.first(), data.last()) {
            (Some(first), Some(last)) if first < last => Self::Ascending,
            _ => Self::Descending,
        }
    }

    /// Infer the direction of a slice and verify every element follows it.
    ///
    /// This is O(N), so it is only used by the `checked` constructors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsorted`] with the index of the first element out of order.
    pub fn check<E: PartialOrd>(data: &[E]) -> Result<Self> {
        let order = Self::infer(data);
        match data
            .windows(2)
            .position(|pair| order.precedes(&pair[1], &pair[0]))
        {
            Some(i) => Err(Error::Unsorted { index: i + 1 }),
            None => Ok(order),
        }
    }

    /// Whether `a` must come strictly before `b` in a slice sorted in this direction
    #[inline]
    pub fn precedes<E: PartialOrd>(self, a: &E, b: &E) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }
}
