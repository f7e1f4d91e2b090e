//! Timed and instrumented runs of the counters.
//!
//! A [`Trial`] is the result of running one counter once: the frequencies, the touches and the
//! elapsed wall-clock time. A [`Suite`] runs every counter on the same input, resetting its touch
//! counter before each one.

use core::hash::{BuildHasher, Hash};
use std::{
    collections::HashMap,
    fmt,
    time::{Duration, Instant},
};

use log::{debug, warn};

use crate::{Frequency, Result, Touches, binary::BinarySearch, linear::Linear, merge::Merge};

/// The counting algorithms available to a [`Suite`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Linear,
    BinarySearch,
    Merge,
}

impl Method {
    /// All methods, in the order a suite runs them
    pub const ALL: [Self; 3] = [Self::Linear, Self::BinarySearch, Self::Merge];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::BinarySearch => "binary",
            Self::Merge => "merge",
        }
    }

    /// Whether the method relies on the input being sorted
    pub const fn needs_sorted(self) -> bool {
        !matches!(self, Self::Linear)
    }

    /// Build the counter for this method and run it as a trial
    ///
    /// With `checked`, the preconditions are verified before the clock starts.
    ///
    /// # Errors
    ///
    /// Only when `checked` is set, see [`BinarySearch::checked`] and [`Merge::checked`].
    pub fn run<E, S>(
        self,
        data: &[E],
        checked: bool,
        touches: &mut Touches,
    ) -> Result<Trial<HashMap<E, usize, S>>>
    where
        E: PartialOrd + Eq + Hash + Clone,
        S: BuildHasher + Default,
    {
        let trial: Trial<HashMap<E, usize, S>> = match self {
            Self::Linear => {
                let counter = Linear::new(data);
                run_trial(self, touches, |t| counter.freq_touched(t))
            }
            Self::BinarySearch => {
                let counter = if checked {
                    BinarySearch::checked(data)?
                } else {
                    BinarySearch::new(data)
                };
                run_trial(self, touches, |t| counter.freq_touched(t))
            }
            Self::Merge => {
                let counter = if checked {
                    Merge::checked(data)?
                } else {
                    Merge::new(data)
                };
                run_trial(self, touches, |t| counter.freq_touched(t))
            }
        };
        debug!(
            "{}: {} touches in {:?} over {} elements",
            self,
            trial.touches,
            trial.elapsed,
            data.len()
        );
        Ok(trial)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of running one counter once
#[derive(Clone, Debug)]
pub struct Trial<R> {
    pub method: Method,
    pub counts: R,
    pub touches: Touches,
    pub elapsed: Duration,
}

/// Run `count`, timing it and reading the touches it added.
///
/// The clock is read immediately before and after `count`. The trial records the value of
/// `touches` once `count` returns, so reset it beforehand to attribute touches to this run only.
pub fn run_trial<R>(
    method: Method,
    touches: &mut Touches,
    count: impl FnOnce(&mut Touches) -> R,
) -> Trial<R> {
    let start = Instant::now();
    let counts = count(touches);
    let elapsed = start.elapsed();
    Trial {
        method,
        counts,
        touches: *touches,
        elapsed,
    }
}

/// Methods whose counts differ from those of the first trial
pub fn disagreeing<R: PartialEq>(trials: &[Trial<R>]) -> Vec<Method> {
    let Some((reference, rest)) = trials.split_first() else {
        return Vec::new();
    };
    rest.iter()
        .filter(|trial| trial.counts != reference.counts)
        .map(|trial| trial.method)
        .collect()
}

/// Runs every [`Method`] in turn on the same input.
#[derive(Clone, Debug, Default)]
pub struct Suite {
    checked: bool,
    touches: Touches,
}

impl Suite {
    /// Create a suite, `checked` selects the hardened constructors
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            touches: Touches::new(),
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Zero the touch counter
    pub fn reset(&mut self) {
        self.touches.reset();
    }

    /// Methods to run on `data`.
    ///
    /// Without checks, [`Method::Merge`] has nothing to bisect on empty input and is skipped. With
    /// checks, it is kept so that it can report the empty input as an error.
    fn methods_for<E>(&self, data: &[E]) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|&method| {
                let skip = !self.checked && method == Method::Merge && data.is_empty();
                if skip {
                    warn!("{method}: skipped, input is empty");
                }
                !skip
            })
            .collect()
    }

    /// Run each method in order on `data`, resetting the touches before each one
    ///
    /// # Errors
    ///
    /// The first precondition failure, if the suite is checked.
    pub fn run<E, S>(&mut self, data: &[E]) -> Result<Vec<Trial<HashMap<E, usize, S>>>>
    where
        E: PartialOrd + Eq + Hash + Clone,
        S: BuildHasher + Default,
    {
        self.methods_for(data)
            .into_iter()
            .map(|method| {
                self.reset();
                method.run(data, self.checked, &mut self.touches)
            })
            .collect()
    }

    /// Run all methods concurrently on `data`, each with its own touch counter
    ///
    /// Trials are returned in the same order as [`Suite::run`]. Elapsed times are noisier than a
    /// sequential run since the methods compete for cores.
    ///
    /// # Errors
    ///
    /// A precondition failure, if the suite is checked.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<E, S>(&self, data: &[E]) -> Result<Vec<Trial<HashMap<E, usize, S>>>>
    where
        E: PartialOrd + Eq + Hash + Clone + Send + Sync,
        S: BuildHasher + Default + Send,
    {
        use rayon::prelude::*;

        self.methods_for(data)
            .into_par_iter()
            .map(|method| method.run(data, self.checked, &mut Touches::new()))
            .collect()
    }
}
