//! Plain text report of a suite of trials.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    io::{self, Write},
};

use dup_count::prelude::*;

/// Write the trials of one suite run over an input of `len` elements labelled `label`
///
/// Counts are sorted by value, and only written with `show_counts`.
pub fn write_suite<W, E, S>(
    out: &mut W,
    label: &str,
    len: usize,
    trials: &[Trial<HashMap<E, usize, S>>],
    show_counts: bool,
) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Ord + Debug,
{
    writeln!(out, "== {label} ({len} elements)")?;
    for trial in trials {
        writeln!(out, "{}", trial.method)?;
        if show_counts {
            let sorted: BTreeMap<_, _> = trial.counts.iter().collect();
            writeln!(out, "  counts: {sorted:?}")?;
        }
        writeln!(out, "  runtime: {:?}", trial.elapsed)?;
        writeln!(out, "  touches: {}", trial.touches)?;
    }
    Ok(())
}
