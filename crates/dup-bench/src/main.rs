//! dup-bench - compare duplicate counting methods
//!
//! Usage:
//!   dup-bench [-n <len>] [-m <pool>] [--hide-counts] [--seed <seed>] [--checked]
//!
//! Each counter is run on a small fixture and then on a random sorted array, reporting the time
//! taken and the number of touches (units of work) of every run.

mod cli;
mod data;
mod report;

use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
    io::{self, Write},
};

use anyhow::{Context, bail};
use clap::Parser;
use dup_count::{prelude::*, trial::disagreeing};
use log::{error, info};

use crate::{
    cli::Cli,
    data::{FIXTURE, random_sorted},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("Configuration: {cli:?}");

    let mut out = io::stdout().lock();
    let mut agree = true;

    if !cli.skip_fixture {
        agree &= bench(&cli, "fixture", &FIXTURE, &mut out)?;
    }

    let data = random_sorted(&mut cli.rng(), cli.len, cli.pool, cli.descending);
    agree &= bench(&cli, "random", &data, &mut out)?;

    if !agree {
        bail!("counters disagree, see the log above");
    }
    Ok(())
}

/// Run every counter on `data`, report the trials and check that their counts agree
fn bench<E, W>(cli: &Cli, label: &str, data: &[E], out: &mut W) -> anyhow::Result<bool>
where
    E: Ord + Hash + Clone + Debug + Send + Sync,
    W: Write,
{
    let trials = run_suite(cli, data).with_context(|| format!("Can't count the {label} input"))?;
    report::write_suite(out, label, data.len(), &trials, !cli.hide_counts)
        .context("Failed to write report")?;

    let mismatched = disagreeing(&trials);
    for method in &mismatched {
        error!("{method} disagrees with linear on the {label} input");
    }
    Ok(mismatched.is_empty())
}

fn run_suite<E>(cli: &Cli, data: &[E]) -> Result<Vec<Trial<HashMap<E, usize>>>>
where
    E: Ord + Hash + Clone + Send + Sync,
{
    let mut suite = Suite::new(cli.checked);

    if cli.parallel {
        #[cfg(feature = "parallel")]
        return suite.run_parallel(data);
        #[cfg(not(feature = "parallel"))]
        log::warn!("Built without the `parallel` feature, running sequentially");
    }

    suite.run(data)
}
