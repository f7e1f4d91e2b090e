use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};

#[derive(Debug, Parser)]
#[command(name = "dup-bench")]
#[command(about = "Compare duplicate counting methods on a fixture and a random sorted array")]
pub struct Cli {
    /// Length of the random array (N)
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub len: usize,

    /// Values of the random array are drawn from 0..POOL (M)
    #[arg(short = 'm', long, default_value_t = 26, value_parser = clap::value_parser!(u32).range(1..))]
    pub pool: u32,

    /// Don't print the count of each value, useful when POOL is large
    #[arg(long)]
    pub hide_counts: bool,

    /// Seed for the random array, drawn from the OS if missing
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verify the input is sorted and non-empty before counting
    #[arg(long)]
    pub checked: bool,

    /// Sort the random array in descending order
    #[arg(long)]
    pub descending: bool,

    /// Only count the random array
    #[arg(long)]
    pub skip_fixture: bool,

    /// Run the counters of each suite concurrently, needs the `parallel` feature
    #[arg(long)]
    pub parallel: bool,
}

impl Cli {
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}
