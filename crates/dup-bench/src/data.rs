use rand::Rng;

/// A small sorted input with runs of different lengths
pub const FIXTURE: [&str; 11] = ["a", "b", "b", "b", "b", "b", "d", "h", "h", "h", "p"];

/// Generate `len` values drawn uniformly from `0..pool`, sorted
///
/// # Panics
///
/// Panics if `pool` is zero.
pub fn random_sorted<G: Rng + ?Sized>(
    rng: &mut G,
    len: usize,
    pool: u32,
    descending: bool,
) -> Vec<u32> {
    let mut data: Vec<u32> = (0..len).map(|_| rng.random_range(0..pool)).collect();
    if descending {
        data.sort_unstable_by(|a, b| b.cmp(a));
    } else {
        data.sort_unstable();
    }
    data
}
