//! Random head-to-head pair selection

use rand::Rng;

/// Pick two distinct indices in `0..len`.
///
/// The first index is drawn uniformly; the second is drawn uniformly and
/// redrawn until it differs from the first. Returns `None` when fewer than
/// two items are available.
pub fn pick_distinct_pair<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }

    let first = rng.gen_range(0..len);
    let mut second = rng.gen_range(0..len);
    while second == first {
        second = rng.gen_range(0..len);
    }

    Some((first, second))
}
