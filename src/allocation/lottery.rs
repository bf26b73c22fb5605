//! Admission order for oversubscribed offerings.

use rand::seq::SliceRandom;
use rand::Rng;

/// Orders `bidders` for admission.
///
/// Bidders holding fewer seats come first (`confirmed_counts[bidder]`,
/// ascending). Each group of equal count is then shuffled with `rng`, so
/// the only randomness is within a bucket and the generator is consumed
/// bucket by bucket in ascending count order.
///
/// `bidders` are indices into `confirmed_counts`. An index past the end
/// counts as zero seats held.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_allot::allocation::rank_bidders;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let order = rank_bidders(&[0, 1, 2], &[2, 0, 1], &mut rng);
/// assert_eq!(order, vec![1, 2, 0]);
/// ```
pub fn rank_bidders<R: Rng + ?Sized>(
    bidders: &[usize],
    confirmed_counts: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let held = |bidder: usize| confirmed_counts.get(bidder).copied().unwrap_or(0);

    let mut order = bidders.to_vec();
    order.sort_by_key(|&b| held(b));

    let mut start = 0;
    while start < order.len() {
        let count = held(order[start]);
        let end = order[start..]
            .iter()
            .position(|&b| held(b) != count)
            .map_or(order.len(), |offset| start + offset);
        order[start..end].shuffle(rng);
        start = end;
    }

    order
}
