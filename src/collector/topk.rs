//! Default bounded top-K admission.

use crate::collector::{Collector, Id};
use crate::heap;

/// Keeps the K smallest distances seen so far in a bounded max-heap.
///
/// Admission is the classic streaming k-selection policy: while the
/// retained set is below capacity every candidate is inserted (fill phase);
/// once full, a candidate evicts the current worst entry only when its
/// distance is strictly smaller, and is otherwise discarded with a single
/// comparison against the root.
///
/// Ties on distance are resolved by heap structure alone: which of several
/// equal-distance candidates survives is unspecified, though stable for
/// this heap layout. Callers needing a deterministic order across equal
/// distances must impose their own secondary key.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopKCollector;

impl Collector for TopKCollector {
    #[inline]
    fn collect(
        &mut self,
        k: usize,
        nres: &mut usize,
        distances: &mut [f32],
        ids: &mut [Id],
        dis: f32,
        id: Id,
    ) {
        debug_assert!(k > 0);
        debug_assert!(*nres <= k);
        debug_assert!(distances.len() >= k);
        debug_assert!(ids.len() >= k);

        if *nres < k {
            heap::push(*nres, distances, ids, dis, id);
            *nres += 1;
        } else if dis < distances[0] {
            heap::replace_top(*nres, distances, ids, dis, id);
        }
    }

    fn finalize(&mut self, _nres: usize, _ids: &mut [Id]) {}
}
