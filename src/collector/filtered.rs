//! Predicate-filtered admission.

use crate::collector::{Collector, Id, TopKCollector};

/// Admits only candidates whose identifier passes a caller predicate,
/// delegating accepted candidates to the default top-K policy.
///
/// Covers subset search and deletion masks: the scan loop stays unchanged
/// while rejected identifiers never reach the retained set.
pub struct FilteredCollector<F> {
    accept: F,
    inner: TopKCollector,
}

impl<F: FnMut(Id) -> bool> FilteredCollector<F> {
    /// Creates a collector admitting ids for which `accept` returns true.
    pub fn new(accept: F) -> Self {
        Self {
            accept,
            inner: TopKCollector,
        }
    }
}

impl<F: FnMut(Id) -> bool> Collector for FilteredCollector<F> {
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
        if !(self.accept)(id) {
            return;
        }
        self.inner.collect(k, nres, distances, ids, dis, id);
    }

    fn finalize(&mut self, nres: usize, ids: &mut [Id]) {
        self.inner.finalize(nres, ids);
    }
}

#[cfg(test)]
mod tests {
    use super::FilteredCollector;
    use crate::collector::Collector;

    #[test]
    fn rejected_ids_never_enter_the_retained_set() {
        let mut collector = FilteredCollector::new(|id| id % 2 == 0);
        let mut distances = [0.0f32; 3];
        let mut ids = [0i64; 3];
        let mut nres = 0;

        for (dis, id) in [(1.0f32, 1i64), (2.0, 2), (3.0, 3), (4.0, 4), (5.0, 6)] {
            collector.collect(3, &mut nres, &mut distances, &mut ids, dis, id);
        }
        collector.finalize(nres, &mut ids);

        assert_eq!(nres, 3);
        let mut retained: Vec<_> = ids[..nres].to_vec();
        retained.sort_unstable();
        assert_eq!(retained, [2, 4, 6]);
    }
}
