//! Grouped admission: at most one retained result per group.

use std::collections::HashMap;

use crate::collector::{Collector, Id};
use crate::heap;

/// Retains the single best candidate of each group, keeping the K best
/// groups overall.
///
/// Candidates are assigned to groups through a caller-provided lookup table
/// indexed by candidate id. During the scan the identifier slots of the
/// retained set hold *group* keys, so an improved candidate for an
/// already-retained group can lower that group's heap entry in place (an
/// O(K) slot scan plus one sift; K is small). [`Collector::finalize`]
/// rewrites each retained group key back to the identifier of the group's
/// best candidate, so the translation is paid once per query rather than on
/// every admission.
///
/// The collector carries per-query state; create a fresh instance for each
/// query's scan.
pub struct GroupedCollector<'a> {
    group_of: &'a [Id],
    best: HashMap<Id, (f32, Id)>,
}

impl<'a> GroupedCollector<'a> {
    /// Creates a collector mapping candidate `id` to group `group_of[id]`.
    ///
    /// The table must cover every identifier the scan produces.
    pub fn new(group_of: &'a [Id]) -> Self {
        Self {
            group_of,
            best: HashMap::new(),
        }
    }
}

impl Collector for GroupedCollector<'_> {
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
        debug_assert!((id as usize) < self.group_of.len());

        let group = self.group_of[id as usize];
        if let Some(&(best_dis, _)) = self.best.get(&group) {
            if dis >= best_dis {
                return;
            }
        }
        self.best.insert(group, (dis, id));

        if let Some(at) = ids[..*nres].iter().position(|&g| g == group) {
            // The group is already retained with a worse distance.
            heap::replace_at(*nres, distances, ids, at, dis, group);
        } else if *nres < k {
            heap::push(*nres, distances, ids, dis, group);
            *nres += 1;
        } else if dis < distances[0] {
            heap::replace_top(*nres, distances, ids, dis, group);
        }
    }

    fn finalize(&mut self, nres: usize, ids: &mut [Id]) {
        for slot in ids[..nres].iter_mut() {
            debug_assert!(self.best.contains_key(slot));
            if let Some(&(_, best_id)) = self.best.get(slot) {
                *slot = best_id;
            }
        }
    }
}
