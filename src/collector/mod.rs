//! Result collection strategies for nearest-neighbor scans.
//!
//! A scan produces one (distance, identifier) candidate per comparison; a
//! [`Collector`] decides which candidates enter the retained set held in
//! caller-owned buffers. The default policy keeps the K smallest distances;
//! grouped and filtered variants change admission semantics without
//! touching the scan loop that drives them.

pub(crate) mod filtered;
pub(crate) mod grouped;
pub(crate) mod topk;

pub use filtered::FilteredCollector;
pub use grouped::GroupedCollector;
pub use topk::TopKCollector;

/// Identifier attached to each scanned candidate.
///
/// Scan drivers produce non-negative ids (the candidate's position in the
/// corpus); negative values are free for caller sentinels such as the `-1`
/// pre-fill used for empty batch slots.
pub type Id = i64;

/// Admission strategy invoked once per scanned candidate.
///
/// The retained set lives in two caller-owned parallel slices of length at
/// least `k`: `distances` and `ids`, whose first `*nres` entries form a
/// binary max-heap keyed by distance (worst retained value at index 0).
/// Implementations mutate nothing beyond those buffers, `nres`, and their
/// own per-query state.
///
/// Contract violations (`k == 0`, `*nres > k` on entry, buffers shorter
/// than `k`) are caller bugs; implementations assert them in debug builds
/// and never attempt to recover.
pub trait Collector {
    /// Evaluates one candidate against the retained set.
    ///
    /// On return `*nres` reflects the variant's admission decision and the
    /// first `*nres` entries of both slices remain a valid max-heap under
    /// that variant's policy, with `*nres <= k`.
    fn collect(
        &mut self,
        k: usize,
        nres: &mut usize,
        distances: &mut [f32],
        ids: &mut [Id],
        dis: f32,
        id: Id,
    );

    /// Post-processes the retained identifiers after the scan completes.
    ///
    /// Called exactly once per query, after the last [`Collector::collect`].
    /// May rewrite `ids[..nres]` in place (for example mapping a grouping
    /// key back to a corpus identifier) but must not change the retained
    /// count and must terminate after touching exactly `nres` entries.
    fn finalize(&mut self, nres: usize, ids: &mut [Id]);
}
