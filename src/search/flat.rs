//! Flat (exhaustive) single-query scan.

use crate::collector::{Collector, Id, TopKCollector};
use crate::heap;
use crate::kernel::{inner_product, l2_sqr};
use crate::search::Metric;
use crate::trace::{trace_event, trace_span};
use crate::util::{KnnScanError, KnnScanResult};

/// Flat k-nearest-neighbor scan over a packed f32 corpus.
///
/// The corpus is a contiguous buffer of `n * dim` floats (row-major, one
/// vector per row). The driver owns no data: the corpus, the query, and the
/// result buffers are all borrowed per call, and a scan allocates nothing.
#[derive(Clone, Copy, Debug)]
pub struct Knn {
    dim: usize,
    k: usize,
    metric: Metric,
}

impl Knn {
    /// Creates a scan configuration for `dim`-dimensional vectors returning
    /// up to `k` results per query.
    pub fn new(dim: usize, k: usize, metric: Metric) -> KnnScanResult<Self> {
        if dim == 0 {
            return Err(KnnScanError::InvalidDimension { dim });
        }
        if k == 0 {
            return Err(KnnScanError::InvalidK { k });
        }
        Ok(Self { dim, k, metric })
    }

    /// Vector dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Maximum number of results per query.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Metric driving the scan.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Scans `base` for the k nearest neighbors of `query` with the default
    /// collection policy.
    ///
    /// See [`Knn::search_with`] for buffer requirements and result layout.
    pub fn search(
        &self,
        query: &[f32],
        base: &[f32],
        distances: &mut [f32],
        ids: &mut [Id],
    ) -> KnnScanResult<usize> {
        self.search_with(query, base, distances, ids, &mut TopKCollector)
    }

    /// Scans `base` driving an arbitrary collection strategy.
    ///
    /// `distances` and `ids` are caller-owned buffers of length at least
    /// `k`; on success their first `nres` entries (the returned count) hold
    /// the retained results in ascending distance order. For
    /// [`Metric::InnerProduct`] that is descending similarity, with the
    /// reported scores restored to true inner products. Entries beyond
    /// `nres` are unspecified.
    ///
    /// The candidate identifier passed to the collector is the vector's row
    /// index in `base`. `collector` is consumed logically: it is driven
    /// through its per-candidate admission calls and then finalized exactly
    /// once, so a stateful collector must be fresh for each query.
    pub fn search_with<C: Collector + ?Sized>(
        &self,
        query: &[f32],
        base: &[f32],
        distances: &mut [f32],
        ids: &mut [Id],
        collector: &mut C,
    ) -> KnnScanResult<usize> {
        if query.len() != self.dim {
            return Err(KnnScanError::DimensionMismatch {
                expected: self.dim,
                got: query.len(),
            });
        }
        if base.len() % self.dim != 0 {
            return Err(KnnScanError::RaggedBuffer {
                len: base.len(),
                dim: self.dim,
            });
        }
        if distances.len() < self.k {
            return Err(KnnScanError::BufferTooSmall {
                needed: self.k,
                got: distances.len(),
            });
        }
        if ids.len() < self.k {
            return Err(KnnScanError::BufferTooSmall {
                needed: self.k,
                got: ids.len(),
            });
        }

        let n = base.len() / self.dim;
        let _span = trace_span!("flat_scan", n = n, k = self.k).entered();

        let mut nres = 0usize;
        for (i, vec) in base.chunks_exact(self.dim).enumerate() {
            let dis = match self.metric {
                Metric::L2 => l2_sqr(query, vec),
                Metric::InnerProduct => -inner_product(query, vec),
            };
            collector.collect(self.k, &mut nres, distances, ids, dis, i as Id);
        }
        collector.finalize(nres, ids);

        heap::reorder(nres, distances, ids);
        if self.metric == Metric::InnerProduct {
            for d in distances[..nres].iter_mut() {
                *d = -*d;
            }
        }

        trace_event!("flat_scan_done", retained = nres);
        Ok(nres)
    }
}
