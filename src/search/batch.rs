//! Rayon-parallel batch search (feature-gated).
//!
//! Fans out one task per query. Each task builds its own collector through
//! the caller's factory and writes into its own disjoint output rows, so
//! the scan itself needs no synchronization.

use rayon::prelude::*;

use crate::collector::{Collector, Id};
use crate::search::flat::Knn;
use crate::util::{KnnScanError, KnnScanResult};

/// Results of a batch scan, row-major with `k` slots per query.
///
/// Rows with fewer than `k` retained results keep the pre-fill sentinels
/// (`f32::INFINITY` / id `-1`) in their unused tail; `counts[q]` gives the
/// meaningful prefix length of row `q`.
#[derive(Clone, Debug)]
pub struct BatchResults {
    /// Retained result count per query.
    pub counts: Vec<usize>,
    /// Distances, `k` slots per query, best first.
    pub distances: Vec<f32>,
    /// Identifiers, `k` slots per query, best first.
    pub ids: Vec<Id>,
}

/// Runs one scan per query in `queries` (packed row-major, `dim` floats
/// each), building a fresh collector per query via `new_collector`.
///
/// The factory mirrors the one-collector-per-query ownership rule: a
/// collector never crosses threads, it is created inside the task that
/// drives it.
pub fn search_batch<C, F>(
    knn: &Knn,
    queries: &[f32],
    base: &[f32],
    new_collector: F,
) -> KnnScanResult<BatchResults>
where
    C: Collector,
    F: Fn() -> C + Sync,
{
    let dim = knn.dim();
    let k = knn.k();
    if queries.len() % dim != 0 {
        return Err(KnnScanError::RaggedBuffer {
            len: queries.len(),
            dim,
        });
    }

    let nq = queries.len() / dim;
    let mut distances = vec![f32::INFINITY; nq * k];
    let mut ids = vec![-1 as Id; nq * k];

    let counts = queries
        .par_chunks(dim)
        .zip(distances.par_chunks_mut(k).zip(ids.par_chunks_mut(k)))
        .map(|(query, (dist_row, id_row))| {
            let mut collector = new_collector();
            knn.search_with(query, base, dist_row, id_row, &mut collector)
        })
        .collect::<KnnScanResult<Vec<usize>>>()?;

    Ok(BatchResults {
        counts,
        distances,
        ids,
    })
}
