//! KnnScan is a CPU-first exhaustive nearest-neighbor scan library built
//! around a pluggable result-collection strategy.
//!
//! The scan loop feeds every (distance, id) candidate to a [`Collector`],
//! which maintains the best-K retained set as a bounded max-heap inside
//! caller-owned buffers. Alternative collection semantics (grouped,
//! filtered) plug in without touching the scan, with optional parallelism
//! via the `rayon` feature and SIMD distance kernels via `simd`.

pub mod collector;
pub mod heap;
pub mod kernel;
pub mod search;
mod trace;
pub mod util;

pub use collector::{Collector, FilteredCollector, GroupedCollector, Id, TopKCollector};
pub use kernel::{inner_product, l2_sqr, DistanceKernel};
pub use search::flat::Knn;
pub use search::Metric;
pub use util::{KnnScanError, KnnScanResult};

#[cfg(feature = "rayon")]
pub use search::batch::{search_batch, BatchResults};
