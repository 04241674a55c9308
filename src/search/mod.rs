//! Exhaustive scan drivers for nearest-neighbor queries.
//!
//! The flat module provides the single-query scan over a packed corpus;
//! batch adds rayon fan-out with one collector per query.

#[cfg(feature = "rayon")]
pub mod batch;
pub mod flat;

/// Distance metric driving a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Squared Euclidean distance; smaller is better.
    L2,
    /// Inner-product similarity; larger is better. Scores are negated
    /// internally so the same smallest-first admission serves both metrics,
    /// and the sign is restored before results are returned.
    InnerProduct,
}
