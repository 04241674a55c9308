//! Distance kernel implementations.

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

// Kernel type aliases - use SIMD when available
#[cfg(not(feature = "simd"))]
use crate::kernel::scalar::{InnerProductScalar as IpKernel, L2SqrScalar as L2Kernel};
#[cfg(feature = "simd")]
use crate::kernel::simd::{InnerProductSimd as IpKernel, L2SqrSimd as L2Kernel};

/// Kernel trait for pairwise evaluation over equal-length f32 vectors.
pub trait DistanceKernel {
    /// Computes the kernel value for `a` and `b`.
    ///
    /// Both slices must have the same length; kernels may assume it.
    fn distance(a: &[f32], b: &[f32]) -> f32;
}

/// Computes the squared Euclidean distance between two vectors.
///
/// Uses the SIMD kernel when the `simd` feature is enabled.
#[inline]
pub fn l2_sqr(a: &[f32], b: &[f32]) -> f32 {
    L2Kernel::distance(a, b)
}

/// Computes the inner product of two vectors.
///
/// Uses the SIMD kernel when the `simd` feature is enabled.
#[inline]
pub fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    IpKernel::distance(a, b)
}
