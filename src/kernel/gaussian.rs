//! Gaussian radial kernel
//!
//! f(r2) = exp(-r2 / σ²)
//!
//! Derivatives with respect to the squared radius:
//! - f'(r2)  = -(1/σ²) · exp(-r2 / σ²)
//! - f''(r2) =  (1/σ²)² · exp(-r2 / σ²)

use crate::core::Derivatives;
use crate::kernel::{KernelFamily, RadialKernel};
use num_traits::Float;

/// Gaussian kernel family
///
/// Values lie in (0, 1], with f(0) = 1. The kernel is strictly decreasing and
/// convex in `r2` for any positive bandwidth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gaussian;

impl RadialKernel for Gaussian {
    const FAMILY: KernelFamily = KernelFamily::Gaussian;

    #[inline]
    fn value<T: Float>(r2: T, oo_sigma2: T) -> T {
        (-r2 * oo_sigma2).exp()
    }

    #[inline]
    fn derivative1<T: Float>(r2: T, oo_sigma2: T) -> T {
        -oo_sigma2 * (-r2 * oo_sigma2).exp()
    }

    #[inline]
    fn derivative2<T: Float>(r2: T, oo_sigma2: T) -> T {
        oo_sigma2 * oo_sigma2 * (-r2 * oo_sigma2).exp()
    }

    #[inline]
    fn evaluate<T: Float>(r2: T, oo_sigma2: T) -> Derivatives<T> {
        let e = (-r2 * oo_sigma2).exp();
        Derivatives::new(e, -oo_sigma2 * e, oo_sigma2 * oo_sigma2 * e)
    }
}
