//! Laplace (exponential) radial kernel
//!
//! With s = √(σ² + r2):
//! - f(r2)   = exp(-s)
//! - f'(r2)  = -exp(-s) / (2s)
//! - f''(r2) = ¼ · (1/s³ + 1/s) · exp(-s)
//!
//! The square root dominates the cost, so [`Laplace::evaluate`] computes `s`
//! once for all three quantities.
//!
//! The f'' closed form above is kept as published for this kernel. It is
//! not the exact derivative of f'; that would be
//! ¼ · (1/s³ + 1/s²) · exp(-s). The two agree only at s = 1, and the
//! difference is exposed as [`Laplace::derivative2_gap`].

use crate::core::Derivatives;
use crate::kernel::traits::lit;
use crate::kernel::{KernelFamily, RadialKernel};
use num_traits::Float;

/// Laplace kernel family
///
/// Requires σ² + r2 > 0. If it underflows to zero the derivatives divide by
/// zero and return `Inf`/`NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Laplace;

impl Laplace {
    #[inline(always)]
    fn radius<T: Float>(r2: T, oo_sigma2: T) -> T {
        (oo_sigma2.recip() + r2).sqrt()
    }

    /// `derivative2` minus the exact derivative of `derivative1`
    ///
    /// ¼ · (1/s - 1/s²) · exp(-s), zero at s = 1.
    #[inline]
    pub fn derivative2_gap<T: Float>(r2: T, oo_sigma2: T) -> T {
        let s = Self::radius(r2, oo_sigma2);
        let inv_s = s.recip();
        lit::<T>(0.25) * (inv_s - inv_s * inv_s) * (-s).exp()
    }
}

impl RadialKernel for Laplace {
    const FAMILY: KernelFamily = KernelFamily::Laplace;

    #[inline]
    fn value<T: Float>(r2: T, oo_sigma2: T) -> T {
        (-Self::radius(r2, oo_sigma2)).exp()
    }

    #[inline]
    fn derivative1<T: Float>(r2: T, oo_sigma2: T) -> T {
        let s = Self::radius(r2, oo_sigma2);
        -(-s).exp() / (lit::<T>(2.0) * s)
    }

    #[inline]
    fn derivative2<T: Float>(r2: T, oo_sigma2: T) -> T {
        let s = Self::radius(r2, oo_sigma2);
        lit::<T>(0.25) * ((s * s * s).recip() + s.recip()) * (-s).exp()
    }

    #[inline]
    fn evaluate<T: Float>(r2: T, oo_sigma2: T) -> Derivatives<T> {
        let s = Self::radius(r2, oo_sigma2);
        let e = (-s).exp();
        let inv_s = s.recip();
        Derivatives::new(
            e,
            -lit::<T>(0.5) * e * inv_s,
            lit::<T>(0.25) * (inv_s * inv_s * inv_s + inv_s) * e,
        )
    }
}
