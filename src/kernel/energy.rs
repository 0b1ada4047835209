//! Energy (inverse power) radial kernel
//!
//! With b = σ² + r2:
//! - f(r2)   = b^(-1/4)
//! - f'(r2)  = -0.25 · b^(-5/4)
//! - f''(r2) = 0.3125 · b^(-9/4)
//!
//! The exponents are fixed quarter powers, evaluated with two square roots
//! instead of a general `powf`: b^(-1/4) = 1/√√b, b^(-5/4) = b^(-1/4)/b and
//! b^(-9/4) = b^(-1/4)/b².

use crate::core::Derivatives;
use crate::kernel::traits::lit;
use crate::kernel::{KernelFamily, RadialKernel};
use num_traits::Float;

/// Energy kernel family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Energy;

impl Energy {
    #[inline(always)]
    fn base<T: Float>(r2: T, oo_sigma2: T) -> T {
        oo_sigma2.recip() + r2
    }

    /// b^(-1/4)
    #[inline(always)]
    fn inv_quarter_power<T: Float>(b: T) -> T {
        b.sqrt().sqrt().recip()
    }
}

impl RadialKernel for Energy {
    const FAMILY: KernelFamily = KernelFamily::Energy;

    #[inline]
    fn value<T: Float>(r2: T, oo_sigma2: T) -> T {
        Self::inv_quarter_power(Self::base(r2, oo_sigma2))
    }

    #[inline]
    fn derivative1<T: Float>(r2: T, oo_sigma2: T) -> T {
        let b = Self::base(r2, oo_sigma2);
        -lit::<T>(0.25) * Self::inv_quarter_power(b) / b
    }

    #[inline]
    fn derivative2<T: Float>(r2: T, oo_sigma2: T) -> T {
        let b = Self::base(r2, oo_sigma2);
        lit::<T>(0.3125) * Self::inv_quarter_power(b) / (b * b)
    }

    #[inline]
    fn evaluate<T: Float>(r2: T, oo_sigma2: T) -> Derivatives<T> {
        let b = Self::base(r2, oo_sigma2);
        let q = Self::inv_quarter_power(b);
        let q_over_b = q / b;
        Derivatives::new(
            q,
            -lit::<T>(0.25) * q_over_b,
            lit::<T>(0.3125) * q_over_b / b,
        )
    }
}
