//! Radial kernel trait definition

use crate::core::Derivatives;
use crate::kernel::KernelFamily;
use num_traits::Float;

/// Scalar kernel function pointer: `(r2, oo_sigma2) -> T`
pub type KernelFn<T> = fn(T, T) -> T;

/// Radial kernel family
///
/// A radial kernel maps a squared distance `r2` and an inverse squared
/// bandwidth `oo_sigma2 = 1/σ²` to a weight. Every family provides the value
/// and its first two derivatives with respect to `r2` as closed forms.
///
/// All functions are associated functions generic over the scalar type, so a
/// caller generic over `K: RadialKernel` is monomorphised per family and per
/// precision with no runtime dispatch.
///
/// Callers must pass the *squared* radius. For `r2 < 0` or `oo_sigma2 <= 0`
/// results are numerically evaluable but meaningless (`NaN` or `Inf`).
pub trait RadialKernel {
    /// Runtime tag of this family
    const FAMILY: KernelFamily;

    /// Kernel value f(r2)
    fn value<T: Float>(r2: T, oo_sigma2: T) -> T;

    /// First derivative f'(r2)
    fn derivative1<T: Float>(r2: T, oo_sigma2: T) -> T;

    /// Second derivative f''(r2)
    fn derivative2<T: Float>(r2: T, oo_sigma2: T) -> T;

    /// Value and both derivatives in one call
    ///
    /// Families with an expensive shared subexpression override this so that
    /// it is computed once.
    fn evaluate<T: Float>(r2: T, oo_sigma2: T) -> Derivatives<T> {
        Derivatives::new(
            Self::value(r2, oo_sigma2),
            Self::derivative1(r2, oo_sigma2),
            Self::derivative2(r2, oo_sigma2),
        )
    }
}

/// Convert an `f64` literal into the kernel scalar type.
///
/// Only used with small finite constants, which every `Float` represents.
#[inline(always)]
pub(crate) fn lit<T: Float>(x: f64) -> T {
    T::from(x).expect("literal representable")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_converts_constants() {
        assert_eq!(lit::<f64>(0.25), 0.25);
        assert_eq!(lit::<f32>(-2.0), -2.0_f32);
    }
}
