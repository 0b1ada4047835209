//! Pairwise kernels over coordinate vectors
//!
//! These evaluate a Gaussian weight directly from two points instead of a
//! precomputed squared distance. The dimension is the slice length; both
//! slices must have the same length.
//!
//! The plain functions perform no validation beyond a debug assertion, the
//! same contract as the scalar kernels. The `try_` variants check dimensions,
//! the coordinate index and (for the varifold kernel) zero-norm inputs.

use crate::core::{KernelError, Result};
use crate::kernel::traits::lit;
use crate::kernel::{Gaussian, RadialKernel};
use num_traits::Float;

/// Squared Euclidean distance Σₖ (vₖ - uₖ)²
#[inline]
pub fn squared_distance<T: Float>(u: &[T], v: &[T]) -> T {
    debug_assert_eq!(u.len(), v.len(), "Points must have same dimension");
    u.iter().zip(v.iter()).fold(T::zero(), |acc, (&uk, &vk)| {
        let diff = vk - uk;
        acc + diff * diff
    })
}

/// Gaussian kernel exp(-‖v - u‖² / σ²)
#[inline]
pub fn gauss_kernel<T: Float>(u: &[T], v: &[T], oo_sigma2: T) -> T {
    Gaussian::value(squared_distance(u, v), oo_sigma2)
}

/// Partial derivative of [`gauss_kernel`] with respect to `v[l]`
///
/// -2 · (1/σ²) · (v[l] - u[l]) · exp(-‖v - u‖² / σ²)
///
/// # Panics
/// Panics if `l` is not a valid index into `u` and `v`.
#[inline]
pub fn gauss_kernel_d1<T: Float>(u: &[T], v: &[T], oo_sigma2: T, l: usize) -> T {
    let r2 = squared_distance(u, v);
    lit::<T>(-2.0) * oo_sigma2 * (v[l] - u[l]) * (-r2 * oo_sigma2).exp()
}

/// ‖u‖², ‖v‖² and ⟨u,v⟩ in one pass
#[inline]
fn norms_and_dot<T: Float>(u: &[T], v: &[T]) -> (T, T, T) {
    u.iter().zip(v.iter()).fold(
        (T::zero(), T::zero(), T::zero()),
        |(nu, nv, d), (&uk, &vk)| (nu + uk * uk, nv + vk * vk, d + uk * vk),
    )
}

#[inline]
fn varifold_from_terms<T: Float>(p: T, dot: T, oo_sigma2: T) -> T {
    p.sqrt() * (lit::<T>(2.0) * (dot * dot / p) * oo_sigma2).exp()
}

/// Varifold Gaussian kernel
///
/// With p = ‖u‖²·‖v‖², returns √p · exp(2 · (⟨u,v⟩² / p) / σ²). The angular
/// term ⟨u,v⟩²/p is the squared cosine, so the kernel ignores orientation
/// sign. Zero vectors, or norms that underflow the scalar type, give p = 0
/// and a `NaN` result.
#[inline]
pub fn varifold_gauss_kernel<T: Float>(u: &[T], v: &[T], oo_sigma2: T) -> T {
    debug_assert_eq!(u.len(), v.len(), "Points must have same dimension");
    let (norm_u2, norm_v2, dot) = norms_and_dot(u, v);
    varifold_from_terms(norm_u2 * norm_v2, dot, oo_sigma2)
}

fn check_dims<T>(u: &[T], v: &[T]) -> Result<()> {
    if u.len() != v.len() {
        return Err(KernelError::DimensionMismatch {
            expected: u.len(),
            actual: v.len(),
        });
    }
    Ok(())
}

/// Checked [`gauss_kernel`]
pub fn try_gauss_kernel<T: Float>(u: &[T], v: &[T], oo_sigma2: T) -> Result<T> {
    check_dims(u, v)?;
    Ok(gauss_kernel(u, v, oo_sigma2))
}

/// Checked [`gauss_kernel_d1`]
pub fn try_gauss_kernel_d1<T: Float>(u: &[T], v: &[T], oo_sigma2: T, l: usize) -> Result<T> {
    check_dims(u, v)?;
    if l >= u.len() {
        return Err(KernelError::IndexOutOfRange {
            index: l,
            dim: u.len(),
        });
    }
    Ok(gauss_kernel_d1(u, v, oo_sigma2, l))
}

/// Checked [`varifold_gauss_kernel`]
///
/// Returns [`KernelError::ZeroNorm`] unless p = ‖u‖²·‖v‖² is strictly
/// positive in `T`. This also rejects non-zero inputs whose norms underflow.
pub fn try_varifold_gauss_kernel<T: Float>(u: &[T], v: &[T], oo_sigma2: T) -> Result<T> {
    check_dims(u, v)?;
    let (norm_u2, norm_v2, dot) = norms_and_dot(u, v);
    let p = norm_u2 * norm_v2;
    if p.is_nan() || p <= T::zero() {
        return Err(KernelError::ZeroNorm);
    }
    Ok(varifold_from_terms(p, dot, oo_sigma2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0]), 50.0);
        assert_eq!(squared_distance::<f64>(&[], &[]), 0.0);
    }

    #[test]
    fn test_gauss_kernel_matches_scalar_kernel() {
        let u = [0.0_f64, 0.0, 0.0];
        let v = [1.0_f64, 0.0, 0.0];
        assert_relative_eq!(gauss_kernel(&u, &v, 1.0), (-1.0_f64).exp());
        assert_eq!(
            gauss_kernel(&u, &v, 1.0),
            Gaussian::value(squared_distance(&u, &v), 1.0)
        );
    }

    #[test]
    fn test_gauss_kernel_identical_points() {
        let u = [0.3_f32, -1.2];
        assert_eq!(gauss_kernel(&u, &u, 5.0), 1.0);
    }

    #[test]
    fn test_gauss_kernel_d1_example() {
        let u = [0.0_f64, 0.0];
        let v = [1.0_f64, 0.0];
        let d = gauss_kernel_d1(&u, &v, 1.0, 0);
        assert_relative_eq!(d, -2.0 * (-1.0_f64).exp());
        assert_relative_eq!(d, -0.7357588823428847, epsilon = 1e-12);
        // v[1] - u[1] = 0
        assert_eq!(gauss_kernel_d1(&u, &v, 1.0, 1), 0.0);
    }

    #[test]
    fn test_gauss_kernel_d1_antisymmetric() {
        let u = [0.5_f64, -1.0, 2.0];
        let v = [1.5_f64, 0.25, -0.5];
        for l in 0..3 {
            assert_relative_eq!(
                gauss_kernel_d1(&u, &v, 0.8, l),
                -gauss_kernel_d1(&v, &u, 0.8, l)
            );
        }
    }

    #[test]
    #[should_panic]
    fn test_gauss_kernel_d1_out_of_range_panics() {
        gauss_kernel_d1(&[0.0_f64, 1.0], &[1.0, 0.0], 1.0, 2);
    }

    #[test]
    fn test_varifold_identical_unit_vectors() {
        let u = [1.0_f64, 0.0];
        for &oo_sigma2 in &[0.1, 1.0, 10.0] {
            assert_relative_eq!(
                varifold_gauss_kernel(&u, &u, oo_sigma2),
                (2.0 * oo_sigma2).exp()
            );
        }
    }

    #[test]
    fn test_varifold_symmetry() {
        let u = [0.3_f64, -2.0, 1.1];
        let v = [-0.7_f64, 0.4, 2.5];
        assert_eq!(
            varifold_gauss_kernel(&u, &v, 0.5),
            varifold_gauss_kernel(&v, &u, 0.5)
        );
    }

    #[test]
    fn test_varifold_ignores_orientation_sign() {
        let u = [1.0_f64, 2.0];
        let v = [3.0_f64, -1.0];
        let neg_v = [-3.0_f64, 1.0];
        assert_relative_eq!(
            varifold_gauss_kernel(&u, &v, 1.0),
            varifold_gauss_kernel(&u, &neg_v, 1.0)
        );
    }

    #[test]
    fn test_varifold_orthogonal_vectors() {
        // cos² = 0 -> only the magnitude term remains
        let u = [2.0_f64, 0.0];
        let v = [0.0_f64, 3.0];
        assert_relative_eq!(varifold_gauss_kernel(&u, &v, 4.0), 6.0);
    }

    #[test]
    fn test_varifold_zero_vector_is_nan() {
        assert!(varifold_gauss_kernel(&[0.0_f64, 0.0], &[1.0, 0.0], 1.0).is_nan());
    }

    #[test]
    fn test_checked_variants() {
        let u = [0.0_f64, 0.0];
        let v = [1.0_f64, 0.0];
        assert_eq!(try_gauss_kernel(&u, &v, 1.0).unwrap(), gauss_kernel(&u, &v, 1.0));
        assert!(matches!(
            try_gauss_kernel(&u, &[1.0, 0.0, 0.0], 1.0),
            Err(KernelError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
        assert!(matches!(
            try_gauss_kernel_d1(&u, &v, 1.0, 2),
            Err(KernelError::IndexOutOfRange { index: 2, dim: 2 })
        ));
        assert!(matches!(
            try_varifold_gauss_kernel(&u, &v, 1.0),
            Err(KernelError::ZeroNorm)
        ));
        assert_relative_eq!(
            try_varifold_gauss_kernel(&v, &v, 1.0).unwrap(),
            2.0_f64.exp()
        );
    }

    #[test]
    fn test_checked_varifold_rejects_underflowing_norms() {
        // ‖u‖² = 1e-400 underflows to zero in f64
        assert!(matches!(
            try_varifold_gauss_kernel(&[1e-200_f64], &[1.0], 1.0),
            Err(KernelError::ZeroNorm)
        ));
        // ‖u‖² = 1e-60 underflows to zero in f32
        assert!(matches!(
            try_varifold_gauss_kernel(&[1e-30_f32, 0.0], &[1.0, 0.0], 1.0),
            Err(KernelError::ZeroNorm)
        ));
        // product of two tiny but representable norms
        assert!(matches!(
            try_varifold_gauss_kernel(&[1e-100_f64], &[1e-110], 1.0),
            Err(KernelError::ZeroNorm)
        ));
    }

    #[test]
    fn test_checked_varifold_accepts_small_norms() {
        let u = [1e-100_f64, 0.0];
        let v = [1.0_f64, 0.0];
        // p = 1e-200, cos² = 1
        assert_relative_eq!(
            try_varifold_gauss_kernel(&u, &v, 1.0).unwrap(),
            1e-100 * 2.0_f64.exp(),
            max_relative = 1e-12
        );
        assert_eq!(
            try_varifold_gauss_kernel(&u, &v, 1.0).unwrap(),
            varifold_gauss_kernel(&u, &v, 1.0)
        );
    }
}
