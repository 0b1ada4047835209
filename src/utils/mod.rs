//! Utility functions for kernel parameters and derivative verification

pub use self::bandwidth::*;

/// Bandwidth conversions
pub mod bandwidth {
    /// Inverse squared bandwidth 1/σ² from σ
    pub fn oo_sigma2_from_sigma(sigma: f64) -> f64 {
        1.0 / (sigma * sigma)
    }

    /// Bandwidth σ from 1/σ²
    pub fn sigma_from_oo_sigma2(oo_sigma2: f64) -> f64 {
        1.0 / oo_sigma2.sqrt()
    }
}

/// Finite-difference checks of the closed-form derivatives
pub mod numerical {
    use crate::kernel::{Energy, Gaussian, KernelFamily, Laplace, RadialKernel};
    use log::{debug, warn};

    /// Squared radii of the default check grid
    pub const GRID_R2: [f64; 4] = [0.0, 0.1, 1.0, 10.0];

    /// Inverse squared bandwidths of the default check grid
    pub const GRID_OO_SIGMA2: [f64; 3] = [0.1, 1.0, 10.0];

    /// Default finite-difference step
    pub const DEFAULT_STEP: f64 = 1e-5;

    /// Default relative tolerance for [`DerivativeCheck::passes`]
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Central difference (f(x + h) - f(x - h)) / 2h
    pub fn central_difference<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
        (f(x + h) - f(x - h)) / (2.0 * h)
    }

    /// Second-order forward difference (-3f(x) + 4f(x + h) - f(x + 2h)) / 2h
    pub fn forward_difference<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
        (-3.0 * f(x) + 4.0 * f(x + h) - f(x + 2.0 * h)) / (2.0 * h)
    }

    /// Numerical derivative that never evaluates `f` below zero
    ///
    /// Squared radii are non-negative, so near the origin a one-sided
    /// difference replaces the central one.
    pub fn radial_difference<F: Fn(f64) -> f64>(f: F, r2: f64, h: f64) -> f64 {
        if r2 < h {
            forward_difference(f, r2, h)
        } else {
            central_difference(f, r2, h)
        }
    }

    /// Outcome of comparing closed-form derivatives to finite differences
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DerivativeCheck {
        pub family: KernelFamily,
        pub r2: f64,
        pub oo_sigma2: f64,
        /// Relative error of the first derivative
        pub first_error: f64,
        /// Relative error of the second derivative, after removing the
        /// known gap of the family's closed form
        pub second_error: f64,
        /// Known gap between `derivative2` and the exact derivative of
        /// `derivative1` (non-zero only for Laplace)
        pub second_gap: f64,
    }

    impl DerivativeCheck {
        /// Largest of the two relative errors
        pub fn max_error(&self) -> f64 {
            self.first_error.max(self.second_error)
        }

        /// Whether both errors are within `tolerance`
        pub fn passes(&self, tolerance: f64) -> bool {
            self.max_error() <= tolerance
        }
    }

    fn relative_error(approx: f64, exact: f64) -> f64 {
        (approx - exact).abs() / exact.abs().max(f64::MIN_POSITIVE)
    }

    /// Known gap between a family's `derivative2` and the exact derivative of
    /// its `derivative1`
    ///
    /// The Laplace second derivative keeps its published closed form, which
    /// differs from d/dr2 of the first derivative by
    /// [`Laplace::derivative2_gap`]. The other families are exact.
    pub fn second_derivative_gap(family: KernelFamily, r2: f64, oo_sigma2: f64) -> f64 {
        match family {
            KernelFamily::Laplace => Laplace::derivative2_gap(r2, oo_sigma2),
            KernelFamily::Gaussian | KernelFamily::Energy => 0.0,
        }
    }

    /// Check `derivative1` against the numerical derivative of `value`, and
    /// `derivative2` against the numerical derivative of `derivative1` plus
    /// the family's [`second_derivative_gap`]
    pub fn check_derivatives<K: RadialKernel>(r2: f64, oo_sigma2: f64, h: f64) -> DerivativeCheck {
        let numeric_first = radial_difference(|x| K::value(x, oo_sigma2), r2, h);
        let numeric_second = radial_difference(|x| K::derivative1(x, oo_sigma2), r2, h);
        let second_gap = second_derivative_gap(K::FAMILY, r2, oo_sigma2);

        let check = DerivativeCheck {
            family: K::FAMILY,
            r2,
            oo_sigma2,
            first_error: relative_error(numeric_first, K::derivative1(r2, oo_sigma2)),
            second_error: relative_error(
                numeric_second + second_gap,
                K::derivative2(r2, oo_sigma2),
            ),
            second_gap,
        };
        debug!(
            "{} r2={} oo_sigma2={}: first_error={:.3e} second_error={:.3e} second_gap={:.3e}",
            check.family, r2, oo_sigma2, check.first_error, check.second_error, second_gap
        );
        check
    }

    /// [`check_derivatives`] for a family chosen at runtime
    pub fn check_family(family: KernelFamily, r2: f64, oo_sigma2: f64, h: f64) -> DerivativeCheck {
        match family {
            KernelFamily::Gaussian => check_derivatives::<Gaussian>(r2, oo_sigma2, h),
            KernelFamily::Laplace => check_derivatives::<Laplace>(r2, oo_sigma2, h),
            KernelFamily::Energy => check_derivatives::<Energy>(r2, oo_sigma2, h),
        }
    }

    /// Run [`check_family`] over the default grid
    pub fn check_grid(family: KernelFamily, h: f64) -> Vec<DerivativeCheck> {
        let checks: Vec<DerivativeCheck> = GRID_OO_SIGMA2
            .iter()
            .flat_map(|&oo_sigma2| {
                GRID_R2
                    .iter()
                    .map(move |&r2| check_family(family, r2, oo_sigma2, h))
            })
            .collect();

        let failures = checks
            .iter()
            .filter(|c| !c.passes(DEFAULT_TOLERANCE))
            .count();
        if failures > 0 {
            warn!(
                "{} of {} derivative checks for {} exceed tolerance {:e}",
                failures,
                checks.len(),
                family,
                DEFAULT_TOLERANCE
            );
        }
        checks
    }
}
