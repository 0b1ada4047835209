//! Runtime selection of a kernel family
//!
//! [`RadialKernel`] dispatches at compile time. When the family is only known
//! at configuration time (a config file, a command-line flag) the
//! [`KernelFamily`] tag forwards to the same closed forms through a `match`.

use crate::core::{Derivatives, KernelError, Result};
use crate::kernel::{Energy, Gaussian, KernelFn, Laplace, RadialKernel};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kernel family tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelFamily {
    /// exp(-r2/σ²)
    #[default]
    Gaussian,
    /// exp(-√(σ² + r2))
    Laplace,
    /// (σ² + r2)^(-1/4)
    Energy,
}

impl KernelFamily {
    /// All kernel families
    pub const ALL: [KernelFamily; 3] = [
        KernelFamily::Gaussian,
        KernelFamily::Laplace,
        KernelFamily::Energy,
    ];

    /// Lowercase family name
    pub fn name(&self) -> &'static str {
        match self {
            KernelFamily::Gaussian => "gaussian",
            KernelFamily::Laplace => "laplace",
            KernelFamily::Energy => "energy",
        }
    }

    /// Kernel value f(r2)
    #[inline]
    pub fn value<T: Float>(&self, r2: T, oo_sigma2: T) -> T {
        match self {
            KernelFamily::Gaussian => Gaussian::value(r2, oo_sigma2),
            KernelFamily::Laplace => Laplace::value(r2, oo_sigma2),
            KernelFamily::Energy => Energy::value(r2, oo_sigma2),
        }
    }

    /// First derivative f'(r2)
    #[inline]
    pub fn derivative1<T: Float>(&self, r2: T, oo_sigma2: T) -> T {
        match self {
            KernelFamily::Gaussian => Gaussian::derivative1(r2, oo_sigma2),
            KernelFamily::Laplace => Laplace::derivative1(r2, oo_sigma2),
            KernelFamily::Energy => Energy::derivative1(r2, oo_sigma2),
        }
    }

    /// Second derivative f''(r2)
    #[inline]
    pub fn derivative2<T: Float>(&self, r2: T, oo_sigma2: T) -> T {
        match self {
            KernelFamily::Gaussian => Gaussian::derivative2(r2, oo_sigma2),
            KernelFamily::Laplace => Laplace::derivative2(r2, oo_sigma2),
            KernelFamily::Energy => Energy::derivative2(r2, oo_sigma2),
        }
    }

    /// Value and both derivatives, sharing subexpressions
    #[inline]
    pub fn evaluate<T: Float>(&self, r2: T, oo_sigma2: T) -> Derivatives<T> {
        match self {
            KernelFamily::Gaussian => Gaussian::evaluate(r2, oo_sigma2),
            KernelFamily::Laplace => Laplace::evaluate(r2, oo_sigma2),
            KernelFamily::Energy => Energy::evaluate(r2, oo_sigma2),
        }
    }

    /// Function pointers `(value, derivative1, derivative2)` for this family
    ///
    /// Useful when the selection is made once and the functions are then
    /// stored or passed to code that is not generic over the family.
    pub fn functions<T: Float>(&self) -> (KernelFn<T>, KernelFn<T>, KernelFn<T>) {
        match self {
            KernelFamily::Gaussian => (
                Gaussian::value::<T>,
                Gaussian::derivative1::<T>,
                Gaussian::derivative2::<T>,
            ),
            KernelFamily::Laplace => (
                Laplace::value::<T>,
                Laplace::derivative1::<T>,
                Laplace::derivative2::<T>,
            ),
            KernelFamily::Energy => (
                Energy::value::<T>,
                Energy::derivative1::<T>,
                Energy::derivative2::<T>,
            ),
        }
    }
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for KernelFamily {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaussian" | "gauss" => Ok(KernelFamily::Gaussian),
            "laplace" | "exp" | "exponential" => Ok(KernelFamily::Laplace),
            "energy" => Ok(KernelFamily::Energy),
            other => Err(KernelError::UnknownFamily(other.to_string())),
        }
    }
}
