//! Radial kernel functions for kernel-based point-set and varifold distances
//!
//! Every kernel maps a squared distance `r2` and an inverse squared bandwidth
//! `oo_sigma2 = 1/σ²` to a weight, together with closed-form first and second
//! derivatives with respect to `r2`. Three families are provided (Gaussian,
//! Laplace and Energy), plus Gaussian kernels evaluated directly on pairs of
//! coordinate vectors, including a varifold variant.
//!
//! ```
//! use radial_kernels::{Gaussian, KernelFamily, RadialKernel};
//!
//! let w = Gaussian::value(1.0_f64, 1.0);
//! assert!((w - (-1.0_f64).exp()).abs() < 1e-12);
//!
//! let d = KernelFamily::Laplace.evaluate(0.5_f32, 2.0);
//! assert!(d.first < 0.0 && d.second > 0.0);
//! ```

pub mod config;
pub mod core;
pub mod kernel;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::{ConfigFile, KernelConfig};
pub use crate::core::*;
pub use crate::kernel::{
    gauss_kernel, gauss_kernel_d1, squared_distance, varifold_gauss_kernel, Energy, Gaussian,
    KernelFamily, KernelFn, Laplace, RadialKernel,
};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
