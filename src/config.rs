//! Kernel configuration and persistence
//!
//! A [`KernelConfig`] captures the choices a caller makes once: the kernel
//! family, the bandwidth and the scalar precision. Configurations are stored
//! as JSON together with a little metadata so that the same kernel can be
//! reused across runs and by the CLI.

use crate::core::{Derivatives, KernelError, Precision, Result};
use crate::kernel::KernelFamily;
use crate::utils::{oo_sigma2_from_sigma, sigma_from_oo_sigma2};
use log::{debug, info};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Kernel family, bandwidth and precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Kernel family
    pub family: KernelFamily,
    /// Inverse squared bandwidth 1/σ²
    pub oo_sigma2: f64,
    /// Scalar precision used for evaluation
    #[serde(default)]
    pub precision: Precision,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            family: KernelFamily::Gaussian,
            oo_sigma2: 1.0,
            precision: Precision::Double,
        }
    }
}

impl KernelConfig {
    /// Create a configuration for a family with unit bandwidth
    pub fn new(family: KernelFamily) -> Self {
        Self {
            family,
            ..Self::default()
        }
    }

    /// Set the kernel family
    pub fn with_family(mut self, family: KernelFamily) -> Self {
        self.family = family;
        self
    }

    /// Set the bandwidth σ (stored as 1/σ²)
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.oo_sigma2 = oo_sigma2_from_sigma(sigma);
        self
    }

    /// Set the inverse squared bandwidth directly
    pub fn with_oo_sigma2(mut self, oo_sigma2: f64) -> Self {
        self.oo_sigma2 = oo_sigma2;
        self
    }

    /// Set the scalar precision
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Bandwidth σ
    pub fn sigma(&self) -> f64 {
        sigma_from_oo_sigma2(self.oo_sigma2)
    }

    /// Check that the bandwidth is finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        if !self.oo_sigma2.is_finite() || self.oo_sigma2 <= 0.0 {
            return Err(KernelError::InvalidParameter(format!(
                "oo_sigma2 must be finite and positive, got: {}",
                self.oo_sigma2
            )));
        }
        Ok(())
    }

    /// Bandwidth converted to the evaluation scalar type
    pub fn oo_sigma2_as<T: Float>(&self) -> Result<T> {
        T::from(self.oo_sigma2).ok_or_else(|| {
            KernelError::InvalidParameter(format!(
                "oo_sigma2 {} is not representable",
                self.oo_sigma2
            ))
        })
    }

    /// Value and derivatives of the configured kernel at `r2`
    pub fn evaluate<T: Float>(&self, r2: T) -> Result<Derivatives<T>> {
        Ok(self.family.evaluate(r2, self.oo_sigma2_as::<T>()?))
    }

    /// Save the configuration as JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        let file = ConfigFile::new(*self);
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(writer, &file)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        info!("Kernel configuration saved to {:?}", path.as_ref());
        Ok(())
    }

    /// Load and validate a configuration from JSON
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(ConfigFile::load_from_file(path)?.kernel)
    }
}

/// On-disk representation of a [`KernelConfig`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// The kernel configuration
    pub kernel: KernelConfig,
    /// Library version that wrote the file
    pub library_version: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl ConfigFile {
    /// Wrap a configuration with current metadata
    pub fn new(kernel: KernelConfig) -> Self {
        Self {
            kernel,
            library_version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Load a configuration file, validating the kernel parameters
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let file: ConfigFile = serde_json::from_reader(reader)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        file.kernel.validate()?;
        debug!(
            "Loaded {} kernel configuration written by version {}",
            file.kernel.family, file.library_version
        );
        Ok(file)
    }

    /// Print a human-readable summary
    pub fn print_summary(&self) {
        println!("=== Kernel Configuration ===");
        println!("Family: {}", self.kernel.family);
        println!("Sigma: {}", self.kernel.sigma());
        println!("1/Sigma^2: {}", self.kernel.oo_sigma2);
        println!("Precision: {}", self.kernel.precision);
        println!("Library Version: {}", self.library_version);
        println!("Created: {}", self.created_at);
    }
}
