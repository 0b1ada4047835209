//! Core type definitions for radial kernels

use crate::core::{KernelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kernel value together with its first and second derivatives w.r.t. `r2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivatives<T> {
    /// Kernel value f(r2)
    pub value: T,
    /// First derivative f'(r2)
    pub first: T,
    /// Second derivative f''(r2)
    pub second: T,
}

impl<T> Derivatives<T> {
    /// Create a new derivative triple
    pub fn new(value: T, first: T, second: T) -> Self {
        Self {
            value,
            first,
            second,
        }
    }
}

/// Floating-point precision used when evaluating kernels
///
/// The kernels are generic over the scalar type; this tag carries the choice
/// through configuration files and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit `f32`
    Single,
    /// 64-bit `f64`
    #[default]
    Double,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "float32"),
            Precision::Double => write!(f, "float64"),
        }
    }
}

impl FromStr for Precision {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float32" | "f32" | "single" | "float" => Ok(Precision::Single),
            "float64" | "f64" | "double" => Ok(Precision::Double),
            other => Err(KernelError::UnknownPrecision(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_parsing() {
        assert_eq!("float32".parse::<Precision>().unwrap(), Precision::Single);
        assert_eq!("F32".parse::<Precision>().unwrap(), Precision::Single);
        assert_eq!("double".parse::<Precision>().unwrap(), Precision::Double);
        assert_eq!("float64".parse::<Precision>().unwrap(), Precision::Double);
        assert!(matches!(
            "half".parse::<Precision>(),
            Err(KernelError::UnknownPrecision(_))
        ));
    }

    #[test]
    fn test_precision_display_round_trip() {
        for precision in [Precision::Single, Precision::Double] {
            let parsed: Precision = precision.to_string().parse().unwrap();
            assert_eq!(parsed, precision);
        }
    }
}
