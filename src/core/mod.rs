//! Core types and errors shared by the kernel modules

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
