//! Radial kernel functions and their derivatives

pub mod energy;
pub mod family;
pub mod gaussian;
pub mod laplace;
pub mod pairwise;
pub mod traits;

pub use self::energy::*;
pub use self::family::*;
pub use self::gaussian::*;
pub use self::laplace::*;
pub use self::pairwise::*;
pub use self::traits::*;
