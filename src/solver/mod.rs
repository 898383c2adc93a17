//! Right-hand side assembly for the method of lines.

mod rhs;

pub use rhs::compute_rhs;

#[cfg(feature = "parallel")]
pub use rhs::compute_rhs_parallel;
