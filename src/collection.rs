//! Reading statistics out of the kernel.

pub mod arc;
pub mod kstat;
