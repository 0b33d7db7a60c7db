//! Dense row-major matrix value type
//!
//! [`Matrix`] is the value shared by the solver and the inverter: a flat
//! row-major `f64` buffer plus its dimensions, an optional display name and a
//! flag telling `Display` whether to print that name.

mod core;
mod ops;

pub use core::Matrix;
