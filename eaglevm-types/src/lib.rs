//! Atomic size and bit-range types shared across the EagleVM core.
//!
//! This crate has no codec dependency on purpose (mirroring how
//! `fuel-types` has no dependency on `fuel-asm`): the concrete register
//! identity used inside a [`MappedRange`] is supplied by the caller as a
//! type parameter, so the codec-facing `eaglevm-asm` crate is the only
//! place that ties a mapped range to a real physical register.

mod range;
mod size;

pub use range::{BitRange, MappedRange};
pub use size::{IrSize, RegSize};

/// Register value type used throughout the IR and codec layers.
pub type Word = u64;
