//! x86-64 encoder/decoder facade, code containers, labels, and the
//! randomized virtual register model.
//!
//! This crate is the codec-facing seam between `eaglevm-types`'s bare
//! size/bit-range primitives and `eaglevm-vm`'s IR-to-machine-code
//! backend: everything here knows what a real x86-64 register or
//! instruction is, but nothing here knows what the IR or the handler
//! generators look like.

pub mod container;
pub mod error;
pub mod facade;
pub mod label;
pub mod operand;
pub mod reg;
pub mod regman;

pub use container::{CodeContainer, ContainerItem, RecompileThunk};
pub use error::{AsmError, Result};
pub use facade::{decode, decode_all, Condition, DecodedInstruction, Facade, Mnemonic};
pub use label::Label;
pub use operand::{zimm, zlabel, zmem, zreg, Operand};
pub use reg::{gpr64_registers, Reg, RegClass, XMM_REGISTERS};
pub use regman::{RegisterContext, RegisterManager, ScopeGuard, VmRegRole};

/// A bit-range mapping instantiated with this crate's concrete [`Reg`]
/// type (spec.md's `reg_mapped_range`).
pub type MappedRange = eaglevm_types::MappedRange<Reg>;
