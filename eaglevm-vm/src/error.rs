use derive_more::Display;

use crate::ir::store::StoreId;

/// The error taxonomy of spec.md §7, surfaced to the per-block driver.
/// Nothing inside the core recovers from one of these; a failed block's
/// partial output is discarded by the caller.
#[derive(Debug, Display)]
pub enum Error {
    /// An invariant the core assumes (a working block is set, a store is
    /// finalized, operand sizes match, ...) did not hold.
    #[display(fmt = "precondition violation: {_0}")]
    PreconditionViolation(String),

    /// No lifter or handler generator is registered for this mnemonic, or
    /// its operand signature isn't in `valid_operands`.
    #[display(fmt = "unsupported construct: {_0}")]
    UnsupportedConstruct(String),

    /// A [`eaglevm_asm::RegisterContext`] ran out of free registers.
    #[display(fmt = "register pool exhausted")]
    PoolExhausted,

    /// The assembler's fixed-point layout pass did not converge.
    #[display(fmt = "layout divergence: {_0}")]
    LayoutDivergence(u32),

    /// The underlying encoder rejected a constructed request.
    #[display(fmt = "encoder rejection: {_0}")]
    EncoderRejection(String),

    /// A [`StoreId`] was read after it had already been released.
    #[display(fmt = "store {_0:?} read after release")]
    StoreReleased(StoreId),

    /// Wraps an error surfaced by the underlying codec/register-model crate.
    #[display(fmt = "asm error: {_0}")]
    Asm(eaglevm_asm::AsmError),
}

impl std::error::Error for Error {}

impl From<eaglevm_asm::AsmError> for Error {
    fn from(value: eaglevm_asm::AsmError) -> Self {
        match value {
            eaglevm_asm::AsmError::PoolExhausted => Error::PoolExhausted,
            eaglevm_asm::AsmError::LayoutDivergence(n) => Error::LayoutDivergence(n),
            eaglevm_asm::AsmError::EncoderRejection(msg) => Error::EncoderRejection(msg),
            other => Error::Asm(other),
        }
    }
}

/// Convenience alias for fallible operations in this crate, matching
/// `fuel_vm::error::SimpleResult`'s naming.
pub type Result<T> = std::result::Result<T, Error>;
