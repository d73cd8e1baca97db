use derive_more::Display;

/// Errors produced while building or encoding machine code.
#[derive(Debug, Display)]
pub enum AsmError {
    /// The underlying codec rejected an instruction it was asked to encode.
    #[display(fmt = "encoder rejected instruction: {_0}")]
    EncoderRejection(String),

    /// A [`crate::label::Label`] was referenced that was never bound to a
    /// position in any container.
    #[display(fmt = "label {_0:?} was never bound")]
    UnboundLabel(crate::label::Label),

    /// A recompile thunk's fixed-point iteration did not converge within
    /// the retry budget; the container's layout is oscillating.
    #[display(fmt = "layout did not converge after {_0} passes")]
    LayoutDivergence(u32),

    /// A decode request ran past the end of the supplied byte slice.
    #[display(fmt = "decode ran past end of input at offset {_0}")]
    TruncatedInput(usize),

    /// A register of the wrong class was supplied to an operand that
    /// requires a specific one (e.g. a GPR where an XMM was expected).
    #[display(fmt = "register {_0:?} is the wrong class for this operand")]
    WrongRegisterClass(crate::reg::Reg),

    /// A [`crate::regman::RegisterContext`] had no free register left to
    /// hand out (spec.md §7 "Pool exhaustion").
    #[display(fmt = "register context pool exhausted")]
    PoolExhausted,
}

impl std::error::Error for AsmError {}

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, AsmError>;
