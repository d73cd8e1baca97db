use eaglevm_types::RegSize;

use crate::label::Label;
use crate::reg::Reg;

/// A single operand to an encoded instruction.
///
/// Mirrors spec.md's `zreg`/`zmem`/`zimm` operand constructors: the three
/// variants a generated handler ever needs, plus a label reference for
/// branch targets that a [`crate::container::CodeContainer`] resolves at
/// layout time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A physical register.
    Reg(Reg),
    /// A memory dereference `[base + index*scale + disp]`.
    Mem {
        /// Base register, if any.
        base: Option<Reg>,
        /// Index register, if any.
        index: Option<Reg>,
        /// Index scale factor: 1, 2, 4 or 8.
        scale: u8,
        /// Constant displacement.
        disp: i64,
        /// Width of the value being read or written through this operand.
        size: RegSize,
    },
    /// An immediate value.
    Imm {
        /// The immediate's bit pattern, sign-extended to 64 bits.
        value: i64,
        /// Whether the immediate should be encoded as signed.
        signed: bool,
    },
    /// A branch target that resolves to an address once the target
    /// label's container position is known.
    Label(Label),
}

/// Build a register operand.
pub const fn zreg(reg: Reg) -> Operand {
    Operand::Reg(reg)
}

/// Build a memory operand.
pub const fn zmem(
    base: Option<Reg>,
    index: Option<Reg>,
    scale: u8,
    disp: i64,
    size: RegSize,
) -> Operand {
    Operand::Mem {
        base,
        index,
        scale,
        disp,
        size,
    }
}

/// Build an immediate operand.
pub const fn zimm(value: i64, signed: bool) -> Operand {
    Operand::Imm { value, signed }
}

/// Build a label operand, for branch and call instructions.
pub const fn zlabel(label: Label) -> Operand {
    Operand::Label(label)
}

impl Operand {
    /// Width of the value carried by this operand, where that is
    /// statically known (registers and typed memory operands).
    pub fn size(&self) -> Option<RegSize> {
        match self {
            Operand::Reg(r) => Some(r.size_of()),
            Operand::Mem { size, .. } => Some(*size),
            Operand::Imm { .. } | Operand::Label(_) => None,
        }
    }
}
