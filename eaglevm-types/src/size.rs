use core::fmt;

/// Width of a physical register or memory operand, in bits.
///
/// Ordered ascending by width; `None` is a sentinel used by call sites
/// that need "no destination" without reaching for `Option<RegSize>`
/// (e.g. a handler signature whose second operand doesn't exist).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RegSize {
    /// Sentinel: no register/operand.
    #[default]
    None,
    /// 8 bits.
    Bit8,
    /// 16 bits.
    Bit16,
    /// 32 bits.
    Bit32,
    /// 64 bits.
    Bit64,
    /// 128 bits (XMM).
    Bit128,
}

/// Width of an IR-level value on the stack-machine's value stack.
///
/// Distinct from [`RegSize`] at the type level (the IR and the codec
/// layer reason about width independently), but the two enumerations
/// carry the same bit widths and convert losslessly in both directions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IrSize {
    /// Sentinel: no value.
    #[default]
    None,
    /// 8 bits.
    Bit8,
    /// 16 bits.
    Bit16,
    /// 32 bits.
    Bit32,
    /// 64 bits.
    Bit64,
    /// 128 bits.
    Bit128,
}

macro_rules! size_methods {
    ($t:ident) => {
        impl $t {
            /// Size in bits, or 0 for [`Self::None`].
            pub const fn bits(self) -> u32 {
                match self {
                    Self::None => 0,
                    Self::Bit8 => 8,
                    Self::Bit16 => 16,
                    Self::Bit32 => 32,
                    Self::Bit64 => 64,
                    Self::Bit128 => 128,
                }
            }

            /// Size in bytes, or 0 for [`Self::None`]. `TOB` in spec.md's terms.
            pub const fn tob(self) -> usize {
                (self.bits() / 8) as usize
            }

            /// The widest size whose byte count does not exceed `bytes`.
            pub const fn from_bytes(bytes: usize) -> Self {
                match bytes {
                    16 => Self::Bit128,
                    8 => Self::Bit64,
                    4 => Self::Bit32,
                    2 => Self::Bit16,
                    1 => Self::Bit8,
                    _ => Self::None,
                }
            }

            /// Mask covering the low `self.bits()` bits of a `u128`.
            pub const fn mask128(self) -> u128 {
                let bits = self.bits();
                if bits == 0 {
                    0
                } else if bits >= 128 {
                    u128::MAX
                } else {
                    (1u128 << bits) - 1
                }
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
    };
}

size_methods!(RegSize);
size_methods!(IrSize);

impl From<RegSize> for IrSize {
    fn from(value: RegSize) -> Self {
        match value {
            RegSize::None => IrSize::None,
            RegSize::Bit8 => IrSize::Bit8,
            RegSize::Bit16 => IrSize::Bit16,
            RegSize::Bit32 => IrSize::Bit32,
            RegSize::Bit64 => IrSize::Bit64,
            RegSize::Bit128 => IrSize::Bit128,
        }
    }
}

impl From<IrSize> for RegSize {
    fn from(value: IrSize) -> Self {
        match value {
            IrSize::None => RegSize::None,
            IrSize::Bit8 => RegSize::Bit8,
            IrSize::Bit16 => RegSize::Bit16,
            IrSize::Bit32 => RegSize::Bit32,
            IrSize::Bit64 => RegSize::Bit64,
            IrSize::Bit128 => RegSize::Bit128,
        }
    }
}
