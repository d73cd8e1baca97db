use eaglevm_types::RegSize;
use iced_x86::Register as Iced;

/// A physical x86-64 register identity.
///
/// Thin newtype over [`iced_x86::Register`] so the rest of the crate
/// never has to reach into the codec crate's enum directly; this is the
/// seam spec.md's data model calls `reg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reg(Iced);

/// The register class a [`Reg`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegClass {
    /// 8-bit general purpose register.
    Gpr8,
    /// 16-bit general purpose register.
    Gpr16,
    /// 32-bit general purpose register.
    Gpr32,
    /// 64-bit general purpose register.
    Gpr64,
    /// 128-bit SSE register.
    Xmm128,
    /// Segment register.
    Segment,
    /// Anything else iced-x86 can name (flags, IP, ...), not used as VM state.
    Other,
}

impl RegClass {
    /// Bit capacity available when this class is used as a mapped-range
    /// destination: 64 for a GPR, 128 for an XMM.
    pub const fn capacity_bits(self) -> u16 {
        match self {
            RegClass::Xmm128 => 128,
            _ => 64,
        }
    }
}

impl Reg {
    /// Wrap a raw codec register.
    pub const fn new(inner: Iced) -> Self {
        Self(inner)
    }

    /// Unwrap to the codec crate's register type, for building operands.
    pub const fn inner(self) -> Iced {
        self.0
    }

    /// Width of this register.
    pub fn size_of(self) -> RegSize {
        RegSize::from_bytes(self.0.size())
    }

    /// Which [`RegClass`] this register belongs to.
    pub fn class_of(self) -> RegClass {
        if self.0.is_gpr8() {
            RegClass::Gpr8
        } else if self.0.is_gpr16() {
            RegClass::Gpr16
        } else if self.0.is_gpr32() {
            RegClass::Gpr32
        } else if self.0.is_gpr64() {
            RegClass::Gpr64
        } else if self.0.is_xmm() {
            RegClass::Xmm128
        } else if self.0.is_segment_register() {
            RegClass::Segment
        } else {
            RegClass::Other
        }
    }

    /// Whether this register is one of the 16 general-purpose register
    /// families tracked by [`GPR_FAMILIES`] (i.e. not a high-byte legacy
    /// alias such as `AH`).
    pub fn is_tracked_gpr(self) -> bool {
        GPR_FAMILIES.iter().any(|fam| fam.contains(self.0))
    }

    /// Re-view this register at a different width within the same
    /// register family (e.g. `RAX` at `Bit32` yields `EAX`).
    ///
    /// XMM registers are 128-bit only in this model (spec.md never
    /// narrows an XMM destination), so `to_width` on an XMM register is
    /// the identity for any requested width. Legacy high-byte registers
    /// (`AH`/`BH`/`CH`/`DH`) are not part of any tracked family and are
    /// returned unchanged; the lifter never targets them as a virtual
    /// GPR64 destination.
    pub fn to_width(self, width: RegSize) -> Reg {
        if let RegClass::Xmm128 = self.class_of() {
            return self;
        }

        match GPR_FAMILIES.iter().find(|fam| fam.contains(self.0)) {
            Some(fam) => fam.at(width),
            None => self,
        }
    }
}

impl From<Iced> for Reg {
    fn from(value: Iced) -> Self {
        Reg::new(value)
    }
}

struct GprFamily {
    bit8: Iced,
    bit16: Iced,
    bit32: Iced,
    bit64: Iced,
}

impl GprFamily {
    fn contains(&self, reg: Iced) -> bool {
        reg == self.bit8 || reg == self.bit16 || reg == self.bit32 || reg == self.bit64
    }

    fn at(&self, width: RegSize) -> Reg {
        match width {
            RegSize::Bit8 => Reg(self.bit8),
            RegSize::Bit16 => Reg(self.bit16),
            RegSize::Bit32 => Reg(self.bit32),
            RegSize::Bit64 | RegSize::Bit128 | RegSize::None => Reg(self.bit64),
        }
    }
}

/// The 16 general-purpose register families available on x86-64, indexed
/// at every non-legacy width. Deliberately excludes the high-byte legacy
/// aliases (`AH`, `BH`, `CH`, `DH`) since the virtual register file never
/// maps onto them (spec.md's mapped ranges only ever target `RAX..R15`
/// at widths 8/16/32/64).
static GPR_FAMILIES: [GprFamily; 16] = [
    GprFamily { bit8: Iced::AL, bit16: Iced::AX, bit32: Iced::EAX, bit64: Iced::RAX },
    GprFamily { bit8: Iced::CL, bit16: Iced::CX, bit32: Iced::ECX, bit64: Iced::RCX },
    GprFamily { bit8: Iced::DL, bit16: Iced::DX, bit32: Iced::EDX, bit64: Iced::RDX },
    GprFamily { bit8: Iced::BL, bit16: Iced::BX, bit32: Iced::EBX, bit64: Iced::RBX },
    GprFamily { bit8: Iced::SPL, bit16: Iced::SP, bit32: Iced::ESP, bit64: Iced::RSP },
    GprFamily { bit8: Iced::BPL, bit16: Iced::BP, bit32: Iced::EBP, bit64: Iced::RBP },
    GprFamily { bit8: Iced::SIL, bit16: Iced::SI, bit32: Iced::ESI, bit64: Iced::RSI },
    GprFamily { bit8: Iced::DIL, bit16: Iced::DI, bit32: Iced::EDI, bit64: Iced::RDI },
    GprFamily { bit8: Iced::R8L, bit16: Iced::R8W, bit32: Iced::R8D, bit64: Iced::R8 },
    GprFamily { bit8: Iced::R9L, bit16: Iced::R9W, bit32: Iced::R9D, bit64: Iced::R9 },
    GprFamily { bit8: Iced::R10L, bit16: Iced::R10W, bit32: Iced::R10D, bit64: Iced::R10 },
    GprFamily { bit8: Iced::R11L, bit16: Iced::R11W, bit32: Iced::R11D, bit64: Iced::R11 },
    GprFamily { bit8: Iced::R12L, bit16: Iced::R12W, bit32: Iced::R12D, bit64: Iced::R12 },
    GprFamily { bit8: Iced::R13L, bit16: Iced::R13W, bit32: Iced::R13D, bit64: Iced::R13 },
    GprFamily { bit8: Iced::R14L, bit16: Iced::R14W, bit32: Iced::R14D, bit64: Iced::R14 },
    GprFamily { bit8: Iced::R15L, bit16: Iced::R15W, bit32: Iced::R15D, bit64: Iced::R15 },
];

/// The 16 XMM registers usable as unreserved-temp destinations.
pub static XMM_REGISTERS: [Iced; 16] = [
    Iced::XMM0, Iced::XMM1, Iced::XMM2, Iced::XMM3,
    Iced::XMM4, Iced::XMM5, Iced::XMM6, Iced::XMM7,
    Iced::XMM8, Iced::XMM9, Iced::XMM10, Iced::XMM11,
    Iced::XMM12, Iced::XMM13, Iced::XMM14, Iced::XMM15,
];

/// All 16 general-purpose registers at 64-bit width, in x86 encoding order.
pub fn gpr64_registers() -> [Reg; 16] {
    let mut out = [Reg(Iced::RAX); 16];
    for (slot, fam) in out.iter_mut().zip(GPR_FAMILIES.iter()) {
        *slot = Reg(fam.bit64);
    }
    out
}
