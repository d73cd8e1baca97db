//! Handler generators for the remaining mnemonics: `smul`, `cnt`
//! (popcount), `abs`, `log2` (bit-scan-reverse).
//!
//! Unlike the arithmetic/shift family these four don't all recompute the
//! same five flags; each follows the real x86 instruction it virtualizes
//! (`popcnt` only ever defines ZF, `bsr`/`log2` only ZF, `imul`'s
//! two-operand form only CF/OF but this backend leaves those at their
//! initialized zero since it has no widening multiply to test overflow
//! against).

use eaglevm_types::IrSize;

use crate::error::Result;
use crate::ir::{Command, PushValue, VmFlag, VmMnemonic, CF_OF_SF_ZF_PF};

use super::flags::{calculate_abs_of, calculate_pf, calculate_sf, calculate_zf, OperandDepths};
use super::{HandlerGenerator, HandlerGeneratorRegistry};

const BINARY_SIGNATURES: &[&[IrSize]] = &[
    &[IrSize::Bit8, IrSize::Bit8],
    &[IrSize::Bit16, IrSize::Bit16],
    &[IrSize::Bit32, IrSize::Bit32],
    &[IrSize::Bit64, IrSize::Bit64],
];

const UNARY_SIGNATURES: &[&[IrSize]] =
    &[&[IrSize::Bit8], &[IrSize::Bit16], &[IrSize::Bit32], &[IrSize::Bit64]];

/// `imul` (two-operand form): SF/ZF/PF are not architecturally defined
/// for this form, but this backend folds them anyway for determinism;
/// CF/OF stay zero.
struct SmulGenerator;

impl HandlerGenerator for SmulGenerator {
    fn signatures(&self) -> &[&[IrSize]] {
        BINARY_SIGNATURES
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let mut out = vec![Command::Smul { size, preserved: true }];
        out.push(Command::Push { value: PushValue::Imm(0), size: IrSize::Bit64 });

        let depths = OperandDepths { result: 1, rhs: Some(2), lhs: 3 };
        out.extend(calculate_sf(depths, size));
        out.extend(calculate_zf(depths, size));
        out.extend(calculate_pf(depths, size));

        out.push(Command::ContextRflagsStore { relevant_flags: CF_OF_SF_ZF_PF });
        out.push(Command::Carry { size, depth: size.tob() * 2 });
        out.push(Command::Pop { size, dest: None });
        out.push(Command::Pop { size, dest: None });
        Ok(out)
    }
}

/// `popcnt`: hardware clears CF/OF/SF/AF/PF and sets ZF from
/// `source == 0`.
struct CntGenerator;

impl HandlerGenerator for CntGenerator {
    fn signatures(&self) -> &[&[IrSize]] {
        UNARY_SIGNATURES
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let mut out = vec![Command::Cnt { size, preserved: true }];
        out.push(Command::Push { value: PushValue::Imm(0), size: IrSize::Bit64 });

        // depth 1 is the *source*, not the popcount result, since ZF for
        // popcnt reflects whether the input had zero set bits.
        let depths = OperandDepths { result: 1, rhs: None, lhs: 2 };
        out.extend(calculate_zf(depths, size));

        out.push(Command::ContextRflagsStore { relevant_flags: CF_OF_SF_ZF_PF });
        out.push(Command::Carry { size, depth: size.tob() });
        out.push(Command::Pop { size, dest: None });
        Ok(out)
    }
}

/// `abs` (this backend's stand-in for `neg`'s flag behaviour on an
/// already-unsigned magnitude): SF/ZF/PF from the result, OF set only
/// when the operand was the size's minimum value.
struct AbsGenerator;

impl HandlerGenerator for AbsGenerator {
    fn signatures(&self) -> &[&[IrSize]] {
        UNARY_SIGNATURES
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let mut out = vec![Command::Abs { size, preserved: true }];
        out.push(Command::Push { value: PushValue::Imm(0), size: IrSize::Bit64 });

        let depths = OperandDepths { result: 1, rhs: None, lhs: 2 };
        out.extend(calculate_sf(depths, size));
        out.extend(calculate_zf(depths, size));
        out.extend(calculate_pf(depths, size));
        out.extend(calculate_abs_of(depths, size));

        out.push(Command::ContextRflagsStore { relevant_flags: CF_OF_SF_ZF_PF });
        out.push(Command::Carry { size, depth: size.tob() });
        out.push(Command::Pop { size, dest: None });
        Ok(out)
    }
}

/// `log2` (bit-scan-reverse): only ZF is architecturally defined,
/// reflecting whether the source was zero (an undefined-result input).
struct Log2Generator;

impl HandlerGenerator for Log2Generator {
    fn signatures(&self) -> &[&[IrSize]] {
        UNARY_SIGNATURES
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let mut out = vec![Command::Log2 { size, preserved: true }];
        out.push(Command::Push { value: PushValue::Imm(0), size: IrSize::Bit64 });

        let depths = OperandDepths { result: 1, rhs: None, lhs: 2 };
        out.extend(calculate_zf(depths, size));

        out.push(Command::ContextRflagsStore { relevant_flags: CF_OF_SF_ZF_PF });
        out.push(Command::Carry { size, depth: size.tob() });
        out.push(Command::Pop { size, dest: None });
        Ok(out)
    }
}

pub fn register(reg: &mut HandlerGeneratorRegistry) {
    reg.register(VmMnemonic::Smul, Box::new(SmulGenerator));
    reg.register(VmMnemonic::Cnt, Box::new(CntGenerator));
    reg.register(VmMnemonic::Abs, Box::new(AbsGenerator));
    reg.register(VmMnemonic::Log2, Box::new(Log2Generator));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popcnt_generator_only_touches_zero_flag_math() {
        let body = CntGenerator.generate(&[IrSize::Bit32]).unwrap();
        let flags_loads = body
            .iter()
            .filter(|c| matches!(c, Command::FlagsLoad { flag } if *flag == VmFlag::Eq))
            .count();
        assert_eq!(flags_loads, 1);
    }

    #[test]
    fn abs_generator_checks_the_minimum_value_for_overflow() {
        let body = AbsGenerator.generate(&[IrSize::Bit8]).unwrap();
        let has_min_check = body.iter().any(|c| matches!(c, Command::Push { value: PushValue::Imm(0x80), .. }));
        assert!(has_min_check);
    }
}
