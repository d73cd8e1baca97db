//! Handler generators for the binary bitwise/arithmetic family: `add`,
//! `sub`, `and`, `or`, `xor`, `cmp`.
//!
//! All six share the same stack shape entering the generator (pushed by
//! the lifter's `handler_call`): `[.., lhs, rhs]`, `rhs` on top. Every
//! generator here runs the raw op `preserved` so the operands stay put
//! underneath the computed result, folds the affected flags into a
//! 64-bit accumulator sitting above all three, then writes the
//! accumulator into the real flag register and discards the preserved
//! operands, leaving just the result (or, for `cmp`, nothing) on top.

use eaglevm_types::IrSize;

use crate::error::Result;
use crate::ir::{Command, PushValue, CF_OF_SF_ZF_PF};

use super::flags::{
    calculate_add_cf, calculate_add_of, calculate_pf, calculate_sf, calculate_sub_cf,
    calculate_sub_of, calculate_zf, OperandDepths,
};
use super::{HandlerGenerator, HandlerGeneratorRegistry, ALL_WIDTHS};
use crate::ir::VmMnemonic;

/// Drop the `lhs`/`rhs` operands still sitting beneath the topmost
/// result after flag folding, leaving only the result on the stack.
fn discard_preserved_binary_operands(out: &mut Vec<Command>, size: IrSize) {
    out.push(Command::Carry { size, depth: size.tob() * 2 });
    out.push(Command::Pop { size, dest: None });
    out.push(Command::Pop { size, dest: None });
}

/// Shared skeleton for the flag-computing binary generators: run `raw`
/// preserved, push a zero accumulator, splice in each flag snippet from
/// `flags`, commit the accumulator to the real flag register, then
/// clean up the stack per `keep_result`.
fn binary_with_flags(
    raw: Command,
    size: IrSize,
    flags: impl Fn(OperandDepths, IrSize) -> Vec<Vec<Command>>,
    keep_result: bool,
) -> Vec<Command> {
    let mut out = vec![raw];
    out.push(Command::Push { value: PushValue::Imm(0), size: IrSize::Bit64 });

    let depths = OperandDepths { result: 1, rhs: Some(2), lhs: 3 };
    for snippet in flags(depths, size) {
        out.extend(snippet);
    }

    out.push(Command::ContextRflagsStore { relevant_flags: CF_OF_SF_ZF_PF });
    if keep_result {
        discard_preserved_binary_operands(&mut out, size);
    } else {
        // no result to keep: the raw op's output and both operands are
        // all scratch now.
        out.push(Command::Pop { size, dest: None });
        out.push(Command::Pop { size, dest: None });
        out.push(Command::Pop { size, dest: None });
    }
    out
}

fn add_sub_flags(depths: OperandDepths, size: IrSize, is_add: bool) -> Vec<Vec<Command>> {
    let mut snippets = vec![calculate_sf(depths, size), calculate_zf(depths, size), calculate_pf(depths, size)];
    if is_add {
        snippets.push(calculate_add_cf(depths, size));
        snippets.push(calculate_add_of(depths, size));
    } else {
        snippets.push(calculate_sub_cf(depths, size));
        snippets.push(calculate_sub_of(depths, size));
    }
    snippets
}

/// `add`/`sub`: CF/OF computed from the overflow/borrow rules, SF/ZF/PF
/// from the raw result.
struct AddSubGenerator {
    is_add: bool,
}

impl HandlerGenerator for AddSubGenerator {
    fn signatures(&self) -> &[&[IrSize]] {
        &[&[IrSize::Bit8, IrSize::Bit8], &[IrSize::Bit16, IrSize::Bit16], &[IrSize::Bit32, IrSize::Bit32], &[IrSize::Bit64, IrSize::Bit64]]
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let raw = if self.is_add {
            Command::Add { size, preserved: true }
        } else {
            Command::Sub { size, preserved: true }
        };
        Ok(binary_with_flags(raw, size, |d, s| add_sub_flags(d, s, self.is_add), true))
    }
}

/// `and`/`or`/`xor`: hardware always clears CF and OF for these, SF/ZF/PF
/// come from the raw bitwise result.
struct BitwiseGenerator {
    mnemonic: VmMnemonic,
}

impl HandlerGenerator for BitwiseGenerator {
    fn signatures(&self) -> &[&[IrSize]] {
        &[&[IrSize::Bit8, IrSize::Bit8], &[IrSize::Bit16, IrSize::Bit16], &[IrSize::Bit32, IrSize::Bit32], &[IrSize::Bit64, IrSize::Bit64]]
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let raw = match self.mnemonic {
            VmMnemonic::And => Command::And { size, preserved: true },
            VmMnemonic::Or => Command::Or { size, preserved: true },
            VmMnemonic::Xor => Command::Xor { size, preserved: true },
            other => unreachable!("bitwise generator registered for {other:?}"),
        };
        let depths = OperandDepths { result: 1, rhs: Some(2), lhs: 3 };
        Ok(binary_with_flags(
            raw,
            size,
            move |_, s| vec![calculate_sf(depths, s), calculate_zf(depths, s), calculate_pf(depths, s)],
            true,
        ))
    }
}

/// `cmp`: identical flag computation to `sub`, but the subtraction
/// result itself is never written back anywhere.
struct CmpGenerator;

impl HandlerGenerator for CmpGenerator {
    fn signatures(&self) -> &[&[IrSize]] {
        &[&[IrSize::Bit8, IrSize::Bit8], &[IrSize::Bit16, IrSize::Bit16], &[IrSize::Bit32, IrSize::Bit32], &[IrSize::Bit64, IrSize::Bit64]]
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let raw = Command::Sub { size, preserved: true };
        Ok(binary_with_flags(raw, size, |d, s| add_sub_flags(d, s, false), false))
    }
}

pub fn register(reg: &mut HandlerGeneratorRegistry) {
    reg.register(VmMnemonic::Add, Box::new(AddSubGenerator { is_add: true }));
    reg.register(VmMnemonic::Sub, Box::new(AddSubGenerator { is_add: false }));
    reg.register(VmMnemonic::And, Box::new(BitwiseGenerator { mnemonic: VmMnemonic::And }));
    reg.register(VmMnemonic::Or, Box::new(BitwiseGenerator { mnemonic: VmMnemonic::Or }));
    reg.register(VmMnemonic::Xor, Box::new(BitwiseGenerator { mnemonic: VmMnemonic::Xor }));
    reg.register(VmMnemonic::Cmp, Box::new(CmpGenerator));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_generator_produces_a_nonempty_body_for_every_width() {
        let gen = AddSubGenerator { is_add: true };
        for size in ALL_WIDTHS {
            let body = gen.generate(&[size, size]).unwrap();
            assert!(!body.is_empty());
            assert!(matches!(body.last().unwrap(), Command::Pop { .. }));
        }
    }

    #[test]
    fn cmp_generator_leaves_nothing_behind_to_write_back() {
        let body = CmpGenerator.generate(&[IrSize::Bit32, IrSize::Bit32]).unwrap();
        let pops = body.iter().filter(|c| matches!(c, Command::Pop { .. })).count();
        assert_eq!(pops, 3);
    }

    /// A generated body isn't just non-empty: run it and check the CF/OF
    /// bits it actually commits match the architectural result, for both
    /// an overflowing and a non-overflowing input.
    #[cfg(feature = "test-helpers")]
    #[test]
    fn add_generator_body_sets_cf_only_on_unsigned_overflow() {
        use crate::ir::X86Flag;
        use crate::sim::SimState;

        let run = |lhs: u64, rhs: u64| -> SimState {
            let gen = AddSubGenerator { is_add: true };
            let body = gen.generate(&[IrSize::Bit32, IrSize::Bit32]).unwrap();
            let mut commands = vec![
                Command::Push { value: PushValue::Imm(lhs), size: IrSize::Bit32 },
                Command::Push { value: PushValue::Imm(rhs), size: IrSize::Bit32 },
            ];
            commands.extend(body);
            let mut sim = SimState::new();
            sim.run(&commands, &HandlerGeneratorRegistry::new()).unwrap();
            sim
        };

        let overflow = run(0xFFFF_FFFF, 1);
        assert_ne!(overflow.rflags() & X86Flag::Cf.mask(), 0);
        let in_range = run(5, 3);
        assert_eq!(in_range.rflags() & X86Flag::Cf.mask(), 0);
    }

    /// Same check for `cmp`'s CF, specifically on the equal-operands
    /// boundary a non-strict `Le` alone gets wrong.
    #[cfg(feature = "test-helpers")]
    #[test]
    fn cmp_generator_body_clears_cf_on_equal_operands() {
        use crate::ir::X86Flag;
        use crate::sim::SimState;

        let body = CmpGenerator.generate(&[IrSize::Bit32, IrSize::Bit32]).unwrap();
        let mut commands = vec![
            Command::Push { value: PushValue::Imm(5), size: IrSize::Bit32 },
            Command::Push { value: PushValue::Imm(5), size: IrSize::Bit32 },
        ];
        commands.extend(body);
        let mut sim = SimState::new();
        sim.run(&commands, &HandlerGeneratorRegistry::new()).unwrap();
        assert_eq!(sim.rflags() & X86Flag::Cf.mask(), 0);
        assert_eq!(sim.stack_depth(), 0);
    }
}
