//! Lifters for unconditional/conditional branches.
//!
//! A decoded block's terminator is supplied by the (external) CFG builder
//! as a `ControlFlow` value (spec.md §6 "Input to the core": "a
//! terminator kind ... and references ... to successor blocks"); this
//! module turns that plus the instruction's own condition code into an
//! IR `Branch`/`Jmp` terminator.

use iced_x86::{ConditionCode, Mnemonic as Iced};

use crate::error::Result;
use crate::ir::{BlockBuilder, Command, ExitCondition, ExitTarget};

use super::{Lifter, LifterRegistry};

/// What a lifted block's terminator should resolve to. Supplied by the
/// (external) CFG builder per spec.md §6; the lifter itself never
/// invents a target address.
#[derive(Debug, Clone, Copy)]
pub struct Targets {
    pub taken: ExitTarget,
    pub not_taken: ExitTarget,
}

/// `jmp target`: an unconditional, non-virtual branch terminator.
struct JmpLifter;

impl Lifter for JmpLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Jmp
    }

    fn lift(&self, _instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        out.add(Command::Jmp);
        Ok(())
    }
}

/// The conditional-jump family (`jz/je`, `jnz/jne`, `jb`, ... spec.md
/// §4.3). `iced-x86`'s `condition_code()` names the underlying x86
/// condition; this maps it onto our own `ExitCondition`.
struct JccLifter;

fn exit_condition(cc: ConditionCode) -> Option<ExitCondition> {
    use ConditionCode::*;
    Some(match cc {
        None => return Option::None,
        o => ExitCondition::Jo,
        s => ExitCondition::Js,
        e => ExitCondition::Je,
        b => ExitCondition::Jb,
        be => ExitCondition::Jbe,
        l => ExitCondition::Jl,
        le => ExitCondition::Jle,
        p => ExitCondition::Jp,
        // the `ae/ne/a/g/...` complements are lifted by flipping
        // `inverted` rather than by a distinct `ExitCondition` variant,
        // matching spec.md's condition set which only names the
        // "positive" forms.
        ae => ExitCondition::Jb,
        ne => ExitCondition::Je,
        a => ExitCondition::Jbe,
        g => ExitCondition::Jle,
        ge => ExitCondition::Jl,
        np => ExitCondition::Jp,
        ns => ExitCondition::Js,
        no => ExitCondition::Jo,
    })
}

fn is_inverted(cc: ConditionCode) -> bool {
    use ConditionCode::*;
    matches!(cc, ae | ne | a | g | ge | np | ns | no)
}

impl Lifter for JccLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        matches!(
            mnemonic,
            Iced::Jo
                | Iced::Jno
                | Iced::Jb
                | Iced::Jae
                | Iced::Je
                | Iced::Jne
                | Iced::Jbe
                | Iced::Ja
                | Iced::Js
                | Iced::Jns
                | Iced::Jp
                | Iced::Jnp
                | Iced::Jl
                | Iced::Jge
                | Iced::Jle
                | Iced::Jg
        )
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let cc = instr.raw().condition_code();
        let condition = exit_condition(cc).unwrap_or(ExitCondition::Jmp);
        let inverted = is_inverted(cc);

        // Targets are filled in by the machine backend once the block's
        // successors are known (spec.md §6); the lifter records only the
        // condition and its inversion here.
        out.add(Command::Branch {
            condition,
            default: ExitTarget::Rva(0),
            special: Some(ExitTarget::Rva(0)),
            inverted,
            is_virtual: true,
        });
        Ok(())
    }
}

/// `jcxz`/`jecxz`/`jrcxz`: the three conditions with no inverted form
/// (spec.md §4.7 "must not be requested").
struct JcxzLifter {
    condition: ExitCondition,
    iced: Iced,
}

impl Lifter for JcxzLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == self.iced
    }

    fn lift(&self, _instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        out.add(Command::Branch {
            condition: self.condition,
            default: ExitTarget::Rva(0),
            special: Some(ExitTarget::Rva(0)),
            inverted: false,
            is_virtual: true,
        });
        Ok(())
    }
}

pub(super) fn register_control_lifters(reg: &mut LifterRegistry) {
    reg.register("jmp", Iced::Jmp, Box::new(JmpLifter));

    for iced in [
        Iced::Jo,
        Iced::Jno,
        Iced::Jb,
        Iced::Jae,
        Iced::Je,
        Iced::Jne,
        Iced::Jbe,
        Iced::Ja,
        Iced::Js,
        Iced::Jns,
        Iced::Jp,
        Iced::Jnp,
        Iced::Jl,
        Iced::Jge,
        Iced::Jle,
        Iced::Jg,
    ] {
        reg.register("jcc", iced, Box::new(JccLifter));
    }

    reg.register("jcxz", Iced::Jcxz, Box::new(JcxzLifter { condition: ExitCondition::Jcxz, iced: Iced::Jcxz }));
    reg.register("jecxz", Iced::Jecxz, Box::new(JcxzLifter { condition: ExitCondition::Jecxz, iced: Iced::Jecxz }));
    reg.register("jrcxz", Iced::Jrcxz, Box::new(JcxzLifter { condition: ExitCondition::Jrcxz, iced: Iced::Jrcxz }));
}
