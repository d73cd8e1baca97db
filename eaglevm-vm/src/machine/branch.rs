//! Lowering for the three terminator commands (spec.md §4.4 `jmp`/`branch`,
//! §4.7 `vm_exit`): `Command::Jmp`, `Command::Branch`, and the
//! `ExitTarget` resolution both it and `prologue::vm_exit` share.

use std::collections::HashMap;

use eaglevm_asm::{zimm, zreg, CodeContainer, Condition, Label, Mnemonic as AsmMnemonic, Operand, VmRegRole};

use crate::error::Result;
use crate::ir::{BlockId, ExitCondition, ExitTarget};

use super::Machine;

/// A bare `jmp` with no encoded target (spec.md's fallthrough terminator)
/// falls through to whatever block is appended next in `container` — the
/// block-sequencing driver that decides that order is out of scope here
/// (spec.md §8 Non-goals). A `jmp` to a known successor block mints or
/// reuses that block's label.
pub(super) fn lower_jmp(
    machine: &mut Machine,
    container: &mut CodeContainer,
    block_labels: &mut HashMap<BlockId, Label>,
    target: Option<BlockId>,
) -> Result<()> {
    match target {
        None => Ok(()),
        Some(id) => jump_to_target(machine, container, block_labels, ExitTarget::Block(id)),
    }
}

/// Lower a conditional terminator. `jcxz`/`jecxz`/`jrcxz` have no real
/// inverted form and no flags dependency, so they're synthesized from a
/// `test`/`jz` pair on the gathered virtual counter register rather than
/// through the flags-reload path the other conditions take.
pub(super) fn lower_branch(
    machine: &mut Machine,
    container: &mut CodeContainer,
    block_labels: &mut HashMap<BlockId, Label>,
    condition: ExitCondition,
    default: ExitTarget,
    special: Option<ExitTarget>,
    inverted: bool,
) -> Result<()> {
    match condition {
        ExitCondition::Jmp => jump_to_target(machine, container, block_labels, special.unwrap_or(default)),
        ExitCondition::Jcxz => lower_jcxz(machine, container, block_labels, iced_x86::Register::CX, default, special),
        ExitCondition::Jecxz => lower_jcxz(machine, container, block_labels, iced_x86::Register::ECX, default, special),
        ExitCondition::Jrcxz => lower_jcxz(machine, container, block_labels, iced_x86::Register::RCX, default, special),
        _ => lower_real_condition(machine, container, block_labels, condition, default, special, inverted),
    }
}

fn lower_jcxz(
    machine: &mut Machine,
    container: &mut CodeContainer,
    block_labels: &mut HashMap<BlockId, Label>,
    guest_cx: iced_x86::Register,
    default: ExitTarget,
    special: Option<ExitTarget>,
) -> Result<()> {
    let val = super::registers::gather(machine, container, eaglevm_asm::Reg::new(guest_cx))?;
    machine.emit(container, AsmMnemonic::Test, vec![zreg(val), zreg(val)]);
    machine.gpr_ctx.release(val);

    // taken (jump) when the gathered counter is zero.
    branch_on(machine, container, block_labels, Condition::E, default, special)
}

fn lower_real_condition(
    machine: &mut Machine,
    container: &mut CodeContainer,
    block_labels: &mut HashMap<BlockId, Label>,
    condition: ExitCondition,
    default: ExitTarget,
    special: Option<ExitTarget>,
    inverted: bool,
) -> Result<()> {
    machine.lower_rflags_load(container)?;

    let positive = to_asm_condition(condition);
    let asm_cond = if inverted { invert(positive) } else { positive };
    branch_on(machine, container, block_labels, asm_cond, default, special)
}

/// Emit `jcc asm_cond, <taken path>` then fall through into the not-taken
/// path, both resolved through [`jump_to_target`].
fn branch_on(
    machine: &mut Machine,
    container: &mut CodeContainer,
    block_labels: &mut HashMap<BlockId, Label>,
    asm_cond: Condition,
    not_taken: ExitTarget,
    taken: Option<ExitTarget>,
) -> Result<()> {
    let taken_label = Label::fresh();
    machine.emit(container, AsmMnemonic::Jcc(asm_cond), vec![Operand::Label(taken_label)]);
    jump_to_target(machine, container, block_labels, not_taken)?;
    container.bind_label(taken_label);
    jump_to_target(machine, container, block_labels, taken.unwrap_or(not_taken))
}

/// Resolve and emit a jump to `target`: a successor block's label, or a
/// raw RVA resolved against `vbase` per `Settings::relative_addressing`.
pub(super) fn jump_to_target(
    machine: &mut Machine,
    container: &mut CodeContainer,
    block_labels: &mut HashMap<BlockId, Label>,
    target: ExitTarget,
) -> Result<()> {
    match target {
        ExitTarget::Block(id) => {
            let label = *block_labels.entry(id).or_insert_with(Label::fresh);
            machine.emit(container, AsmMnemonic::Jmp, vec![Operand::Label(label)]);
            Ok(())
        }
        ExitTarget::Rva(addr) => {
            if machine.settings().relative_addressing {
                let vbase = machine.vm_reg(VmRegRole::Vbase);
                let scratch = machine.gpr_ctx.get_any()?;
                let mem = eaglevm_asm::zmem(Some(vbase), None, 1, addr as i64, eaglevm_types::RegSize::Bit64);
                machine.emit(container, AsmMnemonic::Lea, vec![zreg(scratch), mem]);
                machine.emit(container, AsmMnemonic::Jmp, vec![zreg(scratch)]);
                machine.gpr_ctx.release(scratch);
            } else {
                let scratch = machine.gpr_ctx.get_any()?;
                machine.emit(container, AsmMnemonic::Mov, vec![zreg(scratch), zimm(addr as i64, false)]);
                machine.emit(container, AsmMnemonic::Push, vec![zreg(scratch)]);
                machine.gpr_ctx.release(scratch);
                machine.emit(container, AsmMnemonic::Ret, vec![]);
            }
            Ok(())
        }
    }
}

fn to_asm_condition(condition: ExitCondition) -> Condition {
    match condition {
        ExitCondition::Jo => Condition::O,
        ExitCondition::Js => Condition::S,
        ExitCondition::Je => Condition::E,
        ExitCondition::Jb => Condition::B,
        ExitCondition::Jbe => Condition::Be,
        ExitCondition::Jl => Condition::L,
        ExitCondition::Jle => Condition::Le,
        ExitCondition::Jp => Condition::P,
        ExitCondition::Jmp | ExitCondition::Jcxz | ExitCondition::Jecxz | ExitCondition::Jrcxz => {
            unreachable!("handled by lower_branch's own match arms")
        }
    }
}

fn invert(cond: Condition) -> Condition {
    match cond {
        Condition::O => Condition::No,
        Condition::No => Condition::O,
        Condition::B => Condition::Ae,
        Condition::Ae => Condition::B,
        Condition::E => Condition::Ne,
        Condition::Ne => Condition::E,
        Condition::Be => Condition::A,
        Condition::A => Condition::Be,
        Condition::S => Condition::Ns,
        Condition::Ns => Condition::S,
        Condition::P => Condition::Np,
        Condition::Np => Condition::P,
        Condition::L => Condition::Ge,
        Condition::Ge => Condition::L,
        Condition::Le => Condition::G,
        Condition::G => Condition::Le,
    }
}
