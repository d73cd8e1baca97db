//! Translates decoded x86 instructions into IR command sequences.
//!
//! Grounded on the original's per-mnemonic lifters (`shr.cpp`'s
//! `translate_to_virtual`/`finalize_translate_to_virtual` pair): every
//! lifter here follows the same three-step shape — translate each
//! operand onto the IR stack, emit a `handler_call` (or, for `mov`-like
//! moves and control flow, the terminal commands directly), then write
//! the result back to wherever operand 0 came from.

use std::collections::HashMap;

use eaglevm_asm::{DecodedInstruction, Reg};
use eaglevm_types::IrSize;
use iced_x86::{Mnemonic as IcedMnemonic, OpKind, Register as IcedReg};

use crate::error::{Error, Result};
use crate::ir::{
    BlockBuilder, Command, ExitCondition, ExitTarget, HandlerSignature, PushValue, VmMnemonic,
};

mod alu;
mod control;
mod stack;

pub use alu::*;
pub use control::*;
pub use stack::*;

/// Where operand 0 of an instruction came from, so the lifter knows how
/// to write its result back (`finalize_translate_to_virtual`'s dispatch
/// in the original).
#[derive(Debug, Clone, Copy)]
pub enum WriteBack {
    /// Destination was a register: write back with `context_store`.
    Register(Reg),
    /// Destination was memory: the address is already sitting on the IR
    /// stack underneath the result, reachable with `carry` + `mem_write`.
    Memory { size: IrSize },
    /// No write-back (e.g. `cmp`, `test`).
    None,
}

/// Translates one instruction operand onto the IR value stack.
///
/// `force_both` mirrors the original's `translate_mem_action`'s `both`
/// flag: operand 0 of a read-modify-write instruction must come back as
/// a value (for the handler call) even when it's addressed through
/// memory, so the lifter remembers the address for the write-back step.
pub fn translate_operand(
    instr: &DecodedInstruction,
    op_index: u32,
    size: IrSize,
    out: &mut BlockBuilder,
) -> Result<WriteBack> {
    let raw = instr.raw();
    match raw.op_kind(op_index) {
        OpKind::Register => {
            let reg = Reg::new(raw.op_register(op_index));
            out.add(Command::ContextLoad { reg });
            Ok(WriteBack::Register(reg))
        }
        OpKind::Immediate8
        | OpKind::Immediate16
        | OpKind::Immediate32
        | OpKind::Immediate64
        | OpKind::Immediate8to16
        | OpKind::Immediate8to32
        | OpKind::Immediate8to64
        | OpKind::Immediate32to64 => {
            let value = raw.immediate(op_index);
            out.add_push_imm(value, size);
            Ok(WriteBack::None)
        }
        OpKind::Memory => {
            push_memory_address(raw, out)?;
            out.add(Command::Carry { size: IrSize::Bit64, depth: 0 });
            out.add(Command::MemRead { size });
            Ok(WriteBack::Memory { size })
        }
        other => Err(Error::UnsupportedConstruct(format!(
            "operand kind {other:?} at index {op_index}"
        ))),
    }
}

/// Push the effective address of a memory operand, computed through the
/// same `handler_call`-backed arithmetic every other IR value goes
/// through (base + index*scale + disp), so address computation carries
/// the same flag/width semantics as everything else in the block.
pub(crate) fn push_memory_address(raw: &iced_x86::Instruction, out: &mut BlockBuilder) -> Result<()> {
    let base = raw.memory_base();
    let index = raw.memory_index();
    let disp = raw.memory_displacement64() as i64;
    let scale = raw.memory_index_scale();

    let mut have_base = false;
    if base != IcedReg::None {
        out.add(Command::ContextLoad { reg: Reg::new(base) });
        have_base = true;
    }

    if index != IcedReg::None {
        out.add(Command::ContextLoad { reg: Reg::new(index) });
        let shift = scale.trailing_zeros() as u64;
        if shift > 0 {
            out.add_push_imm(shift, IrSize::Bit64);
            out.add(handler_call(VmMnemonic::Shl, &[IrSize::Bit64, IrSize::Bit64]));
        }
        if have_base {
            out.add(handler_call(VmMnemonic::Add, &[IrSize::Bit64, IrSize::Bit64]));
        }
        have_base = true;
    }

    if disp != 0 || !have_base {
        out.add_push_imm(disp as u64, IrSize::Bit64);
        if have_base {
            out.add(handler_call(VmMnemonic::Add, &[IrSize::Bit64, IrSize::Bit64]));
        }
    }

    Ok(())
}

/// Build a `handler_call` command for `mnemonic` over operands of the
/// given sizes.
pub fn handler_call(mnemonic: VmMnemonic, sizes: &[IrSize]) -> Command {
    Command::HandlerCall {
        mnemonic,
        signature: HandlerSignature::new(mnemonic, sizes),
    }
}

/// Write the top-of-stack IR value back to wherever operand 0 came from
/// (`finalize_translate_to_virtual`).
///
/// Every `handler_call` in this backend is defined to consume exactly its
/// declared operands and produce exactly one result (spec.md §4.4: "each
/// command declares the number and sizes of values it consumes from and
/// produces"), so unlike the original's `shr.cpp` there is never leftover
/// operand scratch for the lifter to clean up here — a handler generator
/// that needs operands preserved for its own flag math is responsible for
/// popping them again before it returns.
pub fn finalize_write_back(dest: WriteBack, out: &mut BlockBuilder) {
    match dest {
        WriteBack::Register(reg) => {
            // x86's rule that a 32-bit register write zero-extends into
            // the full 64-bit GPR: resize before the context_store, which
            // always writes 64 bits into the virtual register file.
            if reg.size_of() == eaglevm_types::RegSize::Bit32 {
                out.add(Command::Resize { to: IrSize::Bit64, from: IrSize::Bit32 });
                out.add(Command::ContextStore { reg: reg.to_width(eaglevm_types::RegSize::Bit64), size: IrSize::Bit64 });
            } else {
                out.add(Command::ContextStore { reg, size: reg.size_of().into() });
            }
        }
        WriteBack::Memory { size } => {
            // stack is [.., address, result]; carry the result down past
            // the one intervening 64-bit address slot so mem_write can
            // pop address then value in its expected order.
            out.add(Command::Carry { size, depth: IrSize::Bit64.tob() });
            out.add(Command::MemWrite { value_size: size, write_size: size, value_nearest: true });
        }
        WriteBack::None => {}
    }
}

/// Converts one decoded x86 instruction into an IR command sequence,
/// appended to `out`. The registry only calls a lifter whose
/// [`Lifter::matches`] accepted the instruction's `iced_x86::Mnemonic`.
pub trait Lifter: Send + Sync {
    /// `iced-x86` mnemonics this lifter accepts.
    fn matches(&self, mnemonic: IcedMnemonic) -> bool;

    /// Emit this instruction's IR into `out`.
    fn lift(&self, instr: &DecodedInstruction, out: &mut BlockBuilder) -> Result<()>;
}

/// Dispatches a decoded instruction to the [`Lifter`] registered for its
/// mnemonic (spec.md §4.3's `LifterRegistry`).
#[derive(Default)]
pub struct LifterRegistry {
    by_name: HashMap<&'static str, Box<dyn Lifter>>,
    order: Vec<(&'static str, IcedMnemonic)>,
}

impl LifterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lifter under a human-readable name (used only for
    /// diagnostics — dispatch itself goes by `iced-x86` mnemonic).
    pub fn register(&mut self, name: &'static str, mnemonic: IcedMnemonic, lifter: Box<dyn Lifter>) {
        self.order.push((name, mnemonic));
        self.by_name.insert(name, lifter);
    }

    /// The full set of mnemonics this backend can lift (spec.md §4.3's
    /// supported-mnemonic list).
    pub fn supported_mnemonics(&self) -> Vec<IcedMnemonic> {
        self.order.iter().map(|(_, m)| *m).collect()
    }

    /// Translate one decoded instruction, or report it as unsupported.
    pub fn lift(&self, instr: &DecodedInstruction) -> Result<crate::ir::Block> {
        let mnemonic = instr.raw().mnemonic();
        let lifter = self
            .order
            .iter()
            .find(|(_, m)| *m == mnemonic)
            .and_then(|(name, _)| self.by_name.get(name))
            .ok_or_else(|| Error::UnsupportedConstruct(format!("no lifter for {mnemonic:?}")))?;

        let mut builder = BlockBuilder::new();
        lifter.lift(instr, &mut builder)?;
        if !builder.last_is_terminator() {
            builder.add(Command::Jmp);
        }
        builder.build()
    }

    /// The registry used by a fresh [`crate::machine::Machine`]: every
    /// mnemonic this backend knows how to lift (spec.md §4.3).
    pub fn with_default_lifters() -> Self {
        let mut reg = Self::new();
        register_alu_lifters(&mut reg);
        register_control_lifters(&mut reg);
        register_stack_lifters(&mut reg);
        reg
    }
}

/// Push a value pulled off a `vm_reg` role (used by a few lifters that
/// need the virtual stack/flags registers directly rather than a decoded
/// operand).
pub fn push_vm_reg(role: eaglevm_asm::VmRegRole, size: IrSize, out: &mut BlockBuilder) {
    out.add_push(PushValue::VmReg(role), size);
}

/// Size in IR terms of a decoded instruction's primary operand, derived
/// from `iced-x86`'s own `op0_kind`/register width when possible and
/// falling back to 64-bit for the constructs this backend treats as
/// full-width.
pub fn operand_size(instr: &DecodedInstruction) -> IrSize {
    let raw = instr.raw();
    if raw.op0_kind() == OpKind::Register {
        Reg::new(raw.op0_register()).size_of().into()
    } else {
        IrSize::from_bytes(raw.memory_size().size())
    }
}

/// Push the effective address of a decoded instruction's memory operand
/// (public entry point for lifters, e.g. `lea`, that need only the
/// address and never dereference it).
pub fn push_memory_address_pub(instr: &DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
    push_memory_address(instr.raw(), out)
}

/// Build a conditional-branch terminator.
pub fn branch_terminator(
    condition: ExitCondition,
    taken: ExitTarget,
    not_taken: ExitTarget,
    is_virtual: bool,
) -> Command {
    Command::Branch {
        condition,
        default: not_taken,
        special: Some(taken),
        inverted: false,
        is_virtual,
    }
}
