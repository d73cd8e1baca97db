//! Lifters for `push`/`pop`: the guest's own x86 stack operations,
//! distinct from the VM's internal `push`/`pop` IR primitives (spec.md
//! §4.8) even though they lower through the same ones.

use eaglevm_asm::Reg;
use eaglevm_types::IrSize;
use iced_x86::Mnemonic as Iced;

use crate::error::Result;
use crate::ir::{BlockBuilder, Command, VmMnemonic};

use super::{finalize_write_back, handler_call, operand_size, translate_operand, Lifter, LifterRegistry, WriteBack};

/// `push src`: `rsp -= width; [rsp] = src` at the guest's own x86 level,
/// materialized through the virtual `rsp` register like any other
/// context-bound GPR rather than a dedicated VM stack primitive.
struct PushLifter;

impl Lifter for PushLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Push
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr).max(IrSize::Bit64);
        translate_operand(instr, 0, size, out)?;

        let rsp = Reg::new(iced_x86::Register::RSP);
        out.add(Command::ContextLoad { reg: rsp });
        out.add_push_imm(size.tob() as u64, IrSize::Bit64);
        out.add(handler_call(VmMnemonic::Sub, &[IrSize::Bit64, IrSize::Bit64]));
        out.add(Command::Dup { size: IrSize::Bit64 });
        out.add(Command::ContextStore { reg: rsp, size: IrSize::Bit64 });

        // stack: [.., value, new_rsp] -> carry the address under the
        // value, then store.
        out.add(Command::Carry { size, depth: IrSize::Bit64.tob() });
        out.add(Command::MemWrite { value_size: size, write_size: size, value_nearest: true });
        Ok(())
    }
}

/// `pop dst`: `dst = [rsp]; rsp += width`.
struct PopLifter;

impl Lifter for PopLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Pop
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr).max(IrSize::Bit64);
        let rsp = Reg::new(iced_x86::Register::RSP);

        out.add(Command::ContextLoad { reg: rsp });
        out.add(Command::MemRead { size });

        out.add(Command::ContextLoad { reg: rsp });
        out.add_push_imm(size.tob() as u64, IrSize::Bit64);
        out.add(handler_call(VmMnemonic::Add, &[IrSize::Bit64, IrSize::Bit64]));
        out.add(Command::ContextStore { reg: rsp, size: IrSize::Bit64 });

        let dest = match instr.raw().op0_kind() {
            iced_x86::OpKind::Register => WriteBack::Register(Reg::new(instr.raw().op0_register())),
            _ => {
                super::push_memory_address_pub(instr, out)?;
                out.add(Command::Carry { size, depth: IrSize::Bit64.tob() });
                WriteBack::Memory { size }
            }
        };
        finalize_write_back(dest, out);
        Ok(())
    }
}

pub(super) fn register_stack_lifters(reg: &mut LifterRegistry) {
    reg.register("push", Iced::Push, Box::new(PushLifter));
    reg.register("pop", Iced::Pop, Box::new(PopLifter));
}
