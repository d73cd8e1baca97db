//! Lifters for the binary ALU family plus the unary `not`/`neg`/`popcnt`
//! mnemonics (grounded on `shr.cpp`'s lifter half: translate each operand
//! onto the stack, call the matching `handler_call`, write the result back).

use eaglevm_asm::Reg;
use eaglevm_types::IrSize;
use iced_x86::Mnemonic as Iced;

use crate::error::Result;
use crate::ir::{BlockBuilder, Command, PushValue};

use super::{finalize_write_back, handler_call, operand_size, translate_operand, Lifter, LifterRegistry, WriteBack};
use crate::ir::VmMnemonic;

/// Lift a two-operand `dst, src` ALU instruction whose semantics are
/// implemented by a single `handler_call` to `mnemonic`, with a
/// write-back to operand 0 afterward (matching `finalize_translate_to_virtual`).
struct BinaryAluLifter {
    iced: Iced,
    vm: VmMnemonic,
}

impl Lifter for BinaryAluLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == self.iced
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr);
        let dest = translate_operand(instr, 0, size, out)?;
        translate_operand(instr, 1, size, out)?;
        out.add(handler_call(self.vm, &[size, size]));
        finalize_write_back(dest, out);
        Ok(())
    }
}

/// `cmp`/`test`: runs the comparison handler but never writes a result
/// back to operand 0 (spec.md §4.5: "for cmp, test — no write-back").
struct CompareLifter {
    iced: Iced,
    is_test: bool,
}

impl Lifter for CompareLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == self.iced
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr);
        translate_operand(instr, 0, size, out)?;
        translate_operand(instr, 1, size, out)?;
        if self.is_test {
            out.add(handler_call(VmMnemonic::And, &[size, size]));
            out.add(Command::Pop { size, dest: None });
        } else {
            out.add(Command::Cmp { size });
        }
        Ok(())
    }
}

/// `not dst`: bitwise complement, `dst ^ -1`.
struct NotLifter;

impl Lifter for NotLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Not
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr);
        let dest = translate_operand(instr, 0, size, out)?;
        out.add(Command::Push { value: PushValue::Imm(u64::MAX), size });
        out.add(handler_call(VmMnemonic::Xor, &[size, size]));
        finalize_write_back(dest, out);
        Ok(())
    }
}

/// `neg dst` is `0 - dst`; lifted directly rather than through `abs` so
/// the result carries `neg`'s own flag semantics (CF = dst != 0).
struct NegLifter;

impl Lifter for NegLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Neg
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr);
        out.add_push_imm(0, size);
        let dest = translate_operand(instr, 0, size, out)?;
        out.add(handler_call(VmMnemonic::Sub, &[size, size]));
        finalize_write_back(dest, out);
        Ok(())
    }
}

/// `popcnt dst, src` lowers to the `cnt` handler (spec.md §4.4 `cnt`).
struct PopcntLifter;

impl Lifter for PopcntLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Popcnt
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr);
        translate_operand(instr, 1, size, out)?;
        out.add(handler_call(VmMnemonic::Cnt, &[size]));
        let dest_reg = Reg::new(instr.raw().op0_register());
        finalize_write_back(WriteBack::Register(dest_reg), out);
        Ok(())
    }
}

/// Two-operand `imul dst, src` lowers to the `smul` handler (spec.md §5
/// supplement: "imul's two-operand form ... lifted in terms of existing
/// push/pop/smul IR commands rather than a bespoke command").
struct ImulLifter;

impl Lifter for ImulLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Imul
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr);
        let dest = translate_operand(instr, 0, size, out)?;
        translate_operand(instr, 1, size, out)?;
        out.add(handler_call(VmMnemonic::Smul, &[size, size]));
        finalize_write_back(dest, out);
        Ok(())
    }
}

/// `movzx`/`movsx dst, src`: widen `src` onto the stack (zero- or
/// sign-extending), then write straight back to `dst` without an
/// intervening `handler_call` (there is no arithmetic to perform).
struct MovExtendLifter {
    signed: bool,
}

impl Lifter for MovExtendLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        matches!(mnemonic, Iced::Movzx | Iced::Movsx | Iced::Movsxd)
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let raw = instr.raw();
        let src_size = if raw.op_kind(1) == iced_x86::OpKind::Memory {
            IrSize::from_bytes(raw.memory_size().size())
        } else {
            Reg::new(raw.op_register(1)).size_of().into()
        };
        let dst_size: IrSize = Reg::new(raw.op0_register()).size_of().into();

        translate_operand(instr, 1, src_size, out)?;
        if src_size != dst_size {
            if self.signed {
                out.add(Command::Sx { to: dst_size, from: src_size });
            } else {
                out.add(Command::Resize { to: dst_size, from: src_size });
            }
        }

        let dest_reg = Reg::new(raw.op0_register());
        finalize_write_back(WriteBack::Register(dest_reg), out);
        Ok(())
    }
}

/// `mov dst, src`: a pure data move, no `handler_call` needed.
struct MovLifter;

impl Lifter for MovLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Mov
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        let size = operand_size(instr);
        let dest = translate_operand(instr, 0, size, out)?;
        translate_operand(instr, 1, size, out)?;
        // drop whatever translate_operand(0) put on the stack for a
        // memory destination's address-only half; the value we write
        // back is operand 1's.
        match dest {
            WriteBack::Register(reg) => {
                out.add(Command::ContextStore { reg, size: reg.size_of().into() });
            }
            WriteBack::Memory { size } => {
                out.add(Command::Carry { size: IrSize::Bit64, depth: 1 });
                out.add(Command::MemWrite { value_size: size, write_size: size, value_nearest: true });
            }
            WriteBack::None => {}
        }
        Ok(())
    }
}

/// `lea dst, [mem]`: writes the *address* of the memory operand, never
/// dereferencing it.
struct LeaLifter;

impl Lifter for LeaLifter {
    fn matches(&self, mnemonic: Iced) -> bool {
        mnemonic == Iced::Lea
    }

    fn lift(&self, instr: &eaglevm_asm::DecodedInstruction, out: &mut BlockBuilder) -> Result<()> {
        super::push_memory_address_pub(instr, out)?;
        let dest_reg = Reg::new(instr.raw().op0_register());
        out.add(Command::ContextStore { reg: dest_reg, size: dest_reg.size_of().into() });
        Ok(())
    }
}

pub(super) fn register_alu_lifters(reg: &mut LifterRegistry) {
    let binary = [
        (Iced::Add, VmMnemonic::Add, "add"),
        (Iced::Sub, VmMnemonic::Sub, "sub"),
        (Iced::And, VmMnemonic::And, "and"),
        (Iced::Or, VmMnemonic::Or, "or"),
        (Iced::Xor, VmMnemonic::Xor, "xor"),
        (Iced::Shl, VmMnemonic::Shl, "shl"),
        (Iced::Shr, VmMnemonic::Shr, "shr"),
    ];
    for (iced, vm, name) in binary {
        reg.register(name, iced, Box::new(BinaryAluLifter { iced, vm }));
    }

    reg.register("cmp", Iced::Cmp, Box::new(CompareLifter { iced: Iced::Cmp, is_test: false }));
    reg.register("test", Iced::Test, Box::new(CompareLifter { iced: Iced::Test, is_test: true }));

    reg.register("not", Iced::Not, Box::new(NotLifter));
    reg.register("neg", Iced::Neg, Box::new(NegLifter));
    reg.register("popcnt", Iced::Popcnt, Box::new(PopcntLifter));
    reg.register("imul", Iced::Imul, Box::new(ImulLifter));
    reg.register("movzx", Iced::Movzx, Box::new(MovExtendLifter { signed: false }));
    reg.register("movsx", Iced::Movsx, Box::new(MovExtendLifter { signed: true }));
    reg.register("movsxd", Iced::Movsxd, Box::new(MovExtendLifter { signed: true }));
    reg.register("mov", Iced::Mov, Box::new(MovLifter));
    reg.register("lea", Iced::Lea, Box::new(LeaLifter));
}
