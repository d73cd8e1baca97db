//! Thin wrapper over `iced-x86`'s decoder and instruction encoder.
//!
//! This is the only module in the crate that imports `iced_x86::Code`
//! directly; everything above it talks in terms of [`Operand`] and
//! [`Mnemonic`], the way the rest of the backend wants to think about
//! machine code.

use eaglevm_types::RegSize;
use iced_x86::{Code, Decoder, DecoderOptions, Encoder, Instruction, MemoryOperand, Register};

use crate::error::{AsmError, Result};
use crate::operand::Operand;
use crate::reg::RegClass;

/// x86-64 condition codes used by `Jcc`/`Cmovcc`/`Setcc` mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    O,
    No,
    B,
    Ae,
    E,
    Ne,
    Be,
    A,
    S,
    Ns,
    P,
    Np,
    L,
    Ge,
    Le,
    G,
}

/// The instruction mnemonics the backend and handler generator emit.
///
/// This is deliberately not "all of x86-64": it is exactly the set that
/// has a lifter or handler-generator caller somewhere in `eaglevm-vm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Mov,
    Lea,
    Add,
    Sub,
    And,
    Or,
    Xor,
    Not,
    Neg,
    Shl,
    Shr,
    Sar,
    Ror,
    Rol,
    Cmp,
    Test,
    Push,
    Pop,
    Pushfq,
    Popfq,
    Movq,
    Movdqu,
    Psrldq,
    Pshufd,
    /// Bitwise OR of two XMM registers; stands in for a blend instruction
    /// when the register file's bit-scatter codegen recombines two
    /// independently rebuilt halves of one physical XMM register.
    Por,
    Jmp,
    Jcc(Condition),
    Call,
    Bsr,
    Popcnt,
    Cbw,
    Cwde,
    Cdqe,
    Cmovcc(Condition),
    Setcc(Condition),
    Imul,
    /// Near return; used only by the position-independent call/return
    /// convention the machine backend builds on top of `vcs`/`vcsret`
    /// (see `Settings::relative_addressing`).
    Ret,
}

/// A decoded instruction, read back from a byte slice.
pub struct DecodedInstruction {
    inner: Instruction,
}

impl DecodedInstruction {
    /// Mnemonic of the decoded instruction, in `iced-x86`'s own naming.
    pub fn code(&self) -> Code {
        self.inner.code()
    }

    /// Length of the encoded instruction, in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether this instruction is zero bytes long (always false for a
    /// successfully decoded instruction; kept for clippy's `len_without_is_empty`).
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Instruction pointer the decoder was told this instruction starts at.
    pub fn ip(&self) -> u64 {
        self.inner.ip()
    }

    /// Raw `iced-x86` instruction, for callers that need lower-level access
    /// (the lifter inspects operand kinds directly rather than duplicating
    /// `iced-x86`'s own accessors).
    pub fn raw(&self) -> &Instruction {
        &self.inner
    }
}

/// Decode one instruction from `bytes`, assuming it starts at `ip`.
pub fn decode(bytes: &[u8], bitness: u32, ip: u64) -> Result<DecodedInstruction> {
    let mut decoder = Decoder::with_ip(bitness, bytes, ip, DecoderOptions::NONE);
    if !decoder.can_decode() {
        return Err(AsmError::TruncatedInput(0));
    }
    let inner = decoder.decode();
    if inner.is_invalid() {
        return Err(AsmError::TruncatedInput(inner.len()));
    }
    Ok(DecodedInstruction { inner })
}

/// Decode every instruction in `bytes`, stopping at the first one that
/// doesn't fully fit.
pub fn decode_all(bytes: &[u8], bitness: u32, ip: u64) -> Vec<DecodedInstruction> {
    let mut decoder = Decoder::with_ip(bitness, bytes, ip, DecoderOptions::NONE);
    let mut out = Vec::new();
    while decoder.can_decode() {
        let inner = decoder.decode();
        if inner.is_invalid() {
            break;
        }
        out.push(DecodedInstruction { inner });
    }
    out
}

/// Encodes [`Mnemonic`] + [`Operand`] tuples into machine code.
///
/// Unresolved [`Operand::Label`] operands are the caller's problem: a
/// [`crate::container::CodeContainer`] only calls this once every label
/// reachable from the instruction has a concrete address, substituting a
/// `Operand::Imm` relative displacement (for `Jmp`/`Jcc`/`Call`) before
/// encoding.
pub struct Facade {
    bitness: u32,
}

impl Facade {
    /// Build a facade for 64-bit long mode, the only mode EagleVM targets.
    pub fn new_long_mode() -> Self {
        Self { bitness: 64 }
    }

    /// Encode one instruction, returning its machine code bytes.
    ///
    /// `rip` is the address the instruction will be placed at, needed to
    /// compute RIP-relative displacements for branch mnemonics.
    pub fn encode(&self, mnemonic: Mnemonic, operands: &[Operand], rip: u64) -> Result<Vec<u8>> {
        let instr = self.build(mnemonic, operands)?;
        let mut encoder = Encoder::new(self.bitness);
        encoder
            .encode(&instr, rip)
            .map_err(|e| AsmError::EncoderRejection(e.to_string()))?;
        Ok(encoder.take_buffer())
    }

    fn build(&self, mnemonic: Mnemonic, operands: &[Operand]) -> Result<Instruction> {
        use Mnemonic::*;

        match (mnemonic, operands) {
            (Cbw, []) => Ok(Instruction::with(Code::Cbw)),
            (Cwde, []) => Ok(Instruction::with(Code::Cwde)),
            (Cdqe, []) => Ok(Instruction::with(Code::Cdqe)),
            (Pushfq, []) => Ok(Instruction::with(Code::Pushfq)),
            (Popfq, []) => Ok(Instruction::with(Code::Popfq)),

            (Push, [Operand::Reg(r)]) => Ok(Instruction::with_reg(Code::Push_r64, r.inner())),
            (Pop, [Operand::Reg(r)]) => Ok(Instruction::with_reg(Code::Pop_r64, r.inner())),
            (Not, [Operand::Reg(r)]) => {
                Ok(Instruction::with_reg(not_neg_code(Code::Not_rm64, r.size_of()), r.inner()))
            }
            (Neg, [Operand::Reg(r)]) => {
                Ok(Instruction::with_reg(not_neg_code(Code::Neg_rm64, r.size_of()), r.inner()))
            }

            (Mov, [Operand::Reg(dst), Operand::Reg(src)]) => Ok(Instruction::with_reg_reg(
                mov_rr_code(dst.size_of()),
                dst.inner(),
                src.inner(),
            )),
            (Mov, [Operand::Reg(dst), Operand::Imm { value, .. }]) => Ok(
                Instruction::with_reg_i64(mov_ri_code(dst.size_of()), dst.inner(), *value),
            ),
            (Mov, [Operand::Reg(dst), mem @ Operand::Mem { .. }]) => Ok(Instruction::with_reg_mem(
                mov_load_code(dst.size_of()),
                dst.inner(),
                memory_operand(mem)?,
            )),
            (Mov, [mem @ Operand::Mem { .. }, Operand::Reg(src)]) => Ok(Instruction::with_mem_reg(
                mov_store_code(src.size_of()),
                memory_operand(mem)?,
                src.inner(),
            )),

            (Lea, [Operand::Reg(dst), mem @ Operand::Mem { .. }]) => {
                Ok(Instruction::with_reg_mem(Code::Lea_r64_m, dst.inner(), memory_operand(mem)?))
            }

            (Add | Sub | And | Or | Xor | Cmp | Test, [Operand::Reg(dst), Operand::Reg(src)]) => {
                Ok(Instruction::with_reg_reg(
                    alu_rr_code(mnemonic, dst.size_of()),
                    dst.inner(),
                    src.inner(),
                ))
            }
            (Add | Sub | And | Or | Xor | Cmp | Test, [Operand::Reg(dst), Operand::Imm { value, .. }]) => {
                Ok(Instruction::with_reg_i32(
                    alu_ri_code(mnemonic, dst.size_of()),
                    dst.inner(),
                    *value as i32,
                ))
            }

            (Shl | Shr | Sar | Ror | Rol, [Operand::Reg(dst), Operand::Imm { value, .. }]) => {
                Ok(Instruction::with_reg_i32(
                    shift_code(mnemonic, dst.size_of()),
                    dst.inner(),
                    *value as i32,
                ))
            }
            (Shl | Shr | Sar | Ror | Rol, [Operand::Reg(dst), Operand::Reg(src)])
                if src.inner() == Register::CL =>
            {
                Ok(Instruction::with_reg_reg(
                    shift_cl_code(mnemonic, dst.size_of()),
                    dst.inner(),
                    Register::CL,
                ))
            }

            (Bsr, [Operand::Reg(dst), Operand::Reg(src)]) => {
                Ok(Instruction::with_reg_reg(Code::Bsr_r64_rm64, dst.inner(), src.inner()))
            }
            (Popcnt, [Operand::Reg(dst), Operand::Reg(src)]) => {
                Ok(Instruction::with_reg_reg(Code::Popcnt_r64_rm64, dst.inner(), src.inner()))
            }
            (Imul, [Operand::Reg(dst), Operand::Reg(src)]) => {
                Ok(Instruction::with_reg_reg(Code::Imul_r64_rm64, dst.inner(), src.inner()))
            }
            (Imul, [Operand::Reg(dst), Operand::Reg(src), Operand::Imm { value, .. }]) => {
                Ok(Instruction::with_reg_reg_i32(
                    Code::Imul_r64_rm64_imm32,
                    dst.inner(),
                    src.inner(),
                    *value as i32,
                ))
            }

            (Cmovcc(cond), [Operand::Reg(dst), Operand::Reg(src)]) => {
                Ok(Instruction::with_reg_reg(cmovcc_code(cond), dst.inner(), src.inner()))
            }
            (Setcc(cond), [Operand::Reg(dst)]) => {
                Ok(Instruction::with_reg(setcc_code(cond), dst.inner()))
            }

            (Movq, [Operand::Reg(dst), Operand::Reg(src)]) => {
                match (dst.class_of(), src.class_of()) {
                    (RegClass::Xmm128, RegClass::Gpr64) => Ok(Instruction::with_reg_reg(
                        Code::Movq_xmm_rm64,
                        dst.inner(),
                        src.inner(),
                    )),
                    (RegClass::Gpr64, RegClass::Xmm128) => Ok(Instruction::with_reg_reg(
                        Code::Movq_rm64_xmm,
                        dst.inner(),
                        src.inner(),
                    )),
                    _ => Err(AsmError::WrongRegisterClass(*dst)),
                }
            }
            (Movdqu, [Operand::Reg(dst), Operand::Reg(src)]) => {
                Ok(Instruction::with_reg_reg(Code::Movdqu_xmm_xmmm128, dst.inner(), src.inner()))
            }
            (Por, [Operand::Reg(dst), Operand::Reg(src)]) => {
                Ok(Instruction::with_reg_reg(Code::Por_xmm_xmmm128, dst.inner(), src.inner()))
            }
            (Psrldq, [Operand::Reg(dst), Operand::Imm { value, .. }]) => Ok(
                Instruction::with_reg_i32(Code::Psrldq_xmm_imm8, dst.inner(), *value as i32),
            ),
            (Pshufd, [Operand::Reg(dst), Operand::Reg(src), Operand::Imm { value, .. }]) => {
                Ok(Instruction::with_reg_reg_i32(
                    Code::Pshufd_xmm_xmmm128_imm8,
                    dst.inner(),
                    src.inner(),
                    *value as i32,
                ))
            }

            (Jmp, [Operand::Imm { value, .. }]) => {
                Ok(Instruction::with_branch(Code::Jmp_rel32_64, *value as u64))
            }
            (Jmp, [Operand::Reg(r)]) => Ok(Instruction::with_reg(Code::Jmp_rm64, r.inner())),
            (Ret, []) => Ok(Instruction::with(Code::Retnq)),
            (Jcc(cond), [Operand::Imm { value, .. }]) => {
                Ok(Instruction::with_branch(jcc_code(cond), *value as u64))
            }
            (Call, [Operand::Imm { value, .. }]) => {
                Ok(Instruction::with_branch(Code::Call_rel32_64, *value as u64))
            }

            _ => Err(AsmError::EncoderRejection(format!(
                "no encoding rule for {mnemonic:?} with operands {operands:?}"
            ))),
        }
    }
}

fn memory_operand(operand: &Operand) -> Result<MemoryOperand> {
    match operand {
        Operand::Mem {
            base, index, scale, disp, ..
        } => Ok(MemoryOperand::new(
            base.map(|r| r.inner()).unwrap_or(Register::None),
            index.map(|r| r.inner()).unwrap_or(Register::None),
            u32::from(*scale),
            *disp,
            0,
            false,
            Register::None,
        )),
        _ => unreachable!("memory_operand called on non-memory operand"),
    }
}

fn mov_rr_code(size: RegSize) -> Code {
    match size {
        RegSize::Bit8 => Code::Mov_r8_rm8,
        RegSize::Bit16 => Code::Mov_r16_rm16,
        RegSize::Bit32 => Code::Mov_r32_rm32,
        _ => Code::Mov_r64_rm64,
    }
}

fn mov_load_code(size: RegSize) -> Code {
    mov_rr_code(size)
}

fn mov_store_code(size: RegSize) -> Code {
    match size {
        RegSize::Bit8 => Code::Mov_rm8_r8,
        RegSize::Bit16 => Code::Mov_rm16_r16,
        RegSize::Bit32 => Code::Mov_rm32_r32,
        _ => Code::Mov_rm64_r64,
    }
}

fn mov_ri_code(size: RegSize) -> Code {
    match size {
        RegSize::Bit8 => Code::Mov_r8_imm8,
        RegSize::Bit16 => Code::Mov_r16_imm16,
        RegSize::Bit32 => Code::Mov_r32_imm32,
        _ => Code::Mov_r64_imm64,
    }
}

fn not_neg_code(base_64: Code, size: RegSize) -> Code {
    match (base_64, size) {
        (Code::Not_rm64, RegSize::Bit8) => Code::Not_rm8,
        (Code::Not_rm64, RegSize::Bit16) => Code::Not_rm16,
        (Code::Not_rm64, RegSize::Bit32) => Code::Not_rm32,
        (Code::Neg_rm64, RegSize::Bit8) => Code::Neg_rm8,
        (Code::Neg_rm64, RegSize::Bit16) => Code::Neg_rm16,
        (Code::Neg_rm64, RegSize::Bit32) => Code::Neg_rm32,
        _ => base_64,
    }
}

fn alu_rr_code(mnemonic: Mnemonic, size: RegSize) -> Code {
    use Mnemonic::*;
    match (mnemonic, size) {
        (Add, RegSize::Bit8) => Code::Add_r8_rm8,
        (Add, RegSize::Bit16) => Code::Add_r16_rm16,
        (Add, RegSize::Bit32) => Code::Add_r32_rm32,
        (Add, _) => Code::Add_r64_rm64,
        (Sub, RegSize::Bit8) => Code::Sub_r8_rm8,
        (Sub, RegSize::Bit16) => Code::Sub_r16_rm16,
        (Sub, RegSize::Bit32) => Code::Sub_r32_rm32,
        (Sub, _) => Code::Sub_r64_rm64,
        (And, RegSize::Bit8) => Code::And_r8_rm8,
        (And, RegSize::Bit16) => Code::And_r16_rm16,
        (And, RegSize::Bit32) => Code::And_r32_rm32,
        (And, _) => Code::And_r64_rm64,
        (Or, RegSize::Bit8) => Code::Or_r8_rm8,
        (Or, RegSize::Bit16) => Code::Or_r16_rm16,
        (Or, RegSize::Bit32) => Code::Or_r32_rm32,
        (Or, _) => Code::Or_r64_rm64,
        (Xor, RegSize::Bit8) => Code::Xor_r8_rm8,
        (Xor, RegSize::Bit16) => Code::Xor_r16_rm16,
        (Xor, RegSize::Bit32) => Code::Xor_r32_rm32,
        (Xor, _) => Code::Xor_r64_rm64,
        (Cmp, RegSize::Bit8) => Code::Cmp_r8_rm8,
        (Cmp, RegSize::Bit16) => Code::Cmp_r16_rm16,
        (Cmp, RegSize::Bit32) => Code::Cmp_r32_rm32,
        (Cmp, _) => Code::Cmp_r64_rm64,
        (Test, RegSize::Bit8) => Code::Test_rm8_r8,
        (Test, RegSize::Bit16) => Code::Test_rm16_r16,
        (Test, RegSize::Bit32) => Code::Test_rm32_r32,
        (Test, _) => Code::Test_rm64_r64,
        (other, _) => unreachable!("{other:?} is not a binary ALU mnemonic"),
    }
}

fn alu_ri_code(mnemonic: Mnemonic, size: RegSize) -> Code {
    use Mnemonic::*;
    match (mnemonic, size) {
        (Add, RegSize::Bit8) => Code::Add_rm8_imm8,
        (Add, RegSize::Bit16) => Code::Add_rm16_imm16,
        (Add, RegSize::Bit32) => Code::Add_rm32_imm32,
        (Add, _) => Code::Add_rm64_imm32,
        (Sub, RegSize::Bit8) => Code::Sub_rm8_imm8,
        (Sub, RegSize::Bit16) => Code::Sub_rm16_imm16,
        (Sub, RegSize::Bit32) => Code::Sub_rm32_imm32,
        (Sub, _) => Code::Sub_rm64_imm32,
        (And, RegSize::Bit8) => Code::And_rm8_imm8,
        (And, RegSize::Bit16) => Code::And_rm16_imm16,
        (And, RegSize::Bit32) => Code::And_rm32_imm32,
        (And, _) => Code::And_rm64_imm32,
        (Or, RegSize::Bit8) => Code::Or_rm8_imm8,
        (Or, RegSize::Bit16) => Code::Or_rm16_imm16,
        (Or, RegSize::Bit32) => Code::Or_rm32_imm32,
        (Or, _) => Code::Or_rm64_imm32,
        (Xor, RegSize::Bit8) => Code::Xor_rm8_imm8,
        (Xor, RegSize::Bit16) => Code::Xor_rm16_imm16,
        (Xor, RegSize::Bit32) => Code::Xor_rm32_imm32,
        (Xor, _) => Code::Xor_rm64_imm32,
        (Cmp, RegSize::Bit8) => Code::Cmp_rm8_imm8,
        (Cmp, RegSize::Bit16) => Code::Cmp_rm16_imm16,
        (Cmp, RegSize::Bit32) => Code::Cmp_rm32_imm32,
        (Cmp, _) => Code::Cmp_rm64_imm32,
        (Test, RegSize::Bit8) => Code::Test_rm8_imm8,
        (Test, RegSize::Bit16) => Code::Test_rm16_imm16,
        (Test, RegSize::Bit32) => Code::Test_rm32_imm32,
        (Test, _) => Code::Test_rm64_imm32,
        (other, _) => unreachable!("{other:?} is not a binary ALU mnemonic"),
    }
}

fn shift_code(mnemonic: Mnemonic, size: RegSize) -> Code {
    use Mnemonic::*;
    match (mnemonic, size) {
        (Shl, RegSize::Bit8) => Code::Shl_rm8_imm8,
        (Shl, RegSize::Bit16) => Code::Shl_rm16_imm8,
        (Shl, RegSize::Bit32) => Code::Shl_rm32_imm8,
        (Shl, _) => Code::Shl_rm64_imm8,
        (Shr, RegSize::Bit8) => Code::Shr_rm8_imm8,
        (Shr, RegSize::Bit16) => Code::Shr_rm16_imm8,
        (Shr, RegSize::Bit32) => Code::Shr_rm32_imm8,
        (Shr, _) => Code::Shr_rm64_imm8,
        (Sar, RegSize::Bit8) => Code::Sar_rm8_imm8,
        (Sar, RegSize::Bit16) => Code::Sar_rm16_imm8,
        (Sar, RegSize::Bit32) => Code::Sar_rm32_imm8,
        (Sar, _) => Code::Sar_rm64_imm8,
        (Ror, RegSize::Bit8) => Code::Ror_rm8_imm8,
        (Ror, RegSize::Bit16) => Code::Ror_rm16_imm8,
        (Ror, RegSize::Bit32) => Code::Ror_rm32_imm8,
        (Ror, _) => Code::Ror_rm64_imm8,
        (Rol, RegSize::Bit8) => Code::Rol_rm8_imm8,
        (Rol, RegSize::Bit16) => Code::Rol_rm16_imm8,
        (Rol, RegSize::Bit32) => Code::Rol_rm32_imm8,
        (Rol, _) => Code::Rol_rm64_imm8,
        (other, _) => unreachable!("{other:?} is not a shift mnemonic"),
    }
}

fn shift_cl_code(mnemonic: Mnemonic, size: RegSize) -> Code {
    use Mnemonic::*;
    match (mnemonic, size) {
        (Shl, RegSize::Bit8) => Code::Shl_rm8_CL,
        (Shl, RegSize::Bit16) => Code::Shl_rm16_CL,
        (Shl, RegSize::Bit32) => Code::Shl_rm32_CL,
        (Shl, _) => Code::Shl_rm64_CL,
        (Shr, RegSize::Bit8) => Code::Shr_rm8_CL,
        (Shr, RegSize::Bit16) => Code::Shr_rm16_CL,
        (Shr, RegSize::Bit32) => Code::Shr_rm32_CL,
        (Shr, _) => Code::Shr_rm64_CL,
        (Sar, RegSize::Bit8) => Code::Sar_rm8_CL,
        (Sar, RegSize::Bit16) => Code::Sar_rm16_CL,
        (Sar, RegSize::Bit32) => Code::Sar_rm32_CL,
        (Sar, _) => Code::Sar_rm64_CL,
        (Ror, RegSize::Bit8) => Code::Ror_rm8_CL,
        (Ror, RegSize::Bit16) => Code::Ror_rm16_CL,
        (Ror, RegSize::Bit32) => Code::Ror_rm32_CL,
        (Ror, _) => Code::Ror_rm64_CL,
        (Rol, RegSize::Bit8) => Code::Rol_rm8_CL,
        (Rol, RegSize::Bit16) => Code::Rol_rm16_CL,
        (Rol, RegSize::Bit32) => Code::Rol_rm32_CL,
        (Rol, _) => Code::Rol_rm64_CL,
        (other, _) => unreachable!("{other:?} is not a shift mnemonic"),
    }
}

fn jcc_code(cond: Condition) -> Code {
    use Condition::*;
    match cond {
        O => Code::Jo_rel32_64,
        No => Code::Jno_rel32_64,
        B => Code::Jb_rel32_64,
        Ae => Code::Jae_rel32_64,
        E => Code::Je_rel32_64,
        Ne => Code::Jne_rel32_64,
        Be => Code::Jbe_rel32_64,
        A => Code::Ja_rel32_64,
        S => Code::Js_rel32_64,
        Ns => Code::Jns_rel32_64,
        P => Code::Jp_rel32_64,
        Np => Code::Jnp_rel32_64,
        L => Code::Jl_rel32_64,
        Ge => Code::Jge_rel32_64,
        Le => Code::Jle_rel32_64,
        G => Code::Jg_rel32_64,
    }
}

fn cmovcc_code(cond: Condition) -> Code {
    use Condition::*;
    match cond {
        O => Code::Cmovo_r64_rm64,
        No => Code::Cmovno_r64_rm64,
        B => Code::Cmovb_r64_rm64,
        Ae => Code::Cmovae_r64_rm64,
        E => Code::Cmove_r64_rm64,
        Ne => Code::Cmovne_r64_rm64,
        Be => Code::Cmovbe_r64_rm64,
        A => Code::Cmova_r64_rm64,
        S => Code::Cmovs_r64_rm64,
        Ns => Code::Cmovns_r64_rm64,
        P => Code::Cmovp_r64_rm64,
        Np => Code::Cmovnp_r64_rm64,
        L => Code::Cmovl_r64_rm64,
        Ge => Code::Cmovge_r64_rm64,
        Le => Code::Cmovle_r64_rm64,
        G => Code::Cmovg_r64_rm64,
    }
}

fn setcc_code(cond: Condition) -> Code {
    use Condition::*;
    match cond {
        O => Code::Seto_rm8,
        No => Code::Setno_rm8,
        B => Code::Setb_rm8,
        Ae => Code::Setae_rm8,
        E => Code::Sete_rm8,
        Ne => Code::Setne_rm8,
        Be => Code::Setbe_rm8,
        A => Code::Seta_rm8,
        S => Code::Sets_rm8,
        Ns => Code::Setns_rm8,
        P => Code::Setp_rm8,
        Np => Code::Setnp_rm8,
        L => Code::Setl_rm8,
        Ge => Code::Setge_rm8,
        Le => Code::Setle_rm8,
        G => Code::Setg_rm8,
    }
}
