//! A symbolic interpreter over [`Command`] sequences.
//!
//! This workspace never invokes the Rust toolchain itself, let alone a
//! hardware execution harness, so the round-trip scenarios and quantified
//! invariants this crate's own test suite checks are checked here instead:
//! against a small model of "what the IR command means" rather than against
//! assembled machine code. [`Machine::lower_block`](crate::machine::Machine)
//! is the thing that turns a [`Command`] into real x86-64; this module is a
//! second, independent reading of the same command, kept deliberately naive
//! so the two can be trusted to agree only where it actually matters (the
//! observable state an x86 CPU would end up in).
//!
//! [`Command::HandlerCall`] is the one variant this module does not give its
//! own semantics to: it asks the real [`HandlerGeneratorRegistry`] to expand
//! the call into its constituent primitive commands and interprets those,
//! so a handler generator's flag arithmetic is exercised exactly as written
//! rather than reimplemented a second time.
//!
//! Variants this interpreter has no use for — [`Command::X86Dynamic`],
//! [`Command::X86Exec`], [`Command::VmEnter`], and the store-keyed forms of
//! [`Command::Push`]/[`Command::Pop`] — resolve against machine-internal
//! state (a live `RegisterManager`, a `StoreArena`) this module does not
//! model, and are rejected with [`Error::UnsupportedConstruct`].

use std::collections::HashMap;

use eaglevm_asm::Reg;
use eaglevm_types::{IrSize, RegSize};
use iced_x86::Register as IcedReg;

use crate::error::{Error, Result};
use crate::handlers::HandlerGeneratorRegistry;
use crate::ir::{Command, ExitCondition, ExitTarget, PushValue, VmFlag, X86Flag};

/// One value-stack entry: the raw bits, left-justified in a `u64`, plus the
/// width it was pushed at (so [`Command::Carry`] can reason about byte
/// counts the same way [`crate::machine::Machine`]'s shape tracker does).
type StackValue = (u64, IrSize);

/// All state a block's commands can observe or mutate, short of real
/// physical-register allocation: the guest register file (keyed by each
/// family's 64-bit member, per [`Reg::to_width`]), the real `RFLAGS`
/// bits [`Command::ContextRflagsStore`] commits into, the IR value stack,
/// and byte-addressable memory for [`Command::MemRead`]/[`Command::MemWrite`].
#[derive(Debug, Clone, Default)]
pub struct SimState {
    regs: HashMap<Reg, u64>,
    rflags: u64,
    /// Tri-state result of the most recent [`Command::Cmp`], read out one
    /// bit at a time by [`Command::FlagsLoad`].
    vmflags: (bool, bool, bool),
    stack: Vec<StackValue>,
    mem: HashMap<u64, u8>,
}

/// How a block's terminator resolved, for a caller driving multiple blocks
/// (or, in a single-block test, just checking which way control would go).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Jmp,
    Branch { taken: bool },
    VmExit,
}

impl SimState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a guest register's current value at its own width.
    pub fn get_reg(&self, reg: Reg) -> u64 {
        let canon = reg.to_width(RegSize::Bit64);
        let full = self.regs.get(&canon).copied().unwrap_or(0);
        full & mask_u64(reg.size_of().into())
    }

    /// Seed a guest register, exactly as [`Command::ContextStore`] would
    /// have left it (masked/zero-extended to `reg`'s own width).
    pub fn set_reg(&mut self, reg: Reg, value: u64) {
        self.context_store(reg, IrSize::from(reg.size_of()), value);
    }

    pub fn rflags(&self) -> u64 {
        self.rflags
    }

    pub fn set_rflags(&mut self, value: u64) {
        self.rflags = value;
    }

    pub fn mem_write_u64(&mut self, addr: u64, value: u64) {
        for (i, byte) in value.to_le_bytes().into_iter().enumerate() {
            self.mem.insert(addr + i as u64, byte);
        }
    }

    pub fn mem_read_u64(&self, addr: u64) -> u64 {
        let mut bytes = [0u8; 8];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.mem.get(&(addr + i as u64)).copied().unwrap_or(0);
        }
        u64::from_le_bytes(bytes)
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// The current top-of-stack value, without consuming it — the external
    /// way to read a scenario's result back out (internal commands use
    /// [`Self::pop_raw`]/[`Self::peek_raw`] instead).
    pub fn top(&self) -> Option<(u64, IrSize)> {
        self.stack.last().copied()
    }

    fn push_raw(&mut self, value: u64, size: IrSize) {
        self.stack.push((value & mask_u64(size), size));
    }

    fn pop_raw(&mut self) -> Result<StackValue> {
        self.stack
            .pop()
            .ok_or_else(|| Error::PreconditionViolation("sim: pop on empty stack".into()))
    }

    fn peek_raw(&self, depth: usize) -> Result<StackValue> {
        let top = self.stack.len();
        let idx = top
            .checked_sub(1 + depth)
            .ok_or_else(|| Error::PreconditionViolation("sim: peek depth exceeds stack".into()))?;
        Ok(self.stack[idx])
    }

    fn context_load(&mut self, reg: Reg) {
        let value = self.get_reg(reg);
        self.push_raw(value, IrSize::from(reg.size_of()));
    }

    fn context_store(&mut self, reg: Reg, size: IrSize, value: u64) {
        let canon = reg.to_width(RegSize::Bit64);
        let masked = value & mask_u64(size);
        let entry = self.regs.entry(canon).or_insert(0);
        match size {
            IrSize::Bit64 | IrSize::Bit32 => *entry = masked,
            _ => *entry = (*entry & !mask_u64(size)) | masked,
        }
    }

    /// Run a flat, terminator-free command list (a handler generator's
    /// expanded body, or a test's hand-assembled setup sequence).
    pub fn run(&mut self, commands: &[Command], registry: &HandlerGeneratorRegistry) -> Result<()> {
        for cmd in commands {
            if self.step(cmd, registry)?.is_some() {
                return Err(Error::PreconditionViolation(
                    "sim: terminator inside a non-terminal command list".into(),
                ));
            }
        }
        Ok(())
    }

    /// Run one block's worth of commands, returning how its terminator
    /// resolved. Mirrors [`crate::ir::BlockBuilder::build`]'s invariant:
    /// every non-final command must be a non-terminator.
    pub fn run_block(&mut self, commands: &[Command], registry: &HandlerGeneratorRegistry) -> Result<Completion> {
        for (idx, cmd) in commands.iter().enumerate() {
            let outcome = self.step(cmd, registry)?;
            match (outcome, idx + 1 == commands.len()) {
                (Some(completion), true) => return Ok(completion),
                (Some(_), false) => {
                    return Err(Error::PreconditionViolation("sim: terminator before block's end".into()))
                }
                (None, true) => {
                    return Err(Error::PreconditionViolation("sim: block has no terminator".into()))
                }
                (None, false) => {}
            }
        }
        Err(Error::PreconditionViolation("sim: empty block".into()))
    }

    fn step(&mut self, cmd: &Command, registry: &HandlerGeneratorRegistry) -> Result<Option<Completion>> {
        match cmd {
            Command::Push { value, size } => {
                let v = match value {
                    PushValue::Imm(imm) => *imm,
                    other => {
                        return Err(Error::UnsupportedConstruct(format!(
                            "sim: push value {other:?} needs live machine state"
                        )))
                    }
                };
                self.push_raw(v, *size);
            }
            Command::Pop { size, .. } => {
                let (_, popped) = self.pop_raw()?;
                debug_assert_eq!(popped, *size);
            }

            Command::Add { size, preserved } => self.binary(*size, *preserved, |l, r, s| wrap(l.wrapping_add(r), s)),
            Command::Sub { size, preserved } => self.binary(*size, *preserved, |l, r, s| wrap(l.wrapping_sub(r), s)),
            Command::And { size, preserved } => self.binary(*size, *preserved, |l, r, s| wrap(l & r, s)),
            Command::Or { size, preserved } => self.binary(*size, *preserved, |l, r, s| wrap(l | r, s)),
            Command::Xor { size, preserved } => self.binary(*size, *preserved, |l, r, s| wrap(l ^ r, s)),
            Command::Shl { size, preserved } => {
                self.binary(*size, *preserved, |l, r, s| wrap(l.wrapping_shl(shift_count(r, s) as u32), s))
            }
            Command::Shr { size, preserved } => {
                self.binary(*size, *preserved, |l, r, s| wrap(l.wrapping_shr(shift_count(r, s) as u32), s))
            }
            Command::Smul { size, preserved } => self.binary(*size, *preserved, |l, r, s| {
                let prod = sign_extend(l, s).wrapping_mul(sign_extend(r, s));
                wrap(prod as u64, s)
            }),
            Command::Cmp { size } => self.cmp(*size)?,
            Command::Cnt { size, preserved } => self.unary(*size, *preserved, |v, s| wrap((v & mask_u64(s)).count_ones() as u64, s)),
            Command::Abs { size, preserved } => self.unary(*size, *preserved, |v, s| {
                let signed = sign_extend(v, s);
                wrap(signed.wrapping_abs() as u64, s)
            }),
            Command::Log2 { size, preserved } => self.unary(*size, *preserved, |v, s| {
                let masked = v & mask_u64(s);
                wrap(if masked == 0 { 0 } else { 63 - masked.leading_zeros() as u64 }, s)
            }),
            Command::Dup { size } => {
                let (v, s) = self.peek_raw(0)?;
                debug_assert_eq!(s, *size);
                self.push_raw(v, s);
            }
            Command::Peek { size, depth } => {
                let (v, s) = self.peek_raw(*depth)?;
                debug_assert_eq!(s, *size);
                self.push_raw(v, s);
            }
            Command::Resize { to, from } => {
                let (v, s) = self.pop_raw()?;
                debug_assert_eq!(s, *from);
                self.push_raw(v, *to);
            }
            Command::Sx { to, from } => {
                let (v, s) = self.pop_raw()?;
                debug_assert_eq!(s, *from);
                let extended = sign_extend(v, *from) as u64;
                self.push_raw(extended, *to);
            }
            Command::Carry { size, depth } => self.carry(*size, *depth)?,

            Command::ContextLoad { reg } => self.context_load(*reg),
            Command::ContextStore { reg, size } => {
                let (v, s) = self.pop_raw()?;
                debug_assert_eq!(s, *size);
                self.context_store(*reg, *size, v);
            }
            Command::ContextRflagsLoad => self.push_raw(self.rflags, IrSize::Bit64),
            Command::ContextRflagsStore { relevant_flags } => {
                let (acc, s) = self.pop_raw()?;
                debug_assert_eq!(s, IrSize::Bit64);
                self.rflags = (self.rflags & !relevant_flags) | (acc & relevant_flags);
            }
            Command::FlagsLoad { flag } => {
                let set = match flag {
                    VmFlag::Eq => self.vmflags.0,
                    VmFlag::Le => self.vmflags.1,
                    VmFlag::Ge => self.vmflags.2,
                };
                self.push_raw(set as u64, IrSize::Bit64);
            }

            Command::MemRead { size } => {
                let (addr, s) = self.pop_raw()?;
                debug_assert_eq!(s, IrSize::Bit64);
                let value = self.mem_read_u64(addr) & mask_u64(*size);
                self.push_raw(value, *size);
            }
            Command::MemWrite { value_size, write_size, value_nearest } => {
                let (addr, s) = self.pop_raw()?;
                debug_assert_eq!(s, IrSize::Bit64);
                let (value, vs) = self.pop_raw()?;
                debug_assert_eq!(vs, *value_size);
                let shifted = if !value_nearest && write_size.bits() < value_size.bits() {
                    value >> (value_size.bits() - write_size.bits())
                } else {
                    value
                };
                let existing = self.mem_read_u64(addr);
                let mask = mask_u64(*write_size);
                self.mem_write_u64(addr, (existing & !mask) | (shifted & mask));
            }

            Command::HandlerCall { mnemonic, signature } => {
                let sizes = signature.sizes();
                let body = registry.generate(*mnemonic, signature, &sizes)?;
                self.run(&body, registry)?;
            }

            Command::X86Dynamic(_) | Command::X86Exec(_) | Command::VmEnter => {
                return Err(Error::UnsupportedConstruct(
                    "sim: command resolves against live machine state, not modeled here".into(),
                ))
            }

            Command::Jmp => return Ok(Some(Completion::Jmp)),
            Command::Branch { condition, inverted, .. } => {
                let taken = self.evaluate_condition(*condition) ^ inverted;
                return Ok(Some(Completion::Branch { taken }));
            }
            Command::VmExit { .. } => return Ok(Some(Completion::VmExit)),
        }
        Ok(None)
    }

    fn binary(&mut self, size: IrSize, preserved: bool, op: impl Fn(u64, u64, IrSize) -> u64) {
        let (rhs, _) = self.pop_raw().expect("sim: binary op needs rhs");
        let (lhs, _) = self.pop_raw().expect("sim: binary op needs lhs");
        let result = op(lhs, rhs, size);
        if preserved {
            self.push_raw(lhs, size);
            self.push_raw(rhs, size);
        }
        self.push_raw(result, size);
    }

    fn unary(&mut self, size: IrSize, preserved: bool, op: impl Fn(u64, IrSize) -> u64) {
        let (v, _) = self.pop_raw().expect("sim: unary op needs an operand");
        let result = op(v, size);
        if preserved {
            self.push_raw(v, size);
        }
        self.push_raw(result, size);
    }

    /// The top-of-stack value (popped first) plays the left-hand role, the
    /// one beneath it the right-hand role. `handlers::flags`'s CF helpers
    /// peek their second operand last so it lands on top and plays `left`;
    /// see `push_unsigned_overflow` there for how that combines with this
    /// convention to yield a correct overflow/borrow bit.
    fn cmp(&mut self, size: IrSize) -> Result<()> {
        let (left, ls) = self.pop_raw()?;
        let (right, rs) = self.pop_raw()?;
        debug_assert_eq!(ls, rs);
        let l = sign_extend(left, size);
        let r = sign_extend(right, size);
        self.vmflags = (l == r, l <= r, l >= r);
        Ok(())
    }

    fn carry(&mut self, size: IrSize, depth: usize) -> Result<()> {
        let (carried, carried_size) = self.pop_raw()?;
        debug_assert_eq!(carried_size, size);

        let mut collected = Vec::new();
        let mut moved = 0usize;
        while moved < depth {
            let entry = self.pop_raw()?;
            moved += entry.1.tob();
            collected.push(entry);
        }
        debug_assert_eq!(moved, depth);

        self.stack.push((carried, carried_size));
        for entry in collected.into_iter().rev() {
            self.stack.push(entry);
        }
        Ok(())
    }

    fn evaluate_condition(&self, condition: ExitCondition) -> bool {
        let flag = |f: X86Flag| self.rflags & f.mask() != 0;
        match condition {
            ExitCondition::Jmp => true,
            ExitCondition::Jo => flag(X86Flag::Of),
            ExitCondition::Js => flag(X86Flag::Sf),
            ExitCondition::Je => flag(X86Flag::Zf),
            ExitCondition::Jb => flag(X86Flag::Cf),
            ExitCondition::Jbe => flag(X86Flag::Cf) || flag(X86Flag::Zf),
            ExitCondition::Jl => flag(X86Flag::Sf) != flag(X86Flag::Of),
            ExitCondition::Jle => flag(X86Flag::Zf) || (flag(X86Flag::Sf) != flag(X86Flag::Of)),
            ExitCondition::Jp => flag(X86Flag::Pf),
            ExitCondition::Jcxz => self.get_reg(Reg::new(IcedReg::CX)) == 0,
            ExitCondition::Jecxz => self.get_reg(Reg::new(IcedReg::ECX)) == 0,
            ExitCondition::Jrcxz => self.get_reg(Reg::new(IcedReg::RCX)) == 0,
        }
    }
}

/// Where a [`crate::ir::Command::Branch`]/[`crate::ir::Command::VmExit`]
/// would have sent control, for a caller that wants the target rather than
/// just whether the branch was taken.
pub fn resolve_target(completion: Completion, branch: &Command) -> Option<ExitTarget> {
    match (completion, branch) {
        (Completion::Branch { taken: true }, Command::Branch { special: Some(t), .. }) => Some(*t),
        (Completion::Branch { taken: true }, Command::Branch { default, .. }) => Some(*default),
        (Completion::Branch { taken: false }, Command::Branch { default, .. }) => Some(*default),
        (Completion::VmExit, Command::VmExit { target }) => Some(*target),
        _ => None,
    }
}

fn mask_u64(size: IrSize) -> u64 {
    if size.bits() >= 64 {
        u64::MAX
    } else {
        (1u64 << size.bits()) - 1
    }
}

fn wrap(value: u64, size: IrSize) -> u64 {
    value & mask_u64(size)
}

fn sign_extend(value: u64, size: IrSize) -> i64 {
    let bits = size.bits();
    if bits == 0 || bits >= 64 {
        return value as i64;
    }
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

/// Shift counts are masked to the same width real hardware uses (`0x3F` at
/// 64-bit, `0x1F` otherwise) — `handlers::flags::calculate_shift_cf` relies
/// on the identical mask.
fn shift_count(raw: u64, size: IrSize) -> u64 {
    let mask = if size == IrSize::Bit64 { 0x3F } else { 0x1F };
    raw & mask
}
