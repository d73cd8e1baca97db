//! Shared flag-computation utilities used by every arithmetic/shift
//! handler generator (spec.md §4.6: `calculate_sf`/`calculate_zf`/`calculate_pf`,
//! plus this module's own CF/OF helpers for the shift family).
//!
//! Every helper here assumes the same calling convention: the stack
//! carries `[.., accumulator]` on top, with the operands and raw result
//! sitting at fixed depths below it (passed in as `Operand` depths), and
//! leaves the stack exactly as it found it except for folding one more
//! flag bit into the accumulator via `or`.

use eaglevm_types::IrSize;

use crate::ir::{Command, VmFlag, X86Flag};

/// Depths (slots below the current top, where 0 is the top itself) of
/// the values a flag computation snippet may need to read, fixed for the
/// duration of one handler generator body.
#[derive(Debug, Clone, Copy)]
pub struct OperandDepths {
    /// Depth of the raw result (topmost preserved value).
    pub result: usize,
    /// Depth of the right-hand/count operand, if binary.
    pub rhs: Option<usize>,
    /// Depth of the left-hand/value operand.
    pub lhs: usize,
}

/// Turn the `Cmp` this follows into an unsigned overflow/borrow bit.
///
/// `calculate_add_cf`/`calculate_sub_cf` peek their second operand (`rhs`)
/// last, so it ends up on top and plays `Cmp`'s "left" role, with the
/// first-peeked operand (`result`/`lhs`) playing "right" — see
/// [`SimState::cmp`](crate::sim::SimState) for that convention. Plain
/// `VmFlag::Le` (`rhs <= result`/`rhs <= lhs`) is true on equality, which
/// would wrongly set CF when the two operands happen to match; `!Le`
/// excludes that case while still covering the true-overflow case
/// (`rhs > result`/`rhs > lhs`), so it is used rather than `Le && !Eq`,
/// which selects the complementary, non-overflowing case for this
/// operand order.
fn push_unsigned_overflow(out: &mut Vec<Command>) {
    out.push(Command::FlagsLoad { flag: VmFlag::Le });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size: IrSize::Bit64 });
    out.push(Command::Xor { size: IrSize::Bit64, preserved: false });
}

/// Push a copy of the flag accumulator bit for `flag`, shifted into its
/// canonical RFLAGS position, then OR it into the accumulator
/// (assumed to sit on top of the stack).
fn fold_into_accumulator(out: &mut Vec<Command>, flag: X86Flag, size: IrSize) {
    out.push(Command::Resize { to: IrSize::Bit64, from: size });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(flag.index() as u64), size: IrSize::Bit64 });
    out.push(Command::Shl { size: IrSize::Bit64, preserved: false });
    out.push(Command::Or { size: IrSize::Bit64, preserved: false });
}

/// `SF = MSB(result)`.
pub fn calculate_sf(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: depths.result });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(size.bits() as u64 - 1), size });
    out.push(Command::Shr { size, preserved: false });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
    out.push(Command::And { size, preserved: false });
    fold_into_accumulator(&mut out, X86Flag::Sf, size);
    out
}

/// `ZF = result == 0`.
pub fn calculate_zf(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: depths.result });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(0), size });
    out.push(Command::Cmp { size });
    out.push(Command::FlagsLoad { flag: VmFlag::Eq });
    fold_into_accumulator(&mut out, X86Flag::Zf, IrSize::Bit64);
    out
}

/// `PF = parity of the low byte of result` (even number of set bits).
///
/// Computed the branchless way: fold the byte's bits together with XORs
/// and complement, since there is no dedicated `parity` IR primitive.
pub fn calculate_pf(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: depths.result });
    out.push(Command::Resize { to: IrSize::Bit8, from: size });
    out.push(Command::Cnt { size: IrSize::Bit8, preserved: false });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size: IrSize::Bit8 });
    out.push(Command::And { size: IrSize::Bit8, preserved: false });
    // invert: PF is set when the popcount is *even*.
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size: IrSize::Bit8 });
    out.push(Command::Xor { size: IrSize::Bit8, preserved: false });
    fold_into_accumulator(&mut out, X86Flag::Pf, IrSize::Bit8);
    out
}

/// `CF = (value >> (masked_count - 1)) & 1` — shared by `shl`/`shr`, the
/// count masked to `0x3F` at 64-bit width and `0x1F` otherwise (spec.md
/// §4.6).
pub fn calculate_shift_cf(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let rhs = depths.rhs.expect("shift CF needs a count operand");
    let mask = if size == IrSize::Bit64 { 0x3F } else { 0x1F };

    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: rhs });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(mask), size });
    out.push(Command::And { size, preserved: false });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
    out.push(Command::Sub { size, preserved: false });
    // stack: [.., masked_count - 1]; now bring the value alongside it.
    out.push(Command::Peek { size, depth: depths.lhs + 1 });
    out.push(Command::Carry { size, depth: size.tob() });
    out.push(Command::Shr { size, preserved: false });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
    out.push(Command::And { size, preserved: false });
    fold_into_accumulator(&mut out, X86Flag::Cf, size);
    out
}

/// `OF = MSB(original value)` for `shr` (the only 1-bit-shift case this
/// backend computes OF for unconditionally; spec.md notes OF is
/// otherwise undefined for multi-bit shifts, which this backend leaves
/// as "always recomputed" rather than conditionally skipped, matching
/// `shr.cpp`'s unconditional `compute_of`).
pub fn calculate_shift_of(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: depths.lhs });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(size.bits() as u64 - 1), size });
    out.push(Command::Shr { size, preserved: false });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
    out.push(Command::And { size, preserved: false });
    fold_into_accumulator(&mut out, X86Flag::Of, size);
    out
}

/// `CF` for `add`: unsigned overflow, `result < lhs`.
pub fn calculate_add_cf(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let rhs = depths.rhs.expect("add CF needs two operands");
    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: depths.result });
    out.push(Command::Peek { size, depth: rhs + 1 });
    out.push(Command::Cmp { size });
    push_unsigned_overflow(&mut out);
    fold_into_accumulator(&mut out, X86Flag::Cf, IrSize::Bit64);
    out
}

/// `OF` for `add`: both operands share a sign and the result's sign
/// differs from them.
///
/// Each `msb()` call below peeks one value off the stack and leaves a
/// single new bit on top, net +1 slot; every subsequent peek's `depth`
/// has to be offset by however many such bits are still live above the
/// original operand at that point, not by a constant.
pub fn calculate_add_of(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let rhs = depths.rhs.expect("add OF needs two operands");

    let msb = |out: &mut Vec<Command>, depth: usize| {
        out.push(Command::Peek { size, depth });
        out.push(Command::Push { value: crate::ir::PushValue::Imm(size.bits() as u64 - 1), size });
        out.push(Command::Shr { size, preserved: false });
        out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
        out.push(Command::And { size, preserved: false });
    };

    let mut out = Vec::new();
    msb(&mut out, depths.lhs);
    msb(&mut out, rhs + 1);
    out.push(Command::Xor { size, preserved: false }); // 1 if signs differ
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
    out.push(Command::Xor { size, preserved: false }); // 1 if signs agree
    msb(&mut out, depths.result + 1);
    msb(&mut out, depths.lhs + 2);
    out.push(Command::Xor { size, preserved: false }); // 1 if result sign != lhs sign
    out.push(Command::And { size, preserved: false });
    fold_into_accumulator(&mut out, X86Flag::Of, size);
    out
}

/// `CF` for `sub`/`cmp`: unsigned borrow, `lhs < rhs`.
pub fn calculate_sub_cf(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let rhs = depths.rhs.expect("sub CF needs two operands");
    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: depths.lhs });
    out.push(Command::Peek { size, depth: rhs + 1 });
    out.push(Command::Cmp { size });
    push_unsigned_overflow(&mut out);
    fold_into_accumulator(&mut out, X86Flag::Cf, IrSize::Bit64);
    out
}

/// `OF` for `sub`/`cmp`: operands differ in sign and the result's sign
/// matches the subtrahend rather than the minuend.
///
/// See [`calculate_add_of`] for why each `msb()` call's `depth` carries
/// its own running offset rather than a shared constant.
pub fn calculate_sub_of(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let rhs = depths.rhs.expect("sub OF needs two operands");

    let msb = |out: &mut Vec<Command>, depth: usize| {
        out.push(Command::Peek { size, depth });
        out.push(Command::Push { value: crate::ir::PushValue::Imm(size.bits() as u64 - 1), size });
        out.push(Command::Shr { size, preserved: false });
        out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
        out.push(Command::And { size, preserved: false });
    };

    let mut out = Vec::new();
    msb(&mut out, depths.lhs);
    msb(&mut out, rhs + 1);
    out.push(Command::Xor { size, preserved: false }); // 1 if signs differ
    msb(&mut out, depths.result + 1);
    msb(&mut out, rhs + 2);
    out.push(Command::Xor { size, preserved: false }); // 1 if result sign != rhs sign (same as lhs sign)
    out.push(Command::Push { value: crate::ir::PushValue::Imm(1), size });
    out.push(Command::Xor { size, preserved: false }); // invert: 1 if result sign == rhs sign
    out.push(Command::And { size, preserved: false });
    fold_into_accumulator(&mut out, X86Flag::Of, size);
    out
}

/// `OF` for `abs`/`neg`-style unary negation: set only when the operand
/// was the size's minimum representable value (the one input whose
/// negation overflows).
pub fn calculate_abs_of(depths: OperandDepths, size: IrSize) -> Vec<Command> {
    let min_value = 1u64 << (size.bits() - 1);
    let mut out = Vec::new();
    out.push(Command::Peek { size, depth: depths.lhs });
    out.push(Command::Push { value: crate::ir::PushValue::Imm(min_value), size });
    out.push(Command::Cmp { size });
    out.push(Command::FlagsLoad { flag: VmFlag::Eq });
    fold_into_accumulator(&mut out, X86Flag::Of, IrSize::Bit64);
    out
}
