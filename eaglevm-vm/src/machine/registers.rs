//! Bit-level gather/scatter codegen for `Command::ContextLoad`/`ContextStore`
//! (spec.md §4.7): reconstructs a virtual register's value out of the
//! scattered [`eaglevm_types::MappedRange`]s `RegisterManager::create_mappings`
//! randomly assigned it across the physical register file, and the inverse.
//!
//! Shared by two call sites (Design Note, supplementing spec.md): the
//! always-inline lowering in `arith_impl.rs`, and the cached handler-variant
//! path in `handler_manager.rs`. Neither owns this code; both call into it.

use eaglevm_asm::{zreg, zimm, CodeContainer, Mnemonic as AsmMnemonic, Reg, RegClass};
use eaglevm_types::{BitRange, IrSize, MappedRange, RegSize};

use crate::error::Result;

use super::Machine;

/// Reconstruct `reg`'s full value into a freshly reserved scratch GPR64.
/// The caller releases the returned register.
pub(super) fn gather(machine: &mut Machine, container: &mut CodeContainer, reg: Reg) -> Result<Reg> {
    let width = reg.size_of();
    let family = reg.to_width(RegSize::Bit64);
    let ranges = machine.registers().get_register_mapped_ranges(family, width);

    let acc = machine.gpr_ctx.get_any()?;
    machine.emit(container, AsmMnemonic::Xor, vec![zreg(acc), zreg(acc)]);

    for range in &ranges {
        let chunk = extract_chunk(machine, container, range)?;
        if range.source.from > 0 {
            machine.emit(container, AsmMnemonic::Shl, vec![zreg(chunk), zimm(range.source.from as i64, false)]);
        }
        machine.emit(container, AsmMnemonic::Or, vec![zreg(acc), zreg(chunk)]);
        machine.gpr_ctx.release(chunk);
    }

    Ok(acc)
}

/// Write `value` (a GPR64 the caller still owns) into `reg`'s mapped
/// locations, truncated to `size` bits.
pub(super) fn scatter(
    machine: &mut Machine,
    container: &mut CodeContainer,
    reg: Reg,
    size: IrSize,
    value: Reg,
) -> Result<()> {
    let family = reg.to_width(RegSize::Bit64);
    let width = RegSize::from(size);
    let ranges = machine.registers().get_register_mapped_ranges(family, width);

    for range in &ranges {
        scatter_chunk(machine, container, value, range)?;
    }
    Ok(())
}

/// Gather `reg` and push it onto the IR value stack (`Command::ContextLoad`).
pub(super) fn emit_load_body(machine: &mut Machine, container: &mut CodeContainer, reg: Reg) -> Result<()> {
    let size = IrSize::from(reg.size_of());
    let acc = gather(machine, container, reg)?;
    machine.vsp_push(container, acc, size);
    machine.gpr_ctx.release(acc);
    Ok(())
}

/// Pop the IR value stack and scatter it into `reg` (`Command::ContextStore`).
pub(super) fn emit_store_body(
    machine: &mut Machine,
    container: &mut CodeContainer,
    reg: Reg,
    size: IrSize,
) -> Result<()> {
    let value = machine.gpr_ctx.get_any()?;
    machine.vsp_pop(container, value, size);
    scatter(machine, container, reg, size, value)?;
    machine.gpr_ctx.release(value);
    Ok(())
}

/// Pull one mapped chunk's bits out of `range.dest_reg`, right-aligned at
/// bit 0 in a freshly reserved scratch GPR64.
fn extract_chunk(machine: &mut Machine, container: &mut CodeContainer, range: &MappedRange<Reg>) -> Result<Reg> {
    match range.dest_reg.class_of() {
        RegClass::Xmm128 => extract_xmm_chunk(machine, container, range.dest_reg, range.dest),
        _ => {
            let tmp = machine.gpr_ctx.get_any()?;
            machine.emit(container, AsmMnemonic::Mov, vec![zreg(tmp), zreg(range.dest_reg)]);
            if range.dest.from > 0 {
                machine.emit(container, AsmMnemonic::Shr, vec![zreg(tmp), zimm(range.dest.from as i64, false)]);
            }
            mask_low_bits(machine, container, tmp, range.dest.width());
            Ok(tmp)
        }
    }
}

fn extract_xmm_chunk(machine: &mut Machine, container: &mut CodeContainer, xmm: Reg, dest: BitRange) -> Result<Reg> {
    if dest.to <= 64 {
        let tmp = xmm_half_to_gpr(machine, container, xmm, 0)?;
        shift_and_mask(machine, container, tmp, dest.from, dest.width());
        Ok(tmp)
    } else if dest.from >= 64 {
        let tmp = xmm_half_to_gpr(machine, container, xmm, 1)?;
        shift_and_mask(machine, container, tmp, dest.from - 64, dest.width());
        Ok(tmp)
    } else {
        // straddles the 64/128 boundary: pull each half's share separately
        // and recombine.
        let low_width = 64 - dest.from;
        let low = xmm_half_to_gpr(machine, container, xmm, 0)?;
        shift_and_mask(machine, container, low, dest.from, low_width);

        let high_width = dest.to - 64;
        let high = xmm_half_to_gpr(machine, container, xmm, 1)?;
        mask_low_bits(machine, container, high, high_width);
        machine.emit(container, AsmMnemonic::Shl, vec![zreg(high), zimm(low_width as i64, false)]);

        machine.emit(container, AsmMnemonic::Or, vec![zreg(low), zreg(high)]);
        machine.gpr_ctx.release(high);
        Ok(low)
    }
}

fn shift_and_mask(machine: &Machine, container: &mut CodeContainer, reg: Reg, shift: u16, width: u16) {
    if shift > 0 {
        machine.emit(container, AsmMnemonic::Shr, vec![zreg(reg), zimm(shift as i64, false)]);
    }
    mask_low_bits(machine, container, reg, width);
}

fn mask_low_bits(machine: &Machine, container: &mut CodeContainer, reg: Reg, width: u16) {
    if width >= 64 {
        return;
    }
    let mask = (1u64 << width) - 1;
    machine.emit(container, AsmMnemonic::And, vec![zreg(reg), zimm(mask as i64, false)]);
}

/// Copy `xmm`'s low (`half == 0`) or high (`half == 1`) 64 bits into a
/// fresh scratch GPR64, through a scratch XMM so `xmm` itself is never
/// disturbed (`psrldq` shifts its operand in place).
fn xmm_half_to_gpr(machine: &mut Machine, container: &mut CodeContainer, xmm: Reg, half: u8) -> Result<Reg> {
    let xmm_tmp = machine.xmm_ctx.get_any()?;
    machine.emit(container, AsmMnemonic::Movdqu, vec![zreg(xmm_tmp), zreg(xmm)]);
    if half == 1 {
        machine.emit(container, AsmMnemonic::Psrldq, vec![zreg(xmm_tmp), zimm(8, false)]);
    }
    let gpr = machine.gpr_ctx.get_any()?;
    machine.emit(container, AsmMnemonic::Movq, vec![zreg(gpr), zreg(xmm_tmp)]);
    machine.xmm_ctx.release(xmm_tmp);
    Ok(gpr)
}

/// Overwrite 64-bit half `half` (0 = low qword, 1 = high qword) of `xmm`
/// with `new_half`, leaving the other half untouched. `pshufd`+`por` stand
/// in for a blend instruction this encoder vocabulary doesn't otherwise
/// have: each half is moved into its own freshly zeroed XMM register via
/// `movq`, the one going to the high qword is shuffled up into place, and
/// the two zero-elsewhere halves are OR'd together.
fn write_xmm_half(machine: &mut Machine, container: &mut CodeContainer, xmm: Reg, half: u8, new_half: Reg) -> Result<()> {
    let other = xmm_half_to_gpr(machine, container, xmm, 1 - half)?;

    let lo_xmm = machine.xmm_ctx.get_any()?;
    let hi_xmm = machine.xmm_ctx.get_any()?;

    let (qword0, qword1) = if half == 0 { (new_half, other) } else { (other, new_half) };
    machine.emit(container, AsmMnemonic::Movq, vec![zreg(lo_xmm), zreg(qword0)]);
    machine.emit(container, AsmMnemonic::Movq, vec![zreg(hi_xmm), zreg(qword1)]);
    machine.emit(container, AsmMnemonic::Pshufd, vec![zreg(hi_xmm), zreg(hi_xmm), zimm(0x4e, false)]);
    machine.emit(container, AsmMnemonic::Por, vec![zreg(lo_xmm), zreg(hi_xmm)]);
    machine.emit(container, AsmMnemonic::Movdqu, vec![zreg(xmm), zreg(lo_xmm)]);

    machine.xmm_ctx.release(lo_xmm);
    machine.xmm_ctx.release(hi_xmm);
    machine.gpr_ctx.release(other);
    Ok(())
}

fn scatter_chunk(machine: &mut Machine, container: &mut CodeContainer, value: Reg, range: &MappedRange<Reg>) -> Result<()> {
    let width = range.source.width();
    let chunk = machine.gpr_ctx.get_any()?;
    machine.emit(container, AsmMnemonic::Mov, vec![zreg(chunk), zreg(value)]);
    if range.source.from > 0 {
        machine.emit(container, AsmMnemonic::Shr, vec![zreg(chunk), zimm(range.source.from as i64, false)]);
    }
    mask_low_bits(machine, container, chunk, width);

    match range.dest_reg.class_of() {
        RegClass::Xmm128 => scatter_xmm_chunk(machine, container, range.dest_reg, range.dest, chunk)?,
        _ => write_gpr_chunk(machine, container, range.dest_reg, range.dest, chunk)?,
    }
    machine.gpr_ctx.release(chunk);
    Ok(())
}

/// Read-modify-write `width(dest)` bits of `dest_reg` (a GPR64) from the
/// right-aligned value in `chunk`, clearing the destination bits with a
/// register-held mask rather than an immediate `and` (the cleared span can
/// exceed what a sign-extended 32-bit immediate represents).
fn write_gpr_chunk(machine: &mut Machine, container: &mut CodeContainer, dest_reg: Reg, dest: BitRange, chunk: Reg) -> Result<()> {
    let positioned = machine.gpr_ctx.get_any()?;
    machine.emit(container, AsmMnemonic::Mov, vec![zreg(positioned), zreg(chunk)]);
    if dest.from > 0 {
        machine.emit(container, AsmMnemonic::Shl, vec![zreg(positioned), zimm(dest.from as i64, false)]);
    }

    let maskreg = machine.gpr_ctx.get_any()?;
    machine.emit(container, AsmMnemonic::Mov, vec![zreg(maskreg), zimm(mask_at(dest) as i64, false)]);
    machine.emit(container, AsmMnemonic::Not, vec![zreg(maskreg)]);
    machine.emit(container, AsmMnemonic::And, vec![zreg(dest_reg), zreg(maskreg)]);
    machine.emit(container, AsmMnemonic::Or, vec![zreg(dest_reg), zreg(positioned)]);

    machine.gpr_ctx.release(positioned);
    machine.gpr_ctx.release(maskreg);
    Ok(())
}

fn scatter_xmm_chunk(machine: &mut Machine, container: &mut CodeContainer, xmm: Reg, dest: BitRange, chunk: Reg) -> Result<()> {
    if dest.to <= 64 {
        write_xmm_half_bits(machine, container, xmm, 0, dest.from, dest.width(), chunk)
    } else if dest.from >= 64 {
        write_xmm_half_bits(machine, container, xmm, 1, dest.from - 64, dest.width(), chunk)
    } else {
        let low_width = 64 - dest.from;
        write_xmm_half_bits(machine, container, xmm, 0, dest.from, low_width, chunk)?;

        let high = machine.gpr_ctx.get_any()?;
        machine.emit(container, AsmMnemonic::Mov, vec![zreg(high), zreg(chunk)]);
        machine.emit(container, AsmMnemonic::Shr, vec![zreg(high), zimm(low_width as i64, false)]);
        let high_width = dest.to - 64;
        mask_low_bits(machine, container, high, high_width);
        write_xmm_half_bits(machine, container, xmm, 1, 0, high_width, high)?;
        machine.gpr_ctx.release(high);
        Ok(())
    }
}

/// Read-modify-write `width` bits at bit offset `shift` within 64-bit
/// `half` of `xmm`, leaving the rest of that half and the other half
/// untouched.
fn write_xmm_half_bits(
    machine: &mut Machine,
    container: &mut CodeContainer,
    xmm: Reg,
    half: u8,
    shift: u16,
    width: u16,
    chunk: Reg,
) -> Result<()> {
    let current = xmm_half_to_gpr(machine, container, xmm, half)?;

    let positioned = machine.gpr_ctx.get_any()?;
    machine.emit(container, AsmMnemonic::Mov, vec![zreg(positioned), zreg(chunk)]);
    if shift > 0 {
        machine.emit(container, AsmMnemonic::Shl, vec![zreg(positioned), zimm(shift as i64, false)]);
    }

    let maskreg = machine.gpr_ctx.get_any()?;
    let clear_mask = mask_at(BitRange::new(shift, shift + width));
    machine.emit(container, AsmMnemonic::Mov, vec![zreg(maskreg), zimm(clear_mask as i64, false)]);
    machine.emit(container, AsmMnemonic::Not, vec![zreg(maskreg)]);
    machine.emit(container, AsmMnemonic::And, vec![zreg(current), zreg(maskreg)]);
    machine.emit(container, AsmMnemonic::Or, vec![zreg(current), zreg(positioned)]);

    write_xmm_half(machine, container, xmm, half, current)?;

    machine.gpr_ctx.release(positioned);
    machine.gpr_ctx.release(maskreg);
    machine.gpr_ctx.release(current);
    Ok(())
}

fn mask_at(dest: BitRange) -> u64 {
    let bits = dest.width();
    let mask = if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 };
    mask << dest.from
}
