// Spliced into `machine/mod.rs` via `include!` (Design Note: keeps the
// single `match` in `lower_command` next to every command it dispatches
// to, without one enormous file). Lowering for the arithmetic, shift,
// bit-scan, resize, stack-shape, flags and memory commands.

impl Machine {
    /// `lhs op rhs`: pops `rhs` (top) then `lhs`, computes via the real
    /// two-operand x86 form (`dst = dst op src`), and either pushes only
    /// the result or, when `preserved`, re-pushes both original operands
    /// underneath it in their original order (spec.md §4.6's shared
    /// "preserved" convention every flag-computing handler relies on).
    fn lower_binary_alu(&mut self, mnemonic: AsmMnemonic, size: IrSize, preserved: bool, container: &mut CodeContainer) -> Result<()> {
        let rhs = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, rhs, size);
        self.shape_pop();
        let lhs = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, lhs, size);
        self.shape_pop();

        let result = if preserved { self.gpr_ctx.get_any()? } else { lhs };
        if preserved {
            self.emit(container, AsmMnemonic::Mov, vec![zreg(result.to_width(RegSize::from(size))), zreg(lhs.to_width(RegSize::from(size)))]);
        }
        self.emit(container, mnemonic, vec![zreg(result.to_width(RegSize::from(size))), zreg(rhs.to_width(RegSize::from(size)))]);

        if preserved {
            self.vsp_push(container, lhs, size);
            self.shape_push(size);
            self.vsp_push(container, rhs, size);
            self.shape_push(size);
        }
        self.vsp_push(container, result, size);
        self.shape_push(size);

        self.gpr_ctx.release(rhs);
        self.gpr_ctx.release(lhs);
        if preserved {
            self.gpr_ctx.release(result);
        }
        Ok(())
    }

    /// `value shl/shr count`: the count must land in the literal hardware
    /// `CL` register regardless of this machine's randomized assignment,
    /// which is why `RegisterManager::init_reg_order` never hands RCX out
    /// to a role or temp.
    fn lower_shift(&mut self, mnemonic: AsmMnemonic, size: IrSize, preserved: bool, container: &mut CodeContainer) -> Result<()> {
        let count = rcx();
        self.vsp_pop(container, count, size);
        self.shape_pop();

        let value = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, value, size);
        self.shape_pop();

        let result = if preserved { self.gpr_ctx.get_any()? } else { value };
        if preserved {
            self.emit(container, AsmMnemonic::Mov, vec![zreg(result.to_width(RegSize::from(size))), zreg(value.to_width(RegSize::from(size)))]);
        }
        self.emit(container, mnemonic, vec![zreg(result.to_width(RegSize::from(size))), zreg(cl())]);

        if preserved {
            self.vsp_push(container, value, size);
            self.shape_push(size);
            self.vsp_push(container, count, size);
            self.shape_push(size);
        }
        self.vsp_push(container, result, size);
        self.shape_push(size);

        self.gpr_ctx.release(value);
        if preserved {
            self.gpr_ctx.release(result);
        }
        Ok(())
    }

    /// Real hardware `cmp lhs, rhs`: pops both operands, sets real RFLAGS,
    /// pushes nothing back. Every call site either stands alone (a
    /// virtualized `cmp` instruction) or is immediately followed by
    /// `Command::FlagsLoad`, which reads these same fresh flags.
    fn lower_cmp(&mut self, size: IrSize, container: &mut CodeContainer) -> Result<()> {
        let rhs = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, rhs, size);
        self.shape_pop();
        let lhs = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, lhs, size);
        self.shape_pop();

        self.emit(container, AsmMnemonic::Cmp, vec![zreg(lhs.to_width(RegSize::from(size))), zreg(rhs.to_width(RegSize::from(size)))]);

        self.gpr_ctx.release(rhs);
        self.gpr_ctx.release(lhs);
        Ok(())
    }

    /// `popcnt`/`bsr` (`cnt`/`log2`): both are real two-register x86 forms
    /// (`dst = f(src)`, `src` never mutated), so the result always lands
    /// in a fresh register. `zero_dest` pre-zeros it before the real
    /// instruction runs, needed for `bsr`, whose destination is left
    /// architecturally *unmodified* when the source is zero — without
    /// pre-zeroing, "result == 0" would not faithfully stand in for
    /// "source == 0" the way `Log2Generator`'s ZF computation assumes.
    fn lower_unary_alu(&mut self, mnemonic: AsmMnemonic, size: IrSize, preserved: bool, container: &mut CodeContainer, zero_dest: bool) -> Result<()> {
        let value = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, value, size);
        self.shape_pop();

        let result = self.gpr_ctx.get_any()?;
        if zero_dest {
            self.emit(container, AsmMnemonic::Mov, vec![zreg(result.to_width(RegSize::from(size))), zimm(0, false)]);
        }
        self.emit(container, mnemonic, vec![zreg(result.to_width(RegSize::from(size))), zreg(value.to_width(RegSize::from(size)))]);

        if preserved {
            self.vsp_push(container, value, size);
            self.shape_push(size);
        }
        self.vsp_push(container, result, size);
        self.shape_push(size);

        self.gpr_ctx.release(value);
        self.gpr_ctx.release(result);
        Ok(())
    }

    /// `abs`: no native x86 instruction, so this backend uses the
    /// classic branchless form `(x ^ mask) - mask` where `mask` is `x`
    /// arithmetic-shifted right by `bits - 1` (all-ones when `x` is
    /// negative, all-zero otherwise).
    fn lower_abs(&mut self, size: IrSize, preserved: bool, container: &mut CodeContainer) -> Result<()> {
        let value = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, value, size);
        self.shape_pop();

        let mask = self.gpr_ctx.get_any()?;
        self.emit(container, AsmMnemonic::Mov, vec![zreg(mask.to_width(RegSize::from(size))), zreg(value.to_width(RegSize::from(size)))]);
        self.emit(container, AsmMnemonic::Sar, vec![zreg(mask.to_width(RegSize::from(size))), zimm((size.bits() - 1) as i64, false)]);

        let result = self.gpr_ctx.get_any()?;
        self.emit(container, AsmMnemonic::Mov, vec![zreg(result.to_width(RegSize::from(size))), zreg(value.to_width(RegSize::from(size)))]);
        self.emit(container, AsmMnemonic::Xor, vec![zreg(result.to_width(RegSize::from(size))), zreg(mask.to_width(RegSize::from(size)))]);
        self.emit(container, AsmMnemonic::Sub, vec![zreg(result.to_width(RegSize::from(size))), zreg(mask.to_width(RegSize::from(size)))]);

        if preserved {
            self.vsp_push(container, value, size);
            self.shape_push(size);
        }
        self.vsp_push(container, result, size);
        self.shape_push(size);

        self.gpr_ctx.release(value);
        self.gpr_ctx.release(mask);
        self.gpr_ctx.release(result);
        Ok(())
    }

    /// Push a non-destructive copy of the value `depth` logical slots
    /// below the current top (`Command::Dup` is `depth == 0`).
    fn lower_peek(&mut self, size: IrSize, depth: usize, container: &mut CodeContainer) -> Result<()> {
        let offset = self.shape_depth_to_offset(depth);
        let reg = self.gpr_ctx.get_any()?;
        self.emit(container, AsmMnemonic::Mov, vec![zreg(reg.to_width(RegSize::from(size))), self.vsp_mem(offset, size)]);
        self.vsp_push(container, reg, size);
        self.gpr_ctx.release(reg);
        self.shape_push(size);
        Ok(())
    }

    /// Move the top-of-stack value down past `depth` bytes of intervening
    /// data, shifting that data up by `size` bytes at a time — a plain
    /// byte-range memmove; `size` only controls the physical chunk width
    /// the copy loop uses; it need not match the logical width of
    /// whatever values occupy that range (spec.md §9's `carry`, grounded
    /// on `discard_preserved_binary_operands`'s and the mem-write
    /// lifters' usage).
    fn lower_carry(&mut self, size: IrSize, depth: usize, container: &mut CodeContainer) -> Result<()> {
        let width = size.tob() as i64;
        let carried = self.gpr_ctx.get_any()?;
        self.emit(container, AsmMnemonic::Mov, vec![zreg(carried.to_width(RegSize::from(size))), self.vsp_mem(0, size)]);

        let scratch = self.gpr_ctx.get_any()?;
        let mut disp: i64 = 0;
        while disp < depth as i64 {
            self.emit(container, AsmMnemonic::Mov, vec![zreg(scratch.to_width(RegSize::from(size))), self.vsp_mem(disp + width, size)]);
            self.emit(container, AsmMnemonic::Mov, vec![self.vsp_mem(disp, size), zreg(scratch.to_width(RegSize::from(size)))]);
            disp += width;
        }
        self.emit(container, AsmMnemonic::Mov, vec![self.vsp_mem(depth as i64, size), zreg(carried.to_width(RegSize::from(size)))]);

        self.gpr_ctx.release(carried);
        self.gpr_ctx.release(scratch);

        let carried_shape = self.shape_pop();
        let mut consumed = 0usize;
        let mut intervening = Vec::new();
        while consumed < depth {
            let s = self.shape_pop();
            consumed += s.tob() as usize;
            intervening.push(s);
        }
        debug_assert_eq!(consumed, depth, "carry depth must land on a tracked shape boundary");
        self.shape_push(carried_shape);
        for s in intervening.into_iter().rev() {
            self.shape_push(s);
        }
        Ok(())
    }

    /// Zero- (or narrowing-)resize the top value from `from` to `to`
    /// bits, without a dedicated `movzx` encoder entry: narrowing just
    /// reinterprets the already-correct low bytes; `Bit32 -> Bit64`
    /// widening is free (writing a 32-bit sub-register always zeroes the
    /// rest of its 64-bit parent on this architecture); any other
    /// widening masks off whatever garbage sat above the narrower width.
    fn lower_resize(&mut self, to: IrSize, from: IrSize, container: &mut CodeContainer) -> Result<()> {
        let reg = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, reg, from);
        self.shape_pop();

        let free_widen = from == IrSize::Bit32 && to == IrSize::Bit64;
        if to.bits() > from.bits() && !free_widen {
            let mask = if from.bits() >= 64 { u64::MAX } else { (1u64 << from.bits()) - 1 };
            self.emit(container, AsmMnemonic::And, vec![zreg(reg.to_width(RegSize::from(to))), zimm(mask as i64, false)]);
        }

        self.vsp_push(container, reg, to);
        self.gpr_ctx.release(reg);
        self.shape_push(to);
        Ok(())
    }

    /// Sign-extend the top value from `from` to `to` bits via
    /// `shl`/`sar` by the width difference — garbage above `from` bits is
    /// pushed out of the register entirely by the left shift, so it
    /// never has to be masked off first.
    fn lower_sx(&mut self, to: IrSize, from: IrSize, container: &mut CodeContainer) -> Result<()> {
        let reg = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, reg, from);
        self.shape_pop();

        if to.bits() > from.bits() {
            let shift = (to.bits() - from.bits()) as i64;
            self.emit(container, AsmMnemonic::Shl, vec![zreg(reg.to_width(RegSize::from(to))), zimm(shift, false)]);
            self.emit(container, AsmMnemonic::Sar, vec![zreg(reg.to_width(RegSize::from(to))), zimm(shift, false)]);
        }

        self.vsp_push(container, reg, to);
        self.gpr_ctx.release(reg);
        self.shape_push(to);
        Ok(())
    }

    fn lower_context_load(&mut self, reg: Reg, container: &mut CodeContainer) -> Result<()> {
        let size = IrSize::from(reg.size_of());
        registers::emit_load_body(self, container, reg)?;
        self.shape_push(size);
        Ok(())
    }

    fn lower_context_store(&mut self, reg: Reg, size: IrSize, container: &mut CodeContainer) -> Result<()> {
        registers::emit_store_body(self, container, reg, size)?;
        self.shape_pop();
        Ok(())
    }

    /// Reload real RFLAGS from the persistent `Vflags` role register
    /// (`push vflags; popfq`) — used right before a real `jcc` and by
    /// nothing else, since every other flag consumer reads `Vflags`
    /// through `Command::FlagsLoad`/`ContextRflagsStore` instead.
    fn lower_rflags_load(&mut self, container: &mut CodeContainer) -> Result<()> {
        let vflags = self.vm_reg(VmRegRole::Vflags);
        self.emit(container, AsmMnemonic::Push, vec![zreg(vflags)]);
        self.emit(container, AsmMnemonic::Popfq, vec![]);
        Ok(())
    }

    /// Pop the Bit64 flag accumulator and merge its `relevant_flags`-masked
    /// bits into `Vflags`, leaving every other bit of `Vflags` untouched:
    /// `vflags = (vflags & !relevant_flags) | (acc & relevant_flags)`. The
    /// clearing mask is built in a register rather than folded into an
    /// immediate `and`, since `relevant_flags` is conceptually a full
    /// 64-bit mask even though today's callers only ever set bits within
    /// the low 12 (`CF_OF_SF_ZF_PF`).
    fn lower_rflags_store(&mut self, relevant_flags: u64, container: &mut CodeContainer) -> Result<()> {
        let vflags = self.vm_reg(VmRegRole::Vflags);

        let acc = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, acc, IrSize::Bit64);
        self.shape_pop();
        self.emit(container, AsmMnemonic::And, vec![zreg(acc), zimm(relevant_flags as i64, false)]);

        let maskreg = self.gpr_ctx.get_any()?;
        self.emit(container, AsmMnemonic::Mov, vec![zreg(maskreg), zimm(relevant_flags as i64, false)]);
        self.emit(container, AsmMnemonic::Not, vec![zreg(maskreg)]);
        self.emit(container, AsmMnemonic::And, vec![zreg(vflags), zreg(maskreg)]);
        self.emit(container, AsmMnemonic::Or, vec![zreg(vflags), zreg(acc)]);

        self.gpr_ctx.release(acc);
        self.gpr_ctx.release(maskreg);
        Ok(())
    }

    /// Synthesize a `Bit64` 0/1 value from the real flags a preceding
    /// `Command::Cmp` just set, via `setcc` on the matching condition
    /// (`Eq` -> `sete`, `Le`/`Ge` -> signed `setle`/`setge`).
    fn lower_flags_load(&mut self, flag: VmFlag, container: &mut CodeContainer) -> Result<()> {
        let cond = match flag {
            VmFlag::Eq => Condition::E,
            VmFlag::Le => Condition::Le,
            VmFlag::Ge => Condition::Ge,
        };

        let reg = self.gpr_ctx.get_any()?;
        self.emit(container, AsmMnemonic::Setcc(cond), vec![zreg(reg.to_width(RegSize::Bit8))]);
        self.emit(container, AsmMnemonic::And, vec![zreg(reg), zimm(0xFF, false)]);
        self.vsp_push(container, reg, IrSize::Bit64);
        self.gpr_ctx.release(reg);
        self.shape_push(IrSize::Bit64);
        Ok(())
    }

    /// `[address]` read: pops a `Bit64` address off the value stack and
    /// pushes the `size`-wide value found there (a real memory
    /// dereference, unrelated to the `vsp`-relative addressing every
    /// other command uses).
    fn lower_mem_read(&mut self, size: IrSize, container: &mut CodeContainer) -> Result<()> {
        let addr = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, addr, IrSize::Bit64);
        self.shape_pop();

        let value = self.gpr_ctx.get_any()?;
        let mem = zmem(Some(addr), None, 1, 0, RegSize::from(size));
        self.emit(container, AsmMnemonic::Mov, vec![zreg(value.to_width(RegSize::from(size))), mem]);
        self.vsp_push(container, value, size);

        self.gpr_ctx.release(addr);
        self.gpr_ctx.release(value);
        self.shape_push(size);
        Ok(())
    }

    /// `[address] = value` write: pops `address` (top) then `value` (the
    /// order every mem-write lifter leaves behind after carrying the
    /// address above the value), writing `write_size` bits of `value`
    /// — its low bits when `value_nearest`, its high bits otherwise.
    fn lower_mem_write(&mut self, value_size: IrSize, write_size: IrSize, value_nearest: bool, container: &mut CodeContainer) -> Result<()> {
        let addr = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, addr, IrSize::Bit64);
        self.shape_pop();

        let value = self.gpr_ctx.get_any()?;
        self.vsp_pop(container, value, value_size);
        self.shape_pop();

        if !value_nearest && write_size.bits() < value_size.bits() {
            let shift = (value_size.bits() - write_size.bits()) as i64;
            self.emit(container, AsmMnemonic::Shr, vec![zreg(value.to_width(RegSize::from(value_size))), zimm(shift, false)]);
        }

        let mem = zmem(Some(addr), None, 1, 0, RegSize::from(write_size));
        self.emit(container, AsmMnemonic::Mov, vec![mem, zreg(value.to_width(RegSize::from(write_size)))]);

        self.gpr_ctx.release(addr);
        self.gpr_ctx.release(value);
        Ok(())
    }
}
