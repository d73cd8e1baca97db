//! Lowers IR [`Block`]s into real x86-64 machine code against one fixed
//! register assignment (spec.md §3's `machine`/`handler_manager` pair).
//!
//! The IR value stack is realized directly as memory below `vsp`
//! (Design Note, supplementing spec.md: every `push`/`pop`/`peek`/`carry`
//! becomes a `mov` relative to the `vsp` role register, the same way the
//! original's generated handlers address their own stack frame). A
//! handler call's preserved operands and folded accumulator all live at
//! fixed byte offsets below `vsp`, which is what lets `Command::Peek`'s
//! `depth` parameter and the flag-computation helpers in
//! `crate::handlers::flags` be plain byte counts.

use std::collections::HashMap;

use eaglevm_asm::{
    zimm, zmem, zreg, CodeContainer, Condition, Facade, Label, Mnemonic as AsmMnemonic, Operand,
    Reg, RegisterContext, RegisterManager, VmRegRole,
};
use eaglevm_types::{IrSize, RegSize};
use iced_x86::Register as IcedReg;

use crate::error::Result;
use crate::handlers::HandlerGeneratorRegistry;
use crate::ir::{Block, BlockId, Command, DynOperand, PushValue, StoreArena, VmFlag};
use crate::lifter::LifterRegistry;
use crate::settings::Settings;

mod branch;
mod handler_manager;
mod prologue;
mod registers;
mod stack;

pub use handler_manager::HandlerManager;

/// Owns the register assignment and ambient registries one generated VM
/// instance lowers every block against.
pub struct Machine {
    regs: RegisterManager,
    settings: Settings,
    gpr_ctx: RegisterContext,
    xmm_ctx: RegisterContext,
    facade: Facade,
    lifters: LifterRegistry,
    generators: HandlerGeneratorRegistry,
    /// Logical mirror of the vsp-stack's contents, one entry per pushed
    /// value, narrowest-to-widest bottom-to-top. `Command::Peek`'s `depth`
    /// is a slot count, not a byte count (two pushed values can differ in
    /// width, most commonly a `Bit64` flag accumulator pushed alongside
    /// narrower operands), so resolving a depth to a vsp-relative byte
    /// offset requires replaying this shape rather than just multiplying
    /// by a single width.
    shape: Vec<IrSize>,
}

impl Machine {
    /// Build a machine over a fresh, randomized register assignment.
    pub fn new<R: rand::Rng>(rng: &mut R, settings: Settings) -> Self {
        let mut regs = RegisterManager::init_reg_order(rng);
        regs.create_mappings(rng);
        let gpr_ctx = RegisterContext::new(regs.unreserved_gpr_pool());
        let xmm_ctx = RegisterContext::new(regs.unreserved_xmm_pool());
        Self {
            regs,
            settings,
            gpr_ctx,
            xmm_ctx,
            facade: Facade::new_long_mode(),
            lifters: LifterRegistry::with_default_lifters(),
            generators: HandlerGeneratorRegistry::with_default_generators(),
            shape: Vec::new(),
        }
    }

    /// Reset the tracked vsp-stack shape to `sizes`, bottom-to-top. Called
    /// before lowering a fresh block (empty) and before synthesizing a
    /// cached handler body (seeded from its call signature, since the
    /// body is emitted once and shared across every call site with that
    /// signature).
    pub(crate) fn reset_shape(&mut self, sizes: &[IrSize]) {
        self.shape.clear();
        self.shape.extend_from_slice(sizes);
    }

    fn shape_push(&mut self, size: IrSize) {
        self.shape.push(size);
    }

    fn shape_pop(&mut self) -> IrSize {
        self.shape.pop().expect("vsp-stack shape underflow: popped past the tracked bottom")
    }

    /// Byte offset below `vsp` of the value `depth` logical slots from the
    /// top (`depth == 0` is the current top-of-stack).
    fn shape_depth_to_offset(&self, depth: usize) -> i64 {
        let top = self.shape.len();
        let mut offset: i64 = 0;
        for slot in (top.checked_sub(depth).expect("peek depth exceeds tracked stack shape")..top).rev() {
            offset += self.shape[slot].tob() as i64;
        }
        offset
    }

    pub fn registers(&self) -> &RegisterManager {
        &self.regs
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn lifters(&self) -> &LifterRegistry {
        &self.lifters
    }

    pub fn generators(&self) -> &HandlerGeneratorRegistry {
        &self.generators
    }

    fn vm_reg(&self, role: VmRegRole) -> Reg {
        self.regs.get_vm_reg(role)
    }

    fn vsp(&self) -> Reg {
        self.vm_reg(VmRegRole::Vsp)
    }

    /// Resolve a [`DynOperand`] to a concrete encoder [`Operand`] against
    /// this machine's register assignment and a block's live stores.
    fn resolve_dyn_operand(&self, op: DynOperand, arena: &StoreArena) -> Result<Operand> {
        Ok(match op {
            DynOperand::Store(id) => zreg(arena.register(id)?.to_width(RegSize::from(arena.size(id)))),
            DynOperand::VmReg(role) => zreg(self.vm_reg(role)),
            DynOperand::Reg(reg) => zreg(reg),
            DynOperand::Imm(value, signed) => zimm(value, signed),
        })
    }

    /// Encode one instruction and append it to `container`: as a
    /// re-encoded thunk if it references an unresolved label (a branch),
    /// or as final bytes otherwise. Every non-branch instruction this
    /// backend emits addresses its own image through the `vbase` role
    /// register rather than the encoder's RIP-relative support, so its
    /// encoding never actually depends on final placement.
    fn emit(&self, container: &mut CodeContainer, mnemonic: AsmMnemonic, operands: Vec<Operand>) {
        if operands.iter().any(|op| matches!(op, Operand::Label(_))) {
            let facade = Facade::new_long_mode();
            container.push_thunk(Box::new(move |rip, lookup| {
                let mut resolved = Vec::with_capacity(operands.len());
                for op in &operands {
                    resolved.push(match op {
                        Operand::Label(label) => lookup(*label)
                            .map(|addr| zimm(addr as i64, false))
                            .ok_or(eaglevm_asm::AsmError::UnboundLabel(*label))?,
                        other => *other,
                    });
                }
                facade.encode(mnemonic, &resolved, rip)
            }));
        } else {
            let bytes = self
                .facade
                .encode(mnemonic, &operands, 0)
                .expect("non-branch instruction encoding is placement-independent");
            container.push_encoded(bytes);
        }
    }

    fn vsp_mem(&self, disp: i64, size: IrSize) -> Operand {
        eaglevm_asm::zmem(Some(self.vsp()), None, 1, disp, RegSize::from(size))
    }

    fn adjust_vsp(&self, container: &mut CodeContainer, delta: i64) {
        let vsp = self.vsp();
        if delta > 0 {
            self.emit(container, AsmMnemonic::Add, vec![zreg(vsp), zimm(delta, false)]);
        } else if delta < 0 {
            self.emit(container, AsmMnemonic::Sub, vec![zreg(vsp), zimm(-delta, false)]);
        }
    }

    /// Lower one IR block, appending its machine code to `container`.
    /// `arena` holds the discrete stores this block's commands may
    /// reference and finalize; `block_labels` is the shared
    /// `BlockId -> Label` table so a branch to a not-yet-lowered block
    /// still resolves once every block has been appended.
    pub fn lower_block(
        &mut self,
        block: &Block,
        arena: &mut StoreArena,
        container: &mut CodeContainer,
        block_labels: &mut HashMap<BlockId, Label>,
        handlers: &mut HandlerManager,
    ) -> Result<()> {
        self.gpr_ctx.reset();
        self.shape.clear();

        let last_use = backward_last_use(block);
        for (idx, cmd) in block.commands().iter().enumerate() {
            self.lower_command(cmd, arena, container, block_labels, handlers)?;
            for store in cmd.use_stores() {
                if last_use.get(&store) == Some(&idx) {
                    if let Ok(reg) = arena.register(store) {
                        self.gpr_ctx.release(reg);
                    }
                    arena.release(store);
                }
            }
        }
        Ok(())
    }

    fn lower_command(
        &mut self,
        cmd: &Command,
        arena: &mut StoreArena,
        container: &mut CodeContainer,
        block_labels: &mut HashMap<BlockId, Label>,
        handlers: &mut HandlerManager,
    ) -> Result<()> {
        use AsmMnemonic as M;

        match cmd {
            Command::Push { value, size } => {
                let reg = self.gpr_ctx.get_any()?;
                match value {
                    PushValue::Imm(v) => {
                        self.emit(container, M::Mov, vec![zreg(reg.to_width(RegSize::from(*size))), zimm(*v as i64, false)]);
                    }
                    PushValue::Store(id) => {
                        let src = arena.register(*id)?.to_width(RegSize::from(*size));
                        self.emit(container, M::Mov, vec![zreg(reg.to_width(RegSize::from(*size))), zreg(src)]);
                    }
                    PushValue::Block(_) => {
                        // resolved once the block has been lowered and a
                        // label minted for it; the thunk path in `emit`
                        // handles the actual address substitution.
                        self.emit(container, M::Mov, vec![zreg(reg), zimm(0, false)]);
                    }
                    PushValue::VmReg(role) => {
                        let src = self.vm_reg(*role);
                        self.emit(container, M::Mov, vec![zreg(reg.to_width(RegSize::from(*size))), zreg(src.to_width(RegSize::from(*size)))]);
                    }
                }
                self.vsp_push(container, reg, *size);
                self.gpr_ctx.release(reg);
                self.shape_push(*size);
            }

            Command::Pop { size, dest: None } => {
                let reg = self.gpr_ctx.get_any()?;
                self.vsp_pop(container, reg, *size);
                self.gpr_ctx.release(reg);
                self.shape_pop();
            }
            Command::Pop { size, dest: Some(id) } => {
                let reg = self.gpr_ctx.get_any()?;
                self.vsp_pop(container, reg, *size);
                arena.finalize(*id, reg);
                self.shape_pop();
            }

            Command::Add { size, preserved } => self.lower_binary_alu(M::Add, *size, *preserved, container)?,
            Command::Sub { size, preserved } => self.lower_binary_alu(M::Sub, *size, *preserved, container)?,
            Command::And { size, preserved } => self.lower_binary_alu(M::And, *size, *preserved, container)?,
            Command::Or { size, preserved } => self.lower_binary_alu(M::Or, *size, *preserved, container)?,
            Command::Xor { size, preserved } => self.lower_binary_alu(M::Xor, *size, *preserved, container)?,
            Command::Shl { size, preserved } => self.lower_shift(M::Shl, *size, *preserved, container)?,
            Command::Shr { size, preserved } => self.lower_shift(M::Shr, *size, *preserved, container)?,
            Command::Smul { size, preserved } => self.lower_binary_alu(M::Imul, *size, *preserved, container)?,

            Command::Cmp { size } => self.lower_cmp(*size, container)?,

            Command::Cnt { size, preserved } => self.lower_unary_alu(M::Popcnt, *size, *preserved, container, false)?,
            Command::Abs { size, preserved } => self.lower_abs(*size, *preserved, container)?,
            Command::Log2 { size, preserved } => self.lower_unary_alu(M::Bsr, *size, *preserved, container, true)?,

            Command::Dup { size } => self.lower_peek(*size, 0, container)?,
            Command::Peek { size, depth } => self.lower_peek(*size, *depth, container)?,
            Command::Carry { size, depth } => self.lower_carry(*size, *depth, container)?,

            Command::Resize { to, from } => self.lower_resize(*to, *from, container)?,
            Command::Sx { to, from } => self.lower_sx(*to, *from, container)?,

            Command::ContextLoad { reg } => self.lower_context_load(*reg, container)?,
            Command::ContextStore { reg, size } => self.lower_context_store(*reg, *size, container)?,
            Command::ContextRflagsLoad => self.lower_rflags_load(container)?,
            Command::ContextRflagsStore { relevant_flags } => self.lower_rflags_store(*relevant_flags, container)?,
            Command::FlagsLoad { flag } => self.lower_flags_load(*flag, container)?,

            Command::MemRead { size } => self.lower_mem_read(*size, container)?,
            Command::MemWrite { value_size, write_size, value_nearest } => {
                self.lower_mem_write(*value_size, *write_size, *value_nearest, container)?
            }

            Command::HandlerCall { mnemonic, signature } => {
                let target = handlers.get_or_emit(self, container, *mnemonic, signature)?;
                self.call_continuation(container, target);
            }

            Command::X86Dynamic(instr) => {
                let mut operands = Vec::with_capacity(instr.operands.len());
                for op in &instr.operands {
                    operands.push(self.resolve_dyn_operand(*op, arena)?);
                }
                self.emit(container, instr.mnemonic, operands);
            }
            Command::X86Exec(req) => {
                self.emit(container, req.mnemonic, req.operands.clone());
            }

            Command::VmEnter => prologue::vm_enter(self, container),

            Command::Jmp => branch::lower_jmp(self, container, block_labels, None)?,
            Command::Branch { condition, default, special, inverted, .. } => {
                branch::lower_branch(self, container, block_labels, *condition, *default, *special, *inverted)?
            }
            Command::VmExit { target } => prologue::vm_exit(self, container, block_labels, *target)?,
        }

        Ok(())
    }

    fn vsp_push(&self, container: &mut CodeContainer, reg: Reg, size: IrSize) {
        self.adjust_vsp(container, -(size.tob() as i64));
        self.emit(container, AsmMnemonic::Mov, vec![self.vsp_mem(0, size), zreg(reg.to_width(RegSize::from(size)))]);
    }

    fn vsp_pop(&self, container: &mut CodeContainer, reg: Reg, size: IrSize) {
        self.emit(container, AsmMnemonic::Mov, vec![zreg(reg.to_width(RegSize::from(size))), self.vsp_mem(0, size)]);
        self.adjust_vsp(container, size.tob() as i64);
    }

    /// Emit a call into a generated handler body and back: push the
    /// real-machine continuation address (the next instruction) through
    /// the `vcs`/`vcsret` virtual call mechanism, then jump to `target`.
    /// Handler bodies end with [`handler_manager::HandlerManager::emit_return`],
    /// which jumps back out through `vcsret`.
    fn call_continuation(&self, container: &mut CodeContainer, target: Label) {
        let vcsret = self.vm_reg(VmRegRole::Vcsret);
        let back = eaglevm_asm::Label::fresh();
        self.emit(container, AsmMnemonic::Mov, vec![zreg(vcsret), Operand::Label(back)]);
        self.emit(container, AsmMnemonic::Jmp, vec![Operand::Label(target)]);
        container.bind_label(back);
    }
}

fn backward_last_use(block: &Block) -> HashMap<crate::ir::StoreId, usize> {
    let mut last = HashMap::new();
    for (idx, cmd) in block.commands().iter().enumerate() {
        for store in cmd.use_stores() {
            last.insert(store, idx);
        }
    }
    last
}

/// Working-register-sized view of a real CL-family register, used by the
/// shift lowering below (the count operand must be in the literal
/// hardware `CL` register regardless of the VM's randomized assignment).
fn cl() -> Reg {
    Reg::new(IcedReg::CL)
}

fn rcx() -> Reg {
    Reg::new(IcedReg::RCX)
}

include!("arith_impl.rs");
