//! Per-(mnemonic, signature) and per-register handler-body caching
//! (spec.md §4.6, §4.7, §4.8): generates a variant the first time it's
//! needed, then reuses one of the already-emitted variants with
//! probability `1 - Settings::chance_to_generate_register_handler`.

use std::collections::HashMap;

use eaglevm_asm::{zreg, CodeContainer, Label, Mnemonic as AsmMnemonic, Reg, VmRegRole};
use eaglevm_types::IrSize;
use rand::rngs::StdRng;
use rand::Rng;

use crate::error::Result;
use crate::ir::{HandlerSignature, StoreArena, VmMnemonic};

use super::{registers, stack, Machine};

/// Owns the RNG that drives handler-variant reuse decisions, plus every
/// variant generated so far, keyed by what it implements.
pub struct HandlerManager {
    rng: StdRng,
    call_variants: HashMap<(VmMnemonic, HandlerSignature), Vec<Label>>,
    load_variants: HashMap<Reg, Vec<Label>>,
    store_variants: HashMap<(Reg, IrSize), Vec<Label>>,
    push_variants: HashMap<(Reg, IrSize), Vec<Label>>,
    pop_variants: HashMap<(Reg, IrSize), Vec<Label>>,
}

impl HandlerManager {
    /// Build an empty manager seeded with `rng` (the embedder's own seed,
    /// not re-derived from the machine's register-shuffle RNG — handler
    /// reuse and register placement are independent random decisions).
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            call_variants: HashMap::new(),
            load_variants: HashMap::new(),
            store_variants: HashMap::new(),
            push_variants: HashMap::new(),
            pop_variants: HashMap::new(),
        }
    }

    /// Resolve `mnemonic`'s handler at `signature`, synthesizing it the
    /// first time and thereafter reusing a random existing variant per
    /// `Settings::chance_to_generate_register_handler`.
    #[tracing::instrument(skip(self, machine, container), fields(mnemonic = mnemonic.name(), signature = %signature))]
    pub fn get_or_emit(
        &mut self,
        machine: &mut Machine,
        container: &mut CodeContainer,
        mnemonic: VmMnemonic,
        signature: &HandlerSignature,
    ) -> Result<Label> {
        let key = (mnemonic, signature.clone());
        let chance = machine.settings().chance_to_generate_register_handler;
        if let Some(label) = pick_existing(&mut self.rng, chance, self.call_variants.get(&key)) {
            tracing::trace!("reusing call handler variant");
            return Ok(label);
        }

        let commands = machine.generators().generate(mnemonic, signature, &signature.sizes())?;
        let label = Label::fresh();
        container.bind_label(label);

        machine.reset_shape(&signature.sizes());
        let mut arena = StoreArena::new();
        let mut block_labels = HashMap::new();
        for cmd in &commands {
            machine.lower_command(cmd, &mut arena, container, &mut block_labels, self)?;
        }
        self.emit_return(machine, container);

        self.call_variants.entry(key).or_default().push(label);
        Ok(label)
    }

    /// Resolve a context-load handler for `reg`, used by the register-file
    /// caching path (the always-inline path in `arith_impl.rs` calls
    /// `registers::emit_load_body` directly instead).
    pub fn get_or_emit_load(&mut self, machine: &mut Machine, container: &mut CodeContainer, reg: Reg) -> Result<Label> {
        let chance = machine.settings().chance_to_generate_register_handler;
        if let Some(label) = pick_existing(&mut self.rng, chance, self.load_variants.get(&reg)) {
            return Ok(label);
        }

        let label = Label::fresh();
        container.bind_label(label);
        registers::emit_load_body(machine, container, reg)?;
        self.emit_return(machine, container);

        self.load_variants.entry(reg).or_default().push(label);
        Ok(label)
    }

    /// Resolve a context-store handler for `(reg, size)`.
    pub fn get_or_emit_store(
        &mut self,
        machine: &mut Machine,
        container: &mut CodeContainer,
        reg: Reg,
        size: IrSize,
    ) -> Result<Label> {
        let key = (reg, size);
        let chance = machine.settings().chance_to_generate_register_handler;
        if let Some(label) = pick_existing(&mut self.rng, chance, self.store_variants.get(&key)) {
            return Ok(label);
        }

        let label = Label::fresh();
        container.bind_label(label);
        registers::emit_store_body(machine, container, reg, size)?;
        self.emit_return(machine, container);

        self.store_variants.entry(key).or_default().push(label);
        Ok(label)
    }

    /// Resolve a push handler for `(reg, size)` (spec.md §4.8).
    pub fn get_or_emit_push(
        &mut self,
        machine: &mut Machine,
        container: &mut CodeContainer,
        reg: Reg,
        size: IrSize,
    ) -> Result<Label> {
        let key = (reg, size);
        let chance = machine.settings().chance_to_generate_register_handler;
        if let Some(label) = pick_existing(&mut self.rng, chance, self.push_variants.get(&key)) {
            return Ok(label);
        }

        let label = Label::fresh();
        container.bind_label(label);
        stack::emit_push_body(machine, container, reg, size);
        self.emit_return(machine, container);

        self.push_variants.entry(key).or_default().push(label);
        Ok(label)
    }

    /// Resolve a pop handler for `(reg, size)` (spec.md §4.8).
    pub fn get_or_emit_pop(
        &mut self,
        machine: &mut Machine,
        container: &mut CodeContainer,
        reg: Reg,
        size: IrSize,
    ) -> Result<Label> {
        let key = (reg, size);
        let chance = machine.settings().chance_to_generate_register_handler;
        if let Some(label) = pick_existing(&mut self.rng, chance, self.pop_variants.get(&key)) {
            return Ok(label);
        }

        let label = Label::fresh();
        container.bind_label(label);
        stack::emit_pop_body(machine, container, reg, size);
        self.emit_return(machine, container);

        self.pop_variants.entry(key).or_default().push(label);
        Ok(label)
    }

    /// Every generated handler body ends by jumping back through `vcsret`
    /// to whatever call site reached it via [`Machine::call_continuation`].
    fn emit_return(&self, machine: &Machine, container: &mut CodeContainer) {
        let vcsret = machine.vm_reg(VmRegRole::Vcsret);
        machine.emit(container, AsmMnemonic::Jmp, vec![zreg(vcsret)]);
    }
}

/// Pick a uniformly random already-emitted variant with probability
/// `1 - chance`, or `None` to signal the caller should synthesize a fresh
/// one (always `None` when no variant exists yet). A free function, not a
/// method, so the caller can borrow `rng` and the relevant variants map as
/// two disjoint fields of the same `HandlerManager` at once.
fn pick_existing(rng: &mut StdRng, chance: f64, variants: Option<&Vec<Label>>) -> Option<Label> {
    let variants = variants?;
    if variants.is_empty() {
        return None;
    }
    if rng.gen_bool(chance) {
        return None;
    }
    let idx = rng.gen_range(0..variants.len());
    Some(variants[idx])
}
