use eaglevm_asm::{Mnemonic as AsmMnemonic, Operand, Reg, RegisterManager, VmRegRole};
use eaglevm_types::IrSize;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::ir::flags::VmFlag;
use crate::ir::store::StoreId;

/// Opaque handle to a basic block, minted fresh the way
/// [`eaglevm_asm::Label`] is (Design Note "Code containers": an integer
/// id resolved through a side table, never a pointer). The machine keeps
/// a `BlockId -> Label` table (`block_context` in the original) once a
/// block has actually been lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(u64);

static NEXT_BLOCK: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

impl BlockId {
    /// Mint a fresh block id, distinct from every other one in this process.
    pub fn fresh() -> Self {
        Self(NEXT_BLOCK.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }
}

/// The virtualized mnemonic set a [`Command::HandlerCall`] may target —
/// the "registered lifter" set of SPEC_FULL.md §4.3, exactly the
/// mnemonics that have both a lifter and a handler generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmMnemonic {
    Add,
    Sub,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Smul,
    Cmp,
    Cnt,
    Abs,
    Log2,
    Jmp,
}

impl VmMnemonic {
    /// Lowercase name used as the first token of a handler signature
    /// string (spec.md §4.6's `"shr 64,64"` keys).
    pub fn name(self) -> &'static str {
        match self {
            VmMnemonic::Add => "add",
            VmMnemonic::Sub => "sub",
            VmMnemonic::And => "and",
            VmMnemonic::Or => "or",
            VmMnemonic::Xor => "xor",
            VmMnemonic::Shl => "shl",
            VmMnemonic::Shr => "shr",
            VmMnemonic::Smul => "smul",
            VmMnemonic::Cmp => "cmp",
            VmMnemonic::Cnt => "cnt",
            VmMnemonic::Abs => "abs",
            VmMnemonic::Log2 => "log2",
            VmMnemonic::Jmp => "jmp",
        }
    }
}

/// A handler's operand-size signature, rendered as the original's own
/// string keys for exact parity with its `valid_operands`/`build_options`
/// ledgers (spec.md §4.6).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerSignature(String);

impl HandlerSignature {
    /// Build a signature string like `"shr 64,64"` from a mnemonic and
    /// its IR-size operands.
    pub fn new(mnemonic: VmMnemonic, sizes: &[IrSize]) -> Self {
        let joined = sizes
            .iter()
            .map(|s| s.bits().to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self(format!("{} {joined}", mnemonic.name()))
    }

    /// The raw string key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the operand widths encoded in this signature's string key,
    /// so a handler-call site only has to carry the string (matching the
    /// original's own string-keyed lookup) while the machine backend can
    /// still hand the generator typed sizes.
    pub fn sizes(&self) -> Vec<IrSize> {
        self.0
            .split_once(' ')
            .map(|(_, widths)| widths)
            .unwrap_or("")
            .split(',')
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse::<u32>().ok())
            .map(|bits| match bits {
                8 => IrSize::Bit8,
                16 => IrSize::Bit16,
                32 => IrSize::Bit32,
                64 => IrSize::Bit64,
                128 => IrSize::Bit128,
                _ => IrSize::None,
            })
            .collect()
    }
}

impl std::fmt::Display for HandlerSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A value that can be pushed onto the IR value-stack (spec.md §4.4
/// `push`). Mirrors the original's `push_val` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushValue {
    /// A constant.
    Imm(u64),
    /// An already-finalized discrete store.
    Store(StoreId),
    /// The address of a block, resolved once the block has a label.
    Block(BlockId),
    /// The current value of a synthetic VM register.
    VmReg(VmRegRole),
}

/// Either a raw RVA or a block reference — spec.md's `vm_exit`/branch
/// target representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTarget {
    /// A concrete, already-known return address.
    Rva(u64),
    /// A block whose label is resolved once it has been lowered.
    Block(BlockId),
}

/// Branch condition codes (spec.md §4.4 `branch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCondition {
    Jmp,
    Jo,
    Js,
    Je,
    Jb,
    Jbe,
    Jl,
    Jle,
    Jp,
    Jcxz,
    Jecxz,
    Jrcxz,
}

impl ExitCondition {
    /// Whether this condition has a meaningful inverted form. `jcxz` and
    /// its relatives don't (spec.md §4.7 "For invalid-in-the-lookup
    /// conditions... the inverted form is absent and must not be
    /// requested").
    pub fn has_inverse(self) -> bool {
        !matches!(self, ExitCondition::Jcxz | ExitCondition::Jecxz | ExitCondition::Jrcxz)
    }
}

/// A structured operand to [`Command::X86Dynamic`]: resolved against the
/// live machine state (a discrete store's bound register, a VM role's
/// physical register) only at emit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynOperand {
    Store(StoreId),
    VmReg(VmRegRole),
    Reg(Reg),
    Imm(i64, bool),
}

/// One `x86_dynamic` request: a mnemonic plus structured operands that
/// are resolved just before encoding (supplements spec.md with the
/// original's `make_dyn<Operands...>` free function).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynInstr {
    pub mnemonic: AsmMnemonic,
    pub operands: Vec<DynOperand>,
}

/// Build an `x86_dynamic` command from a mnemonic and its operands.
pub fn dyn_encode(mnemonic: AsmMnemonic, operands: &[DynOperand]) -> Command {
    Command::X86Dynamic(DynInstr {
        mnemonic,
        operands: operands.to_vec(),
    })
}

/// A pre-built, fully-resolved encoder request (spec.md §4.4 `x86_exec`).
#[derive(Debug, Clone, PartialEq)]
pub struct X86Request {
    pub mnemonic: AsmMnemonic,
    pub operands: Vec<Operand>,
}

/// The IR command set: a closed tagged sum, one variant per command kind
/// (Design Note "Tagged IR commands") — the machine's lowering dispatcher
/// is a single `match` over this type, with no virtual-method hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Push {
        value: PushValue,
        size: IrSize,
    },
    Pop {
        size: IrSize,
        dest: Option<StoreId>,
    },

    Add { size: IrSize, preserved: bool },
    Sub { size: IrSize, preserved: bool },
    And { size: IrSize, preserved: bool },
    Or { size: IrSize, preserved: bool },
    Xor { size: IrSize, preserved: bool },
    Shl { size: IrSize, preserved: bool },
    Shr { size: IrSize, preserved: bool },
    Smul { size: IrSize, preserved: bool },
    Cmp { size: IrSize },
    Cnt { size: IrSize, preserved: bool },
    Abs { size: IrSize, preserved: bool },
    Log2 { size: IrSize, preserved: bool },
    Dup { size: IrSize },

    /// Push a non-destructive copy of the value `depth` slots below the
    /// current top (`depth == 0` is equivalent to [`Command::Dup`]).
    /// Supplements spec.md with the original's `copy_to_top` utility
    /// (`shr.cpp`'s flag-computation helpers read preserved operands this
    /// way rather than by popping and re-pushing them).
    Peek { size: IrSize, depth: usize },

    Resize { to: IrSize, from: IrSize },
    Sx { to: IrSize, from: IrSize },

    /// Move the top-of-stack value down by `depth` bytes, shifting
    /// intervening values upward by `size` (spec.md §9, the informally
    /// specified `carry`).
    Carry { size: IrSize, depth: usize },

    ContextLoad { reg: Reg },
    ContextStore { reg: Reg, size: IrSize },
    ContextRflagsLoad,
    ContextRflagsStore { relevant_flags: u64 },
    FlagsLoad { flag: VmFlag },

    MemRead { size: IrSize },
    MemWrite { value_size: IrSize, write_size: IrSize, value_nearest: bool },

    HandlerCall { mnemonic: VmMnemonic, signature: HandlerSignature },
    X86Dynamic(DynInstr),
    X86Exec(X86Request),

    VmEnter,

    // --- terminators ---
    Jmp,
    Branch {
        condition: ExitCondition,
        default: ExitTarget,
        special: Option<ExitTarget>,
        inverted: bool,
        is_virtual: bool,
    },
    VmExit { target: ExitTarget },
}

impl Command {
    /// The discrete stores this command reads or writes, for the
    /// per-block liveness pass (spec.md §4.4).
    pub fn use_stores(&self) -> SmallVec<[StoreId; 4]> {
        let mut out = SmallVec::new();
        match self {
            Command::Push { value: PushValue::Store(id), .. } => out.push(*id),
            Command::Pop { dest: Some(id), .. } => out.push(*id),
            Command::X86Dynamic(instr) => {
                for op in &instr.operands {
                    if let DynOperand::Store(id) = op {
                        out.push(*id);
                    }
                }
            }
            _ => {}
        }
        out
    }

    /// Whether this command is a terminator (spec.md §3 `block` invariant:
    /// exactly one terminator, as the last command).
    pub fn is_terminator(&self) -> bool {
        matches!(self, Command::Jmp | Command::Branch { .. } | Command::VmExit { .. })
    }
}

/// An ordered sequence of IR commands, terminated by exactly one of
/// `branch`, `jmp`, `vm_exit` (spec.md §3 `block`).
#[derive(Debug, Clone, Default)]
pub struct Block {
    commands: Vec<Command>,
}

impl Block {
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Borrow the command at `idx`.
    pub fn at(&self, idx: usize) -> &Command {
        &self.commands[idx]
    }
}

/// Accumulates commands and validates the exactly-one-terminator
/// invariant on [`Self::build`] — grounded on the original's
/// `block_builder`'s fluent `.add_*()` / `.append()` chain
/// (`block_builder.h`).
#[derive(Debug, Clone, Default)]
pub struct BlockBuilder {
    commands: Vec<Command>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one command. Panics in debug builds if called after a
    /// terminator has already been appended, catching the common bug of
    /// emitting dead code after a block's exit.
    pub fn add(&mut self, cmd: Command) -> &mut Self {
        debug_assert!(
            !self.commands.last().is_some_and(Command::is_terminator),
            "command appended after a terminator"
        );
        self.commands.push(cmd);
        self
    }

    /// Splice in a sequence of commands generated elsewhere (the
    /// original's `.append(ir_insts)` — used to stitch a handler
    /// generator's flag-computation helpers into the main body).
    pub fn append(&mut self, commands: impl IntoIterator<Item = Command>) -> &mut Self {
        for cmd in commands {
            self.add(cmd);
        }
        self
    }

    pub fn add_push(&mut self, value: PushValue, size: IrSize) -> &mut Self {
        self.add(Command::Push { value, size })
    }

    pub fn add_push_imm(&mut self, value: u64, size: IrSize) -> &mut Self {
        self.add_push(PushValue::Imm(value), size)
    }

    pub fn add_pop(&mut self, size: IrSize) -> &mut Self {
        self.add(Command::Pop { size, dest: None })
    }

    pub fn add_pop_into(&mut self, size: IrSize, dest: StoreId) -> &mut Self {
        self.add(Command::Pop { size, dest: Some(dest) })
    }

    pub fn add_and(&mut self, size: IrSize) -> &mut Self {
        self.add(Command::And { size, preserved: false })
    }

    pub fn add_or(&mut self, size: IrSize) -> &mut Self {
        self.add(Command::Or { size, preserved: false })
    }

    pub fn add_shl(&mut self, size: IrSize, preserved: bool) -> &mut Self {
        self.add(Command::Shl { size, preserved })
    }

    pub fn add_shr(&mut self, size: IrSize, preserved: bool) -> &mut Self {
        self.add(Command::Shr { size, preserved })
    }

    pub fn add_context_rflags_load(&mut self) -> &mut Self {
        self.add(Command::ContextRflagsLoad)
    }

    pub fn add_context_rflags_store(&mut self, relevant_flags: u64) -> &mut Self {
        self.add(Command::ContextRflagsStore { relevant_flags })
    }

    pub fn add_resize(&mut self, to: IrSize, from: IrSize) -> &mut Self {
        self.add(Command::Resize { to, from })
    }

    /// Whether the last command appended so far is a terminator.
    pub fn last_is_terminator(&self) -> bool {
        self.commands.last().is_some_and(Command::is_terminator)
    }

    /// Finalize the block, checking that it carries exactly one
    /// terminator and that it's the last command.
    pub fn build(self) -> Result<Block> {
        let terminator_count = self.commands.iter().filter(|c| c.is_terminator()).count();
        if terminator_count != 1 {
            return Err(Error::PreconditionViolation(format!(
                "block must have exactly one terminator, found {terminator_count}"
            )));
        }
        if !self.commands.last().is_some_and(Command::is_terminator) {
            return Err(Error::PreconditionViolation(
                "block's terminator must be its last command".into(),
            ));
        }
        Ok(Block { commands: self.commands })
    }
}

/// Looks up the physical register backing a VM role; used by command
/// lowering wherever a `PushValue::VmReg`/`DynOperand::VmReg` needs
/// resolving.
pub fn resolve_vm_reg(regs: &RegisterManager, role: VmRegRole) -> Reg {
    regs.get_vm_reg(role)
}
