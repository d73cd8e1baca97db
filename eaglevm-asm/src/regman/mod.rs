//! Assignment of physical registers to VM roles, reserved temporaries and
//! the randomized virtual-register-file bit mapping.

use eaglevm_types::{BitRange, MappedRange, RegSize};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::reg::{gpr64_registers, Reg, XMM_REGISTERS};

mod context;
pub use context::{RegisterContext, ScopeGuard};

/// The seven synthetic registers the machine backend threads through
/// every generated handler (spec.md's VM register roles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmRegRole {
    /// Virtual instruction pointer.
    Vip,
    /// Virtual stack pointer.
    Vsp,
    /// Base of the randomized virtual register file.
    Vregs,
    /// Virtual call-stack pointer.
    Vcs,
    /// Slot holding a call's return continuation.
    Vcsret,
    /// RIP-relative image base of the generated VM.
    Vbase,
    /// Virtual RFLAGS accumulator.
    Vflags,
}

const ROLE_COUNT: usize = 7;
const ROLE_ORDER: [VmRegRole; ROLE_COUNT] = [
    VmRegRole::Vip,
    VmRegRole::Vsp,
    VmRegRole::Vregs,
    VmRegRole::Vcs,
    VmRegRole::Vcsret,
    VmRegRole::Vbase,
    VmRegRole::Vflags,
];

/// Default number of reserved scratch temporaries (distinct from the
/// unreserved pool that backs the virtual register file mapping).
const DEFAULT_RESERVED_TEMPS: usize = 4;

/// Widest and narrowest chunk width `create_mappings` will carve a source
/// register's 64 bits into.
const MIN_CHUNK_BITS: u16 = 1;
const MAX_CHUNK_BITS: u16 = 16;

/// Assigns physical registers to VM roles and reserved temporaries, and
/// builds the randomized bit-level mapping from the 16 virtual GPR64s
/// onto the leftover ("unreserved") pool of GPR64 and XMM128 registers.
///
/// Read-only once [`Self::create_mappings`] has run (`machine.cpp`'s
/// shared-resource discipline: the register manager is built once per
/// generated VM and never mutated again while blocks are lowered).
pub struct RegisterManager {
    roles: HashMap<VmRegRole, Reg>,
    reserved_temps: Vec<Reg>,
    unreserved_pool: Vec<Reg>,
    mappings: HashMap<Reg, Vec<MappedRange<Reg>>>,
}

impl RegisterManager {
    /// Randomly permute the physical GPR64s and XMM128s, then
    /// deterministically assign the first registers to VM roles, the
    /// next [`DEFAULT_RESERVED_TEMPS`] to reserved temps, and the rest to
    /// the unreserved pool that backs the virtual register file.
    ///
    /// RSP and RCX never enter this shuffle: RSP stays the genuine
    /// hardware stack pointer (the non-relative `jump_to_target` path
    /// emits a real `push`/`ret` pair), and RCX stays free for variable
    /// shifts, which require their count in the literal `CL` register.
    /// Both remain part of the 16-register virtual file `create_mappings`
    /// scatters below, since guest code can still reference them as
    /// ordinary GPRs.
    pub fn init_reg_order<R: Rng>(rng: &mut R) -> Self {
        let mut gprs: Vec<Reg> = gpr64_registers()
            .iter()
            .copied()
            .filter(|r| r.inner() != iced_x86::Register::RSP && r.inner() != iced_x86::Register::RCX)
            .collect();
        gprs.shuffle(rng);

        let mut roles = HashMap::with_capacity(ROLE_COUNT);
        let mut cursor = 0;
        for role in ROLE_ORDER {
            roles.insert(role, gprs[cursor]);
            cursor += 1;
        }

        let reserved_temps = gprs[cursor..cursor + DEFAULT_RESERVED_TEMPS].to_vec();
        cursor += DEFAULT_RESERVED_TEMPS;

        let mut unreserved_pool: Vec<Reg> = gprs[cursor..].to_vec();
        let mut xmms: Vec<Reg> = XMM_REGISTERS.iter().copied().map(Reg::new).collect();
        xmms.shuffle(rng);
        unreserved_pool.extend(xmms);

        Self {
            roles,
            reserved_temps,
            unreserved_pool,
            mappings: HashMap::new(),
        }
    }

    /// Partition every virtual GPR64's 64 bits into random-width
    /// contiguous pieces and scatter them across random free bit-ranges
    /// of the unreserved pool.
    pub fn create_mappings<R: Rng>(&mut self, rng: &mut R) {
        let mut occupied: HashMap<Reg, Vec<BitRange>> = self
            .unreserved_pool
            .iter()
            .map(|r| (*r, Vec::new()))
            .collect();

        let mut order = gpr64_registers().to_vec();
        order.shuffle(rng);

        for source in order {
            let mut ranges = Vec::new();
            let mut cursor: u16 = 0;
            while cursor < 64 {
                let max_width = (64 - cursor).min(MAX_CHUNK_BITS);
                let width = if max_width <= MIN_CHUNK_BITS {
                    max_width
                } else {
                    rng.gen_range(MIN_CHUNK_BITS..=max_width)
                };
                let source_range = BitRange::new(cursor, cursor + width);

                let (dest_reg, dest_range) =
                    self.place_chunk(rng, width, &mut occupied);
                ranges.push(MappedRange::new(source_range, dest_range, dest_reg));

                cursor += width;
            }
            self.mappings.insert(source, ranges);
        }
    }

    fn place_chunk<R: Rng>(
        &self,
        rng: &mut R,
        width: u16,
        occupied: &mut HashMap<Reg, Vec<BitRange>>,
    ) -> (Reg, BitRange) {
        let mut candidates = self.unreserved_pool.clone();
        candidates.shuffle(rng);

        for reg in candidates {
            let capacity = reg.class_of().capacity_bits();
            let taken = &occupied[&reg];
            let mut starts: Vec<u16> = (0..=capacity.saturating_sub(width))
                .filter(|&start| {
                    let candidate = BitRange::new(start, start + width);
                    !taken.iter().any(|r| r.overlaps(&candidate))
                })
                .collect();
            if starts.is_empty() {
                continue;
            }
            starts.shuffle(rng);
            let start = starts[0];
            let range = BitRange::new(start, start + width);
            occupied.get_mut(&reg).unwrap().push(range);
            return (reg, range);
        }

        unreachable!("unreserved pool exhausted while placing a {width}-bit chunk")
    }

    /// The mapping for virtual source register `reg`, truncated to the
    /// requested width: pieces entirely above `width` are dropped.
    pub fn get_register_mapped_ranges(&self, reg: Reg, width: RegSize) -> Vec<MappedRange<Reg>> {
        let bits = width.bits() as u16;
        self.mappings
            .get(&reg)
            .into_iter()
            .flatten()
            .filter(|mapped| mapped.source.to <= bits)
            .copied()
            .collect()
    }

    /// The physical register assigned to a VM role.
    pub fn get_vm_reg(&self, role: VmRegRole) -> Reg {
        self.roles[&role]
    }

    /// The `i`-th reserved scratch temporary.
    pub fn get_reserved_temp(&self, i: usize) -> Reg {
        self.reserved_temps[i]
    }

    /// The `i`-th register in the unreserved pool (used by the working
    /// register allocator as an "any free register" fallback).
    pub fn get_unreserved_temp(&self, i: usize) -> Reg {
        self.unreserved_pool[i]
    }

    /// How many registers back the unreserved pool.
    pub fn unreserved_pool_len(&self) -> usize {
        self.unreserved_pool.len()
    }

    /// The GPR64 slice of the unreserved pool, for seeding a 64-bit-class
    /// [`RegisterContext`].
    pub fn unreserved_gpr_pool(&self) -> Vec<Reg> {
        self.unreserved_pool
            .iter()
            .copied()
            .filter(|r| r.class_of() == crate::reg::RegClass::Gpr64)
            .collect()
    }

    /// The XMM128 slice of the unreserved pool, for seeding a 128-bit-class
    /// [`RegisterContext`].
    pub fn unreserved_xmm_pool(&self) -> Vec<Reg> {
        self.unreserved_pool
            .iter()
            .copied()
            .filter(|r| r.class_of() == crate::reg::RegClass::Xmm128)
            .collect()
    }
}
