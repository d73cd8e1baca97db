use eaglevm_asm::Reg;
use eaglevm_types::IrSize;

use crate::error::{Error, Result};

/// An index into a [`StoreArena`], identifying one [`DiscreteStore`]
/// (spec.md's `discrete_store`, Design Note "Discrete stores as arena
/// handles"). Back-references from commands to stores are indices, not
/// shared pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(pub(crate) u32);

/// Lifecycle state of one IR-level value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No physical register bound yet.
    Unfinalized,
    /// Bound to a physical register by the backend's allocator.
    Finalized(Reg),
    /// The register slot has been returned to its pool; reading this
    /// store again is a bug (spec.md §3).
    Released,
}

/// One lifetime-scoped IR-level value of known width.
#[derive(Debug, Clone)]
pub struct DiscreteStore {
    size: IrSize,
    state: StoreState,
}

impl DiscreteStore {
    fn new(size: IrSize) -> Self {
        Self {
            size,
            state: StoreState::Unfinalized,
        }
    }

    /// Width of this value.
    pub fn size(&self) -> IrSize {
        self.size
    }

    /// Whether this store has been bound to a physical register yet.
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, StoreState::Finalized(_))
    }

    /// The physical register this store resolves to.
    ///
    /// # Errors
    /// Returns [`Error::StoreReleased`] if the store has already been
    /// released, and a precondition violation if it was never finalized.
    pub fn register(&self, id: StoreId) -> Result<Reg> {
        match self.state {
            StoreState::Finalized(reg) => Ok(reg),
            StoreState::Released => Err(Error::StoreReleased(id)),
            StoreState::Unfinalized => Err(Error::PreconditionViolation(format!(
                "store {id:?} read before being finalized"
            ))),
        }
    }
}

/// Owns every [`DiscreteStore`] created while lowering one [`crate::ir::Block`].
///
/// Cross-block liveness is explicitly not supported (spec.md §4.7): a
/// `StoreArena` is scoped to exactly one block's lowering pass.
#[derive(Debug, Default)]
pub struct StoreArena {
    slots: Vec<DiscreteStore>,
}

impl StoreArena {
    /// A fresh, empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new, unfinalized store of the given width.
    pub fn alloc(&mut self, size: IrSize) -> StoreId {
        let id = StoreId(self.slots.len() as u32);
        self.slots.push(DiscreteStore::new(size));
        id
    }

    /// Bind `id` to a physical register.
    pub fn finalize(&mut self, id: StoreId, reg: Reg) {
        self.slots[id.0 as usize].state = StoreState::Finalized(reg);
    }

    /// Release `id`'s register slot back to its pool. Idempotent.
    pub fn release(&mut self, id: StoreId) {
        self.slots[id.0 as usize].state = StoreState::Released;
    }

    /// Look up a store by id.
    pub fn get(&self, id: StoreId) -> &DiscreteStore {
        &self.slots[id.0 as usize]
    }

    /// The register a store resolves to, or an error if it isn't finalized
    /// or has already been released.
    pub fn register(&self, id: StoreId) -> Result<Reg> {
        self.get(id).register(id)
    }

    /// Width of a store.
    pub fn size(&self, id: StoreId) -> IrSize {
        self.get(id).size()
    }
}
