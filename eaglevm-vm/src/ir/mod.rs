//! The stack-machine intermediate representation: commands, basic
//! blocks, discrete stores, and the two flag registers the backend
//! reasons about.

pub mod command;
pub mod flags;
pub mod store;

pub use command::{
    dyn_encode, resolve_vm_reg, Block, BlockBuilder, BlockId, Command, DynInstr, DynOperand,
    ExitCondition, ExitTarget, HandlerSignature, PushValue, VmMnemonic, X86Request,
};
pub use flags::{VmFlag, X86Flag, CF_OF_SF_ZF_PF, VM_FLAGS};
pub use store::{DiscreteStore, StoreArena, StoreId, StoreState};
