//! The IR command set, lifter and handler-generator registries, and the
//! machine/handler-manager backend that lowers IR to x86-64.
//!
//! The crate end users actually drive is [`machine::Machine::lower_block`]:
//! feed it one [`ir::Block`] (built by [`lifter::LifterRegistry::lift`] or
//! by hand through [`ir::BlockBuilder`]) plus a [`ir::StoreArena`] scoped to
//! that block, and it appends the block's machine code to a shared
//! [`eaglevm_asm::CodeContainer`].

pub mod error;
pub mod handlers;
pub mod ir;
pub mod lifter;
pub mod machine;
pub mod settings;

/// A symbolic interpreter over [`Command`] sequences, used by this
/// crate's own test suite in place of assembling and executing real
/// machine code (spec.md §8's round-trip scenarios, reinterpreted at the
/// IR level — see `sim`'s module docs). Gated behind `test-helpers`
/// rather than left unconditionally public, matching how `fuel-tx` and
/// `fuel-merkle` ship their test scaffolding behind a `test-helpers`
/// feature rather than in the default build.
#[cfg(feature = "test-helpers")]
pub mod sim;

pub use error::{Error, Result};
pub use handlers::HandlerGeneratorRegistry;
pub use ir::{Block, BlockBuilder, BlockId, Command, StoreArena};
pub use lifter::LifterRegistry;
pub use machine::{HandlerManager, Machine};
pub use settings::Settings;
