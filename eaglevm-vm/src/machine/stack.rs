//! Cached push/pop handler bodies (spec.md §4.8): a `(reg, size)`-keyed
//! handler body moving a physical register's value to and from the IR
//! value stack, synthesized through [`super::HandlerManager`] the same
//! way its other variant caches are.
//!
//! The inline `Command::Push`/`Command::Pop` dispatch in `machine/mod.rs`
//! does not go through this cache — it lowers those commands directly via
//! [`Machine::vsp_push`]/[`Machine::vsp_pop`]. This module is a separate,
//! directly callable surface for a caller that wants a handler-call-style
//! push/pop instead of an inlined one.

use eaglevm_asm::{CodeContainer, Reg};
use eaglevm_types::IrSize;

use super::Machine;

pub(super) fn emit_push_body(machine: &mut Machine, container: &mut CodeContainer, reg: Reg, size: IrSize) {
    machine.vsp_push(container, reg, size);
}

pub(super) fn emit_pop_body(machine: &mut Machine, container: &mut CodeContainer, reg: Reg, size: IrSize) {
    machine.vsp_pop(container, reg, size);
}
