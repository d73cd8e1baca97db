//! `vm_enter`/`vm_exit` (spec.md §4.7): the two places generated code
//! crosses the boundary between the real machine and the virtualized one.

use eaglevm_asm::{zreg, CodeContainer, Label, Mnemonic as AsmMnemonic, VmRegRole};

use crate::error::Result;
use crate::ir::{BlockId, ExitTarget};

use super::{branch, Machine};

/// Establish `vbase`, the position-independent anchor every `ExitTarget::Rva`
/// is resolved against, via the classic `call $+5; pop reg` idiom (the only
/// way to materialize a runtime address in code that carries no relocations
/// of its own). Routed through [`Machine::emit`]'s label-thunk path rather
/// than an actual RIP-relative memory operand, since the non-thunk path
/// hardcodes `rip = 0`.
pub(super) fn vm_enter(machine: &mut Machine, container: &mut CodeContainer) {
    let here = Label::fresh();
    machine.emit(container, AsmMnemonic::Call, vec![eaglevm_asm::Operand::Label(here)]);
    container.bind_label(here);

    let vbase = machine.vm_reg(VmRegRole::Vbase);
    machine.emit(container, AsmMnemonic::Pop, vec![zreg(vbase)]);
}

/// Leave the virtualized dispatch loop for `target`, either a successor
/// block or a raw return address, per `Settings::relative_addressing`.
pub(super) fn vm_exit(
    machine: &mut Machine,
    container: &mut CodeContainer,
    block_labels: &mut std::collections::HashMap<BlockId, Label>,
    target: ExitTarget,
) -> Result<()> {
    branch::jump_to_target(machine, container, block_labels, target)
}
