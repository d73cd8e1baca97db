//! Handler generators for `shl`/`shr`.
//!
//! Same entry shape as the arithmetic family: `[.., value, count]` with
//! `count` on top. `shr` additionally folds OF from the value's original
//! sign bit (spec.md §4.6); `shl`'s OF is architecturally only defined
//! for single-bit shifts and this backend does not attempt it.

use eaglevm_types::IrSize;

use crate::error::Result;
use crate::ir::{Command, PushValue, VmMnemonic, CF_OF_SF_ZF_PF};

use super::flags::{calculate_pf, calculate_sf, calculate_shift_cf, calculate_shift_of, calculate_zf, OperandDepths};
use super::{HandlerGenerator, HandlerGeneratorRegistry};

struct ShiftGenerator {
    is_right: bool,
}

impl HandlerGenerator for ShiftGenerator {
    fn signatures(&self) -> &[&[IrSize]] {
        &[&[IrSize::Bit8, IrSize::Bit8], &[IrSize::Bit16, IrSize::Bit16], &[IrSize::Bit32, IrSize::Bit32], &[IrSize::Bit64, IrSize::Bit64]]
    }

    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let size = sizes[0];
        let raw = if self.is_right {
            Command::Shr { size, preserved: true }
        } else {
            Command::Shl { size, preserved: true }
        };

        let mut out = vec![raw];
        out.push(Command::Push { value: PushValue::Imm(0), size: IrSize::Bit64 });

        let depths = OperandDepths { result: 1, rhs: Some(2), lhs: 3 };
        out.extend(calculate_sf(depths, size));
        out.extend(calculate_zf(depths, size));
        out.extend(calculate_pf(depths, size));
        out.extend(calculate_shift_cf(depths, size));
        if self.is_right {
            out.extend(calculate_shift_of(depths, size));
        }

        out.push(Command::ContextRflagsStore { relevant_flags: CF_OF_SF_ZF_PF });
        // stack: [.., lhs, rhs, result]; drop the preserved operands.
        out.push(Command::Carry { size, depth: size.tob() * 2 });
        out.push(Command::Pop { size, dest: None });
        out.push(Command::Pop { size, dest: None });
        Ok(out)
    }
}

pub fn register(reg: &mut HandlerGeneratorRegistry) {
    reg.register(VmMnemonic::Shl, Box::new(ShiftGenerator { is_right: false }));
    reg.register(VmMnemonic::Shr, Box::new(ShiftGenerator { is_right: true }));
}
