//! Per-mnemonic handler generators: synthesize the IR body implementing
//! one mnemonic's semantics for one operand-size signature, including
//! flag computation (spec.md §4.6).

use std::collections::HashMap;

use eaglevm_types::IrSize;

use crate::error::{Error, Result};
use crate::ir::{Command, HandlerSignature, VmMnemonic};

mod arith;
mod flags;
mod misc;
mod shift;

pub use flags::OperandDepths;

/// Generates the IR body for one `(mnemonic, signature)` pair.
pub trait HandlerGenerator: Send + Sync {
    /// Signatures (IR size tuples) this generator accepts.
    fn signatures(&self) -> &[&[IrSize]];

    /// Emit the IR commands implementing this mnemonic for `sizes`.
    fn generate(&self, sizes: &[IrSize]) -> Result<Vec<Command>>;
}

/// Keyed by `(mnemonic, handler_signature_string)` exactly as spec.md §3
/// describes `tagged_instruction_handlers`; insertion order is
/// incidental here since lookups are by key, not iteration.
#[derive(Default)]
pub struct HandlerGeneratorRegistry {
    generators: HashMap<VmMnemonic, Box<dyn HandlerGenerator>>,
}

impl HandlerGeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, mnemonic: VmMnemonic, generator: Box<dyn HandlerGenerator>) {
        self.generators.insert(mnemonic, generator);
    }

    /// Generate the IR body for `mnemonic` at the given `signature`,
    /// validating the signature is one the generator declares support for.
    pub fn generate(&self, mnemonic: VmMnemonic, signature: &HandlerSignature, sizes: &[IrSize]) -> Result<Vec<Command>> {
        let generator = self.generators.get(&mnemonic).ok_or_else(|| {
            Error::UnsupportedConstruct(format!("no handler generator registered for {mnemonic:?}"))
        })?;

        let supported = generator.signatures().iter().any(|sig| *sig == sizes);
        if !supported {
            return Err(Error::UnsupportedConstruct(format!(
                "signature {signature} not valid for {mnemonic:?}"
            )));
        }

        generator.generate(sizes)
    }

    /// The registry used by a fresh [`crate::machine::Machine`]: every
    /// mnemonic this backend knows how to synthesize a handler for
    /// (spec.md §4.6's generator list).
    pub fn with_default_generators() -> Self {
        let mut reg = Self::new();
        arith::register(&mut reg);
        shift::register(&mut reg);
        misc::register(&mut reg);
        reg
    }
}

/// The four widths every binary handler generator supports, paired
/// `(size, size)` the way `shr.cpp`'s `build_options` enumerates them.
pub const ALL_WIDTHS: [IrSize; 4] = [IrSize::Bit8, IrSize::Bit16, IrSize::Bit32, IrSize::Bit64];
