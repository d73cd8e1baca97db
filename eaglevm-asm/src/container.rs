use std::collections::HashMap;

use crate::error::{AsmError, Result};
use crate::label::Label;

/// A closure that re-encodes one instruction once every label it
/// references has a known address.
///
/// `rip` is the address this item will end up at; the closure returns
/// the encoded bytes for exactly that placement. Boxed because thunks
/// close over whatever operands the lifter or handler generator needed
/// (a destination register, a branch target label, ...).
pub type RecompileThunk = Box<dyn Fn(u64, &dyn Fn(Label) -> Option<u64>) -> Result<Vec<u8>> + Send>;

/// One item placed into a [`CodeContainer`]: either bytes whose length
/// and content are already final, or a thunk that must be re-run every
/// layout pass because it depends on a label that may still move.
pub enum ContainerItem {
    /// Final bytes, already encoded.
    Encoded(Vec<u8>),
    /// Re-encoded on every layout pass until its size stabilizes.
    Thunk(RecompileThunk),
}

struct Slot {
    item: ContainerItem,
    label: Option<Label>,
    last_len: usize,
}

/// A linear sequence of machine code with internal label references.
///
/// Labels let a handler generator emit a branch before the instruction
/// it targets exists yet. Layout is computed by fixed-point iteration:
/// each pass re-encodes every [`ContainerItem::Thunk`] using the label
/// offsets computed by the previous pass, and the layout is final once a
/// pass leaves every thunk's length unchanged (`shr.cpp`'s handlers
/// reference labels this way, letting `finalize_translate_to_virtual`
/// interleave fixed code with jump targets resolved afterward).
pub struct CodeContainer {
    slots: Vec<Slot>,
    base: u64,
}

/// Bound above which [`CodeContainer::layout`] gives up and reports
/// [`AsmError::LayoutDivergence`] rather than looping forever on a
/// pathological thunk whose size never settles.
const MAX_LAYOUT_PASSES: u32 = 64;

impl CodeContainer {
    /// Start an empty container whose first byte will sit at `base`.
    pub fn new(base: u64) -> Self {
        Self {
            slots: Vec::new(),
            base,
        }
    }

    /// Append already-final bytes.
    pub fn push_encoded(&mut self, bytes: Vec<u8>) {
        self.slots.push(Slot {
            last_len: bytes.len(),
            item: ContainerItem::Encoded(bytes),
            label: None,
        });
    }

    /// Append a thunk, re-run on every layout pass.
    pub fn push_thunk(&mut self, thunk: RecompileThunk) {
        self.slots.push(Slot {
            last_len: 0,
            item: ContainerItem::Thunk(thunk),
            label: None,
        });
    }

    /// Bind `label` to the position the next item pushed into this
    /// container will occupy.
    pub fn bind_label(&mut self, label: Label) {
        self.slots.push(Slot {
            item: ContainerItem::Encoded(Vec::new()),
            label: Some(label),
            last_len: 0,
        });
    }

    /// Resolve every thunk to a stable layout and return the final bytes.
    ///
    /// Runs layout passes until no thunk's encoded length changes from
    /// the previous pass, or [`MAX_LAYOUT_PASSES`] is exceeded.
    pub fn layout(&mut self) -> Result<Vec<u8>> {
        for _ in 0..MAX_LAYOUT_PASSES {
            let offsets = self.label_offsets();
            let lookup = |label: Label| offsets.get(&label.id()).copied();

            let mut changed = false;
            let mut cursor = self.base;
            let mut rendered: Vec<Vec<u8>> = Vec::with_capacity(self.slots.len());

            for slot in &self.slots {
                let bytes = match &slot.item {
                    ContainerItem::Encoded(bytes) => bytes.clone(),
                    ContainerItem::Thunk(thunk) => thunk(cursor, &lookup)?,
                };
                if bytes.len() != slot.last_len {
                    changed = true;
                }
                cursor += bytes.len() as u64;
                rendered.push(bytes);
            }

            for (slot, bytes) in self.slots.iter_mut().zip(&rendered) {
                slot.last_len = bytes.len();
            }

            if !changed {
                return Ok(rendered.into_iter().flatten().collect());
            }
        }

        Err(AsmError::LayoutDivergence(MAX_LAYOUT_PASSES))
    }

    fn label_offsets(&self) -> HashMap<u64, u64> {
        let mut offsets = HashMap::new();
        let mut cursor = self.base;
        for slot in &self.slots {
            if let Some(label) = slot.label {
                offsets.insert(label.id(), cursor);
            }
            cursor += slot.last_len as u64;
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_container_layouts_on_first_pass() {
        let mut container = CodeContainer::new(0x1000);
        container.push_encoded(vec![0x90, 0x90]);
        container.push_encoded(vec![0xC3]);
        let bytes = container.layout().unwrap();
        assert_eq!(bytes, vec![0x90, 0x90, 0xC3]);
    }

    #[test]
    fn thunk_sees_a_previously_bound_label_offset() {
        let mut container = CodeContainer::new(0x2000);
        let target = Label::fresh();

        container.push_thunk(Box::new(move |rip, lookup| {
            let addr = lookup(target).ok_or(AsmError::UnboundLabel(target))?;
            Ok(vec![(addr.wrapping_sub(rip)) as u8])
        }));
        container.bind_label(target);
        container.push_encoded(vec![0xCC]);

        let bytes = container.layout().unwrap();
        assert_eq!(bytes.len(), 2);
    }

    #[test]
    fn unbound_label_fails_layout() {
        let mut container = CodeContainer::new(0x3000);
        let ghost = Label::fresh();
        container.push_thunk(Box::new(move |_, lookup| {
            lookup(ghost)
                .map(|_| Vec::new())
                .ok_or(AsmError::UnboundLabel(ghost))
        }));
        assert!(container.layout().is_err());
    }
}
