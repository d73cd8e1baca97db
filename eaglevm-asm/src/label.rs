use std::sync::atomic::{AtomicU64, Ordering};

/// An opaque handle to a not-yet-placed position in a [`crate::container::CodeContainer`].
///
/// Labels are integer handles, not pointers: a container resolves a label
/// to a byte offset only once layout is known, which is what lets a
/// [`crate::container::RecompileThunk`] reference a label before its
/// target has been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(u64);

static NEXT_LABEL: AtomicU64 = AtomicU64::new(1);

impl Label {
    /// Mint a fresh label, distinct from every other label minted so far
    /// in this process.
    pub fn fresh() -> Self {
        Self(NEXT_LABEL.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw integer identity of this label, for use as a map key.
    pub const fn id(self) -> u64 {
        self.0
    }
}
