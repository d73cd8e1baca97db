/// Knobs recognized by the backend (spec.md §6), handed in by the
/// embedder as a plain `Copy` struct — no config-file parsing layer lives
/// in this crate, matching how `fuel_vm::interpreter::InterpreterParams`
/// is constructed directly by the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// If `false`, lowering always uses `reserved_temp(0)` as the working
    /// register instead of drawing one at random.
    pub randomize_working_register: bool,

    /// Share one GPR64-wide load/store handler per destination register
    /// rather than one per requested width.
    pub single_register_handlers: bool,

    /// Probability in `[0.0, 1.0]` of synthesizing a fresh register
    /// handler variant rather than reusing an existing one.
    pub chance_to_generate_register_handler: f64,

    /// Split a context load into a neutral load plus a separate resolve
    /// step, rather than resolving destination bits inline.
    pub complex_temp_loading: bool,

    /// If `true`, VM-enter takes a direct `jmp rel`; if `false`, it
    /// constructs the target address via `push`/`mov`/`ret` instead.
    pub relative_addressing: bool,
}

impl Default for Settings {
    /// The original's conservative defaults: fully randomized register
    /// handlers, a new variant generated every time, simple context
    /// loading, and relative addressing (the cheaper, more common path in
    /// the original `machine.cpp`).
    fn default() -> Self {
        Self {
            randomize_working_register: true,
            single_register_handlers: false,
            chance_to_generate_register_handler: 1.0,
            complex_temp_loading: false,
            relative_addressing: true,
        }
    }
}

impl Settings {
    /// Validate the probability knob; the rest of the struct has no
    /// illegal states to check.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.chance_to_generate_register_handler) {
            return Err(format!(
                "chance_to_generate_register_handler must be in [0.0, 1.0], got {}",
                self.chance_to_generate_register_handler
            ));
        }
        Ok(())
    }
}
