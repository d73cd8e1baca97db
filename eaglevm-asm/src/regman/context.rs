//! Scoped pool allocator over one register class (spec.md §4.3).

use crate::error::{AsmError, Result};
use crate::reg::Reg;

/// A pool of physical registers of one class (GPR64 or XMM128), handed out
/// to callers that need a scratch register for the lifetime of a command
/// or a lowering pass.
///
/// Two acquisition disciplines are supported: scoped (everything a
/// [`ScopeGuard`] hands out is released when the guard drops, on every
/// exit path including an early `?`) and unscoped (`get_any`, which the
/// caller must balance with an explicit [`RegisterContext::release`]).
pub struct RegisterContext {
    pool: Vec<Reg>,
    free: Vec<Reg>,
}

impl RegisterContext {
    /// Build a context over `pool`, all of it free initially.
    pub fn new(pool: Vec<Reg>) -> Self {
        let free = pool.clone();
        Self { pool, free }
    }

    /// How many registers this context manages in total.
    pub fn capacity(&self) -> usize {
        self.pool.len()
    }

    /// Hand out one free register, un-scoped. The caller owns releasing it.
    pub fn get_any(&mut self) -> Result<Reg> {
        self.free.pop().ok_or(AsmError::PoolExhausted)
    }

    /// Alias for [`Self::get_any`] matching spec.md's `reserve()` naming
    /// for the un-scoped path.
    pub fn reserve(&mut self) -> Result<Reg> {
        self.get_any()
    }

    /// Return `reg` to the free pool.
    pub fn release(&mut self, reg: Reg) {
        debug_assert!(
            self.pool.contains(&reg),
            "releasing a register this context never owned: {reg:?}"
        );
        if !self.free.contains(&reg) {
            self.free.push(reg);
        }
    }

    /// Release every outstanding register, at block end.
    pub fn reset(&mut self) {
        self.free = self.pool.clone();
    }

    /// Open a scope: every register reserved through the returned guard is
    /// released automatically when it drops.
    pub fn create_scope(&mut self) -> ScopeGuard<'_> {
        ScopeGuard {
            ctx: self,
            reserved: Vec::new(),
        }
    }
}

/// A scoped acquisition token. Dropping it releases everything reserved
/// through it, on every exit path (normal return, early `?`, or panic
/// unwind) — spec.md's Design Note "Scoped reservations".
pub struct ScopeGuard<'a> {
    ctx: &'a mut RegisterContext,
    reserved: Vec<Reg>,
}

impl ScopeGuard<'_> {
    /// Reserve one register for the lifetime of this scope.
    pub fn reserve(&mut self) -> Result<Reg> {
        let reg = self.ctx.get_any()?;
        self.reserved.push(reg);
        Ok(reg)
    }

    /// Reserve `n` registers for the lifetime of this scope.
    pub fn reserve_n(&mut self, n: usize) -> Result<Vec<Reg>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.reserve()?);
        }
        Ok(out)
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        for reg in self.reserved.drain(..) {
            self.ctx.release(reg);
        }
    }
}
