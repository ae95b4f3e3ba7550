//! Context-manager protocol: paired enter/exit hooks bound to a block.
//!
//! [`scoped`] calls [`ContextManager::enter`], runs the block with the
//! entered value, and then calls [`ContextManager::exit`] exactly once. That
//! holds when the block returns normally, when it returns `Err(Fault)`, and
//! when it panics. `exit` sees the fault (or `None`) and decides whether it
//! keeps propagating.

use crate::fault::{divide, Fault};
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitAction {
    /// Let the fault continue past the scope.
    #[default]
    Propagate,
    /// Swallow the fault; the scope completes without a value.
    Suppress,
}

pub trait ContextManager {
    type Value;

    fn enter(&mut self) -> Self::Value;

    /// `fault` is `None` when the block finished normally.
    fn exit(&mut self, fault: Option<&Fault>) -> ExitAction;
}

/// Runs `body` inside `manager`'s scope.
///
/// Returns `Ok(Some(value))` on normal completion and `Ok(None)` when `exit`
/// suppressed a fault. A panic that is not suppressed resumes unwinding
/// after `exit` has run.
pub fn scoped<M, T, F>(manager: &mut M, body: F) -> Result<Option<T>, Fault>
where
    M: ContextManager,
    F: FnOnce(M::Value) -> Result<T, Fault>,
{
    let value = manager.enter();
    debug!("scope entered");

    match panic::catch_unwind(AssertUnwindSafe(|| body(value))) {
        Ok(Ok(result)) => {
            manager.exit(None);
            debug!("scope exited normally");
            Ok(Some(result))
        }
        Ok(Err(fault)) => match manager.exit(Some(&fault)) {
            ExitAction::Propagate => {
                debug!(kind = %fault.kind, "scope exited with fault, propagating");
                Err(fault)
            }
            ExitAction::Suppress => {
                info!(kind = %fault.kind, "fault suppressed by exit hook");
                Ok(None)
            }
        },
        Err(payload) => {
            let fault = Fault::from_panic(payload.as_ref());
            match manager.exit(Some(&fault)) {
                ExitAction::Propagate => {
                    debug!(message = %fault.message, "scope unwinding, resuming panic");
                    panic::resume_unwind(payload)
                }
                ExitAction::Suppress => {
                    info!(message = %fault.message, "panic suppressed by exit hook");
                    Ok(None)
                }
            }
        }
    }
}

/// Value returned by [`Announcer::enter`].
pub const ENTER_RESULT: &str = "result of enter()";

/// Manager that announces each hook on `out` and never suppresses.
pub struct Announcer<W: Write> {
    out: W,
    pub enters: usize,
    pub exits: usize,
    /// The fault handed to the most recent `exit`, if any.
    pub last_fault: Option<Fault>,
}

impl<W: Write> Announcer<W> {
    pub fn new(out: W) -> Self {
        Announcer {
            out,
            enters: 0,
            exits: 0,
            last_fault: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn announce(&mut self, line: &str) {
        // a closed stdout must not turn exit into a second fault
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!(error = %e, "failed to write scope notice");
        }
    }
}

impl<W: Write> ContextManager for Announcer<W> {
    type Value = &'static str;

    fn enter(&mut self) -> Self::Value {
        self.enters += 1;
        self.announce("enter() called");
        ENTER_RESULT
    }

    fn exit(&mut self, fault: Option<&Fault>) -> ExitAction {
        self.exits += 1;
        let line = match fault {
            Some(f) => {
                let location = f
                    .location
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                    .unwrap_or_else(|| "None".to_string());
                format!("exit() called {} {} {}", f.kind, f.message, location)
            }
            None => "exit() called None None None".to_string(),
        };
        self.announce(&line);
        self.last_fault = fault.cloned();
        ExitAction::Propagate
    }
}

/// The demo block: prints progress, then divides by zero before its end marker.
pub fn run_block<W: Write>(cmc: &str, out: &mut W) -> Result<(), Fault> {
    writeln!(out, "BLOCK start").map_err(io_fault)?;
    writeln!(out, "cmc = {:?}", cmc).map_err(io_fault)?;
    let zero = 0;
    let a = divide(0, zero)?;
    writeln!(out, "BLOCK end").map_err(io_fault)?;
    debug!(a, "unreachable after division");
    Ok(())
}

#[track_caller]
fn io_fault(e: io::Error) -> Fault {
    Fault::invalid_input(format!("console write failed: {}", e))
}
