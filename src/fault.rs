//! Faults raised inside a managed scope.
//!
//! A [`Fault`] is the value handed to [`ContextManager::exit`](crate::scope::ContextManager::exit):
//! what went wrong, the message attached to it, and where it was raised.

use colored::Colorize;
use std::any::Any;
use std::fmt;
use std::panic::Location;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    DivisionByZero,
    InvalidInput,
    Panic,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultKind::DivisionByZero => "DivisionByZero",
            FaultKind::InvalidInput => "InvalidInput",
            FaultKind::Panic => "Panic",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: {message}")]
pub struct Fault {
    pub kind: FaultKind,
    pub message: String,
    /// Where the fault was raised. Empty for faults recovered from a panic.
    pub location: Option<&'static Location<'static>>,
}

impl Fault {
    #[track_caller]
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Fault {
            kind,
            message: message.into(),
            location: Some(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Fault::new(FaultKind::InvalidInput, message)
    }

    /// Builds a fault from the payload of an unwinding panic.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        Fault {
            kind: FaultKind::Panic,
            message,
            location: None,
        }
    }

    /// Report printed when nothing handled the fault.
    pub fn report(&self) -> String {
        let mut out = format!(
            "{} {}\n",
            "unhandled fault:".red().bold(),
            self.to_string().red()
        );
        match self.location {
            Some(loc) => out.push_str(&format!("  --> {}:{}:{}\n", loc.file(), loc.line(), loc.column())),
            None => out.push_str("  --> <unknown location>\n"),
        }
        out
    }
}

/// Integer division that reports a zero divisor as a fault at the caller.
#[track_caller]
pub fn divide(lhs: i64, rhs: i64) -> Result<i64, Fault> {
    if rhs == 0 {
        return Err(Fault::new(
            FaultKind::DivisionByZero,
            "integer division or modulo by zero",
        ));
    }
    // i64::MIN / -1 overflows
    lhs.checked_div(rhs)
        .ok_or_else(|| Fault::invalid_input(format!("{} / {} overflows i64", lhs, rhs)))
}
