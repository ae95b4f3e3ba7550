//! # Scoped Resources and Structural Matching
//!
//! Two small, independent demonstrations.
//!
//! 1. **Scoped resources** - a [`ContextManager`](scope::ContextManager) whose
//!    exit hook runs on every way out of its block, including faults and panics
//! 2. **Structural matching** - point classification where literal `0` filters
//!    and bare names always capture
//!
//! ## Running the Demos
//!
//! ```bash
//! # Exit hook observes a division by zero, then the fault goes unhandled
//! cargo run --bin context_manager
//!
//! # Classifies (0, 1) and shows bare-name capture
//! cargo run --bin match_point
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the fault and config error types
//! - `serde` / `toml` - Built-in demo configuration
//! - `tracing` - Diagnostic events on stderr
//! - `colored` - Unhandled-fault report

pub mod capture;
pub mod config;
pub mod fault;
pub mod point;
pub mod scope;

pub use fault::{divide, Fault, FaultKind};
pub use point::{classify, match_point, Number, Report, Subject};
pub use scope::{scoped, Announcer, ContextManager, ExitAction};
