//! # Collaborator Framework
//!
//! > **A recipe for capability-based component seams in Rust.**
//!
//! This crate provides the building blocks for decoupling a component from
//! the collaborators it drives. A collaborator, for our purposes, is anything
//! that exposes exactly two capabilities: it can be **constructed**, and it
//! can **print** a textual representation of itself to standard output. That
//! pair is small enough to fit in your head and large enough to demonstrate
//! the seam pattern end to end.
//!
//! ## Why a capability trait?
//!
//! A component that names its collaborator's concrete type is welded to it:
//! every test of the component drags the real collaborator along, and
//! swapping implementations means editing call sites. By defining a contract
//! ([`Collaborator`]) that any marker type can satisfy, the delegating side
//! names only the *capabilities* it consumes (construction and printing),
//! and tests substitute a recording [mock](crate::mock) for the real thing.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Seam layer** ([`Collaborator`]) - the capability contract
//! 2. **Delegation layer** ([`require`]) - the one generic consumer of the
//!    contract: construct an instance, exercise its print capability exactly
//!    once, propagate the collaborator's error unchanged
//! 3. **Test layer** ([`mock`]) - a collaborator that records capability
//!    calls in a per-thread ledger instead of writing to stdout
//!
//! ## Quick Start
//!
//! ```rust
//! use collab_framework::{require, Collaborator};
//! use std::convert::Infallible;
//! use std::fmt;
//!
//! // 1. Define a marker.
//! #[derive(Debug, Clone, Copy)]
//! struct Stamp;
//!
//! impl fmt::Display for Stamp {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("Stamp")
//!     }
//! }
//!
//! // 2. Satisfy the seam. `print` is provided: it writes the `Display`
//! //    form to stdout. A total collaborator uses `Infallible` as its
//! //    error, making "always succeeds" a compiler-checked fact.
//! impl Collaborator for Stamp {
//!     type Error = Infallible;
//!
//!     fn construct() -> Result<Self, Self::Error> {
//!         Ok(Stamp)
//!     }
//! }
//!
//! // 3. Delegate through the seam.
//! require::<Stamp>().unwrap();
//! ```
//!
//! ## Execution Model
//!
//! Everything here is synchronous and single-threaded: a capability call
//! runs to completion before control returns to the caller. There are no
//! tasks, channels, or locks; the only shared state in the whole crate is
//! the mock's ledger, and that is deliberately per-thread.
//!
//! ## Observability
//!
//! Library code logs through `tracing` with structured fields; [`require`]
//! opens a span named after the collaborator type it drives. Call
//! [`tracing::setup_tracing`](crate::tracing::setup_tracing) once at startup
//! and control verbosity with `RUST_LOG`.

pub mod collaborator;
pub mod delegate;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use collaborator::Collaborator;
pub use delegate::require;
pub use mock::{MockCollaborator, MockError};
