//! # Collaborator Recipe Sample
//!
//! Two concrete components built on the [`collab_framework`] seam, exposed
//! as a library for integration testing.
//!
//! - [`Alpha`](model::Alpha) - the local marker, owner of the delegation
//!   entry point [`require_bravo`](model::require_bravo)
//! - [`Bravo`](model::Bravo) - the external collaborator, reached only
//!   through the seam
//!
//! The runnable demo lives in `main.rs`:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod model;

pub use model::{require_bravo, Alpha, Bravo};
