//! Marker components implementing the
//! [`Collaborator`](collab_framework::Collaborator) seam.

pub mod alpha;
pub mod bravo;

pub use alpha::{require_bravo, Alpha};
pub use bravo::Bravo;
