//! Component B: the external collaborator.
//!
//! `Bravo` plays the part of a marker owned by another component. The
//! delegating side never drives it directly; it goes through the
//! [`Collaborator`] seam, resolved in
//! [`require_bravo`](crate::model::require_bravo).

use collab_framework::Collaborator;
use std::convert::Infallible;
use std::fmt;
use tracing::debug;

/// The external collaborator's marker. Same shape as
/// [`Alpha`](crate::model::Alpha): field-less, immutable, `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bravo;

impl Bravo {
    /// Creates a fresh marker.
    pub fn new() -> Self {
        Bravo
    }

    /// Writes the textual representation to stdout.
    pub fn print(self) {
        debug!(marker = %self, "print");
        println!("{self}");
    }
}

impl fmt::Display for Bravo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bravo")
    }
}

impl Collaborator for Bravo {
    type Error = Infallible;

    fn construct() -> Result<Self, Self::Error> {
        Ok(Bravo::new())
    }

    fn print(&self) -> Result<(), Self::Error> {
        Bravo::print(*self);
        Ok(())
    }
}
