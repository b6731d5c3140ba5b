//! Component A: the local marker and the delegation entry point.

use collab_framework::{require, Collaborator};
use std::convert::Infallible;
use std::fmt;
use tracing::debug;

use crate::model::Bravo;

/// The local marker.
///
/// A field-less `Copy` value with exactly one state for its entire
/// lifetime. Each call to [`Alpha::new`] yields an independently owned
/// value.
///
/// # Collaborator Seam
/// `Alpha` also implements [`Collaborator`], so it can stand on either side
/// of a delegation: printed directly, or substituted for an external
/// collaborator through [`require`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alpha;

impl Alpha {
    /// Creates a fresh marker.
    ///
    /// Always succeeds; no side effects beyond the (zero-sized) value
    /// itself.
    pub fn new() -> Self {
        Alpha
    }

    /// Writes the textual representation to stdout.
    ///
    /// Takes `self` by value; the marker is `Copy`, so the caller keeps any
    /// binding it printed from.
    pub fn print(self) {
        debug!(marker = %self, "print");
        println!("{self}");
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Alpha")
    }
}

impl Collaborator for Alpha {
    type Error = Infallible;

    fn construct() -> Result<Self, Self::Error> {
        Ok(Alpha::new())
    }

    fn print(&self) -> Result<(), Self::Error> {
        Alpha::print(*self);
        Ok(())
    }
}

/// Constructs the external collaborator ([`Bravo`]) and exercises its print
/// capability.
///
/// This is the "resolve" half of the seam: the implementation is fixed here,
/// in Component A, while the sequencing lives in [`require`]. `Bravo`'s
/// capabilities are total, so the entry point returns unit: the failure arm
/// is uninhabited and discharged below rather than assumed away.
pub fn require_bravo() {
    if let Err(never) = require::<Bravo>() {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::{require_bravo, Alpha};
    use collab_framework::Collaborator;

    #[test]
    fn new_markers_are_behaviorally_indistinguishable() {
        let first = Alpha::new();
        let second = Alpha::new();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn textual_form_is_nonempty() {
        assert_eq!(Alpha::new().to_string(), "Alpha");
    }

    #[test]
    fn seam_construct_matches_the_inherent_constructor() {
        let via_seam = <Alpha as Collaborator>::construct().expect("construction is total");
        assert_eq!(via_seam, Alpha::new());
    }

    #[test]
    fn entry_point_leaves_local_state_untouched() {
        let alpha = Alpha::new();
        let before = alpha.to_string();

        require_bravo();

        assert_eq!(alpha.to_string(), before);
        assert_eq!(alpha, Alpha::new());
    }
}
