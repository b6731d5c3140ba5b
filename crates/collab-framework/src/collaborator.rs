//! # The Collaborator Seam
//!
//! This module defines the contract every collaborator must satisfy.
//!
//! # Architecture Note
//! Why do we need this trait?
//! The delegating component consumes exactly two things from its
//! collaborator: a constructor and a print capability. Encoding that pair as
//! a trait means the component is bound to the *capabilities*, never to a
//! concrete type: any implementation can be slotted in, including the
//! recording [mock](crate::mock) used in tests.
//!
//! # Provided Methods
//! [`Collaborator::print`] has a default implementation that writes the
//! `Display` form to stdout and never fails. Implement it yourself only when
//! output must be produced some other way (the mock overrides it to record
//! the call instead of printing).

use std::fmt::{Debug, Display};

/// The capability pair a collaborator exposes: **construct** and **print**.
///
/// # Architecture Note
/// `construct` returns `Self`, which makes this a factory-shaped trait: it is
/// consumed through generics (see [`require`](crate::delegate::require)) and
/// monomorphized per implementation, not used behind `dyn`.
///
/// The `Display` supertrait *is* the textual representation the print
/// capability emits; requiring it here lets the trait provide `print` for
/// free and lets tests assert on the text without scraping stdout.
///
/// # Example
///
/// ```rust
/// use collab_framework::Collaborator;
/// use std::convert::Infallible;
/// use std::fmt;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Badge;
///
/// impl fmt::Display for Badge {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("Badge")
///     }
/// }
///
/// impl Collaborator for Badge {
///     type Error = Infallible;
///
///     fn construct() -> Result<Self, Self::Error> {
///         Ok(Badge)
///     }
/// }
///
/// let badge = Badge::construct().unwrap();
/// badge.print().unwrap();
/// ```
pub trait Collaborator: Sized + Debug + Display {
    /// The error a capability call can produce.
    ///
    /// # Design Note: Totality
    /// Collaborators whose capabilities always succeed use
    /// [`Infallible`](std::convert::Infallible): the `Err` arm is then
    /// uninhabited, and callers discharge it with an empty match instead of
    /// trusting a comment. A collaborator that *can* fail declares its own
    /// error type, and the delegation propagates it unmodified.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct capability: returns a freshly created, independently owned
    /// instance.
    fn construct() -> Result<Self, Self::Error>;

    /// Print capability: writes the textual representation to stdout.
    ///
    /// The default implementation prints the `Display` form followed by a
    /// newline and always returns `Ok(())`.
    fn print(&self) -> Result<(), Self::Error> {
        println!("{self}");
        Ok(())
    }
}
