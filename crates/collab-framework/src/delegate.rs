//! # Delegation
//!
//! The single generic consumer of the [`Collaborator`] seam.
//!
//! # Architecture Note
//! Delegating code could call `C::construct()` and `print()` by hand, but
//! funneling every cross-component invocation through [`require`] keeps the
//! sequencing (construct first, print exactly once) and the tracing fields
//! in one place. Concrete entry points then shrink to a type argument.

use crate::collaborator::Collaborator;
use tracing::{debug, info};

/// Constructs a collaborator and exercises its print capability exactly once.
///
/// This is the "accept" half of the seam: the caller picks the
/// implementation with a type argument. Concrete entry points resolve it
/// instead, e.g. `require::<Bravo>()` behind a plain function.
///
/// # Errors
/// Failures from either capability are returned **unchanged**: the
/// delegation defines no error kind of its own, so callers always see
/// whatever error type the collaborator declared.
pub fn require<C: Collaborator>() -> Result<(), C::Error> {
    let collaborator = short_type_name::<C>();
    let span = tracing::info_span!("require", collaborator);
    let _guard = span.enter();

    debug!("constructing collaborator");
    let instance = C::construct()?;

    debug!(?instance, "exercising print capability");
    instance.print()?;

    info!("collaborator printed");
    Ok(())
}

// Extract just the type name (e.g. "Bravo" instead of
// "collab_sample::model::bravo::Bravo").
fn short_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
