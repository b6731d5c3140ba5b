//! Runnable demo of the collaborator seam.
//!
//! Walks through both halves of the recipe:
//! 1. Component A constructs and prints its own marker.
//! 2. Component A delegates to the external collaborator via
//!    [`require_bravo`].
//! 3. The same delegation is repeated generically, substituting the local
//!    marker; any [`Collaborator`](collab_framework::Collaborator) fits.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use collab_framework::require;
use collab_framework::tracing::setup_tracing;
use collab_sample::{require_bravo, Alpha};
use tracing::info;

fn main() {
    // Set up tracing once for the entire demo.
    setup_tracing();

    info!("starting collaborator demo");

    // Component A on its own.
    let alpha = Alpha::new();
    alpha.print();
    info!(marker = %alpha, "local marker printed");

    // Component A delegating to the external collaborator.
    require_bravo();
    info!("external collaborator exercised");

    // The seam accepts any implementation, the local marker included.
    if let Err(never) = require::<Alpha>() {
        match never {}
    }
    info!("substitution demonstrated");
}
