//! Tracing bootstrap for binaries and demos built on the seam.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: controlled via the `RUST_LOG` variable
/// - **Pretty formatting**: human-readable output with timestamps and levels
///
/// Call this once at startup, before any capability is exercised. Diagnostic
/// output goes to the subscriber; the print *capability* itself writes to
/// stdout directly, because that output is the behavior, not a log.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - milestones only
/// - `RUST_LOG=debug` - each capability call as it happens
/// - `RUST_LOG=collab_framework=debug` - debug only for the seam itself
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("demo started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
