pub mod error;
pub mod geometry;
pub mod math;

pub use error::{LineError, Result};
pub use geometry::Line;
pub use math::{Point2, Vector2, TOLERANCE};

/// Routes `tracing` output to the test harness. Filter with `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
