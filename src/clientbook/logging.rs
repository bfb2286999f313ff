use crate::error::{ClientbookError, Result};
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber at `level`.
///
/// `RUST_LOG` takes precedence when set. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("clientbook={level}"))
            .map_err(|e| ClientbookError::InvalidArgument(format!("log level {level}: {e}")))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    #[cfg(test)]
    let builder = builder.with_test_writer();

    // Err here only means another subscriber got there first.
    let _ = builder.try_init();
    Ok(())
}
