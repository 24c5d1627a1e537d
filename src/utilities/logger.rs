//! Logger installation.
//!
//! The crate only emits through the `log` facade. Binaries and tests that
//! want to see those records install `env_logger` here; the filter comes
//! from `RUST_LOG` and defaults to `warn`.

use env_logger::{Builder, Env};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the logger, ignoring a logger that is already set.
pub fn init() {
    let _ = try_init();
}

/// Install the logger.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}

/// Install a logger that writes through the test harness's capture.
pub fn init_for_tests() {
    let _ = Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
