/*!

Logging with a global verbosity threshold. The level describes what _kind_ of
message is being logged; the numeric threshold describes how _verbose_ the
logger currently is. A message is emitted only when it is logged at a
threshold less than or equal to the global threshold, so a message with
threshold 0 is always emitted.

```
use lineage::log::*;

fn main() {
    // Any messages logged with greater threshold will not be emitted.
    set_global_logging_threshold(1);

    critical!(3, "A critical error occurred!"); // Not emitted
    error!(2, "This is an error message.");     // Not emitted
    warning!(2, "Check your input.");           // Not emitted
    info!(1, "Processing started.");            // Emitted
    debug!(0, "Variable values are correct.");  // Emitted
    trace!(0, "Step through the logic here.");  // Emitted
}
```

The macros `critical!`, `error!`, `warning!`, `info!`, `debug!`, and `trace!`
take an optional leading threshold argument (`level!(threshold, "fmt", args…)`);
omitting it means threshold 0. Logger initialization is implicit, and the
global threshold is an atomic, so all of this is thread safe.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::Lazy;
use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::CustomFieldFormatter;
pub use macros::*;

/// Used for implicit initialization.
static INIT_LOGGER: Lazy<()> = Lazy::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(CustomFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stdout),
      );

  tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  Lazy::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(3); // Default threshold

/// Sets the global threshold. Messages logged at a greater threshold are not emitted.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_logging() {
    let winner = "Root";

    set_global_logging_threshold(3);

    // Emitted: threshold (2) <= global threshold (3)
    info!(2, "selection round winner: {}", winner);

    // NOT emitted: threshold (4) > global threshold (3)
    debug!(4, "NOT logged, candidate pool: {}", winner);

    // Emitted: default threshold is 0
    warning!("An unexpected condition occurred.");

    set_global_logging_threshold(5);

    // Emitted now that the global threshold is 5
    debug!(4, "candidate pool: {}", winner);
  }
}
