use crate::core::prelude::*;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;
use tracing_subscriber::fmt::time::OffsetTime;

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns true if the call site `loc` has not logged within the last `seconds`, and marks it as
/// having logged now.
pub fn should_log(loc: String, seconds: u64) -> bool {
    // A poisoned map only means another thread panicked mid-log; the timestamps are still usable.
    let mut last_log = LAST_LOG
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if last_log
        .get(&loc)
        .is_none_or(|then| then.elapsed().as_secs() >= seconds)
    {
        last_log.insert(loc, Instant::now());
        true
    } else {
        false
    }
}

/// Like [`warn!`], but at most once every `$seconds` per call site. Numerical anomalies tend to
/// repeat every frame, so they go through this.
#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        let loc = $crate::util::assert::current_location!();
        if $crate::util::log::should_log(loc, $seconds) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}
#[allow(unused_imports)]
pub use warn_every_seconds;

/// Installs a `tracing` subscriber writing to stderr, with microsecond UTC timestamps and source
/// locations. Does nothing if a global subscriber already exists.
pub fn setup_log() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("setup_log(): failed to install subscriber")
}
