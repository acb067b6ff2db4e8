//! Console logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over `verbosity`.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_for(0), "warn");
        assert_eq!(filter_for(1), "info");
        assert_eq!(filter_for(2), "debug");
        assert_eq!(filter_for(9), "trace");
    }
}
