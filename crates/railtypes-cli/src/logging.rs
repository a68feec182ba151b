use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::GlobalOpts;

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`/`--quiet`.
pub fn init(global: &GlobalOpts, use_color: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level(global.verbose, global.quiet).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color)
                .with_target(false),
        )
        .init();
}

/// Level used when `RUST_LOG` is unset.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_follows_verbosity() {
        assert_eq!(default_level(0, false), "warn");
        assert_eq!(default_level(1, false), "info");
        assert_eq!(default_level(2, false), "debug");
        assert_eq!(default_level(3, false), "trace");
        assert_eq!(default_level(9, false), "trace");
    }

    #[test]
    fn quiet_overrides_verbosity() {
        assert_eq!(default_level(0, true), "error");
    }

    #[test]
    fn default_levels_are_valid_filters() {
        for verbose in 0..4 {
            assert!(EnvFilter::try_new(default_level(verbose, false)).is_ok());
        }
    }
}
