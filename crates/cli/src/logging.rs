use std::env;

use tracing_subscriber::EnvFilter;

pub const VERBOSE_ENV: &str = "SUNSEO_VERBOSE";

/// Installs the tracing subscriber. `RUST_LOG` wins; otherwise the level is
/// `info`, or `debug` when verbose.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if verbose {
        tracing::debug!("verbose logging enabled");
    }
}

/// User-facing status line on stderr.
pub fn stage(stage: &str, message: impl AsRef<str>) {
    eprintln!("[sunseo::{}] {}", stage, message.as_ref());
}

pub fn env_flag() -> bool {
    env::var(VERBOSE_ENV)
        .map(|value| parse_bool(value.trim()))
        .unwrap_or(false)
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn truthy_values() {
        for raw in ["1", "true", "YES", " on "] {
            assert!(parse_bool(raw), "{raw}");
        }
        for raw in ["", "0", "off", "nope"] {
            assert!(!parse_bool(raw), "{raw}");
        }
    }
}
