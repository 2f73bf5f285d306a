//! Tracing initialisation for the CLI.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Filter directives, e.g. `"debug"` or `"web3rpc_core=trace"`.
    /// Falls back to `RUST_LOG`, then `warn`.
    pub level: Option<String>,
    /// Emit JSON structured logs instead of human-readable text.
    pub json: bool,
}

impl LogConfig {
    fn filter(&self) -> EnvFilter {
        match &self.level {
            Some(directives) => {
                EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
            }
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }
}

/// Install the global subscriber. Call once, before any request is made.
pub fn init_tracing(config: &LogConfig) {
    let filter = config.filter();

    // Logs go to stderr so command output on stdout stays machine-readable.
    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_text_with_env_fallback() {
        let config = LogConfig::default();
        assert!(config.level.is_none());
        assert!(!config.json);
    }

    #[test]
    fn explicit_level_builds_filter() {
        let config = LogConfig {
            level: Some("web3rpc_core=trace".into()),
            json: true,
        };
        assert_eq!(config.filter().to_string(), "web3rpc_core=trace");
    }
}
