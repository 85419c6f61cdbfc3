//! Tracing subscriber setup for binaries embedding the client.
//!
//! The library itself only emits `tracing` events and never installs a subscriber.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "info,mbpay=debug";
const DEV_FILTER: &str = "debug,mbpay=trace";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// `MBPAY_LOG_FORMAT=pretty` selects human readable output, anything else JSON.
    pub fn from_env() -> Self {
        match std::env::var("MBPAY_LOG_FORMAT") {
            Ok(value) => Self::parse(&value),
            Err(_) => LogFormat::Json,
        }
    }

    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("pretty") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// Initialize tracing subscriber for structured (JSON) logging
pub fn init_tracing() {
    install(LogFormat::Json, DEFAULT_FILTER);
}

/// Initialize tracing for development (pretty printed)
pub fn init_tracing_dev() {
    install(LogFormat::Pretty, DEV_FILTER);
}

/// Picks [`init_tracing`] or [`init_tracing_dev`] from `MBPAY_LOG_FORMAT`.
pub fn init_tracing_from_env() {
    match LogFormat::from_env() {
        LogFormat::Json => init_tracing(),
        LogFormat::Pretty => init_tracing_dev(),
    }
}

// `RUST_LOG` wins over the fallback filter.
fn install(format: LogFormat, fallback_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .json(),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).pretty())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Json);
    }

    #[test]
    fn test_fallback_filters_parse() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
        assert!(DEV_FILTER.parse::<EnvFilter>().is_ok());
    }
}
