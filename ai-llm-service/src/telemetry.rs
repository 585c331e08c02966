use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Crate target prefix, used to raise or lower this library's verbosity only.
pub const TARGET_PREFIX: &str = "ai_llm_service";

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        w.write_str(&now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

/// Level directive for **this** library only, e.g. `ai_llm_service=debug`.
pub fn level_directive(level: Level) -> Option<Directive> {
    let s = format!("{TARGET_PREFIX}={}", level.as_str().to_lowercase());
    Directive::from_str(&s).ok()
}

/// Variable holding an optional level for this library only.
pub const LLM_LOG_LEVEL_VAR: &str = "LLM_LOG_LEVEL";

/// Level from `LLM_LOG_LEVEL` (`trace`..`error`); unset or unknown gives `None`.
pub fn llm_level_from_env() -> Option<Level> {
    parse_level(std::env::var(LLM_LOG_LEVEL_VAR).ok().as_deref())
}

fn parse_level(raw: Option<&str>) -> Option<Level> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Level::from_str(s).ok())
}

/// `RUST_LOG` if set, otherwise `default`; optionally with a per-crate level
/// for this library.
pub fn env_filter(default: &str, llm_level: Option<Level>) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    match llm_level.and_then(level_directive) {
        Some(d) => base.add_directive(d),
        None => base,
    }
}

/// Installs the global subscriber: env filter + compact single-line fmt layer
/// with RFC3339 UTC timestamps, targets, and ANSI colors only on a terminal.
///
/// # Errors
/// Fails if a global subscriber was already installed.
pub fn init(default: &str, llm_level: Option<Level>) -> Result<(), TryInitError> {
    let use_ansi = io::stdout().is_terminal();

    tracing_subscriber::registry()
        .with(env_filter(default, llm_level))
        .with(
            fmt::layer()
                .with_timer(ChronoRfc3339Utc)
                .with_target(true)
                .with_ansi(use_ansi)
                .compact(),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_targets_this_crate() {
        let d = level_directive(Level::DEBUG).unwrap();
        assert_eq!(d.to_string().to_lowercase(), "ai_llm_service=debug");
    }

    #[test]
    fn parses_library_level() {
        assert_eq!(parse_level(Some(" debug ")), Some(Level::DEBUG));
        assert_eq!(parse_level(Some("WARN")), Some(Level::WARN));
        assert_eq!(parse_level(Some("loud")), None);
        assert_eq!(parse_level(Some("")), None);
        assert_eq!(parse_level(None), None);
    }

    #[test]
    fn library_level_is_added_to_filter() {
        let filter = env_filter("info", parse_level(Some("trace")));
        assert!(filter.to_string().to_lowercase().contains("ai_llm_service=trace"));
    }
}
