//! Strategy selection and retrieval knobs, loaded from env.
//!
//! - `ANSWER_STRATEGY` = `retrieval` (default, alias `rag`) or `full_policy`
//!   (aliases `full`, `stuffed`)
//! - `RAG_*` knobs, see [`rag_store::RagConfig::from_env`]

use std::{fmt, str::FromStr};

use rag_store::RagConfig;

use crate::error::ContextorError;

/// Which answer strategy the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Retrieve top-k chunks, answer only from them, fall back explicitly.
    #[default]
    Retrieval,
    /// Inline the whole policy into every prompt.
    FullPolicy,
}

impl FromStr for StrategyKind {
    type Err = ContextorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "retrieval" | "rag" => Ok(StrategyKind::Retrieval),
            "full_policy" | "full" | "stuffed" => Ok(StrategyKind::FullPolicy),
            other => Err(ContextorError::Config(format!(
                "unknown ANSWER_STRATEGY `{other}` (expected `retrieval` or `full_policy`)"
            ))),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Retrieval => f.write_str("retrieval"),
            StrategyKind::FullPolicy => f.write_str("full_policy"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContextorConfig {
    pub strategy: StrategyKind,
    pub rag: RagConfig,
}

impl ContextorConfig {
    /// # Errors
    /// `ContextorError::Config` for an unknown strategy, `ContextorError::Rag`
    /// for invalid retrieval knobs.
    pub fn from_env() -> Result<Self, ContextorError> {
        let strategy = match std::env::var("ANSWER_STRATEGY") {
            Ok(v) if !v.trim().is_empty() => v.parse()?,
            _ => StrategyKind::default(),
        };
        Ok(Self {
            strategy,
            rag: RagConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strategy_aliases() {
        assert_eq!("rag".parse::<StrategyKind>().unwrap(), StrategyKind::Retrieval);
        assert_eq!(" Retrieval ".parse::<StrategyKind>().unwrap(), StrategyKind::Retrieval);
        assert_eq!("full-policy".parse::<StrategyKind>().unwrap(), StrategyKind::FullPolicy);
        assert_eq!("stuffed".parse::<StrategyKind>().unwrap(), StrategyKind::FullPolicy);
        assert!(matches!(
            "hybrid".parse::<StrategyKind>(),
            Err(ContextorError::Config(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        for kind in [StrategyKind::Retrieval, StrategyKind::FullPolicy] {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }
}
