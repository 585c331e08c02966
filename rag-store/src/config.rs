//! Splitting and retrieval configuration.

use std::str::FromStr;

use crate::errors::RagError;

/// Similarity function used by the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DistanceKind {
    /// Cosine similarity (recommended for most embeddings).
    #[default]
    Cosine,
    /// Dot product (useful for normalized vectors).
    Dot,
    /// Euclidean distance (L2); scored as the negated distance.
    Euclid,
}

impl FromStr for DistanceKind {
    type Err = RagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(DistanceKind::Cosine),
            "dot" => Ok(DistanceKind::Dot),
            "euclid" | "l2" => Ok(DistanceKind::Euclid),
            other => Err(RagError::Config(format!("unknown distance `{other}`"))),
        }
    }
}

/// Configuration for index building and retrieval.
#[derive(Clone, Debug, PartialEq)]
pub struct RagConfig {
    /// Maximum chunk length, in chars.
    pub chunk_size: usize,
    /// Chars carried over from the end of one chunk into the next.
    pub chunk_overlap: usize,
    /// Number of chunks returned per query.
    pub top_k: usize,
    /// Similarity function.
    pub distance: DistanceKind,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
            top_k: 2,
            distance: DistanceKind::Cosine,
        }
    }
}

impl RagConfig {
    /// Defaults overridden by `RAG_CHUNK_SIZE`, `RAG_CHUNK_OVERLAP`,
    /// `RAG_TOP_K` and `RAG_DISTANCE` when set.
    ///
    /// # Errors
    /// `RagError::Config` for unparsable values or an invalid combination.
    pub fn from_env() -> Result<Self, RagError> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self::from_values(
            var("RAG_CHUNK_SIZE"),
            var("RAG_CHUNK_OVERLAP"),
            var("RAG_TOP_K"),
            var("RAG_DISTANCE"),
        )
    }

    fn from_values(
        chunk_size: Option<String>,
        chunk_overlap: Option<String>,
        top_k: Option<String>,
        distance: Option<String>,
    ) -> Result<Self, RagError> {
        let defaults = Self::default();
        let cfg = Self {
            chunk_size: parse_usize("RAG_CHUNK_SIZE", chunk_size)?.unwrap_or(defaults.chunk_size),
            chunk_overlap: parse_usize("RAG_CHUNK_OVERLAP", chunk_overlap)?
                .unwrap_or(defaults.chunk_overlap),
            top_k: parse_usize("RAG_TOP_K", top_k)?.unwrap_or(defaults.top_k),
            distance: match distance {
                Some(d) => d.parse()?,
                None => defaults.distance,
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), RagError> {
        if self.chunk_size == 0 {
            return Err(RagError::Config("chunk_size must be > 0".into()));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(RagError::Config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        if self.top_k == 0 {
            return Err(RagError::Config("top_k must be > 0".into()));
        }
        Ok(())
    }
}

fn parse_usize(var: &str, raw: Option<String>) -> Result<Option<usize>, RagError> {
    raw.map(|v| {
        v.trim()
            .parse::<usize>()
            .map_err(|_| RagError::Config(format!("{var}: expected a non-negative integer")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_pipeline() {
        let cfg = RagConfig::from_values(None, None, None, None).unwrap();
        assert_eq!(cfg, RagConfig::default());
        assert_eq!((cfg.chunk_size, cfg.chunk_overlap, cfg.top_k), (500, 50, 2));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = RagConfig::from_values(
            Some("300".into()),
            Some(" 30 ".into()),
            Some("4".into()),
            Some("L2".into()),
        )
        .unwrap();
        assert_eq!(cfg.chunk_size, 300);
        assert_eq!(cfg.chunk_overlap, 30);
        assert_eq!(cfg.top_k, 4);
        assert_eq!(cfg.distance, DistanceKind::Euclid);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(RagConfig::from_values(Some("abc".into()), None, None, None).is_err());
        assert!(RagConfig::from_values(Some("40".into()), Some("40".into()), None, None).is_err());
        assert!(RagConfig::from_values(None, None, Some("0".into()), None).is_err());
        assert!(RagConfig::from_values(None, None, None, Some("manhattan".into())).is_err());
    }
}
