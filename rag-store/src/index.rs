//! In-memory nearest-neighbour index.
//!
//! Exhaustive scan over all vectors. The corpus is a handful of chunks, so a
//! flat index is exact and cheap. Written once while building, read-only
//! afterwards.

use crate::{
    config::DistanceKind,
    errors::RagError,
    record::{Chunk, RagHit},
};

#[derive(Debug)]
struct Entry {
    chunk: Chunk,
    vector: Vec<f32>,
}

/// Flat vector index mapping embeddings to chunks.
#[derive(Debug)]
pub struct VectorIndex {
    distance: DistanceKind,
    entries: Vec<Entry>,
}

impl VectorIndex {
    pub fn new(distance: DistanceKind) -> Self {
        Self {
            distance,
            entries: Vec::new(),
        }
    }

    /// Adds a `(chunk, vector)` pair.
    ///
    /// # Errors
    /// `EmptyEmbedding` for a zero-length vector, `VectorSizeMismatch` if the
    /// dimension differs from the vectors already stored.
    pub fn insert(&mut self, chunk: Chunk, vector: Vec<f32>) -> Result<(), RagError> {
        if vector.is_empty() {
            return Err(RagError::EmptyEmbedding);
        }
        if let Some(want) = self.dim() {
            if vector.len() != want {
                return Err(RagError::VectorSizeMismatch {
                    got: vector.len(),
                    want,
                });
            }
        }
        self.entries.push(Entry { chunk, vector });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimension of stored vectors (`None` while empty).
    pub fn dim(&self) -> Option<usize> {
        self.entries.first().map(|e| e.vector.len())
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.entries.iter().map(|e| &e.chunk)
    }

    /// Top-`k` chunks by descending score; ties go to the lower chunk id.
    ///
    /// # Errors
    /// `VectorSizeMismatch` if `query` has the wrong dimension.
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<RagHit>, RagError> {
        if let Some(want) = self.dim() {
            if query.len() != want {
                return Err(RagError::VectorSizeMismatch {
                    got: query.len(),
                    want,
                });
            }
        }

        let mut hits: Vec<RagHit> = self
            .entries
            .iter()
            .map(|e| RagHit {
                score: score(self.distance, query, &e.vector),
                chunk_id: e.chunk.id,
                text: e.chunk.text.clone(),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.chunk_id.cmp(&b.chunk_id))
        });
        hits.truncate(top_k);
        Ok(hits)
    }
}

fn score(kind: DistanceKind, a: &[f32], b: &[f32]) -> f32 {
    match kind {
        DistanceKind::Cosine => cosine_similarity(a, b),
        DistanceKind::Dot => dot(a, b),
        DistanceKind::Euclid => -a
            .iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f32>()
            .sqrt(),
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Cosine similarity in `[-1, 1]`; `0.0` if either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a < f32::EPSILON || norm_b < f32::EPSILON {
        0.0
    } else {
        dot(a, b) / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: usize, text: &str) -> Chunk {
        Chunk {
            id,
            text: text.into(),
            offset: 0,
        }
    }

    fn index(distance: DistanceKind) -> VectorIndex {
        let mut idx = VectorIndex::new(distance);
        idx.insert(chunk(0, "leave"), vec![1.0, 0.0, 0.0]).unwrap();
        idx.insert(chunk(1, "hours"), vec![0.0, 1.0, 0.0]).unwrap();
        idx.insert(chunk(2, "benefits"), vec![0.7, 0.7, 0.0]).unwrap();
        idx
    }

    #[test]
    fn returns_top_k_by_similarity() {
        let idx = index(DistanceKind::Cosine);
        let hits = idx.search(&[1.0, 0.1, 0.0], 2).unwrap();
        let ids: Vec<usize> = hits.iter().map(|h| h.chunk_id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert!(hits[0].score >= hits[1].score);
    }

    #[test]
    fn k_larger_than_index_returns_everything() {
        let idx = index(DistanceKind::Cosine);
        assert_eq!(idx.search(&[0.0, 0.0, 1.0], 10).unwrap().len(), 3);
        assert!(idx.search(&[0.0, 0.0, 1.0], 0).unwrap().is_empty());
    }

    #[test]
    fn ties_break_by_chunk_order() {
        // Orthogonal query: every score is 0.0.
        let idx = index(DistanceKind::Cosine);
        let hits = idx.search(&[0.0, 0.0, 1.0], 2).unwrap();
        let ids: Vec<usize> = hits.iter().map(|h| h.chunk_id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn euclid_prefers_nearest_point() {
        let idx = index(DistanceKind::Euclid);
        let hits = idx.search(&[0.0, 0.9, 0.0], 1).unwrap();
        assert_eq!(hits[0].chunk_id, 1);
        assert!(hits[0].score <= 0.0);
    }

    #[test]
    fn dimension_is_enforced() {
        let mut idx = index(DistanceKind::Dot);
        assert!(matches!(
            idx.insert(chunk(3, "x"), vec![1.0]),
            Err(RagError::VectorSizeMismatch { got: 1, want: 3 })
        ));
        assert!(matches!(
            idx.insert(chunk(3, "x"), vec![]),
            Err(RagError::EmptyEmbedding)
        ));
        assert!(idx.search(&[1.0, 0.0], 1).is_err());
    }

    #[test]
    fn cosine_handles_zero_vectors() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert!((cosine_similarity(&[2.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
    }
}
