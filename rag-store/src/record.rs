//! Core data models used by the library.

/// A bounded substring of the corpus, produced once by the splitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Position in splitter output (0-based).
    pub id: usize,
    /// Trimmed chunk text.
    pub text: String,
    /// Byte offset of `text` inside the corpus.
    pub offset: usize,
}

/// Query parameters for RAG retrieval.
#[derive(Clone, Copy, Debug)]
pub struct RagQuery<'a> {
    pub text: &'a str,
    pub top_k: usize,
}

/// A single retrieval hit. Higher `score` means more similar.
#[derive(Clone, Debug, PartialEq)]
pub struct RagHit {
    pub score: f32,
    pub chunk_id: usize,
    pub text: String,
}
