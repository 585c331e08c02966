//! Recursive character splitter.
//!
//! Splits on the first separator (in priority order) that occurs in the text,
//! greedily merges adjacent pieces into chunks of at most `chunk_size` chars,
//! and carries up to `chunk_overlap` chars of trailing pieces into the next
//! chunk. Pieces that are still too long are split again with the remaining
//! separators; the empty separator cuts between chars.
//!
//! All bookkeeping is done on byte ranges of the original text, so every chunk
//! is a verbatim (trimmed) substring and its offset is exact.

use std::{collections::VecDeque, ops::Range};

use crate::{errors::RagError, record::Chunk};

/// Paragraph, line, word, char.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[derive(Clone, Debug)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl RecursiveSplitter {
    /// # Errors
    /// `RagError::Config` if `chunk_size == 0` or `chunk_overlap >= chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, RagError> {
        if chunk_size == 0 {
            return Err(RagError::Config("chunk_size must be > 0".into()));
        }
        if chunk_overlap >= chunk_size {
            return Err(RagError::Config(format!(
                "chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Replaces the separator priority list.
    #[cfg(test)]
    fn with_separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Splits `text` into trimmed, non-empty chunks in document order.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        let mut ranges = Vec::new();
        self.split_range(text, 0..text.len(), &self.separators, &mut ranges);

        ranges
            .into_iter()
            .filter_map(|r| {
                let raw = &text[r.clone()];
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let lead = raw.len() - raw.trim_start().len();
                Some((r.start + lead, trimmed))
            })
            .enumerate()
            .map(|(id, (offset, t))| Chunk {
                id,
                text: t.to_string(),
                offset,
            })
            .collect()
    }

    fn split_range(
        &self,
        text: &str,
        range: Range<usize>,
        separators: &[String],
        out: &mut Vec<Range<usize>>,
    ) {
        let piece = &text[range.clone()];

        // First separator present in the piece; fall back to per-char cuts.
        let (sep, rest): (&str, &[String]) = match separators
            .iter()
            .position(|s| s.is_empty() || piece.contains(s.as_str()))
        {
            Some(i) => (separators[i].as_str(), &separators[i + 1..]),
            None => ("", &[]),
        };
        let sep_len = sep.chars().count();

        let mut good: Vec<Range<usize>> = Vec::new();
        for r in split_ranges(piece, range.start, sep) {
            if char_len(text, &r) < self.chunk_size {
                good.push(r);
                continue;
            }
            if !good.is_empty() {
                self.merge(text, &good, sep_len, out);
                good.clear();
            }
            if rest.is_empty() {
                out.push(r);
            } else {
                self.split_range(text, r, rest, out);
            }
        }
        if !good.is_empty() {
            self.merge(text, &good, sep_len, out);
        }
    }

    /// Greedy merge of adjacent pieces separated by exactly one separator.
    fn merge(
        &self,
        text: &str,
        pieces: &[Range<usize>],
        sep_len: usize,
        out: &mut Vec<Range<usize>>,
    ) {
        let mut current: VecDeque<Range<usize>> = VecDeque::new();
        let mut total = 0usize;

        for r in pieces {
            let len = char_len(text, r);
            let joiner = if current.is_empty() { 0 } else { sep_len };

            if total + len + joiner > self.chunk_size {
                if let (Some(first), Some(last)) = (current.front(), current.back()) {
                    out.push(first.start..last.end);
                }
                // Drop leading pieces until only the overlap tail remains and
                // the next piece fits.
                while total > self.chunk_overlap
                    || (total > 0
                        && total + len + if current.is_empty() { 0 } else { sep_len }
                            > self.chunk_size)
                {
                    let Some(first) = current.pop_front() else {
                        break;
                    };
                    let joiner = if current.is_empty() { 0 } else { sep_len };
                    total = total.saturating_sub(char_len(text, &first) + joiner);
                }
            }

            current.push_back(r.clone());
            total += len + if current.len() > 1 { sep_len } else { 0 };
        }

        if let (Some(first), Some(last)) = (current.front(), current.back()) {
            out.push(first.start..last.end);
        }
    }
}

/// Byte ranges of `piece` (located at `base`) between occurrences of `sep`.
/// Empty pieces are kept so adjacent ranges stay exactly one separator apart.
fn split_ranges(piece: &str, base: usize, sep: &str) -> Vec<Range<usize>> {
    if sep.is_empty() {
        return piece
            .char_indices()
            .map(|(i, c)| base + i..base + i + c.len_utf8())
            .collect();
    }
    let mut out = Vec::new();
    let mut start = 0;
    for (i, _) in piece.match_indices(sep) {
        out.push(base + start..base + i);
        start = i + sep.len();
    }
    out.push(base + start..base + piece.len());
    out
}

fn char_len(text: &str, r: &Range<usize>) -> usize {
    text[r.clone()].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Leave\n\nCasual Leave: 12 days per year.\nSick Leave: 10 days per year.\n\nRemote work: 2 days per week.";

    #[test]
    fn rejects_bad_configuration() {
        assert!(RecursiveSplitter::new(0, 0).is_err());
        assert!(RecursiveSplitter::new(10, 10).is_err());
        assert!(RecursiveSplitter::new(10, 9).is_ok());
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let s = RecursiveSplitter::new(500, 50).unwrap();
        let chunks = s.split("  Casual Leave: 12 days.  ");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Casual Leave: 12 days.");
        assert_eq!(chunks[0].offset, 2);
    }

    #[test]
    fn empty_and_blank_text_yield_nothing() {
        let s = RecursiveSplitter::new(20, 5).unwrap();
        assert!(s.split("").is_empty());
        assert!(s.split(" \n\n \n").is_empty());
    }

    #[test]
    fn chunks_respect_size_and_are_verbatim() {
        let s = RecursiveSplitter::new(40, 10).unwrap();
        let chunks = s.split(DOC);
        assert!(chunks.len() > 1);
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.id, i);
            assert!(c.text.chars().count() <= 40, "too long: {:?}", c.text);
            assert_eq!(&DOC[c.offset..c.offset + c.text.len()], c.text);
        }
        assert!(chunks.iter().any(|c| c.text.contains("12 days")));
    }

    #[test]
    fn consecutive_word_chunks_overlap() {
        let text = "one two three four five six seven eight nine ten";
        let s = RecursiveSplitter::new(15, 5).unwrap();
        let chunks = s.split(text);
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "one two three",
                "three four five",
                "five six seven",
                "seven eight",
                "eight nine ten"
            ]
        );
    }

    #[test]
    fn long_word_falls_back_to_char_cuts() {
        let s = RecursiveSplitter::new(4, 0).unwrap();
        let chunks = s.split("abcdefghij");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let s = RecursiveSplitter::new(3, 0).unwrap();
        let chunks = s.split("ééééé");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["ééé", "éé"]);
    }

    #[test]
    fn splitting_is_deterministic() {
        let s = RecursiveSplitter::new(40, 10).unwrap();
        assert_eq!(s.split(DOC), s.split(DOC));
    }

    #[test]
    fn custom_separators_are_honoured() {
        let s = RecursiveSplitter::new(8, 0)
            .unwrap()
            .with_separators(["|", ""]);
        let texts: Vec<String> = s.split("aaa|bbb|ccc").into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["aaa|bbb", "ccc"]);
    }
}
