use std::io::{self, BufRead};

use rand::seq::SliceRandom;
use rand::Rng;

/// A word list packed into one append-only buffer.
///
/// Entries are length-prefixed (one length byte, so words are at most 255
/// bytes) and a zero-length entry terminates the list. Bucket-quality runs
/// walk the same corpus many times, so the flat layout keeps that walk a
/// single forward scan.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    data: Vec<u8>,
    nwords: usize,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words (the sentinel does not count).
    pub fn len(&self) -> usize {
        self.nwords
    }

    pub fn is_empty(&self) -> bool {
        self.nwords == 0
    }

    /// Append a word. An empty word is the sentinel terminator.
    pub fn push(&mut self, word: &[u8]) {
        assert!(word.len() < 256, "corpus words must be shorter than 256 bytes");
        self.data.push(word.len() as u8);
        self.data.extend_from_slice(word);
        if !word.is_empty() {
            self.nwords += 1;
        }
    }

    pub fn words(&self) -> Words<'_> {
        Words { data: &self.data }
    }

    /// Read a newline-delimited word list. The first malformed line (empty,
    /// or too long for a length byte) stops the read loop.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut corpus = Corpus::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() || line.len() >= 256 {
                break;
            }
            corpus.push(line.as_bytes());
        }
        corpus.push(b"");
        Ok(corpus)
    }

    /// Byte offset of every word's length prefix.
    fn index(&self) -> Vec<usize> {
        let mut index = Vec::with_capacity(self.nwords);
        let mut pos = 0;
        while let Some(&len) = self.data.get(pos) {
            if len == 0 {
                break;
            }
            index.push(pos);
            pos += len as usize + 1;
        }
        debug_assert_eq!(index.len(), self.nwords);
        index
    }

    /// Uniformly sample `nwords` words without replacement into a new,
    /// sealed corpus. `nwords` must not exceed [`len`](Corpus::len).
    pub fn downsample<R: Rng>(&self, nwords: usize, rng: &mut R) -> Corpus {
        debug_assert!(nwords <= self.nwords);
        let mut index = self.index();
        let (picked, _) = index.partial_shuffle(rng, nwords);
        let mut out = Corpus::new();
        for &pos in picked.iter() {
            let len = self.data[pos] as usize;
            out.push(&self.data[pos + 1..pos + 1 + len]);
        }
        out.push(b"");
        out
    }
}

pub struct Words<'a> {
    data: &'a [u8],
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let (&len, rest) = self.data.split_first()?;
        if len == 0 {
            return None;
        }
        let (word, rest) = rest.split_at(len as usize);
        self.data = rest;
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Cursor;

    use crate::prng::SplitMix64;

    use super::*;

    fn sample_corpus(words: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        for w in words {
            corpus.push(w.as_bytes());
        }
        corpus.push(b"");
        corpus
    }

    #[test]
    fn push_then_walk() {
        let corpus = sample_corpus(&["alpha", "beta", "gamma", "delta"]);
        assert_eq!(corpus.len(), 4);
        let words: Vec<&[u8]> = corpus.words().collect();
        assert_eq!(words, [&b"alpha"[..], b"beta", b"gamma", b"delta"]);
    }

    #[test]
    fn reader_strips_newlines_and_stops_at_blank() {
        let input = "alpha\r\nbeta\n\ngamma\n";
        let corpus = Corpus::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(corpus.len(), 2);
        let words: Vec<&[u8]> = corpus.words().collect();
        assert_eq!(words, [&b"alpha"[..], b"beta"]);
    }

    #[test]
    fn downsample_is_a_subset_of_the_right_size() {
        let all: Vec<String> = (0..100).map(|i| format!("word{i}")).collect();
        let refs: Vec<&str> = all.iter().map(|s| s.as_str()).collect();
        let corpus = sample_corpus(&refs);

        let mut rng = SplitMix64::new(42);
        let sampled = corpus.downsample(32, &mut rng);
        assert_eq!(sampled.len(), 32);

        let full: HashSet<&[u8]> = corpus.words().collect();
        let picked: HashSet<&[u8]> = sampled.words().collect();
        assert_eq!(picked.len(), 32, "sampling must be without replacement");
        assert!(picked.is_subset(&full));
    }

    #[test]
    fn downsample_is_deterministic() {
        let all: Vec<String> = (0..100).map(|i| format!("word{i}")).collect();
        let refs: Vec<&str> = all.iter().map(|s| s.as_str()).collect();
        let corpus = sample_corpus(&refs);

        let a: Vec<Vec<u8>> = corpus
            .downsample(16, &mut SplitMix64::new(7))
            .words()
            .map(<[u8]>::to_vec)
            .collect();
        let b: Vec<Vec<u8>> = corpus
            .downsample(16, &mut SplitMix64::new(7))
            .words()
            .map(<[u8]>::to_vec)
            .collect();
        assert_eq!(a, b);
    }
}
