use std::io::{self, Write};

use crate::corpus::Corpus;
use crate::prng::{SplitMix64, EVAL_SEED};

/// How a bucket-quality sweep is run.
#[derive(Copy, Clone, Debug)]
pub struct EvalConfig {
    /// Smallest truncation width, in bits. At least 1.
    pub min_bits: u8,
    /// Largest truncation width, inclusive. At most 30: each width allocates
    /// a `2^bits`-entry counter table.
    pub max_bits: u8,
    /// Seed for the downsampling generator.
    pub seed: u64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            min_bits: 1,
            max_bits: 30,
            seed: EVAL_SEED,
        }
    }
}

/// Rates how evenly hash functions spread a corpus over `2^bits` buckets.
///
/// Downsampled corpus views are cached per width, so every candidate
/// constant is scored against exactly the same words at each width.
pub struct QualityEval<'a> {
    config: EvalConfig,
    corpus: &'a Corpus,
    views: Vec<Option<Corpus>>,
    rng: SplitMix64,
}

impl<'a> QualityEval<'a> {
    pub fn new(corpus: &'a Corpus, config: EvalConfig) -> Self {
        assert!(
            (1..=30).contains(&config.min_bits) && config.min_bits <= config.max_bits,
            "bit range must satisfy 1 <= min_bits <= max_bits"
        );
        assert!(
            config.max_bits <= 30,
            "max_bits above 30 would allocate oversized counter tables"
        );
        Self {
            config,
            corpus,
            views: vec![None; config.max_bits as usize + 1],
            rng: SplitMix64::new(config.seed),
        }
    }

    /// The corpus view for one width: `min(2^bits, len)` words. Views smaller
    /// than the full corpus are sampled once and reused for every constant.
    fn view(&mut self, bits: u8) -> &Corpus {
        let nwords = 1usize << bits;
        if nwords >= self.corpus.len() {
            return self.corpus;
        }
        let Self {
            corpus, views, rng, ..
        } = self;
        views[bits as usize].get_or_insert_with(|| corpus.downsample(nwords, rng))
    }

    /// Score one hash function over the configured width range, emitting one
    /// `<id> <bits> <score>` line per width as it is computed.
    ///
    /// Lines are flushed immediately; sweeps are long-running and are often
    /// piped or interrupted.
    pub fn report<F, W>(&mut self, id: u64, hash: F, out: &mut W) -> io::Result<()>
    where
        F: Fn(&[u8]) -> u64,
        W: Write,
    {
        for bits in self.config.min_bits..=self.config.max_bits {
            let view = self.view(bits);
            let nwords = view.len();
            let raw = collision_stat(view, bits, &hash);
            let score = chi2_rating(raw, bits, nwords).log2();
            eprintln!("id {id}: {bits} bits over {nwords} words");
            writeln!(out, "{id} {bits} {score:.20}")?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Per-bucket collision statistic: `sum(c * (c + 1))` over all `2^bits`
/// buckets of the truncated hash, halved.
fn collision_stat<F: Fn(&[u8]) -> u64>(view: &Corpus, bits: u8, hash: F) -> u64 {
    let mask = (1u64 << bits) - 1;
    let mut counts = vec![0u32; 1usize << bits];
    for word in view.words() {
        counts[(hash(word) & mask) as usize] += 1;
    }
    counts.iter().map(|&c| u64::from(c) * (u64::from(c) + 1)).sum::<u64>() / 2
}

/// Normalize the raw collision statistic against the uniform-random null
/// model: `n / (2m) * (n + 2m - 1)` is its expected value for `n` words in
/// `m` buckets. A rating near 0 is close to ideal; near or above 1 means
/// detectable non-uniformity.
pub fn chi2_rating(raw: u64, bits: u8, nwords: usize) -> f64 {
    let n = nwords as f64;
    let m = (1u64 << bits) as f64;
    let denom = n / (2.0 * m) * (n + 2.0 * m - 1.0);
    raw as f64 / denom
}

#[cfg(test)]
mod tests {
    use crate::consts::PRIME_64;
    use crate::mulxor::sum_with_multiplier;
    use crate::seq_hash::SeqHash;
    use crate::words::WordGen;
    use crate::MulXor64;

    use super::*;

    fn synthetic_corpus(nwords: usize) -> Corpus {
        let mut gen = WordGen::new(WordGen::DEFAULT_SEED);
        let mut corpus = Corpus::new();
        let mut seen = std::collections::HashSet::new();
        while corpus.len() < nwords {
            let len = gen.gen_len(16);
            let word = gen.word(len);
            if !word.is_empty() && seen.insert(word.clone()) {
                corpus.push(&word);
            }
        }
        corpus.push(b"");
        corpus
    }

    #[test]
    fn rating_of_a_perfectly_even_spread() {
        // 4 words in 4 buckets, one each: raw = 4 * 1 * 2 / 2 = 4,
        // denom = 4/8 * (4 + 8 - 1) = 5.5.
        assert!((chi2_rating(4, 2, 4) - 4.0 / 5.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_multiplier_scores_markedly_worse() {
        let corpus = synthetic_corpus(4096);
        for bits in 8..=12 {
            let good = collision_stat(&corpus, bits, |w| sum_with_multiplier(PRIME_64, w));
            let bad = collision_stat(&corpus, bits, |w| sum_with_multiplier(1, w));
            let good = chi2_rating(good, bits, corpus.len()).log2();
            let bad = chi2_rating(bad, bits, corpus.len()).log2();
            assert!(
                bad > good + 0.2,
                "{bits} bits: multiplier 1 rated {bad}, prime rated {good}"
            );
        }
    }

    #[test]
    fn bucket_assignment_is_stable() {
        for (word, bucket) in [("alpha", 3u64), ("beta", 1), ("gamma", 1), ("delta", 3)] {
            assert_eq!(MulXor64::sum_of(word.as_bytes()) & 3, bucket);
        }
    }

    #[test]
    fn views_are_identical_across_constants() {
        let corpus = synthetic_corpus(1024);
        let mut eval = QualityEval::new(
            &corpus,
            EvalConfig {
                min_bits: 4,
                max_bits: 8,
                ..EvalConfig::default()
            },
        );
        let first: Vec<Vec<u8>> = eval.view(6).words().map(<[u8]>::to_vec).collect();
        let again: Vec<Vec<u8>> = eval.view(6).words().map(<[u8]>::to_vec).collect();
        assert_eq!(first.len(), 64);
        assert_eq!(first, again);
    }

    #[test]
    fn full_corpus_reused_when_small_enough() {
        let corpus = synthetic_corpus(100);
        let mut eval = QualityEval::new(
            &corpus,
            EvalConfig {
                min_bits: 1,
                max_bits: 10,
                ..EvalConfig::default()
            },
        );
        // 2^7 = 128 >= 100 words, so the view is the whole corpus.
        assert_eq!(eval.view(7).len(), 100);
        assert_eq!(eval.view(5).len(), 32);
    }

    #[test]
    fn report_emits_one_line_per_width() {
        let corpus = synthetic_corpus(256);
        let mut eval = QualityEval::new(
            &corpus,
            EvalConfig {
                min_bits: 2,
                max_bits: 5,
                ..EvalConfig::default()
            },
        );
        let mut out = Vec::new();
        eval.report(0, |w| u64::from(crate::Fnv32::sum_of(w)), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for (line, bits) in lines.iter().zip(2..) {
            let mut fields = line.split_whitespace();
            assert_eq!(fields.next(), Some("0"));
            assert_eq!(fields.next().unwrap(), bits.to_string());
            fields.next().unwrap().parse::<f64>().unwrap();
        }
    }
}
