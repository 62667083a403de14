//! Benchmark pipeline: sample a query workload from the corpus, then time
//! both lookup strategies on every query word.
//!
//! The two strategies do not answer the same question. The linear scan
//! finds substring containment anywhere in a word; the trie finds words
//! extending the query as a prefix, and only among words some earlier
//! scan inserted. The timings are still useful as a before/after of the
//! same input word, but they are not a like-for-like comparison, and the
//! trie counts depend on scan history. This asymmetry is deliberate and
//! must not be "fixed" by unifying the semantics.

use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::configuration::BenchConfig;
use crate::core::linear::linear_scan;
use crate::core::record::{SearchMethod, TimingRecord};
use crate::dict::corpus::Corpus;
use crate::dict::trie::Trie;
use crate::error::Error;

/// Query words grouped by length; BTreeMap iteration runs the buckets in
/// ascending length order.
pub type Workload = BTreeMap<usize, Vec<String>>;

/// Samples `bucket_size` distinct words of every length in
/// `min_len..=max_len`, uniformly at random from the corpus.
///
/// Fails fast with [`Error::WorkloadExhausted`] when the corpus cannot
/// fill a bucket, instead of resampling forever.
pub fn generate_workload<R: Rng>(
    corpus: &Corpus,
    min_len: usize,
    max_len: usize,
    bucket_size: usize,
    rng: &mut R,
) -> Result<Workload, Error> {
    let mut distinct: BTreeMap<usize, HashSet<&str>> = BTreeMap::new();
    for word in corpus.words() {
        let len = word.chars().count();
        if (min_len..=max_len).contains(&len) {
            distinct.entry(len).or_default().insert(word.as_str());
        }
    }

    let mut workload = Workload::new();
    for length in min_len..=max_len {
        let available = distinct.get(&length).map_or(0, HashSet::len);
        if available < bucket_size {
            return Err(Error::WorkloadExhausted {
                length,
                available,
                requested: bucket_size,
            });
        }
        let bucket: &mut Vec<String> = workload.entry(length).or_default();
        while bucket.len() != bucket_size {
            let pick = &corpus.words()[rng.gen_range(0..corpus.len())];
            if pick.chars().count() == length && !bucket.contains(pick) {
                bucket.push(pick.clone());
            }
        }
    }
    Ok(workload)
}

/// Shared mutable state of one benchmark run: the corpus and the single
/// trie the linear scans populate. Built once per run, discarded after.
pub struct BenchmarkContext {
    corpus: Corpus,
    trie: Trie<String>,
}

impl BenchmarkContext {
    pub fn new(corpus: Corpus) -> Self {
        BenchmarkContext {
            corpus,
            trie: Trie::default(),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn trie(&self) -> &Trie<String> {
        &self.trie
    }

    /// Times both strategies on every workload word, buckets in ascending
    /// length order, words in bucket order. Per word the linear scan runs
    /// first, which is what puts the word's matches into the trie before
    /// the trie search that follows it. Each word appends a `linear`
    /// record then a `trie` record.
    pub fn run(&mut self, workload: &Workload) -> Vec<TimingRecord> {
        let total: usize = workload.values().map(Vec::len).sum();
        let mut records = Vec::with_capacity(total * 2);
        let mut word_n = 0usize;

        for words in workload.values() {
            for word in words {
                word_n += 1;
                log::debug!("progress {}/{}: searching for {}", word_n, total, word);

                let start = Instant::now();
                let matches = linear_scan(word, &self.corpus, &mut self.trie);
                records.push(TimingRecord {
                    method: SearchMethod::Linear,
                    elapsed_ms: start.elapsed().as_secs_f64() * 1_000.0,
                    match_count: matches.len(),
                    query: word.clone(),
                });

                let start = Instant::now();
                let hits = self.trie.search(word);
                records.push(TimingRecord {
                    method: SearchMethod::Trie,
                    elapsed_ms: start.elapsed().as_secs_f64() * 1_000.0,
                    match_count: hits.len(),
                    query: word.clone(),
                });
            }
        }
        records
    }
}

/// Full pipeline as the demo drives it: seeded (or entropy-seeded) RNG,
/// workload generation, one context, one run.
pub fn run_benchmark(cfg: &BenchConfig, corpus: Corpus) -> Result<Vec<TimingRecord>, Error> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let workload = generate_workload(
        &corpus,
        cfg.min_word_len,
        cfg.max_word_len,
        cfg.bucket_size,
        &mut rng,
    )?;
    let mut context = BenchmarkContext::new(corpus);
    Ok(context.run(&workload))
}
