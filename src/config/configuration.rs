use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

fn default_min_word_len() -> usize {
    3
}

fn default_max_word_len() -> usize {
    20
}

fn default_bucket_size() -> usize {
    15
}

/// Benchmark run configuration, loaded from a YAML file.
///
/// Only `corpus_path` is required; the length range and bucket size
/// default to 3..=20 and 15 words per length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Word-list file, one word per line.
    pub corpus_path: PathBuf,
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
    #[serde(default = "default_bucket_size")]
    pub bucket_size: usize,
    /// Fixed RNG seed; a seeded run samples the same workload every time.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BenchConfig {
    /// Defaults for everything except the corpus location.
    pub fn with_corpus<P: Into<PathBuf>>(path: P) -> Self {
        BenchConfig {
            corpus_path: path.into(),
            min_word_len: default_min_word_len(),
            max_word_len: default_max_word_len(),
            bucket_size: default_bucket_size(),
            seed: None,
        }
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let cfg = serde_yaml::from_reader(file)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let cfg: BenchConfig = serde_yaml::from_str("corpus_path: words_alpha.txt").unwrap();
        assert_eq!(PathBuf::from("words_alpha.txt"), cfg.corpus_path);
        assert_eq!(3, cfg.min_word_len);
        assert_eq!(20, cfg.max_word_len);
        assert_eq!(15, cfg.bucket_size);
        assert_eq!(None, cfg.seed);
    }

    #[test]
    fn full_yaml_overrides_defaults() {
        let yaml = "corpus_path: words.txt\nmin_word_len: 4\nmax_word_len: 8\nbucket_size: 5\nseed: 42\n";
        let cfg: BenchConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(4, cfg.min_word_len);
        assert_eq!(8, cfg.max_word_len);
        assert_eq!(5, cfg.bucket_size);
        assert_eq!(Some(42), cfg.seed);
    }
}
