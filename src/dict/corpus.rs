use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Ordered word list the benchmark searches.
///
/// Loading trims each line and drops empty ones; nothing else is
/// normalized. The linear scan is case-sensitive, so a corpus meant for
/// it should already be consistently cased (the trie lower-cases its own
/// keys either way).
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    pub fn from_words(words: Vec<String>) -> Self {
        Corpus { words }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        log::info!("loaded corpus, {} words", words.len());
        Ok(Corpus { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reader_trims_and_keeps_order() {
        let input = Cursor::new("ant\n  art  \n\nantler\r\napple\n");
        let corpus = Corpus::from_reader(input).unwrap();
        let expected: Vec<String> = ["ant", "art", "antler", "apple"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(expected, corpus.words());
        assert_eq!(4, corpus.len());
    }

    #[test]
    fn empty_reader_gives_empty_corpus() {
        let corpus = Corpus::from_reader(Cursor::new("")).unwrap();
        assert!(corpus.is_empty());
    }
}
