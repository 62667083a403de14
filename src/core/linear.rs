use crate::dict::corpus::Corpus;
use crate::dict::trie::Trie;

/// Scans the corpus in order and returns every item containing `query`
/// as a contiguous substring, anywhere in the word.
///
/// Each match is also inserted into `trie` with the match itself as the
/// payload. This side effect is the only writer the trie has: a word no
/// scan has matched yet stays absent from the trie even when the corpus
/// holds it. Unlike the trie, the scan does not lower-case anything, so
/// the corpus must already be consistently cased.
pub fn linear_scan(query: &str, corpus: &Corpus, trie: &mut Trie<String>) -> Vec<String> {
    let mut matches = Vec::new();
    for item in corpus.words() {
        if item.contains(query) {
            matches.push(item.clone());
            trie.insert(item, item.clone());
        }
    }
    matches
}

#[cfg(test)]
mod test {
    use super::*;

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::from_words(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn matches_substrings_in_corpus_order() {
        let corpus = corpus(&["scatter", "dog", "cat", "concatenate"]);
        let mut trie = Trie::default();
        let matches = linear_scan("cat", &corpus, &mut trie);
        assert_eq!(vec!["scatter", "cat", "concatenate"], matches);
    }

    #[test]
    fn scan_is_case_sensitive() {
        let corpus = corpus(&["Cat"]);
        let mut trie = Trie::default();
        assert!(linear_scan("cat", &corpus, &mut trie).is_empty());
        assert_eq!(0, trie.word_count());
    }

    #[test]
    fn trie_is_populated_lazily_by_scans() {
        let corpus = corpus(&["dog", "doghouse"]);
        let mut trie = Trie::default();
        assert!(trie.search("dog").is_empty());

        let matches = linear_scan("dog", &corpus, &mut trie);
        assert_eq!(2, matches.len());
        assert_eq!(2, trie.search("dog").len());
    }

    #[test]
    fn repeated_scans_keep_appending_payloads() {
        let corpus = corpus(&["ant"]);
        let mut trie = Trie::default();
        linear_scan("ant", &corpus, &mut trie);
        linear_scan("ant", &corpus, &mut trie);
        assert_eq!(Some(2), trie.results_for("ant").map(<[String]>::len));
    }
}
