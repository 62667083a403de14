use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Default)]
pub struct TrieNode {
    value: Option<char>,
    final_state: bool,
    child_nodes: HashMap<char, TrieNode>,
}

impl Display for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TrieNode[value:{:?}, final_state:{}, childs:{}]",
            self.value,
            self.final_state,
            self.child_nodes.len()
        )
    }
}

impl TrieNode {
    pub fn new(c: char) -> Self {
        TrieNode {
            value: Some(c),
            final_state: false,
            child_nodes: HashMap::new(),
        }
    }

    pub fn is_final_state(&self) -> bool {
        self.final_state
    }

    fn add_child(&mut self, c: char) {
        self.child_nodes.insert(c, TrieNode::new(c));
    }

    // A word ending at this node spells `prefix` plus this node's own
    // value; children get the extended prefix. The root's value is None
    // and contributes nothing, which is what makes the empty-prefix
    // whole-tree traversal work without a special case.
    fn collect_words(&self, prefix: &str, found: &mut Vec<String>) {
        let mut path = prefix.to_string();
        if let Some(c) = self.value {
            path.push(c);
        }
        if self.final_state {
            found.push(path.clone());
        }
        for child in self.child_nodes.values() {
            child.collect_words(&path, found);
        }
    }
}

/// Character trie mapping lower-cased words to the list of payloads
/// accumulated across their insertions.
///
/// `search` answers prefix queries only: it never matches a query that
/// occurs in the middle of a stored word. Insert-only; there is no
/// deletion.
#[derive(Debug)]
pub struct Trie<R> {
    root: TrieNode,
    results_by_word: HashMap<String, Vec<R>>,
}

impl<R> Default for Trie<R> {
    fn default() -> Self {
        Trie {
            root: TrieNode::default(),
            results_by_word: HashMap::new(),
        }
    }
}

impl<R> Trie<R> {
    /// Inserts `word` (lower-cased) and appends `result` to its payload
    /// list. Re-inserting a word reuses the node path and keeps
    /// accumulating payloads.
    pub fn insert(&mut self, word: &str, result: R) {
        let word = word.to_lowercase();
        let mut node = &mut self.root;
        for c in word.chars() {
            if !node.child_nodes.contains_key(&c) {
                node.add_child(c);
            }
            node = node.child_nodes.get_mut(&c).unwrap();
        }
        node.final_state = true;
        self.results_by_word.entry(word).or_default().push(result);
    }

    /// Walks the lower-cased `word` from the root and, if the whole path
    /// exists, collects the payload list of every inserted word that
    /// extends it (the word itself included). Returns empty on the first
    /// missing character. An empty query returns the entire tree.
    pub fn search(&self, word: &str) -> Vec<&[R]> {
        let word = word.to_lowercase();
        let mut node = &self.root;
        for c in word.chars() {
            match node.child_nodes.get(&c) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        // The prefix handed to the traversal drops the query's last
        // character; the entry node's own value puts it back.
        let mut chars = word.chars();
        chars.next_back();
        let prefix = chars.as_str();

        let mut found = Vec::new();
        node.collect_words(prefix, &mut found);
        found
            .iter()
            .filter_map(|w| self.results_by_word.get(w).map(Vec::as_slice))
            .collect()
    }

    /// Payload list of one exact word, if it was ever inserted.
    pub fn results_for(&self, word: &str) -> Option<&[R]> {
        self.results_by_word
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Number of distinct words inserted so far.
    pub fn word_count(&self) -> usize {
        self.results_by_word.len()
    }
}
