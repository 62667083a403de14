use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Which strategy produced a timing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    Linear,
    Trie,
}

impl Display for SearchMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            SearchMethod::Linear => "linear",
            SearchMethod::Trie => "trie",
        };
        f.pad(tag)
    }
}

/// One timed search, in the shape the presentation layer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct TimingRecord {
    pub method: SearchMethod,
    pub elapsed_ms: f64,
    pub match_count: usize,
    pub query: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn method_tags() {
        assert_eq!("linear", SearchMethod::Linear.to_string());
        assert_eq!("trie", SearchMethod::Trie.to_string());
    }
}
