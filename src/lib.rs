//! Word-lookup benchmark: linear substring scanning vs character-trie
//! prefix search over a shared word list.
//!
//! A run samples random query words per length bucket, then times both
//! strategies on every word, linear scan first. The scan inserts its
//! matches into the one shared trie, so the trie search that follows only
//! covers what scan history has put there, and it answers prefix queries,
//! not substring queries. See [`crate::core::harness`] for why the two
//! result counts are not directly comparable.

pub mod config;
pub mod core;
pub mod dict;
pub mod error;

pub use crate::config::configuration::BenchConfig;
pub use crate::core::harness::{generate_workload, run_benchmark, BenchmarkContext, Workload};
pub use crate::core::linear::linear_scan;
pub use crate::core::record::{SearchMethod, TimingRecord};
pub use crate::dict::corpus::Corpus;
pub use crate::dict::trie::Trie;
pub use crate::error::Error;
