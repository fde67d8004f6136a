//! Frequent itemset mining with the Apriori algorithm. Candidate itemsets
//! of each size are stored in a prefix tree, so that each transaction is
//! matched against all of them in a single traversal.

pub mod candidates;
pub mod config;
pub mod counter;
pub mod error;
pub mod item;
pub mod miner;
pub mod report;
pub mod support;
pub mod transaction;
pub mod transaction_reader;
pub mod trie;

pub use crate::miner::{apriori, mine_normalized};
pub use crate::config::{MinSupport, MiningConfig, PairThreshold};
pub use crate::error::{AprioriError, Result};
pub use crate::item::Item;
pub use crate::report::{FrequentItemset, Level, MiningReport};
pub use crate::transaction_reader::TransactionReader;
pub use crate::trie::Trie;
