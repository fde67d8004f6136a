use crate::counter::Counter;
use crate::item::Item;
use crate::transaction::Transaction;
use crate::trie::Trie;
use rayon::prelude::*;

pub type SupportCounts = Counter<Vec<Item>>;

/// Counts, for each candidate, the transactions containing it. Every
/// candidate appears in the result; those never matched have count 0.
/// All candidates must have `size` items.
pub fn count_support(
    candidates: &[Vec<Item>],
    transactions: &[Transaction],
    size: usize,
) -> SupportCounts {
    let trie = Trie::from_itemsets(candidates);
    let mut counts = Counter::with_keys(candidates.iter().cloned());
    let mut prefix = vec![];
    let mut matched = vec![];
    for transaction in transactions.iter().filter(|t| t.len() >= size) {
        matched.clear();
        trie.match_into(transaction, &mut prefix, &mut matched);
        for itemset in &matched {
            counts.add(itemset, 1);
        }
    }
    counts
}

/// Same as `count_support`, but matches transactions on the rayon thread
/// pool and sums the per-thread counts.
pub fn par_count_support(
    candidates: &[Vec<Item>],
    transactions: &[Transaction],
    size: usize,
) -> SupportCounts {
    let trie = Trie::from_itemsets(candidates);
    let counts = transactions
        .par_iter()
        .filter(|t| t.len() >= size)
        .fold(Counter::new, |mut counts, transaction| {
            for itemset in trie.matches(transaction) {
                counts.add(&itemset, 1);
            }
            counts
        })
        .reduce(Counter::new, Counter::merge);
    Counter::with_keys(candidates.iter().cloned()).merge(counts)
}
