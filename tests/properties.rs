//! Property-based tests for the miner.
//!
//! Small random data sets are mined and checked against the defining
//! properties of frequent itemsets, and against exhaustive enumeration.

use apriori::{apriori, Item, MiningConfig, MiningReport, PairThreshold, Trie};
use proptest::prelude::*;

const MAX_ITEM: u32 = 6;

/// Strategy for data sets of up to 12 transactions over items 1..=6,
/// duplicates and arbitrary order included.
fn transactions() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(1..=MAX_ITEM, 0..8), 0..12)
}

fn min_support() -> impl Strategy<Value = f64> {
    (1u32..=20).prop_map(|n| f64::from(n) / 20.0)
}

fn to_items(ids: &[u32]) -> Vec<Item> {
    ids.iter().map(|&id| Item::with_id(id)).collect()
}

/// Transactions of `raw` containing every item of `itemset`.
fn occurrences(raw: &[Vec<u32>], itemset: &[Item]) -> u32 {
    raw.iter()
        .filter(|t| itemset.iter().all(|item| t.contains(&item.id())))
        .count() as u32
}

/// Every non-empty subset of 1..=MAX_ITEM, ascending.
fn all_itemsets() -> Vec<Vec<Item>> {
    (1u32..(1 << MAX_ITEM))
        .map(|mask| {
            (0..MAX_ITEM)
                .filter(|bit| (mask >> bit) & 1 == 1)
                .map(|bit| Item::with_id(bit + 1))
                .collect()
        })
        .collect()
}

fn threshold(report: &MiningReport, size: usize, pair_threshold: PairThreshold) -> f64 {
    let min_items = report.min_items.into_inner();
    if size == 2 {
        pair_threshold.min_pair_items(min_items)
    } else {
        min_items
    }
}

fn check_properties(
    raw: &[Vec<u32>],
    report: &MiningReport,
    pair_threshold: PairThreshold,
) -> Result<(), TestCaseError> {
    let mut previous: Option<Vec<Vec<Item>>> = None;
    let mut expected_size = 1;
    for level in &report.levels {
        prop_assert_eq!(level.size, expected_size);
        prop_assert!(!level.itemsets.is_empty());
        let items: Vec<Vec<Item>> = level.itemsets.iter().map(|i| i.items.clone()).collect();

        // Sorted strictly, hence no duplicates.
        prop_assert!(items.windows(2).all(|w| w[0] < w[1]));

        for itemset in &level.itemsets {
            prop_assert_eq!(itemset.len(), level.size);
            prop_assert!(itemset.items.windows(2).all(|w| w[0] < w[1]));
            let count = occurrences(raw, &itemset.items);
            prop_assert_eq!(itemset.count, count);
            prop_assert!(f64::from(count) >= threshold(report, level.size, pair_threshold));
            prop_assert!(count > 0);

            if let Some(ref previous) = previous {
                for skip in 0..itemset.len() {
                    let mut subset = itemset.items.clone();
                    subset.remove(skip);
                    prop_assert!(previous.binary_search(&subset).is_ok());
                }
            }
        }
        previous = Some(items);
        expected_size += 1;
    }
    Ok(())
}

proptest! {
    #[test]
    fn frequent_itemsets_are_frequent(raw in transactions(), support in min_support()) {
        let config = MiningConfig::new(support).unwrap();
        let report = apriori(&raw, &config).unwrap();
        check_properties(&raw, &report, PairThreshold::Relaxed)?;
    }

    /// With the uniform threshold the result is exactly the set of itemsets
    /// that occur often enough.
    #[test]
    fn strict_matches_exhaustive_search(raw in transactions(), support in min_support()) {
        let config = MiningConfig::new(support)
            .unwrap()
            .with_pair_threshold(PairThreshold::Strict);
        let report = apriori(&raw, &config).unwrap();
        check_properties(&raw, &report, PairThreshold::Strict)?;

        let min_items = report.min_items.into_inner();
        let expected: Vec<Vec<Item>> = all_itemsets()
            .into_iter()
            .filter(|itemset| {
                let count = occurrences(&raw, itemset);
                count > 0 && f64::from(count) >= min_items
            })
            .collect();
        let mut found: Vec<Vec<Item>> = report.itemsets().map(|i| i.items.clone()).collect();
        found.sort();
        let mut expected = expected;
        expected.sort();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn mining_is_repeatable(raw in transactions(), support in min_support()) {
        let config = MiningConfig::new(support).unwrap();
        let first = apriori(&raw, &config).unwrap();
        let second = apriori(&raw, &config.clone().with_parallel(true)).unwrap();
        prop_assert_eq!(&first, &second);
        let third = apriori(&raw, &config.with_prune_candidates(false)).unwrap();
        prop_assert_eq!(&first, &third);
    }

    #[test]
    fn trie_finds_exactly_the_subsequences(
        mask in prop::collection::vec(any::<bool>(), MAX_ITEM as usize),
        size in 1usize..=3,
    ) {
        let transaction: Vec<u32> = (1..=MAX_ITEM).filter(|&id| mask[(id - 1) as usize]).collect();
        let candidates: Vec<Vec<Item>> = all_itemsets()
            .into_iter()
            .filter(|itemset| itemset.len() == size)
            .collect();
        let trie = Trie::from_itemsets(&candidates);
        let mut found = trie.matches(&to_items(&transaction));
        found.sort();
        let mut expected: Vec<Vec<Item>> = candidates
            .into_iter()
            .filter(|itemset| itemset.iter().all(|item| transaction.contains(&item.id())))
            .collect();
        expected.sort();
        prop_assert_eq!(found, expected);
    }
}

#[test]
fn min_support_out_of_range_is_rejected() {
    for &support in &[0.0, -0.1, 1.5, std::f64::NAN] {
        assert!(MiningConfig::new(support).is_err());
    }
}

#[test]
fn example_mined_through_public_api() {
    let transactions = vec![
        vec![1, 2, 3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3],
        vec![1, 2, 3],
    ];
    let config = MiningConfig::new(0.6).unwrap();
    let report: MiningReport = apriori(&transactions, &config).unwrap();
    assert_eq!(report.level_counts(), vec![(1, 3), (2, 3)]);
    assert_eq!(report.total(), 6);
    assert!(!report.contains(&to_items(&[1, 2, 3])));

    let trie = Trie::from_itemsets(&[to_items(&[1, 3]), to_items(&[1, 4])]);
    assert_eq!(trie.matches(&to_items(&[1, 2, 3])), vec![to_items(&[1, 3])]);
}
