// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::candidates::{prune_candidates, self_join};
use crate::config::MiningConfig;
use crate::counter::Counter;
use crate::error::Result;
use crate::item::Item;
use crate::report::{FrequentItemset, Level, MiningReport};
use crate::support::{count_support, par_count_support};
use crate::transaction::{normalize, Transaction};
use itertools::Itertools;
use tracing::{debug, info};

/// Item and item pair frequencies, gathered in a single pass.
struct SeedCounts {
    items: Counter<Item>,
    pairs: Counter<(Item, Item)>,
}

fn count_items_and_pairs(transactions: &[Transaction]) -> SeedCounts {
    let mut items = Counter::new();
    let mut pairs = Counter::new();
    for transaction in transactions {
        for item in transaction {
            items.add(item, 1);
        }
        for pair in transaction.iter().cloned().tuple_combinations::<(Item, Item)>() {
            pairs.add(&pair, 1);
        }
    }
    SeedCounts { items, pairs }
}

fn make_level(size: usize, itemsets: Vec<FrequentItemset>) -> Level {
    Level { size, itemsets }
}

/// Mines the frequent itemsets of `transactions`, which may be in any order
/// and may repeat items.
pub fn apriori(transactions: &[Vec<u32>], config: &MiningConfig) -> Result<MiningReport> {
    let transactions = normalize(transactions)?;
    Ok(mine_normalized(&transactions, config))
}

/// Mines transactions already in canonical form (see `transaction::normalize`).
pub fn mine_normalized(transactions: &[Transaction], config: &MiningConfig) -> MiningReport {
    let num_transactions = transactions.len();
    let min_items = config.min_support.min_items(num_transactions);
    let mut report = MiningReport::new(config.min_support.value(), num_transactions, min_items);
    info!(
        num_transactions,
        min_support = config.min_support.value(),
        min_items,
        "Mining frequent itemsets"
    );

    mine_levels(transactions, config, &mut report);

    info!(
        "Total number of frequent patterns with min_support = {}: {}",
        config.min_support.value(),
        report.total()
    );
    report
}

// Pushes L1, L2, ... onto `report`, stopping at the first empty level.
fn mine_levels(transactions: &[Transaction], config: &MiningConfig, report: &mut MiningReport) {
    let num_transactions = transactions.len();
    let min_items = report.min_items.into_inner();

    let seed = count_items_and_pairs(transactions);

    // L1: items at or above the threshold.
    let l1: Vec<Item> = seed
        .items
        .items_with_count_at_least(min_items)
        .into_iter()
        .sorted()
        .collect();
    info!("Number of size-1 frequent patterns: {}", l1.len());
    if l1.is_empty() {
        return;
    }
    report.push_level(make_level(
        1,
        l1.iter()
            .map(|&item| FrequentItemset::new(vec![item], seed.items.get(&item), num_transactions))
            .collect(),
    ));

    // L2: pairs of frequent items, checked against the pair counts from
    // the first pass. L1 is sorted, so the pairs come out sorted too.
    let min_pair_items = config.pair_threshold.min_pair_items(min_items);
    let l2: Vec<FrequentItemset> = l1
        .iter()
        .cloned()
        .tuple_combinations::<(Item, Item)>()
        .filter(|pair| seed.pairs.contains(pair))
        .filter(|pair| f64::from(seed.pairs.get(pair)) >= min_pair_items)
        .map(|pair| {
            FrequentItemset::new(vec![pair.0, pair.1], seed.pairs.get(&pair), num_transactions)
        })
        .collect();
    info!("Number of size-2 frequent patterns: {}", l2.len());
    if l2.is_empty() {
        return;
    }

    let mut frequent: Vec<Vec<Item>> = l2.iter().map(|itemset| itemset.items.clone()).collect();
    report.push_level(make_level(2, l2));

    let mut k = 3;
    while !frequent.is_empty() {
        let mut candidates = self_join(&frequent);
        let joined = candidates.len();
        if config.prune_candidates {
            candidates = prune_candidates(candidates, &frequent);
        }
        debug!(
            size = k,
            joined,
            candidates = candidates.len(),
            "Generated candidates"
        );

        let counts = if config.parallel {
            par_count_support(&candidates, transactions, k)
        } else {
            count_support(&candidates, transactions, k)
        };

        frequent = counts.items_with_count_at_least(min_items);
        frequent.sort();
        info!("Number of size-{} frequent patterns: {}", k, frequent.len());

        if !frequent.is_empty() {
            report.push_level(make_level(
                k,
                frequent
                    .iter()
                    .map(|items| {
                        FrequentItemset::new(items.clone(), counts.get(items), num_transactions)
                    })
                    .collect(),
            ));
        }
        k += 1;
    }
}
