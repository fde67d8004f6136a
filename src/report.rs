use crate::item::Item;
use ordered_float::OrderedFloat;

#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct FrequentItemset {
    pub items: Vec<Item>,
    pub count: u32,
    pub support: OrderedFloat<f64>,
}

impl FrequentItemset {
    pub fn new(items: Vec<Item>, count: u32, num_transactions: usize) -> FrequentItemset {
        let support = if num_transactions == 0 {
            0.0
        } else {
            f64::from(count) / (num_transactions as f64)
        };
        FrequentItemset {
            items,
            count,
            support: OrderedFloat(support),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The frequent itemsets of one size, sorted lexicographically.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Level {
    pub size: usize,
    pub itemsets: Vec<FrequentItemset>,
}

impl Level {
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }
}

/// Result of a mining run. Only levels with at least one frequent itemset
/// are present, in increasing order of size.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MiningReport {
    pub min_support: OrderedFloat<f64>,
    pub num_transactions: usize,
    pub min_items: OrderedFloat<f64>,
    pub levels: Vec<Level>,
}

impl MiningReport {
    pub fn new(min_support: f64, num_transactions: usize, min_items: f64) -> MiningReport {
        MiningReport {
            min_support: OrderedFloat(min_support),
            num_transactions,
            min_items: OrderedFloat(min_items),
            levels: vec![],
        }
    }

    pub(crate) fn push_level(&mut self, level: Level) {
        debug_assert!(!level.is_empty());
        self.levels.push(level);
    }

    /// Total number of frequent itemsets over all levels.
    pub fn total(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, size: usize) -> Option<&Level> {
        self.levels.iter().find(|level| level.size == size)
    }

    /// (size, number of frequent itemsets of that size) for each level.
    pub fn level_counts(&self) -> Vec<(usize, usize)> {
        self.levels
            .iter()
            .map(|level| (level.size, level.len()))
            .collect()
    }

    /// All frequent itemsets, by size and then lexicographically.
    pub fn itemsets(&self) -> impl Iterator<Item = &FrequentItemset> {
        self.levels.iter().flat_map(|level| level.itemsets.iter())
    }

    pub fn get(&self, items: &[Item]) -> Option<&FrequentItemset> {
        let level = self.level(items.len())?;
        level
            .itemsets
            .binary_search_by(|itemset| itemset.items.as_slice().cmp(items))
            .ok()
            .map(|index| &level.itemsets[index])
    }

    pub fn contains(&self, items: &[Item]) -> bool {
        self.get(items).is_some()
    }
}
