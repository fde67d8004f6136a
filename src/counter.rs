use fnv::FnvHashMap;
use std::cmp;
use std::hash::Hash;

/// Occurrence counts keyed by the exact value being counted.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter<T>
where
    T: cmp::Eq + Hash,
{
    counter: FnvHashMap<T, u32>,
}

impl<T> Counter<T>
where
    T: cmp::Eq,
    T: Hash,
    T: Clone,
{
    pub fn new() -> Counter<T> {
        Counter {
            counter: FnvHashMap::default(),
        }
    }

    // Every key starts out present with a zero count.
    pub fn with_keys<I>(keys: I) -> Counter<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut counter = Counter::new();
        for key in keys {
            counter.counter.entry(key).or_insert(0);
        }
        counter
    }

    pub fn add(&mut self, item: &T, count: u32) {
        if let Some(total) = self.counter.get_mut(item) {
            *total += count;
            return;
        }
        self.counter.insert(item.clone(), count);
    }

    pub fn get(&self, item: &T) -> u32 {
        match self.counter.get(item) {
            Some(count) => *count,
            None => 0,
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.counter.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.counter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counter.is_empty()
    }

    /// Keys whose count is at least `min_count`. Not sorted.
    pub fn items_with_count_at_least(&self, min_count: f64) -> Vec<T> {
        self.counter
            .iter()
            .filter(|&(_, &count)| f64::from(count) >= min_count)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Adds all of `other`'s counts into this counter.
    pub fn merge(mut self, other: Counter<T>) -> Counter<T> {
        for (item, count) in other.counter {
            *self.counter.entry(item).or_insert(0) += count;
        }
        self
    }
}

impl<T> Default for Counter<T>
where
    T: cmp::Eq + Hash + Clone,
{
    fn default() -> Counter<T> {
        Counter::new()
    }
}
