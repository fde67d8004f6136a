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

use crate::item::Item;
use crate::trie::Trie;

/// Generates the size-k candidates from the frequent size-(k-1) itemsets,
/// which must be sorted lexicographically and all of the same length.
///
/// Two itemsets are joined when they agree on everything except their last
/// item. In a sorted list such itemsets are contiguous, so the inner scan
/// stops at the first itemset whose prefix differs.
pub fn self_join(frequent: &[Vec<Item>]) -> Vec<Vec<Item>> {
    let mut candidates: Vec<Vec<Item>> = vec![];
    for (i, a) in frequent.iter().enumerate() {
        let prefix = match a.split_last() {
            Some((_, prefix)) => prefix,
            None => continue,
        };
        for b in &frequent[i + 1..] {
            if b.len() != a.len() || &b[..prefix.len()] != prefix {
                break;
            }
            let mut candidate = Vec::with_capacity(a.len() + 1);
            candidate.extend_from_slice(a);
            candidate.push(b[b.len() - 1]);
            candidates.push(candidate);
        }
    }
    candidates
}

/// Removes candidates that have a (k-1)-subset outside of `frequent`.
/// Such candidates can't be frequent, so this shrinks the trie without
/// changing which itemsets end up frequent.
pub fn prune_candidates(candidates: Vec<Vec<Item>>, frequent: &[Vec<Item>]) -> Vec<Vec<Item>> {
    let index = Trie::from_itemsets(frequent);
    candidates
        .into_iter()
        .filter(|candidate| all_subsets_frequent(candidate, &index))
        .collect()
}

fn all_subsets_frequent(candidate: &[Item], index: &Trie) -> bool {
    // Dropping either of the last two items yields one of the itemsets
    // that were joined, so only the earlier positions need checking.
    let mut subset: Vec<Item> = Vec::with_capacity(candidate.len());
    for skip in 0..candidate.len().saturating_sub(2) {
        subset.clear();
        subset.extend_from_slice(&candidate[..skip]);
        subset.extend_from_slice(&candidate[skip + 1..]);
        if !index.contains(&subset) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{prune_candidates, self_join};
    use crate::item::{to_item_vec, Item};

    fn to_itemsets(sets: &[&[u32]]) -> Vec<Vec<Item>> {
        sets.iter().map(|s| to_item_vec(s)).collect()
    }

    #[test]
    fn test_join_pairs() {
        let l2 = to_itemsets(&[&[1, 2], &[1, 3], &[2, 3]]);
        assert_eq!(self_join(&l2), to_itemsets(&[&[1, 2, 3]]));
    }

    #[test]
    fn test_join_singletons() {
        let l1 = to_itemsets(&[&[1], &[2], &[4]]);
        assert_eq!(
            self_join(&l1),
            to_itemsets(&[&[1, 2], &[1, 4], &[2, 4]])
        );
    }

    #[test]
    fn test_join_triples() {
        let l3 = to_itemsets(&[
            &[1, 2, 3],
            &[1, 2, 4],
            &[1, 2, 5],
            &[1, 3, 4],
            &[2, 3, 4],
        ]);
        assert_eq!(
            self_join(&l3),
            to_itemsets(&[&[1, 2, 3, 4], &[1, 2, 3, 5], &[1, 2, 4, 5]])
        );
    }

    #[test]
    fn test_join_requires_whole_prefix() {
        // Same second-to-last item, different first item: not joinable.
        let l3 = to_itemsets(&[&[1, 3, 4], &[2, 3, 5]]);
        assert!(self_join(&l3).is_empty());

        // The scan for [1, 2, 3] ends at [1, 4, 5].
        let l3 = to_itemsets(&[&[1, 2, 3], &[1, 4, 5], &[1, 4, 6]]);
        assert_eq!(self_join(&l3), to_itemsets(&[&[1, 4, 5, 6]]));
    }

    #[test]
    fn test_join_empty() {
        assert!(self_join(&[]).is_empty());
        assert!(self_join(&to_itemsets(&[&[1, 2]])).is_empty());
    }

    #[test]
    fn test_prune() {
        // [2, 3] is not frequent, so [1, 2, 3] is pruned; [1, 2, 4] survives.
        let l2 = to_itemsets(&[&[1, 2], &[1, 3], &[1, 4], &[2, 4]]);
        let candidates = self_join(&l2);
        assert_eq!(
            candidates,
            to_itemsets(&[&[1, 2, 3], &[1, 2, 4], &[1, 3, 4]])
        );
        assert_eq!(
            prune_candidates(candidates, &l2),
            to_itemsets(&[&[1, 2, 4]])
        );
    }

    #[test]
    fn test_prune_keeps_pairs() {
        let l1 = to_itemsets(&[&[1], &[2]]);
        let candidates = self_join(&l1);
        assert_eq!(prune_candidates(candidates, &l1), to_itemsets(&[&[1, 2]]));
    }
}
