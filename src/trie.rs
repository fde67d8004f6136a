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
use fnv::FnvHashMap;

#[derive(Debug)]
struct TrieNode {
    item: Item,
    children: FnvHashMap<Item, usize>,
    // True if the path from the root to here spells a stored itemset.
    is_terminal: bool,
}

impl TrieNode {
    fn new(item: Item) -> TrieNode {
        TrieNode {
            item,
            children: FnvHashMap::default(),
            is_terminal: false,
        }
    }
}

/// Prefix tree over candidate itemsets. Nodes live in one arena and refer
/// to their children by index; node 0 is the root.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    num_itemsets: usize,
}

const ROOT: usize = 0;

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![TrieNode::new(Item::null())],
            num_itemsets: 0,
        }
    }

    pub fn from_itemsets(itemsets: &[Vec<Item>]) -> Trie {
        let mut trie = Trie::new();
        for itemset in itemsets {
            trie.insert(itemset);
        }
        trie
    }

    fn add_node(&mut self, parent: usize, item: Item) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TrieNode::new(item));
        self.nodes[parent].children.insert(item, id);
        id
    }

    fn child_of(&self, id: usize, item: Item) -> Option<usize> {
        self.nodes[id].children.get(&item).cloned()
    }

    /// Adds a sorted itemset. Inserting an itemset twice has no effect,
    /// and neither does inserting the empty itemset.
    pub fn insert(&mut self, itemset: &[Item]) {
        if itemset.is_empty() {
            return;
        }
        let mut id = ROOT;
        for &item in itemset {
            id = match self.child_of(id, item) {
                Some(child_id) => child_id,
                None => self.add_node(id, item),
            };
        }
        if !self.nodes[id].is_terminal {
            self.nodes[id].is_terminal = true;
            self.num_itemsets += 1;
        }
    }

    pub fn contains(&self, itemset: &[Item]) -> bool {
        let mut id = ROOT;
        for &item in itemset {
            id = match self.child_of(id, item) {
                Some(child_id) => child_id,
                None => return false,
            };
        }
        self.nodes[id].is_terminal
    }

    /// Number of distinct itemsets stored.
    pub fn len(&self) -> usize {
        self.num_itemsets
    }

    pub fn is_empty(&self) -> bool {
        self.num_itemsets == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns every stored itemset that is a subsequence of `transaction`,
    /// which must be sorted ascending.
    pub fn matches(&self, transaction: &[Item]) -> Vec<Vec<Item>> {
        let mut results = vec![];
        self.match_into(transaction, &mut vec![], &mut results);
        results
    }

    /// Appends to `results` each stored itemset found in `transaction`.
    /// `prefix` is used as scratch space and is left as it was passed in;
    /// the prefix is prepended to every match.
    pub fn match_into(
        &self,
        transaction: &[Item],
        prefix: &mut Vec<Item>,
        results: &mut Vec<Vec<Item>>,
    ) {
        self.match_from(ROOT, transaction, prefix, results);
    }

    fn match_from(
        &self,
        id: usize,
        transaction: &[Item],
        prefix: &mut Vec<Item>,
        results: &mut Vec<Vec<Item>>,
    ) {
        let node = &self.nodes[id];
        if node.is_terminal {
            results.push(prefix.clone());
            return;
        }
        if node.children.is_empty() {
            return;
        }
        for (position, &item) in transaction.iter().enumerate() {
            if let Some(child_id) = self.child_of(id, item) {
                debug_assert!(self.nodes[child_id].item == item);
                prefix.push(item);
                self.match_from(child_id, &transaction[position + 1..], prefix, results);
                prefix.pop();
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}
