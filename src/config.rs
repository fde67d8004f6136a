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

use crate::error::{AprioriError, Result};

/// Fraction of transactions an itemset must occur in, in range (0,1].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MinSupport(f64);

impl MinSupport {
    pub fn new(value: f64) -> Result<MinSupport> {
        // NaN fails both comparisons, so test for the valid range instead.
        if value > 0.0 && value <= 1.0 {
            Ok(MinSupport(value))
        } else {
            Err(AprioriError::InvalidMinSupport(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// The count an itemset must reach in a data set of `num_transactions`.
    /// Kept fractional; counts are compared against it with `>=`.
    pub fn min_items(&self, num_transactions: usize) -> f64 {
        self.0 * (num_transactions as f64)
    }
}

/// Threshold applied to the size-2 itemsets seeded from the first pass.
///
/// Size-1 and size-k (k >= 3) itemsets must reach `min_items`. Pairs under
/// `Relaxed` only need `min_items - 1`, which lets pairs one occurrence short
/// of frequent into L2. `Strict` applies `min_items` to pairs as well.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PairThreshold {
    Relaxed,
    Strict,
}

impl PairThreshold {
    pub fn min_pair_items(&self, min_items: f64) -> f64 {
        match *self {
            PairThreshold::Relaxed => min_items - 1.0,
            PairThreshold::Strict => min_items,
        }
    }
}

impl Default for PairThreshold {
    fn default() -> PairThreshold {
        PairThreshold::Relaxed
    }
}

#[derive(Clone, Debug)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    pub pair_threshold: PairThreshold,
    pub prune_candidates: bool,
    pub parallel: bool,
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Result<MiningConfig> {
        Ok(MiningConfig {
            min_support: MinSupport::new(min_support)?,
            pair_threshold: PairThreshold::default(),
            prune_candidates: true,
            parallel: false,
        })
    }

    pub fn with_pair_threshold(mut self, pair_threshold: PairThreshold) -> MiningConfig {
        self.pair_threshold = pair_threshold;
        self
    }

    pub fn with_prune_candidates(mut self, prune_candidates: bool) -> MiningConfig {
        self.prune_candidates = prune_candidates;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> MiningConfig {
        self.parallel = parallel;
        self
    }
}
