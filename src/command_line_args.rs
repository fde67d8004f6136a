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

use std::env;
use std::io;
use std::process;

use apriori::{MiningConfig, PairThreshold};
use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};

pub struct Arguments {
    pub input_file_path: String,
    pub output_itemsets_path: Option<String>,
    pub min_support: f64,
    pub strict_pairs: bool,
    pub no_prune: bool,
    pub parallel: bool,
}

impl Arguments {
    pub fn mining_config(&self) -> apriori::Result<MiningConfig> {
        let pair_threshold = if self.strict_pairs {
            PairThreshold::Strict
        } else {
            PairThreshold::Relaxed
        };
        Ok(MiningConfig::new(self.min_support)?
            .with_pair_threshold(pair_threshold)
            .with_prune_candidates(!self.no_prune)
            .with_parallel(self.parallel))
    }
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        output_itemsets_path: None,
        min_support: 0.0,
        strict_pairs: false,
        no_prune: false,
        parallel: false,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Apriori frequent itemset miner with prefix tree support counting.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset in CSV format, one transaction of positive integer items per line.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_itemsets_path)
            .add_option(
                &["--output"],
                StoreOption,
                "File path in which to store frequent itemsets. \
                 Format: itemset, count, support.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser.refer(&mut args.strict_pairs).add_option(
            &["--strict-pairs"],
            StoreTrue,
            "Require size-2 itemsets to meet the full support threshold, \
             instead of one occurrence less.",
        );

        parser.refer(&mut args.no_prune).add_option(
            &["--no-prune"],
            StoreTrue,
            "Don't prune candidates with infrequent subsets before counting.",
        );

        parser.refer(&mut args.parallel).add_option(
            &["--parallel"],
            StoreTrue,
            "Count candidate support on all cores.",
        );

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap();
            process::exit(1);
        }

        match parser.parse_args() {
            Ok(()) => {}
            Err(err) => {
                process::exit(err);
            }
        }
    }

    args
}
