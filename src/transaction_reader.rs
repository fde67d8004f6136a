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
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

/// Reads one transaction per line, items separated by commas. Empty items,
/// such as those left by a trailing comma, are skipped, and so are lines
/// with no items at all.
pub struct TransactionReader<R> {
    reader: R,
    line_number: usize,
}

impl TransactionReader<BufReader<File>> {
    pub fn open(path: &str) -> Result<TransactionReader<BufReader<File>>> {
        let file = File::open(path)?;
        Ok(TransactionReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TransactionReader<R> {
    pub fn new(reader: R) -> TransactionReader<R> {
        TransactionReader {
            reader,
            line_number: 0,
        }
    }
}

fn parse_item(token: &str, line: usize) -> Result<u32> {
    match token.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AprioriError::Parse {
            line,
            token: token.to_owned(),
        }),
    }
}

impl<R: BufRead> Iterator for TransactionReader<R> {
    type Item = Result<Vec<u32>>;
    fn next(&mut self) -> Option<Result<Vec<u32>>> {
        let mut line = String::new();
        loop {
            line.clear();
            let len = match self.reader.read_line(&mut line) {
                Ok(len) => len,
                Err(err) => return Some(Err(err.into())),
            };
            if len == 0 {
                return None;
            }
            self.line_number += 1;
            let line_number = self.line_number;
            let transaction: Result<Vec<u32>> = line
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| parse_item(s, line_number))
                .collect();
            match transaction {
                Ok(ref items) if items.is_empty() => continue,
                _ => return Some(transaction),
            }
        }
    }
}
