use crate::error::{AprioriError, Result};
use crate::item::Item;

/// A transaction in canonical form: items ascending, no duplicates.
pub type Transaction = Vec<Item>;

/// Sorts every transaction ascending and removes duplicate items, so that
/// each transaction is a valid itemset. Empty transactions are kept; they
/// still count towards the total number of transactions.
pub fn normalize(transactions: &[Vec<u32>]) -> Result<Vec<Transaction>> {
    transactions
        .iter()
        .enumerate()
        .map(|(index, ids)| normalize_transaction(index, ids))
        .collect()
}

fn normalize_transaction(index: usize, ids: &[u32]) -> Result<Transaction> {
    let mut transaction = Vec::with_capacity(ids.len());
    for &id in ids {
        let item = Item::with_id(id);
        if item.is_null() {
            return Err(AprioriError::NonPositiveItem { transaction: index });
        }
        transaction.push(item);
    }
    transaction.sort();
    transaction.dedup();
    Ok(transaction)
}
