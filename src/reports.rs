use crate::models::Transaction;

/// Running balance: income adds, expense subtracts. Recomputed from the full
/// list every time; never stored.
pub fn current_balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}
