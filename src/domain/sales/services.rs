use super::{entities::Transaction, value_objects::SearchQuery};

/// Filters transactions by search text.
///
/// Empty text returns the input unchanged. Otherwise keeps, in their original
/// order, the transactions whose customer, id or status contains the text,
/// ignoring case.
pub fn filter_transactions(transactions: &[Transaction], search_text: &str) -> Vec<Transaction> {
    let query = SearchQuery::new(search_text);
    if query.is_empty() {
        return transactions.to_vec();
    }

    transactions
        .iter()
        .filter(|transaction| query.matches(transaction))
        .cloned()
        .collect()
}

/// Sum of the amounts of the given transactions
pub fn total_amount(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new("ORD-001", "John Smith", 245.0, "completed", "2024-01-15"),
            Transaction::new("ORD-002", "Sarah Johnson", 189.0, "pending", "2024-01-15"),
            Transaction::new("ORD-003", "Mike Davis", 324.0, "completed", "2024-01-14"),
        ]
    }

    #[test]
    fn matches_any_of_the_three_fields() {
        let rows = sample();
        assert_eq!(filter_transactions(&rows, "sarah").len(), 1);
        assert_eq!(filter_transactions(&rows, "ord-003")[0].customer, "Mike Davis");
        assert_eq!(filter_transactions(&rows, "COMPLETED").len(), 2);
    }

    #[test]
    fn amount_and_date_are_not_searched() {
        let rows = sample();
        assert!(filter_transactions(&rows, "245").is_empty());
        assert!(filter_transactions(&rows, "2024-01-14").is_empty());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_transactions(&[], "anything").is_empty());
        assert!(filter_transactions(&[], "").is_empty());
    }

    #[test]
    fn total_amount_sums_rows() {
        assert_eq!(total_amount(&sample()), 758.0);
    }
}
