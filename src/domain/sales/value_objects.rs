use derive_more::Display;
use strum::AsRefStr;

use super::entities::Transaction;

/// Value Object - normalized search query.
///
/// Holds the case-folded form of the search text; an empty query matches
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match on customer, id or status.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.is_empty() {
            return true;
        }
        transaction.customer.to_lowercase().contains(&self.0)
            || transaction.id.to_lowercase().contains(&self.0)
            || transaction.status.as_str().to_lowercase().contains(&self.0)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        SearchQuery::new(raw)
    }
}

/// Value Object - transaction table column, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum TableColumn {
    #[display(fmt = "Order ID")]
    #[strum(serialize = "id")]
    Id,
    #[display(fmt = "Customer")]
    #[strum(serialize = "customer")]
    Customer,
    #[display(fmt = "Amount")]
    #[strum(serialize = "amount")]
    Amount,
    #[display(fmt = "Status")]
    #[strum(serialize = "status")]
    Status,
    #[display(fmt = "Date")]
    #[strum(serialize = "date")]
    Date,
}

/// Columns shown by the table and written by the CSV export.
pub const DISPLAYED_COLUMNS: [TableColumn; 5] = [
    TableColumn::Id,
    TableColumn::Customer,
    TableColumn::Amount,
    TableColumn::Status,
    TableColumn::Date,
];

impl TableColumn {
    pub fn header(&self) -> String {
        self.to_string()
    }

    /// Text shown in a table cell
    pub fn cell_text(&self, transaction: &Transaction) -> String {
        match self {
            TableColumn::Id => transaction.id.clone(),
            TableColumn::Customer => transaction.customer.clone(),
            TableColumn::Amount => format!("${}", transaction.amount),
            TableColumn::Status => transaction.status.to_string(),
            TableColumn::Date => transaction.date.clone(),
        }
    }

    /// Field written to the CSV export. The customer is wrapped in quotes so
    /// names with commas stay in one field; embedded quotes are not escaped.
    pub fn csv_field(&self, transaction: &Transaction) -> String {
        match self {
            TableColumn::Customer => format!("\"{}\"", transaction.customer),
            other => other.cell_text(transaction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_case_folded() {
        assert_eq!(SearchQuery::new("NoRtH").value(), "north");
    }

    #[test]
    fn column_key_and_header() {
        assert_eq!(TableColumn::Customer.as_ref(), "customer");
        assert_eq!(TableColumn::Id.as_ref(), "id");
        assert_eq!(TableColumn::Id.header(), "Order ID");
    }

    #[test]
    fn amount_cell_drops_trailing_zero_fraction() {
        let t = Transaction::new("ORD-1", "A", 245.0, "completed", "2024-01-15");
        assert_eq!(TableColumn::Amount.cell_text(&t), "$245");
        let t = Transaction::new("ORD-2", "B", 12.5, "completed", "2024-01-15");
        assert_eq!(TableColumn::Amount.cell_text(&t), "$12.5");
    }

    #[test]
    fn large_amounts_are_written_out_in_full() {
        let t = Transaction::new("ORD-3", "C", 1e21, "completed", "2024-01-15");
        assert_eq!(TableColumn::Amount.cell_text(&t), "$1000000000000000000000");
    }
}
