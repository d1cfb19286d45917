use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Domain entity - a single order as delivered by the feed.
///
/// Transactions are snapshots: nothing in the dashboard mutates one after it
/// has been received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque order identifier, e.g. `ORD-001`
    pub id: String,
    pub customer: String,
    pub amount: f64,
    pub status: TransactionStatus,
    /// Calendar date as sent by the feed, e.g. `2024-01-15`
    pub date: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        amount: f64,
        status: impl Into<TransactionStatus>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            amount,
            status: status.into(),
            date: date.into(),
        }
    }
}

/// Order status. Unknown statuses are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    #[display(fmt = "completed")]
    Completed,
    #[display(fmt = "pending")]
    Pending,
    #[display(fmt = "failed")]
    Failed,
    #[display(fmt = "{}", _0)]
    Other(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => TransactionStatus::Completed,
            "pending" => TransactionStatus::Pending,
            "failed" => TransactionStatus::Failed,
            _ => TransactionStatus::Other(value),
        }
    }
}

impl From<&str> for TransactionStatus {
    fn from(value: &str) -> Self {
        TransactionStatus::from(value.to_string())
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_parse_to_variants() {
        assert_eq!(TransactionStatus::from("pending"), TransactionStatus::Pending);
        assert_eq!(TransactionStatus::from("failed"), TransactionStatus::Failed);
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status = TransactionStatus::from("Refunded");
        assert_eq!(status, TransactionStatus::Other("Refunded".to_string()));
        assert_eq!(status.to_string(), "Refunded");
    }

    #[test]
    fn transaction_deserializes_from_feed_json() {
        let json = r#"{"id":"ORD-009","customer":"Ana Lima","amount":99.5,"status":"on-hold","date":"2024-02-01"}"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.status.as_str(), "on-hold");
        assert_eq!(transaction.amount, 99.5);

        let back = serde_json::to_value(&transaction).unwrap();
        assert_eq!(back["status"], "on-hold");
    }
}
