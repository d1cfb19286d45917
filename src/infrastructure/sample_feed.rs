use futures::{StreamExt, stream::{self, LocalBoxStream}};

use crate::{
    application::feed::TransactionFeed,
    domain::{
        chart::{ChartDataset, ChartSeries, ColorSpec, SeriesStyle},
        sales::Transaction,
    },
};

/// In-memory feed that replays fixed batches, then ends.
pub struct SampleFeed {
    transaction_batches: Vec<Vec<Transaction>>,
    revenue_batches: Vec<ChartDataset>,
}

impl Default for SampleFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFeed {
    /// One batch of the bundled sample orders and the 2024 revenue chart
    pub fn new() -> Self {
        Self {
            transaction_batches: vec![sample_transactions()],
            revenue_batches: vec![sample_revenue()],
        }
    }

    pub fn from_batches(
        transaction_batches: Vec<Vec<Transaction>>,
        revenue_batches: Vec<ChartDataset>,
    ) -> Self {
        Self { transaction_batches, revenue_batches }
    }
}

impl TransactionFeed for SampleFeed {
    fn transactions(&self) -> LocalBoxStream<'static, Vec<Transaction>> {
        stream::iter(self.transaction_batches.clone()).boxed_local()
    }

    fn revenue(&self) -> LocalBoxStream<'static, ChartDataset> {
        stream::iter(self.revenue_batches.clone()).boxed_local()
    }
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("ORD-001", "John Smith", 245.0, "completed", "2024-01-15"),
        Transaction::new("ORD-002", "Sarah Johnson", 189.0, "pending", "2024-01-15"),
        Transaction::new("ORD-003", "Mike Davis", 324.0, "completed", "2024-01-14"),
        Transaction::new("ORD-004", "Emily Wilson", 156.0, "failed", "2024-01-14"),
        Transaction::new("ORD-005", "Chris Brown", 278.0, "completed", "2024-01-13"),
    ]
}

pub fn sample_revenue() -> ChartDataset {
    ChartDataset::new(
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun"].iter().map(|m| m.to_string()).collect(),
        vec![
            ChartSeries::new(
                "Revenue 2024",
                vec![65000.0, 79000.0, 82000.0, 91000.0, 105000.0, 124000.0],
            )
            .with_style(SeriesStyle {
                border_color: Some("#42A5F5".to_string()),
                background_color: Some(ColorSpec::Single("rgba(66, 165, 245, 0.1)".to_string())),
                fill: Some(true),
            }),
        ],
    )
}
