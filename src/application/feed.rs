use futures::{StreamExt, stream::LocalBoxStream};

use crate::{
    domain::{
        chart::ChartDataset,
        logging::{LogComponent, LogLevel, get_logger},
        sales::Transaction,
    },
    log_debug,
    reactive::Observable,
};

/// Source of dashboard data.
///
/// Both streams have latest-value semantics: each item replaces what came
/// before. Failed fetches are the feed's concern and should simply not
/// produce an item.
pub trait TransactionFeed {
    fn transactions(&self) -> LocalBoxStream<'static, Vec<Transaction>>;
    fn revenue(&self) -> LocalBoxStream<'static, ChartDataset>;
}

/// Write every item of `stream` into `target` until the stream ends.
pub async fn follow<T: 'static>(
    mut stream: LocalBoxStream<'static, T>,
    target: Observable<T>,
    source: &'static str,
) {
    let mut emissions = 0usize;
    while let Some(value) = stream.next().await {
        target.set(value);
        emissions += 1;
        log_debug!(
            LogComponent::Application("Feed"),
            "📡 {} emission #{} applied",
            source,
            emissions
        );
    }
    get_logger().log_fields(
        LogLevel::Info,
        LogComponent::Application("Feed"),
        "🛑 Feed ended",
        &[("source", &source), ("emissions", &emissions)],
    );
}
