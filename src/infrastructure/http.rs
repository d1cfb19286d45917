use futures::{
    StreamExt,
    stream::{self, LocalBoxStream},
};
use gloo_net::http::Request;
use gloo_timers::future::IntervalStream;
use serde::de::DeserializeOwned;

use crate::{
    application::feed::TransactionFeed,
    config::DashboardConfig,
    domain::{
        chart::ChartDataset,
        errors::{AppError, NetworkResult},
        logging::LogComponent,
        sales::Transaction,
    },
    log_info, log_warn,
};

/// Feed backed by JSON endpoints, optionally re-polled on an interval.
///
/// A failed fetch produces no item, so the dashboard keeps showing the last
/// good data.
pub struct HttpTransactionFeed {
    transactions_url: String,
    revenue_url: Option<String>,
    refresh_interval_ms: Option<u32>,
}

impl HttpTransactionFeed {
    pub fn new(transactions_url: impl Into<String>) -> Self {
        Self {
            transactions_url: transactions_url.into(),
            revenue_url: None,
            refresh_interval_ms: None,
        }
    }

    /// `None` when the config names no transactions endpoint
    pub fn from_config(config: &DashboardConfig) -> Option<Self> {
        let transactions_url = config.transactions_url.clone()?;
        Some(Self {
            transactions_url,
            revenue_url: config.revenue_url.clone(),
            refresh_interval_ms: config.refresh_interval_ms,
        })
    }

    pub fn with_revenue_url(mut self, url: impl Into<String>) -> Self {
        self.revenue_url = Some(url.into());
        self
    }

    pub fn with_refresh_interval(mut self, millis: u32) -> Self {
        self.refresh_interval_ms = Some(millis);
        self
    }

    /// One tick now, then one per interval if polling
    fn ticks(&self) -> LocalBoxStream<'static, ()> {
        let first = stream::once(async {});
        match self.refresh_interval_ms {
            Some(millis) => first.chain(IntervalStream::new(millis)).boxed_local(),
            None => first.boxed_local(),
        }
    }

    fn poll<T: DeserializeOwned + 'static>(&self, url: String) -> LocalBoxStream<'static, T> {
        self.ticks()
            .then(move |_| {
                let url = url.clone();
                async move { fetch_json::<T>(&url).await }
            })
            .filter_map(|result| async move {
                match result {
                    Ok(value) => Some(value),
                    Err(e) => {
                        log_warn!(
                            LogComponent::Infrastructure("HttpFeed"),
                            "⚠️ Keeping last data, fetch failed: {}",
                            e
                        );
                        None
                    }
                }
            })
            .boxed_local()
    }
}

impl TransactionFeed for HttpTransactionFeed {
    fn transactions(&self) -> LocalBoxStream<'static, Vec<Transaction>> {
        self.poll(self.transactions_url.clone())
    }

    fn revenue(&self) -> LocalBoxStream<'static, ChartDataset> {
        match &self.revenue_url {
            Some(url) => self.poll(url.clone()),
            None => stream::empty().boxed_local(),
        }
    }
}

/// GET `url` and decode the JSON body
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> NetworkResult<T> {
    log_info!(LogComponent::Infrastructure("HttpFeed"), "📈 Fetching {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("request to {url} failed: {e:?}")))?;

    if !response.ok() {
        return Err(AppError::NetworkError(format!(
            "HTTP error {} from {url}",
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::ValidationError(format!("unexpected JSON from {url}: {e:?}")))
}
