use std::rc::Rc;

use futures::{
    FutureExt,
    future::{self, LocalBoxFuture},
};
use leptos::{Memo, SignalGetUntracked, create_memo};

use crate::{
    application::{
        csv_export::{self, CsvArtifact, DownloadSink},
        feed::{TransactionFeed, follow},
        theme_store::ThemeStore,
    },
    domain::{
        chart::{ChartClickEvent, ChartDataset, ChartInteraction, ChartKind, region_chart_data},
        errors::ExportResult,
        logging::{LogComponent, LogLevel, get_logger},
        sales::{Transaction, filter_transactions},
        theme::Theme,
    },
    log_debug, log_info, log_warn,
    reactive::Observable,
};

/// State behind the sales dashboard page.
///
/// Owns the search text and the latest feed values, and derives the filtered
/// transaction view from them. Cloning is cheap and every clone shares the
/// same state.
#[derive(Clone)]
pub struct Dashboard {
    theme: ThemeStore,
    feed: Rc<dyn TransactionFeed>,
    recent_transactions: Observable<Vec<Transaction>>,
    revenue_chart: Observable<ChartDataset>,
    region_chart: Rc<ChartDataset>,
    search_text: Observable<String>,
    filtered_transactions: Memo<Vec<Transaction>>,
}

impl Dashboard {
    pub const TITLE: &'static str = "sales-dashboard";

    pub fn new(theme: ThemeStore, feed: Rc<dyn TransactionFeed>) -> Self {
        let recent_transactions = Observable::new(Vec::new());
        let search_text = Observable::new(String::new());

        let filtered_transactions = create_memo(move |_| {
            search_text.with(|query| {
                recent_transactions.with(|transactions| filter_transactions(transactions, query))
            })
        });

        Self {
            theme,
            feed,
            recent_transactions,
            revenue_chart: Observable::new(ChartDataset::default()),
            region_chart: Rc::new(region_chart_data()),
            search_text,
            filtered_transactions,
        }
    }

    /// Replace the built-in region chart
    pub fn with_region_chart(mut self, chart: ChartDataset) -> Self {
        if !chart.is_aligned() {
            log_warn!(
                LogComponent::Application("Dashboard"),
                "⚠️ Region chart has series whose length differs from its {} labels",
                chart.labels.len()
            );
        }
        self.region_chart = Rc::new(chart);
        self
    }

    // Theme

    pub fn theme(&self) -> ThemeStore {
        self.theme
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.current_theme()
    }

    pub fn toggle_theme(&self) {
        self.theme.toggle_theme();
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set_theme(theme);
    }

    // Search

    pub fn search_text(&self) -> Observable<String> {
        self.search_text
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        self.search_text.set(text.into());
    }

    pub fn clear_search(&self) {
        self.search_text.set(String::new());
    }

    // Data

    pub fn recent_transactions(&self) -> Observable<Vec<Transaction>> {
        self.recent_transactions
    }

    pub fn revenue_chart(&self) -> Observable<ChartDataset> {
        self.revenue_chart
    }

    pub fn region_chart(&self) -> &ChartDataset {
        &self.region_chart
    }

    /// Transactions matching the current search text, in feed order
    pub fn filtered_transactions(&self) -> Memo<Vec<Transaction>> {
        self.filtered_transactions
    }

    // Charts

    /// Current data of a chart. Reading the revenue chart is tracked.
    pub fn chart_data(&self, kind: ChartKind) -> ChartDataset {
        match kind {
            ChartKind::Region => self.region_chart.as_ref().clone(),
            ChartKind::Revenue => self.revenue_chart.get(),
        }
    }

    /// Apply a chart click. Only the region chart drives the filter: the
    /// clicked region's label becomes the search text.
    pub fn on_chart_click(&self, event: &ChartClickEvent, kind: ChartKind) -> ChartInteraction {
        let Some(index) = event.first_index() else {
            return ChartInteraction::NoActiveElement;
        };

        match kind {
            ChartKind::Region => match self.region_chart.label_at(index) {
                Some(label) => {
                    let label = label.to_string();
                    log_debug!(
                        LogComponent::Application("Dashboard"),
                        "🖱️ Region #{} clicked, filtering by '{}'",
                        index,
                        label
                    );
                    self.search_text.set(label.clone());
                    ChartInteraction::Filtered { label }
                }
                None => {
                    let len = self.region_chart.labels.len();
                    log_warn!(
                        LogComponent::Application("Dashboard"),
                        "⚠️ Click index {} outside region chart with {} labels",
                        index,
                        len
                    );
                    ChartInteraction::IndexOutOfRange { index, len }
                }
            },
            other => ChartInteraction::UnhandledKind(other),
        }
    }

    // Export

    /// Export the current filtered view through `sink`.
    ///
    /// Returns the delivered artifact, or `None` when the view is empty and
    /// nothing was delivered.
    pub fn export_csv(&self, sink: &dyn DownloadSink) -> ExportResult<Option<CsvArtifact>> {
        let rows = self.filtered_transactions.get_untracked();
        let Some(artifact) = csv_export::export_csv(&rows)? else {
            log_debug!(LogComponent::Application("Dashboard"), "📭 Nothing to export");
            return Ok(None);
        };

        sink.download(&artifact)?;
        get_logger().log_fields(
            LogLevel::Info,
            LogComponent::Application("Dashboard"),
            "💾 CSV exported",
            &[("rows", &rows.len()), ("file", &artifact.file_name)],
        );
        Ok(Some(artifact))
    }

    // Feed

    /// Future that follows both feed streams until they end.
    pub fn feed_task(&self) -> LocalBoxFuture<'static, ()> {
        let transactions = follow(self.feed.transactions(), self.recent_transactions, "transactions");
        let revenue = follow(self.feed.revenue(), self.revenue_chart, "revenue");
        future::join(transactions, revenue).map(|_| ()).boxed_local()
    }

    /// Start following the feed on the browser event loop.
    pub fn connect(&self) {
        log_info!(LogComponent::Application("Dashboard"), "🔌 Connecting dashboard to feed");
        wasm_bindgen_futures::spawn_local(self.feed_task());
    }
}
