use std::{cell::RefCell, rc::Rc};

use sales_dashboard::{
    application::{CsvArtifact, Dashboard, DownloadSink, ThemeStore, export_csv},
    domain::{errors::AppError, sales::Transaction},
    infrastructure::SampleFeed,
};

#[derive(Default)]
struct RecordingSink {
    delivered: RefCell<Vec<CsvArtifact>>,
}

impl DownloadSink for RecordingSink {
    fn download(&self, artifact: &CsvArtifact) -> Result<(), AppError> {
        self.delivered.borrow_mut().push(artifact.clone());
        Ok(())
    }
}

struct BlockedSink;

impl DownloadSink for BlockedSink {
    fn download(&self, _artifact: &CsvArtifact) -> Result<(), AppError> {
        Err(AppError::BrowserApiError("pop-up blocked".to_string()))
    }
}

fn dashboard_with(rows: Vec<Transaction>) -> Dashboard {
    let dashboard = Dashboard::new(ThemeStore::default(), Rc::new(SampleFeed::from_batches(vec![], vec![])));
    dashboard.recent_transactions().set(rows);
    dashboard
}

#[test]
fn empty_rows_produce_no_artifact() {
    assert_eq!(export_csv(&[]).unwrap(), None);
}

#[test]
fn empty_view_never_reaches_the_sink() {
    let sink = RecordingSink::default();
    let dashboard = dashboard_with(Vec::new());

    assert_eq!(dashboard.export_csv(&sink).unwrap(), None);
    assert!(sink.delivered.borrow().is_empty());
}

#[test]
fn single_row_with_comma_in_customer() {
    let rows = [Transaction::new("ORD-001", "Smith, John", 245.0, "completed", "2024-01-15")];
    let artifact = export_csv(&rows).unwrap().unwrap();

    assert_eq!(
        artifact.content,
        "Order ID,Customer,Amount,Status,Date\nORD-001,\"Smith, John\",$245,completed,2024-01-15"
    );
    assert_eq!(artifact.file_name, "transactions_export.csv");
    assert_eq!(artifact.mime_type, "text/csv;charset=utf-8");
}

#[test]
fn exports_only_the_filtered_rows() {
    let sink = RecordingSink::default();
    let dashboard = dashboard_with(vec![
        Transaction::new("ORD-001", "John Smith", 245.0, "completed", "2024-01-15"),
        Transaction::new("ORD-002", "Sarah Johnson", 189.5, "pending", "2024-01-15"),
        Transaction::new("ORD-004", "Emily Wilson", 156.0, "failed", "2024-01-14"),
    ]);
    dashboard.set_search_text("john");

    let artifact = dashboard.export_csv(&sink).unwrap().unwrap();

    insta::assert_snapshot!(artifact.content, @r###"
    Order ID,Customer,Amount,Status,Date
    ORD-001,"John Smith",$245,completed,2024-01-15
    ORD-002,"Sarah Johnson",$189.5,pending,2024-01-15
    "###);
    assert_eq!(*sink.delivered.borrow(), vec![artifact]);
}

#[test]
fn sink_failure_is_returned() {
    let dashboard = dashboard_with(vec![Transaction::new("ORD-9", "Ana", 1.0, "completed", "2024-02-02")]);

    let result = dashboard.export_csv(&BlockedSink);
    assert!(matches!(result, Err(AppError::BrowserApiError(_))));
}
