use std::rc::Rc;

use leptos::SignalGetUntracked;
use sales_dashboard::{
    application::{Dashboard, ThemeStore},
    domain::{
        chart::{ChartClickEvent, ChartDataset, ChartInteraction, ChartKind, ChartSeries},
        sales::Transaction,
    },
    infrastructure::SampleFeed,
};

fn dashboard() -> Dashboard {
    Dashboard::new(ThemeStore::default(), Rc::new(SampleFeed::from_batches(vec![], vec![])))
}

#[test]
fn region_click_sets_search_and_filters() {
    let dashboard = dashboard();
    assert_eq!(
        dashboard.region_chart().labels,
        ["North", "South", "East", "West", "Central"]
    );
    dashboard.recent_transactions().set(vec![
        Transaction::new("ORD-001", "John Smith", 245.0, "completed", "2024-01-15"),
        Transaction::new("ORD-010", "Eastwood Traders", 80.0, "pending", "2024-01-16"),
        Transaction::new("ORD-011", "Westfield Ltd", 95.0, "completed", "2024-01-16"),
    ]);

    let outcome = dashboard.on_chart_click(&ChartClickEvent::at(2), ChartKind::Region);

    assert_eq!(outcome, ChartInteraction::Filtered { label: "East".to_string() });
    assert!(outcome.changed_state());
    assert_eq!(dashboard.search_text().get_untracked(), "East");
    let filtered = dashboard.filtered_transactions().get_untracked();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "ORD-010");
}

#[test]
fn only_the_first_active_index_counts() {
    let dashboard = dashboard();
    let outcome = dashboard.on_chart_click(&ChartClickEvent::new(vec![4, 0]), ChartKind::Region);
    assert_eq!(outcome, ChartInteraction::Filtered { label: "Central".to_string() });
}

#[test]
fn empty_event_is_a_no_op() {
    let dashboard = dashboard();
    dashboard.set_search_text("john");

    let outcome = dashboard.on_chart_click(&ChartClickEvent::default(), ChartKind::Region);

    assert_eq!(outcome, ChartInteraction::NoActiveElement);
    assert_eq!(dashboard.search_text().get_untracked(), "john");
}

#[test]
fn revenue_clicks_leave_search_untouched() {
    let dashboard = dashboard();

    let outcome = dashboard.on_chart_click(&ChartClickEvent::at(0), ChartKind::Revenue);

    assert_eq!(outcome, ChartInteraction::UnhandledKind(ChartKind::Revenue));
    assert!(!outcome.changed_state());
    assert_eq!(dashboard.search_text().get_untracked(), "");
}

#[test]
fn index_past_the_labels_is_reported() {
    let dashboard = dashboard();

    let outcome = dashboard.on_chart_click(&ChartClickEvent::at(7), ChartKind::Region);

    assert_eq!(outcome, ChartInteraction::IndexOutOfRange { index: 7, len: 5 });
    assert_eq!(dashboard.search_text().get_untracked(), "");
}

#[test]
fn custom_region_chart_drives_the_filter() {
    let chart = ChartDataset::new(
        vec!["Lisbon".to_string(), "Porto".to_string()],
        vec![ChartSeries::new("Sales", vec![10.0, 20.0])],
    );
    let dashboard = dashboard().with_region_chart(chart);

    let outcome = dashboard.on_chart_click(&ChartClickEvent::at(1), ChartKind::Region);

    assert_eq!(outcome, ChartInteraction::Filtered { label: "Porto".to_string() });
    assert_eq!(dashboard.chart_data(ChartKind::Region).labels.len(), 2);
}
