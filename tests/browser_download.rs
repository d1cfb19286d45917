#![cfg(target_arch = "wasm32")]

use sales_dashboard::{
    application::{DownloadSink, export_csv},
    domain::sales::Transaction,
    infrastructure::{BrowserDownload, services::apply_theme_to_document},
    domain::theme::Theme,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn download_leaves_no_anchor_behind() {
    let rows = [Transaction::new("ORD-001", "John Smith", 245.0, "completed", "2024-01-15")];
    let artifact = export_csv(&rows).unwrap().unwrap();

    BrowserDownload.download(&artifact).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let anchors = document.query_selector("a[download]").unwrap();
    assert!(anchors.is_none());
}

#[wasm_bindgen_test]
fn theme_is_mirrored_on_the_root_element() {
    apply_theme_to_document(Theme::Dark).unwrap();

    let root = web_sys::window().unwrap().document().unwrap().document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
}
