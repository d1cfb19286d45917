use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::{
    application::{Dashboard, ThemeStore, TransactionFeed},
    domain::logging::{LogComponent, get_logger},
    infrastructure::{
        HttpTransactionFeed, SampleFeed,
        services::{BrowserTimeProvider, ConsoleLogger, apply_theme_to_document, load_page_config},
    },
};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod reactive;

/// Boot the dashboard: logging, config, feed, then mount the view.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    let config = load_page_config();
    let logger = match &config {
        Ok(config) if !config.debug_logging => ConsoleLogger::new_production(),
        _ => ConsoleLogger::new_development(),
    };
    domain::logging::init_logger(Box::new(logger));

    let config = config.unwrap_or_else(|e| {
        get_logger().warn(
            LogComponent::Presentation("Initialize"),
            &format!("⚠️ {e}; using default config"),
        );
        config::DashboardConfig::default()
    });

    let feed: Rc<dyn TransactionFeed> = match HttpTransactionFeed::from_config(&config) {
        Some(feed) => Rc::new(feed),
        None => Rc::new(SampleFeed::new()),
    };

    let dashboard = Dashboard::new(ThemeStore::new(config.initial_theme), feed);
    let _theme_effect = dashboard.theme().subscribe(|theme| {
        if let Err(e) = apply_theme_to_document(theme) {
            get_logger().warn(LogComponent::Presentation("Theme"), &e.to_string());
        }
    });
    dashboard.connect();

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!(
            "🚀 Sales dashboard started ({} feed)",
            if config.uses_http_feed() { "HTTP" } else { "sample" }
        ),
    );

    mount_to_body(move || view! { <app::App dashboard=dashboard /> });
}
