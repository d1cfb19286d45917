use leptos::*;

use crate::{
    application::Dashboard,
    domain::{
        chart::{ChartClickEvent, ChartKind},
        logging::LogComponent,
        sales::{DISPLAYED_COLUMNS, Transaction, total_amount},
        theme::Theme,
    },
    infrastructure::BrowserDownload,
    log_debug, log_error,
};

const DASHBOARD_CSS: &str = r#"
.sales-dashboard { font-family: 'Roboto', -apple-system, sans-serif; min-height: 100vh; padding: 16px; }
.light-theme { background: #fafafa; color: #212121; }
.dark-theme { background: #121212; color: #e0e0e0; }
.toolbar { display: flex; align-items: center; gap: 8px; margin-bottom: 16px; }
.toolbar .title { font-size: 20px; font-weight: 600; flex: 1; }
.charts { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 16px; }
.chart-card { border: 1px solid rgba(128, 128, 128, 0.3); border-radius: 8px; padding: 12px; }
.bars { display: flex; align-items: flex-end; gap: 8px; height: 180px; }
.bar-slot { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; height: 100%; cursor: pointer; }
.bar { border-radius: 4px 4px 0 0; }
.bar-label { font-size: 12px; text-align: center; margin-top: 4px; }
.table-controls { display: flex; gap: 8px; margin-bottom: 8px; }
.table-controls input { flex: 1; padding: 6px; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid rgba(128, 128, 128, 0.2); }
.status-completed td:nth-child(4) { color: #2e7d32; }
.status-pending td:nth-child(4) { color: #ef6c00; }
.status-failed td:nth-child(4) { color: #c62828; }
.row-count { font-size: 12px; opacity: 0.7; }
"#;

/// 📊 Sales dashboard page
#[component]
pub fn App(dashboard: Dashboard) -> impl IntoView {
    let theme = dashboard.theme().signal();

    view! {
        <style>{DASHBOARD_CSS}</style>
        <div class=move || format!("sales-dashboard {}", theme.get().css_class())>
            <Toolbar dashboard=dashboard.clone() />
            <div class="charts">
                <ChartCard dashboard=dashboard.clone() kind=ChartKind::Region title="Sales by Region" />
                <ChartCard dashboard=dashboard.clone() kind=ChartKind::Revenue title="Revenue" />
            </div>
            <TransactionTable dashboard=dashboard />
        </div>
    }
}

#[component]
fn Toolbar(dashboard: Dashboard) -> impl IntoView {
    let theme = dashboard.theme();
    let current = theme.signal();

    view! {
        <header class="toolbar">
            <span class="title">{Dashboard::TITLE}</span>
            <button class="theme-toggle" on:click=move |_| theme.toggle_theme()>
                {move || match current.get() {
                    Theme::Light => "🌙 Dark mode",
                    Theme::Dark => "☀️ Light mode",
                }}
            </button>
            <button on:click=move |_| theme.set_theme(Theme::Light)>"Light"</button>
            <button on:click=move |_| theme.set_theme(Theme::Dark)>"Dark"</button>
        </header>
    }
}

/// Bar chart whose bars report clicks to the dashboard
#[component]
fn ChartCard(dashboard: Dashboard, kind: ChartKind, title: &'static str) -> impl IntoView {
    let bars = move || {
        let chart = dashboard.chart_data(kind);
        let series = chart.primary_series().cloned();
        let max = series
            .as_ref()
            .and_then(|s| s.max_value())
            .filter(|max| *max > 0.0)
            .unwrap_or(1.0);

        chart
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let value = series
                    .as_ref()
                    .and_then(|s| s.data.get(index).copied())
                    .unwrap_or(0.0);
                let color = series
                    .as_ref()
                    .and_then(|s| s.style.background_color.as_ref())
                    .and_then(|c| c.color_at(index))
                    .unwrap_or("#42A5F5")
                    .to_string();
                let style = format!("height: {:.0}%; background: {};", value / max * 100.0, color);
                let dashboard = dashboard.clone();
                let on_click = move |_| {
                    if !dashboard.on_chart_click(&ChartClickEvent::at(index), kind).changed_state() {
                        log_debug!(LogComponent::Presentation("ChartCard"), "🖱️ {} chart click ignored", kind);
                    }
                };

                view! {
                    <div class="bar-slot" title=format!("{label}: {value}") on:click=on_click>
                        <div class="bar" style=style />
                        <span class="bar-label">{label.clone()}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class=format!("chart-card chart-{}", kind.as_ref())>
            <h3>{title}</h3>
            <div class="bars">{bars}</div>
        </section>
    }
}

#[component]
fn TransactionTable(dashboard: Dashboard) -> impl IntoView {
    let search = dashboard.search_text().signal();
    let recent = dashboard.recent_transactions().signal();
    let filtered = dashboard.filtered_transactions();

    let clear = {
        let dashboard = dashboard.clone();
        move |_| dashboard.clear_search()
    };
    let export = move |_| {
        if let Err(e) = dashboard.export_csv(&BrowserDownload) {
            log_error!(LogComponent::Presentation("TransactionTable"), "❌ CSV export failed: {}", e);
        }
    };

    view! {
        <section class="transactions">
            <div class="table-controls">
                <input
                    type="search"
                    placeholder="Search by customer, order or status"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button on:click=clear>"Clear"</button>
                <button on:click=export disabled=move || filtered.with(Vec::is_empty)>
                    "Export CSV"
                </button>
            </div>
            <table>
                <thead>
                    <tr>
                        {DISPLAYED_COLUMNS.iter().map(|column| view! { <th class={column.as_ref().to_string()}>{column.header()}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || filtered.get()
                        key=|transaction: &Transaction| transaction.id.clone()
                        children=move |transaction: Transaction| {
                            view! {
                                <tr class=format!("status-{}", transaction.status)>
                                    {DISPLAYED_COLUMNS
                                        .iter()
                                        .map(|column| view! { <td>{column.cell_text(&transaction)}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <p class="row-count">
                {move || {
                    let shown = filtered.with(|rows| (rows.len(), total_amount(rows)));
                    format!(
                        "{} of {} transactions · ${}",
                        shown.0,
                        recent.with(Vec::len),
                        shown.1
                    )
                }}
            </p>
        </section>
    }
}
