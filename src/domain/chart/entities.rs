use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Domain entity - labeled chart data.
///
/// `labels[i]` belongs to `data[i]` of every series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartSeries>,
}

/// One data series of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(flatten)]
    pub style: SeriesStyle,
}

/// Presentation hints carried with a series, in chart.js naming
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// A single color for the whole series, or one per point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

impl ColorSpec {
    /// Color of the point at `index`
    pub fn color_at(&self, index: usize) -> Option<&str> {
        match self {
            ColorSpec::Single(color) => Some(color.as_str()),
            ColorSpec::PerPoint(colors) if !colors.is_empty() => {
                Some(colors[index % colors.len()].as_str())
            }
            ColorSpec::PerPoint(_) => None,
        }
    }
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self { label: label.into(), data, style: SeriesStyle::default() }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }
}

impl ChartDataset {
    pub fn new(labels: Vec<String>, datasets: Vec<ChartSeries>) -> Self {
        Self { labels, datasets }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Whether every series has exactly one value per label
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|series| series.data.len() == self.labels.len())
    }

    pub fn primary_series(&self) -> Option<&ChartSeries> {
        self.datasets.first()
    }
}

static REGION_CHART: Lazy<ChartDataset> = Lazy::new(|| {
    let labels = ["North", "South", "East", "West", "Central"];
    let colors = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];
    ChartDataset::new(
        labels.iter().map(|l| l.to_string()).collect(),
        vec![
            ChartSeries::new("Sales by Region", vec![45000.0, 32000.0, 28000.0, 39000.0, 21000.0])
                .with_style(SeriesStyle {
                    background_color: Some(ColorSpec::PerPoint(
                        colors.iter().map(|c| c.to_string()).collect(),
                    )),
                    ..SeriesStyle::default()
                }),
        ],
    )
});

/// Built-in sales-by-region chart
pub fn region_chart_data() -> ChartDataset {
    REGION_CHART.clone()
}
