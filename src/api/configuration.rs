use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::core::{ChartType, SeriesRecord};

/// Configuration as produced by the assembler before extension hooks run.
///
/// Hooks work on the [`ChartDocument`](super::ChartDocument) form of this
/// value, which allows arbitrary edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfiguration {
    /// Empty document for `chart_type` with the generic options.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            data: ChartData::default(),
            options: ChartOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<SeriesRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScalesOptions>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            scales: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScalesOptions {
    #[serde(rename = "yAxes", default)]
    pub y_axes: Vec<AxisOptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default)]
    pub ticks: TickOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
}

impl TickOptions {
    /// Ticks pinned to a zero baseline.
    #[must_use]
    pub fn zero_baseline() -> Self {
        Self {
            begin_at_zero: Some(true),
            min: Some(Number::from(0)),
        }
    }
}
