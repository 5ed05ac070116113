use serde_json::Value;

use crate::api::ChartDocument;
use crate::core::ChartType;
use crate::error::ChartResult;

use super::ChartDataHook;

const BACKGROUND_COLOR_KEY: &str = "backgroundColor";

pub const DEFAULT_PALETTE: [&str; 6] = [
    "#36a2eb", "#ff6384", "#ff9f40", "#ffcd56", "#4bc0c0", "#9966ff",
];

/// Fills in `backgroundColor` for series that do not set one.
///
/// Pie and doughnut series color each slice, so they receive one color per
/// label or per value, whichever is longer. A slice series with neither is
/// left alone. Other types receive one color per series. Colors cycle when
/// the palette is shorter than what needs coloring. Entries that are not JSON
/// objects are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPaletteHook {
    colors: Vec<String>,
}

impl ColorPaletteHook {
    pub const ID: &'static str = "color-palette";

    #[must_use]
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    fn color(&self, index: usize) -> Value {
        Value::String(self.colors[index % self.colors.len()].clone())
    }
}

impl Default for ColorPaletteHook {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}

impl ChartDataHook for ColorPaletteHook {
    fn id(&self) -> &str {
        Self::ID
    }

    fn update_chart_data(&self, document: &mut ChartDocument) -> ChartResult<()> {
        if self.colors.is_empty() {
            return Ok(());
        }

        let per_slice = document
            .chart_type()
            .map(ChartType::from_raw)
            .is_some_and(|chart_type| matches!(chart_type, ChartType::Pie | ChartType::Doughnut));
        let label_count = document.labels().map_or(0, Vec::len);
        let Some(datasets) = document.datasets_mut() else {
            return Ok(());
        };

        for (index, series) in datasets.iter_mut().enumerate() {
            let Some(series) = series.as_object_mut() else {
                continue;
            };
            if series.contains_key(BACKGROUND_COLOR_KEY) {
                continue;
            }
            let color = if per_slice {
                let value_count = series
                    .get("values")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len);
                let slices = label_count.max(value_count);
                if slices == 0 {
                    continue;
                }
                Value::Array((0..slices).map(|slice| self.color(slice)).collect())
            } else {
                self.color(index)
            };
            series.insert(BACKGROUND_COLOR_KEY.to_owned(), color);
        }
        Ok(())
    }
}
