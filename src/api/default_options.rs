use crate::core::ChartType;

use super::{AxisOptions, ChartOptions, ScalesOptions, TickOptions};

/// Default display options for a chart type.
///
/// Bar charts get a y axis pinned at zero so the library cannot autoscale the
/// bars away from the baseline. Every other type, doughnut included, gets the
/// generic responsive-only options.
#[must_use]
pub fn default_options_for(chart_type: &ChartType) -> ChartOptions {
    match chart_type {
        ChartType::Bar => ChartOptions {
            scales: Some(ScalesOptions {
                y_axes: vec![AxisOptions {
                    ticks: TickOptions::zero_baseline(),
                }],
            }),
            ..ChartOptions::default()
        },
        ChartType::Pie => ChartOptions::default(),
        ChartType::Doughnut | ChartType::Unset | ChartType::Other(_) => ChartOptions::default(),
    }
}
