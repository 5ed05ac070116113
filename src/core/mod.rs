pub mod chart;
pub mod chart_type;
pub mod dataset;
pub mod types;

pub use chart::Chart;
pub use chart_type::ChartType;
pub use dataset::{ChartDataset, DatasetSource, SeriesRecord};
pub use types::{ChartId, DatasetId, PageId, SortOrder};
