//! Persistence boundary for charts and datasets.
//!
//! The assembler only needs `chart` and `list_datasets`; the write side exists
//! for hosts that manage charts through this crate.

mod memory;

pub use memory::InMemoryChartStore;

use crate::core::{Chart, ChartDataset, ChartId, DatasetId, PageId};
use crate::error::ChartResult;

pub trait ChartRepository {
    /// Fails with `ChartNotFound` for unknown ids.
    fn chart(&self, id: ChartId) -> ChartResult<Chart>;

    /// Charts embedded on `page_id`, ascending by sort order.
    fn charts_for_page(&self, page_id: PageId) -> Vec<Chart>;

    /// Datasets of `chart_id`, ascending by sort order. Unknown charts yield an
    /// empty list.
    fn list_datasets(&self, chart_id: ChartId) -> Vec<ChartDataset>;

    /// Inserts or replaces a chart after validating its required fields.
    fn save_chart(&mut self, chart: Chart) -> ChartResult<()>;

    /// Inserts or replaces a dataset. Its owning chart must exist.
    fn save_dataset(&mut self, dataset: ChartDataset) -> ChartResult<()>;

    /// Removes a chart together with all of its datasets. Returns the ids of
    /// the removed datasets.
    fn delete_chart(&mut self, id: ChartId) -> ChartResult<Vec<DatasetId>>;

    fn delete_dataset(&mut self, id: DatasetId) -> ChartResult<ChartDataset>;
}
