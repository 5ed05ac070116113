use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Chart, ChartDataset, ChartId, DatasetId, PageId};
use crate::error::{ChartError, ChartResult};

use super::ChartRepository;

/// Map-backed repository. Ties in sort order fall back to insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChartStore {
    charts: IndexMap<ChartId, Chart>,
    datasets: IndexMap<DatasetId, ChartDataset>,
}

impl InMemoryChartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }
}

impl ChartRepository for InMemoryChartStore {
    fn chart(&self, id: ChartId) -> ChartResult<Chart> {
        self.charts
            .get(&id)
            .cloned()
            .ok_or(ChartError::ChartNotFound { id })
    }

    fn charts_for_page(&self, page_id: PageId) -> Vec<Chart> {
        let mut charts: Vec<Chart> = self
            .charts
            .values()
            .filter(|chart| chart.page_id == Some(page_id))
            .cloned()
            .collect();
        charts.sort_by_key(|chart| chart.sort_order);
        charts
    }

    fn list_datasets(&self, chart_id: ChartId) -> Vec<ChartDataset> {
        let mut datasets: Vec<ChartDataset> = self
            .datasets
            .values()
            .filter(|dataset| dataset.chart_id == chart_id)
            .cloned()
            .collect();
        datasets.sort_by_key(|dataset| dataset.sort_order);
        datasets
    }

    fn save_chart(&mut self, chart: Chart) -> ChartResult<()> {
        chart.validate()?;
        self.charts.insert(chart.id, chart);
        Ok(())
    }

    fn save_dataset(&mut self, dataset: ChartDataset) -> ChartResult<()> {
        if !self.charts.contains_key(&dataset.chart_id) {
            return Err(ChartError::ChartNotFound {
                id: dataset.chart_id,
            });
        }
        self.datasets.insert(dataset.id, dataset);
        Ok(())
    }

    fn delete_chart(&mut self, id: ChartId) -> ChartResult<Vec<DatasetId>> {
        if self.charts.shift_remove(&id).is_none() {
            return Err(ChartError::ChartNotFound { id });
        }

        let mut removed = Vec::new();
        self.datasets.retain(|dataset_id, dataset| {
            if dataset.chart_id == id {
                removed.push(*dataset_id);
                false
            } else {
                true
            }
        });
        debug!(chart_id = %id, datasets = removed.len(), "deleted chart and its datasets");
        Ok(removed)
    }

    fn delete_dataset(&mut self, id: DatasetId) -> ChartResult<ChartDataset> {
        self.datasets
            .shift_remove(&id)
            .ok_or(ChartError::DatasetNotFound { id })
    }
}
