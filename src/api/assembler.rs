use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::core::{Chart, ChartId, ChartType, DatasetSource};
use crate::error::ChartResult;
use crate::extensions::ChartDataHook;
use crate::store::ChartRepository;

use super::{AssemblerConfig, ChartConfiguration, ChartDocument, default_options_for};

/// Turns a chart and its ordered datasets into a renderer configuration.
///
/// Assembly is stateless: every call rebuilds the document from its inputs,
/// so one assembler can serve concurrent callers through `&self`.
#[derive(Default)]
pub struct ChartAssembler {
    pub(super) config: AssemblerConfig,
    pub(super) hooks: Vec<Box<dyn ChartDataHook>>,
}

impl fmt::Debug for ChartAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartAssembler")
            .field("config", &self.config)
            .field("hooks", &self.hook_ids())
            .finish()
    }
}

impl ChartAssembler {
    #[must_use]
    pub fn new(config: AssemblerConfig) -> Self {
        Self {
            config,
            hooks: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> AssemblerConfig {
        self.config
    }

    pub fn set_config(&mut self, config: AssemblerConfig) {
        self.config = config;
    }

    /// Builds the configuration document for `chart`, hooks included.
    ///
    /// `datasets` must already be in sibling order; it is not re-sorted.
    pub fn build<D: DatasetSource>(
        &self,
        chart: &Chart,
        datasets: &[D],
    ) -> ChartResult<ChartDocument> {
        debug!(
            chart_id = %chart.id,
            chart_type = %chart.chart_type,
            datasets = datasets.len(),
            "assembling chart configuration"
        );
        self.build_for_type(&chart.chart_type, datasets)
    }

    /// Same as [`Self::build`] for callers that only hold the chart type.
    pub fn build_for_type<D: DatasetSource>(
        &self,
        chart_type: &ChartType,
        datasets: &[D],
    ) -> ChartResult<ChartDocument> {
        let config = Self::base_configuration(chart_type, datasets);
        let mut document = ChartDocument::from_configuration(&config)?;
        self.run_hooks(&mut document)?;
        Ok(document)
    }

    /// Typed configuration before any hook has run.
    ///
    /// Labels come from the first dataset only. Sibling datasets are assumed
    /// to share that category axis and are not cross-checked.
    #[must_use]
    pub fn base_configuration<D: DatasetSource>(
        chart_type: &ChartType,
        datasets: &[D],
    ) -> ChartConfiguration {
        let mut config = ChartConfiguration::new(chart_type.clone());
        if let Some(first) = datasets.first() {
            config.data.labels = first.labels();
            config.data.datasets = datasets.iter().map(D::series_record).collect();
        }
        config.options = default_options_for(chart_type);
        config
    }

    /// Builds and serializes the configuration using the configured
    /// [`JsonFormat`](super::JsonFormat).
    pub fn assemble<D: DatasetSource>(&self, chart: &Chart, datasets: &[D]) -> ChartResult<String> {
        self.build(chart, datasets)?.to_json(self.config.json_format)
    }

    pub fn assemble_value<D: DatasetSource>(
        &self,
        chart: &Chart,
        datasets: &[D],
    ) -> ChartResult<Value> {
        Ok(self.build(chart, datasets)?.into_value())
    }

    /// Loads a chart and its datasets from `repository`, then assembles it.
    pub fn assemble_from_repository<R: ChartRepository + ?Sized>(
        &self,
        repository: &R,
        chart_id: ChartId,
    ) -> ChartResult<String> {
        let chart = repository.chart(chart_id)?;
        let datasets = repository.list_datasets(chart_id);
        self.assemble(&chart, &datasets)
    }
}
