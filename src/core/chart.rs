use serde::{Deserialize, Serialize};

use crate::core::{ChartId, ChartType, PageId, SortOrder};
use crate::error::{ChartError, ChartResult};

/// A user-authored chart. Its datasets are stored separately and linked by
/// [`ChartId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub id: ChartId,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub chart_type: ChartType,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub page_id: Option<PageId>,
}

impl Chart {
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            id: ChartId(id),
            title: title.into(),
            chart_type,
            sort_order: 0,
            page_id: None,
        }
    }

    #[must_use]
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    #[must_use]
    pub fn on_page(mut self, page_id: u64) -> Self {
        self.page_id = Some(PageId(page_id));
        self
    }

    /// Embed code authors paste into page content.
    #[must_use]
    pub fn shortcode(&self) -> String {
        format!("[chart,id='{}']", self.id)
    }

    /// Checks the fields an author must fill in before a chart is stored.
    pub fn validate(&self) -> ChartResult<()> {
        if self.title.trim().is_empty() {
            return Err(ChartError::MissingField { field: "title" });
        }
        if self.chart_type == ChartType::Unset {
            return Err(ChartError::MissingField { field: "type" });
        }
        Ok(())
    }
}
