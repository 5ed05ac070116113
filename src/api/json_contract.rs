use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::{ChartConfiguration, JsonFormat};

impl ChartConfiguration {
    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self)
            .map_err(|e| ChartError::Serialization(format!("chart configuration: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("chart configuration: {e}")))
    }

    pub fn to_json(&self, format: JsonFormat) -> ChartResult<String> {
        match format {
            JsonFormat::Compact => self.to_json_string(),
            JsonFormat::Pretty => self.to_json_pretty(),
        }
    }

    pub fn to_value(&self) -> ChartResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::Serialization(format!("chart configuration: {e}")))
    }

    /// Parses a configuration previously produced by [`Self::to_json`].
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart configuration json: {e}"))
        })
    }
}
