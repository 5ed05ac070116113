use std::io;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::core::{ChartId, DatasetId, SortOrder};
use crate::error::{ChartError, ChartResult};

const VALUES_KEY: &str = "values";

/// One series entry of an assembled configuration.
///
/// Metadata keys are flattened next to `values` in insertion order, so a
/// record with a `label` serializes as `{"values":[..],"label":".."}`. A
/// metadata entry named `values` is never written; the series values win.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeriesRecord {
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(flatten)]
    pub metadata: IndexMap<String, Value>,
}

impl SeriesRecord {
    #[must_use]
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl Serialize for SeriesRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let shadowed = usize::from(self.metadata.contains_key(VALUES_KEY));
        let mut map = serializer.serialize_map(Some(1 + self.metadata.len() - shadowed))?;
        map.serialize_entry(VALUES_KEY, &self.values)?;
        for (key, value) in &self.metadata {
            if key != VALUES_KEY {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Read contract the assembler consumes for a single dataset.
///
/// Both reads are side-effect free. Missing data is reported as an empty
/// sequence, never as an error.
pub trait DatasetSource {
    fn labels(&self) -> Vec<String>;
    fn series_record(&self) -> SeriesRecord;
}

impl<T: DatasetSource + ?Sized> DatasetSource for &T {
    fn labels(&self) -> Vec<String> {
        (**self).labels()
    }

    fn series_record(&self) -> SeriesRecord {
        (**self).series_record()
    }
}

impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    fn labels(&self) -> Vec<String> {
        (**self).labels()
    }

    fn series_record(&self) -> SeriesRecord {
        (**self).series_record()
    }
}

impl<T: DatasetSource + ?Sized> DatasetSource for Arc<T> {
    fn labels(&self) -> Vec<String> {
        (**self).labels()
    }

    fn series_record(&self) -> SeriesRecord {
        (**self).series_record()
    }
}

/// A stored dataset belonging to one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub id: DatasetId,
    pub chart_id: ChartId,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub metadata: IndexMap<String, Value>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(id: u64, chart_id: u64) -> Self {
        Self {
            id: DatasetId(id),
            chart_id: ChartId(chart_id),
            sort_order: 0,
            title: String::new(),
            labels: Vec::new(),
            values: Vec::new(),
            metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Replaces labels and values with the rows of a headerless `label,value`
    /// CSV document.
    ///
    /// Integer cells stay integers, other finite numbers become floats, empty
    /// cells become `null` and anything else is kept as a string. Fields
    /// beyond the second are ignored.
    ///
    /// Blank and whitespace-only lines are skipped. A row of bare separators
    /// such as `,` and a row with a single field are both `InvalidData`.
    pub fn load_csv<R: io::Read>(&mut self, reader: R) -> ChartResult<()> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut labels = Vec::new();
        let mut values = Vec::new();
        for record in csv_reader.records() {
            let record = record
                .map_err(|e| ChartError::InvalidData(format!("failed to read csv row: {e}")))?;
            let line = record.position().map_or(0, csv::Position::line);
            if record.iter().all(str::is_empty) {
                if record.len() == 1 {
                    continue;
                }
                return Err(ChartError::InvalidData(format!(
                    "csv line {line} has separators but no label or value"
                )));
            }
            if record.len() < 2 {
                return Err(ChartError::InvalidData(format!(
                    "csv line {line} needs a label and a value"
                )));
            }
            labels.push(record[0].to_owned());
            values.push(parse_cell(&record[1]));
        }

        self.labels = labels;
        self.values = values;
        Ok(())
    }

    /// Builds a dataset from CSV content in one step.
    pub fn from_csv_reader<R: io::Read>(
        id: u64,
        chart_id: u64,
        reader: R,
    ) -> ChartResult<Self> {
        let mut dataset = Self::new(id, chart_id);
        dataset.load_csv(reader)?;
        Ok(dataset)
    }
}

impl DatasetSource for ChartDataset {
    fn labels(&self) -> Vec<String> {
        self.labels.clone()
    }

    /// The title is exposed as the series `label` unless metadata sets one.
    fn series_record(&self) -> SeriesRecord {
        let mut metadata = IndexMap::with_capacity(self.metadata.len() + 1);
        if !self.title.is_empty() && !self.metadata.contains_key("label") {
            metadata.insert("label".to_owned(), Value::String(self.title.clone()));
        }
        metadata.extend(
            self.metadata
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        SeriesRecord {
            values: self.values.clone(),
            metadata,
        }
    }
}

fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = cell.parse::<i64>() {
        return Value::from(int);
    }
    cell.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(cell.to_owned()), Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_cell_keeps_integers_integral() {
        assert_eq!(parse_cell("12"), json!(12));
        assert_eq!(parse_cell("-3"), json!(-3));
        assert_eq!(parse_cell("2.5"), json!(2.5));
        assert_eq!(parse_cell(""), Value::Null);
        assert_eq!(parse_cell("NaN"), json!("NaN"));
        assert_eq!(parse_cell("n/a"), json!("n/a"));
    }

    #[test]
    fn title_becomes_label_unless_metadata_overrides_it() {
        let titled = ChartDataset::new(1, 1).with_title("Sales").with_values([1]);
        let record = titled.series_record();
        assert_eq!(record.metadata.get("label"), Some(&json!("Sales")));

        let overridden = ChartDataset::new(2, 1)
            .with_title("Sales")
            .with_meta("label", "Units");
        assert_eq!(
            overridden.series_record().metadata.get("label"),
            Some(&json!("Units"))
        );
    }

    #[test]
    fn series_record_serializes_metadata_after_values() {
        let record = SeriesRecord::new([1, 2]).with_meta("backgroundColor", "#ff0000");
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r##"{"values":[1,2],"backgroundColor":"#ff0000"}"##);
    }

    #[test]
    fn metadata_cannot_shadow_series_values() {
        let record = SeriesRecord::new([1])
            .with_meta("values", json!([9]))
            .with_meta("stack", "a");
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"values":[1],"stack":"a"}"#);
    }
}
