use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declared chart type.
///
/// Recognized values map to dedicated variants. Anything else, including the
/// empty string of an unset type, is kept verbatim in `Other` so the assembled
/// `type` field always matches what the chart declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ChartType {
    Bar,
    Doughnut,
    Pie,
    #[default]
    Unset,
    Other(String),
}

impl ChartType {
    /// Types offered to chart authors, with their display names.
    pub const SELECTABLE: [(ChartType, &'static str); 3] = [
        (ChartType::Bar, "Bar Chart"),
        (ChartType::Doughnut, "Doughnut Chart"),
        (ChartType::Pie, "Pie Chart"),
    ];

    /// Parses a stored type value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "bar" => Self::Bar,
            "doughnut" => Self::Doughnut,
            "pie" => Self::Pie,
            "" => Self::Unset,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bar => "bar",
            Self::Doughnut => "doughnut",
            Self::Pie => "pie",
            Self::Unset => "",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Bar | Self::Doughnut | Self::Pie)
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&'static str> {
        Self::SELECTABLE
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ChartType {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<String> for ChartType {
    fn from(raw: String) -> Self {
        match Self::from_raw(&raw) {
            Self::Other(_) => Self::Other(raw),
            known => known,
        }
    }
}

impl Serialize for ChartType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChartType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw))
    }
}
