use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            #[must_use]
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            #[must_use]
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Identifier of a stored chart.
    ChartId
);
record_id!(
    /// Identifier of a stored dataset.
    DatasetId
);
record_id!(
    /// Identifier of the page a chart is embedded on.
    PageId
);

/// Position of a record among its siblings. Lower sorts first.
pub type SortOrder = i64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&ChartId::new(7)).expect("serialize");
        assert_eq!(json, "7");
        let back: DatasetId = serde_json::from_str("12").expect("deserialize");
        assert_eq!(back.get(), 12);
    }
}
