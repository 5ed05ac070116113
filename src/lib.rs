//! chart-config-rs: chart configuration assembly.
//!
//! Stored charts and their ordered datasets are turned into the JSON document
//! a Chart.js-style renderer consumes. Type-specific defaults are applied by
//! the assembler; anything deployment-specific goes through extension hooks.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod store;
pub mod telemetry;

pub use api::{AssemblerConfig, ChartAssembler, ChartConfiguration, ChartDocument};
pub use error::{ChartError, ChartResult};
