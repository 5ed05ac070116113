mod assembler;
mod assembler_config;
mod configuration;
mod default_options;
mod document;
mod hook_registry;
mod json_contract;

pub use assembler::ChartAssembler;
pub use assembler_config::{AssemblerConfig, JsonFormat};
pub use configuration::{
    AxisOptions, ChartConfiguration, ChartData, ChartOptions, ScalesOptions, TickOptions,
};
pub use default_options::default_options_for;
pub use document::ChartDocument;
