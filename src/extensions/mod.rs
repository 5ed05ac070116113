//! Extension hooks applied to assembled configurations.
//!
//! Deployment-specific customization lives here instead of in the assembler.

pub mod hooks;
pub mod palette;

pub use hooks::{ChartDataHook, FnHook};
pub use palette::{ColorPaletteHook, DEFAULT_PALETTE};
