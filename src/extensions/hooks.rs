use std::fmt;

use crate::api::ChartDocument;
use crate::error::ChartResult;

/// Customization step run on every assembled configuration before it is
/// serialized.
///
/// Hooks see the whole JSON document and may add, remove or overwrite any
/// field with a value of any shape, including `type` and `options.responsive`. Hooks run in registration order; an error stops
/// the assembly and is returned to the caller unchanged.
pub trait ChartDataHook: Send + Sync {
    fn id(&self) -> &str;
    fn update_chart_data(&self, document: &mut ChartDocument) -> ChartResult<()>;
}

/// Adapts a closure into a [`ChartDataHook`].
pub struct FnHook<F> {
    id: String,
    hook: F,
}

impl<F> FnHook<F>
where
    F: Fn(&mut ChartDocument) -> ChartResult<()> + Send + Sync,
{
    #[must_use]
    pub fn new(id: impl Into<String>, hook: F) -> Self {
        Self {
            id: id.into(),
            hook,
        }
    }
}

impl<F> fmt::Debug for FnHook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHook").field("id", &self.id).finish_non_exhaustive()
    }
}

impl<F> ChartDataHook for FnHook<F>
where
    F: Fn(&mut ChartDocument) -> ChartResult<()> + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn update_chart_data(&self, document: &mut ChartDocument) -> ChartResult<()> {
        (self.hook)(document)
    }
}
