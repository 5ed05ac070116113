use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartDataHook;

use super::{ChartAssembler, ChartDocument};

impl ChartAssembler {
    /// Registers a hook with a unique identifier. Hooks run in registration
    /// order.
    pub fn register_hook(&mut self, hook: Box<dyn ChartDataHook>) -> ChartResult<()> {
        let hook_id = hook.id().to_owned();
        if hook_id.is_empty() {
            return Err(ChartError::InvalidData("hook id must not be empty".to_owned()));
        }
        if self.has_hook(&hook_id) {
            return Err(ChartError::InvalidData(format!(
                "hook with id `{hook_id}` is already registered"
            )));
        }
        self.hooks.push(hook);
        Ok(())
    }

    /// Builder form of [`Self::register_hook`].
    pub fn with_hook(mut self, hook: impl ChartDataHook + 'static) -> ChartResult<Self> {
        self.register_hook(Box::new(hook))?;
        Ok(self)
    }

    /// Unregisters a hook by id. Returns `true` when removed.
    pub fn unregister_hook(&mut self, hook_id: &str) -> bool {
        if let Some(position) = self.hooks.iter().position(|entry| entry.id() == hook_id) {
            self.hooks.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn has_hook(&self, hook_id: &str) -> bool {
        self.hooks.iter().any(|hook| hook.id() == hook_id)
    }

    #[must_use]
    pub fn hook_ids(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.id()).collect()
    }

    pub(super) fn run_hooks(&self, document: &mut ChartDocument) -> ChartResult<()> {
        for hook in &self.hooks {
            trace!(hook_id = hook.id(), "running chart data hook");
            if let Err(err) = hook.update_chart_data(document) {
                warn!(hook_id = hook.id(), error = %err, "chart data hook failed");
                return Err(err);
            }
        }
        Ok(())
    }
}
