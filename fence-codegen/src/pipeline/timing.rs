use std::{collections::HashMap, sync::Mutex, time::Instant};

use eyre::Result;
use tracing::debug;

use super::{Hook, ValidationContext};

/// Logs how long each phase took at debug level.
#[derive(Debug, Default)]
pub struct TimingHook {
    started: Mutex<HashMap<String, Instant>>,
}

impl TimingHook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hook for TimingHook {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut ValidationContext) -> Result<()> {
        if let Ok(mut started) = self.started.lock() {
            started.insert(phase.to_string(), Instant::now());
        }
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, _ctx: &mut ValidationContext) -> Result<()> {
        let start = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.remove(phase));
        if let Some(start) = start {
            debug!(phase, elapsed_ms = start.elapsed().as_millis() as u64, "phase finished");
        }
        Ok(())
    }
}
