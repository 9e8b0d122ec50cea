//! Explicit engine context passed by the caller.

use crate::config::Settings;
use crate::planner::{RandomSource, RngSource};

/// Everything the orchestration functions need besides their inputs.
///
/// Built once by the host integration and passed in explicitly. The random
/// source is only `Send`, so a context is `Send` but not `Sync`; share one
/// across threads behind a `Mutex`.
pub struct EngineContext {
    settings: Settings,
    rng: Box<dyn RandomSource + Send>,
}

impl EngineContext {
    /// Context for the given settings.
    ///
    /// Audio selection is seeded from `settings.insertion.seed` when set,
    /// otherwise from OS entropy.
    pub fn new(settings: Settings) -> Self {
        let rng: Box<dyn RandomSource + Send> = match settings.insertion.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        };
        Self { settings, rng }
    }

    /// Replace the random source (tests, replays).
    pub fn with_random_source(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn rng_mut(&mut self) -> &mut (dyn RandomSource + Send + 'static) {
        self.rng.as_mut()
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl std::fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
