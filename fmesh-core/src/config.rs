//! Mesh configuration (§6): error-handling strategy, cycle/time limits, and
//! the debug-logging toggle.

use std::time::Duration;

/// How the scheduler reacts to `ReturnedError`/`Panicked` activation codes
/// after each cycle (§4.6 step e).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorHandlingStrategy {
    /// Never stop due to activation codes alone.
    #[default]
    IgnoreAll,
    /// Stop as soon as any component returns `ReturnedError`.
    StopOnFirstError,
    /// Stop as soon as any component panics.
    StopOnFirstPanic,
    /// Stop as soon as any component returns `ReturnedError` or panics.
    StopOnFirstErrorOrPanic,
}

/// Maximum number of cycles a run may execute, or unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclesLimit {
    /// No cap — run until quiescence, a policy stop, or a time limit.
    Unlimited,
    /// Stop once this many cycles have executed, if the mesh hasn't
    /// quiesced or stopped earlier.
    Limited(u64),
}

impl Default for CyclesLimit {
    fn default() -> Self {
        Self::Unlimited
    }
}

/// Wall-clock cap on a run, or unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLimit {
    /// No cap.
    Unlimited,
    /// Stop once this much wall-clock time has elapsed since `BeforeRun`,
    /// checked at cycle boundaries only (§4.6, §5).
    Limited(Duration),
}

impl Default for TimeLimit {
    fn default() -> Self {
        Self::Unlimited
    }
}

/// Recognized mesh configuration options (§6 table).
#[derive(Debug, Clone, Default)]
pub struct MeshConfig {
    /// Governs the stop decision after each cycle.
    pub error_handling_strategy: ErrorHandlingStrategy,
    /// Maximum number of cycles, or unlimited.
    pub cycles_limit: CyclesLimit,
    /// Wall-clock cap on the run, or unlimited.
    pub time_limit: TimeLimit,
    /// Enables per-component `tracing` output mirroring every hook firing.
    pub debug: bool,
}

impl MeshConfig {
    /// Start building a config via the chainable builder.
    pub fn builder() -> MeshConfigBuilder {
        MeshConfigBuilder::default()
    }
}

/// Chainable builder for [`MeshConfig`]. Every field defaults to the
/// permissive choice (`IgnoreAll`, unlimited cycles, unlimited time, debug
/// off) — callers opt into stricter behavior.
#[derive(Debug, Clone, Default)]
pub struct MeshConfigBuilder {
    config: MeshConfig,
}

impl MeshConfigBuilder {
    /// Set the error-handling strategy.
    pub fn error_handling_strategy(mut self, strategy: ErrorHandlingStrategy) -> Self {
        self.config.error_handling_strategy = strategy;
        self
    }

    /// Cap the run at `n` cycles.
    pub fn cycles_limit(mut self, n: u64) -> Self {
        self.config.cycles_limit = CyclesLimit::Limited(n);
        self
    }

    /// Cap the run's wall-clock duration.
    pub fn time_limit(mut self, duration: Duration) -> Self {
        self.config.time_limit = TimeLimit::Limited(duration);
        self
    }

    /// Enable per-component debug logging.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    /// Finish building.
    pub fn build(self) -> MeshConfig {
        self.config
    }
}
