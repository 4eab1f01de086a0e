//! Cycle — one synchronous iteration of the scheduler (§3).

use crate::activation::ActivationResult;

/// The set of `ActivationResult`s produced by all components considered in
/// one cycle, plus the cycle's monotonic number (starting at 1). Every
/// component in the mesh appears in every cycle's results, including those
/// that did not activate (§3 invariant, §8 property 1).
#[derive(Debug, Clone)]
pub struct Cycle {
    /// Monotonic cycle number, starting at 1.
    pub number: u64,
    /// One result per component considered this cycle.
    pub activation_results: Vec<ActivationResult>,
}

impl Cycle {
    /// Construct a new, empty cycle.
    pub fn new(number: u64) -> Self {
        Self {
            number,
            activation_results: Vec::new(),
        }
    }

    /// Whether any component actually activated this cycle (§4.6 stop
    /// decision: zero activations means the mesh has quiesced).
    pub fn any_activated(&self) -> bool {
        self.activation_results.iter().any(|r| r.activated)
    }
}
