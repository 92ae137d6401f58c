//! A family of generalized leaky integrate and fire neuron models along with
//! the traits a simulation driver uses to step them, and a small per-step
//! accumulator that combines delayed spike and current contributions into the
//! single input value a neuron consumes.
//!
//! The network-wide event delivery, delay routing, and scheduling that feed
//! the accumulator live outside this crate; by the time a neuron is stepped
//! for a given timestep its input is already stable.

pub mod glif;
pub mod iterate_and_spike;
/// A set of macros to automatically derive accessor traits needed for the
/// `IterateAndSpike` trait.
pub mod glif_neuron_traits {
    pub use glif_neuron_traits::*;
}


/// Per-timestep aggregation of incoming delayed spike and current
/// contributions, drained into the combined scalar input of one update step
///
/// The delivery infrastructure owns the buffering across delays; this only
/// holds the already-resolved contributions for the step about to run.
#[derive(Debug, Clone, Default)]
pub struct StepInputs {
    spike_total: f32,
    current_total: f32,
}

impl StepInputs {
    /// Adds a weighted spike contribution arriving this step
    pub fn add_spike(&mut self, weight: f32) {
        self.spike_total += weight;
    }

    /// Adds an externally injected current contribution arriving this step (pA)
    pub fn add_current(&mut self, amplitude: f32) {
        self.current_total += amplitude;
    }

    /// The combined input current for this step (pA)
    pub fn combined(&self) -> f32 {
        self.spike_total + self.current_total
    }

    /// Returns the combined input and clears the accumulator for the next step
    pub fn drain(&mut self) -> f32 {
        let combined = self.combined();
        self.spike_total = 0.0;
        self.current_total = 0.0;

        combined
    }
}
