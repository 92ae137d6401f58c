//! # GLIF Neurons
//!
//! `glif_neurons` is a package implementing the family of five generalized
//! leaky integrate and fire (GLIF) neuron models used in large-scale spiking
//! network simulation: leaky integrate and fire with biologically defined
//! reset rules, after-spike currents, and a voltage dependent threshold,
//! following the classification in Teeter et al. 2018 (Nature Communications
//! 9:709). Each neuron is a deterministic per-step state machine: one call
//! integrates the membrane voltage with a selectable solver, evolves the
//! firing threshold, decays the after-spike currents, manages the refractory
//! countdown, and reports whether a spike was emitted.
//!
//! The surrounding network infrastructure (event delivery, delay routing,
//! scheduling, connection bookkeeping) is expected to live elsewhere; this
//! crate consumes a single combined input current per step and exposes its
//! observables through a fixed recordables registry.
//!
//! ## Example Code
//!
//! ### Stepping a level 1 neuron with static input
//!
//! ```rust
//! use glif_neurons::neuron::glif::{run_static_input_glif, GlifNeuron};
//!
//! let mut neuron = GlifNeuron::lif();
//! let voltages = run_static_input_glif(&mut neuron, 300., false, 1000);
//!
//! assert_eq!(voltages.len(), 1000);
//! ```
//!
//! ### Counting spikes from a model with after-spike currents
//!
//! ```rust
//! use glif_neurons::neuron::glif::GlifNeuron;
//! use glif_neurons::neuron::iterate_and_spike::IterateAndSpike;
//!
//! let mut neuron = GlifNeuron::lif_asc();
//!
//! let mut spikes = 0;
//! for _ in 0..10_000 {
//!     if neuron.iterate_and_spike(300.) {
//!         spikes += 1;
//!     }
//! }
//!
//! assert!(spikes > 0);
//! ```
//!
//! ### Reconfiguring a neuron through the status dictionary
//!
//! Model levels are selected by alias or numeric level; updates are validated
//! as a whole and either committed together or rejected without touching the
//! previously committed configuration.
//!
//! ```rust
//! use std::collections::HashMap;
//! use glif_neurons::neuron::glif::{GlifModel, GlifNeuron};
//! use glif_neurons::status::{names, StatusValue};
//!
//! let mut neuron = GlifNeuron::default();
//!
//! let mut config = HashMap::new();
//! config.insert(
//!     names::GLIF_MODEL.to_string(),
//!     StatusValue::Text("glif_lif_asc".to_string()),
//! );
//! neuron.set_status(&config).unwrap();
//!
//! assert_eq!(neuron.params.glif_model, GlifModel::LifAsc);
//! ```
//!
//! ### Recording observables by name
//!
//! A logging collaborator connects to a recordable once, unknown targets are
//! rejected at connection time, and reads the live value each step.
//!
//! ```rust
//! use glif_neurons::neuron::glif::GlifNeuron;
//! use glif_neurons::neuron::iterate_and_spike::IterateAndSpike;
//!
//! let read_voltage = GlifNeuron::connect_recordable("V_m").unwrap();
//! assert!(GlifNeuron::connect_recordable("V_q").is_err());
//!
//! let mut neuron = GlifNeuron::lif_r();
//! neuron.iterate_and_spike(100.);
//!
//! assert_eq!(read_voltage(&neuron), neuron.state.v_m);
//! ```

pub mod distribution;
pub mod error;
pub mod status;
pub mod neuron;
