//! A generic status dictionary for reading and writing neuron parameters and
//! state by name, a typed stand-in for a user-facing configuration mapping.

use std::collections::HashMap;
use crate::error::{GlifError, StatusError};


/// String constants for every documented status key
pub mod names {
    /// Membrane potential (mV)
    pub const V_M: &str = "V_m";
    /// Membrane voltage following spike (mV)
    pub const V_RESET: &str = "V_reset";
    /// Asymptotic firing threshold (mV)
    pub const TH_INF: &str = "th_inf";
    /// Membrane conductance (nS)
    pub const G: &str = "g";
    /// Resting membrane potential (mV)
    pub const E_L: &str = "E_L";
    /// Membrane capacitance (pF)
    pub const C_M: &str = "C_m";
    /// Refractory duration (ms)
    pub const T_REF: &str = "t_ref";
    /// Threshold addition following spike (mV)
    pub const A_SPIKE: &str = "a_spike";
    /// Spike-induced threshold decay rate (1/ms)
    pub const B_SPIKE: &str = "b_spike";
    /// Voltage fraction coefficient following spike
    pub const VOLTAGE_RESET_A: &str = "voltage_reset_a";
    /// Voltage addition following spike (mV)
    pub const VOLTAGE_RESET_B: &str = "voltage_reset_b";
    /// Adaptation index of the voltage-dependent threshold component (1/ms)
    pub const A_VOLTAGE: &str = "a_voltage";
    /// Decay rate of the voltage-dependent threshold component (1/ms)
    pub const B_VOLTAGE: &str = "b_voltage";
    /// Initial values of after-spike currents (pA)
    pub const ASC_INIT: &str = "asc_init";
    /// After-spike current decay rates (1/ms)
    pub const K: &str = "k";
    /// After-spike current amplitudes (pA)
    pub const ASC_AMPS: &str = "asc_amps";
    /// After-spike current reset-carryover fractions
    pub const R: &str = "r";
    /// Voltage dynamics solution method
    pub const V_DYNAMICS_METHOD: &str = "V_dynamics_method";
    /// GLIF model level or alias
    pub const GLIF_MODEL: &str = "glif_model";
    /// Current firing threshold (mV)
    pub const THRESHOLD: &str = "threshold";
    /// After-spike current values (pA)
    pub const ASCURRENTS: &str = "ASCurrents";
    /// Sum of after-spike currents (pA)
    pub const ASCURRENTS_SUM: &str = "AScurrents_sum";
    /// Last applied external input current (pA)
    pub const I: &str = "I";
    /// Names of the quantities a logger may record
    pub const RECORDABLES: &str = "recordables";
}

/// A typed value stored in a status dictionary
#[derive(Debug, Clone, PartialEq)]
pub enum StatusValue {
    /// A scalar physical quantity
    Float(f32),
    /// An ordered sequence of physical quantities
    FloatArray(Vec<f32>),
    /// An integral quantity such as a model level
    Integer(i64),
    /// A symbolic value such as a model alias or method name
    Text(String),
    /// A list of symbolic values such as the recordables registry
    TextArray(Vec<String>),
}

/// A mapping from documented key names to typed values
pub type StatusDictionary = HashMap<String, StatusValue>;

/// Overwrites `target` with the float stored under `key` if present,
/// integers are widened, any other stored type is a type mismatch,
/// an absent key leaves `target` untouched
pub fn update_float(
    dictionary: &StatusDictionary,
    key: &'static str,
    target: &mut f32,
) -> std::result::Result<(), GlifError> {
    match dictionary.get(key) {
        Some(StatusValue::Float(value)) => {
            *target = *value;
            Ok(())
        }
        Some(StatusValue::Integer(value)) => {
            *target = *value as f32;
            Ok(())
        }
        Some(_) => Err(StatusError::TypeMismatch(key).into()),
        None => Ok(()),
    }
}

/// Overwrites `target` with the float array stored under `key` if present,
/// an absent key leaves `target` untouched
pub fn update_float_array(
    dictionary: &StatusDictionary,
    key: &'static str,
    target: &mut Vec<f32>,
) -> std::result::Result<(), GlifError> {
    match dictionary.get(key) {
        Some(StatusValue::FloatArray(values)) => {
            *target = values.clone();
            Ok(())
        }
        Some(_) => Err(StatusError::TypeMismatch(key).into()),
        None => Ok(()),
    }
}
