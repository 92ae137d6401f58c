//! A family of five generalized leaky integrate and fire (GLIF) models that
//! implement [`IterateAndSpike`], from a plain leaky integrator up to a model
//! with biologically defined reset rules, after-spike currents, and a voltage
//! dependent threshold, based on the classification in
//! [Teeter et al. 2018](https://www.nature.com/articles/s41467-017-02717-4).
//!
//! Each level is a strict superset of the state and behavior of the previous:
//!
//! | level | alias | reset rule | spike threshold | after-spike currents | voltage threshold |
//! |---|---|---|---|---|---|
//! | 1 | `lif` | fixed | | | |
//! | 2 | `lif_r` | linear | yes | | |
//! | 3 | `lif_asc` | fixed | | yes | |
//! | 4 | `lif_r_asc` | linear | yes | yes | |
//! | 5 | `lif_r_asc_a` | linear | yes | yes | yes |

use glif_neuron_traits::GlifNeuronBase;
use super::iterate_and_spike::{
    CurrentVoltage, GaussianFactor, GaussianParameters, IsSpiking,
    IterateAndSpike, LastFiringTime, Timestep,
};
use crate::error::{ConnectionError, GlifError, ParameterError, StatusError};
use crate::status::{
    names, update_float, update_float_array, StatusDictionary, StatusValue,
};


/// Takes in a static current as an input and iterates the given
/// neuron for a given duration, set `gaussian` to true to add
/// normally distributed noise to the input as it iterates,
/// returns the voltages from the neuron over time
pub fn run_static_input_glif<T: IterateAndSpike>(
    cell: &mut T,
    input: f32,
    gaussian: bool,
    iterations: usize,
) -> Vec<f32> {
    let mut voltages: Vec<f32> = vec![];

    for _ in 0..iterations {
        let _is_spiking = if gaussian {
            cell.iterate_and_spike(cell.get_gaussian_factor() * input)
        } else {
            cell.iterate_and_spike(input)
        };

        voltages.push(cell.get_current_voltage());
    }

    voltages
}

/// The five GLIF model levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlifModel {
    /// Level 1, leaky integrate and fire with a fixed reset voltage
    Lif,
    /// Level 2, adds the linear reset rule and a spike-induced threshold component
    LifR,
    /// Level 3, level 1 plus after-spike currents
    LifAsc,
    /// Level 4, level 2 plus after-spike currents
    LifRAsc,
    /// Level 5, level 4 plus a voltage-dependent threshold component
    LifRAscA,
}

impl GlifModel {
    /// Resolves a model alias to a level, accepts short names (`"lif_r"`),
    /// prefixed names (`"glif_lif_r"`), and numeric strings (`"2"`)
    pub fn parse(value: &str) -> Result<Self, GlifError> {
        match value {
            "lif" | "glif_lif" | "1" => Ok(GlifModel::Lif),
            "lif_r" | "glif_lif_r" | "2" => Ok(GlifModel::LifR),
            "lif_asc" | "glif_lif_asc" | "3" => Ok(GlifModel::LifAsc),
            "lif_r_asc" | "glif_lif_r_asc" | "4" => Ok(GlifModel::LifRAsc),
            "lif_r_asc_a" | "glif_lif_r_asc_a" | "5" => Ok(GlifModel::LifRAscA),
            _ => Err(ParameterError::InvalidModelType(value.to_string()).into()),
        }
    }

    /// Resolves a numeric level (1 through 5) to a model
    pub fn from_level(level: i64) -> Result<Self, GlifError> {
        match level {
            1 => Ok(GlifModel::Lif),
            2 => Ok(GlifModel::LifR),
            3 => Ok(GlifModel::LifAsc),
            4 => Ok(GlifModel::LifRAsc),
            5 => Ok(GlifModel::LifRAscA),
            _ => Err(ParameterError::InvalidModelType(level.to_string()).into()),
        }
    }

    /// Converts the model to its numeric level
    pub fn level(&self) -> u8 {
        match self {
            GlifModel::Lif => 1,
            GlifModel::LifR => 2,
            GlifModel::LifAsc => 3,
            GlifModel::LifRAsc => 4,
            GlifModel::LifRAscA => 5,
        }
    }

    /// Converts the model to its short alias
    pub fn to_str(&self) -> &'static str {
        match self {
            GlifModel::Lif => "lif",
            GlifModel::LifR => "lif_r",
            GlifModel::LifAsc => "lif_asc",
            GlifModel::LifRAsc => "lif_r_asc",
            GlifModel::LifRAscA => "lif_r_asc_a",
        }
    }

    /// Whether the model evolves a spike-induced threshold component and
    /// resets voltage with the linear rule
    pub fn uses_spike_threshold(&self) -> bool {
        matches!(self, GlifModel::LifR | GlifModel::LifRAsc | GlifModel::LifRAscA)
    }

    /// Whether the model accumulates after-spike currents
    pub fn uses_after_spike_currents(&self) -> bool {
        matches!(self, GlifModel::LifAsc | GlifModel::LifRAsc | GlifModel::LifRAscA)
    }

    /// Whether the model evolves a voltage-dependent threshold component
    pub fn uses_voltage_threshold(&self) -> bool {
        matches!(self, GlifModel::LifRAscA)
    }
}

/// Solution methods for the membrane voltage dynamics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoltageDynamicsMethod {
    /// Explicit first-order update, accurate only for timesteps well below the
    /// membrane time constant
    LinearForwardEuler,
    /// Closed-form decay toward the steady-state voltage, exact for any timestep
    LinearExact,
}

impl VoltageDynamicsMethod {
    /// Resolves a method name to a solver
    pub fn parse(value: &str) -> Result<Self, GlifError> {
        match value {
            "linear_forward_euler" => Ok(VoltageDynamicsMethod::LinearForwardEuler),
            "linear_exact" => Ok(VoltageDynamicsMethod::LinearExact),
            _ => Err(ParameterError::InvalidDynamicsMethod(value.to_string()).into()),
        }
    }

    /// Converts the method to its name
    pub fn to_str(&self) -> &'static str {
        match self {
            VoltageDynamicsMethod::LinearForwardEuler => "linear_forward_euler",
            VoltageDynamicsMethod::LinearExact => "linear_exact",
        }
    }
}

/// Physical constants of a GLIF neuron, set once per calibration and
/// re-validated as a whole whenever changed
#[derive(Debug, Clone)]
pub struct GlifParameters {
    /// Membrane voltage following spike (mV), levels 1 and 3
    pub v_reset: f32,
    /// Asymptotic firing threshold (mV)
    pub th_inf: f32,
    /// Membrane conductance (nS)
    pub g: f32,
    /// Resting membrane potential (mV)
    pub e_l: f32,
    /// Membrane capacitance (pF)
    pub c_m: f32,
    /// Refractory duration (ms)
    pub t_ref: f32,
    /// Threshold addition following spike (mV), levels 2, 4, and 5
    pub a_spike: f32,
    /// Spike-induced threshold decay rate (1/ms), levels 2, 4, and 5
    pub b_spike: f32,
    /// Voltage fraction coefficient following spike, levels 2, 4, and 5
    pub voltage_reset_a: f32,
    /// Voltage addition following spike (mV), levels 2, 4, and 5
    pub voltage_reset_b: f32,
    /// Adaptation index of the voltage-dependent threshold component (1/ms), level 5
    pub a_voltage: f32,
    /// Decay rate of the voltage-dependent threshold component (1/ms), level 5
    pub b_voltage: f32,
    /// Initial values of after-spike currents (pA), one entry per channel
    pub asc_init: Vec<f32>,
    /// After-spike current decay rates (1/ms), one entry per channel
    pub k: Vec<f32>,
    /// After-spike current amplitudes (pA), one entry per channel
    pub asc_amps: Vec<f32>,
    /// After-spike current reset-carryover fractions, one entry per channel
    pub r: Vec<f32>,
    /// Selected voltage dynamics solver
    pub v_dynamics_method: VoltageDynamicsMethod,
    /// Selected model level
    pub glif_model: GlifModel,
}

impl Default for GlifParameters {
    fn default() -> Self {
        GlifParameters {
            v_reset: 0.0, // membrane voltage following spike (mV)
            th_inf: 26.5, // asymptotic threshold (mV)
            g: 9.43, // membrane conductance (nS)
            e_l: 0.0, // resting potential (mV)
            c_m: 58.72, // membrane capacitance (pF)
            t_ref: 0.5, // refractory duration (ms)
            a_spike: 0.37, // threshold addition following spike (mV)
            b_spike: 0.009, // spike-induced threshold decay rate (1/ms)
            voltage_reset_a: 0.20,
            voltage_reset_b: 0.51, // voltage addition following spike (mV)
            a_voltage: 0.005, // adaptation index of threshold (1/ms)
            b_voltage: 0.09, // voltage-induced threshold decay rate (1/ms)
            asc_init: vec![0.0, 0.0], // initial after-spike currents (pA)
            k: vec![0.003, 0.1], // after-spike current decay rates (1/ms)
            asc_amps: vec![-9.18, -198.94], // after-spike current amplitudes (pA)
            r: vec![1.0, 1.0], // after-spike current carryover fractions
            v_dynamics_method: VoltageDynamicsMethod::LinearForwardEuler,
            glif_model: GlifModel::LifRAscA,
        }
    }
}

fn check_finite(value: f32, key: &'static str) -> Result<(), GlifError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFiniteValue(key).into())
    }
}

impl GlifParameters {
    /// Returns the default parameters restricted to the given model level,
    /// levels without after-spike currents get empty channel vectors
    pub fn for_model(glif_model: GlifModel) -> Self {
        let mut params = GlifParameters {
            glif_model,
            ..Default::default()
        };

        if !glif_model.uses_after_spike_currents() {
            params.asc_init.clear();
            params.k.clear();
            params.asc_amps.clear();
            params.r.clear();
        }

        params
    }

    /// Checks every physical constant and the after-spike current vector
    /// lengths for consistency with the selected model level
    pub fn validate(&self) -> Result<(), GlifError> {
        check_finite(self.v_reset, names::V_RESET)?;
        check_finite(self.th_inf, names::TH_INF)?;
        check_finite(self.e_l, names::E_L)?;
        check_finite(self.a_spike, names::A_SPIKE)?;
        check_finite(self.b_spike, names::B_SPIKE)?;
        check_finite(self.voltage_reset_a, names::VOLTAGE_RESET_A)?;
        check_finite(self.voltage_reset_b, names::VOLTAGE_RESET_B)?;
        check_finite(self.a_voltage, names::A_VOLTAGE)?;
        check_finite(self.b_voltage, names::B_VOLTAGE)?;

        if !self.g.is_finite() || self.g <= 0.0 {
            return Err(ParameterError::NonPositiveConductance.into());
        }
        if !self.c_m.is_finite() || self.c_m <= 0.0 {
            return Err(ParameterError::NonPositiveCapacitance.into());
        }
        if !self.t_ref.is_finite() || self.t_ref < 0.0 {
            return Err(ParameterError::NegativeRefractoryPeriod.into());
        }

        let channels = self.asc_init.len();
        if self.k.len() != channels || self.asc_amps.len() != channels || self.r.len() != channels {
            return Err(ParameterError::MismatchedAfterSpikeVectors.into());
        }

        for (key, values) in [
            (names::ASC_INIT, &self.asc_init),
            (names::K, &self.k),
            (names::ASC_AMPS, &self.asc_amps),
            (names::R, &self.r),
        ] {
            if values.iter().any(|value| !value.is_finite()) {
                return Err(ParameterError::NonFiniteValue(key).into());
            }
        }

        if self.glif_model.uses_after_spike_currents() {
            if channels == 0 {
                return Err(ParameterError::MissingAfterSpikeChannels.into());
            }
        } else if channels != 0 {
            return Err(ParameterError::UnexpectedAfterSpikeChannels.into());
        }

        Ok(())
    }

    /// Returns a validated copy with the updates from the given status
    /// dictionary applied, the committed parameters are untouched on error
    pub fn with_status(&self, dictionary: &StatusDictionary) -> Result<GlifParameters, GlifError> {
        let mut updated = self.clone();

        update_float(dictionary, names::V_RESET, &mut updated.v_reset)?;
        update_float(dictionary, names::TH_INF, &mut updated.th_inf)?;
        update_float(dictionary, names::G, &mut updated.g)?;
        update_float(dictionary, names::E_L, &mut updated.e_l)?;
        update_float(dictionary, names::C_M, &mut updated.c_m)?;
        update_float(dictionary, names::T_REF, &mut updated.t_ref)?;
        update_float(dictionary, names::A_SPIKE, &mut updated.a_spike)?;
        update_float(dictionary, names::B_SPIKE, &mut updated.b_spike)?;
        update_float(dictionary, names::VOLTAGE_RESET_A, &mut updated.voltage_reset_a)?;
        update_float(dictionary, names::VOLTAGE_RESET_B, &mut updated.voltage_reset_b)?;
        update_float(dictionary, names::A_VOLTAGE, &mut updated.a_voltage)?;
        update_float(dictionary, names::B_VOLTAGE, &mut updated.b_voltage)?;
        update_float_array(dictionary, names::ASC_INIT, &mut updated.asc_init)?;
        update_float_array(dictionary, names::K, &mut updated.k)?;
        update_float_array(dictionary, names::ASC_AMPS, &mut updated.asc_amps)?;
        update_float_array(dictionary, names::R, &mut updated.r)?;

        if let Some(value) = dictionary.get(names::V_DYNAMICS_METHOD) {
            updated.v_dynamics_method = match value {
                StatusValue::Text(method) => VoltageDynamicsMethod::parse(method)?,
                _ => return Err(StatusError::TypeMismatch(names::V_DYNAMICS_METHOD).into()),
            };
        }

        if let Some(value) = dictionary.get(names::GLIF_MODEL) {
            updated.glif_model = match value {
                StatusValue::Text(model) => GlifModel::parse(model)?,
                StatusValue::Integer(level) => GlifModel::from_level(*level)?,
                _ => return Err(StatusError::TypeMismatch(names::GLIF_MODEL).into()),
            };
        }

        updated.validate()?;

        Ok(updated)
    }

    /// Writes every parameter into the given status dictionary
    pub fn write_status(&self, dictionary: &mut StatusDictionary) {
        dictionary.insert(names::V_RESET.to_string(), StatusValue::Float(self.v_reset));
        dictionary.insert(names::TH_INF.to_string(), StatusValue::Float(self.th_inf));
        dictionary.insert(names::G.to_string(), StatusValue::Float(self.g));
        dictionary.insert(names::E_L.to_string(), StatusValue::Float(self.e_l));
        dictionary.insert(names::C_M.to_string(), StatusValue::Float(self.c_m));
        dictionary.insert(names::T_REF.to_string(), StatusValue::Float(self.t_ref));
        dictionary.insert(names::A_SPIKE.to_string(), StatusValue::Float(self.a_spike));
        dictionary.insert(names::B_SPIKE.to_string(), StatusValue::Float(self.b_spike));
        dictionary.insert(
            names::VOLTAGE_RESET_A.to_string(),
            StatusValue::Float(self.voltage_reset_a),
        );
        dictionary.insert(
            names::VOLTAGE_RESET_B.to_string(),
            StatusValue::Float(self.voltage_reset_b),
        );
        dictionary.insert(names::A_VOLTAGE.to_string(), StatusValue::Float(self.a_voltage));
        dictionary.insert(names::B_VOLTAGE.to_string(), StatusValue::Float(self.b_voltage));
        dictionary.insert(
            names::ASC_INIT.to_string(),
            StatusValue::FloatArray(self.asc_init.clone()),
        );
        dictionary.insert(names::K.to_string(), StatusValue::FloatArray(self.k.clone()));
        dictionary.insert(
            names::ASC_AMPS.to_string(),
            StatusValue::FloatArray(self.asc_amps.clone()),
        );
        dictionary.insert(names::R.to_string(), StatusValue::FloatArray(self.r.clone()));
        dictionary.insert(
            names::V_DYNAMICS_METHOD.to_string(),
            StatusValue::Text(self.v_dynamics_method.to_str().to_string()),
        );
        dictionary.insert(
            names::GLIF_MODEL.to_string(),
            StatusValue::Text(self.glif_model.to_str().to_string()),
        );
    }
}

/// The evolving numeric state of a GLIF neuron
#[derive(Debug, Clone)]
pub struct GlifState {
    /// Membrane potential (mV)
    pub v_m: f32,
    /// After-spike currents (pA), one entry per channel
    pub ascurrents: Vec<f32>,
    /// Cached sum of after-spike currents (pA)
    pub ascurrents_sum: f32,
    /// Current firing threshold (mV)
    pub threshold: f32,
    /// Last applied external input current (pA)
    pub i: f32,
}

impl GlifState {
    /// Initializes state from the given parameters, voltage starts at rest
    /// and the threshold at its asymptote
    pub fn new(params: &GlifParameters) -> Self {
        GlifState {
            v_m: params.e_l,
            ascurrents: params.asc_init.clone(),
            ascurrents_sum: params.asc_init.iter().sum(),
            threshold: params.th_inf,
            i: 0.0,
        }
    }

    /// Returns a validated copy with the updates from the given status
    /// dictionary applied, checked against the already validated parameter copy
    pub fn with_status(
        &self,
        dictionary: &StatusDictionary,
        params: &GlifParameters,
    ) -> Result<GlifState, GlifError> {
        let mut updated = self.clone();

        update_float(dictionary, names::V_M, &mut updated.v_m)?;
        update_float(dictionary, names::THRESHOLD, &mut updated.threshold)?;
        update_float(dictionary, names::I, &mut updated.i)?;

        if dictionary.contains_key(names::ASCURRENTS) {
            update_float_array(dictionary, names::ASCURRENTS, &mut updated.ascurrents)?;
            if updated.ascurrents.len() != params.asc_init.len() {
                return Err(ParameterError::MismatchedAfterSpikeVectors.into());
            }
        } else if updated.ascurrents.len() != params.asc_init.len() {
            // channel count changed without an explicit override, restart the
            // currents from the configured initial values
            updated.ascurrents = params.asc_init.clone();
        }

        check_finite(updated.v_m, names::V_M)?;
        check_finite(updated.threshold, names::THRESHOLD)?;
        if updated.ascurrents.iter().any(|value| !value.is_finite()) {
            return Err(ParameterError::NonFiniteValue(names::ASCURRENTS).into());
        }

        updated.ascurrents_sum = updated.ascurrents.iter().sum();

        Ok(updated)
    }

    /// Writes every state field into the given status dictionary
    pub fn write_status(&self, dictionary: &mut StatusDictionary) {
        dictionary.insert(names::V_M.to_string(), StatusValue::Float(self.v_m));
        dictionary.insert(
            names::ASCURRENTS.to_string(),
            StatusValue::FloatArray(self.ascurrents.clone()),
        );
        dictionary.insert(
            names::ASCURRENTS_SUM.to_string(),
            StatusValue::Float(self.ascurrents_sum),
        );
        dictionary.insert(names::THRESHOLD.to_string(), StatusValue::Float(self.threshold));
        dictionary.insert(names::I.to_string(), StatusValue::Float(self.i));
    }
}

/// Quantities derived from parameters at calibration time, invalid until
/// [`GlifNeuron::calibrate`] has run
#[derive(Debug, Clone)]
pub struct GlifVariables {
    /// Refractory countdown in simulation steps
    pub t_ref_remaining: f32,
    /// Total refractory duration in simulation steps
    pub t_ref_total: f32,
    /// Spike-induced threshold component (mV)
    pub last_spike: f32,
    /// Voltage-induced threshold component (mV)
    pub last_voltage: f32,
    /// Resolved voltage dynamics solver
    pub method: VoltageDynamicsMethod,
    /// Resolved model level the dispatch runs
    pub model: GlifModel,
    /// Whether calibration has run since construction
    pub calibrated: bool,
}

impl Default for GlifVariables {
    fn default() -> Self {
        GlifVariables {
            t_ref_remaining: 0.0,
            t_ref_total: 0.0,
            last_spike: 0.0,
            last_voltage: 0.0,
            method: VoltageDynamicsMethod::LinearForwardEuler,
            model: GlifModel::LifRAscA,
            calibrated: false,
        }
    }
}

/// A generalized leaky integrate and fire neuron, the active model level and
/// solver are resolved once per calibration and applied every step
#[derive(Debug, Clone, GlifNeuronBase)]
pub struct GlifNeuron {
    /// Physical constants, re-validate and recalibrate after editing directly
    pub params: GlifParameters,
    /// Evolving numeric state
    pub state: GlifState,
    /// Derived variables recomputed at calibration
    pub variables: GlifVariables,
    /// Time step (ms)
    pub dt: f32,
    /// Whether the neuron is spiking
    pub is_spiking: bool,
    /// Sub-step offset of the last emitted spike (ms from step start),
    /// `None` when the last step did not spike
    pub last_spike_offset: Option<f32>,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
    /// Parameters used in generating noise
    pub gaussian_params: GaussianParameters,
}

impl Default for GlifNeuron {
    fn default() -> Self {
        GlifNeuron::lif_r_asc_a()
    }
}

/// Reads the value of a connected recordable from a neuron
pub type RecordableAccessor = fn(&GlifNeuron) -> f32;

fn get_v_m(neuron: &GlifNeuron) -> f32 {
    neuron.state.v_m
}

fn get_ascurrents_sum(neuron: &GlifNeuron) -> f32 {
    neuron.state.ascurrents_sum
}

fn get_threshold(neuron: &GlifNeuron) -> f32 {
    neuron.state.threshold
}

fn get_input_current(neuron: &GlifNeuron) -> f32 {
    neuron.state.i
}

// Mapping of recordables names to access functions
const RECORDABLES: [(&str, RecordableAccessor); 4] = [
    (names::V_M, get_v_m),
    (names::ASCURRENTS_SUM, get_ascurrents_sum),
    (names::THRESHOLD, get_threshold),
    (names::I, get_input_current),
];

impl GlifNeuron {
    /// Builds a calibrated neuron from validated parameters
    pub fn new(params: GlifParameters, dt: f32) -> Result<Self, GlifError> {
        params.validate()?;

        Ok(GlifNeuron::from_valid_parts(params, dt))
    }

    fn from_valid_parts(params: GlifParameters, dt: f32) -> Self {
        let state = GlifState::new(&params);
        let mut neuron = GlifNeuron {
            params,
            state,
            variables: GlifVariables::default(),
            dt,
            is_spiking: false,
            last_spike_offset: None,
            last_firing_time: None,
            gaussian_params: GaussianParameters::default(),
        };

        neuron.calibrate();

        neuron
    }

    /// Returns a calibrated level 1 neuron with default parameters
    pub fn lif() -> Self {
        GlifNeuron::from_valid_parts(GlifParameters::for_model(GlifModel::Lif), 0.1)
    }

    /// Returns a calibrated level 2 neuron with default parameters
    pub fn lif_r() -> Self {
        GlifNeuron::from_valid_parts(GlifParameters::for_model(GlifModel::LifR), 0.1)
    }

    /// Returns a calibrated level 3 neuron with default parameters
    pub fn lif_asc() -> Self {
        GlifNeuron::from_valid_parts(GlifParameters::for_model(GlifModel::LifAsc), 0.1)
    }

    /// Returns a calibrated level 4 neuron with default parameters
    pub fn lif_r_asc() -> Self {
        GlifNeuron::from_valid_parts(GlifParameters::for_model(GlifModel::LifRAsc), 0.1)
    }

    /// Returns a calibrated level 5 neuron with default parameters
    pub fn lif_r_asc_a() -> Self {
        GlifNeuron::from_valid_parts(GlifParameters::for_model(GlifModel::LifRAscA), 0.1)
    }

    /// Recomputes the derived variables from the committed parameters,
    /// idempotent for unchanged parameters
    ///
    /// The refractory duration is converted to whole simulation steps by
    /// nearest-step rounding (ties away from zero), floored at one step for
    /// any positive duration. A running refractory countdown is preserved;
    /// otherwise the countdown is reset to zero. Voltage, after-spike
    /// currents, and the threshold value itself are untouched, the threshold
    /// is only re-split into its components (positive excess over `th_inf`
    /// is attributed to the spike component).
    pub fn calibrate(&mut self) {
        self.variables.model = self.params.glif_model;
        self.variables.method = self.params.v_dynamics_method;

        self.variables.t_ref_total = if self.params.t_ref > 0.0 {
            (self.params.t_ref / self.dt).round().max(1.0)
        } else {
            0.0
        };
        if self.variables.t_ref_remaining <= 0.0 {
            self.variables.t_ref_remaining = 0.0;
        }

        let excess = self.state.threshold - self.params.th_inf;
        self.variables.last_spike = excess.max(0.0);
        self.variables.last_voltage = excess.min(0.0);

        self.variables.calibrated = true;
    }

    /// Reinitializes state from the committed parameters and recalibrates
    pub fn reset(&mut self) {
        self.state = GlifState::new(&self.params);
        self.variables = GlifVariables::default();
        self.is_spiking = false;
        self.last_spike_offset = None;
        self.last_firing_time = None;

        self.calibrate();
    }

    /// Names of the quantities a logger may record
    pub fn recordables() -> Vec<&'static str> {
        RECORDABLES.iter().map(|(name, _)| *name).collect()
    }

    /// Resolves a recordable name to its accessor, unknown names are rejected
    /// here at connection time rather than during simulation
    pub fn connect_recordable(name: &str) -> Result<RecordableAccessor, GlifError> {
        RECORDABLES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, accessor)| *accessor)
            .ok_or_else(|| ConnectionError::UnsupportedRecordable(name.to_string()).into())
    }

    /// Reads a recordable by name
    pub fn get_recordable(&self, name: &str) -> Result<f32, GlifError> {
        Ok(GlifNeuron::connect_recordable(name)?(self))
    }

    /// Reports every parameter and state field plus the recordables list
    pub fn get_status(&self) -> StatusDictionary {
        let mut dictionary = StatusDictionary::new();

        self.params.write_status(&mut dictionary);
        self.state.write_status(&mut dictionary);
        dictionary.insert(
            names::RECORDABLES.to_string(),
            StatusValue::TextArray(
                GlifNeuron::recordables().iter().map(|name| name.to_string()).collect(),
            ),
        );

        dictionary
    }

    /// Applies a status dictionary update, all or nothing: parameter and
    /// state copies are validated first and committed together, then the
    /// derived variables are recalibrated
    pub fn set_status(&mut self, dictionary: &StatusDictionary) -> Result<(), GlifError> {
        // temporary copies in case of errors
        let params = self.params.with_status(dictionary)?;
        let state = self.state.with_status(dictionary, &params)?;

        // if we get here, temporaries contain a consistent set of properties
        self.params = params;
        self.state = state;
        self.calibrate();

        Ok(())
    }

    /// Advances the membrane voltage one step with the selected solver given
    /// the total driving current (external input plus after-spike currents)
    fn voltage_step(&self, voltage: f32, total_current: f32) -> f32 {
        match self.variables.method {
            VoltageDynamicsMethod::LinearForwardEuler => {
                voltage
                    + self.dt * (-self.params.g * (voltage - self.params.e_l) + total_current)
                        / self.params.c_m
            }
            VoltageDynamicsMethod::LinearExact => {
                let v_inf = self.params.e_l + total_current / self.params.g;

                v_inf + (voltage - v_inf) * (-self.dt * self.params.g / self.params.c_m).exp()
            }
        }
    }

    /// Linear-interpolated sub-step offset of a threshold crossing (ms)
    fn spike_offset(&self, previous_voltage: f32, voltage: f32, threshold: f32) -> f32 {
        let rise = voltage - previous_voltage;
        if rise <= 0.0 {
            return 0.0;
        }

        (((threshold - previous_voltage) / rise) * self.dt).clamp(0.0, self.dt)
    }

    /// Counts the refractory window down by one step, returns `true` while
    /// the voltage stays clamped, the step in which the countdown expires
    /// integrates normally
    fn advance_refractory(&mut self) -> bool {
        if self.variables.t_ref_remaining <= 0.0 {
            return false;
        }

        self.variables.t_ref_remaining -= 1.0;

        self.variables.t_ref_remaining > 0.0
    }

    fn decay_spike_component(&mut self) {
        self.variables.last_spike *= (-self.params.b_spike * self.dt).exp();
    }

    /// Evolves the voltage-induced threshold component from the voltage at
    /// the start of the step
    fn update_voltage_component(&mut self, voltage: f32) {
        self.variables.last_voltage += self.dt
            * (self.params.a_voltage * (voltage - self.params.e_l)
                - self.params.b_voltage * self.variables.last_voltage);
    }

    fn decay_after_spike_currents(&mut self) {
        for (current, k) in self.state.ascurrents.iter_mut().zip(self.params.k.iter()) {
            *current *= (-k * self.dt).exp();
        }

        self.state.ascurrents_sum = self.state.ascurrents.iter().sum();
    }

    fn reset_after_spike_currents(&mut self) {
        for ((current, carryover), amplitude) in self
            .state
            .ascurrents
            .iter_mut()
            .zip(self.params.r.iter())
            .zip(self.params.asc_amps.iter())
        {
            *current = *current * carryover + amplitude;
        }

        self.state.ascurrents_sum = self.state.ascurrents.iter().sum();
    }

    /// Level 1: fixed threshold, fixed reset voltage
    fn update_glif1(&mut self, input_current: f32) -> bool {
        self.state.i = input_current;
        self.state.threshold = self.params.th_inf;
        self.last_spike_offset = None;

        if self.advance_refractory() {
            self.state.v_m = self.params.v_reset;
            self.is_spiking = false;

            return false;
        }

        let previous_voltage = self.state.v_m;
        self.state.v_m = self.voltage_step(previous_voltage, input_current);

        let mut is_spiking = false;

        if self.state.v_m >= self.state.threshold {
            is_spiking = true;
            self.last_spike_offset =
                Some(self.spike_offset(previous_voltage, self.state.v_m, self.state.threshold));
            self.state.v_m = self.params.v_reset;
            self.variables.t_ref_remaining = self.variables.t_ref_total;
        }

        self.is_spiking = is_spiking;

        is_spiking
    }

    /// Level 2: linear reset rule and spike-induced threshold component
    fn update_glif2(&mut self, input_current: f32) -> bool {
        self.state.i = input_current;
        self.last_spike_offset = None;

        if self.advance_refractory() {
            // voltage stays at the post-reset value, the threshold component
            // keeps decaying
            self.decay_spike_component();
            self.state.threshold = self.params.th_inf + self.variables.last_spike;
            self.is_spiking = false;

            return false;
        }

        let previous_voltage = self.state.v_m;
        self.state.v_m = self.voltage_step(previous_voltage, input_current);
        self.decay_spike_component();
        self.state.threshold = self.params.th_inf + self.variables.last_spike;

        let mut is_spiking = false;

        if self.state.v_m >= self.state.threshold {
            is_spiking = true;
            self.last_spike_offset =
                Some(self.spike_offset(previous_voltage, self.state.v_m, self.state.threshold));
            self.state.v_m =
                self.params.voltage_reset_a * self.state.v_m + self.params.voltage_reset_b;
            self.variables.last_spike += self.params.a_spike;
            self.state.threshold = self.params.th_inf + self.variables.last_spike;
            self.variables.t_ref_remaining = self.variables.t_ref_total;
        }

        self.is_spiking = is_spiking;

        is_spiking
    }

    /// Level 3: fixed reset voltage plus after-spike currents
    fn update_glif3(&mut self, input_current: f32) -> bool {
        self.state.i = input_current;
        self.state.threshold = self.params.th_inf;
        self.last_spike_offset = None;

        if self.advance_refractory() {
            self.state.v_m = self.params.v_reset;
            self.decay_after_spike_currents();
            self.is_spiking = false;

            return false;
        }

        let previous_voltage = self.state.v_m;
        self.state.v_m =
            self.voltage_step(previous_voltage, input_current + self.state.ascurrents_sum);
        self.decay_after_spike_currents();

        let mut is_spiking = false;

        if self.state.v_m >= self.state.threshold {
            is_spiking = true;
            self.last_spike_offset =
                Some(self.spike_offset(previous_voltage, self.state.v_m, self.state.threshold));
            self.state.v_m = self.params.v_reset;
            self.reset_after_spike_currents();
            self.variables.t_ref_remaining = self.variables.t_ref_total;
        }

        self.is_spiking = is_spiking;

        is_spiking
    }

    /// Level 4: linear reset rule, spike-induced threshold component, and
    /// after-spike currents
    fn update_glif4(&mut self, input_current: f32) -> bool {
        self.state.i = input_current;
        self.last_spike_offset = None;

        if self.advance_refractory() {
            self.decay_spike_component();
            self.state.threshold = self.params.th_inf + self.variables.last_spike;
            self.decay_after_spike_currents();
            self.is_spiking = false;

            return false;
        }

        let previous_voltage = self.state.v_m;
        self.state.v_m =
            self.voltage_step(previous_voltage, input_current + self.state.ascurrents_sum);
        self.decay_spike_component();
        self.state.threshold = self.params.th_inf + self.variables.last_spike;
        self.decay_after_spike_currents();

        let mut is_spiking = false;

        if self.state.v_m >= self.state.threshold {
            is_spiking = true;
            self.last_spike_offset =
                Some(self.spike_offset(previous_voltage, self.state.v_m, self.state.threshold));
            self.state.v_m =
                self.params.voltage_reset_a * self.state.v_m + self.params.voltage_reset_b;
            self.variables.last_spike += self.params.a_spike;
            self.state.threshold = self.params.th_inf + self.variables.last_spike;
            self.reset_after_spike_currents();
            self.variables.t_ref_remaining = self.variables.t_ref_total;
        }

        self.is_spiking = is_spiking;

        is_spiking
    }

    /// Level 5: level 4 plus a voltage-dependent threshold component
    fn update_glif5(&mut self, input_current: f32) -> bool {
        self.state.i = input_current;
        self.last_spike_offset = None;

        if self.advance_refractory() {
            let clamped_voltage = self.state.v_m;
            self.decay_spike_component();
            self.update_voltage_component(clamped_voltage);
            self.state.threshold =
                self.params.th_inf + self.variables.last_spike + self.variables.last_voltage;
            self.decay_after_spike_currents();
            self.is_spiking = false;

            return false;
        }

        let previous_voltage = self.state.v_m;
        self.state.v_m =
            self.voltage_step(previous_voltage, input_current + self.state.ascurrents_sum);
        self.decay_spike_component();
        self.update_voltage_component(previous_voltage);
        self.state.threshold =
            self.params.th_inf + self.variables.last_spike + self.variables.last_voltage;
        self.decay_after_spike_currents();

        let mut is_spiking = false;

        if self.state.v_m >= self.state.threshold {
            is_spiking = true;
            self.last_spike_offset =
                Some(self.spike_offset(previous_voltage, self.state.v_m, self.state.threshold));
            self.state.v_m =
                self.params.voltage_reset_a * self.state.v_m + self.params.voltage_reset_b;
            self.variables.last_spike += self.params.a_spike;
            self.state.threshold =
                self.params.th_inf + self.variables.last_spike + self.variables.last_voltage;
            self.reset_after_spike_currents();
            self.variables.t_ref_remaining = self.variables.t_ref_total;
        }

        self.is_spiking = is_spiking;

        is_spiking
    }
}

impl Timestep for GlifNeuron {
    fn get_dt(&self) -> f32 {
        self.dt
    }

    fn set_dt(&mut self, dt: f32) {
        self.dt = dt;
        self.calibrate();
    }
}

impl IterateAndSpike for GlifNeuron {
    fn iterate_and_spike(&mut self, input_current: f32) -> bool {
        // updating an uncalibrated neuron is a driver defect, not a
        // recoverable condition
        assert!(
            self.variables.calibrated,
            "GLIF neuron updated before calibration"
        );

        match self.variables.model {
            GlifModel::Lif => self.update_glif1(input_current),
            GlifModel::LifR => self.update_glif2(input_current),
            GlifModel::LifAsc => self.update_glif3(input_current),
            GlifModel::LifRAsc => self.update_glif4(input_current),
            GlifModel::LifRAscA => self.update_glif5(input_current),
        }
    }
}
