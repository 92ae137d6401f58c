use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for invalid parameter configurations
pub enum ParameterError {
    /// Model type string or level could not be resolved to a GLIF level (1 through 5)
    InvalidModelType(String),
    /// Voltage dynamics method string is not a known solver
    InvalidDynamicsMethod(String),
    /// After-spike current vectors (`asc_init`, `k`, `asc_amps`, `r`) do not share one length
    MismatchedAfterSpikeVectors,
    /// Selected model uses after-spike currents but no channel is configured
    MissingAfterSpikeChannels,
    /// Selected model has no after-spike currents but channels are configured
    UnexpectedAfterSpikeChannels,
    /// Parameter value is NaN or infinite
    NonFiniteValue(&'static str),
    /// Refractory duration is negative or non-finite
    NegativeRefractoryPeriod,
    /// Membrane capacitance is zero, negative, or non-finite
    NonPositiveCapacitance,
    /// Membrane conductance is zero, negative, or non-finite
    NonPositiveConductance,
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ParameterError::InvalidModelType(model) =>
                write!(f, "Unknown GLIF model type: {}", model),
            ParameterError::InvalidDynamicsMethod(method) =>
                write!(f, "Unknown voltage dynamics method: {}", method),
            ParameterError::MismatchedAfterSpikeVectors =>
                write!(f, "asc_init, k, asc_amps, and r must have the same length"),
            ParameterError::MissingAfterSpikeChannels =>
                write!(f, "Model uses after-spike currents but no channel is configured"),
            ParameterError::UnexpectedAfterSpikeChannels =>
                write!(f, "Model has no after-spike currents but channels are configured"),
            ParameterError::NonFiniteValue(key) =>
                write!(f, "{} must be finite", key),
            ParameterError::NegativeRefractoryPeriod =>
                write!(f, "t_ref must be finite and non-negative"),
            ParameterError::NonPositiveCapacitance =>
                write!(f, "C_m must be finite and positive"),
            ParameterError::NonPositiveConductance =>
                write!(f, "g must be finite and positive"),
        }
    }
}

impl Debug for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for status dictionary access
pub enum StatusError {
    /// Value stored under the key has the wrong type
    TypeMismatch(&'static str),
}

impl Display for StatusError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            StatusError::TypeMismatch(key) =>
                write!(f, "Status value for {} has the wrong type", key),
        }
    }
}

impl Debug for StatusError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for logging and recording connections
pub enum ConnectionError {
    /// Requested quantity is not in the recordables registry
    UnsupportedRecordable(String),
}

impl Display for ConnectionError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ConnectionError::UnsupportedRecordable(name) =>
                write!(f, "Unsupported recordable target: {}", name),
        }
    }
}

impl Debug for ConnectionError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum GlifError {
    /// Errors related to parameter validation
    ParameterRelatedError(ParameterError),
    /// Errors related to status dictionary access
    StatusRelatedError(StatusError),
    /// Errors related to logging and recording connections
    ConnectionRelatedError(ConnectionError),
}

impl Display for GlifError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            GlifError::ParameterRelatedError(err) => write!(f, "{}", err),
            GlifError::StatusRelatedError(err) => write!(f, "{}", err),
            GlifError::ConnectionRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for GlifError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<ParameterError> for GlifError {
    fn from(err: ParameterError) -> GlifError {
        GlifError::ParameterRelatedError(err)
    }
}

impl From<StatusError> for GlifError {
    fn from(err: StatusError) -> GlifError {
        GlifError::StatusRelatedError(err)
    }
}

impl From<ConnectionError> for GlifError {
    fn from(err: ConnectionError) -> GlifError {
        GlifError::ConnectionRelatedError(err)
    }
}
