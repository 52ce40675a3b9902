use thiserror::Error;

/// Top-level error type for curve equalization.
#[derive(Debug, Error)]
pub enum CurveEqError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Method(#[from] MethodError),
}

/// Errors related to geometric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to selecting an equalization method.
#[derive(Debug, Error)]
pub enum MethodError {
    #[error("unknown method selector: {0}")]
    UnknownSelector(usize),

    #[error("unknown method name: {0:?}")]
    UnknownName(String),

    #[error("curvature preset {0} does not exist")]
    PresetOutOfRange(usize),
}

/// Convenience type alias for results using [`CurveEqError`].
pub type Result<T> = std::result::Result<T, CurveEqError>;
