use std::ops::RangeInclusive;

use crate::error::{GeometryError, MethodError, Result};

use super::{EqMethod, EqMethodKind};

/// Curvatures offered by the fixed-curvature picker.
pub const CURVATURE_PRESETS: [f64; 5] = [0.552, 0.577, 0.602, 0.627, 0.652];

/// Range of the free-curvature slider.
pub const CURVATURE_FREE_RANGE: RangeInclusive<f64> = 0.5..=1.0;

/// Range of the Hobby tension slider.
pub const TENSION_RANGE: RangeInclusive<f64> = 0.5..=1.0;

/// Index into [`CURVATURE_PRESETS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CurvaturePreset(usize);

impl CurvaturePreset {
    /// Creates a preset selector.
    ///
    /// # Errors
    ///
    /// Returns [`MethodError::PresetOutOfRange`] if `index` is not in `0..=4`.
    pub fn new(index: usize) -> Result<Self> {
        if index < CURVATURE_PRESETS.len() {
            Ok(Self(index))
        } else {
            Err(MethodError::PresetOutOfRange(index).into())
        }
    }

    /// Returns the preset index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the curvature of this preset.
    #[must_use]
    pub fn value(self) -> f64 {
        CURVATURE_PRESETS[self.0]
    }
}

/// The equalizer state an editor keeps between invocations: which method is
/// selected and where each parameter control stands.
///
/// Only the parameter belonging to the selected method is used by
/// [`EqSettings::method`]; the others are remembered for when the user
/// switches back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqSettings {
    kind: EqMethodKind,
    preset: CurvaturePreset,
    curvature_free: f64,
    tension: f64,
}

impl Default for EqSettings {
    fn default() -> Self {
        Self {
            kind: EqMethodKind::Circle,
            preset: CurvaturePreset::default(),
            curvature_free: 0.75,
            tension: 0.75,
        }
    }
}

impl EqSettings {
    /// Rebuilds settings from raw control positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the method or preset index is unknown, or a
    /// slider value is outside its range.
    pub fn from_selectors(
        method_index: usize,
        preset_index: usize,
        curvature_free: f64,
        tension: f64,
    ) -> Result<Self> {
        Self::default()
            .with_method(EqMethodKind::from_index(method_index)?)
            .with_preset(preset_index)?
            .with_curvature_free(curvature_free)?
            .with_tension(tension)
    }

    /// Selects a method.
    #[must_use]
    pub fn with_method(self, kind: EqMethodKind) -> Self {
        Self { kind, ..self }
    }

    /// Selects a curvature preset.
    ///
    /// # Errors
    ///
    /// Returns [`MethodError::PresetOutOfRange`] for an unknown preset.
    pub fn with_preset(self, index: usize) -> Result<Self> {
        Ok(Self {
            preset: CurvaturePreset::new(index)?,
            ..self
        })
    }

    /// Sets the free curvature.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] outside
    /// [`CURVATURE_FREE_RANGE`].
    pub fn with_curvature_free(self, curvature: f64) -> Result<Self> {
        Ok(Self {
            curvature_free: check_range("curvature", curvature, &CURVATURE_FREE_RANGE)?,
            ..self
        })
    }

    /// Sets the Hobby tension.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] outside [`TENSION_RANGE`].
    pub fn with_tension(self, tension: f64) -> Result<Self> {
        Ok(Self {
            tension: check_range("tension", tension, &TENSION_RANGE)?,
            ..self
        })
    }

    /// Returns the selected method kind.
    #[must_use]
    pub fn kind(&self) -> EqMethodKind {
        self.kind
    }

    /// Returns the selected curvature preset.
    #[must_use]
    pub fn preset(&self) -> CurvaturePreset {
        self.preset
    }

    /// Returns the free curvature.
    #[must_use]
    pub fn curvature_free(&self) -> f64 {
        self.curvature_free
    }

    /// Returns the Hobby tension.
    #[must_use]
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Resolves the selected method with its parameter.
    #[must_use]
    pub fn method(&self) -> EqMethod {
        match self.kind {
            EqMethodKind::Circle => EqMethod::Circle,
            EqMethodKind::Thirds => EqMethod::Thirds,
            EqMethodKind::Balance => EqMethod::Balance,
            EqMethodKind::Fixed => EqMethod::Fixed(self.preset),
            EqMethodKind::Free => EqMethod::Free {
                curvature: self.curvature_free,
            },
            EqMethodKind::Hobby => EqMethod::Hobby {
                tension: self.tension,
            },
        }
    }
}

fn check_range(parameter: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<f64> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: *range.start(),
            max: *range.end(),
        }
        .into())
    }
}
