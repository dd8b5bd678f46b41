use ndarray::{Array1, Array2, ArrayD, Ix1};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while coercing caller input into a sample vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoerceError {
    /// The input does not collapse to exactly one dimension.
    #[error("input must be a 1D array, got shape {shape:?}")]
    InvalidShape { shape: Vec<usize> },
    /// The requested coercion kind is not a numeric kind.
    #[error("requested kind {0:?} is not a supported numeric kind")]
    InvalidKind(String),
}

/// Floating-point precision a sample vector can be coerced through.
///
/// Samples are always stored as `f64`; `F32` narrows each value through
/// `f32` first, mirroring a 32-bit dtype request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericKind {
    F32,
    #[default]
    F64,
}

impl FromStr for NumericKind {
    type Err = CoerceError;

    /// Parse a dtype-style kind string: `"f4"`/`"float32"`/`"f32"` or
    /// `"f8"`/`"float64"`/`"f64"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f4" | "float32" | "f32" => Ok(NumericKind::F32),
            "f8" | "float64" | "f64" => Ok(NumericKind::F64),
            other => Err(CoerceError::InvalidKind(other.to_string())),
        }
    }
}

/// Caller-facing input for the encoders.
///
/// Owned vectors, slices and ndarray arrays of any dimensionality all
/// convert into this enum; only inputs that are exactly one-dimensional
/// coerce successfully. A `1×n` matrix is not a vector.
#[derive(Debug, Clone)]
pub enum VectorData {
    /// Already a 1D array; coercion is a no-op.
    OneDimensional(Array1<f64>),
    /// Dynamic-dimensional input validated at coercion time.
    Dynamic(ArrayD<f64>),
}

impl VectorData {
    /// Validate and convert into a 1D sample vector.
    pub fn coerce(self) -> Result<Array1<f64>, CoerceError> {
        match self {
            VectorData::OneDimensional(arr) => Ok(arr),
            VectorData::Dynamic(arr) => {
                let shape = arr.shape().to_vec();
                arr.into_dimensionality::<Ix1>()
                    .map_err(|_| CoerceError::InvalidShape { shape })
            }
        }
    }

    /// Validate and convert, round-tripping each value through the
    /// requested precision.
    pub fn coerce_with_kind(self, kind: NumericKind) -> Result<Array1<f64>, CoerceError> {
        let arr = self.coerce()?;
        Ok(match kind {
            NumericKind::F32 => arr.mapv(|v| v as f32 as f64),
            NumericKind::F64 => arr,
        })
    }
}

impl From<Array1<f64>> for VectorData {
    fn from(arr: Array1<f64>) -> Self {
        VectorData::OneDimensional(arr)
    }
}

impl From<Vec<f64>> for VectorData {
    fn from(values: Vec<f64>) -> Self {
        VectorData::OneDimensional(Array1::from(values))
    }
}

impl From<&[f64]> for VectorData {
    fn from(values: &[f64]) -> Self {
        VectorData::OneDimensional(Array1::from(values.to_vec()))
    }
}

impl From<Array2<f64>> for VectorData {
    fn from(arr: Array2<f64>) -> Self {
        VectorData::Dynamic(arr.into_dyn())
    }
}

impl From<ArrayD<f64>> for VectorData {
    fn from(arr: ArrayD<f64>) -> Self {
        VectorData::Dynamic(arr)
    }
}
