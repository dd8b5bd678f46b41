// SPDX-FileCopyrightText: 2026 mdlest contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

/// Core contract shared by every fitted encoder.
///
/// An encoder is fitted once at construction and read-only afterwards; the
/// description length and the fitted sample are fixed for its lifetime.
pub trait DescriptionLength {
    /// Total description length of the fitted sample, in nats.
    fn mdl(&self) -> f64;

    /// The sample the code was fitted on, as a defensive copy.
    fn sample(&self) -> Array1<f64>;
}

/// Interface for encoders that can price an independent query vector with
/// their already-fitted code.
pub trait EncodeQuery: DescriptionLength {
    /// Description length of `query` under the fitted code, in nats.
    fn encode(&self, query: &Array1<f64>) -> f64;
}

/// Optional interface for encoders that may not support query encoding.
///
/// Encoders that do support query encoding should return supports_encode() =
/// true and provide the cost via `Ok(f64)`. Encoders that do not should
/// return supports_encode() = false and an Err with a brief reason.
pub trait OptionalEncodeQuery {
    fn supports_encode(&self) -> bool;
    fn encode_opt(&self, query: &Array1<f64>) -> Result<f64, &'static str>;
}
