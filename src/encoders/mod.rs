// SPDX-FileCopyrightText: 2026 mdlest contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod approaches;
pub mod coerce;
pub mod mdl;
pub mod traits;

pub use traits::{DescriptionLength, EncodeQuery, OptionalEncodeQuery};

// Unified re-exports for the concrete encoders so tests and users can import
// mdlest::encoders::* ergonomically.
pub use approaches::gkde::GaussianKdeMdl;
pub use approaches::kde::{BandwidthRule, EstimationError, GaussianKde};
pub use approaches::multinomial::{AbsentValuePolicy, MultinomialMdl};
pub use approaches::zero_inflated::ZeroInflatedMdl;
pub use coerce::{CoerceError, NumericKind, VectorData};
