// SPDX-FileCopyrightText: 2026 mdlest contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Encoder approaches module: groups the concrete codes and exposes them
// to the parent encoders module.

pub mod gkde;
pub mod kde;
pub mod multinomial;
pub mod zero_inflated;

pub use gkde::GaussianKdeMdl;
pub use kde::{BandwidthRule, EstimationError, GaussianKde};
pub use multinomial::{AbsentValuePolicy, MultinomialMdl};
pub use zero_inflated::ZeroInflatedMdl;
