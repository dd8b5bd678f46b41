// SPDX-FileCopyrightText: 2026 mdlest contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # mdlest
//!
//! Minimum description length (MDL) estimation for numeric feature vectors:
//! score how many nats it takes to losslessly encode a sample under a
//! discrete multinomial code, a Gaussian kernel-density code, or a
//! zero-inflated hybrid of the two. Lower scores mean the data is more
//! compressible, hence less informative; the scores are intended for ranking
//! and filtering low-information features.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdlest::encoders::mdl::Mdl;
//! use mdlest::encoders::traits::DescriptionLength;
//! use ndarray::array;
//!
//! // Discrete multinomial code over the exact observed values
//! let discrete = Mdl::multinomial(array![1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();
//! assert!((discrete.mdl() - 3.3651).abs() < 1e-4);
//!
//! // Zero-inflated Gaussian-KDE code for sparse continuous data
//! let sparse = Mdl::zero_inflated(array![0.0, 0.0, 1.0, 2.0, 3.0]).unwrap();
//! assert!(sparse.mdl() > sparse.zero_indicator_mdl());
//! ```
//!
//! ## Encoders
//!
//! | Encoder | Data | Code |
//! |---------|------|------|
//! | [`MultinomialMdl`](encoders::MultinomialMdl) | discrete values | empirical cross-entropy, query encoding |
//! | [`GaussianKdeMdl`](encoders::GaussianKdeMdl) | continuous values | KDE self-cost, quantized fallback on degenerate fits |
//! | [`ZeroInflatedMdl`](encoders::ZeroInflatedMdl) | sparse non-negative values | ternary/Bernoulli indicator + KDE on the non-zero part |
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! 1. **Public API Layer**: the [`Mdl`](encoders::mdl::Mdl) factory and the
//!    capability traits in [`encoders::traits`]
//! 2. **Encoding Approaches**: the three concrete codes under
//!    [`encoders::approaches`]
//! 3. **Numeric Infrastructure**: input coercion ([`encoders::coerce`]) and
//!    the Gaussian kernel density provider ([`encoders::approaches::kde`])
//!
//! Every encoder is fitted once at construction and immutable afterwards,
//! so instances can be built and queried concurrently across independent
//! feature vectors.

pub mod encoders;
