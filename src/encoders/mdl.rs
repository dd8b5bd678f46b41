use crate::encoders::approaches::gkde::GaussianKdeMdl;
use crate::encoders::approaches::kde::BandwidthRule;
use crate::encoders::approaches::multinomial::MultinomialMdl;
use crate::encoders::approaches::zero_inflated::ZeroInflatedMdl;
use crate::encoders::coerce::{CoerceError, VectorData};

/// Description-length estimation entry points for a single feature vector.
///
/// This struct provides static constructors for the concrete encoders.
/// Every constructor validates its input (the vector must coerce to exactly
/// one dimension) and fits the encoder immediately; the returned value is
/// read-only.
pub struct Mdl;

impl Mdl {
    /// Multinomial code over the exact observed values.
    pub fn multinomial(data: impl Into<VectorData>) -> Result<MultinomialMdl, CoerceError> {
        MultinomialMdl::new(data)
    }

    /// Gaussian-KDE code with Silverman's bandwidth rule.
    pub fn gaussian_kde(data: impl Into<VectorData>) -> Result<GaussianKdeMdl, CoerceError> {
        GaussianKdeMdl::new(data)
    }

    /// Gaussian-KDE code with an explicit bandwidth rule.
    pub fn gaussian_kde_with_rule(
        data: impl Into<VectorData>,
        rule: BandwidthRule,
    ) -> Result<GaussianKdeMdl, CoerceError> {
        GaussianKdeMdl::new_with_rule(data, rule)
    }

    /// Zero-inflated Gaussian-KDE code with Silverman's bandwidth rule.
    pub fn zero_inflated(data: impl Into<VectorData>) -> Result<ZeroInflatedMdl, CoerceError> {
        ZeroInflatedMdl::new(data)
    }

    /// Zero-inflated Gaussian-KDE code with an explicit bandwidth rule for
    /// the non-zero part.
    pub fn zero_inflated_with_rule(
        data: impl Into<VectorData>,
        rule: BandwidthRule,
    ) -> Result<ZeroInflatedMdl, CoerceError> {
        ZeroInflatedMdl::new_with_rule(data, rule)
    }
}
