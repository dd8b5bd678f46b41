use crate::encoders::approaches::gkde::GaussianKdeMdl;
use crate::encoders::approaches::kde::{BandwidthRule, GaussianKde};
use crate::encoders::coerce::{CoerceError, VectorData};
use crate::encoders::traits::{DescriptionLength, OptionalEncodeQuery};
use ndarray::Array1;

/// One-trit overhead for the three-way all-zero / all-non-zero / mixed
/// symbol, `ln 3`. Fixed by the code layout, not tunable.
pub(crate) const TERNARY_CHOICE_NATS: f64 = 1.098_612_288_668_109_8;

/// Zero-inflated Gaussian-KDE description length.
///
/// The zero / non-zero pattern is priced with a ternary symbol plus the
/// Bernoulli self-information of which entries are non-zero, and the
/// non-zero values with a [`GaussianKdeMdl`] fitted on that subset; the
/// total is the sum of the two parts. Intended for non-negative count-like
/// data with an excess of exact zeros.
pub struct ZeroInflatedMdl {
    x: Array1<f64>,
    x_nonzero: Array1<f64>,
    zero_indicator_mdl: f64,
    nonzero_code: GaussianKdeMdl,
    mdl: f64,
}

impl ZeroInflatedMdl {
    /// Fit with Silverman's bandwidth rule.
    pub fn new(data: impl Into<VectorData>) -> Result<Self, CoerceError> {
        Self::new_with_rule(data, BandwidthRule::Silverman)
    }

    /// Fit with an explicit bandwidth rule for the non-zero part.
    pub fn new_with_rule(
        data: impl Into<VectorData>,
        rule: BandwidthRule,
    ) -> Result<Self, CoerceError> {
        let x = data.into().coerce()?;
        let x_nonzero: Array1<f64> = x.iter().copied().filter(|&v| v != 0.0).collect();
        let zero_indicator_mdl = zero_indicator_cost(x.len(), x_nonzero.len());
        let nonzero_code = GaussianKdeMdl::from_sample(x_nonzero.clone(), rule);
        let mdl = zero_indicator_mdl + nonzero_code.mdl();
        Ok(Self {
            x,
            x_nonzero,
            zero_indicator_mdl,
            nonzero_code,
            mdl,
        })
    }

    /// Cost of the zero / non-zero pattern, in nats.
    pub fn zero_indicator_mdl(&self) -> f64 {
        self.zero_indicator_mdl
    }

    /// Cost of the non-zero values, in nats.
    pub fn nonzero_mdl(&self) -> f64 {
        self.nonzero_code.mdl()
    }

    /// The fitted code for the non-zero values.
    pub fn nonzero_code(&self) -> &GaussianKdeMdl {
        &self.nonzero_code
    }

    /// Bandwidth of the inner density fit, when available.
    pub fn bandwidth(&self) -> Option<f64> {
        self.nonzero_code.bandwidth()
    }

    /// The inner density model, when available.
    pub fn kde(&self) -> Option<&GaussianKde> {
        self.nonzero_code.kde()
    }

    /// Defensive copy of the non-zero subset, in input order.
    pub fn sample_nonzero(&self) -> Array1<f64> {
        self.x_nonzero.clone()
    }
}

impl DescriptionLength for ZeroInflatedMdl {
    fn mdl(&self) -> f64 {
        self.mdl
    }

    fn sample(&self) -> Array1<f64> {
        self.x.clone()
    }
}

impl OptionalEncodeQuery for ZeroInflatedMdl {
    fn supports_encode(&self) -> bool {
        false
    }

    fn encode_opt(&self, _query: &Array1<f64>) -> Result<f64, &'static str> {
        Err("zero-inflated codes cannot price an independent query; fit a new model on the query sample")
    }
}

/// Indicator cost: one ternary symbol for the all-zero / all-non-zero /
/// mixed state, plus the Bernoulli self-information of which entries are
/// non-zero in the mixed case.
fn zero_indicator_cost(n: usize, k: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if k == 0 || k == n {
        return TERNARY_CHOICE_NATS;
    }
    let n_f = n as f64;
    let k_f = k as f64;
    let p = k_f / n_f;
    TERNARY_CHOICE_NATS - k_f * p.ln() - (n_f - k_f) * (1.0 - p).ln()
}
