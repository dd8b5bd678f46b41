use crate::encoders::approaches::kde::{BandwidthRule, GaussianKde};
use crate::encoders::approaches::multinomial::MultinomialMdl;
use crate::encoders::coerce::{CoerceError, VectorData};
use crate::encoders::traits::{DescriptionLength, OptionalEncodeQuery};
use ndarray::Array1;

/// One-bit overhead for the binary choice between the continuous code and
/// its alternative, `ln 2`. Fixed by the code layout, not tunable.
pub(crate) const MODEL_CHOICE_NATS: f64 = std::f64::consts::LN_2;

/// Scale applied before truncation when quantizing a sample for the
/// degenerate-fit fallback code.
const FALLBACK_QUANT_SCALE: f64 = 100.0;

/// Description length of a sample under its own Gaussian kernel density
/// estimate.
///
/// The cost is the negated sum of log-densities at the sample points plus a
/// one-bit model-choice overhead. When the density fit fails (degenerate
/// input such as zero variance or a single observation), the sample is
/// quantized (scaled by 100, truncated toward zero) and priced with a
/// multinomial code instead; [`bandwidth`](Self::bandwidth) and
/// [`kde`](Self::kde) then report unavailable.
///
/// Pricing an independent query through a fitted density is not supported;
/// callers needing a query cost fit a fresh model on the query sample.
pub struct GaussianKdeMdl {
    x: Array1<f64>,
    kde: Option<GaussianKde>,
    fallback: Option<MultinomialMdl>,
    mdl: f64,
}

impl GaussianKdeMdl {
    /// Fit with Silverman's bandwidth rule.
    pub fn new(data: impl Into<VectorData>) -> Result<Self, CoerceError> {
        Self::new_with_rule(data, BandwidthRule::Silverman)
    }

    /// Fit with an explicit bandwidth rule.
    pub fn new_with_rule(
        data: impl Into<VectorData>,
        rule: BandwidthRule,
    ) -> Result<Self, CoerceError> {
        Ok(Self::from_sample(data.into().coerce()?, rule))
    }

    /// Fit from an already-validated sample vector.
    pub(crate) fn from_sample(x: Array1<f64>, rule: BandwidthRule) -> Self {
        if x.is_empty() {
            // Nothing to encode; an enclosing code covers the empty case.
            return Self {
                x,
                kde: None,
                fallback: None,
                mdl: 0.0,
            };
        }

        match GaussianKde::fit(&x, rule) {
            Ok(kde) => {
                let logdens = kde.log_density(&x);
                let mdl = -logdens.sum() + MODEL_CHOICE_NATS;
                Self {
                    x,
                    kde: Some(kde),
                    fallback: None,
                    mdl,
                }
            }
            Err(_) => {
                let quantized = x.mapv(|v| (v * FALLBACK_QUANT_SCALE).trunc());
                let fallback = MultinomialMdl::from_sample(quantized);
                let mdl = fallback.mdl();
                Self {
                    x,
                    kde: None,
                    fallback: Some(fallback),
                    mdl,
                }
            }
        }
    }

    /// Effective bandwidth in data units, `factor · std(ddof=1)`.
    ///
    /// `None` when the sample is empty or the density fit fell back to the
    /// quantized code.
    pub fn bandwidth(&self) -> Option<f64> {
        self.kde.as_ref().map(|kde| kde.factor() * self.x.std(1.0))
    }

    /// The fitted density model, when the fit succeeded.
    pub fn kde(&self) -> Option<&GaussianKde> {
        self.kde.as_ref()
    }

    /// The quantized multinomial code used when the density fit failed.
    pub fn fallback(&self) -> Option<&MultinomialMdl> {
        self.fallback.as_ref()
    }
}

impl DescriptionLength for GaussianKdeMdl {
    fn mdl(&self) -> f64 {
        self.mdl
    }

    fn sample(&self) -> Array1<f64> {
        self.x.clone()
    }
}

impl OptionalEncodeQuery for GaussianKdeMdl {
    fn supports_encode(&self) -> bool {
        false
    }

    fn encode_opt(&self, _query: &Array1<f64>) -> Result<f64, &'static str> {
        Err("kernel-density codes cannot price an independent query; fit a new model on the query sample")
    }
}
