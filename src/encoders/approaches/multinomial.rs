use crate::encoders::coerce::{CoerceError, VectorData};
use crate::encoders::traits::{DescriptionLength, EncodeQuery, OptionalEncodeQuery};
use ndarray::Array1;

/// Policy for pricing query values absent from the fitted lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentValuePolicy {
    /// Flat code over the symmetric range implied by the largest-magnitude
    /// query value.
    #[default]
    Uniform,
    /// Re-use the probability of the nearest fitted unique value; on an
    /// exact distance tie the neighbour with the higher probability wins.
    Adjacent,
}

/// Multinomial code over the exact values observed in the fitted sample.
///
/// The description length is the empirical cross-entropy of the sample
/// under its own value frequencies. A sample with a single repeated value
/// only pays for its repeat count, `ln n`.
///
/// Value lookup uses exact float equality; `-0.0` is canonicalized to `0.0`
/// at fit and query time, and values that are mathematically close but not
/// bit-equal are distinct symbols. `NaN` never compares equal and therefore
/// never matches the lookup.
pub struct MultinomialMdl {
    x: Array1<f64>,
    uniq_vals: Vec<f64>,
    uniq_counts: Vec<usize>,
    uniq_probs: Vec<f64>,
    mdl: f64,
}

impl MultinomialMdl {
    /// Fit a multinomial code on `data`.
    pub fn new(data: impl Into<VectorData>) -> Result<Self, CoerceError> {
        Ok(Self::from_sample(data.into().coerce()?))
    }

    /// Fit from an already-validated sample vector.
    pub(crate) fn from_sample(x: Array1<f64>) -> Self {
        let n = x.len();
        let mut sorted: Vec<f64> = x.iter().map(|&v| canonical(v)).collect();
        sorted.sort_by(f64::total_cmp);

        let mut uniq_vals: Vec<f64> = Vec::new();
        let mut uniq_counts: Vec<usize> = Vec::new();
        for &v in &sorted {
            match uniq_vals.last().copied() {
                Some(last) if last == v => {
                    let last_idx = uniq_counts.len() - 1;
                    uniq_counts[last_idx] += 1;
                }
                _ => {
                    uniq_vals.push(v);
                    uniq_counts.push(1);
                }
            }
        }

        let n_f = n as f64;
        let uniq_probs: Vec<f64> = uniq_counts.iter().map(|&c| c as f64 / n_f).collect();

        let mdl = match uniq_vals.len() {
            0 => 0.0,
            // A single certain value: only the repeat count is encoded.
            1 => n_f.ln(),
            _ => uniq_probs
                .iter()
                .zip(&uniq_counts)
                .map(|(&p, &c)| -p.ln() * c as f64)
                .sum(),
        };

        Self {
            x,
            uniq_vals,
            uniq_counts,
            uniq_probs,
            mdl,
        }
    }

    /// Description length of `query` under the fitted code, in nats.
    ///
    /// Distinct query values found in the fitted lookup cost their
    /// self-information; absent values are priced per `policy`. An empty
    /// query costs nothing; a model fitted on an empty sample prices every
    /// query value with the uniform fallback.
    pub fn encode_with(&self, query: &Array1<f64>, policy: AbsentValuePolicy) -> f64 {
        if query.is_empty() {
            return 0.0;
        }

        let q_max_abs = query.iter().fold(0.0_f64, |m, &v| m.max(v.abs()));
        // Flat code over [-max|q|, max|q|]. An all-zero query carries a
        // single certain symbol, which costs nothing.
        let uniform_mdl = if q_max_abs > 0.0 {
            (q_max_abs * 2.0).ln()
        } else {
            0.0
        };

        if self.uniq_vals.is_empty() {
            return query.len() as f64 * uniform_mdl;
        }

        let mut sorted: Vec<f64> = query.iter().map(|&v| canonical(v)).collect();
        sorted.sort_by(f64::total_cmp);

        let mut total = 0.0;
        let mut i = 0;
        while i < sorted.len() {
            let v = sorted[i];
            let mut count = 1usize;
            while i + count < sorted.len() && sorted[i + count] == v {
                count += 1;
            }
            let val_mdl = match self.probability_of(v) {
                Some(p) => -p.ln(),
                None => match policy {
                    AbsentValuePolicy::Uniform => uniform_mdl,
                    AbsentValuePolicy::Adjacent => -self.adjacent_probability(v).ln(),
                },
            };
            total += val_mdl * count as f64;
            i += count;
        }
        total
    }

    /// Probability of `value` in the fitted lookup, if it was observed.
    pub fn probability_of(&self, value: f64) -> Option<f64> {
        let v = canonical(value);
        let idx = self.uniq_vals.partition_point(|&u| u < v);
        if idx < self.uniq_vals.len() && self.uniq_vals[idx] == v {
            Some(self.uniq_probs[idx])
        } else {
            None
        }
    }

    /// Sorted unique values of the fitted sample.
    pub fn unique_values(&self) -> &[f64] {
        &self.uniq_vals
    }

    /// Occurrence counts aligned with [`unique_values`](Self::unique_values).
    pub fn counts(&self) -> &[usize] {
        &self.uniq_counts
    }

    /// Empirical probabilities aligned with
    /// [`unique_values`](Self::unique_values).
    pub fn probabilities(&self) -> &[f64] {
        &self.uniq_probs
    }

    /// Probability of the nearest fitted neighbour of an absent value.
    fn adjacent_probability(&self, v: f64) -> f64 {
        let m = self.uniq_vals.len();
        let idx = self.uniq_vals.partition_point(|&u| u < v);
        if idx == 0 {
            // Below the fitted minimum.
            self.uniq_probs[0]
        } else if idx >= m {
            // Above the fitted maximum.
            self.uniq_probs[m - 1]
        } else {
            let l_diff = (self.uniq_vals[idx - 1] - v).abs();
            let r_diff = (self.uniq_vals[idx] - v).abs();
            if l_diff < r_diff {
                self.uniq_probs[idx - 1]
            } else if l_diff > r_diff {
                self.uniq_probs[idx]
            } else {
                // Same distance on both sides: the cheaper code wins.
                self.uniq_probs[idx - 1].max(self.uniq_probs[idx])
            }
        }
    }
}

impl DescriptionLength for MultinomialMdl {
    fn mdl(&self) -> f64 {
        self.mdl
    }

    fn sample(&self) -> Array1<f64> {
        self.x.clone()
    }
}

impl EncodeQuery for MultinomialMdl {
    /// Encode with the default [`AbsentValuePolicy::Uniform`] policy.
    fn encode(&self, query: &Array1<f64>) -> f64 {
        self.encode_with(query, AbsentValuePolicy::default())
    }
}

impl OptionalEncodeQuery for MultinomialMdl {
    fn supports_encode(&self) -> bool {
        true
    }

    fn encode_opt(&self, query: &Array1<f64>) -> Result<f64, &'static str> {
        Ok(self.encode_with(query, AbsentValuePolicy::default()))
    }
}

/// Collapse `-0.0` onto `0.0` so both sides of the lookup agree on zero.
fn canonical(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
