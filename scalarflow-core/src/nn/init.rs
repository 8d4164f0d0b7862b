use crate::error::ScalarFlowError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Distribution used to draw the initial value of each parameter.
///
/// Construct it with [`Init::uniform`] or [`Init::normal`]; both validate their
/// arguments, so sampling itself cannot fail. The default is `uniform(-1, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct Init(InitKind);

#[derive(Debug, Clone, Copy)]
enum InitKind {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl Init {
    /// Uniform distribution over `[low, high)`.
    ///
    /// # Errors
    /// `InvalidInit` unless both bounds are finite, `low < high` and the
    /// width `high - low` is itself finite.
    pub fn uniform(low: f64, high: f64) -> Result<Self, ScalarFlowError> {
        if !(low.is_finite() && high.is_finite() && low < high && (high - low).is_finite()) {
            return Err(ScalarFlowError::InvalidInit(format!(
                "uniform bounds must be finite with low < high and a finite width, got [{}, {})",
                low, high
            )));
        }
        Ok(Init(InitKind::Uniform(Uniform::new(low, high))))
    }

    /// Normal distribution with the given mean and standard deviation.
    ///
    /// # Errors
    /// `InvalidInit` if `mean` is not finite or `std` is negative or not finite.
    pub fn normal(mean: f64, std: f64) -> Result<Self, ScalarFlowError> {
        if !(mean.is_finite() && std.is_finite()) {
            return Err(ScalarFlowError::InvalidInit(format!(
                "normal parameters must be finite, got mean={} std={}",
                mean, std
            )));
        }
        let normal = Normal::new(mean, std)
            .map_err(|e| ScalarFlowError::InvalidInit(format!("normal(mean={}, std={}): {}", mean, std, e)))?;
        Ok(Init(InitKind::Normal(normal)))
    }
}

impl Default for Init {
    fn default() -> Self {
        Init(InitKind::Uniform(Uniform::new(-1.0, 1.0)))
    }
}

impl Distribution<f64> for Init {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.0 {
            InitKind::Uniform(uniform) => uniform.sample(rng),
            InitKind::Normal(normal) => normal.sample(rng),
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
