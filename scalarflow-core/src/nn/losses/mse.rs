// scalarflow-core/src/nn/losses/mse.rs

use crate::error::ScalarFlowError;
use crate::ops::arithmetic::{add_op, div_op, powf_op, sub_op};
use crate::var::{Operand, Var};
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarFlowError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error between predicted nodes and targets.
///
/// The loss is an ordinary node on the predictions' tape, so calling
/// `backward()` on it differentiates through the whole network.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (pᵢ - yᵢ)²`, divided by the number of pairs for
    /// `Reduction::Mean`.
    ///
    /// # Errors
    /// * `DimensionMismatch` if `predictions` and `targets` differ in length.
    /// * `EmptyInput` if there are no predictions.
    pub fn calculate<'t, Y>(
        &self,
        predictions: &[Var<'t>],
        targets: &[Y],
    ) -> Result<Var<'t>, ScalarFlowError>
    where
        Y: Into<Operand<'t>> + Copy,
    {
        if predictions.len() != targets.len() {
            return Err(ScalarFlowError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }

        let mut squared_errors = predictions
            .iter()
            .zip(targets)
            .map(|(&prediction, &target)| powf_op(sub_op(prediction, target), 2.0));
        let first = squared_errors
            .next()
            .ok_or_else(|| ScalarFlowError::EmptyInput {
                operation: "MseLoss::calculate".to_string(),
            })?;
        let total = squared_errors.fold(first, |acc, squared_error| add_op(acc, squared_error));

        Ok(match self.reduction {
            Reduction::Mean => div_op(total, predictions.len() as f64),
            Reduction::Sum => total,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
