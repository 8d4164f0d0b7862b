use crate::error::ScalarFlowError;
use crate::var::Var;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarFlowError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarFlowError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

impl From<ScalarFlowError> for GradCheckError {
    fn from(err: ScalarFlowError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is evaluated once with `backward()` to read the analytical gradient of
/// each input, then twice per input with that input shifted by `±epsilon`.
/// The two agree when
/// `|analytical - numerical| <= max(abs_tolerance, rel_tolerance * max(|analytical|, |numerical|))`.
///
/// Every node `func` records is dropped again (the tape is rewound after each
/// evaluation) and the inputs' data is restored, so the check leaves the tape
/// as it found it apart from the inputs' gradients.
///
/// # Errors
/// * `InputNotLeaf` if an input was produced by an operation.
/// * `ForwardPassError` / `BackwardPassError` if `func` or `backward()` fail.
/// * `GradientMismatch` and the NaN variants when the gradients disagree.
pub fn check_grad<'t, F>(
    inputs: &[Var<'t>],
    func: F,
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Var<'t>]) -> Result<Var<'t>, ScalarFlowError>,
{
    let tape = match inputs.first() {
        Some(first) => first.tape(),
        None => return Ok(()),
    };
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    let mark = tape.mark();

    // --- 1. Analytical gradients ---
    for input in inputs {
        input.set_grad(0.0);
    }
    let output = match func(inputs) {
        Ok(output) => output,
        Err(err) => {
            tape.rewind(mark);
            return Err(GradCheckError::ForwardPassError(err));
        }
    };
    let backward_result = output.backward();
    let analytical: Vec<f64> = inputs.iter().map(|input| input.grad()).collect();
    tape.rewind(mark);
    backward_result.map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradients ---
    let evaluate = |input: &Var<'t>, value: f64| -> Result<f64, GradCheckError> {
        input.set_data(value);
        let result = func(inputs).map(|output| output.data());
        tape.rewind(mark);
        Ok(result?)
    };

    for (i, input) in inputs.iter().enumerate() {
        let original = input.data();
        let loss_plus = evaluate(input, original + epsilon);
        let loss_minus = evaluate(input, original - epsilon);
        input.set_data(original);
        let (loss_plus, loss_minus) = (loss_plus?, loss_minus?);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = analytical[i];
        debug!(
            "check_grad: input {}: analytical = {}, numerical = {}",
            i, analytical_grad, numerical_grad
        );

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tolerance,
            max_relative = rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
