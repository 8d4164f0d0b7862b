use scalarflow_core::nn::{MseLoss, Reduction};
use scalarflow_core::optim::{Optimizer, Sgd};
use scalarflow_core::{ScalarFlowError, Tape, Var};

// Labelled points shared by the training tests.
// Added allow(dead_code) because each test crate only uses some of them.
#[allow(dead_code)]
pub(crate) const AND_POINTS: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], -1.0),
    ([0.0, 1.0], -1.0),
    ([1.0, 0.0], -1.0),
    ([1.0, 1.0], 1.0),
];

#[allow(dead_code)]
pub(crate) const BINARY_POINTS: [([f64; 3], f64); 4] = [
    ([1.0, 0.0, 1.0], 1.0),
    ([0.0, 1.0, 1.0], -1.0),
    ([1.0, 1.0, 0.0], 1.0),
    ([0.0, 0.0, 1.0], -1.0),
];

/// Mean squared error of `predict` over `points`.
#[allow(dead_code)]
pub(crate) fn dataset_mse<'t, F, const N: usize>(
    points: &[([f64; N], f64)],
    predict: F,
) -> Result<Var<'t>, ScalarFlowError>
where
    F: Fn(&[f64]) -> Result<Var<'t>, ScalarFlowError>,
{
    let predictions = points
        .iter()
        .map(|(x, _)| predict(&x[..]))
        .collect::<Result<Vec<_>, _>>()?;
    let targets: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
    MseLoss::new(Reduction::Mean).calculate(&predictions, &targets)
}

/// Runs `iterations` steps of plain gradient descent on `params` and returns
/// the loss measured after the last update. Every step's nodes are dropped
/// from the tape so only the parameters survive.
#[allow(dead_code)]
pub(crate) fn train<'t, F, const N: usize>(
    tape: &'t Tape,
    params: &[Var<'t>],
    points: &[([f64; N], f64)],
    predict: F,
    iterations: usize,
    lr: f64,
) -> Result<f64, ScalarFlowError>
where
    F: Fn(&[f64]) -> Result<Var<'t>, ScalarFlowError>,
{
    let mark = tape.mark();
    let mut sgd = Sgd::new(lr);
    for _ in 0..iterations {
        let loss = dataset_mse(points, &predict)?;
        loss.backward()?;
        sgd.step(params);
        tape.rewind(mark);
    }
    let loss = dataset_mse(points, &predict)?.data();
    tape.rewind(mark);
    Ok(loss)
}
