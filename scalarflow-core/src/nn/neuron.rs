use crate::autograd::Tape;
use crate::error::ScalarFlowError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::var::{Operand, Var};
use rand::distributions::Distribution;
use rand::Rng;

/// A single neuron: `tanh(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron<'t> {
    weights: Vec<Var<'t>>,
    bias: Var<'t>,
}

impl<'t> Neuron<'t> {
    /// Creates a neuron with `input_width` weights, all parameters drawn from
    /// `uniform(-1, 1)`.
    pub fn new<R: Rng + ?Sized>(tape: &'t Tape, input_width: usize, rng: &mut R) -> Self {
        Self::with_init(tape, input_width, &Init::default(), rng)
    }

    /// Creates a neuron whose weights and bias are drawn from `init`.
    ///
    /// Weights are drawn first, in order, then the bias.
    pub fn with_init<R: Rng + ?Sized>(
        tape: &'t Tape,
        input_width: usize,
        init: &Init,
        rng: &mut R,
    ) -> Self {
        let weights = (0..input_width)
            .map(|_| tape.var(init.sample(rng)))
            .collect();
        let bias = tape.var(init.sample(rng));
        Neuron { weights, bias }
    }

    pub fn input_width(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Var<'t>] {
        &self.weights
    }

    pub fn bias(&self) -> Var<'t> {
        self.bias
    }
}

impl<'t> Module<'t> for Neuron<'t> {
    type Output = Var<'t>;

    fn forward<I>(&self, inputs: &[I]) -> Result<Var<'t>, ScalarFlowError>
    where
        I: Into<Operand<'t>> + Copy,
    {
        if inputs.len() != self.weights.len() {
            return Err(ScalarFlowError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias, |acc, (&w, &x)| add_op(acc, mul_op(w, x)));
        Ok(activation.tanh())
    }

    fn parameters(&self) -> Vec<Var<'t>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Var<'t>)> {
        let mut named: Vec<(String, Var<'t>)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w.{}", i), w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
