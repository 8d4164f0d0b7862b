use crate::autograd::Tape;
use crate::error::ScalarFlowError;
use crate::nn::init::Init;
use crate::nn::module::{prefixed, Module};
use crate::nn::neuron::Neuron;
use crate::var::{Operand, Var};
use rand::Rng;

/// A fully connected layer: independent neurons applied to the same input.
#[derive(Debug, Clone)]
pub struct Layer<'t> {
    neurons: Vec<Neuron<'t>>,
    input_width: usize,
}

impl<'t> Layer<'t> {
    pub fn new<R: Rng + ?Sized>(
        tape: &'t Tape,
        input_width: usize,
        neuron_count: usize,
        rng: &mut R,
    ) -> Self {
        Self::with_init(tape, input_width, neuron_count, &Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        tape: &'t Tape,
        input_width: usize,
        neuron_count: usize,
        init: &Init,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..neuron_count)
            .map(|_| Neuron::with_init(tape, input_width, init, rng))
            .collect();
        Layer {
            neurons,
            input_width,
        }
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// Number of neurons, i.e. the width of the layer's output.
    pub fn output_width(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<'t>] {
        &self.neurons
    }
}

impl<'t> Module<'t> for Layer<'t> {
    type Output = Vec<Var<'t>>;

    fn forward<I>(&self, inputs: &[I]) -> Result<Vec<Var<'t>>, ScalarFlowError>
    where
        I: Into<Operand<'t>> + Copy,
    {
        // Checked here as well so a layer without neurons still rejects bad input.
        if inputs.len() != self.input_width {
            return Err(ScalarFlowError::DimensionMismatch {
                expected: self.input_width,
                actual: inputs.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Var<'t>> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Var<'t>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| prefixed(&format!("neurons.{}", i), neuron.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
