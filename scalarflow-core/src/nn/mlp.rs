use crate::autograd::Tape;
use crate::error::ScalarFlowError;
use crate::nn::init::Init;
use crate::nn::layer::Layer;
use crate::nn::module::{prefixed, Module};
use crate::var::{Operand, Var};
use rand::Rng;

/// Output of a [`Mlp`] forward pass.
#[derive(Debug, Clone)]
pub enum MlpOutput<'t> {
    /// The last layer has exactly one neuron.
    Single(Var<'t>),
    /// Any other output width.
    Many(Vec<Var<'t>>),
}

impl<'t> MlpOutput<'t> {
    /// Returns the node of a single-output network.
    pub fn single(&self) -> Option<Var<'t>> {
        match self {
            MlpOutput::Single(var) => Some(*var),
            MlpOutput::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<Var<'t>> {
        match self {
            MlpOutput::Single(var) => vec![var],
            MlpOutput::Many(vars) => vars,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MlpOutput::Single(_) => 1,
            MlpOutput::Many(vars) => vars.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A multi-layer perceptron: layers chained so that each layer's input width
/// is the previous layer's neuron count.
#[derive(Debug, Clone)]
pub struct Mlp<'t> {
    tape: &'t Tape,
    layers: Vec<Layer<'t>>,
    input_width: usize,
}

impl<'t> Mlp<'t> {
    /// Builds one layer per entry of `layer_sizes`.
    ///
    /// # Example
    /// ```
    /// use rand::SeedableRng;
    /// use scalarflow_core::nn::{Mlp, Module};
    /// use scalarflow_core::Tape;
    ///
    /// let tape = Tape::new();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let mlp = Mlp::new(&tape, 3, &[4, 4, 1], &mut rng);
    /// assert_eq!(mlp.parameters().len(), 41);
    /// let out = mlp.forward(&[2.0, 3.0, -1.0]).unwrap();
    /// assert!(out.single().is_some());
    /// ```
    pub fn new<R: Rng + ?Sized>(
        tape: &'t Tape,
        input_width: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Self {
        Self::with_init(tape, input_width, layer_sizes, &Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        tape: &'t Tape,
        input_width: usize,
        layer_sizes: &[usize],
        init: &Init,
        rng: &mut R,
    ) -> Self {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = input_width;
        for &size in layer_sizes {
            layers.push(Layer::with_init(tape, width, size, init, rng));
            width = size;
        }
        Mlp {
            tape,
            layers,
            input_width,
        }
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// Width of the network's output (the input width if there are no layers).
    pub fn output_width(&self) -> usize {
        self.layers
            .last()
            .map_or(self.input_width, |layer| layer.output_width())
    }

    pub fn layers(&self) -> &[Layer<'t>] {
        &self.layers
    }
}

impl<'t> Module<'t> for Mlp<'t> {
    type Output = MlpOutput<'t>;

    fn forward<I>(&self, inputs: &[I]) -> Result<MlpOutput<'t>, ScalarFlowError>
    where
        I: Into<Operand<'t>> + Copy,
    {
        if inputs.len() != self.input_width {
            return Err(ScalarFlowError::DimensionMismatch {
                expected: self.input_width,
                actual: inputs.len(),
            });
        }
        let mut activations: Vec<Var<'t>> = inputs
            .iter()
            .map(|&x| x.into().resolve(self.tape))
            .collect();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        if activations.len() == 1 {
            Ok(MlpOutput::Single(activations[0]))
        } else {
            Ok(MlpOutput::Many(activations))
        }
    }

    fn parameters(&self) -> Vec<Var<'t>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Var<'t>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| prefixed(&format!("layers.{}", i), layer.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
