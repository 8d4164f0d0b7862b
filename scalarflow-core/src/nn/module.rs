use crate::error::ScalarFlowError;
use crate::var::{Operand, Var};

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns leaf nodes (its parameters) on a tape that outlives it, and
/// builds fresh nodes on that tape every time it is called.
pub trait Module<'t> {
    /// What a forward pass returns: a single node, a sequence of nodes, ...
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// `inputs` may mix nodes and raw scalars; scalars are wrapped as leaves.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len()` differs from the module's input
    /// width. Nothing is recorded on the tape in that case.
    fn forward<I>(&self, inputs: &[I]) -> Result<Self::Output, ScalarFlowError>
    where
        I: Into<Operand<'t>> + Copy;

    /// Returns every learnable parameter of the module, including those of its
    /// sub-modules.
    ///
    /// The order is deterministic (weights before bias, sub-modules in
    /// construction order) and stable across calls, so optimizers can zip it
    /// positionally against other per-parameter state.
    fn parameters(&self) -> Vec<Var<'t>>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. `"layers.1.neurons.0.w.2"`), in [`Module::parameters`] order.
    fn named_parameters(&self) -> Vec<(String, Var<'t>)>;

    /// Resets the gradient of every parameter to zero.
    ///
    /// Transient nodes created by forward passes are left untouched.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.set_grad(0.0);
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes every name of a child's `named_parameters()` with `prefix.`.
pub(crate) fn prefixed<'t>(prefix: &str, named: Vec<(String, Var<'t>)>) -> Vec<(String, Var<'t>)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
