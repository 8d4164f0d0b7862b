use crate::var::Var;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameter nodes in place from the gradients left by the
/// last `backward()` call. They do not own the parameters: callers pass the
/// slice returned by [`Module::parameters`](crate::nn::Module::parameters),
/// whose order is stable, on every step.
pub trait Optimizer {
    /// Performs a single optimization step over `params`.
    fn step(&mut self, params: &[Var<'_>]);

    /// Clears the gradients of `params`.
    fn zero_grad(&mut self, params: &[Var<'_>]) {
        for param in params {
            param.set_grad(0.0);
        }
    }
}
