// src/nn/mod.rs
// Neurons, layers and networks built on top of the autodiff engine.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use init::Init;
pub use layer::Layer;
pub use losses::{MseLoss, Reduction};
pub use mlp::{Mlp, MlpOutput};
pub use module::Module;
pub use neuron::Neuron;
