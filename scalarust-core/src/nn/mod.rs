// scalarust-core/src/nn/mod.rs
// Network building blocks: modules, parameters, layers, losses.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

// Re-export common items
pub use activation::Activation;
pub use init::Initializer;
pub use layers::{Layer, Neuron};
pub use losses::{mean_squared_error, MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameters;
