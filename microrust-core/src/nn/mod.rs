// src/nn/mod.rs
// Neural network building blocks on top of the scalar engine.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use activation::Activation;
pub use layers::{Layer, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
