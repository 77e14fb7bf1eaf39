pub mod mse;

pub use mse::{MSELoss, Reduction};
