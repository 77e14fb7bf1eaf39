//! A small reverse-mode automatic differentiation engine over scalar values,
//! with a minimal neural network library built on top of it.
//!
//! ```
//! use microrust_core::Value;
//!
//! let x = Value::with_label(1.0, "x");
//! let y = (&x + 2.0) * 3.0;
//! y.backward().unwrap();
//! assert_eq!(y.data(), 9.0);
//! assert_eq!(x.grad(), 3.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
mod value_data;

// Re-export the main types so they are reachable as `microrust_core::Value`, etc.
pub use autograd::{NodeId, OpKind};
pub use error::MicroRustError;
pub use model::MLP;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
pub use rand;
