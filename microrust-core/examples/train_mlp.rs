//! # Training a Small MLP by Hand
//!
//! Fits a `3 -> 4 -> 4 -> 1` tanh network to four labelled points using plain
//! gradient descent:
//! 1.  **Model**: `MLP::new` with a seeded `StdRng`, so runs are reproducible.
//! 2.  **Loss**: sum of squared errors (`MSELoss` with `Reduction::Sum`).
//! 3.  **Loop**: forward, zero the gradients, `backward`, then nudge every
//!     parameter against its gradient.
//!
//! ## Running
//! `cargo run --example train_mlp`

use microrust_core::nn::{MSELoss, Module, Reduction};
use microrust_core::value::from_slice;
use microrust_core::{MicroRustError, MLP};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MicroRustError> {
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = MLP::new(3, &[4, 4, 1], &mut rng);
    println!("MLP created with {} parameters", mlp.num_parameters());

    let xs = vec![
        from_slice(&[2.0, 3.0, -1.0]),
        from_slice(&[3.0, -1.0, 0.5]),
        from_slice(&[0.5, 1.0, 1.0]),
        from_slice(&[1.0, 1.0, -1.0]),
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];
    let loss_fn = MSELoss::new(Reduction::Sum);
    let learning_rate = 0.1;

    for step in 0..20 {
        // forward pass
        let ypred = xs
            .iter()
            .map(|x| mlp.forward_scalar(x))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = loss_fn.calculate(&ypred, &ys)?;

        // backward pass
        mlp.zero_grad();
        loss.backward()?;

        // update
        for p in mlp.parameters() {
            p.set_data(p.data() + -learning_rate * p.grad());
        }

        println!("{} {:.6}", step, loss.data());
    }

    let ypred = xs
        .iter()
        .map(|x| mlp.forward_scalar(x).map(|y| y.data()))
        .collect::<Result<Vec<_>, _>>()?;
    println!("\nPredictions: {:?}", ypred);
    println!("Targets:     {:?}", ys);
    Ok(())
}
