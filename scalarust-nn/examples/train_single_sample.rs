//! Trains a tiny multi-layer perceptron on one sample.
//!
//! Demonstrates the full loop: forward graph construction, MSE loss,
//! backward pass, and SGD parameter updates, with gradients zeroed between
//! iterations.
//!
//! Run with: `cargo run --example train_single_sample`

use scalarust_nn::losses::mse_loss;
use scalarust_nn::{Activation, Module, Network, ScalarustNnError, Sgd};

fn main() -> Result<(), ScalarustNnError> {
    let net = Network::new(&[3, 4, 1], Activation::Tanh)?;
    let x = [0.3, -0.8, 0.5];
    let target = [0.7];
    let sgd = Sgd::new(0.05);

    for epoch in 0..50 {
        let predictions = net.forward(&x)?;
        let loss = mse_loss(&predictions, &target)?;

        net.zero_grad();
        loss.backward();
        sgd.step(&net.parameters())?;

        if epoch % 10 == 0 {
            println!("epoch {:2}: loss = {:.6}", epoch, loss.value());
        }
    }

    let final_pred = net.forward(&x)?;
    println!("final prediction: {:.4} (target {})", final_pred[0].value(), target[0]);
    Ok(())
}
