//! Trains a small tanh MLP on four hand-picked examples.
//!
//! Run with `RUST_LOG=info cargo run --example train_mlp`.

use log::info;
use scalarust_core::nn::{mean_squared_error, Initializer, Module};
use scalarust_core::viz::dot::draw_dot;
use scalarust_core::{Graph, Mlp, Optimizer, ScalarustError, Sgd};

const STEPS: usize = 20;
const LEARNING_RATE: f64 = 0.05;
const TOLERANCE: f64 = 1e-5;

fn main() -> Result<(), ScalarustError> {
    env_logger::init();

    let xs = [
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::new();
    let mut init = Initializer::from_entropy();
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut init)?;
    let mut sgd = Sgd::new(mlp.parameters(), LEARNING_RATE)?;
    let mark = graph.checkpoint();

    for step in 0..STEPS {
        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let inputs = graph.scalars(x);
            predictions.extend(mlp.forward(&mut graph, &inputs)?);
        }
        let targets = graph.scalars(&ys);
        let loss = mean_squared_error(&mut graph, &targets, &predictions)?;

        sgd.zero_grad(&mut graph)?;
        graph.backward(loss)?;
        sgd.step(&mut graph)?;

        let value = graph.data(loss)?;
        let outputs = predictions
            .iter()
            .map(|&p| graph.data(p))
            .collect::<Result<Vec<_>, _>>()?;
        info!("step {:>2}: loss {:.6} predictions {:.4?}", step, value, outputs);

        if step + 1 == STEPS || value.abs() < TOLERANCE {
            if std::env::args().any(|arg| arg == "--dot") {
                println!("{}", draw_dot(&graph, loss)?);
            }
            break;
        }
        graph.rewind(mark)?;
    }
    Ok(())
}
