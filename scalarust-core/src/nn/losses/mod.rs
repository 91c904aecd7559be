pub mod mse;

pub use mse::{mean_squared_error, MSELoss, Reduction};
