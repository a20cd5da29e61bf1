pub mod comps;
pub mod estimator;
pub mod heuristic;
pub mod median;
pub mod similarity;

pub use estimator::{RentEstimator, RentMethod, RentMode, RentalCompSource};
