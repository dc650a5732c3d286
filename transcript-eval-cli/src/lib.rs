pub mod evaluator;
pub mod loader;
pub mod output;

pub use evaluator::Evaluator;
