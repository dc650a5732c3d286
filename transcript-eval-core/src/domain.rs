pub mod corpus;
pub mod report;

pub use corpus::*;
pub use report::*;
