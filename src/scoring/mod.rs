pub mod engine;
pub mod explain;

pub use engine::{predict, probability, Prediction, PriorityParams};
pub use explain::{contributions, reason_codes, Contribution};
