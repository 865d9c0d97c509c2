pub mod engine;
pub mod outcome;

pub use engine::recommend;
pub use outcome::{Recommendation, Tier};
