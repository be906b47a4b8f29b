pub mod engine;

pub use engine::{DirectionIndex, LookupEngine};
