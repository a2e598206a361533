//! Reply pipeline.
//!
//! Every prospect reply flows through:
//! 1. `Classifier::classify()`: intent category, confidence, review flag
//! 2. `ResponseGenerator::generate()`: category template + few-shot transcript
//! 3. `Autoresponder::process()`: sequences both and packages a `ResponseRecord`

pub mod classifier;
pub mod generator;
pub mod processor;
pub mod types;

pub use classifier::Classifier;
pub use generator::ResponseGenerator;
pub use processor::Autoresponder;
pub use types::{Category, ClassificationResult, Confidence, ResponseRecord};
