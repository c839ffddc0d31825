pub mod classifier;
pub mod dictionary;
pub mod fingers;
mod metrics;
mod rules;

pub use classifier::SignClassifier;
pub use dictionary::{DictionaryError, SignDictionary};
