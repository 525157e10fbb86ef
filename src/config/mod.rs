//! Configuration types.
//!
//! - [`ClassifierConfig`]: diagnostics options for the [`Classifier`](crate::Classifier)

mod classifier;

pub use classifier::ClassifierConfig;
