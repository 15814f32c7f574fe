//! External emission predictor boundary
//!
//! - `features`: ordered positional schema for the model's arguments
//! - `estimate`: validated raw estimate newtype
//! - `runner`: subprocess invocation with timeout and retry

pub mod estimate;
pub mod features;
pub mod runner;

pub use estimate::{InvalidEstimate, RawEstimate};
pub use features::{FeatureValue, FeatureVector, PredictorFeature, FEATURE_COUNT};
pub use runner::{parse_estimate, PredictorConfig, PredictorError, PredictorRunner};
