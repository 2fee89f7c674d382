//! Pig skin disease classification from a single photo.
//!
//! A ResNet-50 fine-tuned on pig skin images, loaded from a safetensors
//! checkpoint and run on one image at a time: decode, resize/normalize to
//! ImageNet statistics, forward pass, argmax, label lookup.

pub mod classifier;
pub mod config;
pub mod error;
pub mod labels;
pub mod predictor;
pub mod preprocess;
pub mod resnet;
pub mod sequential;

pub use classifier::SkinClassifier;
pub use config::PredictorConfig;
pub use error::Error;
pub use labels::LabelTable;
pub use predictor::{Prediction, Predictor};
