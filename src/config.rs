use std::path::PathBuf;

use candle_core::Device;

/// Where to find the checkpoint and labels, and which device to run on.
/// The checkpoint path is always supplied by the caller; nothing is
/// hard-coded into the binary.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Path to the safetensors checkpoint.
    pub model_path: PathBuf,
    /// Optional JSON label manifest shipped next to the checkpoint.
    /// When absent the embedded 10-class table is used.
    pub labels_path: Option<PathBuf>,
    pub device: Device,
}

impl PredictorConfig {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            labels_path: None,
            device: Device::Cpu,
        }
    }

    pub fn with_labels(mut self, labels_path: impl Into<PathBuf>) -> Self {
        self.labels_path = Some(labels_path.into());
        self
    }
}
