//! One-time model setup and the single-image inference procedure.

use std::path::Path;

use candle_core::{DType, Device, IndexOp, Module, Tensor, D};
use candle_nn::VarBuilder;
use image::DynamicImage;
use tracing::{debug, info};

use crate::classifier::SkinClassifier;
use crate::config::PredictorConfig;
use crate::error::Result;
use crate::labels::LabelTable;
use crate::preprocess;

/// The outcome of classifying one image.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    pub class_index: usize,
    /// Softmax probability of the winning class.
    pub confidence: f32,
}

/// Owns the loaded model and label table. Built once at startup, immutable
/// afterwards; prediction takes `&self` so a predictor can be shared.
#[derive(Debug)]
pub struct Predictor {
    model: SkinClassifier,
    labels: LabelTable,
    device: Device,
}

impl Predictor {
    /// Loads the checkpoint and label table. A missing or corrupt checkpoint,
    /// or a head whose shape disagrees with the label count, fails here and
    /// the process has nothing to serve.
    pub fn load(config: &PredictorConfig) -> Result<Self> {
        let labels = match &config.labels_path {
            Some(path) => LabelTable::from_manifest(path)?,
            None => LabelTable::default(),
        };
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(
                &[&config.model_path],
                DType::F32,
                &config.device,
            )?
        };
        let model = SkinClassifier::new(vb, labels.len())?;
        info!(
            model = %config.model_path.display(),
            classes = labels.len(),
            "checkpoint loaded"
        );
        Self::from_parts(model, labels, config.device.clone())
    }

    /// Assembles a predictor from an already-built model, for callers that
    /// construct or inject the model themselves.
    pub fn from_parts(model: SkinClassifier, labels: LabelTable, device: Device) -> Result<Self> {
        labels.ensure_matches(model.num_classes())?;
        Ok(Self {
            model,
            labels,
            device,
        })
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Classifies the image at `path`: decode, transform, forward, argmax,
    /// label lookup. Synchronous and best-effort; an undecodable image is an
    /// error, never a label.
    pub fn predict(&self, path: impl AsRef<Path>) -> Result<Prediction> {
        let image = preprocess::load_image_224(path, &self.device)?;
        self.predict_tensor(&image)
    }

    /// Classifies an already-decoded image.
    pub fn predict_image(&self, img: &DynamicImage) -> Result<Prediction> {
        let image = preprocess::to_tensor_224(img, &self.device)?;
        self.predict_tensor(&image)
    }

    fn predict_tensor(&self, image: &Tensor) -> Result<Prediction> {
        let batch = image.unsqueeze(0)?;
        let logits = self.model.forward(&batch)?;
        let probs = candle_nn::ops::softmax(&logits, D::Minus1)?;
        let class_index = logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()? as usize;
        let confidence = probs.i((0, class_index))?.to_scalar::<f32>()?;
        let label = self.labels.get(class_index)?.to_string();
        debug!(label = %label, class_index, confidence, "forward pass complete");
        Ok(Prediction {
            label,
            class_index,
            confidence,
        })
    }
}
