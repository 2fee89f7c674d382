#![allow(dead_code)]

use std::path::{Path, PathBuf};

use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use pigdetect::SkinClassifier;

/// Builds a classifier with all-zero weights. Logits are all zero, so the
/// graph shape and the full forward path can be exercised without a trained
/// checkpoint on disk.
pub fn zero_classifier(nclasses: usize) -> candle_core::Result<SkinClassifier> {
    let vb = VarBuilder::zeros(DType::F32, &Device::Cpu);
    SkinClassifier::new(vb, nclasses)
}

/// Writes a solid-black RGB image to `dir` and returns its path.
pub fn black_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = image::DynamicImage::new_rgb8(width, height);
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}
