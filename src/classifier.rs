//! ResNet-50 with the fine-tuned replacement head.
//!
//! The trained checkpoint swaps torchvision's single `fc` layer for
//! `Linear(2048, 1024) -> ReLU -> Dropout(0.5) -> Linear(1024, nclasses)`,
//! which PyTorch serializes as `fc.0.*` and `fc.3.*`.

use candle_core::{Result, Tensor};
use candle_nn as nn;
use nn::{Dropout, Linear, Module, VarBuilder};

use crate::resnet::{self, ResNet, FEATURE_DIM};

const HIDDEN_DIM: usize = 1024;

#[derive(Debug)]
struct Head {
    fc0: Linear,
    dropout: Dropout,
    fc3: Linear,
}

impl Head {
    fn new(vb: VarBuilder, nclasses: usize) -> Result<Self> {
        let fc0 = nn::linear(FEATURE_DIM, HIDDEN_DIM, vb.pp("0"))?;
        let dropout = Dropout::new(0.5);
        let fc3 = nn::linear(HIDDEN_DIM, nclasses, vb.pp("3"))?;
        Ok(Self { fc0, dropout, fc3 })
    }
}

impl Module for Head {
    fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        // Dropout is the identity in eval mode; it only exists here so the
        // module tree matches the checkpoint layout.
        xs.apply(&self.fc0)?
            .relu()?
            .apply_t(&self.dropout, false)?
            .apply(&self.fc3)
    }
}

/// The full classifier: backbone features plus the replacement head.
/// Weights bind through torchvision names, so a checkpoint with a head
/// sized differently than `nclasses` fails at construction.
#[derive(Debug)]
pub struct SkinClassifier {
    backbone: ResNet,
    head: Head,
    nclasses: usize,
}

impl SkinClassifier {
    pub fn new(vb: VarBuilder, nclasses: usize) -> Result<Self> {
        let backbone = resnet::resnet50(vb.clone())?;
        let head = Head::new(vb.pp("fc"), nclasses)?;
        Ok(Self {
            backbone,
            head,
            nclasses,
        })
    }

    /// Output dimensionality of the final layer.
    pub fn num_classes(&self) -> usize {
        self.nclasses
    }
}

impl Module for SkinClassifier {
    /// Maps a `[batch, 3, 224, 224]` image tensor to `[batch, nclasses]` logits.
    fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        xs.apply(&self.backbone)?.apply(&self.head)
    }
}
