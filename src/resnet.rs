//! Bottleneck ResNet-50 backbone with torchvision parameter naming, so a
//! state dict exported from `torchvision.models.resnet50` binds unchanged.
//! Inference only: batch norm always runs in eval mode.

use candle_core::{Result, D};
use candle_nn as nn;
use nn::{batch_norm, Conv2d, Module, VarBuilder};

use crate::sequential::{seq, Sequential};

/// Feature width after global average pooling, the input width of the head.
pub const FEATURE_DIM: usize = 2048;

fn conv2d(
    in_planes: usize,
    out_planes: usize,
    ksize: usize,
    padding: usize,
    stride: usize,
    vb: VarBuilder,
) -> Result<Conv2d> {
    let conv2d_cfg = candle_nn::Conv2dConfig {
        stride,
        padding,
        ..Default::default()
    };
    candle_nn::conv2d_no_bias(in_planes, out_planes, ksize, conv2d_cfg, vb)
}

#[derive(Debug, Clone)]
pub struct Downsample {
    conv2d: nn::Conv2d,
    bn2: nn::BatchNorm,
}

impl Module for Downsample {
    fn forward(&self, xs: &candle_core::Tensor) -> Result<candle_core::Tensor> {
        xs.apply(&self.conv2d)?.apply_t(&self.bn2, false)
    }
}

fn downsample(
    in_planes: usize,
    out_planes: usize,
    stride: usize,
    vb: VarBuilder,
) -> Result<Option<Downsample>> {
    if stride != 1 || in_planes != out_planes {
        let conv = conv2d(in_planes, out_planes, 1, 0, stride, vb.pp(0))?;
        let bn = batch_norm(out_planes, 1e-5, vb.pp(1))?;
        Ok(Some(Downsample { conv2d: conv, bn2: bn }))
    } else {
        Ok(None)
    }
}

#[derive(Debug, Clone)]
pub struct BottleneckBlock {
    conv1: Conv2d,
    bn1: nn::BatchNorm,
    conv2: Conv2d,
    bn2: nn::BatchNorm,
    conv3: Conv2d,
    bn3: nn::BatchNorm,
    downsample: Option<Downsample>,
}

impl BottleneckBlock {
    pub fn new(
        vb: VarBuilder,
        in_planes: usize,
        out_planes: usize,
        stride: usize,
        e: usize,
    ) -> Result<Self> {
        let e_dim = e * out_planes;
        let conv1 = conv2d(in_planes, out_planes, 1, 0, 1, vb.pp("conv1"))?;
        let bn1 = nn::batch_norm(out_planes, 1e-5, vb.pp("bn1"))?;
        let conv2 = conv2d(out_planes, out_planes, 3, 1, stride, vb.pp("conv2"))?;
        let bn2 = nn::batch_norm(out_planes, 1e-5, vb.pp("bn2"))?;

        let conv3 = conv2d(out_planes, e_dim, 1, 0, 1, vb.pp("conv3"))?;
        let bn3 = nn::batch_norm(e_dim, 1e-5, vb.pp("bn3"))?;
        let downsample = downsample(in_planes, e_dim, stride, vb.pp("downsample"))?;
        Ok(Self {
            conv1,
            bn1,
            conv2,
            bn2,
            conv3,
            bn3,
            downsample,
        })
    }
}

impl Module for BottleneckBlock {
    fn forward(&self, xs: &candle_core::Tensor) -> Result<candle_core::Tensor> {
        let ys = xs
            .apply(&self.conv1)?
            .apply_t(&self.bn1, false)?
            .relu()?
            .apply(&self.conv2)?
            .apply_t(&self.bn2, false)?
            .relu()?
            .apply(&self.conv3)?
            .apply_t(&self.bn3, false)?;

        if let Some(downsample) = &self.downsample {
            (xs.apply(downsample) + ys)?.relu()
        } else {
            (ys + xs)?.relu()
        }
    }
}

fn bottleneck_layer(
    vb: VarBuilder,
    in_planes: usize,
    out_planes: usize,
    stride: usize,
    cnt: usize,
) -> Result<Sequential<BottleneckBlock>> {
    let mut layers = seq(cnt);
    for index in 0..cnt {
        let l_in = if index == 0 { in_planes } else { 4 * out_planes };
        let stride = if index == 0 { stride } else { 1 };
        layers.push(BottleneckBlock::new(vb.pp(index), l_in, out_planes, stride, 4)?);
    }
    Ok(layers)
}

/// Headless ResNet: stem, four bottleneck stages, global average pooling.
/// Produces `[batch, FEATURE_DIM]` features; the classification head is
/// attached separately by the caller.
#[derive(Debug, Clone)]
pub struct ResNet {
    conv1: Conv2d,
    bn1: nn::BatchNorm,
    layer1: Sequential<BottleneckBlock>,
    layer2: Sequential<BottleneckBlock>,
    layer3: Sequential<BottleneckBlock>,
    layer4: Sequential<BottleneckBlock>,
}

impl ResNet {
    pub fn new(vb: VarBuilder, c1: usize, c2: usize, c3: usize, c4: usize) -> Result<Self> {
        let conv1 = conv2d(3, 64, 7, 3, 2, vb.pp("conv1"))?;
        let bn1 = nn::batch_norm(64, 1e-5, vb.pp("bn1"))?;
        let layer1 = bottleneck_layer(vb.pp("layer1"), 64, 64, 1, c1)?;
        let layer2 = bottleneck_layer(vb.pp("layer2"), 4 * 64, 128, 2, c2)?;
        let layer3 = bottleneck_layer(vb.pp("layer3"), 4 * 128, 256, 2, c3)?;
        let layer4 = bottleneck_layer(vb.pp("layer4"), 4 * 256, 512, 2, c4)?;

        Ok(Self {
            conv1,
            bn1,
            layer1,
            layer2,
            layer3,
            layer4,
        })
    }
}

impl Module for ResNet {
    fn forward(&self, xs: &candle_core::Tensor) -> Result<candle_core::Tensor> {
        let xs = xs.apply(&self.conv1)?;
        let xs = xs.apply_t(&self.bn1, false)?;
        let xs = xs.relu()?;

        // nn.MaxPool2d(kernel_size=3, stride=2, padding=1)
        let xs = xs.pad_with_same(D::Minus1, 1, 1)?;
        let xs = xs.pad_with_same(D::Minus2, 1, 1)?;
        let xs = xs.max_pool2d_with_stride(3, 2)?;

        let xs = xs.apply(&self.layer1)?;
        let xs = xs.apply(&self.layer2)?;
        let xs = xs.apply(&self.layer3)?;
        let xs = xs.apply(&self.layer4)?;

        // Equivalent to adaptive_avg_pool2d([1, 1]) -> squeeze(-1) -> squeeze(-1)
        let xs = xs.mean(D::Minus1)?;
        xs.mean(D::Minus1)
    }
}

/// Creates the ResNet-50 backbone.
pub fn resnet50(vb: VarBuilder) -> Result<ResNet> {
    ResNet::new(vb, 3, 4, 6, 3)
}
