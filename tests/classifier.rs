use candle_core::{Device, Module, Tensor};

mod common;

#[test]
fn forward_produces_one_logit_per_class() -> candle_core::Result<()> {
    let model = common::zero_classifier(10)?;
    let input = Tensor::zeros((1, 3, 224, 224), candle_core::DType::F32, &Device::Cpu)?;
    let logits = model.forward(&input)?;
    assert_eq!(logits.dims(), &[1, 10]);
    Ok(())
}

#[test]
fn forward_is_deterministic() -> candle_core::Result<()> {
    // Dropout is identity in eval mode; two passes over the same tensor must
    // agree exactly.
    let model = common::zero_classifier(10)?;
    let input = Tensor::ones((1, 3, 224, 224), candle_core::DType::F32, &Device::Cpu)?;
    let a = model.forward(&input)?.to_vec2::<f32>()?;
    let b = model.forward(&input)?.to_vec2::<f32>()?;
    assert_eq!(a, b);
    Ok(())
}
