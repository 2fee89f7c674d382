use candle_core::Device;
use pigdetect::{Error, LabelTable, Predictor, PredictorConfig};

mod common;

#[test]
fn prediction_label_comes_from_the_table() -> candle_core::Result<()> {
    let model = common::zero_classifier(10)?;
    let predictor = Predictor::from_parts(model, LabelTable::default(), Device::Cpu).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let image = common::black_png(dir.path(), "pig.png", 224, 224);

    let prediction = predictor.predict(&image).unwrap();
    assert!(predictor.labels().iter().any(|l| l == prediction.label));
    // Zero weights give uniform logits, so softmax is uniform over 10 classes.
    assert!((prediction.confidence - 0.1).abs() < 1e-4);
    Ok(())
}

#[test]
fn repeated_predictions_agree() -> candle_core::Result<()> {
    let model = common::zero_classifier(10)?;
    let predictor = Predictor::from_parts(model, LabelTable::default(), Device::Cpu).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let image = common::black_png(dir.path(), "pig.png", 640, 480);

    let first = predictor.predict(&image).unwrap();
    let second = predictor.predict(&image).unwrap();
    assert_eq!(first.label, second.label);
    assert_eq!(first.class_index, second.class_index);
    Ok(())
}

#[test]
fn label_count_must_match_head_size() -> candle_core::Result<()> {
    let model = common::zero_classifier(5)?;
    let err = Predictor::from_parts(model, LabelTable::default(), Device::Cpu).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    Ok(())
}

#[test]
fn missing_image_never_yields_a_label() -> candle_core::Result<()> {
    let model = common::zero_classifier(10)?;
    let predictor = Predictor::from_parts(model, LabelTable::default(), Device::Cpu).unwrap();
    let err = predictor.predict("./no-such-pig.jpg").unwrap_err();
    assert!(matches!(err, Error::ImageRead { .. }));
    Ok(())
}

#[test]
fn missing_checkpoint_fails_at_load() {
    let config = PredictorConfig::new("./no-such-checkpoint.safetensors");
    assert!(matches!(Predictor::load(&config), Err(Error::Model(_))));
}
