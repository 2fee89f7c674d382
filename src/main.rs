use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use pigdetect::{Predictor, PredictorConfig};

/// Classify a pig skin photo and print the predicted disease label.
#[derive(Parser, Debug)]
#[command(name = "pigdetect", version, about)]
struct Args {
    /// Path to the image to classify
    image: PathBuf,

    /// Path to the safetensors checkpoint
    #[arg(long, env = "PIGDETECT_MODEL")]
    model: PathBuf,

    /// Optional JSON label manifest; defaults to the embedded label table
    #[arg(long, env = "PIGDETECT_LABELS")]
    labels: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = PredictorConfig::new(&args.model);
    if let Some(labels) = &args.labels {
        config = config.with_labels(labels);
    }

    let predictor = Predictor::load(&config)?;
    let prediction = predictor.predict(&args.image)?;
    info!(
        class_index = prediction.class_index,
        confidence = prediction.confidence,
        "prediction complete"
    );

    // The label is the program's output; everything else goes to stderr.
    println!("{}", prediction.label);
    Ok(())
}
