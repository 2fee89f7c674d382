//! The ordered label table the model's class indices point into.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Class names in checkpoint order. Index i is the label for output logit i.
pub const DEFAULT_LABELS: [&str; 10] = [
    "Infected_Bacterial_Erysipelas",
    "Infected_Bacterial_Greasy_Pig_Disease",
    "Infected_Environmental_Dermatitis",
    "Infected_Environmental_Sunburn",
    "Infected_Fungal_Pityriasis_Rosea",
    "Infected_Fungal_Ringworm",
    "Infected_Parasitic_Mange",
    "Infected_Viral_Foot_and_Mouth_Disease",
    "Infected_Viral_Swinepox",
    "Healthy",
];

#[derive(Debug, Deserialize)]
struct Manifest {
    labels: Vec<String>,
}

/// An ordered list of class names. The order must match the checkpoint's
/// output layer; a sidecar manifest lets labels version with the weights.
#[derive(Debug, Clone)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LabelTable {
    /// Loads labels from a JSON sidecar manifest: `{"labels": ["...", ...]}`.
    pub fn from_manifest(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let manifest: Manifest = serde_json::from_slice(&data).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        if manifest.labels.is_empty() {
            return Err(Error::Manifest {
                path: path.to_path_buf(),
                source: "manifest contains no labels".into(),
            });
        }
        Ok(Self {
            labels: manifest.labels,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Bounds-checked positional lookup.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.labels
            .get(index)
            .map(|s| s.as_str())
            .ok_or(Error::LabelIndex {
                index,
                len: self.labels.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|s| s.as_str())
    }

    /// Checks the table against the model's output dimensionality.
    pub fn ensure_matches(&self, num_classes: usize) -> Result<()> {
        if self.labels.len() != num_classes {
            return Err(Error::config(format!(
                "label table has {} entries but model outputs {} classes",
                self.labels.len(),
                num_classes
            )));
        }
        Ok(())
    }
}
