//! On-device classifier wrapper around ONNX Runtime.
//!
//! The model is a black box: it takes a 224x224 RGB image tensor and
//! produces one score per label in the accompanying labels file. This
//! adapter owns decoding, preprocessing, a single inference pass, and
//! the argmax over the scores. No retry, one attempt per call.

use crate::constants::model_input;
use crate::error::{Error, Result};
use crate::identify::LocalClassifier;
use crate::media::ImageHandle;
use async_trait::async_trait;
use image::DynamicImage;
use ort::session::{Session, builder::GraphOptimizationLevel};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Image classifier backed by a local ONNX model and labels file.
pub struct SnakeClassifier {
    // ort inference takes &mut; calls are serialized behind the lock.
    session: Mutex<Session>,
    labels: Vec<String>,
    input_name: String,
}

impl SnakeClassifier {
    /// Build a classifier from a model file and a labels file.
    ///
    /// A failure here is fatal for the session: callers record it and
    /// fail every subsequent offline identification with the same reason.
    pub fn new(model_path: &Path, labels_path: &Path) -> Result<Self> {
        if !model_path.exists() {
            return Err(Error::ModelFileNotFound {
                path: model_path.to_path_buf(),
            });
        }
        if !labels_path.exists() {
            return Err(Error::LabelsFileNotFound {
                path: labels_path.to_path_buf(),
            });
        }

        let labels = read_labels(labels_path)?;
        if labels.is_empty() {
            return Err(Error::ClassifierBuild {
                reason: format!("labels file '{}' is empty", labels_path.display()),
            });
        }

        // Safe to call repeatedly; the runtime is a process-wide singleton.
        let _ = ort::init().commit();

        let session = Session::builder()
            .map_err(|e| Error::ClassifierBuild {
                reason: e.to_string(),
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| Error::ClassifierBuild {
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| Error::ClassifierBuild {
                reason: e.to_string(),
            })?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .unwrap_or_else(|| "input".to_string());

        info!(
            "Loaded model: {}, {} labels",
            model_path.display(),
            labels.len()
        );

        Ok(Self {
            session: Mutex::new(session),
            labels,
            input_name,
        })
    }

    /// Number of labels the model can produce.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Run one inference pass and return the highest-confidence label.
    pub fn predict(&self, image: &ImageHandle) -> Result<String> {
        let decoded = image::open(image.path()).map_err(|e| Error::ImageDecode {
            path: image.path().to_path_buf(),
            reason: e.to_string(),
        })?;

        let pixels = preprocess(&decoded);
        let input_tensor = ort::value::Tensor::from_array((
            [
                1_usize,
                model_input::HEIGHT as usize,
                model_input::WIDTH as usize,
                model_input::CHANNELS,
            ],
            pixels,
        ))
        .map_err(|e| Error::Inference {
            reason: e.to_string(),
        })?;

        let mut session = self.session.lock().map_err(|_| Error::Internal {
            message: "classifier session lock poisoned".to_string(),
        })?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        let output = outputs.values().next().ok_or_else(|| Error::Inference {
            reason: "model produced no output tensor".to_string(),
        })?;

        let (_, scores) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        let winner = argmax(scores).ok_or(Error::EmptyPrediction)?;
        debug!("Argmax index {winner} of {} scores", scores.len());

        self.labels
            .get(winner)
            .cloned()
            .ok_or_else(|| Error::Inference {
                reason: format!(
                    "predicted class index {winner} outside label set of {}",
                    self.labels.len()
                ),
            })
    }
}

#[async_trait]
impl LocalClassifier for SnakeClassifier {
    async fn classify(&self, image: &ImageHandle) -> Result<String> {
        self.predict(image)
    }
}

/// Scale an image to the model input and flatten it to normalized
/// NHWC float32 values, matching the model's training contract.
fn preprocess(image: &DynamicImage) -> Vec<f32> {
    let resized = image.resize_exact(
        model_input::WIDTH,
        model_input::HEIGHT,
        image::imageops::FilterType::Triangle,
    );
    let rgb = resized.to_rgb8();

    let mut pixels =
        Vec::with_capacity(model_input::WIDTH as usize * model_input::HEIGHT as usize * model_input::CHANNELS);
    for pixel in rgb.pixels() {
        for channel in 0..model_input::CHANNELS {
            pixels.push(f32::from(pixel[channel]) / 255.0);
        }
    }
    pixels
}

/// Index of the maximum score, if any.
fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
}

/// Read a labels file, one label per line, blank lines ignored.
fn read_labels(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::LabelsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut labels = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::LabelsRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            labels.push(trimmed.to_string());
        }
    }

    Ok(labels)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_labels_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Indian Cobra").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Rat Snake  ").unwrap();

        let labels = read_labels(file.path()).unwrap();
        assert_eq!(labels, vec!["Indian Cobra", "Rat Snake"]);
    }

    #[test]
    fn test_read_labels_missing_file_is_error() {
        let result = read_labels(Path::new("/nonexistent/labels.txt"));
        assert!(matches!(result, Err(Error::LabelsRead { .. })));
    }

    #[test]
    fn test_new_requires_model_file() {
        let labels = NamedTempFile::new().unwrap();
        let result = SnakeClassifier::new(Path::new("/nonexistent/model.onnx"), labels.path());
        assert!(matches!(result, Err(Error::ModelFileNotFound { .. })));
    }

    #[test]
    fn test_argmax_picks_highest_score() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[0.9]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_preprocess_shape_and_range() {
        let image = DynamicImage::new_rgb8(10, 8);
        let pixels = preprocess(&image);
        assert_eq!(
            pixels.len(),
            model_input::WIDTH as usize * model_input::HEIGHT as usize * model_input::CHANNELS
        );
        assert!(pixels.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
