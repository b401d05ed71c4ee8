use crate::image_classifier::argmax::argmax;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::tract::image::resize_image;
use crate::label_table::LabelTable;
use image::DynamicImage;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutcome {
    pub index: usize,
    pub label: String,
    pub score: f32,
}

/// Every way a classification attempt can go wrong. Causes are not told
/// apart; `reason` only feeds the log.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationError {
    Failed { reason: String },
}

impl ClassificationError {
    pub fn failed(reason: impl Into<String>) -> Self {
        ClassificationError::Failed {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            ClassificationError::Failed { reason } => reason,
        }
    }
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "classification failed: {}", self.reason())
    }
}

impl std::error::Error for ClassificationError {}

/// Opens and decodes `path`, then stretches it to the model's input size.
pub fn open_image(path: &str, size: (u32, u32)) -> Result<DynamicImage, ClassificationError> {
    let image = image::open(path)
        .map_err(|e| ClassificationError::failed(format!("Failed to open image {}: {}", path, e)))?;

    Ok(resize_image(&image, size.0, size.1))
}

pub fn classify_image(
    image: &DynamicImage,
    image_classifier: &dyn ImageClassifier,
    label_table: &LabelTable,
) -> Result<ClassificationOutcome, ClassificationError> {
    let scores = image_classifier
        .classify(image)
        .map_err(|e| ClassificationError::failed(format!("Inference failed: {}", e)))?;

    let index = argmax(&scores)
        .ok_or_else(|| ClassificationError::failed("Model produced no usable scores"))?;

    let label = label_table.label_for(index).ok_or_else(|| {
        ClassificationError::failed(format!(
            "No label for class {} ({} labels loaded)",
            index,
            label_table.len()
        ))
    })?;

    Ok(ClassificationOutcome {
        index,
        label: label.to_string(),
        score: scores[index],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_keeps_reason() {
        let error = ClassificationError::failed("Failed to open image /nope.png");

        assert_eq!(error.reason(), "Failed to open image /nope.png");
        assert_eq!(
            error.to_string(),
            "classification failed: Failed to open image /nope.png"
        );
    }

    #[test]
    fn test_open_image_resizes_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::DynamicImage::new_rgb8(40, 10).save(&path).unwrap();

        let image = open_image(path.to_str().unwrap(), (224, 224)).unwrap();

        assert_eq!((image.width(), image.height()), (224, 224));
    }

    #[test]
    fn test_open_image_missing_file() {
        let result = open_image("/definitely/not/here.png", (224, 224));

        assert!(result.unwrap_err().reason().contains("/definitely/not/here.png"));
    }
}
