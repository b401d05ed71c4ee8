use crate::image_classifier::models::model_config::ModelConfig;
use chrono::{Offset, Utc};

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub label_file_path: String,
    pub model: ModelConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Image Classifier".to_string(),
            window_size: [600.0, 400.0],
            label_file_path: "imagenet_classes.txt".to_string(),
            model: ModelConfig::default(),
            logger_timezone: Utc.fix(),
        }
    }
}
