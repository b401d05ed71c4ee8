use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

pub enum FakeScores {
    Fixed(Vec<f32>),
    Random { num_classes: usize },
    Fail(String),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    scores: FakeScores,
    input_size: (u32, u32),
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, scores: FakeScores) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            scores,
            input_size: (224, 224),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn input_size(&self) -> (u32, u32) {
        self.input_size
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ))?;

        match &self.scores {
            FakeScores::Fixed(scores) => Ok(scores.clone()),
            FakeScores::Random { num_classes } => {
                let mut rng = rand::rng();
                let score_dist = Uniform::new(0.0f32, 1.0)?;
                Ok((0..*num_classes)
                    .map(|_| score_dist.sample(&mut rng))
                    .collect())
            }
            FakeScores::Fail(message) => Err(message.clone().into()),
        }
    }
}
