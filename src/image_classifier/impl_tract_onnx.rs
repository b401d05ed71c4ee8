use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    /// Loads and optimizes the network once. The resulting plan only runs
    /// forward passes.
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger
            .with_namespace("image_classifier")
            .with_namespace("tract_onnx");

        logger.info(&format!("Loading model {}...", config.onnx_model_path))?;

        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(
                    f32::datum_type(),
                    tvec!(1, 3, height as usize, width as usize),
                ),
            )?
            .into_optimized()?
            .into_runnable()?;

        logger.info("Model loaded")?;

        Ok(Self {
            model,
            config,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn input_size(&self) -> (u32, u32) {
        let (height, width) = self.config.input_shape;
        (width, height)
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let (width, height) = self.input_size();
        let input = resize_image_to_tensor(image, width, height, &self.config.normalization);

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let output = outputs
            .first()
            .ok_or("Model produced no outputs")?
            .to_array_view::<f32>()?;

        // [1, num_classes] for a single-image batch
        let scores: Vec<f32> = output.iter().copied().collect();

        self.logger
            .info(&format!("Forward pass produced {} scores", scores.len()))?;

        Ok(scores)
    }
}
