use image::DynamicImage;

pub trait ImageClassifier {
    /// Square input resolution the model expects, as (width, height).
    fn input_size(&self) -> (u32, u32);

    /// Runs one forward pass and returns a score per class, indexed by class id.
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
