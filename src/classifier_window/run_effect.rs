use super::classification::{classify_image, open_image};
use super::core::{Effect, Msg, Thumbnail};
use super::main::ClassifierWindow;

impl ClassifierWindow {
    /// Runs an effect to completion on the calling thread.
    pub(super) fn run_effect(&self, effect: Effect) -> Vec<Msg> {
        let _ = self.logger.info(&format!("effect: {:?}", effect));

        match effect {
            Effect::Classify { path } => {
                let image = match open_image(&path, self.image_classifier.input_size()) {
                    Ok(image) => image,
                    Err(e) => {
                        let _ = self.logger.error(e.reason());
                        return vec![Msg::ClassifyDone(Err(e))];
                    }
                };

                let thumbnail = Thumbnail::from_image(&image);

                let result =
                    classify_image(&image, self.image_classifier.as_ref(), &self.label_table);

                match &result {
                    Ok(outcome) => {
                        let _ = self.logger.info(&format!(
                            "{} -> class {} '{}' (score {})",
                            path, outcome.index, outcome.label, outcome.score
                        ));
                    }
                    Err(e) => {
                        let _ = self.logger.error(e.reason());
                    }
                }

                vec![Msg::ThumbnailReady(thumbnail), Msg::ClassifyDone(result)]
            }
        }
    }
}
