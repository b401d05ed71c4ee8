use crate::classifier_window::core::{init, transition, Effect, Model, Msg};
use crate::config::Config;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::label_table::LabelTable;
use crate::library::logger::interface::Logger;
use std::collections::VecDeque;
use std::sync::Arc;

pub struct ClassifierWindow {
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
    pub(super) image_classifier: Box<dyn ImageClassifier>,
    pub(super) label_table: LabelTable,
    pub(super) model: Model,
    pub(super) texture: Option<(u64, egui::TextureHandle)>,
    pub(super) focused_once: bool,
}

impl ClassifierWindow {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Box<dyn ImageClassifier>,
        label_table: LabelTable,
    ) -> Self {
        let (model, effects) = init();

        let mut window = Self {
            logger: logger.with_namespace("classifier_window"),
            image_classifier,
            label_table,
            model,
            texture: None,
            focused_once: false,
        };

        window.run_effects(effects);

        window
    }

    /// Builds the window from the hardcoded resources. A missing label file
    /// or model is fatal.
    pub fn load(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let label_table = LabelTable::load(&config.label_file_path)?;
        if label_table.is_empty() {
            return Err(format!("Label file {} has no labels", config.label_file_path).into());
        }
        logger.info(&format!(
            "Loaded {} labels from {}",
            label_table.len(),
            config.label_file_path
        ))?;

        let image_classifier = ImageClassifierTractOnnx::new(config.model.clone(), logger.clone())?;

        Ok(Self::new(
            logger,
            Box::new(image_classifier),
            label_table,
        ))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Applies `msg` and every message its effects produce before returning.
    pub fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);

        while let Some(msg) = queue.pop_front() {
            let _ = self.logger.info(&format!("msg: {:?}", msg));

            let (new_model, effects) = transition(std::mem::take(&mut self.model), msg);
            self.model = new_model;

            for effect in effects {
                queue.extend(self.run_effect(effect));
            }
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            for msg in self.run_effect(effect) {
                self.dispatch(msg);
            }
        }
    }
}
