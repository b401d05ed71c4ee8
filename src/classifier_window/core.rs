use crate::classifier_window::classification::{ClassificationError, ClassificationOutcome};
use image::DynamicImage;
use std::fmt;
use std::sync::Arc;

pub const INSTRUCTION_TEXT: &str = "Enter the path to an image file and click Classify";
pub const SUCCESS_STATUS: &str = "Classification done successfully.";
pub const FAILURE_STATUS: &str = "Classification failed. Please enter a valid image path.";
pub const RESULT_PREFIX: &str = "Classifier result: ";

/// RGBA pixels of the resized image shown above the result.
#[derive(Clone, PartialEq)]
pub struct Thumbnail {
    pub size: [usize; 2],
    pub rgba: Arc<[u8]>,
}

impl Thumbnail {
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        Self {
            size: [rgba.width() as usize, rgba.height() as usize],
            rgba: rgba.into_raw().into(),
        }
    }
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thumbnail({}x{})", self.size[0], self.size[1])
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub path_input: String,
    pub thumbnail: Option<Thumbnail>,
    /// Bumped each time a new thumbnail is published.
    pub thumbnail_generation: u64,
    pub result_message: String,
    pub status_message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    PathChanged(String),
    ClassifyClicked,
    ThumbnailReady(Thumbnail),
    ClassifyDone(Result<ClassificationOutcome, ClassificationError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Classify { path: String },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::PathChanged(path_input) => (Model { path_input, ..model }, vec![]),

        Msg::ClassifyClicked => {
            let path = model.path_input.trim().to_string();
            (model, vec![Effect::Classify { path }])
        }

        Msg::ThumbnailReady(thumbnail) => (
            Model {
                thumbnail: Some(thumbnail),
                thumbnail_generation: model.thumbnail_generation + 1,
                ..model
            },
            vec![],
        ),

        Msg::ClassifyDone(Ok(outcome)) => (
            Model {
                result_message: format!("{}{}", RESULT_PREFIX, outcome.label),
                status_message: SUCCESS_STATUS.to_string(),
                ..model
            },
            vec![],
        ),

        // The thumbnail is left alone on failure.
        Msg::ClassifyDone(Err(_)) => (
            Model {
                result_message: String::new(),
                status_message: FAILURE_STATUS.to_string(),
                ..model
            },
            vec![],
        ),
    }
}
