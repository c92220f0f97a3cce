//! Wire format of the image-generation endpoint

use crate::generation::prompt::PromptSelection;
use crate::io::configuration::{
    DEFAULT_CFG_SCALE, DEFAULT_COURSE_ID, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH,
    DEFAULT_STEPS, DEFAULT_USER_ID,
};
use serde::{Deserialize, Serialize};

/// JSON body posted to the generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Requesting user
    pub userid: String,
    /// Course the image is generated for
    #[serde(rename = "courseID")]
    pub course_id: String,
    /// Comma-separated prompt terms
    pub prompt: String,
    /// Diffusion steps
    pub steps: u32,
    /// Classifier-free guidance scale
    pub cfg_scale: f32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl GenerateRequest {
    /// Build a request with default parameters for a prompt selection
    pub fn from_selection(selection: &PromptSelection) -> Self {
        Self {
            userid: DEFAULT_USER_ID.to_string(),
            course_id: DEFAULT_COURSE_ID.to_string(),
            prompt: selection.compose(),
            steps: DEFAULT_STEPS,
            cfg_scale: DEFAULT_CFG_SCALE,
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

/// JSON body returned by the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Location of the generated image
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
