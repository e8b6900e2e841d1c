/// Vision-model output for one uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAnalysis {
    pub file_name: String,
    pub analysis: String,
    pub story: Option<String>,
}
