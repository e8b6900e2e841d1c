use super::DocumentFormat;

/// One file of a batch request, as received from the client.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Vec<u8>,
    pub position: usize,
}

impl UploadedFile {
    pub fn new(filename: String, content: Vec<u8>, position: usize) -> Self {
        Self {
            filename,
            content,
            position,
        }
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_filename(&self.filename)
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}
