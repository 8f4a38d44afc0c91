#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub path: String,
    pub content: Vec<u8>,
    pub message: String,
}

impl UploadRequest {
    pub fn new(path: impl Into<String>, content: Vec<u8>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content,
            message: message.into(),
        }
    }
}
