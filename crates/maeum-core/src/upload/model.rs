/// An image file picked by the user, kept in memory until reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDrawing {
    /// Original file name, sent along with the bytes
    pub name: String,
    /// MIME type of the file (e.g. `image/png`)
    pub mime_type: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl UploadedDrawing {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
