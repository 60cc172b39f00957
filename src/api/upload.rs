//! Image upload endpoint.

use serde::Deserialize;

use crate::ports::MultipartFile;

use super::client::decode;
use super::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct UploadEnvelope {
    data: UploadData,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

impl ApiClient {
    /// `POST /api/upload/image` as `multipart/form-data` with the file
    /// under the `image` field. Returns the absolute, publicly reachable
    /// URL of the stored image.
    pub async fn upload_image(
        &self,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let file = MultipartFile {
            field: "image".to_string(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        };
        let envelope: UploadEnvelope = decode(self.post_multipart("/api/upload/image", file).await?)?;
        Ok(envelope.data.url)
    }
}
