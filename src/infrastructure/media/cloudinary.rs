//! Cloudinary signed upload over HTTP

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::application::ports::{MediaError, MediaFile, MediaUploader};
use crate::config::MediaConfig;
use crate::shared::unix_now;

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

pub struct CloudinaryUploader {
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryUploader {
    pub fn from_config(config: &MediaConfig) -> Self {
        Self {
            client: Client::new(),
            cloud_name: config.cloudinary_cloud_name.clone(),
            api_key: config.cloudinary_api_key.clone(),
            api_secret: config.cloudinary_api_secret.clone(),
            folder: config.cloudinary_folder.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/image/upload", API_BASE, self.cloud_name)
    }

    /// Signed parameters, sorted by name, excluding `file` and `api_key`.
    fn signed_params(&self, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(folder) = &self.folder {
            params.push(("folder", folder.clone()));
        }
        params.push(("timestamp", timestamp.to_string()));
        params
    }

    /// Hex SHA-256 of `k1=v1&k2=v2` followed by the API secret.
    fn sign(&self, params: &[(&str, String)]) -> String {
        let joined = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, file: MediaFile) -> Result<String, MediaError> {
        let params = self.signed_params(unix_now());
        let signature = self.sign(&params);

        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name.clone());
        if let Some(ct) = &file.content_type {
            part = part
                .mime_str(ct)
                .map_err(|e| MediaError::Transport(e.to_string()))?;
        }

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (k, v) in params {
            form = form.text(k, v);
        }

        let resp = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: UploadResponse = resp
            .json()
            .await
            .map_err(|e| MediaError::InvalidResponse(e.to_string()))?;
        Ok(parsed.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploader(folder: Option<&str>) -> CloudinaryUploader {
        CloudinaryUploader::from_config(&MediaConfig {
            cloudinary_cloud_name: "demo".into(),
            cloudinary_api_key: "key".into(),
            cloudinary_api_secret: "abcd".into(),
            cloudinary_folder: folder.map(str::to_string),
            ..MediaConfig::default()
        })
    }

    #[test]
    fn signature_covers_sorted_params_and_secret() {
        let up = uploader(Some("stylists"));
        let params = up.signed_params(1315060510);
        assert_eq!(params[0].0, "folder");
        assert_eq!(params[1].0, "timestamp");

        let mut hasher = Sha256::new();
        hasher.update(b"folder=stylists&timestamp=1315060510abcd");
        assert_eq!(up.sign(&params), hex::encode(hasher.finalize()));
    }

    #[test]
    fn endpoint_targets_the_cloud() {
        assert_eq!(
            uploader(None).endpoint(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }
}
