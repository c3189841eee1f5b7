use std::sync::Arc;

use log::debug;
use reqwest::multipart::{Form, Part};

use crate::api_clients::portal_client::PortalClient;
use crate::api_clients::request::RequestDescriptor;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// The calling user's profile and picture upload.
#[derive(Debug)]
pub struct ProfileService {
    client: Arc<PortalClient>,
}

impl ProfileService {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> AppResult<User> {
        let envelope = self.client.get("/user/profile", &[]).await?;
        envelope.field("user")
    }

    /// Upload a new profile picture. Sent as multipart so the transport sets
    /// the boundary; returns the stored file name the backend serves the
    /// image under.
    pub async fn upload_picture(&self, filename: &str, bytes: Vec<u8>) -> AppResult<String> {
        if bytes.is_empty() {
            return Err(AppError::InvalidArgument(
                "profile picture is empty".to_string(),
            ));
        }
        debug!("Uploading profile picture {} ({} bytes)", filename, bytes.len());

        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("profilePicture", part);
        let descriptor = RequestDescriptor::put("/user/profile-picture").multipart(form);

        let envelope = self.client.request(descriptor).await?;
        envelope.field("profilePicture")
    }
}
