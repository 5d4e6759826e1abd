use gloo_file::{Blob, File};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::FormData;

use super::browser;
use crate::validate::UploadMeta;
use crate::{
    AdminStats, ApiError, AuthResponse, ClientConfig, Comment, CommentRequest, CommentResponse,
    DownloadResponse, Endpoint, FileDetail, FileQuery, FileResponse, FilesResponse,
    LeaderboardEntry, LoginRequest, MissingRequest, MissingRequestForm, RateRequest, RateResponse,
    RegisterRequest, ReportRequest, ReportResponse, UploadResponse,
};

/// Calls the Academic-Net REST API, attaching the bearer token when one is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let url = endpoint.url(&self.base);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base);
        let request = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(Endpoint::Login, request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(Endpoint::Register, request).await
    }

    pub async fn universities(&self) -> Result<Vec<String>, ApiError> {
        self.get(Endpoint::Universities).await
    }

    pub async fn branches(&self, university: &str) -> Result<Vec<String>, ApiError> {
        self.get(Endpoint::Branches {
            university: university.to_string(),
        })
        .await
    }

    pub async fn subjects(&self, university: &str, branch: &str) -> Result<Vec<String>, ApiError> {
        self.get(Endpoint::Subjects {
            university: university.to_string(),
            branch: branch.to_string(),
        })
        .await
    }

    pub async fn files(&self, query: FileQuery) -> Result<FilesResponse, ApiError> {
        self.get(Endpoint::Files(query)).await
    }

    pub async fn file(&self, id: &str) -> Result<FileDetail, ApiError> {
        let response: FileResponse = self.get(Endpoint::File(id.to_string())).await?;
        Ok(response.file)
    }

    pub async fn download_url(&self, id: &str) -> Result<String, ApiError> {
        let response: DownloadResponse = self.get(Endpoint::Download(id.to_string())).await?;
        response.resolve()
    }

    pub async fn upload(&self, meta: &UploadMeta, file: &File) -> Result<UploadResponse, ApiError> {
        let form = FormData::new().map_err(|_| ApiError::Request("Failed to create FormData".into()))?;
        for (name, value) in meta.form_fields() {
            form.append_with_str(name, &value)
                .map_err(|_| ApiError::Request(format!("Failed to append {}", name)))?;
        }
        let blob: &Blob = file;
        form.append_with_blob_and_filename("file", blob.as_ref(), &file.name())
            .map_err(|_| ApiError::Request("Failed to append file to FormData".into()))?;

        let url = Endpoint::Upload.url(&self.base);
        let response = self
            .authorize(Request::post(&url))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let upload: UploadResponse = read_json(response).await?;
        if upload.success {
            Ok(upload)
        } else {
            Err(ApiError::Status {
                status: 200,
                message: upload
                    .message
                    .unwrap_or_else(|| "Upload was rejected by the server".to_string()),
            })
        }
    }

    pub async fn rate(&self, id: &str, rating: u8) -> Result<RateResponse, ApiError> {
        self.post_json(Endpoint::Rate(id.to_string()), &RateRequest { rating })
            .await
    }

    pub async fn comment(&self, id: &str, text: String) -> Result<Comment, ApiError> {
        let response: CommentResponse = self
            .post_json(Endpoint::Comment(id.to_string()), &CommentRequest { text })
            .await?;
        Ok(response.comment)
    }

    pub async fn report(&self, id: &str, reason: String) -> Result<ReportResponse, ApiError> {
        self.post_json(Endpoint::Report(id.to_string()), &ReportRequest { reason })
            .await
    }

    pub async fn missing_requests(&self) -> Result<Vec<MissingRequest>, ApiError> {
        self.get(Endpoint::MissingRequests).await
    }

    pub async fn submit_missing_request(&self, form: &MissingRequestForm) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self.post_json(Endpoint::MissingRequests, form).await?;
        Ok(())
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get(Endpoint::Leaderboard).await
    }

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get(Endpoint::AdminStats).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        browser::warn(&format!("Request failed with status: {}", status));
        return Err(ApiError::from_response(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetches the host's `/config`, falling back to defaults when it is unavailable.
pub async fn load_client_config() -> ClientConfig {
    let response = match Request::get("/config").send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            browser::warn(&format!(
                "Config request failed with status: {}",
                response.status()
            ));
            return ClientConfig::default();
        }
        Err(e) => {
            browser::warn(&format!("Config request failed: {:?}", e));
            return ClientConfig::default();
        }
    };

    response.json::<ClientConfig>().await.unwrap_or_else(|e| {
        browser::warn(&format!("Failed to parse config: {:?}", e));
        ClientConfig::default()
    })
}
