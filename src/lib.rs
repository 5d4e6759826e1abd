use serde::{Deserialize, Serialize};

pub mod config;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod pagination;
pub mod validate;

pub use config::ClientConfig;
pub use endpoint::{Endpoint, FileQuery, SortOrder};
pub use error::ApiError;
pub use pagination::Pagination;

/// Semesters offered in every semester dropdown.
pub const SEMESTERS: std::ops::RangeInclusive<u8> = 1..=8;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub university: String,
    pub branch: String,
    pub role: Option<String>,
    pub points: u64,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub university: String,
    pub branch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub subject: String,
    pub semester: Option<u8>,
    pub university: String,
    pub branch: String,
    pub uploader: String,
    pub avg_rating: Option<f64>,
    pub rating_count: u64,
    pub downloads: u64,
    pub file_type: String,
    pub created_at: Option<String>,
}

impl FileSummary {
    /// Title shown in listings; falls back when the server sent none.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled document"
        } else {
            &self.title
        }
    }

    /// Folds a successful rating into the cached aggregate. Without a count
    /// from the server the new vote is counted locally.
    pub fn apply_rating(&mut self, response: &RateResponse) {
        if response.avg_rating.is_some() {
            self.avg_rating = response.avg_rating;
        }
        self.rating_count = response.rating_count.unwrap_or(self.rating_count + 1);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FileDetail {
    #[serde(flatten)]
    pub summary: FileSummary,
    pub description: String,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesResponse {
    pub files: Vec<FileSummary>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResponse {
    pub file: FileDetail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadFile {
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadResponse {
    pub url: Option<String>,
    pub file: Option<DownloadFile>,
}

impl DownloadResponse {
    /// The link to open: top-level `url` first, then `file.downloadUrl`.
    pub fn resolve(self) -> Result<String, ApiError> {
        let nested = self.file.and_then(|f| f.download_url);
        self.url
            .into_iter()
            .chain(nested)
            .find(|url| !url.trim().is_empty())
            .ok_or(ApiError::MissingDownloadUrl)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub success: bool,
    pub file: Option<FileSummary>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRequest {
    pub rating: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateResponse {
    pub avg_rating: Option<f64>,
    pub rating_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingRequestForm {
    pub subject: String,
    pub semester: u8,
    pub university: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MissingRequest {
    #[serde(alias = "_id")]
    pub id: String,
    pub subject: String,
    pub semester: Option<u8>,
    pub university: String,
    pub requested_by: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub user: String,
    pub points: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub uploads: u64,
    pub downloads: u64,
    pub active_users: u64,
}

/// How the file list is laid out.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "list" => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }
}

#[cfg(feature = "frontend")]
pub mod frontend;

#[cfg(feature = "frontend")]
pub use frontend::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_rating_bumps_count() {
        let mut file = FileSummary {
            avg_rating: Some(4.0),
            rating_count: 8,
            ..Default::default()
        };
        let response: RateResponse = serde_json::from_str(r#"{"avgRating": 4.5}"#).unwrap();
        file.apply_rating(&response);
        assert_eq!(file.avg_rating, Some(4.5));
        assert_eq!(file.rating_count, 9);

        let response: RateResponse =
            serde_json::from_str(r#"{"avgRating": 4.2, "ratingCount": 12}"#).unwrap();
        file.apply_rating(&response);
        assert_eq!(file.avg_rating, Some(4.2));
        assert_eq!(file.rating_count, 12);
    }

    #[test]
    fn test_file_summary_defaults() {
        let file: FileSummary = serde_json::from_str(r#"{"_id": "abc"}"#).unwrap();
        assert_eq!(file.id, "abc");
        assert_eq!(file.display_title(), "Untitled document");
        assert_eq!(file.avg_rating, None);
        assert_eq!(file.downloads, 0);
    }

    #[test]
    fn test_file_summary_camel_case() {
        let json = r#"{
            "id": "7",
            "title": "DBMS notes",
            "semester": 4,
            "avgRating": 4.5,
            "ratingCount": 2,
            "fileType": "pdf"
        }"#;
        let file: FileSummary = serde_json::from_str(json).unwrap();
        assert_eq!(file.semester, Some(4));
        assert_eq!(file.avg_rating, Some(4.5));
        assert_eq!(file.rating_count, 2);
        assert_eq!(file.file_type, "pdf");
    }

    #[test]
    fn test_file_detail_flattens_summary() {
        let json = r#"{"file": {"id": "1", "title": "OS", "description": "unit 1",
            "comments": [{"user": "asha", "text": "thanks"}]}}"#;
        let response: FileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.file.summary.title, "OS");
        assert_eq!(response.file.description, "unit 1");
        assert_eq!(response.file.comments.len(), 1);
        assert_eq!(response.file.comments[0].user, "asha");
    }

    #[test]
    fn test_files_response_missing_fields() {
        let response: FilesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.files.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_download_prefers_top_level_url() {
        let response: DownloadResponse = serde_json::from_str(
            r#"{"url": "https://cdn/a.pdf", "file": {"downloadUrl": "https://cdn/b.pdf"}}"#,
        )
        .unwrap();
        assert_eq!(response.resolve().unwrap(), "https://cdn/a.pdf");
    }

    #[test]
    fn test_download_falls_back_to_nested_url() {
        let response: DownloadResponse =
            serde_json::from_str(r#"{"file": {"downloadUrl": "https://cdn/b.pdf"}}"#).unwrap();
        assert_eq!(response.resolve().unwrap(), "https://cdn/b.pdf");

        let blank: DownloadResponse =
            serde_json::from_str(r#"{"url": "", "file": {"downloadUrl": "https://cdn/c.pdf"}}"#)
                .unwrap();
        assert_eq!(blank.resolve().unwrap(), "https://cdn/c.pdf");
    }

    #[test]
    fn test_download_without_url() {
        let response: DownloadResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.resolve(), Err(ApiError::MissingDownloadUrl)));
    }

    #[test]
    fn test_auth_response_and_admin_role() {
        let json = r#"{"token": "t0k", "user": {"name": "Ravi", "role": "admin", "points": 12}}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.token, "t0k");
        assert!(auth.user.is_admin());
        assert_eq!(auth.user.points, 12);
        assert!(!User::default().is_admin());
    }

    #[test]
    fn test_admin_stats_keys() {
        let stats: AdminStats =
            serde_json::from_str(r#"{"uploads": 3, "downloads": 9, "activeUsers": 2}"#).unwrap();
        assert_eq!(
            stats,
            AdminStats {
                uploads: 3,
                downloads: 9,
                active_users: 2
            }
        );
    }

    #[test]
    fn test_view_mode() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::parse(ViewMode::List.as_str()), ViewMode::List);
        assert_eq!(ViewMode::parse("anything"), ViewMode::Grid);
    }
}
