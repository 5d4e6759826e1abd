use serde::Deserialize;
use thiserror::Error;

const SESSION_EXPIRED: &str = "Your session has expired, please log in again";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    /// 401; keeps the server's text when it sent one.
    #[error("{}", .message.as_deref().unwrap_or(SESSION_EXPIRED))]
    Unauthorized { message: Option<String> },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Could not build request: {0}")]
    Request(String),

    #[error("The server did not return a download link")]
    MissingDownloadUrl,

    #[error("{0}")]
    Validation(String),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = body_message(body);
        if status == 401 {
            return ApiError::Unauthorized { message };
        }

        ApiError::Status {
            status,
            message: message.unwrap_or_else(|| format!("HTTP {}", status)),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

fn body_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
    parsed
        .error
        .into_iter()
        .chain(parsed.message)
        .find(|m| !m.trim().is_empty())
        .or_else(|| {
            let raw = body.trim();
            (!raw.is_empty() && !raw.starts_with('{')).then(|| raw.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn test_error_field_wins() {
        let err = ApiError::from_response(400, r#"{"error": "Email taken", "message": "x"}"#);
        assert_eq!(err.to_string(), "Email taken");
    }

    #[test]
    fn test_message_field() {
        let err = ApiError::from_response(500, r#"{"message": "Upload failed"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Upload failed".to_string()
            }
        );
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::from_response(404, "  Not Found \n");
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(ApiError::from_response(502, "").to_string(), "HTTP 502");
        assert_eq!(ApiError::from_response(500, "{}").to_string(), "HTTP 500");
        assert_eq!(
            ApiError::from_response(500, r#"{"error": " "}"#).to_string(),
            "HTTP 500"
        );
    }

    #[test]
    fn test_unauthorized_keeps_server_text() {
        let err = ApiError::from_response(401, r#"{"error": "Invalid email or password"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_unauthorized_without_body() {
        let err = ApiError::from_response(401, "");
        assert_eq!(err, ApiError::Unauthorized { message: None });
        assert_eq!(
            err.to_string(),
            "Your session has expired, please log in again"
        );
    }
}
