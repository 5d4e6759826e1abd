//! Checks run before a request leaves the browser.

use crate::{ApiError, LoginRequest, MissingRequestForm, RegisterRequest, SEMESTERS};

pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;
pub const MAX_COMMENT_CHARS: usize = 1000;
pub const MIN_PASSWORD_CHARS: usize = 6;

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

fn require(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(format!("Please enter {}", field)))
    } else {
        Ok(())
    }
}

fn require_semester(semester: Option<u8>) -> Result<u8, ApiError> {
    semester
        .filter(|s| SEMESTERS.contains(s))
        .ok_or_else(|| invalid("Please choose a semester between 1 and 8"))
}

pub fn login(request: &LoginRequest) -> Result<(), ApiError> {
    require(&request.email, "your email")?;
    require(&request.password, "your password")
}

pub fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    require(&request.name, "your name")?;
    require(&request.email, "your email")?;
    if !request.email.contains('@') {
        return Err(invalid("Please enter a valid email address"));
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApiError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_CHARS
        )));
    }
    require(&request.university, "your university")?;
    require(&request.branch, "your branch")
}

/// Metadata sent alongside an uploaded file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadMeta {
    pub title: String,
    pub university: String,
    pub branch: String,
    pub semester: Option<u8>,
    pub subject: String,
    pub description: String,
}

impl UploadMeta {
    pub fn validate(&self, file_size: Option<u64>) -> Result<(), ApiError> {
        let size = file_size.ok_or_else(|| invalid("Please choose a file to upload"))?;
        if size == 0 {
            return Err(invalid("The chosen file is empty"));
        }
        if size > MAX_UPLOAD_BYTES {
            return Err(ApiError::Validation(format!(
                "File too large. Maximum size is {} MB",
                MAX_UPLOAD_BYTES / 1024 / 1024
            )));
        }
        require(&self.title, "a title")?;
        require(&self.university, "a university")?;
        require(&self.branch, "a branch")?;
        require_semester(self.semester)?;
        require(&self.subject, "a subject")
    }

    /// Text fields of the multipart body, in send order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_string()),
            ("university", self.university.clone()),
            ("branch", self.branch.clone()),
            (
                "semester",
                self.semester.map(|s| s.to_string()).unwrap_or_default(),
            ),
            ("subject", self.subject.clone()),
            ("description", self.description.trim().to_string()),
        ]
    }
}

pub fn rating(value: u8) -> Result<u8, ApiError> {
    if (1..=5).contains(&value) {
        Ok(value)
    } else {
        Err(invalid("Ratings go from 1 to 5 stars"))
    }
}

/// Returns the trimmed comment body.
pub fn comment(text: &str) -> Result<String, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(invalid("Comment cannot be empty"));
    }
    if text.chars().count() > MAX_COMMENT_CHARS {
        return Err(ApiError::Validation(format!(
            "Comments are limited to {} characters",
            MAX_COMMENT_CHARS
        )));
    }
    Ok(text.to_string())
}

pub fn report_reason(reason: &str) -> Result<String, ApiError> {
    let reason = reason.trim();
    if reason.is_empty() {
        Err(invalid("Please tell us why you are reporting this file"))
    } else {
        Ok(reason.to_string())
    }
}

pub fn missing_request(
    subject: &str,
    semester: Option<u8>,
    university: &str,
) -> Result<MissingRequestForm, ApiError> {
    require(subject, "a subject")?;
    let semester = require_semester(semester)?;
    require(university, "a university")?;
    Ok(MissingRequestForm {
        subject: subject.trim().to_string(),
        semester,
        university: university.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> UploadMeta {
        UploadMeta {
            title: " Compiler notes ".to_string(),
            university: "VTU".to_string(),
            branch: "CSE".to_string(),
            semester: Some(6),
            subject: "Compiler Design".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_upload_ok() {
        assert!(meta().validate(Some(2048)).is_ok());
    }

    #[test]
    fn test_upload_requires_file() {
        assert_eq!(
            meta().validate(None).unwrap_err().to_string(),
            "Please choose a file to upload"
        );
        assert!(meta().validate(Some(0)).is_err());
        assert!(meta().validate(Some(MAX_UPLOAD_BYTES + 1)).is_err());
        assert!(meta().validate(Some(MAX_UPLOAD_BYTES)).is_ok());
    }

    #[test]
    fn test_upload_requires_semester_in_range() {
        let mut m = meta();
        m.semester = Some(9);
        assert!(m.validate(Some(10)).is_err());
        m.semester = None;
        assert!(m.validate(Some(10)).is_err());
    }

    #[test]
    fn test_upload_form_fields() {
        let fields = meta().form_fields();
        assert_eq!(fields[0], ("title", "Compiler notes".to_string()));
        assert_eq!(fields[3], ("semester", "6".to_string()));
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_register() {
        let mut request = RegisterRequest {
            name: "Meera".to_string(),
            email: "meera@college.edu".to_string(),
            password: "secret1".to_string(),
            university: "VTU".to_string(),
            branch: "ECE".to_string(),
        };
        assert!(register(&request).is_ok());

        request.password = "short".to_string();
        assert!(register(&request).is_err());

        request.password = "secret1".to_string();
        request.email = "meera".to_string();
        assert!(register(&request).is_err());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest {
            email: "a@b.c".to_string(),
            password: "   ".to_string(),
        };
        assert_eq!(
            login(&request).unwrap_err().to_string(),
            "Please enter your password"
        );
    }

    #[test]
    fn test_rating_bounds() {
        assert!(rating(0).is_err());
        assert_eq!(rating(5).unwrap(), 5);
        assert!(rating(6).is_err());
    }

    #[test]
    fn test_comment() {
        assert_eq!(comment("  nice notes \n").unwrap(), "nice notes");
        assert!(comment(" \n ").is_err());
        assert!(comment(&"x".repeat(MAX_COMMENT_CHARS + 1)).is_err());
    }

    #[test]
    fn test_missing_request() {
        let form = missing_request(" Thermodynamics ", Some(3), "Anna University").unwrap();
        assert_eq!(form.subject, "Thermodynamics");
        assert_eq!(form.semester, 3);
        assert!(missing_request("", Some(3), "Anna University").is_err());
        assert!(missing_request("Maths", Some(3), "").is_err());
    }
}
