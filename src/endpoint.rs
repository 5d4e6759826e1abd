//! Paths and query strings of the Academic-Net REST API.

use urlencoding::encode;

use crate::pagination::DEFAULT_PER_PAGE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Rating,
    Downloads,
    Title,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Rating,
        SortOrder::Downloads,
        SortOrder::Title,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Rating => "rating",
            SortOrder::Downloads => "downloads",
            SortOrder::Title => "title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Rating => "Top rated",
            SortOrder::Downloads => "Most downloaded",
            SortOrder::Title => "Title (A-Z)",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// Filters and paging for `GET /files`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileQuery {
    pub university: String,
    pub branch: String,
    pub semester: Option<u8>,
    pub subject: String,
    pub search: String,
    pub page: u32,
    pub per_page: u32,
    pub sort: SortOrder,
}

impl Default for FileQuery {
    fn default() -> Self {
        Self {
            university: String::new(),
            branch: String::new(),
            semester: None,
            subject: String::new(),
            search: String::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            sort: SortOrder::default(),
        }
    }
}

impl FileQuery {
    /// Query string without the leading `?`. Empty filters are left out.
    pub fn to_query_string(&self) -> String {
        let semester = self.semester.map(|s| s.to_string()).unwrap_or_default();
        let page = self.page.max(1).to_string();
        let per_page = self.per_page.max(1).to_string();

        let pairs = [
            ("univ", self.university.trim()),
            ("branch", self.branch.trim()),
            ("semester", semester.as_str()),
            ("subject", self.subject.trim()),
            ("q", self.search.trim()),
            ("page", page.as_str()),
            ("perPage", per_page.as_str()),
            ("sort", self.sort.as_str()),
        ];

        join_pairs(&pairs)
    }
}

fn join_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn with_query(path: &str, query: String) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Login,
    Register,
    Universities,
    Branches { university: String },
    Subjects { university: String, branch: String },
    Files(FileQuery),
    File(String),
    Download(String),
    Upload,
    Rate(String),
    Comment(String),
    Report(String),
    MissingRequests,
    Leaderboard,
    AdminStats,
}

impl Endpoint {
    /// Path and query relative to the API root.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/auth/login".to_string(),
            Endpoint::Register => "/auth/register".to_string(),
            Endpoint::Universities => "/metadata/universities".to_string(),
            Endpoint::Branches { university } => with_query(
                "/metadata/branches",
                join_pairs(&[("univ", university.as_str())]),
            ),
            Endpoint::Subjects { university, branch } => with_query(
                "/metadata/subjects",
                join_pairs(&[("univ", university.as_str()), ("branch", branch.as_str())]),
            ),
            Endpoint::Files(query) => with_query("/files", query.to_query_string()),
            Endpoint::File(id) => format!("/files/{}", encode(id)),
            Endpoint::Download(id) => format!("/files/{}/download", encode(id)),
            Endpoint::Upload => "/files/upload".to_string(),
            Endpoint::Rate(id) => format!("/files/{}/rate", encode(id)),
            Endpoint::Comment(id) => format!("/files/{}/comment", encode(id)),
            Endpoint::Report(id) => format!("/files/{}/report", encode(id)),
            Endpoint::MissingRequests => "/missing_requests".to_string(),
            Endpoint::Leaderboard => "/leaderboard".to_string(),
            Endpoint::AdminStats => "/admin/stats".to_string(),
        }
    }

    /// Full URL under `base`, which may be empty, relative or absolute.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_only_has_paging() {
        let query = FileQuery::default();
        assert_eq!(
            query.to_query_string(),
            format!("page=1&perPage={}&sort=newest", DEFAULT_PER_PAGE)
        );
    }

    #[test]
    fn test_query_encodes_values() {
        let query = FileQuery {
            university: "Anna University".to_string(),
            branch: "CSE".to_string(),
            semester: Some(3),
            subject: "Data Structures & Algorithms".to_string(),
            search: "  trees  ".to_string(),
            page: 2,
            per_page: 24,
            sort: SortOrder::Rating,
        };
        assert_eq!(
            query.to_query_string(),
            "univ=Anna%20University&branch=CSE&semester=3\
             &subject=Data%20Structures%20%26%20Algorithms&q=trees\
             &page=2&perPage=24&sort=rating"
        );
    }

    #[test]
    fn test_query_clamps_zero_page() {
        let query = FileQuery {
            page: 0,
            per_page: 0,
            ..FileQuery::default()
        };
        assert!(query.to_query_string().starts_with("page=1&perPage=1"));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Login.path(), "/auth/login");
        assert_eq!(
            Endpoint::Branches {
                university: "IIT Delhi".to_string()
            }
            .path(),
            "/metadata/branches?univ=IIT%20Delhi"
        );
        assert_eq!(
            Endpoint::Subjects {
                university: "VTU".to_string(),
                branch: "ECE".to_string()
            }
            .path(),
            "/metadata/subjects?univ=VTU&branch=ECE"
        );
        assert_eq!(Endpoint::Download("a/b".to_string()).path(), "/files/a%2Fb/download");
        assert_eq!(Endpoint::Rate("42".to_string()).path(), "/files/42/rate");
        assert_eq!(Endpoint::MissingRequests.path(), "/missing_requests");
    }

    #[test]
    fn test_metadata_paths_without_filters() {
        let branches = Endpoint::Branches {
            university: String::new(),
        };
        assert_eq!(branches.path(), "/metadata/branches");

        let subjects = Endpoint::Subjects {
            university: String::new(),
            branch: String::new(),
        };
        assert_eq!(subjects.path(), "/metadata/subjects");

        let subjects = Endpoint::Subjects {
            university: "IIT Delhi".to_string(),
            branch: String::new(),
        };
        assert_eq!(subjects.path(), "/metadata/subjects?univ=IIT%20Delhi");
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(Endpoint::Leaderboard.url("/api/"), "/api/leaderboard");
        assert_eq!(
            Endpoint::AdminStats.url("https://academic.example/api"),
            "https://academic.example/api/admin/stats"
        );
        assert_eq!(Endpoint::Upload.url(""), "/files/upload");
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("downloads"), SortOrder::Downloads);
        assert_eq!(SortOrder::parse("bogus"), SortOrder::Newest);
    }
}
