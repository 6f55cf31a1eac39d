use serde::Deserialize;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const OWNER: &str = "websages";
pub const REPOSITORY: &str = "hates-software";
pub const ISSUE_NUMBER: u64 = 1;

const USER_AGENT: &str = "cantchart-bot";

/// One comment on the excuse issue. Fields are optional so a malformed
/// entry can be told apart from a parse failure of the whole payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub body: Option<String>,
    pub user: Option<CommentUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentUser {
    pub login: Option<String>,
}

impl Comment {
    pub fn author(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .filter(|login| !login.is_empty())
    }
}

/// Status and body exactly as GitHub sent them.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        GitHubClient {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn comments_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.base_url, OWNER, REPOSITORY, ISSUE_NUMBER
        )
    }

    pub async fn fetch_issue_comments(&self, token: &str) -> Result<RawResponse, reqwest::Error> {
        let response = self
            .client
            .get(self.comments_url())
            .header("Authorization", format!("Bearer {}", token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}
